//! devware-menu: keyboard-driven terminal selection menu.

pub mod config;
pub mod layout;
pub mod tui;
pub mod types;

pub use tui::run::{show, show_with};
pub use types::{CancelReason, EXIT, Menu, MenuError, MenuItem, Outcome};
