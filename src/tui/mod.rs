//! Interactive selection menu.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: Pure data types (Key, Action, Transition)
//! - `update`: Pure key mapping and wraparound transitions
//! - `view`: Pure rendering to styled lines, plus the paint step
//! - `theme`: Style constants
//! - `input`: Raw-mode keyboard session (effects)
//! - `run`: The render → read → transition loop (effects)

pub mod input;
pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;
