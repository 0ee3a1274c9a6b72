//! Menu definition files.
//!
//! A definition is a JSON document with a title, an optional width and an
//! ordered item list:
//!
//! ```json
//! { "title": "Main Menu", "width": 60,
//!   "items": [ { "label": "🧱 Tetris", "value": "block-stacking" } ] }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::types::{DEFAULT_WIDTH, Menu, MenuError, MenuItem};

/// Directory under the user config dir holding the default definition.
pub const CONFIG_DIR_NAME: &str = "devware-menu";

/// File name of the default definition.
pub const CONFIG_FILE_NAME: &str = "menu.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid menu definition in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Invalid(#[from] MenuError),
    #[error("no user configuration directory on this platform")]
    NoConfigDir,
}

/// On-disk shape of a menu.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MenuFile {
    pub title: String,
    #[serde(default = "default_width")]
    pub width: usize,
    #[serde(default)]
    pub items: Vec<MenuItem>,
}

fn default_width() -> usize {
    DEFAULT_WIDTH
}

impl MenuFile {
    /// Build a validated menu, optionally overriding the file's width.
    pub fn into_menu(self, width: Option<usize>) -> Result<Menu, MenuError> {
        Menu::new(self.title, self.items).with_width(width.unwrap_or(self.width))
    }
}

/// `<config dir>/devware-menu/menu.json`.
pub fn default_menu_path() -> Result<PathBuf, ConfigError> {
    let base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
    Ok(base.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Read and parse a definition file.
pub fn load_menu_file(path: &Path) -> Result<MenuFile, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a definition and turn it into a menu in one step.
pub fn load_menu(path: &Path, width: Option<usize>) -> Result<Menu, ConfigError> {
    let file = load_menu_file(path)?;
    Ok(file.into_menu(width)?)
}

// ============================================================================
// TESTS
// ============================================================================
