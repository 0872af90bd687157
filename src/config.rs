use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// What to do with a `menu end` that has no open menu to close.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum MenuEndPolicy {
    /// Log a warning and keep building at the root level.
    #[default]
    Ignore,
    /// Abort with `Error::UnbalancedMenuEnd`.
    Error,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_root_title")]
    pub root_title: String,

    #[serde(default = "default_unwrap_single_submenu")]
    pub unwrap_single_submenu: bool,

    #[serde(default)]
    pub menu_end_policy: MenuEndPolicy,
}

fn default_root_title() -> String {
    "main".to_string()
}
fn default_unwrap_single_submenu() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Config {
            root_title: default_root_title(),
            unwrap_single_submenu: true,
            menu_end_policy: MenuEndPolicy::Ignore,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Config> {
        let text = fs::read_to_string(path).map_err(|source| Error::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| Error::InvalidConfig {
            path: path.to_path_buf(),
            source,
        })
    }
}
