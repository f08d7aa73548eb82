//! # Screen Configuration
//!
//! ```toml
//! initial_height = 170
//!
//! [binding]
//! notify_policy = "always"
//! placeholder = "-"
//! sync_on_activate = false
//! ```
//!
//! The demo binary reads the file named by [`CONFIG_ENV`] when it is set and
//! falls back to defaults otherwise.

use crate::model::UserViewModel;
use binding_framework::{BindingConfig, BindingError};
use serde::Deserialize;
use std::path::Path;
use tracing::info;

/// Environment variable holding the path of a TOML config file.
pub const CONFIG_ENV: &str = "BINDING_RECIPE_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScreenConfig {
    /// Height the view model starts with when first created.
    pub initial_height: i32,
    pub binding: BindingConfig,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            initial_height: UserViewModel::DEFAULT_HEIGHT,
            binding: BindingConfig::default(),
        }
    }
}

impl ScreenConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, BindingError> {
        toml::from_str(source).map_err(|e| BindingError::Config(e.to_string()))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, BindingError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .map_err(|e| BindingError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&source)
    }

    /// Loads from the file named by [`CONFIG_ENV`], or returns defaults.
    pub fn from_env() -> Result<Self, BindingError> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => {
                info!(path = ?path, "Loading screen config");
                Self::load(path)
            }
            None => Ok(Self::default()),
        }
    }
}
