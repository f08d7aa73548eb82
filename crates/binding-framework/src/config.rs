//! # Binding Configuration
//!
//! Knobs shared by every binding, read from TOML. Every key is optional.
//!
//! ```toml
//! notify_policy = "on_change"   # or "always" (default)
//! placeholder = "n/a"           # shown when a value has no text
//! sync_on_activate = true       # push the current value on activation
//! ```

use crate::error::BindingError;
use crate::property::NotifyPolicy;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Text shown when a value cannot be formatted.
pub const DEFAULT_PLACEHOLDER: &str = "-";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BindingConfig {
    pub notify_policy: NotifyPolicy,
    pub placeholder: String,
    pub sync_on_activate: bool,
}

impl Default for BindingConfig {
    fn default() -> Self {
        Self {
            notify_policy: NotifyPolicy::Always,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            sync_on_activate: false,
        }
    }
}

impl BindingConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, BindingError> {
        toml::from_str(source).map_err(|e| BindingError::Config(e.to_string()))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, BindingError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading binding config");
        let source = std::fs::read_to_string(path)
            .map_err(|e| BindingError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let config = BindingConfig::from_toml_str("").unwrap();
        assert_eq!(config, BindingConfig::default());
        assert_eq!(config.placeholder, "-");
    }

    #[test]
    fn reads_all_keys() {
        let config = BindingConfig::from_toml_str(
            r#"
            notify_policy = "on_change"
            placeholder = "n/a"
            sync_on_activate = true
            "#,
        )
        .unwrap();
        assert_eq!(config.notify_policy, NotifyPolicy::OnChange);
        assert_eq!(config.placeholder, "n/a");
        assert!(config.sync_on_activate);
    }

    #[test]
    fn rejects_unknown_policy() {
        let err = BindingConfig::from_toml_str("notify_policy = \"sometimes\"").unwrap_err();
        assert!(matches!(err, BindingError::Config(_)));
    }

    #[test]
    fn missing_file_is_config_error() {
        let err = BindingConfig::load("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, BindingError::Config(msg) if msg.contains("here.toml")));
    }
}
