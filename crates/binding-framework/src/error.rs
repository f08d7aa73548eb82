//! # Framework Errors
//!
//! The observable primitive itself never fails. Errors only appear at the
//! edges: obtaining a property from a provider, and reading configuration.

/// Errors that can occur while wiring a view to its property.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum BindingError {
    #[error("Property provider unavailable: {0}")]
    ProviderUnavailable(String),
    #[error("Invalid configuration: {0}")]
    Config(String),
}
