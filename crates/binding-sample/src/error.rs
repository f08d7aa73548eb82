//! Error types for the sample screen and its host.

use binding_framework::BindingError;
use thiserror::Error;

/// Errors surfaced by [`ActivityHost`](crate::lifecycle::ActivityHost) and its handle.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum HostError {
    /// The host loop has stopped and no longer accepts events.
    #[error("Host closed")]
    HostClosed,

    /// Wiring the screen to its view model failed.
    #[error(transparent)]
    Binding(#[from] BindingError),
}
