//! # Observability & Tracing
//!
//! Bindings log through the `tracing` macros with structured fields. Nothing
//! is printed until a subscriber is installed; binaries call
//! [`setup_tracing`] once at startup.
//!
//! ## What Gets Traced
//!
//! - **Subscriptions** (`debug`): subscribe, unsubscribe, scope release
//! - **Notification rounds** (`trace`): version and subscriber count per round
//! - **View lifecycle** (`info`): activation and deactivation, with the view name
//! - **Anomalies** (`warn`): redundant activation, provider failures, placeholder fallbacks
//!
//! ## Usage
//!
//! ```bash
//! # Lifecycle transitions only
//! RUST_LOG=info cargo run
//!
//! # Every render and subscription change
//! RUST_LOG=debug cargo run
//!
//! # Only the property internals
//! RUST_LOG=binding_framework::property=trace cargo run
//! ```
//!
//! With `RUST_LOG=debug` a single height change reads:
//!
//! ```text
//! DEBUG Render view="height" text="175"
//! ```

/// Installs a compact fmt subscriber filtered by `RUST_LOG`.
///
/// Safe to call more than once; later calls leave the first subscriber in
/// place.
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .try_init();
}
