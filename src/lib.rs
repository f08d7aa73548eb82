#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Binding Recipe
//!
//! > **A Recipe for Lifecycle-Bound Observable Bindings in Rust.**
//!
//! One observed value flowing into one display field, with the subscription
//! tied to the lifetime of the screen that shows it.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Push, don't declare
//! The view subscribes a plain callback that formats the value and assigns
//! the text to a field handle. There is no markup and no reflection: the
//! whole binding is visible in one function.
//!
//! ### Scope, don't remember
//! Every subscription a view takes while active is owned by a
//! [`LifecycleScope`](framework::LifecycleScope). Deactivation, drop and
//! unwinding all release it, so there is no "forgot to unsubscribe" path.
//!
//! ### Weak from the property side
//! A property only holds its callbacks weakly. A long-lived view model can
//! never keep a finished screen alive.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Pattern ([`framework`])
//! - **Key items**: [`ObservableProperty`](framework::ObservableProperty),
//!   [`BoundView`](framework::BoundView),
//!   [`LifecycleObserver`](framework::LifecycleObserver).
//!
//! ### 2. The Screen ([`sample`])
//! - **Key items**: [`UserViewModel`](sample::model::UserViewModel),
//!   [`MainActivity`](sample::activity::MainActivity),
//!   [`ActivityHost`](sample::lifecycle::ActivityHost).
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo screen with lifecycle logs
//! RUST_LOG=info cargo run -p binding-sample
//!
//! # Run every test in the workspace
//! cargo test --workspace
//! ```

pub use binding_framework as framework;
pub use binding_sample as sample;
