//! # Binding Framework
//!
//! This crate provides the building blocks for wiring observable view-model
//! state into UI fields with lifecycle-scoped subscriptions. It is the MVVM
//! "observe a property, push its text into a label" pattern, stripped down to
//! what a host needs to supply and what the pattern guarantees in return.
//!
//! ## Why lifecycle-scoped subscriptions?
//!
//! A screen that observes a long-lived view model must stop observing when it
//! goes away, or the view model keeps calling into a dead UI. Tying each
//! subscription to an owner's active window gives two guarantees:
//!
//! - **No delivery outside the window**: once the owner deactivates (or is
//!   dropped) its callbacks are never called again.
//! - **No leaked owners**: the property holds callbacks weakly, so it never
//!   keeps a view alive.
//!
//! ## Architecture Overview
//!
//! 1. **State Layer** ([`ObservableProperty`]): a value with ordered,
//!    synchronous change notification.
//! 2. **Lifecycle Layer** ([`LifecycleObserver`], [`LifecycleScope`]): the
//!    hooks a host calls, and the scope that owns what a view acquires.
//! 3. **View Layer** ([`BoundView`], [`DisplayField`]): subscribes on
//!    activation, formats each value, writes it into a field.
//!
//! The host supplies the other two collaborators: a [`PropertyProvider`]
//! (the injector) and a [`DisplayField`] (the rendering surface).
//!
//! ```rust
//! use binding_framework::{
//!     BoundView, FixedProvider, LifecycleObserver, ObservableProperty, TextView,
//! };
//!
//! let height = ObservableProperty::new(170);
//! let label = TextView::new();
//! let mut view = BoundView::displaying("height", FixedProvider::new(height.clone()), label.clone());
//!
//! view.on_activate().unwrap();
//! height.set(175);
//! assert_eq!(label.text(), "175");
//! ```
//!
//! ## Concurrency Model
//!
//! - Everything is single-threaded; properties are `Rc`-based and `!Send`.
//! - Notification is synchronous and in subscription order.
//! - Hosts with a background producer post events to the UI thread and apply
//!   them there (see the sample crate's `ActivityHost`).
//!
//! ## Configuration
//!
//! [`BindingConfig`] carries the notify policy, placeholder text and
//! activation sync flag, loaded from TOML.
//!
//! ## Testing
//!
//! The [`mock`] module provides a recording field and a failing provider for
//! exercising views in isolation.

pub mod config;
pub mod display;
pub mod error;
pub mod lifecycle;
pub mod mock;
pub mod property;
pub mod provider;
pub mod tracing;
pub mod view;

// Re-export core types for convenience
pub use config::BindingConfig;
pub use display::{format_display, format_optional, DisplayField, TextView};
pub use error::BindingError;
pub use lifecycle::{LifecycleObserver, LifecycleScope, LifecycleState};
pub use property::{NotifyPolicy, ObservableProperty, SubscriberId, SubscriptionHandle};
pub use provider::{FixedProvider, PropertyProvider};
pub use view::{BoundView, TextFormatter};
