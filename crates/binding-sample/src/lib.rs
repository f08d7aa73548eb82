//! # Binding Sample
//!
//! A single screen built on [`binding_framework`]: a height label kept in
//! sync with `UserViewModel::height` while the screen is active.
//!
//! - **[model]**: [`UserViewModel`](model::UserViewModel) and its observable height.
//! - **[store]**: the per-screen [`ViewModelStore`](store::ViewModelStore) that hands it out.
//! - **[activity]**: [`MainActivity`](activity::MainActivity), which binds the label on activation.
//! - **[lifecycle]**: [`ActivityHost`](lifecycle::ActivityHost), the UI-thread event loop.
//! - **[config]**: TOML-backed [`ScreenConfig`](config::ScreenConfig).

pub mod activity;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod model;
pub mod store;
