//! View models exposed to the screen.

pub mod user;

pub use user::*;
