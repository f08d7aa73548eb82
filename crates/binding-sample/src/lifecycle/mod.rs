//! # Screen Lifecycle & Orchestration
//!
//! A real UI toolkit owns one thread that runs every lifecycle callback and
//! every UI mutation, fed by a queue of events posted from elsewhere. This
//! module models that arrangement with a Tokio channel:
//!
//! ```text
//!   producer task ── HostHandle::post(UiEvent) ──► mpsc ──► ActivityHost::run
//!   (Send, any task)                                        (UI thread: owns the
//!                                                             activity, store and
//!                                                             view model)
//! ```
//!
//! **Key Responsibilities:**
//! 1. **Wiring** - create the view-model store and hand it to the activity
//! 2. **Lifecycle** - translate `Start`/`Stop` into activate/deactivate
//! 3. **Input** - apply `SetHeight` / `AdjustHeight` to the view model on the UI thread
//! 4. **Teardown** - on `Destroy`, a closed channel or an error, deactivate the
//!    activity and clear the store, always
//!
//! ## Usage
//!
//! ```rust
//! use binding_sample::config::ScreenConfig;
//! use binding_sample::lifecycle::ActivityHost;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let (host, handle) = ActivityHost::new(ScreenConfig::default(), 8);
//!     let label = host.activity().text_view_height().clone();
//!
//!     let producer = tokio::spawn(async move {
//!         handle.start().await?;
//!         handle.set_height(175).await?;
//!         handle.destroy().await
//!     });
//!
//!     let report = host.run().await.unwrap();
//!     producer.await.unwrap().unwrap();
//!     assert_eq!(label.text(), "175");
//!     assert_eq!(report.final_height, Some(175));
//! }
//! ```
//!
//! The host future is `!Send` (it owns `Rc`-based state), so it is awaited on
//! the current task rather than spawned.

pub mod host;

pub use host::*;
