//! # Test Doubles
//!
//! Stand-ins for the two external collaborators of a view, so a view can be
//! exercised without a real UI or injector.
//!
//! - [`RecordingField`]: a [`DisplayField`] that remembers every write, in order.
//! - [`FailingProvider`]: a [`PropertyProvider`] that always refuses.
//!
//! ```rust
//! use binding_framework::mock::{FailingProvider, RecordingField};
//! use binding_framework::{BoundView, BindingError, LifecycleObserver};
//!
//! let mut view: BoundView<i32, _> =
//!     BoundView::displaying("height", FailingProvider::new("offline"), RecordingField::new());
//!
//! let result = view.on_activate();
//! assert!(matches!(result, Err(BindingError::ProviderUnavailable(_))));
//! assert!(!view.is_active());
//! ```

use crate::display::DisplayField;
use crate::error::BindingError;
use crate::property::ObservableProperty;
use crate::provider::PropertyProvider;
use std::cell::RefCell;
use std::rc::Rc;

/// A display field that records the full write history.
#[derive(Debug, Clone, Default)]
pub struct RecordingField {
    writes: Rc<RefCell<Vec<String>>>,
}

impl RecordingField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every text written so far, oldest first.
    pub fn writes(&self) -> Vec<String> {
        self.writes.borrow().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.writes.borrow().last().cloned()
    }

    pub fn write_count(&self) -> usize {
        self.writes.borrow().len()
    }
}

impl DisplayField for RecordingField {
    fn set_text(&self, text: &str) {
        self.writes.borrow_mut().push(text.to_string());
    }
}

/// A provider that never supplies a property.
#[derive(Debug, Clone)]
pub struct FailingProvider {
    reason: String,
}

impl FailingProvider {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl<T> PropertyProvider<T> for FailingProvider {
    fn provide(&self) -> Result<ObservableProperty<T>, BindingError> {
        Err(BindingError::ProviderUnavailable(self.reason.clone()))
    }
}
