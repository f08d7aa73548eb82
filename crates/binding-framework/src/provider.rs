//! # Property Providers
//!
//! A view does not construct the property it observes; it asks a provider
//! for it at activation time. This is the seam where a host plugs in its
//! injector (a view-model store, a test fixture, a fixed value).

use crate::error::BindingError;
use crate::property::ObservableProperty;

/// Supplies the property a view observes.
pub trait PropertyProvider<T> {
    fn provide(&self) -> Result<ObservableProperty<T>, BindingError>;
}

impl<T, F> PropertyProvider<T> for F
where
    F: Fn() -> Result<ObservableProperty<T>, BindingError>,
{
    fn provide(&self) -> Result<ObservableProperty<T>, BindingError> {
        self()
    }
}

/// Provider that always hands out the same property.
#[derive(Debug)]
pub struct FixedProvider<T> {
    property: ObservableProperty<T>,
}

impl<T> FixedProvider<T> {
    pub fn new(property: ObservableProperty<T>) -> Self {
        Self { property }
    }
}

impl<T> PropertyProvider<T> for FixedProvider<T> {
    fn provide(&self) -> Result<ObservableProperty<T>, BindingError> {
        Ok(self.property.clone())
    }
}
