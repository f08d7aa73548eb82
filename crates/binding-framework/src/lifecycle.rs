//! # Lifecycle Hooks & Scopes
//!
//! A host (an activity, a window, a test) drives its views through two
//! hooks, [`LifecycleObserver::on_activate`] and
//! [`LifecycleObserver::on_deactivate`]. Anything a view acquires while
//! active is parked in a [`LifecycleScope`], which releases it on
//! deactivation or drop.

use crate::error::BindingError;
use crate::property::SubscriptionHandle;
use std::fmt;
use tracing::debug;

/// The two states a lifecycle-bound entity moves between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LifecycleState {
    #[default]
    Inactive,
    Active,
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LifecycleState::Inactive => f.write_str("inactive"),
            LifecycleState::Active => f.write_str("active"),
        }
    }
}

/// Hooks a host calls as its lifetime changes.
///
/// # Contract
///
/// - `on_activate` either succeeds and leaves the observer `Active`, or
///   fails and leaves it `Inactive` holding nothing.
/// - `on_deactivate` never fails and may be called in any state.
/// - Calling `on_activate` again after `on_deactivate` starts a fresh
///   active window.
pub trait LifecycleObserver {
    fn on_activate(&mut self) -> Result<(), BindingError>;

    fn on_deactivate(&mut self);

    fn state(&self) -> LifecycleState;

    fn is_active(&self) -> bool {
        self.state() == LifecycleState::Active
    }
}

/// Owner of the subscriptions created during one active window.
///
/// Dropping the scope releases everything it holds.
#[derive(Debug, Default)]
pub struct LifecycleScope {
    subscriptions: Vec<SubscriptionHandle>,
}

impl LifecycleScope {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes ownership of `handle` until the scope is released.
    pub fn bind(&mut self, handle: SubscriptionHandle) {
        debug!(subscriber = %handle.id(), "Bound to scope");
        self.subscriptions.push(handle);
    }

    /// Unsubscribes and drops every held subscription.
    pub fn release_all(&mut self) {
        if self.subscriptions.is_empty() {
            return;
        }
        debug!(count = self.subscriptions.len(), "Releasing scope");
        for handle in self.subscriptions.drain(..) {
            handle.unsubscribe();
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }
}

impl Drop for LifecycleScope {
    fn drop(&mut self) {
        self.release_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::ObservableProperty;

    #[test]
    fn release_all_detaches_everything() {
        let a = ObservableProperty::new(0);
        let b = ObservableProperty::new(String::new());
        let mut scope = LifecycleScope::new();
        scope.bind(a.subscribe(|_| {}));
        scope.bind(b.subscribe(|_| {}));
        assert_eq!(scope.len(), 2);

        scope.release_all();
        assert!(scope.is_empty());
        assert_eq!(a.subscriber_count(), 0);
        assert_eq!(b.subscriber_count(), 0);

        scope.release_all();
    }

    #[test]
    fn drop_releases() {
        let a = ObservableProperty::new(0);
        {
            let mut scope = LifecycleScope::new();
            scope.bind(a.subscribe(|_| {}));
            assert_eq!(a.subscriber_count(), 1);
        }
        assert_eq!(a.subscriber_count(), 0);
    }

    #[test]
    fn state_display() {
        assert_eq!(LifecycleState::Active.to_string(), "active");
        assert_eq!(LifecycleState::default(), LifecycleState::Inactive);
    }
}
