//! # Observable Property
//!
//! [`ObservableProperty<T>`] holds a value and notifies subscribers, in
//! subscription order, each time the value is set. Delivery is synchronous:
//! when `set` returns, every active subscriber has already seen the new value.
//!
//! ## Ownership
//!
//! The property keeps only a [`Weak`] reference to each callback. The strong
//! reference lives inside the [`SubscriptionHandle`] returned by
//! [`ObservableProperty::subscribe`], so whoever owns the handle decides how
//! long the callback lives. Dropping the handle unsubscribes.
//!
//! ```rust
//! use binding_framework::ObservableProperty;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let height = ObservableProperty::new(170);
//! let seen = Rc::new(Cell::new(0));
//!
//! let sink = Rc::clone(&seen);
//! let handle = height.subscribe(move |value| sink.set(*value));
//!
//! height.set(175);
//! assert_eq!(seen.get(), 175);
//!
//! height.unsubscribe(&handle);
//! height.unsubscribe(&handle); // no-op
//! height.set(180);
//! assert_eq!(seen.get(), 175);
//! ```
//!
//! ## Threading
//!
//! The property is `Rc`-based and therefore `!Send`. All mutation and
//! observation happen on the thread that created it.
//!
//! ## Re-entrancy
//!
//! A callback may call `set` on the same property. The nested round delivers
//! the newer value to every subscriber, and the outer round then stops: no
//! subscriber ever receives a value older than one it has already seen.
//!
//! The closures passed to [`ObservableProperty::with`] and
//! [`ObservableProperty::update`] run while the value is borrowed. Touching
//! the same property from inside them panics (see their `# Panics` sections).

use serde::Deserialize;
use std::any::Any;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, trace};

type Callback<T> = Rc<dyn Fn(&T)>;
type WeakCallback<T> = Weak<dyn Fn(&T)>;

static NEXT_SUBSCRIBER_ID: AtomicU64 = AtomicU64::new(1);

/// When a `set` produces a notification round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotifyPolicy {
    /// Every `set` notifies, even when the value is unchanged.
    #[default]
    Always,
    /// A `set` with a value equal to the current one is ignored.
    OnChange,
}

/// Process-unique identifier of one subscription.
///
/// Ids are never reused, so a handle issued by one property can never
/// remove a subscriber from another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriberId(u64);

impl SubscriberId {
    fn next() -> Self {
        Self(NEXT_SUBSCRIBER_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for SubscriberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sub#{}", self.0)
    }
}

struct Subscriber<T> {
    id: SubscriberId,
    callback: WeakCallback<T>,
}

struct PropertyInner<T> {
    value: T,
    version: u64,
    policy: NotifyPolicy,
    subscribers: Vec<Subscriber<T>>,
}

/// Type-erased view of a property's subscriber list, so a handle does not
/// need to know the value type it was issued for.
trait Detach {
    fn detach(&self, id: SubscriberId) -> bool;
    fn is_attached(&self, id: SubscriberId) -> bool;
}

impl<T> Detach for RefCell<PropertyInner<T>> {
    fn detach(&self, id: SubscriberId) -> bool {
        let mut inner = self.borrow_mut();
        let before = inner.subscribers.len();
        inner.subscribers.retain(|s| s.id != id);
        let removed = inner.subscribers.len() != before;
        if removed {
            debug!(subscriber = %id, remaining = inner.subscribers.len(), "Unsubscribed");
        }
        removed
    }

    fn is_attached(&self, id: SubscriberId) -> bool {
        self.borrow().subscribers.iter().any(|s| s.id == id)
    }
}

/// A shared value holder with ordered, synchronous change notification.
///
/// Cloning an `ObservableProperty` yields another handle to the **same**
/// value and subscriber list.
///
/// # Invariants
///
/// 1. Every subscriber present when a round starts is notified at most once
///    in that round, in subscription order.
/// 2. A subscriber removed before its turn in a round is not called.
/// 3. `version` increments by exactly one per applied change.
/// 4. A round stops as soon as a newer change has been applied, so no
///    subscriber sees an older value after a newer one.
pub struct ObservableProperty<T> {
    inner: Rc<RefCell<PropertyInner<T>>>,
}

impl<T> Clone for ObservableProperty<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ObservableProperty<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("ObservableProperty")
            .field("value", &inner.value)
            .field("version", &inner.version)
            .field("policy", &inner.policy)
            .field("subscribers", &inner.subscribers.len())
            .finish()
    }
}

impl<T: Clone + PartialEq + 'static> ObservableProperty<T> {
    /// Creates a property that notifies on every `set`.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self::with_policy(value, NotifyPolicy::default())
    }

    /// Creates a property with an explicit [`NotifyPolicy`].
    #[must_use]
    pub fn with_policy(value: T, policy: NotifyPolicy) -> Self {
        Self {
            inner: Rc::new(RefCell::new(PropertyInner {
                value,
                version: 0,
                policy,
                subscribers: Vec::new(),
            })),
        }
    }

    /// Returns a clone of the current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Runs `f` against the current value without cloning it.
    ///
    /// # Panics
    ///
    /// Panics if `f` calls `set`, `update` or `subscribe` on this property,
    /// or drops one of its [`SubscriptionHandle`]s.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.borrow().value)
    }

    /// Replaces the value and notifies subscribers, subject to the policy.
    pub fn set(&self, value: T) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.policy == NotifyPolicy::OnChange && inner.value == value {
                trace!(version = inner.version, "Set skipped, value unchanged");
                return;
            }
            inner.value = value;
            inner.version += 1;
        }
        self.notify();
    }

    /// Mutates the value in place, then notifies subject to the policy.
    ///
    /// # Panics
    ///
    /// Panics if `f` reads or writes this property (`get`, `set`, `with`,
    /// ...). Subscribers are called after `f` returns and are not affected.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        {
            let mut inner = self.inner.borrow_mut();
            let before = match inner.policy {
                NotifyPolicy::OnChange => Some(inner.value.clone()),
                NotifyPolicy::Always => None,
            };
            f(&mut inner.value);
            if before.as_ref() == Some(&inner.value) {
                trace!(version = inner.version, "Update skipped, value unchanged");
                return;
            }
            inner.version += 1;
        }
        self.notify();
    }

    /// Registers `callback` for every subsequent change.
    ///
    /// The returned handle owns the callback. Keep it for as long as the
    /// callback should run; drop it (or pass it to
    /// [`unsubscribe`](Self::unsubscribe)) to stop delivery.
    #[must_use = "dropping the handle unsubscribes immediately"]
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> SubscriptionHandle {
        let strong: Callback<T> = Rc::new(callback);
        let id = SubscriberId::next();
        {
            let mut inner = self.inner.borrow_mut();
            inner.subscribers.push(Subscriber {
                id,
                callback: Rc::downgrade(&strong),
            });
            debug!(subscriber = %id, subscribers = inner.subscribers.len(), "Subscribed");
        }
        let owner: Weak<dyn Detach> = Rc::downgrade(&self.inner) as Weak<dyn Detach>;
        SubscriptionHandle {
            id,
            owner,
            _callback: Box::new(strong),
        }
    }

    /// Like [`subscribe`](Self::subscribe), then delivers the current value
    /// to the new callback once.
    #[must_use = "dropping the handle unsubscribes immediately"]
    pub fn subscribe_and_emit(&self, callback: impl Fn(&T) + 'static) -> SubscriptionHandle {
        let strong: Callback<T> = Rc::new(callback);
        let emit = Rc::clone(&strong);
        let handle = self.subscribe(move |value| strong(value));
        let value = self.get();
        emit(&value);
        handle
    }

    /// Removes the subscription behind `handle`. Removing a handle that is
    /// already gone, or that belongs to another property, does nothing.
    pub fn unsubscribe(&self, handle: &SubscriptionHandle) {
        self.inner.detach(handle.id);
    }

    /// Number of applied changes since construction.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.inner.borrow().version
    }

    /// Number of registered subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }

    /// The policy fixed at construction.
    #[must_use]
    pub fn policy(&self) -> NotifyPolicy {
        self.inner.borrow().policy
    }

    fn notify(&self) {
        // Snapshot outside the borrow so callbacks may touch the property.
        let (value, version, callbacks) = {
            let inner = self.inner.borrow();
            let callbacks: Vec<(SubscriberId, Callback<T>)> = inner
                .subscribers
                .iter()
                .filter_map(|s| s.callback.upgrade().map(|cb| (s.id, cb)))
                .collect();
            (inner.value.clone(), inner.version, callbacks)
        };
        trace!(version, subscribers = callbacks.len(), "Notifying");

        for (id, callback) in callbacks {
            if self.inner.borrow().version != version {
                // A re-entrant set already delivered a newer value to everyone.
                trace!(version, "Round superseded");
                return;
            }
            if self.inner.is_attached(id) {
                callback(&value);
            }
        }
    }
}

/// Owning handle for one subscription.
///
/// Holds the only strong reference to the callback. Dropping the handle
/// detaches the subscriber from its property, so release happens on every
/// exit path, unwinding included.
pub struct SubscriptionHandle {
    id: SubscriberId,
    owner: Weak<dyn Detach>,
    _callback: Box<dyn Any>,
}

impl SubscriptionHandle {
    /// Identifier of this subscription.
    #[must_use]
    pub fn id(&self) -> SubscriberId {
        self.id
    }

    /// Detaches from the property. Idempotent; also a no-op once the
    /// property itself is gone.
    pub fn unsubscribe(&self) {
        if let Some(owner) = self.owner.upgrade() {
            owner.detach(self.id);
        }
    }

    /// Whether the property still lists this subscriber.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.owner
            .upgrade()
            .is_some_and(|owner| owner.is_attached(self.id))
    }
}

impl Drop for SubscriptionHandle {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

impl fmt::Debug for SubscriptionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubscriptionHandle")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}
