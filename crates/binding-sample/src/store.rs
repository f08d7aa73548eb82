//! # View-Model Store
//!
//! Keeps one instance per view-model type for as long as the owning screen
//! exists, across any number of stop/start cycles. Activation looks the
//! view model up here instead of constructing it, so a restarted screen
//! observes the same state it left.
//!
//! Once the screen finishes the store is [cleared](ViewModelStore::clear):
//! every view model is dropped and later lookups fail.

use binding_framework::BindingError;
use std::any::{type_name, Any, TypeId};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use tracing::{debug, info};

#[derive(Default)]
struct StoreInner {
    models: HashMap<TypeId, Box<dyn Any>>,
    cleared: bool,
}

/// Shared, single-threaded registry of view models keyed by type.
#[derive(Clone, Default)]
pub struct ViewModelStore {
    inner: Rc<RefCell<StoreInner>>,
}

impl ViewModelStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stored `VM`, creating it with `create` on first use.
    ///
    /// `create` runs without the store borrowed, so a factory may look up
    /// other view models. If it ends up registering a `VM` itself, that
    /// instance wins and the freshly built one is discarded.
    pub fn get_or_create<VM>(&self, create: impl FnOnce() -> VM) -> Result<VM, BindingError>
    where
        VM: Any + Clone,
    {
        let model_type = short_type_name::<VM>();
        if let Some(existing) = self.lookup::<VM>(model_type)? {
            debug!(model_type, "View model reused");
            return Ok(existing);
        }

        let model = create();

        if let Some(existing) = self.lookup::<VM>(model_type)? {
            debug!(model_type, "View model registered during creation, reusing it");
            return Ok(existing);
        }
        let mut inner = self.inner.borrow_mut();
        inner.models.insert(TypeId::of::<VM>(), Box::new(model.clone()));
        info!(model_type, size = inner.models.len(), "View model created");
        Ok(model)
    }

    fn lookup<VM: Any + Clone>(&self, model_type: &str) -> Result<Option<VM>, BindingError> {
        let inner = self.inner.borrow();
        if inner.cleared {
            return Err(BindingError::ProviderUnavailable(format!(
                "view model store cleared, cannot provide {model_type}"
            )));
        }
        Ok(inner
            .models
            .get(&TypeId::of::<VM>())
            .and_then(|m| m.downcast_ref::<VM>())
            .cloned())
    }

    /// Returns the stored `VM` without creating one.
    pub fn get<VM: Any + Clone>(&self) -> Option<VM> {
        self.inner
            .borrow()
            .models
            .get(&TypeId::of::<VM>())
            .and_then(|m| m.downcast_ref::<VM>())
            .cloned()
    }

    /// Drops every view model and refuses further lookups.
    pub fn clear(&self) {
        let mut inner = self.inner.borrow_mut();
        let dropped = inner.models.len();
        inner.models.clear();
        inner.cleared = true;
        info!(dropped, "View model store cleared");
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_cleared(&self) -> bool {
        self.inner.borrow().cleared
    }
}

fn short_type_name<T>() -> &'static str {
    type_name::<T>().rsplit("::").next().unwrap_or("Unknown")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UserViewModel;

    #[test]
    fn same_instance_across_lookups() {
        let store = ViewModelStore::new();
        let first = store.get_or_create(UserViewModel::default).unwrap();
        first.set_height(181);

        let second = store
            .get_or_create(|| UserViewModel::new(100, Default::default()))
            .unwrap();
        assert_eq!(second.height().get(), 181);
        assert_eq!(store.len(), 1);
    }

    #[derive(Debug, Clone)]
    struct ProfileViewModel {
        user: UserViewModel,
    }

    #[test]
    fn factory_may_pull_other_view_models() {
        let store = ViewModelStore::new();
        let lookup = store.clone();

        let profile = store
            .get_or_create(|| ProfileViewModel {
                user: lookup.get_or_create(UserViewModel::default).unwrap(),
            })
            .unwrap();
        profile.user.set_height(182);

        assert_eq!(store.len(), 2);
        assert_eq!(store.get::<UserViewModel>().unwrap().height().get(), 182);
    }

    #[test]
    fn store_cleared_during_creation_refuses() {
        let store = ViewModelStore::new();
        let closer = store.clone();

        let result = store.get_or_create(|| {
            closer.clear();
            UserViewModel::default()
        });

        assert!(matches!(result, Err(BindingError::ProviderUnavailable(_))));
        assert!(store.is_empty());
    }

    #[test]
    fn get_does_not_create() {
        let store = ViewModelStore::new();
        assert!(store.get::<UserViewModel>().is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn cleared_store_refuses_lookups() {
        let store = ViewModelStore::new();
        store.get_or_create(UserViewModel::default).unwrap();
        store.clear();

        assert!(store.is_cleared());
        assert!(store.is_empty());
        let err = store.get_or_create(UserViewModel::default).unwrap_err();
        assert!(matches!(err, BindingError::ProviderUnavailable(msg) if msg.contains("UserViewModel")));
    }
}
