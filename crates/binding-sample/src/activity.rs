//! # Main Activity
//!
//! The height screen. On activation it fetches [`UserViewModel`] from the
//! [`ViewModelStore`] and binds `height` to the `text_view_height` label;
//! on deactivation it lets go of that binding.

use crate::config::ScreenConfig;
use crate::error::HostError;
use crate::model::UserViewModel;
use crate::store::ViewModelStore;
use binding_framework::{
    BindingError, BoundView, LifecycleObserver, LifecycleState, NotifyPolicy, ObservableProperty,
    TextView,
};

pub struct MainActivity {
    store: ViewModelStore,
    initial_height: i32,
    policy: NotifyPolicy,
    text_view_height: TextView,
    height_binding: BoundView<i32, TextView>,
}

impl MainActivity {
    pub fn new(store: ViewModelStore, config: &ScreenConfig) -> Self {
        let text_view_height = TextView::new();
        let initial_height = config.initial_height;
        let policy = config.binding.notify_policy;

        let provider_store = store.clone();
        let provider = move || -> Result<ObservableProperty<i32>, BindingError> {
            let vm = provider_store.get_or_create(|| UserViewModel::new(initial_height, policy))?;
            Ok(vm.height().clone())
        };
        let height_binding = BoundView::displaying("text_view_height", provider, text_view_height.clone())
            .with_config(&config.binding);

        Self {
            store,
            initial_height,
            policy,
            text_view_height,
            height_binding,
        }
    }

    /// The label showing the current height.
    pub fn text_view_height(&self) -> &TextView {
        &self.text_view_height
    }

    /// The screen's view model, created on first use.
    pub fn view_model(&self) -> Result<UserViewModel, HostError> {
        let (initial_height, policy) = (self.initial_height, self.policy);
        Ok(self
            .store
            .get_or_create(|| UserViewModel::new(initial_height, policy))?)
    }

    pub fn subscription_count(&self) -> usize {
        self.height_binding.subscription_count()
    }
}

impl LifecycleObserver for MainActivity {
    fn on_activate(&mut self) -> Result<(), BindingError> {
        self.height_binding.on_activate()
    }

    fn on_deactivate(&mut self) {
        self.height_binding.on_deactivate();
    }

    fn state(&self) -> LifecycleState {
        self.height_binding.state()
    }
}
