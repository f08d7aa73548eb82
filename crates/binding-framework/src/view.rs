//! # Lifecycle-Bound View
//!
//! [`BoundView`] ties one [`ObservableProperty`] to one [`DisplayField`] for
//! the duration of an active window:
//!
//! ```text
//!   on_activate ──► provider.provide() ──► property.subscribe(render) ──► scope
//!                                                                   │
//!   property.set(v) ──► render(v) ──► formatter(v) ──► field.set_text()
//!                                                                   │
//!   on_deactivate / drop ──► scope.release_all() ◄──────────────────┘
//! ```
//!
//! The property keeps only a weak reference to `render`; the view's scope
//! owns it. Dropping the view therefore stops delivery even without an
//! explicit `on_deactivate`.
//!
//! ```rust
//! use binding_framework::{
//!     BoundView, FixedProvider, LifecycleObserver, ObservableProperty, TextView,
//! };
//!
//! let height = ObservableProperty::new(170);
//! let label = TextView::new();
//! let mut view = BoundView::displaying(
//!     "height",
//!     FixedProvider::new(height.clone()),
//!     label.clone(),
//! );
//!
//! view.on_activate().unwrap();
//! height.set(175);
//! assert_eq!(label.text(), "175");
//!
//! view.on_deactivate();
//! height.set(180);
//! assert_eq!(label.text(), "175");
//! ```

use crate::config::{BindingConfig, DEFAULT_PLACEHOLDER};
use crate::display::{format_display, DisplayField};
use crate::error::BindingError;
use crate::lifecycle::{LifecycleObserver, LifecycleScope, LifecycleState};
use crate::property::ObservableProperty;
use crate::provider::PropertyProvider;
use std::fmt::Display;
use std::rc::Rc;
use tracing::{debug, info, warn};

/// Turns a value into display text. `None` means "no text", and the view
/// substitutes its placeholder.
pub type TextFormatter<T> = Rc<dyn Fn(&T) -> Option<String>>;

/// A view that mirrors one observable property into one display field while
/// it is active.
pub struct BoundView<T, F> {
    name: String,
    provider: Box<dyn PropertyProvider<T>>,
    field: F,
    formatter: TextFormatter<T>,
    placeholder: Rc<str>,
    sync_on_activate: bool,
    state: LifecycleState,
    scope: LifecycleScope,
}

impl<T, F> BoundView<T, F>
where
    T: Clone + PartialEq + 'static,
    F: DisplayField + Clone + 'static,
{
    /// Creates an inactive view with a custom formatter.
    pub fn new(
        name: impl Into<String>,
        provider: impl PropertyProvider<T> + 'static,
        field: F,
        formatter: impl Fn(&T) -> Option<String> + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            provider: Box::new(provider),
            field,
            formatter: Rc::new(formatter),
            placeholder: Rc::from(DEFAULT_PLACEHOLDER),
            sync_on_activate: false,
            state: LifecycleState::Inactive,
            scope: LifecycleScope::new(),
        }
    }

    /// Applies the placeholder and activation sync settings of `config`.
    #[must_use]
    pub fn with_config(mut self, config: &BindingConfig) -> Self {
        self.placeholder = Rc::from(config.placeholder.as_str());
        self.sync_on_activate = config.sync_on_activate;
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The bound field.
    #[must_use]
    pub fn field(&self) -> &F {
        &self.field
    }

    /// Subscriptions currently owned by the view: one while active, zero
    /// otherwise.
    #[must_use]
    pub fn subscription_count(&self) -> usize {
        self.scope.len()
    }

    fn renderer(&self) -> impl Fn(&T) + 'static {
        let name = self.name.clone();
        let field = self.field.clone();
        let formatter = Rc::clone(&self.formatter);
        let placeholder = Rc::clone(&self.placeholder);
        move |value: &T| {
            let text = formatter(value).unwrap_or_else(|| {
                warn!(view = %name, "Value has no display text, using placeholder");
                placeholder.to_string()
            });
            debug!(view = %name, %text, "Render");
            field.set_text(&text);
        }
    }
}

impl<T, F> BoundView<T, F>
where
    T: Clone + PartialEq + Display + 'static,
    F: DisplayField + Clone + 'static,
{
    /// Creates an inactive view that renders values through `Display`.
    pub fn displaying(
        name: impl Into<String>,
        provider: impl PropertyProvider<T> + 'static,
        field: F,
    ) -> Self {
        Self::new(name, provider, field, |value: &T| format_display(value))
    }
}

impl<T, F> LifecycleObserver for BoundView<T, F>
where
    T: Clone + PartialEq + 'static,
    F: DisplayField + Clone + 'static,
{
    fn on_activate(&mut self) -> Result<(), BindingError> {
        if self.state == LifecycleState::Active {
            warn!(view = %self.name, "Already active, keeping current subscription");
            return Ok(());
        }

        let property: ObservableProperty<T> = match self.provider.provide() {
            Ok(property) => property,
            Err(e) => {
                warn!(view = %self.name, error = %e, "Activation failed");
                return Err(e);
            }
        };

        let render = self.renderer();
        let handle = if self.sync_on_activate {
            property.subscribe_and_emit(render)
        } else {
            property.subscribe(render)
        };
        self.scope.bind(handle);
        self.state = LifecycleState::Active;
        info!(view = %self.name, subscriptions = self.scope.len(), "Activated");
        Ok(())
    }

    fn on_deactivate(&mut self) {
        if self.state == LifecycleState::Inactive {
            debug!(view = %self.name, "Already inactive");
            return;
        }
        self.scope.release_all();
        self.state = LifecycleState::Inactive;
        info!(view = %self.name, "Deactivated");
    }

    fn state(&self) -> LifecycleState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::{format_optional, TextView};
    use crate::mock::{FailingProvider, RecordingField};
    use crate::provider::FixedProvider;
    use crate::NotifyPolicy;

    fn height_view(height: &ObservableProperty<i32>) -> BoundView<i32, RecordingField> {
        BoundView::displaying(
            "height",
            FixedProvider::new(height.clone()),
            RecordingField::new(),
        )
    }

    #[test]
    fn set_while_active_updates_field() {
        let height = ObservableProperty::new(170);
        let label = TextView::new();
        let mut view = BoundView::displaying("height", FixedProvider::new(height.clone()), label.clone());

        view.on_activate().unwrap();
        height.set(175);

        assert_eq!(label.text(), "175");
    }

    #[test]
    fn reentrant_clamp_leaves_field_in_sync() {
        let height = ObservableProperty::new(170);
        let clamp = height.clone();
        let _limit = height.subscribe(move |v| {
            if *v > 200 {
                clamp.set(200);
            }
        });
        let label = TextView::new();
        let mut view = BoundView::displaying("height", FixedProvider::new(height.clone()), RecordingField::new());
        let mut mirror = BoundView::displaying("mirror", FixedProvider::new(height.clone()), label.clone());

        view.on_activate().unwrap();
        mirror.on_activate().unwrap();
        height.set(250);

        assert_eq!(height.get(), 200);
        assert_eq!(label.text(), height.get().to_string());
        assert_eq!(view.field().last().as_deref(), Some("200"));
        assert_eq!(view.field().write_count(), 1);
    }

    #[test]
    fn nothing_rendered_before_first_change() {
        let height = ObservableProperty::new(170);
        let mut view = height_view(&height);

        view.on_activate().unwrap();
        assert!(view.field().writes().is_empty());
    }

    #[test]
    fn deactivated_view_ignores_changes() {
        let height = ObservableProperty::new(170);
        let mut view = height_view(&height);

        view.on_activate().unwrap();
        height.set(171);
        view.on_deactivate();
        height.set(172);

        assert_eq!(view.field().writes(), vec!["171"]);
        assert_eq!(height.subscriber_count(), 0);
        assert!(!view.is_active());
    }

    #[test]
    fn reactivation_creates_single_fresh_subscription() {
        let height = ObservableProperty::new(0);
        let mut view = height_view(&height);

        view.on_activate().unwrap();
        view.on_deactivate();
        view.on_activate().unwrap();
        assert_eq!(height.subscriber_count(), 1);
        assert_eq!(view.subscription_count(), 1);

        height.set(5);
        assert_eq!(view.field().writes(), vec!["5"]);
    }

    #[test]
    fn double_activate_keeps_one_subscription() {
        let height = ObservableProperty::new(0);
        let mut view = height_view(&height);

        view.on_activate().unwrap();
        view.on_activate().unwrap();
        height.set(1);

        assert_eq!(height.subscriber_count(), 1);
        assert_eq!(view.field().write_count(), 1);
    }

    #[test]
    fn double_deactivate_is_harmless() {
        let height = ObservableProperty::new(0);
        let mut view = height_view(&height);

        view.on_deactivate();
        view.on_activate().unwrap();
        view.on_deactivate();
        view.on_deactivate();
        assert_eq!(view.state(), LifecycleState::Inactive);
    }

    #[test]
    fn failed_activation_leaves_nothing_behind() {
        let mut view: BoundView<i32, RecordingField> =
            BoundView::displaying("height", FailingProvider::new("no view model"), RecordingField::new());

        let err = view.on_activate().unwrap_err();
        assert_eq!(err, BindingError::ProviderUnavailable("no view model".into()));
        assert_eq!(view.state(), LifecycleState::Inactive);
        assert_eq!(view.subscription_count(), 0);
    }

    #[test]
    fn dropping_active_view_releases_subscription() {
        let height = ObservableProperty::new(0);
        let field = RecordingField::new();
        {
            let mut view = BoundView::displaying("height", FixedProvider::new(height.clone()), field.clone());
            view.on_activate().unwrap();
            assert_eq!(height.subscriber_count(), 1);
        }
        assert_eq!(height.subscriber_count(), 0);
        height.set(3);
        assert_eq!(field.write_count(), 0);
    }

    #[test]
    fn unformattable_value_shows_placeholder() {
        let reading: ObservableProperty<Option<i32>> = ObservableProperty::new(None);
        let config = BindingConfig {
            placeholder: "n/a".into(),
            ..BindingConfig::default()
        };
        let mut view = BoundView::new(
            "reading",
            FixedProvider::new(reading.clone()),
            RecordingField::new(),
            format_optional::<i32>,
        )
        .with_config(&config);

        view.on_activate().unwrap();
        reading.set(Some(4));
        reading.set(None);

        assert_eq!(view.field().writes(), vec!["4", "n/a"]);
    }

    #[test]
    fn sync_on_activate_renders_current_value() {
        let height = ObservableProperty::with_policy(170, NotifyPolicy::OnChange);
        let config = BindingConfig {
            sync_on_activate: true,
            ..BindingConfig::default()
        };
        let mut view = height_view(&height).with_config(&config);

        view.on_activate().unwrap();
        height.set(170);
        height.set(175);

        assert_eq!(view.field().writes(), vec!["170", "175"]);
    }

    #[test]
    fn closure_provider_is_consulted_on_each_activation() {
        use std::cell::Cell;

        let height = ObservableProperty::new(0);
        let calls = Rc::new(Cell::new(0));
        let provided = height.clone();
        let counter = Rc::clone(&calls);
        let provider = move || {
            counter.set(counter.get() + 1);
            Ok::<_, BindingError>(provided.clone())
        };
        let mut view = BoundView::displaying("height", provider, RecordingField::new());

        view.on_activate().unwrap();
        view.on_deactivate();
        view.on_activate().unwrap();
        assert_eq!(calls.get(), 2);
    }
}
