use binding_framework::{NotifyPolicy, ObservableProperty};

/// View model behind the height screen.
///
/// Owns the observable `height` (centimetres). The activity never creates
/// one directly; it asks the [`ViewModelStore`](crate::store::ViewModelStore),
/// so the same instance survives a stop/start cycle.
#[derive(Debug, Clone)]
pub struct UserViewModel {
    height: ObservableProperty<i32>,
}

impl UserViewModel {
    pub const DEFAULT_HEIGHT: i32 = 170;

    /// Creates a view model with the given starting height.
    pub fn new(initial_height: i32, policy: NotifyPolicy) -> Self {
        Self {
            height: ObservableProperty::with_policy(initial_height, policy),
        }
    }

    /// The observable height, for binding.
    pub fn height(&self) -> &ObservableProperty<i32> {
        &self.height
    }

    pub fn set_height(&self, cm: i32) {
        self.height.set(cm);
    }

    /// Adds `delta_cm` to the current height.
    pub fn adjust_height(&self, delta_cm: i32) {
        self.height.update(|h| *h = h.saturating_add(delta_cm));
    }
}

impl Default for UserViewModel {
    fn default() -> Self {
        Self::new(Self::DEFAULT_HEIGHT, NotifyPolicy::default())
    }
}
