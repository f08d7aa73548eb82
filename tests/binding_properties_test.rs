use binding_recipe::framework::mock::RecordingField;
use binding_recipe::framework::{
    BoundView, FixedProvider, LifecycleObserver, ObservableProperty, TextView,
};
use binding_recipe::sample::config::ScreenConfig;
use binding_recipe::sample::lifecycle::ActivityHost;
use std::cell::Cell;
use std::rc::Rc;

fn height_view(height: &ObservableProperty<i32>) -> BoundView<i32, RecordingField> {
    BoundView::displaying("height", FixedProvider::new(height.clone()), RecordingField::new())
}

/// Notifications delivered equal the sets applied while subscribed.
#[test]
fn test_notifications_match_active_sets() {
    let height = ObservableProperty::new(170);
    let delivered = Rc::new(Cell::new(0));
    let sink = Rc::clone(&delivered);

    height.set(171);
    let handle = height.subscribe(move |_| sink.set(sink.get() + 1));
    for cm in [172, 172, 173, 174] {
        height.set(cm);
    }
    height.unsubscribe(&handle);
    height.set(180);

    assert_eq!(delivered.get(), 4);
}

/// Deactivate then activate: exactly one live subscription, no duplicate
/// delivery.
#[test]
fn test_reactivation_has_single_subscription() {
    let height = ObservableProperty::new(170);
    let mut view = height_view(&height);

    view.on_activate().expect("activate");
    view.on_deactivate();
    view.on_activate().expect("reactivate");
    height.set(175);

    assert_eq!(height.subscriber_count(), 1);
    assert_eq!(view.field().writes(), vec!["175"]);
}

/// Unsubscribing the same handle twice is harmless.
#[test]
fn test_double_unsubscribe_is_noop() {
    let height = ObservableProperty::new(170);
    let handle = height.subscribe(|_| {});

    height.unsubscribe(&handle);
    height.unsubscribe(&handle);

    assert_eq!(height.subscriber_count(), 0);
    assert!(!handle.is_active());
}

/// 170 -> set(175) with one active subscriber shows "175".
#[test]
fn test_field_shows_175() {
    let height = ObservableProperty::new(170);
    let label = TextView::new();
    let mut view = BoundView::displaying("height", FixedProvider::new(height.clone()), label.clone());

    view.on_activate().expect("activate");
    height.set(175);

    assert_eq!(label.text(), "175");
}

/// No field update after deactivation.
#[test]
fn test_no_update_after_deactivate() {
    let height = ObservableProperty::new(170);
    let mut view = height_view(&height);

    view.on_activate().expect("activate");
    view.on_deactivate();
    height.set(175);

    assert!(view.field().writes().is_empty());
}

/// The same guarantees through the full screen host.
#[tokio::test]
async fn test_screen_host_end_to_end() {
    let (host, handle) = ActivityHost::new(ScreenConfig::default(), 8);
    let label = host.activity().text_view_height().clone();

    let producer = tokio::spawn(async move {
        handle.start().await?;
        handle.set_height(175).await?;
        handle.stop().await?;
        handle.set_height(160).await?;
        handle.destroy().await
    });

    let report = host.run().await.expect("host run");
    producer.await.expect("producer task").expect("producer posts");

    assert_eq!(label.text(), "175");
    assert_eq!(report.final_height, Some(160));
}
