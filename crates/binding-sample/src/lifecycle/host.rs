use crate::activity::MainActivity;
use crate::config::ScreenConfig;
use crate::error::HostError;
use crate::model::UserViewModel;
use crate::store::ViewModelStore;
use binding_framework::LifecycleObserver;
use tokio::sync::mpsc;
use tracing::{debug, error, info};

/// Events the UI thread processes, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    /// The screen becomes visible.
    Start,
    /// The screen leaves the foreground.
    Stop,
    /// New height input, in centimetres.
    SetHeight(i32),
    /// Nudge the current height by a signed delta, in centimetres.
    AdjustHeight(i32),
    /// The screen is finishing; the host loop ends.
    Destroy,
}

/// Cloneable, `Send` handle for posting events to an [`ActivityHost`].
#[derive(Debug, Clone)]
pub struct HostHandle {
    sender: mpsc::Sender<UiEvent>,
}

impl HostHandle {
    pub async fn post(&self, event: UiEvent) -> Result<(), HostError> {
        self.sender.send(event).await.map_err(|_| HostError::HostClosed)
    }

    pub async fn start(&self) -> Result<(), HostError> {
        self.post(UiEvent::Start).await
    }

    pub async fn stop(&self) -> Result<(), HostError> {
        self.post(UiEvent::Stop).await
    }

    pub async fn set_height(&self, cm: i32) -> Result<(), HostError> {
        self.post(UiEvent::SetHeight(cm)).await
    }

    pub async fn adjust_height(&self, delta_cm: i32) -> Result<(), HostError> {
        self.post(UiEvent::AdjustHeight(delta_cm)).await
    }

    pub async fn destroy(&self) -> Result<(), HostError> {
        self.post(UiEvent::Destroy).await
    }
}

/// Summary of one host run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostReport {
    /// Events processed, including the final `Destroy`.
    pub events: usize,
    /// Successful activations.
    pub activations: usize,
    /// Label text when the loop ended.
    pub final_text: String,
    /// View-model height when the loop ended, if one was ever created.
    pub final_height: Option<i32>,
}

/// The UI-thread loop owning the activity and its view-model store.
pub struct ActivityHost {
    receiver: mpsc::Receiver<UiEvent>,
    store: ViewModelStore,
    activity: MainActivity,
    events: usize,
    activations: usize,
}

impl ActivityHost {
    /// Creates a host and the handle that feeds it.
    ///
    /// `buffer_size` bounds the event queue; posting waits while it is full.
    pub fn new(config: ScreenConfig, buffer_size: usize) -> (Self, HostHandle) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let store = ViewModelStore::new();
        let activity = MainActivity::new(store.clone(), &config);
        let host = Self {
            receiver,
            store,
            activity,
            events: 0,
            activations: 0,
        };
        (host, HostHandle { sender })
    }

    pub fn activity(&self) -> &MainActivity {
        &self.activity
    }

    /// Processes events until `Destroy`, channel close, or an error.
    ///
    /// Whatever ends the loop, the activity is deactivated and the store
    /// cleared before this returns.
    pub async fn run(mut self) -> Result<HostReport, HostError> {
        info!("Host started");
        let outcome = self.process_events().await;

        let final_height = self.store.get::<UserViewModel>().map(|vm| vm.height().get());
        self.activity.on_deactivate();
        self.store.clear();

        let report = HostReport {
            events: self.events,
            activations: self.activations,
            final_text: self.activity.text_view_height().text(),
            final_height,
        };
        match &outcome {
            Ok(()) => info!(events = report.events, text = %report.final_text, "Host stopped"),
            Err(e) => error!(error = %e, events = report.events, "Host stopped with error"),
        }
        outcome.map(|()| report)
    }

    async fn process_events(&mut self) -> Result<(), HostError> {
        while let Some(event) = self.receiver.recv().await {
            self.events += 1;
            debug!(?event, "Event");
            match event {
                UiEvent::Start => {
                    let was_active = self.activity.is_active();
                    self.activity.on_activate()?;
                    if !was_active {
                        self.activations += 1;
                    }
                }
                UiEvent::Stop => self.activity.on_deactivate(),
                UiEvent::SetHeight(cm) => self.activity.view_model()?.set_height(cm),
                UiEvent::AdjustHeight(delta) => self.activity.view_model()?.adjust_height(delta),
                UiEvent::Destroy => {
                    info!("Destroy requested");
                    return Ok(());
                }
            }
        }
        debug!("Event channel closed");
        Ok(())
    }
}
