use std::sync::mpsc::Sender;

use crate::app_event::AppEvent;

#[derive(Clone, Debug)]
pub(crate) struct AppEventSender {
    tx: Sender<AppEvent>,
}

impl AppEventSender {
    pub(crate) fn new(tx: Sender<AppEvent>) -> Self {
        Self { tx }
    }

    /// Send an event to the app event channel. If it fails, we swallow the
    /// error and log it.
    pub(crate) fn send(&self, event: AppEvent) {
        if let Err(e) = self.tx.send(event) {
            tracing::error!("failed to send event: {e}");
        }
    }
}
