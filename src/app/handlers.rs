//! Message handling for the App.

use super::{App, AppMessage};
use crate::contact::SubmitStatus;

impl App {
    /// Handle an incoming async message
    /// All message handlers mark the app as dirty since they update visible state.
    pub fn handle_message(&mut self, msg: AppMessage) {
        // All messages result in state changes that require a redraw
        self.mark_dirty();
        match msg {
            AppMessage::DeliveryComplete { id } => {
                tracing::info!(%id, "contact delivery confirmed");
                self.contact.finish_submit(Ok(id));
            }
            AppMessage::DeliveryFailed { reason } => {
                tracing::warn!(%reason, "contact delivery failed");
                self.contact.finish_submit(Err(reason));
            }
        }
    }

    /// True while the contact form has a send task in flight.
    pub fn delivery_in_flight(&self) -> bool {
        *self.contact.status() == SubmitStatus::Sending
    }
}
