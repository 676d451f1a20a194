//! AppMessage enum for async communication within the application.

/// Messages received from async operations (contact delivery results)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// Contact form delivery finished; carries the receipt id
    DeliveryComplete { id: String },
    /// Contact form delivery failed
    DeliveryFailed { reason: String },
}
