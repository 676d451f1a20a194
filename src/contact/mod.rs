//! Contact form state machine.
//!
//! Three fields, Tab-cycled focus, and a submit status that tracks the
//! async delivery: `Idle -> Sending -> Sent | Failed`. A failed send
//! keeps the fields for resubmission; a successful one clears them.

pub mod sender;

pub use sender::{DeliveryError, DeliveryReceipt, NotificationSender, OutboundMessage, OutboxSender};

use tracing::debug;

use crate::widgets::InputField;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Email,
            Self::Email => Self::Message,
            Self::Message => Self::Name,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Self::Name => Self::Message,
            Self::Email => Self::Name,
            Self::Message => Self::Email,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "NAME",
            Self::Email => "EMAIL",
            Self::Message => "MESSAGE",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStatus {
    Idle,
    /// A send task is in flight; the form is locked.
    Sending,
    Sent {
        id: String,
    },
    /// Validation or delivery failed; fields are kept for retry.
    Failed {
        reason: String,
    },
}

#[derive(Debug, Clone)]
pub struct ContactForm {
    pub name: InputField,
    pub email: InputField,
    pub message: InputField,
    focus: ContactField,
    status: SubmitStatus,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            name: InputField::new(),
            email: InputField::new(),
            message: InputField::new(),
            focus: ContactField::Name,
            status: SubmitStatus::Idle,
        }
    }

    pub fn focus(&self) -> ContactField {
        self.focus
    }

    pub fn set_focus(&mut self, field: ContactField) {
        self.focus = field;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    pub fn focused_field_mut(&mut self) -> &mut InputField {
        match self.focus {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        }
    }

    pub fn field_mut(&mut self, field: ContactField) -> &mut InputField {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        }
    }

    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    /// Typing is allowed except while a send is in flight.
    pub fn can_edit(&self) -> bool {
        self.status != SubmitStatus::Sending
    }

    /// Check the fields and, when valid, lock the form and build the
    /// message for the sender task. Invalid input becomes a `Failed`
    /// status without touching the fields.
    pub fn begin_submit(&mut self) -> Option<OutboundMessage> {
        if self.status == SubmitStatus::Sending {
            return None;
        }
        if let Err(reason) = self.validate() {
            debug!(%reason, "contact form rejected");
            self.status = SubmitStatus::Failed { reason };
            return None;
        }
        self.status = SubmitStatus::Sending;
        Some(OutboundMessage::new(
            self.name.content().trim().to_string(),
            self.email.content().trim().to_string(),
            self.message.content().trim().to_string(),
        ))
    }

    /// Record the sender task's result.
    pub fn finish_submit(&mut self, result: Result<String, String>) {
        match result {
            Ok(id) => {
                self.name.clear();
                self.email.clear();
                self.message.clear();
                self.focus = ContactField::Name;
                self.status = SubmitStatus::Sent { id };
            }
            Err(reason) => {
                self.status = SubmitStatus::Failed { reason };
            }
        }
    }

    fn validate(&self) -> Result<(), String> {
        if self.name.content().trim().is_empty()
            || self.email.content().trim().is_empty()
            || self.message.content().trim().is_empty()
        {
            return Err("all fields are required".to_string());
        }
        let email = self.email.content().trim();
        if !email.contains('@') || !email.contains('.') {
            return Err("email address looks invalid".to_string());
        }
        Ok(())
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}
