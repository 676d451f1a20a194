//! Integration tests for the contact form delivery flow.
//!
//! Exercises the full path: key events fill the form, submit spawns the
//! delivery task against an injected [`NotificationSender`], and the
//! result comes back through the app's message channel.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use folio::app::{App, AppMessage, Section};
use folio::config::FolioConfig;
use folio::contact::{
    ContactField, DeliveryError, DeliveryReceipt, NotificationSender, OutboundMessage,
    OutboxSender, SubmitStatus,
};

/// Records every message it is asked to deliver and always succeeds.
#[derive(Default)]
struct RecordingSender {
    sent: Mutex<Vec<OutboundMessage>>,
}

#[async_trait]
impl NotificationSender for RecordingSender {
    async fn send(&self, message: &OutboundMessage) -> Result<DeliveryReceipt, DeliveryError> {
        self.sent.lock().unwrap().push(message.clone());
        Ok(DeliveryReceipt {
            message_id: message.id.clone(),
            delivered_at: Utc::now(),
        })
    }
}

/// Always refuses delivery.
struct RejectingSender;

#[async_trait]
impl NotificationSender for RejectingSender {
    async fn send(&self, _message: &OutboundMessage) -> Result<DeliveryReceipt, DeliveryError> {
        Err(DeliveryError::Rejected("mailbox full".to_string()))
    }
}

fn contact_app(sender: Arc<dyn NotificationSender>) -> App {
    let mut app = App::with_sender(FolioConfig::default().with_skip_boot(true), sender)
        .expect("app should build from embedded content");
    app.goto_section(Section::Contact);
    app
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
}

/// Fill all three fields through key dispatch and submit from the
/// message field with Enter.
fn fill_and_submit(app: &mut App) {
    for c in "Mayank".chars() {
        press(app, KeyCode::Char(c));
    }
    press(app, KeyCode::Enter);
    for c in "hello@example.com".chars() {
        press(app, KeyCode::Char(c));
    }
    press(app, KeyCode::Enter);
    for c in "Let's build something".chars() {
        press(app, KeyCode::Char(c));
    }
    press(app, KeyCode::Enter);
}

async fn deliver_next_message(app: &mut App) {
    let mut rx = app.message_rx.take().expect("message receiver present");
    let msg = rx.recv().await.expect("delivery task should report back");
    app.message_rx = Some(rx);
    app.handle_message(msg);
}

// ==================== Happy path ====================

#[tokio::test]
async fn test_submit_delivers_and_clears_the_form() {
    let sender = Arc::new(RecordingSender::default());
    let mut app = contact_app(sender.clone());

    fill_and_submit(&mut app);
    assert_eq!(*app.contact.status(), SubmitStatus::Sending);

    deliver_next_message(&mut app).await;

    assert!(matches!(app.contact.status(), SubmitStatus::Sent { .. }));
    assert!(app.contact.name.is_empty());
    assert!(app.contact.email.is_empty());
    assert!(app.contact.message.is_empty());
    assert_eq!(app.contact.focus(), ContactField::Name);

    let sent = sender.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].name, "Mayank");
    assert_eq!(sent[0].reply_to, "hello@example.com");
    assert_eq!(sent[0].body, "Let's build something");
}

#[tokio::test]
async fn test_sent_status_carries_the_receipt_id() {
    let sender = Arc::new(RecordingSender::default());
    let mut app = contact_app(sender.clone());

    fill_and_submit(&mut app);
    deliver_next_message(&mut app).await;

    let sent_id = match app.contact.status() {
        SubmitStatus::Sent { id } => id.clone(),
        other => panic!("expected Sent, got {:?}", other),
    };
    assert_eq!(sent_id, sender.sent.lock().unwrap()[0].id);
}

#[tokio::test]
async fn test_outbox_sender_end_to_end() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("outbox.jsonl");
    let mut app = contact_app(Arc::new(OutboxSender::with_path(path.clone())));

    fill_and_submit(&mut app);
    deliver_next_message(&mut app).await;

    assert!(matches!(app.contact.status(), SubmitStatus::Sent { .. }));
    let raw = std::fs::read_to_string(&path).expect("outbox file written");
    let lines: Vec<&str> = raw.lines().collect();
    assert_eq!(lines.len(), 1);
    let decoded: OutboundMessage = serde_json::from_str(lines[0]).expect("valid JSON line");
    assert_eq!(decoded.name, "Mayank");
}

// ==================== Failure and locking ====================

#[tokio::test]
async fn test_rejected_delivery_keeps_fields_for_retry() {
    let mut app = contact_app(Arc::new(RejectingSender));

    fill_and_submit(&mut app);
    deliver_next_message(&mut app).await;

    match app.contact.status() {
        SubmitStatus::Failed { reason } => {
            assert!(reason.contains("mailbox full"), "reason was {:?}", reason)
        }
        other => panic!("expected Failed, got {:?}", other),
    }
    assert_eq!(app.contact.name.content(), "Mayank");
    assert_eq!(app.contact.email.content(), "hello@example.com");

    // The form unlocked again; a resubmit goes back to Sending.
    app.contact.set_focus(ContactField::Message);
    press(&mut app, KeyCode::Enter);
    assert_eq!(*app.contact.status(), SubmitStatus::Sending);
}

#[tokio::test]
async fn test_typing_is_locked_while_sending() {
    let mut app = contact_app(Arc::new(RecordingSender::default()));

    fill_and_submit(&mut app);
    assert_eq!(*app.contact.status(), SubmitStatus::Sending);

    // Keystrokes into the locked form are swallowed.
    press(&mut app, KeyCode::Char('x'));
    press(&mut app, KeyCode::Backspace);
    assert_eq!(app.contact.message.content(), "Let's build something");

    // Focus movement still works while locked.
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.contact.focus(), ContactField::Name);
}

#[tokio::test]
async fn test_double_submit_spawns_one_delivery() {
    let sender = Arc::new(RecordingSender::default());
    let mut app = contact_app(sender.clone());

    fill_and_submit(&mut app);
    // Mash Enter on the message field while the send is in flight.
    app.contact.set_focus(ContactField::Message);
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Enter);

    deliver_next_message(&mut app).await;
    assert_eq!(
        sender.sent.lock().unwrap().len(),
        1,
        "only the first submit should reach the sender"
    );
}

#[tokio::test]
async fn test_validation_failure_never_reaches_the_sender() {
    let sender = Arc::new(RecordingSender::default());
    let mut app = contact_app(sender.clone());

    // Name only; email and message empty.
    for c in "Mayank".chars() {
        press(&mut app, KeyCode::Char(c));
    }
    app.contact.set_focus(ContactField::Message);
    press(&mut app, KeyCode::Enter);

    assert_eq!(
        *app.contact.status(),
        SubmitStatus::Failed {
            reason: "all fields are required".to_string()
        }
    );
    assert!(sender.sent.lock().unwrap().is_empty());
    assert_eq!(
        app.contact.name.content(),
        "Mayank",
        "rejected input must survive for correction"
    );
}

#[tokio::test]
async fn test_bad_email_rejected_before_delivery() {
    let sender = Arc::new(RecordingSender::default());
    let mut app = contact_app(sender.clone());

    for c in "Mayank".chars() {
        press(&mut app, KeyCode::Char(c));
    }
    press(&mut app, KeyCode::Enter);
    for c in "not-an-address".chars() {
        press(&mut app, KeyCode::Char(c));
    }
    press(&mut app, KeyCode::Enter);
    for c in "hi".chars() {
        press(&mut app, KeyCode::Char(c));
    }
    press(&mut app, KeyCode::Enter);

    assert_eq!(
        *app.contact.status(),
        SubmitStatus::Failed {
            reason: "email address looks invalid".to_string()
        }
    );
    assert!(sender.sent.lock().unwrap().is_empty());
}
