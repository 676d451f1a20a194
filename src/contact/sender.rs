//! The notification sender boundary.
//!
//! Delivering a contact message through an actual mail service is an
//! external concern. The app only talks to [`NotificationSender`]; the
//! shipped implementation appends messages to a local outbox file under
//! the user's data directory, and tests inject their own doubles.

use std::path::PathBuf;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tracing::info;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("no writable data directory for the outbox")]
    NoDataDir,

    #[error("failed to write outbox: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode message: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("notification service rejected the message: {0}")]
    Rejected(String),
}

/// A submitted contact form, ready for delivery.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutboundMessage {
    pub id: String,
    pub name: String,
    pub reply_to: String,
    pub body: String,
    pub submitted_at: DateTime<Utc>,
}

impl OutboundMessage {
    pub fn new(name: String, reply_to: String, body: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            reply_to,
            body,
            submitted_at: Utc::now(),
        }
    }
}

/// Proof a message left the app.
#[derive(Debug, Clone)]
pub struct DeliveryReceipt {
    pub message_id: String,
    pub delivered_at: DateTime<Utc>,
}

/// Opaque delivery capability. Fire-and-forget from the form's point of
/// view: one call, one success-or-failure result.
#[async_trait]
pub trait NotificationSender: Send + Sync {
    async fn send(&self, message: &OutboundMessage) -> Result<DeliveryReceipt, DeliveryError>;
}

/// Appends messages as JSON lines to `<data_dir>/folio/outbox.jsonl`.
pub struct OutboxSender {
    path: PathBuf,
}

impl OutboxSender {
    pub fn new() -> Result<Self, DeliveryError> {
        let dir = dirs::data_dir()
            .ok_or(DeliveryError::NoDataDir)?
            .join("folio");
        std::fs::create_dir_all(&dir)?;
        Ok(Self {
            path: dir.join("outbox.jsonl"),
        })
    }

    /// Point the outbox at an explicit file (tests).
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

#[async_trait]
impl NotificationSender for OutboxSender {
    async fn send(&self, message: &OutboundMessage) -> Result<DeliveryReceipt, DeliveryError> {
        let line = serde_json::to_string(message)?;
        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.write_all(b"\n").await?;
        file.flush().await?;
        info!(message_id = %message.id, path = %self.path.display(), "message written to outbox");
        Ok(DeliveryReceipt {
            message_id: message.id.clone(),
            delivered_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_outbox_appends_one_json_line_per_message() {
        let dir = tempfile::tempdir().unwrap();
        let sender = OutboxSender::with_path(dir.path().join("outbox.jsonl"));

        let first = OutboundMessage::new("A".into(), "a@example.com".into(), "hi".into());
        let second = OutboundMessage::new("B".into(), "b@example.com".into(), "yo".into());
        sender.send(&first).await.unwrap();
        sender.send(&second).await.unwrap();

        let raw = std::fs::read_to_string(sender.path()).unwrap();
        let lines: Vec<&str> = raw.lines().collect();
        assert_eq!(lines.len(), 2);
        let decoded: OutboundMessage = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(decoded.name, "A");
        assert_eq!(decoded.id, first.id);
    }

    #[tokio::test]
    async fn test_receipt_carries_the_message_id() {
        let dir = tempfile::tempdir().unwrap();
        let sender = OutboxSender::with_path(dir.path().join("outbox.jsonl"));
        let msg = OutboundMessage::new("A".into(), "a@example.com".into(), "hi".into());
        let receipt = sender.send(&msg).await.unwrap();
        assert_eq!(receipt.message_id, msg.id);
    }

    #[tokio::test]
    async fn test_unwritable_path_surfaces_io_error() {
        let sender = OutboxSender::with_path(PathBuf::from("/nonexistent/dir/outbox.jsonl"));
        let msg = OutboundMessage::new("A".into(), "a@example.com".into(), "hi".into());
        let err = sender.send(&msg).await.unwrap_err();
        assert!(matches!(err, DeliveryError::Io(_)));
    }

    #[test]
    fn test_messages_get_unique_ids() {
        let a = OutboundMessage::new("A".into(), "a@example.com".into(), "x".into());
        let b = OutboundMessage::new("A".into(), "a@example.com".into(), "x".into());
        assert_ne!(a.id, b.id);
    }
}
