//! Record types handed to the filter by a message reader: message and raw attachment rows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single exported message. Produced by a reader; the filter only inspects `sender` and `date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub rowid: i64,
    #[serde(default)]
    pub chat_id: i64,
    /// Sender handle (phone number, email, ...). Matched case-insensitively.
    pub sender: String,
    #[serde(default)]
    pub text: String,
    #[serde(with = "crate::iso8601::serde_millis")]
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub is_from_me: bool,
    /// Transport, e.g. `iMessage` or `SMS`.
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub attachments: Vec<AttachmentRecord>,
}

impl Message {
    /// Creates a message with only sender and date set; remaining fields take their defaults.
    pub fn new(sender: impl Into<String>, date: DateTime<Utc>) -> Self {
        Self {
            rowid: 0,
            chat_id: 0,
            sender: sender.into(),
            text: String::new(),
            date,
            is_from_me: false,
            service: String::new(),
            attachments: Vec::new(),
        }
    }
}

/// Attachment row as stored by the source; `path` may still use `~` shorthand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttachmentRecord {
    pub filename: String,
    pub transfer_name: String,
    pub path: String,
    pub mime_type: String,
    pub total_bytes: i64,
}
