//! Normalized transcript record.
//!
//! This module provides [`Message`], the record produced by the transcript
//! assembler and consumed read-only by filtering and statistics.
//!
//! # Overview
//!
//! Every surviving record has:
//! - a valid `timestamp` (naive local time, exactly as written in the export)
//! - a non-empty `author` ([`SYSTEM_AUTHOR`] for notification lines)
//! - trimmed `content`, possibly spanning several lines
//! - a [`MessageKind`]
//!
//! # Examples
//!
//! ```
//! use chatlens::{Message, MessageKind};
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2023, 2, 1)
//!     .unwrap()
//!     .and_hms_opt(9, 5, 0)
//!     .unwrap();
//!
//! let msg = Message::new(ts, "Alice", "Hello");
//! assert_eq!(msg.author(), "Alice");
//! assert_eq!(msg.kind(), MessageKind::Message);
//!
//! let notice = Message::system(ts, "Alice created group \"Trip\"");
//! assert!(notice.is_system());
//! ```
//!
//! ## Serialization
//!
//! ```
//! use chatlens::Message;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap().and_hms_opt(12, 0, 0).unwrap();
//! let msg = Message::new(ts, "Alice", "Hello!");
//! let json = serde_json::to_string(&msg)?;
//! let parsed: Message = serde_json::from_str(&json)?;
//!
//! assert_eq!(msg, parsed);
//! # Ok::<(), serde_json::Error>(())
//! ```

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Author assigned to records whose header carries no `author: text` separator.
pub const SYSTEM_AUTHOR: &str = "System";

/// Whether a record was written by a participant or by the messenger itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    /// A participant's message (`author: text`).
    #[default]
    Message,
    /// A notification line: group created, member added, encryption notice...
    System,
}

impl std::fmt::Display for MessageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MessageKind::Message => write!(f, "message"),
            MessageKind::System => write!(f, "system"),
        }
    }
}

/// A single record of a parsed transcript.
///
/// # Fields
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `timestamp` | `NaiveDateTime` | When the message was sent, in the exporter's local time |
/// | `author` | `String` | Display name, or [`SYSTEM_AUTHOR`] |
/// | `content` | `String` | Body text, newline-joined for multi-line messages |
/// | `kind` | [`MessageKind`] | Participant message or system notice |
///
/// Timestamps are naive on purpose: exports carry no zone information and
/// every calendar computation (days, hours, streaks) happens in the
/// exporter's local calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// When the message was sent.
    pub timestamp: NaiveDateTime,

    /// Display name of the author, quote characters and whitespace stripped.
    pub author: String,

    /// Text content of the message.
    ///
    /// May contain newlines for multi-line messages. Attachments appear as
    /// placeholders like `<Media omitted>`.
    pub content: String,

    /// Participant message or system notice.
    #[serde(default)]
    pub kind: MessageKind,
}

impl Message {
    /// Creates a participant message.
    pub fn new(
        timestamp: NaiveDateTime,
        author: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            author: author.into(),
            content: content.into(),
            kind: MessageKind::Message,
        }
    }

    /// Creates a system notice attributed to [`SYSTEM_AUTHOR`].
    pub fn system(timestamp: NaiveDateTime, content: impl Into<String>) -> Self {
        Self {
            timestamp,
            author: SYSTEM_AUTHOR.to_string(),
            content: content.into(),
            kind: MessageKind::System,
        }
    }

    // =========================================================================
    // Accessor methods
    // =========================================================================

    /// Returns the timestamp.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Returns the calendar date of the timestamp.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    /// Returns the author name.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns the message content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the record kind.
    pub fn kind(&self) -> MessageKind {
        self.kind
    }

    // =========================================================================
    // Utility methods
    // =========================================================================

    /// Returns `true` for system notices.
    pub fn is_system(&self) -> bool {
        self.kind == MessageKind::System
    }

    /// Returns `true` if this message's content is empty or whitespace-only.
    pub fn is_empty(&self) -> bool {
        self.content.trim().is_empty()
    }
}
