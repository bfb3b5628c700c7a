//! Transcript assembly.
//!
//! Turns raw export text into a sequence of [`Message`] records. A message
//! starts at every header line; lines without a header are continuation
//! text of the message above them.
//!
//! # Example
//!
//! ```rust
//! use chatlens::parser::TranscriptParser;
//! use chatlens::parsing::DateFormat;
//!
//! let raw = "[1/2/23, 9:00 AM] Bob: line one\nstill line one\n[1/2/23, 9:01 AM] Alice: ok";
//!
//! let outcome = TranscriptParser::new().parse_str(raw);
//! assert_eq!(outcome.messages.len(), 2);
//! assert_eq!(outcome.messages[0].content, "line one\nstill line one");
//! assert_eq!(outcome.resolved_format, DateFormat::DayFirst);
//! assert!(outcome.ambiguous);
//! ```
//!
//! # Assembly rules
//!
//! - A leading byte-order mark is stripped and `\r\n` becomes `\n`
//! - Header remainders split at the first `": "` into author and text;
//!   without a separator the line is a system notice
//! - Text before the first header is discarded
//! - Records whose date is impossible under the resolved format are dropped

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ParseConfig;
use crate::error::ChatlensError;
use crate::message::{Message, MessageKind, SYSTEM_AUTHOR};
use crate::parsing::{
    DateFormat, FormatMetrics, FormatResolution, Header, header_timestamp, match_header,
    resolve_date_format,
};

/// Characters stripped from both ends of an author name.
const AUTHOR_QUOTES: &[char] = &['"', '\'', '\u{201c}', '\u{201d}', '\u{2018}', '\u{2019}'];

/// Result of parsing one transcript.
///
/// Besides the messages it carries the day/month resolution so callers can
/// show the choice and offer a manual override when it was ambiguous.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseOutcome {
    /// Surviving records in document order
    pub messages: Vec<Message>,
    /// Day/month order used for every header
    pub resolved_format: DateFormat,
    /// `true` when the order was inferred by scoring rather than evidence
    pub ambiguous: bool,
    /// Candidate scores, present only when `ambiguous`
    pub candidate_metrics: Vec<FormatMetrics>,
    /// `true` when the caller forced the order
    pub used_override: bool,
    /// Records discarded because their date was impossible
    pub dropped: usize,
}

impl ParseOutcome {
    /// Returns `true` if nothing parsable was found.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Returns the number of surviving records.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns the resolution as a standalone value.
    pub fn resolution(&self) -> FormatResolution {
        FormatResolution {
            format: self.resolved_format,
            ambiguous: self.ambiguous,
            candidates: self.candidate_metrics.clone(),
            used_override: self.used_override,
        }
    }

    /// Consumes the outcome, failing if nothing was parsed.
    ///
    /// Useful at application boundaries where an empty transcript should be
    /// reported to the user.
    pub fn into_messages(self) -> Result<Vec<Message>, ChatlensError> {
        if self.messages.is_empty() {
            return Err(ChatlensError::no_messages(None));
        }
        Ok(self.messages)
    }
}

/// Parser for plain-text messenger transcripts.
///
/// # Example
///
/// ```rust,no_run
/// use chatlens::parser::TranscriptParser;
/// use std::path::Path;
///
/// let parser = TranscriptParser::new();
/// let outcome = parser.parse(Path::new("chat.txt"))?;
/// println!("{} messages", outcome.len());
/// # Ok::<(), chatlens::ChatlensError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct TranscriptParser {
    config: ParseConfig,
}

impl TranscriptParser {
    /// Creates a parser that infers the date format.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParseConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParseConfig {
        &self.config
    }

    /// Reads and parses a transcript file.
    ///
    /// Only I/O problems are errors; an empty result is a valid outcome.
    /// Bytes that are not valid UTF-8 become U+FFFD.
    pub fn parse(&self, path: &Path) -> Result<ParseOutcome, ChatlensError> {
        let bytes = fs::read(path)?;
        Ok(self.parse_str(&String::from_utf8_lossy(&bytes)))
    }

    /// Parses a transcript from a file path string.
    pub fn parse_file(&self, path: &str) -> Result<ParseOutcome, ChatlensError> {
        self.parse(Path::new(path))
    }

    /// Parses transcript text already in memory.
    pub fn parse_str(&self, content: &str) -> ParseOutcome {
        parse(content, &self.config)
    }
}

/// Normalizes an author name; empty means "no resolvable sender".
fn clean_author(raw: &str) -> &str {
    raw.trim().trim_matches(AUTHOR_QUOTES).trim()
}

/// The message currently receiving continuation lines.
struct OpenRecord {
    timestamp: Option<NaiveDateTime>,
    author: String,
    content: String,
    kind: MessageKind,
}

impl OpenRecord {
    fn from_header(header: &Header<'_>, format: DateFormat) -> Self {
        let timestamp = header_timestamp(header, format);
        let remainder = header.remainder;

        let (author, content, kind) = match remainder.split_once(": ") {
            Some((left, right)) => match clean_author(left) {
                "" => (SYSTEM_AUTHOR, remainder, MessageKind::System),
                author => (author, right, MessageKind::Message),
            },
            None => (SYSTEM_AUTHOR, remainder, MessageKind::System),
        };

        Self {
            timestamp,
            author: author.to_string(),
            content: content.to_string(),
            kind,
        }
    }

    fn append_line(&mut self, line: &str) {
        self.content.push('\n');
        self.content.push_str(line);
    }

    /// Closes the record; `None` if its timestamp never resolved.
    fn finish(self) -> Option<Message> {
        Some(Message {
            timestamp: self.timestamp?,
            author: self.author,
            content: self.content.trim().to_string(),
            kind: self.kind,
        })
    }
}

enum AssemblerState {
    NoOpenRecord,
    RecordOpen(OpenRecord),
}

/// Strips a byte-order mark and normalizes line endings.
fn normalize_text(raw: &str) -> Cow<'_, str> {
    let text = raw.strip_prefix('\u{feff}').unwrap_or(raw);
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

/// Parses transcript text.
///
/// Never fails: unrecognized lines become continuation text or are
/// discarded, and records with impossible dates are dropped. Calling it
/// twice with the same input and configuration yields identical results.
pub fn parse(raw: &str, config: &ParseConfig) -> ParseOutcome {
    let text = normalize_text(raw);
    let lines: Vec<&str> = text.split('\n').collect();

    let resolution = resolve_date_format(&lines, config.date_format);
    let format = resolution.format;

    let mut messages = Vec::new();
    let mut dropped = 0usize;
    let mut flush = |record: OpenRecord, messages: &mut Vec<Message>| match record.finish() {
        Some(msg) => messages.push(msg),
        None => dropped += 1,
    };

    let mut state = AssemblerState::NoOpenRecord;
    for line in &lines {
        if let Some(header) = match_header(line) {
            if let AssemblerState::RecordOpen(record) = state {
                flush(record, &mut messages);
            }
            state = AssemblerState::RecordOpen(OpenRecord::from_header(&header, format));
        } else if let AssemblerState::RecordOpen(record) = &mut state {
            record.append_line(line);
        }
    }
    if let AssemblerState::RecordOpen(record) = state {
        flush(record, &mut messages);
    }

    debug!(
        messages = messages.len(),
        dropped,
        %format,
        ambiguous = resolution.ambiguous,
        "transcript parsed"
    );

    ParseOutcome {
        messages,
        resolved_format: format,
        ambiguous: resolution.ambiguous,
        candidate_metrics: resolution.candidates,
        used_override: resolution.used_override,
        dropped,
    }
}
