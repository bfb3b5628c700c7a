//! Filter messages by calendar date range.
//!
//! This module provides [`FilterConfig`] for defining the range,
//! [`apply_filters`] for applying it, and [`filter_by_date`] as a
//! one-call shortcut taking `YYYY-MM-DD` strings.
//!
//! # Examples
//!
//! ```
//! use chatlens::core::filter::filter_by_date;
//! use chatlens::Message;
//! use chrono::NaiveDate;
//!
//! # fn main() -> chatlens::Result<()> {
//! let day = |d| NaiveDate::from_ymd_opt(2024, 6, d).unwrap().and_hms_opt(12, 0, 0).unwrap();
//! let messages = vec![
//!     Message::new(day(1), "Alice", "Old"),
//!     Message::new(day(15), "Alice", "New"),
//! ];
//!
//! let filtered = filter_by_date(&messages, Some("2024-06-10"), None)?;
//! assert_eq!(filtered.len(), 1);
//! assert_eq!(filtered[0].content, "New");
//! # Ok(())
//! # }
//! ```
//!
//! # Behavior Notes
//!
//! - Both bounds are inclusive whole days: `start 00:00:00.000` to
//!   `end 23:59:59.999`
//! - A missing bound is open-ended; no bounds returns a copy of the input
//! - The input slice is never modified

use chrono::{NaiveDate, NaiveDateTime};

use crate::Message;
use crate::error::ChatlensError;

/// Inclusive timestamp range used to narrow a message sequence.
///
/// # Examples
///
/// ```
/// use chatlens::core::filter::FilterConfig;
///
/// # fn main() -> chatlens::Result<()> {
/// let config = FilterConfig::new()
///     .with_date_from("2024-01-01")?
///     .with_date_to("2024-12-31")?;
/// assert!(config.is_active());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterConfig {
    /// Include only messages at or after this instant.
    pub after: Option<NaiveDateTime>,

    /// Include only messages at or before this instant.
    pub before: Option<NaiveDateTime>,
}

impl FilterConfig {
    /// Creates a new empty filter configuration.
    ///
    /// No bounds are active by default; all messages pass through.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the start date (inclusive, from midnight).
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::InvalidDate`] if the string is not `YYYY-MM-DD`.
    pub fn with_date_from(mut self, date_str: &str) -> Result<Self, ChatlensError> {
        self.after = Some(start_of_day(parse_date(date_str)?));
        Ok(self)
    }

    /// Sets the end date (inclusive, through 23:59:59.999).
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::InvalidDate`] if the string is not `YYYY-MM-DD`.
    pub fn with_date_to(mut self, date_str: &str) -> Result<Self, ChatlensError> {
        self.before = Some(end_of_day(parse_date(date_str)?));
        Ok(self)
    }

    /// Sets the start instant directly.
    #[must_use]
    pub fn with_after(mut self, dt: NaiveDateTime) -> Self {
        self.after = Some(dt);
        self
    }

    /// Sets the end instant directly.
    #[must_use]
    pub fn with_before(mut self, dt: NaiveDateTime) -> Self {
        self.before = Some(dt);
        self
    }

    /// Returns `true` if any bound is set.
    pub fn is_active(&self) -> bool {
        self.after.is_some() || self.before.is_some()
    }

    /// Returns `true` if `msg` lies within the range.
    pub fn matches(&self, msg: &Message) -> bool {
        let ts = msg.timestamp;
        !(self.after.is_some_and(|after| ts < after)
            || self.before.is_some_and(|before| ts > before))
    }
}

/// Parse a date string in YYYY-MM-DD format.
fn parse_date(date_str: &str) -> Result<NaiveDate, ChatlensError> {
    NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d")
        .map_err(|_| ChatlensError::invalid_date(date_str))
}

fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(chrono::NaiveTime::MIN)
}

fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    // 23:59:59.999 is always a valid time of day
    date.and_hms_milli_opt(23, 59, 59, 999)
        .unwrap_or_else(|| start_of_day(date))
}

/// Returns the messages that fall within the configured range.
///
/// The result preserves input order. If no bound is active the input is
/// copied unchanged.
pub fn apply_filters(messages: &[Message], config: &FilterConfig) -> Vec<Message> {
    if !config.is_active() {
        return messages.to_vec();
    }

    messages
        .iter()
        .filter(|msg| config.matches(msg))
        .cloned()
        .collect()
}

/// Narrows `messages` to the inclusive calendar range `[start, end]`.
///
/// Dates are `YYYY-MM-DD`; `None` leaves that side open.
///
/// # Errors
///
/// Returns [`ChatlensError::InvalidDate`] for a malformed bound.
pub fn filter_by_date(
    messages: &[Message],
    start: Option<&str>,
    end: Option<&str>,
) -> Result<Vec<Message>, ChatlensError> {
    let mut config = FilterConfig::new();
    if let Some(start) = start {
        config = config.with_date_from(start)?;
    }
    if let Some(end) = end {
        config = config.with_date_to(end)?;
    }
    Ok(apply_filters(messages, &config))
}
