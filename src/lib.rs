//! # Chatlens
//!
//! A Rust library for parsing plain-text messenger transcripts (the
//! "Export chat" `.txt` files) and computing conversation statistics.
//!
//! ## Overview
//!
//! Transcripts come in two header layouts:
//! - **Bracketed** - `[1/2/23, 9:05:12 AM] Alice: Hello`
//! - **Dashed** - `1/2/23, 09:05 - Alice: Hello`
//!
//! Neither says whether `1/2/23` is the 1st of February or January 2nd.
//! Chatlens infers the day/month order from the whole document, assembles
//! multi-line messages, and reports counts, rankings, streaks and reply
//! times over the result.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatlens::prelude::*;
//!
//! let raw = "\
//! [13/2/23, 9:00 AM] Alice: Breakfast?
//! [13/2/23, 9:04 AM] Bob: On my way
//! still putting shoes on
//! [13/2/23, 9:05 AM] Alice created group \"Brunch\"";
//!
//! let outcome = TranscriptParser::new().parse_str(raw);
//! assert_eq!(outcome.resolved_format, DateFormat::DayFirst);
//! assert!(!outcome.ambiguous);
//! assert_eq!(outcome.messages[1].content, "On my way\nstill putting shoes on");
//! assert!(outcome.messages[2].is_system());
//!
//! let stats = compute_statistics(&outcome.messages, &StatsConfig::default());
//! assert_eq!(stats.total_messages, 2);
//! assert_eq!(stats.response_times["Bob"].average_minutes, Some(4.0));
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - transcript assembly ([`TranscriptParser`](parser::TranscriptParser), [`ParseOutcome`](parser::ParseOutcome))
//! - [`parsing`] - header matching, date-order resolution, timestamp building
//! - [`core`] - filtering, statistics, rankings, output writers
//! - [`config`] - [`ParseConfig`](config::ParseConfig), [`StatsConfig`](config::StatsConfig), [`Lexicon`](config::Lexicon)
//! - [`format`] - [`OutputFormat`](format::OutputFormat) and format dispatch
//! - [`message`] - [`Message`], [`MessageKind`]
//! - [`error`] - [`ChatlensError`], [`Result`]
//! - `cli` - clap argument definitions (feature `cli`)
//! - [`prelude`] - convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod message;
pub mod parser;
pub mod parsing;

// Re-export the main types at the crate root for convenience
pub use error::{ChatlensError, Result};
pub use message::{Message, MessageKind};

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatlens::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{Message, MessageKind};

    pub use crate::error::{ChatlensError, Result};

    pub use crate::parser::{ParseOutcome, TranscriptParser};
    pub use crate::parsing::DateFormat;

    pub use crate::config::{Lexicon, ParseConfig, StatsConfig};

    pub use crate::core::filter::{FilterConfig, apply_filters, filter_by_date};
    pub use crate::core::models::OutputConfig;
    pub use crate::core::stats::{Statistics, compute_statistics};

    pub use crate::format::{OutputFormat, to_format_string, write_to_format};

    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{
        stats_to_json, to_json, to_jsonl, write_json, write_jsonl, write_stats_json,
    };
}
