//! Analysis over parsed messages.
//!
//! This module contains:
//! - [`filter`] - Date-range filtering
//! - [`stats`] - The statistics report and its single-pass aggregator
//! - [`text`] - Word and emoji extraction
//! - [`rank`] - Frequency tables and top-N ranking
//! - [`streak`] - Longest run of active days
//! - [`response`] - Reply-gap acceptance and summaries
//! - [`models`] - Output configuration
//! - [`output`] - Format writers (CSV, JSON, JSONL)
//!
//! # Quick Start
//!
//! ```rust
//! use chatlens::config::StatsConfig;
//! use chatlens::core::{compute_statistics, filter_by_date};
//! use chatlens::parser::TranscriptParser;
//!
//! # fn main() -> chatlens::Result<()> {
//! let raw = "[1/2/23, 9:05 AM] Alice: Hello\n[2/2/23, 9:07 AM] Bob: Hi Alice";
//! let outcome = TranscriptParser::new().parse_str(raw);
//!
//! let february = filter_by_date(&outcome.messages, Some("2023-02-01"), Some("2023-02-01"))?;
//! let stats = compute_statistics(&february, &StatsConfig::default());
//! assert_eq!(stats.total_messages, 1);
//! # Ok(())
//! # }
//! ```

pub mod filter;
pub mod models;
pub mod output;
pub mod rank;
pub mod response;
pub mod stats;
pub mod streak;
pub mod text;

pub use filter::{FilterConfig, apply_filters, filter_by_date};
pub use models::OutputConfig;
pub use rank::{FrequencyTable, RankedEntry};
pub use response::{ResponseTimes, ResponseWindow};
pub use stats::{
    DayActivity, HourActivity, LongestMessage, ParticipantStats, Statistics, compute_statistics,
};
pub use streak::Streak;

pub use crate::Message;

#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{stats_to_json, to_json, to_jsonl, write_json, write_jsonl, write_stats_json};
