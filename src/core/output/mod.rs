//! Output format writers.
//!
//! This module provides writers for the parsed message sequence:
//! - [`write_csv`] / [`to_csv`] - CSV with semicolon delimiter - requires `csv-output` feature
//! - [`write_json`] / [`to_json`] - JSON array of messages - requires `json-output` feature
//! - [`write_jsonl`] / [`to_jsonl`] - JSON Lines, one message per line - requires `json-output` feature
//!
//! and for the statistics report:
//! - [`write_stats_json`] / [`stats_to_json`] - requires `json-output` feature
//!
//! JSON and JSONL records deserialize back into [`Message`](crate::Message).
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatlens::Result<()> {
//! use chatlens::core::output::{write_csv, write_jsonl, to_json};
//! use chatlens::core::models::OutputConfig;
//! use chatlens::parser::TranscriptParser;
//!
//! let messages = TranscriptParser::new().parse_file("chat.txt")?.into_messages()?;
//! let config = OutputConfig::new();
//!
//! write_csv(&messages, "chat.csv", &config)?;
//! write_jsonl(&messages, "chat.jsonl", &config.with_system())?;
//! let json = to_json(&messages, &config)?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{stats_to_json, to_json, write_json, write_stats_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};
