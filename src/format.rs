//! Output format selection.
//!
//! [`OutputFormat`] names the serialization used for the parsed message
//! sequence, and [`write_to_format`] / [`to_format_string`] dispatch to the
//! matching writer in [`crate::core::output`]. None of this depends on the
//! CLI.
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() -> chatlens::Result<()> {
//! use chatlens::format::{OutputFormat, write_to_format};
//! use chatlens::core::models::OutputConfig;
//! use chatlens::parser::TranscriptParser;
//!
//! let outcome = TranscriptParser::new().parse_file("chat.txt")?;
//!
//! let format = OutputFormat::from_path("chat.jsonl")?;
//! write_to_format(&outcome.messages, "chat.jsonl", format, &OutputConfig::new())?;
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Message;
use crate::core::models::OutputConfig;
use crate::error::ChatlensError;

/// Serialization for the parsed message sequence.
///
/// # Example
///
/// ```rust
/// use chatlens::format::OutputFormat;
///
/// let format: OutputFormat = "ndjson".parse().unwrap();
/// assert_eq!(format, OutputFormat::Jsonl);
/// assert_eq!(format.extension(), "jsonl");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// Semicolon-delimited `Timestamp;Author;Kind;Content`
    #[default]
    Csv,

    /// Pretty-printed JSON array of messages
    Json,

    /// One JSON object per line (NDJSON)
    Jsonl,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
        }
    }

    /// Returns all accepted format names, aliases included.
    pub fn all_names() -> &'static [&'static str] {
        &["csv", "json", "jsonl", "ndjson"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Csv, OutputFormat::Json, OutputFormat::Jsonl]
    }

    /// Returns the MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "text/csv",
            OutputFormat::Json => "application/json",
            OutputFormat::Jsonl => "application/x-ndjson",
        }
    }

    /// Cargo feature that enables the writer for this format.
    pub fn required_feature(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv-output",
            OutputFormat::Json | OutputFormat::Jsonl => "json-output",
        }
    }

    /// Detects the format from a file extension (case-insensitive).
    ///
    /// ```rust
    /// use chatlens::format::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::from_path("out/Chat.JSON").unwrap(), OutputFormat::Json);
    /// assert!(OutputFormat::from_path("chat.txt").is_err());
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ChatlensError> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        Self::from_name(&ext).ok_or_else(|| {
            ChatlensError::invalid_format(
                "output",
                format!("unknown file extension '.{ext}', expected one of: csv, json, jsonl"),
            )
        })
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "csv" => Some(OutputFormat::Csv),
            "json" => Some(OutputFormat::Json),
            "jsonl" | "ndjson" => Some(OutputFormat::Jsonl),
            _ => None,
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Jsonl => write!(f, "JSONL"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = ChatlensError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(&s.trim().to_lowercase()).ok_or_else(|| {
            ChatlensError::invalid_format(
                "output",
                format!(
                    "unknown format '{s}', expected one of: {}",
                    OutputFormat::all_names().join(", ")
                ),
            )
        })
    }
}

#[allow(dead_code)]
fn feature_disabled(format: OutputFormat) -> ChatlensError {
    ChatlensError::invalid_format(
        "output",
        format!(
            "{format} output requires the '{}' feature to be enabled",
            format.required_feature()
        ),
    )
}

/// Writes messages to `path` in the given format.
///
/// # Errors
///
/// Fails if the writer's feature is disabled or the file cannot be written.
#[allow(unused_variables)]
pub fn write_to_format(
    messages: &[Message],
    path: &str,
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<(), ChatlensError> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::write_csv(messages, path, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::write_json(messages, path, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::write_jsonl(messages, path, config),
        #[allow(unreachable_patterns)]
        _ => Err(feature_disabled(format)),
    }
}

/// Renders messages to a string in the given format.
///
/// ```rust
/// # #[cfg(feature = "csv-output")]
/// # fn main() -> chatlens::Result<()> {
/// use chatlens::core::models::OutputConfig;
/// use chatlens::format::{OutputFormat, to_format_string};
/// use chatlens::parser::TranscriptParser;
///
/// let outcome = TranscriptParser::new().parse_str("12/31/23, 23:59 - Ann: bye");
/// let csv = to_format_string(&outcome.messages, OutputFormat::Csv, &OutputConfig::new())?;
/// assert!(csv.contains("2023-12-31 23:59:00;Ann;message;bye"));
/// # Ok(())
/// # }
/// # #[cfg(not(feature = "csv-output"))]
/// # fn main() {}
/// ```
#[allow(unused_variables)]
pub fn to_format_string(
    messages: &[Message],
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<String, ChatlensError> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::to_csv(messages, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::to_json(messages, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::to_jsonl(messages, config),
        #[allow(unreachable_patterns)]
        _ => Err(feature_disabled(format)),
    }
}
