//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure
//! - [`DateOrder`] - `--date-format` values
//! - [`OutputFormat`] - `--format` values
//!
//! [`Args`] also knows how to turn itself into the library's configuration
//! types, so `main` stays a thin pipeline.
//!
//! ```rust
//! use chatlens::cli::Args;
//! use clap::Parser;
//!
//! let args = Args::parse_from(["chatlens", "chat.txt", "--date-format", "mdy", "--response-gap", "30"]);
//! assert_eq!(args.stats_config().response_gap_minutes, Some(30));
//! assert!(args.parse_config().date_format.is_some());
//! ```

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::{ParseConfig, StatsConfig};
use crate::core::filter::FilterConfig;
use crate::core::models::OutputConfig;
use crate::error::Result;
use crate::parsing::DateFormat;

/// Default output path; its extension follows `--format`.
pub const DEFAULT_OUTPUT: &str = "chat_messages.csv";

/// Parse a plain-text messenger transcript and report conversation statistics.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatlens")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatlens chat.txt
    chatlens chat.txt --stats stats.json
    chatlens chat.txt --date-format mdy -f jsonl -o messages.jsonl
    chatlens chat.txt --after 2024-01-01 --before 2024-06-30
    chatlens chat.txt --response-gap 60 --overnight-buffer 480 --stats stats.json")]
pub struct Args {
    /// Path to the exported transcript (.txt)
    pub input: String,

    /// Path to output file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: String,

    /// Output format for the parsed messages
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: OutputFormat,

    /// Day/month order of header dates (inferred when omitted)
    #[arg(long, value_enum, value_name = "ORDER")]
    pub date_format: Option<DateOrder>,

    /// Keep messages on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Keep messages on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Ignore reply gaps longer than this many minutes
    #[arg(long, value_name = "MINUTES")]
    pub response_gap: Option<u32>,

    /// Extra minutes allowed for replies that cross midnight
    #[arg(long, value_name = "MINUTES", default_value_t = 0)]
    pub overnight_buffer: u32,

    /// Write the statistics report as JSON to this path
    #[arg(long, value_name = "PATH")]
    pub stats: Option<String>,

    /// Include system notices in the message output
    #[arg(long)]
    pub include_system: bool,

    /// Show debug logs
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only show errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Output path, with the extension switched to `--format` when the
    /// default path is in use.
    pub fn output_path(&self) -> String {
        if self.output != DEFAULT_OUTPUT {
            return self.output.clone();
        }
        let format: crate::format::OutputFormat = self.format.into();
        format!("chat_messages.{}", format.extension())
    }

    pub fn parse_config(&self) -> ParseConfig {
        match self.date_format {
            Some(order) => ParseConfig::new().with_date_format(order.into()),
            None => ParseConfig::new(),
        }
    }

    pub fn stats_config(&self) -> StatsConfig {
        let config = StatsConfig::new().with_overnight_buffer_minutes(self.overnight_buffer);
        match self.response_gap {
            Some(minutes) => config.with_response_gap_minutes(minutes),
            None => config,
        }
    }

    /// Date filter from `--after` / `--before`.
    ///
    /// # Errors
    ///
    /// Fails on a bound that is not `YYYY-MM-DD`.
    pub fn filter_config(&self) -> Result<FilterConfig> {
        let mut filter = FilterConfig::new();
        if let Some(after) = &self.after {
            filter = filter.with_date_from(after)?;
        }
        if let Some(before) = &self.before {
            filter = filter.with_date_to(before)?;
        }
        Ok(filter)
    }

    pub fn output_config(&self) -> OutputConfig {
        OutputConfig {
            include_system: self.include_system,
        }
    }
}

/// Day/month order accepted by `--date-format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateOrder {
    /// 31/12/2023
    #[value(alias = "dmy")]
    DayFirst,

    /// 12/31/2023
    #[value(alias = "mdy")]
    MonthFirst,
}

impl From<DateOrder> for DateFormat {
    fn from(order: DateOrder) -> DateFormat {
        match order {
            DateOrder::DayFirst => DateFormat::DayFirst,
            DateOrder::MonthFirst => DateFormat::MonthFirst,
        }
    }
}

/// Output format options for `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// CSV with semicolon delimiter
    #[default]
    Csv,

    /// JSON array of messages
    Json,

    /// JSON Lines - one message per line
    #[value(alias = "ndjson")]
    Jsonl,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", crate::format::OutputFormat::from(*self))
    }
}

// Conversion to library format type
impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> crate::format::OutputFormat {
        match format {
            OutputFormat::Csv => crate::format::OutputFormat::Csv,
            OutputFormat::Json => crate::format::OutputFormat::Json,
            OutputFormat::Jsonl => crate::format::OutputFormat::Jsonl,
        }
    }
}
