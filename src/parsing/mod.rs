//! Building blocks of transcript parsing.
//!
//! - [`header`] - recognizes the `date, time` prefix of a message line
//! - [`date_format`] - infers whether dates are day-first or month-first
//! - [`timestamp`] - turns header tokens into a naive local timestamp
//!
//! The assembler in [`crate::parser`] wires them together.

pub mod date_format;
pub mod header;
pub mod timestamp;

// Re-export commonly used items
pub use date_format::{
    DateFormat, FormatMetrics, FormatResolution, MAX_AMBIGUOUS_SAMPLES, evaluate_format,
    resolve_date_format,
};
pub use header::{Header, match_header};
pub use timestamp::{
    build_timestamp, expand_year, header_timestamp, header_year, parse_time_of_day,
};
