//! Unified error types for chatlens.
//!
//! This module provides a single [`ChatlensError`] enum that covers every
//! failure the library can surface.
//!
//! # What is *not* an error
//!
//! Malformed transcript content never produces an error. Unrecognized
//! lines become continuation text or are discarded, records with impossible
//! dates are dropped, and an ambiguous date format is reported as data on
//! [`ParseOutcome`](crate::parser::ParseOutcome). Errors are reserved for
//! the boundary: reading files, writing output, and caller-supplied
//! arguments such as filter dates.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatlens operations.
///
/// # Example
///
/// ```rust
/// use chatlens::error::Result;
/// use chatlens::Message;
///
/// fn my_function() -> Result<Vec<Message>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatlensError>;

/// The error type for all chatlens operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatlensError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input transcript doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing output)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A caller-supplied value doesn't match the expected structure.
    ///
    /// Raised for unknown date-format or output-format names, never for
    /// transcript content.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// What was being interpreted (e.g., "date", "output")
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// Invalid date in a filter bound.
    ///
    /// Date filters expect YYYY-MM-DD format.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// The transcript was read but yielded no messages.
    ///
    /// Distinct from I/O failures: the text was obtained, it just
    /// contained nothing parsable.
    #[error("Nothing parsable{}: no message headers were recognized", path.as_ref().map(|p| format!(" in {}", p.display())).unwrap_or_default())]
    NoMessages {
        /// The transcript path, if known
        path: Option<PathBuf>,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// UTF-8 encoding error.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl From<std::string::FromUtf8Error> for ChatlensError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatlensError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatlensError {
    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatlensError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        ChatlensError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Creates a "nothing parsable" error for the given transcript.
    pub fn no_messages(path: Option<PathBuf>) -> Self {
        ChatlensError::NoMessages { path }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatlensError::Io(_))
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatlensError::InvalidFormat { .. })
    }

    /// Returns `true` if this is an invalid date error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, ChatlensError::InvalidDate { .. })
    }

    /// Returns `true` if the transcript contained no messages.
    pub fn is_no_messages(&self) -> bool {
        matches!(self, ChatlensError::NoMessages { .. })
    }
}
