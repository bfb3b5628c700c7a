//! Configuration types for parsing and statistics.
//!
//! This module provides plain configuration structs for library usage,
//! without any CLI framework dependencies.
//!
//! - [`ParseConfig`] - transcript parsing settings (date-format override)
//! - [`StatsConfig`] - response-time cutoff, ranking sizes, lexicon
//! - [`Lexicon`] - stop words and media-placeholder markers
//!
//! # Example
//!
//! ```rust
//! use chatlens::config::{ParseConfig, StatsConfig};
//! use chatlens::parsing::DateFormat;
//!
//! let parse = ParseConfig::new().with_date_format(DateFormat::MonthFirst);
//! let stats = StatsConfig::new()
//!     .with_response_gap_minutes(120)
//!     .with_overnight_buffer_minutes(480);
//!
//! assert_eq!(parse.date_format, Some(DateFormat::MonthFirst));
//! assert_eq!(stats.response_gap_minutes, Some(120));
//! ```

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::parsing::DateFormat;

/// Configuration for transcript parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseConfig {
    /// Day/month order to use instead of inferring it (default: infer)
    #[serde(default)]
    pub date_format: Option<DateFormat>,
}

impl ParseConfig {
    /// Creates a configuration that infers the date format.
    pub fn new() -> Self {
        Self::default()
    }

    /// Forces a day/month order, bypassing inference.
    #[must_use]
    pub fn with_date_format(mut self, format: DateFormat) -> Self {
        self.date_format = Some(format);
        self
    }
}

/// Configuration for [`compute_statistics`](crate::core::stats::compute_statistics).
///
/// # Response-time cutoff
///
/// A reply gap counts toward response times only if it is at most
/// `response_gap_minutes`, extended by `overnight_buffer_minutes` when the
/// two messages fall on different calendar dates. With no cutoff every
/// alternating reply counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsConfig {
    /// Maximum reply gap in minutes (default: no cutoff)
    pub response_gap_minutes: Option<u32>,

    /// Extra allowance when a reply crosses midnight (default: 0)
    pub overnight_buffer_minutes: u32,

    /// Size of the global word ranking (default: 15)
    pub top_words: usize,

    /// Size of each participant's word ranking (default: 10)
    pub top_participant_words: usize,

    /// Size of the emoji ranking (default: 10)
    pub top_emoji: usize,

    /// Stop words and media markers
    pub lexicon: Lexicon,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            response_gap_minutes: None,
            overnight_buffer_minutes: 0,
            top_words: 15,
            top_participant_words: 10,
            top_emoji: 10,
            lexicon: Lexicon::default(),
        }
    }
}

impl StatsConfig {
    /// Creates a configuration with no response cutoff and English tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the response-time cutoff.
    #[must_use]
    pub fn with_response_gap_minutes(mut self, minutes: u32) -> Self {
        self.response_gap_minutes = Some(minutes);
        self
    }

    /// Sets the cross-midnight allowance added to the cutoff.
    #[must_use]
    pub fn with_overnight_buffer_minutes(mut self, minutes: u32) -> Self {
        self.overnight_buffer_minutes = minutes;
        self
    }

    /// Sets the global word ranking size.
    #[must_use]
    pub fn with_top_words(mut self, n: usize) -> Self {
        self.top_words = n;
        self
    }

    /// Sets the per-participant word ranking size.
    #[must_use]
    pub fn with_top_participant_words(mut self, n: usize) -> Self {
        self.top_participant_words = n;
        self
    }

    /// Sets the emoji ranking size.
    #[must_use]
    pub fn with_top_emoji(mut self, n: usize) -> Self {
        self.top_emoji = n;
        self
    }

    /// Replaces the stop-word and media-marker tables.
    #[must_use]
    pub fn with_lexicon(mut self, lexicon: Lexicon) -> Self {
        self.lexicon = lexicon;
        self
    }
}

/// Words never counted in frequency rankings.
pub const DEFAULT_STOP_WORDS: &[&str] = &[
    "the", "and", "for", "are", "but", "not", "you", "all", "any", "can", "had", "her", "was",
    "one", "our", "out", "has", "him", "his", "how", "its", "let", "she", "too", "use", "that",
    "with", "have", "this", "will", "your", "from", "they", "been", "were", "what", "when",
    "them", "then", "than", "there", "their", "would", "could", "should", "about", "which",
    "into", "just", "also", "some", "more", "very", "only", "over", "such", "here", "where",
    "who", "why", "yes", "yeah", "i'm", "it's", "don't", "i'll", "i've", "you're", "that's",
    "is", "it", "to", "of", "in", "on", "at", "be", "me", "my", "we", "us", "he", "so", "do",
    "if", "or", "as", "an", "by", "no", "up", "am", "ok", "okay", "oh", "go", "did", "get",
    "got", "like", "know", "now", "well", "really", "because", "being", "doing",
];

/// Case-insensitive substrings marking an attachment whose content was omitted.
pub const DEFAULT_MEDIA_MARKERS: &[&str] = &[
    "<media omitted>",
    "image omitted",
    "video omitted",
    "audio omitted",
    "sticker omitted",
    "gif omitted",
    "document omitted",
    "contact card omitted",
    "<attached:",
    "(file attached)",
];

/// Language-coupled tables used by the statistics engine.
///
/// The defaults target English exports. Swap the tables to analyze other
/// locales or messengers without touching the aggregation itself.
///
/// # Example
///
/// ```rust
/// use chatlens::config::Lexicon;
///
/// let lexicon = Lexicon::new(["der", "die", "das"], ["<medien ausgeschlossen>"]);
/// assert!(lexicon.is_stop_word("die"));
/// assert!(lexicon.is_media("<Medien ausgeschlossen>"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lexicon {
    /// Lowercase words excluded from word rankings
    pub stop_words: BTreeSet<String>,

    /// Lowercase substrings identifying media placeholders
    pub media_markers: Vec<String>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new(
            DEFAULT_STOP_WORDS.iter().copied(),
            DEFAULT_MEDIA_MARKERS.iter().copied(),
        )
    }
}

impl Lexicon {
    /// Builds a lexicon from arbitrary tables; entries are lowercased.
    pub fn new<S, M>(stop_words: S, media_markers: M) -> Self
    where
        S: IntoIterator,
        S::Item: AsRef<str>,
        M: IntoIterator,
        M::Item: AsRef<str>,
    {
        Self {
            stop_words: stop_words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
            media_markers: media_markers
                .into_iter()
                .map(|m| m.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Returns `true` if `word` (already lowercase) is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Returns `true` if `content` contains any media marker, ignoring case.
    pub fn is_media(&self, content: &str) -> bool {
        if self.media_markers.is_empty() {
            return false;
        }
        let lower = content.to_lowercase();
        self.media_markers.iter().any(|m| lower.contains(m.as_str()))
    }
}
