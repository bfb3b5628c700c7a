//! Day/month order inference.
//!
//! Exports never state whether `1/2/23` means 1 February or 2 January. The
//! resolver looks for a header that settles the question (a token above 12)
//! and, failing that, scores both interpretations over a sample of
//! ambiguous headers:
//!
//! 1. fewer chronological decreases (transcripts are written in order),
//! 2. then the smaller span between first and last sample (conversations
//!    cluster in time),
//! 3. then more successfully built timestamps,
//! 4. then day-first.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::header::{Header, match_header};
use super::timestamp::header_timestamp;
use crate::error::ChatlensError;

/// Maximum number of ambiguous headers scored per candidate.
pub const MAX_AMBIGUOUS_SAMPLES: usize = 50;

/// Order of the day and month tokens in a header date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateFormat {
    /// `D/M/Y`, used by most locales
    #[default]
    DayFirst,
    /// `M/D/Y`, used by US exports
    MonthFirst,
}

impl DateFormat {
    /// Candidates in evaluation order; earlier wins full ties.
    pub fn all() -> &'static [DateFormat] {
        &[DateFormat::DayFirst, DateFormat::MonthFirst]
    }

    /// Returns all accepted names including aliases.
    pub fn all_names() -> &'static [&'static str] {
        &["day-first", "dayfirst", "dmy", "month-first", "monthfirst", "mdy"]
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateFormat::DayFirst => write!(f, "day-first"),
            DateFormat::MonthFirst => write!(f, "month-first"),
        }
    }
}

impl FromStr for DateFormat {
    type Err = ChatlensError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "day-first" | "dayfirst" | "dmy" => Ok(DateFormat::DayFirst),
            "month-first" | "monthfirst" | "mdy" => Ok(DateFormat::MonthFirst),
            _ => Err(ChatlensError::invalid_format(
                "date",
                format!(
                    "unknown order '{}'. Expected one of: {}",
                    s,
                    DateFormat::all_names().join(", ")
                ),
            )),
        }
    }
}

/// How well one interpretation fits the ambiguous samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatMetrics {
    /// The interpretation evaluated
    pub format: DateFormat,
    /// Adjacent samples whose timestamp goes backwards
    pub decreases: usize,
    /// Distance between the first and last valid sample, in seconds
    pub span_seconds: i64,
    /// Samples that produced a valid timestamp
    pub valid: usize,
}

impl FormatMetrics {
    /// Returns `true` if `self` is a strictly better fit than `other`.
    fn beats(&self, other: &FormatMetrics) -> bool {
        self.decreases
            .cmp(&other.decreases)
            .then(self.span_seconds.cmp(&other.span_seconds))
            .then(other.valid.cmp(&self.valid))
            .is_lt()
    }
}

/// Outcome of day/month order resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatResolution {
    /// The order to parse with
    pub format: DateFormat,
    /// `true` when no header settled the order and scoring decided
    pub ambiguous: bool,
    /// Scores of every candidate, present only when `ambiguous`
    pub candidates: Vec<FormatMetrics>,
    /// `true` when the caller forced the order
    pub used_override: bool,
}

impl FormatResolution {
    fn settled(format: DateFormat) -> Self {
        Self {
            format,
            ambiguous: false,
            candidates: Vec::new(),
            used_override: false,
        }
    }
}

/// Scores one interpretation over the ambiguous samples.
pub fn evaluate_format(samples: &[Header<'_>], format: DateFormat) -> FormatMetrics {
    let timestamps: Vec<_> = samples
        .iter()
        .filter_map(|h| header_timestamp(h, format))
        .collect();

    let decreases = timestamps.windows(2).filter(|w| w[1] < w[0]).count();
    let span_seconds = match (timestamps.first(), timestamps.last()) {
        (Some(first), Some(last)) => (*last - *first).num_seconds().abs(),
        _ => 0,
    };

    FormatMetrics {
        format,
        decreases,
        span_seconds,
        valid: timestamps.len(),
    }
}

/// Decides the day/month order for a transcript.
///
/// An `override_format` short-circuits inference entirely.
///
/// # Example
///
/// ```rust
/// use chatlens::parsing::{DateFormat, resolve_date_format};
///
/// // 25 can only be a day
/// let lines = ["[3/4/24, 10:00] A: hi", "[25/4/24, 10:00] B: hey"];
/// let resolution = resolve_date_format(&lines, None);
/// assert_eq!(resolution.format, DateFormat::DayFirst);
/// assert!(!resolution.ambiguous);
/// ```
pub fn resolve_date_format<S: AsRef<str>>(
    lines: &[S],
    override_format: Option<DateFormat>,
) -> FormatResolution {
    if let Some(format) = override_format {
        debug!(%format, "date format forced by caller");
        return FormatResolution {
            used_override: true,
            ..FormatResolution::settled(format)
        };
    }

    let mut samples: Vec<Header<'_>> = Vec::new();

    for line in lines {
        let Some(header) = match_header(line.as_ref()) else {
            continue;
        };
        let Some((first, second)) = header.date_tokens() else {
            continue;
        };

        if first > 12 && second <= 12 {
            trace!(first, second, "conclusive day-first header");
            return FormatResolution::settled(DateFormat::DayFirst);
        }
        if second > 12 && first <= 12 {
            trace!(first, second, "conclusive month-first header");
            return FormatResolution::settled(DateFormat::MonthFirst);
        }
        if first <= 12 && second <= 12 && samples.len() < MAX_AMBIGUOUS_SAMPLES {
            samples.push(header);
        }
    }

    if samples.is_empty() {
        debug!("no ambiguous headers, defaulting to day-first");
        return FormatResolution::settled(DateFormat::DayFirst);
    }

    let candidates: Vec<FormatMetrics> = DateFormat::all()
        .iter()
        .map(|&format| evaluate_format(&samples, format))
        .collect();

    let mut best = candidates[0];
    for candidate in &candidates[1..] {
        if candidate.beats(&best) {
            best = *candidate;
        }
    }

    debug!(
        format = %best.format,
        samples = samples.len(),
        ?candidates,
        "date format resolved by scoring"
    );

    FormatResolution {
        format: best.format,
        ambiguous: true,
        candidates,
        used_override: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conclusive_day_first() {
        let lines = ["[1/2/23, 9:00] A: x", "[13/2/23, 9:00] B: y"];
        let r = resolve_date_format(&lines, None);
        assert_eq!(r.format, DateFormat::DayFirst);
        assert!(!r.ambiguous);
        assert!(r.candidates.is_empty());
        assert!(!r.used_override);
    }

    #[test]
    fn test_conclusive_month_first() {
        let lines = ["1/2/23, 9:00 - A: x", "1/15/23, 9:00 - B: y"];
        let r = resolve_date_format(&lines, None);
        assert_eq!(r.format, DateFormat::MonthFirst);
        assert!(!r.ambiguous);
    }

    #[test]
    fn test_first_conclusive_header_wins() {
        let lines = [
            "[2/20/23, 9:00] A: month-first evidence",
            "[20/2/23, 9:00] B: day-first evidence",
        ];
        assert_eq!(
            resolve_date_format(&lines, None).format,
            DateFormat::MonthFirst
        );
    }

    #[test]
    fn test_both_tokens_over_twelve_is_inconclusive() {
        let lines = ["[13/13/23, 9:00] A: nonsense", "[20/3/23, 9:00] B: real"];
        let r = resolve_date_format(&lines, None);
        assert_eq!(r.format, DateFormat::DayFirst);
        assert!(!r.ambiguous);
    }

    #[test]
    fn test_no_headers_defaults_day_first() {
        let lines = ["hello", "world"];
        let r = resolve_date_format(&lines, None);
        assert_eq!(r.format, DateFormat::DayFirst);
        assert!(!r.ambiguous);
        assert!(r.candidates.is_empty());
    }

    #[test]
    fn test_override_short_circuits() {
        let lines = ["[13/2/23, 9:00] A: day-first evidence"];
        let r = resolve_date_format(&lines, Some(DateFormat::MonthFirst));
        assert_eq!(r.format, DateFormat::MonthFirst);
        assert!(r.used_override);
        assert!(!r.ambiguous);
    }

    #[test]
    fn test_decreases_decide() {
        // Day-first: 12 Jan -> 1 Feb. Month-first: 1 Dec -> 2 Jan (backwards).
        let lines = ["[12/01/23, 9:00] A: x", "[01/02/23, 9:00] B: y"];
        let r = resolve_date_format(&lines, None);
        assert_eq!(r.format, DateFormat::DayFirst);
        assert!(r.ambiguous);

        let day = r.candidates[0];
        let month = r.candidates[1];
        assert_eq!(day.format, DateFormat::DayFirst);
        assert_eq!(day.decreases, 0);
        assert_eq!(month.format, DateFormat::MonthFirst);
        assert_eq!(month.decreases, 1);
    }

    #[test]
    fn test_span_decides_on_equal_decreases() {
        // Eleven consecutive days in March read day-first; eleven months read month-first.
        let lines: Vec<String> = (1..=11)
            .map(|d| format!("{d:02}/03/23, 10:00 - A: day {d}"))
            .collect();
        let r = resolve_date_format(&lines, None);
        assert_eq!(r.format, DateFormat::DayFirst);
        assert!(r.ambiguous);
        assert_eq!(r.candidates[0].decreases, 0);
        assert_eq!(r.candidates[1].decreases, 0);
        assert_eq!(r.candidates[0].span_seconds, 10 * 86_400);
        assert!(r.candidates[1].span_seconds > r.candidates[0].span_seconds);
    }

    #[test]
    fn test_month_first_by_span() {
        let lines: Vec<String> = (1..=11)
            .map(|d| format!("[03/{d:02}/23, 10:00] A: day {d}"))
            .collect();
        let r = resolve_date_format(&lines, None);
        assert_eq!(r.format, DateFormat::MonthFirst);
        assert!(r.ambiguous);
    }

    #[test]
    fn test_full_tie_keeps_day_first() {
        let lines = ["[05/05/23, 9:00] A: x", "[05/05/23, 9:30] B: y"];
        let r = resolve_date_format(&lines, None);
        assert_eq!(r.format, DateFormat::DayFirst);
        assert!(r.ambiguous);
        assert_eq!(r.candidates[0].span_seconds, r.candidates[1].span_seconds);
    }

    #[test]
    fn test_samples_capped() {
        let lines: Vec<String> = (0..200)
            .map(|i| format!("[01/01/23, 9:{:02}] A: {i}", i % 60))
            .collect();
        let headers: Vec<Header<'_>> = lines.iter().filter_map(|l| match_header(l)).collect();
        assert_eq!(headers.len(), 200);

        let r = resolve_date_format(&lines, None);
        assert_eq!(r.candidates[0].valid, MAX_AMBIGUOUS_SAMPLES);
    }

    #[test]
    fn test_evaluate_skips_invalid() {
        let lines = ["[31/02/23, 9:00] A: x", "[01/02/23, 9:00] B: y"];
        let headers: Vec<Header<'_>> = lines.iter().filter_map(|l| match_header(l)).collect();
        let metrics = evaluate_format(&headers, DateFormat::DayFirst);
        assert_eq!(metrics.valid, 1);
        assert_eq!(metrics.span_seconds, 0);
        assert_eq!(metrics.decreases, 0);
    }

    #[test]
    fn test_date_format_from_str() {
        assert_eq!("day-first".parse::<DateFormat>().unwrap(), DateFormat::DayFirst);
        assert_eq!("DMY".parse::<DateFormat>().unwrap(), DateFormat::DayFirst);
        assert_eq!("mdy".parse::<DateFormat>().unwrap(), DateFormat::MonthFirst);
        assert!("ymd".parse::<DateFormat>().is_err());
    }

    #[test]
    fn test_all_names_parse_and_are_listed() {
        for name in DateFormat::all_names() {
            assert!(name.parse::<DateFormat>().is_ok(), "{name} should parse");
        }
        let message = "ymd".parse::<DateFormat>().unwrap_err().to_string();
        assert!(message.contains("dayfirst"));
        assert!(message.contains("monthfirst"));
    }

    #[test]
    fn test_date_format_serde() {
        let json = serde_json::to_string(&DateFormat::MonthFirst).unwrap();
        assert_eq!(json, "\"month-first\"");
        let parsed: DateFormat = serde_json::from_str("\"day-first\"").unwrap();
        assert_eq!(parsed, DateFormat::DayFirst);
    }
}
