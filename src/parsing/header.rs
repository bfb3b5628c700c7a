//! Message header recognition.
//!
//! A header is the `date, time` prefix that opens a new message. Two
//! layouts are accepted and tried in order:
//!
//! - Bracketed (iOS): `[15/01/24, 10:30:45 AM] Alice: Hello`
//! - Dashed (Android): `15/01/2024, 10:30 - Alice: Hello`
//!
//! Day and month tokens are returned uninterpreted; deciding which is
//! which is the job of [`resolve_date_format`](super::resolve_date_format).

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;

/// A recognized header line, borrowing from the source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header<'a> {
    /// First numeric date token (day under day-first order)
    pub first: &'a str,
    /// Second numeric date token (month under day-first order)
    pub second: &'a str,
    /// Year token, 2 to 4 digits
    pub year: &'a str,
    /// Time-of-day token with exotic spaces normalized
    pub time: Cow<'a, str>,
    /// Everything after the header: `author: text` or a system notice
    pub remainder: &'a str,
}

impl Header<'_> {
    /// Returns the first two date tokens as numbers.
    ///
    /// Both fit in `u32` because the layouts allow at most two digits.
    pub fn date_tokens(&self) -> Option<(u32, u32)> {
        Some((self.first.parse().ok()?, self.second.parse().ok()?))
    }
}

fn re_bracketed() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        // [D/M/Y, TIME] REMAINDER
        Regex::new(r"^\[(\d{1,2})/(\d{1,2})/(\d{2,4}),\s*(\d{1,2}:\d{2}[^\]]*)\]\s*(.*)$")
            .expect("bracketed header regex is valid")
    })
}

fn re_dashed() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        // D/M/Y, TIME - REMAINDER
        Regex::new(r"^(\d{1,2})/(\d{1,2})/(\d{2,4}),\s*(\d{1,2}:\d{2}[^-\[\]]*?)\s*-\s(.*)$")
            .expect("dashed header regex is valid")
    })
}

/// Replaces narrow no-break and no-break spaces with a plain space.
fn normalize_time(raw: &str) -> Cow<'_, str> {
    let trimmed = raw.trim();
    if trimmed.contains(['\u{202f}', '\u{00a0}']) {
        Cow::Owned(trimmed.replace(['\u{202f}', '\u{00a0}'], " "))
    } else {
        Cow::Borrowed(trimmed)
    }
}

/// Matches one physical line against the accepted header layouts.
///
/// Returns `None` for continuation lines and noise.
///
/// # Example
///
/// ```rust
/// use chatlens::parsing::match_header;
///
/// let header = match_header("[1/2/23, 9:05\u{202f}AM] Alice: Hello").unwrap();
/// assert_eq!((header.first, header.second, header.year), ("1", "2", "23"));
/// assert_eq!(header.time, "9:05 AM");
/// assert_eq!(header.remainder, "Alice: Hello");
///
/// assert!(match_header("just some wrapped text").is_none());
/// ```
pub fn match_header(line: &str) -> Option<Header<'_>> {
    let caps = re_bracketed()
        .captures(line)
        .or_else(|| re_dashed().captures(line))?;

    Some(Header {
        first: caps.get(1)?.as_str(),
        second: caps.get(2)?.as_str(),
        year: caps.get(3)?.as_str(),
        time: normalize_time(caps.get(4)?.as_str()),
        remainder: caps.get(5).map_or("", |m| m.as_str()),
    })
}
