//! Word and emoji extraction.

use std::sync::OnceLock;

use regex::Regex;

use crate::config::Lexicon;

fn re_url() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)\b(?:https?://|www\.)\S+").expect("url regex is valid"))
}

fn re_emoji() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\p{Extended_Pictographic}").expect("emoji regex is valid"))
}

fn is_apostrophe(c: char) -> bool {
    matches!(c, '\'' | '\u{2019}')
}

/// Counts whitespace-separated tokens of the trimmed content.
pub fn word_count(content: &str) -> usize {
    content.split_whitespace().count()
}

/// Counts characters of the trimmed content.
pub fn char_count(content: &str) -> usize {
    content.trim().chars().count()
}

/// Extracts the words that feed frequency rankings.
///
/// Lowercases, removes URLs and every character that is not a letter,
/// digit, whitespace or apostrophe, then drops tokens of one character
/// and stop words.
///
/// # Example
///
/// ```rust
/// use chatlens::config::Lexicon;
/// use chatlens::core::text::extract_words;
///
/// let words = extract_words("Pizza tonight?! See https://example.com 'Luigi's'", &Lexicon::default());
/// assert_eq!(words, ["pizza", "tonight", "see", "luigi's"]);
/// ```
pub fn extract_words(content: &str, lexicon: &Lexicon) -> Vec<String> {
    let lower = content.to_lowercase();
    let without_urls = re_url().replace_all(&lower, " ");
    let cleaned: String = without_urls
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || is_apostrophe(*c))
        .collect();

    cleaned
        .split_whitespace()
        .map(|token| token.trim_matches(is_apostrophe))
        .filter(|word| word.chars().count() > 1 && !lexicon.is_stop_word(word))
        .map(str::to_string)
        .collect()
}

/// Extracts every extended-pictographic code point, in order.
///
/// Multi-code-point sequences (flags, ZWJ families) contribute each
/// pictographic component separately.
pub fn extract_emoji(content: &str) -> Vec<String> {
    re_emoji()
        .find_iter(content)
        .map(|m| m.as_str().to_string())
        .collect()
}
