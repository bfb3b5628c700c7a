//! Frequency tables and top-N ranking.
//!
//! Every ranked list in [`Statistics`](super::stats::Statistics) (global
//! words, per-participant words, emoji) goes through [`rank_entries`], so
//! they all break ties the same way: higher count first, then
//! lexicographic order of the value.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One row of a ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    /// The counted value (a word or an emoji)
    pub value: String,
    /// Number of occurrences
    pub count: usize,
}

/// Occurrence counts keyed by value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<String, usize>,
}

impl FrequencyTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one occurrence of `value`.
    pub fn add(&mut self, value: &str) {
        if let Some(count) = self.counts.get_mut(value) {
            *count += 1;
        } else {
            self.counts.insert(value.to_string(), 1);
        }
    }

    /// Counts one occurrence of each item.
    pub fn add_all<I, S>(&mut self, values: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for value in values {
            self.add(value.as_ref());
        }
    }

    /// Returns the count of `value` (zero if never seen).
    pub fn get(&self, value: &str) -> usize {
        self.counts.get(value).copied().unwrap_or(0)
    }

    /// Number of distinct values.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns `true` if nothing was counted.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Returns the `limit` most frequent values.
    pub fn top(&self, limit: usize) -> Vec<RankedEntry> {
        rank_entries(
            self.counts.iter().map(|(value, count)| (value.as_str(), *count)),
            limit,
        )
    }
}

/// Ranks `(value, count)` pairs by count descending, value ascending on
/// ties, and keeps the first `limit`.
///
/// # Example
///
/// ```rust
/// use chatlens::core::rank::rank_entries;
///
/// let ranked = rank_entries([("pear", 2), ("apple", 2), ("fig", 5)], 2);
/// assert_eq!(ranked[0].value, "fig");
/// assert_eq!(ranked[1].value, "apple");
/// assert_eq!(ranked.len(), 2);
/// ```
pub fn rank_entries<I, S>(entries: I, limit: usize) -> Vec<RankedEntry>
where
    I: IntoIterator<Item = (S, usize)>,
    S: AsRef<str>,
{
    let mut ranked: Vec<RankedEntry> = entries
        .into_iter()
        .map(|(value, count)| RankedEntry {
            value: value.as_ref().to_string(),
            count,
        })
        .collect();

    ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.value.cmp(&b.value)));
    ranked.truncate(limit);
    ranked
}
