//! Longest run of consecutive active days.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A run of calendar-consecutive days with at least one message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Streak {
    /// Number of days in the run
    pub days: usize,
    /// First day of the run
    pub start: NaiveDate,
    /// Last day of the run (inclusive)
    pub end: NaiveDate,
}

/// Finds the longest streak among `days`.
///
/// Input may be unsorted and contain duplicates. Among equally long runs
/// the earliest wins. Returns `None` for no days.
///
/// # Example
///
/// ```rust
/// use chatlens::core::streak::longest_streak;
/// use chrono::NaiveDate;
///
/// let d = |day| NaiveDate::from_ymd_opt(2024, 2, day).unwrap();
/// let streak = longest_streak([d(1), d(3), d(4), d(5), d(9)]).unwrap();
/// assert_eq!(streak.days, 3);
/// assert_eq!((streak.start, streak.end), (d(3), d(5)));
/// ```
pub fn longest_streak<I>(days: I) -> Option<Streak>
where
    I: IntoIterator<Item = NaiveDate>,
{
    let mut sorted: Vec<NaiveDate> = days.into_iter().collect();
    sorted.sort_unstable();
    sorted.dedup();

    let first = *sorted.first()?;
    let mut best = Streak {
        days: 1,
        start: first,
        end: first,
    };
    let mut current = best;

    for pair in sorted.windows(2) {
        if pair[0].succ_opt() == Some(pair[1]) {
            current.days += 1;
            current.end = pair[1];
        } else {
            current = Streak {
                days: 1,
                start: pair[1],
                end: pair[1],
            };
        }
        if current.days > best.days {
            best = current;
        }
    }

    Some(best)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, month, day).unwrap()
    }

    #[test]
    fn test_empty() {
        assert_eq!(longest_streak(Vec::new()), None);
    }

    #[test]
    fn test_single_day() {
        let s = longest_streak([d(5, 5)]).unwrap();
        assert_eq!(s.days, 1);
        assert_eq!(s.start, d(5, 5));
        assert_eq!(s.end, d(5, 5));
    }

    #[test]
    fn test_unsorted_with_duplicates() {
        let s = longest_streak([d(1, 3), d(1, 1), d(1, 2), d(1, 2), d(1, 7)]).unwrap();
        assert_eq!(s.days, 3);
        assert_eq!((s.start, s.end), (d(1, 1), d(1, 3)));
    }

    #[test]
    fn test_crosses_month_boundary() {
        let s = longest_streak([d(2, 28), d(2, 29), d(3, 1), d(3, 10)]).unwrap();
        assert_eq!(s.days, 3);
        assert_eq!((s.start, s.end), (d(2, 28), d(3, 1)));
    }

    #[test]
    fn test_tie_keeps_earliest() {
        let s = longest_streak([d(1, 1), d(1, 2), d(1, 10), d(1, 11)]).unwrap();
        assert_eq!((s.start, s.end), (d(1, 1), d(1, 2)));
    }

    #[test]
    fn test_later_run_longer() {
        let s = longest_streak([d(1, 1), d(1, 5), d(1, 6), d(1, 7), d(1, 8)]).unwrap();
        assert_eq!(s.days, 4);
        assert_eq!(s.start, d(1, 5));
    }
}
