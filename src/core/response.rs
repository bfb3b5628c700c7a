//! Response-time inference.
//!
//! A reply gap is the time between a message and the previous message
//! when the two come from different authors. [`ResponseWindow`] decides
//! which gaps count as replies; [`ResponseTimes`] summarizes the accepted
//! samples.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Cutoff policy for accepting a gap as a reply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResponseWindow {
    /// Maximum gap in minutes; `None` accepts every gap
    pub cutoff_minutes: Option<u32>,
    /// Extra minutes allowed when the two messages fall on different
    /// calendar dates
    pub overnight_buffer_minutes: u32,
}

impl ResponseWindow {
    /// Creates a window from the cutoff and the overnight allowance.
    pub fn new(cutoff_minutes: Option<u32>, overnight_buffer_minutes: u32) -> Self {
        Self {
            cutoff_minutes,
            overnight_buffer_minutes,
        }
    }

    /// Returns the gap in minutes from `previous` to `current` if it is
    /// accepted as a reply.
    ///
    /// The gap is fractional. With a cutoff set, the gap must not exceed
    /// the cutoff, plus the overnight buffer when the calendar dates differ.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatlens::core::response::ResponseWindow;
    /// use chrono::NaiveDate;
    ///
    /// let at = |d, h, m| NaiveDate::from_ymd_opt(2024, 1, d).unwrap().and_hms_opt(h, m, 0).unwrap();
    /// let window = ResponseWindow::new(Some(60), 480);
    ///
    /// // 23:30 -> 06:30 next day is 420 minutes, inside 60 + 480
    /// assert_eq!(window.accept(at(1, 23, 30), at(2, 6, 30)), Some(420.0));
    /// // same day, 90 minutes, over the plain cutoff
    /// assert_eq!(window.accept(at(1, 10, 0), at(1, 11, 30)), None);
    /// ```
    pub fn accept(&self, previous: NaiveDateTime, current: NaiveDateTime) -> Option<f64> {
        let gap = gap_minutes(previous, current);
        match self.cutoff_minutes {
            None => Some(gap),
            Some(cutoff) => {
                let mut limit = f64::from(cutoff);
                if previous.date() != current.date() {
                    limit += f64::from(self.overnight_buffer_minutes);
                }
                (gap <= limit).then_some(gap)
            }
        }
    }
}

/// Fractional minutes from `previous` to `current`.
pub fn gap_minutes(previous: NaiveDateTime, current: NaiveDateTime) -> f64 {
    let millis = (current - previous).num_milliseconds();
    millis as f64 / 60_000.0
}

/// Summary of accepted reply gaps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseTimes {
    /// Number of accepted gaps
    pub samples: usize,
    /// Mean gap in minutes, rounded to 2 decimals
    pub average_minutes: Option<f64>,
    /// Median gap in minutes, rounded to 2 decimals
    pub median_minutes: Option<f64>,
}

impl ResponseTimes {
    /// Summarizes `gaps` (any order).
    pub fn from_gaps(gaps: &[f64]) -> Self {
        if gaps.is_empty() {
            return Self::default();
        }

        let mut sorted = gaps.to_vec();
        sorted.sort_by(f64::total_cmp);

        let average = sorted.iter().sum::<f64>() / sorted.len() as f64;
        let mid = sorted.len() / 2;
        let median = if sorted.len() % 2 == 0 {
            (sorted[mid - 1] + sorted[mid]) / 2.0
        } else {
            sorted[mid]
        };

        Self {
            samples: sorted.len(),
            average_minutes: Some(round_to(average, 2)),
            median_minutes: Some(round_to(median, 2)),
        }
    }

    /// Returns `true` if no gap was accepted.
    pub fn is_empty(&self) -> bool {
        self.samples == 0
    }
}

/// Rounds `value` to `decimals` places.
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
