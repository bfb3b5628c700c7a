//! Output configuration.

use serde::{Deserialize, Serialize};

use crate::Message;

/// Timestamp layout used by every writer.
pub(crate) const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Controls which records the writers emit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Write system records (joins, encryption notices) as well
    pub include_system: bool,
}

impl OutputConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_system(mut self) -> Self {
        self.include_system = true;
        self
    }

    /// Returns `true` if `msg` should be written.
    pub fn keeps(&self, msg: &Message) -> bool {
        self.include_system || !msg.is_system()
    }

    /// Iterates over the messages this configuration writes.
    pub(crate) fn select<'a>(&self, messages: &'a [Message]) -> impl Iterator<Item = &'a Message> {
        let config = *self;
        messages.iter().filter(move |msg| config.keeps(msg))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_system_filtering() {
        let ts = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let messages = vec![Message::new(ts, "Alice", "hi"), Message::system(ts, "joined")];

        assert_eq!(OutputConfig::new().select(&messages).count(), 1);
        assert_eq!(OutputConfig::new().with_system().select(&messages).count(), 2);
    }
}
