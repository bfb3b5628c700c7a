//! Conversation statistics.
//!
//! [`compute_statistics`] makes a single pass over a time-ordered copy of
//! the messages and builds a [`Statistics`] report: totals, per-participant
//! breakdowns, activity histograms, word and emoji rankings, the longest
//! active streak and response-time summaries.
//!
//! # Example
//!
//! ```rust
//! use chatlens::config::StatsConfig;
//! use chatlens::core::stats::compute_statistics;
//! use chatlens::Message;
//! use chrono::NaiveDate;
//!
//! let at = |m| NaiveDate::from_ymd_opt(2024, 5, 1).unwrap().and_hms_opt(9, m, 0).unwrap();
//! let messages = vec![
//!     Message::new(at(0), "Alice", "Pizza tonight?"),
//!     Message::new(at(4), "Bob", "Pizza sounds great"),
//! ];
//!
//! let stats = compute_statistics(&messages, &StatsConfig::default());
//! assert_eq!(stats.total_messages, 2);
//! assert_eq!(stats.top_words[0].value, "pizza");
//! assert_eq!(stats.response_times["Bob"].average_minutes, Some(4.0));
//! ```

use std::collections::{BTreeMap, HashMap};

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::rank::{FrequencyTable, RankedEntry};
use super::response::{ResponseTimes, ResponseWindow, round_to};
use super::streak::{Streak, longest_streak};
use super::text::{char_count, extract_emoji, extract_words, word_count};
use crate::Message;
use crate::config::StatsConfig;

/// The longest text message a participant sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LongestMessage {
    /// When it was sent
    pub timestamp: NaiveDateTime,
    /// Whitespace-separated tokens
    pub words: usize,
    /// Characters of the trimmed content
    pub characters: usize,
    /// The message body
    pub content: String,
}

/// Per-participant breakdown.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParticipantStats {
    /// Messages sent, media included
    pub messages: usize,
    /// Media placeholders sent
    pub media_messages: usize,
    /// Words across text messages
    pub words: usize,
    /// Characters across text messages
    pub characters: usize,
    /// Words per text message, 1 decimal
    pub average_words_per_message: f64,
    /// Characters per text message, 1 decimal
    pub average_message_length: f64,
    /// Longest text message, if any had content
    pub longest_message: Option<LongestMessage>,
    /// Most frequent words
    pub top_words: Vec<RankedEntry>,
}

impl ParticipantStats {
    /// Messages that were not media placeholders.
    pub fn text_messages(&self) -> usize {
        self.messages - self.media_messages
    }
}

/// A calendar day and its message count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayActivity {
    pub date: NaiveDate,
    pub messages: usize,
}

/// An hour of the day (0-23) and its message count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourActivity {
    pub hour: u32,
    pub messages: usize,
}

/// Full statistics report for a conversation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    /// Non-system messages
    pub total_messages: usize,
    /// Words across all text messages
    pub total_words: usize,
    /// Media placeholders
    pub media_messages: usize,
    /// System records
    pub system_messages: usize,
    /// Participants by message count descending, first appearance on ties
    pub participants: Vec<String>,
    pub per_participant: BTreeMap<String, ParticipantStats>,
    pub messages_by_day: BTreeMap<NaiveDate, usize>,
    pub messages_by_hour: [usize; 24],
    pub top_words: Vec<RankedEntry>,
    pub top_emoji: Vec<RankedEntry>,
    /// Day with most messages, earliest on ties
    pub busiest_day: Option<DayActivity>,
    /// Hour with most messages, lowest on ties
    pub busiest_hour: Option<HourActivity>,
    pub longest_streak: Option<Streak>,
    pub first_message: Option<NaiveDateTime>,
    pub last_message: Option<NaiveDateTime>,
    /// Reply gaps keyed by the replying participant
    pub response_times: BTreeMap<String, ResponseTimes>,
    /// Reply gaps across all participants
    pub overall_response: ResponseTimes,
}

impl Statistics {
    /// Returns `true` if no real message was counted.
    pub fn is_empty(&self) -> bool {
        self.total_messages == 0
    }

    /// Number of distinct active days.
    pub fn active_days(&self) -> usize {
        self.messages_by_day.len()
    }
}

#[derive(Default)]
struct ParticipantAccumulator {
    first_seen: usize,
    stats: ParticipantStats,
    words: FrequencyTable,
    gaps: Vec<f64>,
}

impl ParticipantAccumulator {
    fn new(first_seen: usize) -> Self {
        Self {
            first_seen,
            ..Self::default()
        }
    }

    fn offer_longest(&mut self, msg: &Message, words: usize, characters: usize) {
        if words == 0 && characters == 0 {
            return;
        }
        // Messages arrive in time order, so ties keep the earlier one
        let longer = self
            .stats
            .longest_message
            .as_ref()
            .is_none_or(|best| (words, characters) > (best.words, best.characters));
        if longer {
            self.stats.longest_message = Some(LongestMessage {
                timestamp: msg.timestamp,
                words,
                characters,
                content: msg.content.trim().to_string(),
            });
        }
    }

    fn finish(mut self, top_words: usize) -> (ParticipantStats, ResponseTimes) {
        let text_messages = self.stats.text_messages();
        if text_messages > 0 {
            let n = text_messages as f64;
            self.stats.average_words_per_message = round_to(self.stats.words as f64 / n, 1);
            self.stats.average_message_length = round_to(self.stats.characters as f64 / n, 1);
        }
        self.stats.top_words = self.words.top(top_words);
        (self.stats, ResponseTimes::from_gaps(&self.gaps))
    }
}

/// Computes the statistics report for `messages`.
///
/// The input is not modified; a copy is stable-sorted by timestamp before
/// the pass. System records are counted and otherwise skipped, and a reply
/// gap is only measured when the previous record was a regular message
/// from a different author.
pub fn compute_statistics(messages: &[Message], config: &StatsConfig) -> Statistics {
    let mut ordered: Vec<&Message> = messages.iter().collect();
    ordered.sort_by_key(|msg| msg.timestamp);

    let window = ResponseWindow::new(
        config.response_gap_minutes,
        config.overnight_buffer_minutes,
    );
    let lexicon = &config.lexicon;

    let mut stats = Statistics::default();
    let mut participants: HashMap<&str, ParticipantAccumulator> = HashMap::new();
    let mut words = FrequencyTable::new();
    let mut emoji = FrequencyTable::new();
    let mut all_gaps = Vec::new();
    let mut previous: Option<&Message> = None;

    for msg in ordered {
        if msg.is_system() {
            stats.system_messages += 1;
            previous = Some(msg);
            continue;
        }

        stats.total_messages += 1;
        stats.first_message.get_or_insert(msg.timestamp);
        stats.last_message = Some(msg.timestamp);
        *stats.messages_by_day.entry(msg.date()).or_insert(0) += 1;
        stats.messages_by_hour[msg.timestamp.hour() as usize] += 1;

        let next_index = participants.len();
        let person = participants
            .entry(msg.author.as_str())
            .or_insert_with(|| ParticipantAccumulator::new(next_index));
        person.stats.messages += 1;

        if lexicon.is_media(&msg.content) {
            stats.media_messages += 1;
            person.stats.media_messages += 1;
        } else {
            let message_words = word_count(&msg.content);
            let characters = char_count(&msg.content);
            stats.total_words += message_words;
            person.stats.words += message_words;
            person.stats.characters += characters;

            let extracted = extract_words(&msg.content, lexicon);
            words.add_all(&extracted);
            person.words.add_all(&extracted);
            emoji.add_all(extract_emoji(&msg.content));

            person.offer_longest(msg, message_words, characters);
        }

        if let Some(prev) = previous.filter(|p| !p.is_system() && p.author != msg.author) {
            if let Some(gap) = window.accept(prev.timestamp, msg.timestamp) {
                person.gaps.push(gap);
                all_gaps.push(gap);
            }
        }

        previous = Some(msg);
    }

    let mut order: Vec<(&str, usize, usize)> = participants
        .iter()
        .map(|(name, acc)| (*name, acc.stats.messages, acc.first_seen))
        .collect();
    order.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.2.cmp(&b.2)));
    stats.participants = order.iter().map(|(name, _, _)| (*name).to_string()).collect();

    for (name, acc) in participants {
        let (person, responses) = acc.finish(config.top_participant_words);
        stats.per_participant.insert(name.to_string(), person);
        stats.response_times.insert(name.to_string(), responses);
    }

    stats.top_words = words.top(config.top_words);
    stats.top_emoji = emoji.top(config.top_emoji);
    stats.busiest_day = busiest_day(&stats.messages_by_day);
    stats.busiest_hour = busiest_hour(&stats.messages_by_hour);
    stats.longest_streak = longest_streak(stats.messages_by_day.keys().copied());
    stats.overall_response = ResponseTimes::from_gaps(&all_gaps);

    debug!(
        messages = stats.total_messages,
        participants = stats.participants.len(),
        replies = stats.overall_response.samples,
        "computed statistics"
    );

    stats
}

fn busiest_day(by_day: &BTreeMap<NaiveDate, usize>) -> Option<DayActivity> {
    let mut best: Option<DayActivity> = None;
    for (&date, &messages) in by_day {
        if best.is_none_or(|b| messages > b.messages) {
            best = Some(DayActivity { date, messages });
        }
    }
    best
}

fn busiest_hour(by_hour: &[usize; 24]) -> Option<HourActivity> {
    let mut best: Option<HourActivity> = None;
    for (hour, &messages) in (0u32..).zip(by_hour) {
        if messages > 0 && best.is_none_or(|b| messages > b.messages) {
            best = Some(HourActivity { hour, messages });
        }
    }
    best
}
