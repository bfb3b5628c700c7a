//! Integration tests for the parse → filter → statistics pipeline with real files

use chatlens::core::filter::FilterConfig;
use chatlens::prelude::*;
use chrono::{NaiveDate, NaiveDateTime};
use std::fs;
use std::path::Path;
use std::sync::Once;

static INIT: Once = Once::new();

fn fixtures_dir() -> &'static str {
    "tests/fixtures"
}

fn ensure_fixtures() {
    INIT.call_once(|| {
        let dir = fixtures_dir();
        if !Path::new(dir).exists() {
            fs::create_dir_all(dir).unwrap();
        }

        // iOS layout: BOM, CRLF, system notices, media, multi-line message
        let ios = [
            "\u{feff}[1/3/24, 9:00:00 AM] Messages and calls are end-to-end encrypted. No one outside of this chat can read them.",
            "[1/3/24, 9:01:10 AM] Alice: Morning! Pizza tonight?",
            "[1/3/24, 9:05:10 AM] Bob: Pizza sounds great",
            "see you at 8",
            "[1/3/24, 9:06:00 AM] Bob: <Media omitted>",
            "[2/3/24, 10:00:00 PM] Alice: Pizza was amazing 🍕🍕",
            "[13/3/24, 8:00:00 AM] Alice changed the subject to \"Pizza club\"",
            "[13/3/24, 8:30:00 AM] Bob: 🎉",
        ]
        .join("\r\n");
        fs::write(format!("{dir}/ios_day_first.txt"), ios).unwrap();

        // Android layout, month-first, crossing midnight
        let android = "\
12/31/23, 23:58 - Carol: Happy new year soon!
12/31/23, 23:59 - Dave: 🎆 almost
1/1/24, 00:01 - Carol: Happy new year!!
1/1/24, 00:02 - Dave: image omitted
1/1/24, 00:03 - Dave left
";
        fs::write(format!("{dir}/android_month_first.txt"), android).unwrap();

        // Every token <= 12: only the span tells the orders apart
        let ambiguous = "\
2/3/24, 10:00 - Erin: first
3/3/24, 10:00 - Finn: second
4/3/24, 10:00 - Erin: third
";
        fs::write(format!("{dir}/ambiguous.txt"), ambiguous).unwrap();

        fs::write(format!("{dir}/noise.txt"), "nothing here\nstill nothing\n").unwrap();
    });
}

fn fixture(name: &str) -> String {
    ensure_fixtures();
    format!("{}/{name}", fixtures_dir())
}

fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .unwrap()
        .and_hms_opt(h, mi, s)
        .unwrap()
}

fn day(y: i32, mo: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, mo, d).unwrap()
}

// =========================================================================
// Parsing
// =========================================================================

#[test]
fn test_parse_ios_file() {
    let outcome = TranscriptParser::new()
        .parse_file(&fixture("ios_day_first.txt"))
        .unwrap();

    assert_eq!(outcome.resolved_format, DateFormat::DayFirst);
    assert!(!outcome.ambiguous);
    assert!(outcome.candidate_metrics.is_empty());
    assert_eq!(outcome.dropped, 0);
    assert_eq!(outcome.len(), 7);

    let first = &outcome.messages[0];
    assert!(first.is_system());
    assert_eq!(first.author, "System");
    assert_eq!(first.timestamp, at(2024, 3, 1, 9, 0, 0));

    let bob = &outcome.messages[2];
    assert_eq!(bob.author, "Bob");
    assert_eq!(bob.content, "Pizza sounds great\nsee you at 8");
    assert_eq!(bob.timestamp, at(2024, 3, 1, 9, 5, 10));

    let evening = &outcome.messages[4];
    assert_eq!(evening.timestamp, at(2024, 3, 2, 22, 0, 0));

    let subject = &outcome.messages[5];
    assert_eq!(subject.kind, MessageKind::System);
    assert_eq!(subject.content, "Alice changed the subject to \"Pizza club\"");
}

#[test]
fn test_parse_android_file() {
    let outcome = TranscriptParser::new()
        .parse(Path::new(&fixture("android_month_first.txt")))
        .unwrap();

    assert_eq!(outcome.resolved_format, DateFormat::MonthFirst);
    assert!(!outcome.ambiguous);
    assert_eq!(outcome.len(), 5);
    assert_eq!(outcome.messages[0].timestamp, at(2023, 12, 31, 23, 58, 0));
    assert_eq!(outcome.messages[2].timestamp, at(2024, 1, 1, 0, 1, 0));
    assert_eq!(outcome.messages[4].content, "Dave left");
    assert!(outcome.messages[4].is_system());
}

#[test]
fn test_parse_ambiguous_file() {
    let outcome = TranscriptParser::new()
        .parse_file(&fixture("ambiguous.txt"))
        .unwrap();

    assert_eq!(outcome.resolved_format, DateFormat::DayFirst);
    assert!(outcome.ambiguous);
    assert!(!outcome.used_override);
    assert_eq!(outcome.candidate_metrics.len(), 2);

    let day_first = outcome
        .candidate_metrics
        .iter()
        .find(|m| m.format == DateFormat::DayFirst)
        .unwrap();
    let month_first = outcome
        .candidate_metrics
        .iter()
        .find(|m| m.format == DateFormat::MonthFirst)
        .unwrap();
    assert_eq!(day_first.span_seconds, 2 * 24 * 3600);
    assert!(month_first.span_seconds > day_first.span_seconds);
    assert_eq!(outcome.messages[2].timestamp, at(2024, 3, 4, 10, 0, 0));
}

#[test]
fn test_override_wins_over_evidence() {
    let parser = TranscriptParser::with_config(
        ParseConfig::new().with_date_format(DateFormat::MonthFirst),
    );
    let outcome = parser.parse_file(&fixture("ambiguous.txt")).unwrap();

    assert!(outcome.used_override);
    assert!(!outcome.ambiguous);
    assert_eq!(outcome.resolved_format, DateFormat::MonthFirst);
    assert_eq!(outcome.messages[0].timestamp, at(2024, 2, 3, 10, 0, 0));
    assert_eq!(outcome.messages[2].timestamp, at(2024, 4, 3, 10, 0, 0));
}

#[test]
fn test_noise_file_is_empty_not_error() {
    let outcome = TranscriptParser::new()
        .parse_file(&fixture("noise.txt"))
        .unwrap();
    assert!(outcome.is_empty());

    let err = outcome.into_messages().unwrap_err();
    assert!(err.is_no_messages());
}

#[test]
fn test_missing_file_is_io_error() {
    let err = TranscriptParser::new()
        .parse_file("tests/fixtures/does_not_exist.txt")
        .unwrap_err();
    assert!(err.is_io());
}

#[test]
fn test_parse_is_idempotent() {
    let raw = fs::read_to_string(fixture("ios_day_first.txt")).unwrap();
    let parser = TranscriptParser::new();
    assert_eq!(parser.parse_str(&raw), parser.parse_str(&raw));
}

// =========================================================================
// Statistics
// =========================================================================

#[test]
fn test_ios_statistics() {
    let messages = TranscriptParser::new()
        .parse_file(&fixture("ios_day_first.txt"))
        .unwrap()
        .into_messages()
        .unwrap();
    let stats = compute_statistics(&messages, &StatsConfig::default());

    assert_eq!(stats.total_messages, 5);
    assert_eq!(stats.system_messages, 2);
    assert_eq!(stats.media_messages, 1);
    assert_eq!(stats.total_words, 15);
    assert_eq!(stats.participants, ["Bob", "Alice"]);

    let bob = &stats.per_participant["Bob"];
    assert_eq!(bob.messages, 3);
    assert_eq!(bob.media_messages, 1);
    assert_eq!(bob.words, 8);
    assert_eq!(
        bob.longest_message.as_ref().unwrap().content,
        "Pizza sounds great\nsee you at 8"
    );

    assert_eq!(stats.top_words[0].value, "pizza");
    assert_eq!(stats.top_words[0].count, 3);
    assert_eq!(stats.top_emoji[0].value, "🍕");
    assert_eq!(stats.top_emoji[0].count, 2);

    let busiest = stats.busiest_day.unwrap();
    assert_eq!((busiest.date, busiest.messages), (day(2024, 3, 1), 3));
    assert_eq!(stats.busiest_hour.unwrap().hour, 9);

    let streak = stats.longest_streak.unwrap();
    assert_eq!(streak.days, 2);
    assert_eq!((streak.start, streak.end), (day(2024, 3, 1), day(2024, 3, 2)));

    assert_eq!(stats.first_message, Some(at(2024, 3, 1, 9, 1, 10)));
    assert_eq!(stats.last_message, Some(at(2024, 3, 13, 8, 30, 0)));

    // Bob answered Alice after 4 minutes; his 13/3 message follows a system notice
    assert_eq!(stats.response_times["Bob"].samples, 1);
    assert_eq!(stats.response_times["Bob"].average_minutes, Some(4.0));
    assert_eq!(stats.response_times["Alice"].samples, 1);
    assert_eq!(stats.response_times["Alice"].average_minutes, Some(2214.0));
}

#[test]
fn test_response_gap_cutoff() {
    let messages = TranscriptParser::new()
        .parse_file(&fixture("ios_day_first.txt"))
        .unwrap()
        .messages;
    let config = StatsConfig::default().with_response_gap_minutes(60);
    let stats = compute_statistics(&messages, &config);

    assert_eq!(stats.response_times["Bob"].samples, 1);
    assert_eq!(stats.response_times["Alice"].samples, 0);
    assert_eq!(stats.response_times["Alice"].median_minutes, None);
    assert_eq!(stats.overall_response.samples, 1);
}

#[test]
fn test_overnight_buffer_across_new_year() {
    let messages = TranscriptParser::new()
        .parse_file(&fixture("android_month_first.txt"))
        .unwrap()
        .messages;

    let strict = StatsConfig::default().with_response_gap_minutes(1);
    let stats = compute_statistics(&messages, &strict);
    // 23:58 -> 23:59 and 00:01 -> 00:02 fit in 1 minute; 23:59 -> 00:01 does not
    assert_eq!(stats.response_times["Dave"].samples, 2);
    assert_eq!(stats.response_times["Carol"].samples, 0);

    let buffered = strict.with_overnight_buffer_minutes(5);
    let stats = compute_statistics(&messages, &buffered);
    assert_eq!(stats.response_times["Carol"].samples, 1);
    assert_eq!(stats.response_times["Carol"].average_minutes, Some(2.0));

    assert_eq!(stats.media_messages, 1);
    assert_eq!(stats.system_messages, 1);
    assert_eq!(stats.longest_streak.unwrap().days, 2);
}

// =========================================================================
// Filtering
// =========================================================================

#[test]
fn test_filter_then_statistics() {
    let messages = TranscriptParser::new()
        .parse_file(&fixture("ios_day_first.txt"))
        .unwrap()
        .messages;

    let first_day = filter_by_date(&messages, Some("2024-03-01"), Some("2024-03-01")).unwrap();
    assert_eq!(first_day.len(), 4);
    assert!(first_day.iter().all(|m| m.date() == day(2024, 3, 1)));

    let stats = compute_statistics(&first_day, &StatsConfig::default());
    assert_eq!(stats.total_messages, 3);
    assert_eq!(stats.active_days(), 1);
}

#[test]
fn test_filter_config_builder() {
    let messages = TranscriptParser::new()
        .parse_file(&fixture("ios_day_first.txt"))
        .unwrap()
        .messages;

    let config = FilterConfig::new().with_date_from("2024-03-02").unwrap();
    let later = apply_filters(&messages, &config);
    assert_eq!(later.len(), 3);

    let err = filter_by_date(&messages, Some("March 1st"), None).unwrap_err();
    assert!(err.is_invalid_date());
}

// =========================================================================
// Output
// =========================================================================

#[test]
fn test_end_to_end_outputs() {
    let messages = TranscriptParser::new()
        .parse_file(&fixture("android_month_first.txt"))
        .unwrap()
        .messages;
    let dir = tempfile::tempdir().unwrap();

    let csv_path = dir.path().join("out.csv");
    let csv_path = csv_path.to_str().unwrap();
    write_to_format(&messages, csv_path, OutputFormat::Csv, &OutputConfig::new()).unwrap();
    let csv = fs::read_to_string(csv_path).unwrap();
    assert!(csv.contains("2023-12-31 23:58:00;Carol;message;Happy new year soon!"));
    assert!(!csv.contains("Dave left"));

    let stats_path = dir.path().join("stats.json");
    let stats_path = stats_path.to_str().unwrap();
    let stats = compute_statistics(&messages, &StatsConfig::default());
    write_stats_json(&stats, stats_path).unwrap();
    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(stats_path).unwrap()).unwrap();
    assert_eq!(value["total_messages"], 4);
    assert_eq!(value["participants"][0], "Carol");
}
