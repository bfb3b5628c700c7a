//! JSON output writer.

use std::fs::File;
use std::io::{BufWriter, Write};

use crate::Message;
use crate::core::models::OutputConfig;
use crate::core::stats::Statistics;
use crate::error::Result;

/// Writes messages to a JSON file as an array.
///
/// # Format
/// ```json
/// [
///   {"timestamp": "2023-02-01T09:05:00", "author": "Alice", "content": "Hello", "kind": "message"},
///   {"timestamp": "2023-02-01T09:06:00", "author": "Bob", "content": "Hi", "kind": "message"}
/// ]
/// ```
///
/// The output reads back with `serde_json::from_str::<Vec<Message>>`.
pub fn write_json(messages: &[Message], output_path: &str, config: &OutputConfig) -> Result<()> {
    let json = to_json(messages, config)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts messages to a pretty-printed JSON array.
///
/// Same format as [`write_json`], returned as a string.
pub fn to_json(messages: &[Message], config: &OutputConfig) -> Result<String> {
    let selected: Vec<&Message> = config.select(messages).collect();
    Ok(serde_json::to_string_pretty(&selected)?)
}

/// Writes a statistics report as pretty-printed JSON.
pub fn write_stats_json(stats: &Statistics, output_path: &str) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, stats)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Converts a statistics report to pretty-printed JSON.
pub fn stats_to_json(stats: &Statistics) -> Result<String> {
    Ok(serde_json::to_string_pretty(stats)?)
}
