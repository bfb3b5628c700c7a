//! JSON Lines (JSONL) output writer.
//!
//! One message per line; convenient for `grep`, `jq` and line-oriented
//! pipelines.

use std::fs::File;
use std::io::{BufWriter, Write};

use crate::Message;
use crate::core::models::OutputConfig;
use crate::error::Result;

/// Writes messages to JSONL (JSON Lines) format.
///
/// Each line is a valid JSON object:
/// ```jsonl
/// {"timestamp":"2023-02-01T09:05:00","author":"Alice","content":"Hello","kind":"message"}
/// {"timestamp":"2023-02-01T09:06:00","author":"Bob","content":"Hi","kind":"message"}
/// ```
pub fn write_jsonl(messages: &[Message], output_path: &str, config: &OutputConfig) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    write_lines(&mut writer, messages, config)?;
    writer.flush()?;
    Ok(())
}

/// Converts messages to a JSONL string.
///
/// Same format as [`write_jsonl`]; every line ends with `\n`.
pub fn to_jsonl(messages: &[Message], config: &OutputConfig) -> Result<String> {
    let mut buffer = Vec::new();
    write_lines(&mut buffer, messages, config)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_lines<W: Write>(sink: &mut W, messages: &[Message], config: &OutputConfig) -> Result<()> {
    for msg in config.select(messages) {
        serde_json::to_writer(&mut *sink, msg)?;
        sink.write_all(b"\n")?;
    }
    Ok(())
}
