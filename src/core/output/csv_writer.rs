//! CSV output writer.

use std::fs::File;
use std::io::Write;

use crate::Message;
use crate::core::models::{OutputConfig, TIMESTAMP_FORMAT};
use crate::error::Result;

const HEADER: [&str; 4] = ["Timestamp", "Author", "Kind", "Content"];

/// Writes messages to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Timestamp`, `Author`, `Kind`, `Content`
/// - Timestamp: `YYYY-MM-DD HH:MM:SS`
/// - Encoding: UTF-8
pub fn write_csv(messages: &[Message], output_path: &str, config: &OutputConfig) -> Result<()> {
    let file = File::create(output_path)?;
    write_records(file, messages, config)
}

/// Converts messages to a CSV string.
///
/// Same format as [`write_csv`].
pub fn to_csv(messages: &[Message], config: &OutputConfig) -> Result<String> {
    let mut buffer = Vec::new();
    write_records(&mut buffer, messages, config)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_records<W: Write>(sink: W, messages: &[Message], config: &OutputConfig) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(sink);

    writer.write_record(HEADER)?;

    for msg in config.select(messages) {
        writer.write_record(build_record(msg))?;
    }

    writer.flush()?;
    Ok(())
}

fn build_record(msg: &Message) -> [String; 4] {
    [
        msg.timestamp.format(TIMESTAMP_FORMAT).to_string(),
        msg.author.clone(),
        msg.kind.to_string(),
        msg.content.clone(),
    ]
}
