//! NDJSON export: read message records, keep those the filter admits, write them with
//! resolved attachments.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use imsg_core::{iso8601, AttachmentMeta, Message, MessageFilter};
use serde::Serialize;
use tracing::{debug, info, warn};

/// Output record: message fields with `date` rendered by the ISO-8601 codec and attachments resolved.
#[derive(Debug, Clone, Serialize)]
pub struct ExportedMessage {
    pub rowid: i64,
    pub chat_id: i64,
    pub sender: String,
    pub text: String,
    pub date: String,
    pub is_from_me: bool,
    pub service: String,
    pub attachments: Vec<AttachmentMeta>,
}

impl From<&Message> for ExportedMessage {
    fn from(message: &Message) -> Self {
        Self {
            rowid: message.rowid,
            chat_id: message.chat_id,
            sender: message.sender.clone(),
            text: message.text.clone(),
            date: iso8601::format(&message.date),
            is_from_me: message.is_from_me,
            service: message.service.clone(),
            attachments: message
                .attachments
                .iter()
                .map(AttachmentMeta::from_record)
                .collect(),
        }
    }
}

/// Counters for one export run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportStats {
    /// Non-blank lines read.
    pub read: usize,
    /// Messages admitted and written.
    pub written: usize,
    /// Lines that did not decode as a message.
    pub skipped: usize,
}

/// Streams NDJSON messages from `reader` to `writer`, one admitted message per output line.
/// Blank lines are ignored. Lines that do not decode, invalid UTF-8 included, are counted in
/// `skipped` and logged, not fatal. Read and write errors abort the run.
pub fn export_messages<R, W>(
    mut reader: R,
    mut writer: W,
    filter: &MessageFilter,
) -> Result<ExportStats>
where
    R: BufRead,
    W: Write,
{
    let mut stats = ExportStats::default();
    let mut buf = Vec::new();
    let mut line_no = 0usize;

    loop {
        buf.clear();
        let n = reader
            .read_until(b'\n', &mut buf)
            .context("Failed to read input line")?;
        if n == 0 {
            break;
        }
        line_no += 1;

        let line = buf.as_slice();
        if line.iter().all(u8::is_ascii_whitespace) {
            continue;
        }
        stats.read += 1;

        let message: Message = match serde_json::from_slice(line) {
            Ok(m) => m,
            Err(e) => {
                warn!(line = line_no, error = %e, "skipping undecodable message");
                stats.skipped += 1;
                continue;
            }
        };

        if !filter.allows(&message) {
            debug!(rowid = message.rowid, sender = %message.sender, "message filtered out");
            continue;
        }

        let exported = ExportedMessage::from(&message);
        serde_json::to_writer(&mut writer, &exported).context("Failed to encode message")?;
        writer.write_all(b"\n").context("Failed to write output")?;
        stats.written += 1;
    }

    writer.flush().context("Failed to flush output")?;
    info!(
        read = stats.read,
        written = stats.written,
        skipped = stats.skipped,
        "export finished"
    );
    Ok(stats)
}
