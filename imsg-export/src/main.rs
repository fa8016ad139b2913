//! imsg-export: filter an NDJSON message stream from stdin to stdout. Config from env / `.env`.

use std::io;

use anyhow::Result;
use imsg_export::{export_messages, ExportConfig};
use tracing::info;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = ExportConfig::load()?;
    imsg_core::init_tracing(&config.log_file)?;

    let filter = config.filter()?;
    info!(
        participants = filter.participants.len(),
        start = ?config.start,
        end = ?config.end,
        "starting export"
    );

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    export_messages(stdin, io::BufWriter::new(stdout), &filter)?;
    Ok(())
}
