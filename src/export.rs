//! CSV row emission.
//!
//! Rows are headerless comma-delimited records; fields are always numeric (or
//! empty for a missed marker), so no quoting ever kicks in. The sink itself
//! is opened, flushed and closed by the caller; only the encoder buffer is
//! drained here.

use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;

/// Serialize `rows` into `sink`, one record per line.
pub fn write_rows<W: Write, S: Serialize>(sink: W, rows: &[S]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(sink);
    for row in rows {
        writer.serialize(row).context("write output row")?;
    }
    writer.flush().context("flush output rows")?;
    Ok(())
}
