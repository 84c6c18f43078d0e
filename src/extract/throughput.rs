use crate::model::{Marker, ThroughputRecord};
use anyhow::{Context, Result};
use log::debug;
use std::io::BufRead;

/// Parse a throughput-vs-latency log as fixed three-line records: a delay
/// window, then a throughput reading, then a latency reading.
///
/// The cadence is assumed, never checked. Each line is tested against its
/// positional marker only, so a stream that drifts out of step produces
/// records with empty fields rather than an error, and nothing resynchronizes
/// afterwards. A truncated final record is still emitted with its missing
/// fields empty. Known limitation inherited from the producer's strict
/// output format.
pub fn scan_records<R: BufRead>(input: R) -> Result<Vec<ThroughputRecord>> {
    let mut lines = input.lines();
    let mut records = Vec::new();
    loop {
        let Some(first) = lines.next() else {
            break;
        };
        let first = first.context("read input line")?;
        let second = lines
            .next()
            .transpose()
            .context("read input line")?
            .unwrap_or_default();
        let third = lines
            .next()
            .transpose()
            .context("read input line")?
            .unwrap_or_default();
        records.push(ThroughputRecord {
            window: super::extract(&first, Marker::Delay)?,
            throughput: super::extract(&second, Marker::Throughput)?,
            latency: super::extract(&third, Marker::Latency)?,
        });
    }
    debug!("parsed {} three-line records", records.len());
    Ok(records)
}
