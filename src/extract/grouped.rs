use crate::model::{FieldValue, Marker};
use anyhow::{Context, Result};
use log::debug;
use std::collections::BTreeMap;
use std::io::BufRead;

/// Scan a grouped ping log: each `DP[Message]:` line opens a group and the
/// `DP[Time]:` samples after it accumulate under that group.
///
/// Samples before the first declaration are dropped. Redeclaring a key
/// discards whatever was collected for it earlier. The sorted map keeps the
/// emitted blocks in ascending key order.
pub fn scan_groups<R: BufRead>(input: R) -> Result<BTreeMap<i64, Vec<FieldValue>>> {
    let mut groups: BTreeMap<i64, Vec<FieldValue>> = BTreeMap::new();
    let mut current: Option<i64> = None;
    for line in input.lines() {
        let line = line.context("read input line")?;
        // A declaration pre-empts sample matching on its own line.
        if let Some(key) = super::extract_int(&line, Marker::Message)? {
            groups.insert(key, Vec::new());
            current = Some(key);
            continue;
        }
        if let Some(value) = super::extract(&line, Marker::Time)? {
            if let Some(key) = current {
                groups.entry(key).or_default().push(value);
            }
        }
    }
    debug!("collected samples for {} groups", groups.len());
    Ok(groups)
}
