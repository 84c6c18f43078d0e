//! Tagged-line extraction from raw experiment logs.
//!
//! Every scanner makes one forward pass over its input. Lines that carry no
//! recognized tag are skipped silently; a tagged field that fails numeric
//! conversion aborts the run instead of corrupting the dataset.

mod flat;
mod grouped;
mod throughput;

pub use flat::scan_marker;
pub use grouped::scan_groups;
pub use throughput::scan_records;

use crate::model::{FieldValue, Marker, NumberKind};
use anyhow::{Context, Result};

/// The text after `tag`, trimmed, when `tag` occurs in `line` exactly once.
///
/// Zero or repeated occurrences mean the line does not carry this field.
fn field_after<'a>(line: &'a str, tag: &str) -> Option<&'a str> {
    if line.matches(tag).count() != 1 {
        return None;
    }
    line.split_once(tag).map(|(_, rest)| rest.trim())
}

/// Match `marker` on one line and parse the trailing field per its kind.
fn extract(line: &str, marker: Marker) -> Result<Option<FieldValue>> {
    match marker.kind() {
        NumberKind::Integer => Ok(extract_int(line, marker)?.map(FieldValue::Int)),
        NumberKind::Float => {
            let Some(field) = field_after(line, marker.tag()) else {
                return Ok(None);
            };
            let value = field.parse().with_context(|| {
                format!("invalid number after {} in line {line:?}", marker.tag())
            })?;
            Ok(Some(FieldValue::Float(value)))
        }
    }
}

/// `extract` for markers whose table kind is integer, returning the raw
/// integer (group declarations use it as a map key).
fn extract_int(line: &str, marker: Marker) -> Result<Option<i64>> {
    debug_assert_eq!(marker.kind(), NumberKind::Integer);
    let Some(field) = field_after(line, marker.tag()) else {
        return Ok(None);
    };
    let value = field
        .parse()
        .with_context(|| format!("invalid integer after {} in line {line:?}", marker.tag()))?;
    Ok(Some(value))
}
