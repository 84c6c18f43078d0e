use crate::model::{FieldValue, Marker};
use anyhow::{Context, Result};
use log::debug;
use std::io::BufRead;

/// Collect every `marker` field in the stream, in input order.
pub fn scan_marker<R: BufRead>(input: R, marker: Marker) -> Result<Vec<FieldValue>> {
    let mut data = Vec::new();
    for line in input.lines() {
        let line = line.context("read input line")?;
        if let Some(value) = super::extract(&line, marker)? {
            data.push(value);
        }
    }
    debug!("collected {} {} fields", data.len(), marker.tag());
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn collects_matches_in_input_order() {
        let input = Cursor::new("DP[Time]: 5\njunk\nDP[Time]: 15\nDP[Time]: 10\n");
        let data = scan_marker(input, Marker::Time).unwrap();
        assert_eq!(
            data,
            vec![
                FieldValue::Int(5),
                FieldValue::Int(15),
                FieldValue::Int(10)
            ]
        );
    }

    #[test]
    fn unmatched_stream_yields_empty_collection() {
        let input = Cursor::new("nothing\ntagged\nhere\n");
        let data = scan_marker(input, Marker::Interval).unwrap();
        assert!(data.is_empty());
    }

    #[test]
    fn malformed_field_aborts_the_scan() {
        let input = Cursor::new("DP[Int]: 3\nDP[Int]: three\n");
        assert!(scan_marker(input, Marker::Interval).is_err());
    }
}
