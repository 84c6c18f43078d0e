use crate::model::{FieldValue, GroupedRow, PercentileRow};
use anyhow::{Context, Result};
use std::collections::BTreeMap;

/// Percentile points reported for every sample collection, in row order.
/// Downstream plots key on row position, so the order is part of the format.
pub const PERCENTILE_POINTS: [f64; 12] = [
    1.0, 10.0, 50.0, 90.0, 95.0, 99.0, 99.1, 99.9, 99.99, 99.999, 99.9999, 99.99999,
];

/// Summarize one sample collection as `(point, value)` rows.
///
/// Returns `None` for an empty collection; callers treat that as the
/// insufficient-data condition and fail the run instead of emitting
/// degenerate rows.
pub fn summarize(samples: &[FieldValue]) -> Option<Vec<PercentileRow>> {
    let sorted = sorted_values(samples)?;
    Some(
        PERCENTILE_POINTS
            .iter()
            .map(|&point| PercentileRow {
                point,
                value: percentile(&sorted, point),
            })
            .collect(),
    )
}

/// Summarize every group as a block of `(group, point, value)` rows, blocks
/// in ascending key order. A declared group with no samples is the same
/// insufficient-data condition as an empty ungrouped collection.
pub fn summarize_groups(groups: &BTreeMap<i64, Vec<FieldValue>>) -> Result<Vec<GroupedRow>> {
    let mut rows = Vec::with_capacity(groups.len() * PERCENTILE_POINTS.len());
    for (&group, samples) in groups {
        let block = summarize(samples)
            .with_context(|| format!("group {group} has no samples to summarize"))?;
        rows.extend(block.into_iter().map(|r| GroupedRow {
            group,
            point: r.point,
            value: r.value,
        }));
    }
    Ok(rows)
}

fn sorted_values(samples: &[FieldValue]) -> Option<Vec<f64>> {
    if samples.is_empty() {
        return None;
    }
    let mut values: Vec<f64> = samples.iter().map(|v| v.as_f64()).collect();
    values.sort_by(|a, b| a.partial_cmp(b).unwrap());
    Some(values)
}

/// Interpolated percentile over `sorted`, which is ascending and non-empty.
/// Linear interpolation between the two nearest order statistics.
fn percentile(sorted: &[f64], point: f64) -> f64 {
    let rank = point / 100.0 * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = (lower + 1).min(sorted.len() - 1);
    let fraction = rank - lower as f64;
    sorted[lower] + fraction * (sorted[upper] - sorted[lower])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ints(values: &[i64]) -> Vec<FieldValue> {
        values.iter().map(|&v| FieldValue::Int(v)).collect()
    }

    #[test]
    fn single_sample_maps_every_point_to_itself() {
        let rows = summarize(&ints(&[100])).unwrap();
        assert_eq!(rows.len(), PERCENTILE_POINTS.len());
        for row in rows {
            assert_eq!(row.value, 100.0);
        }
    }

    #[test]
    fn median_of_unordered_samples() {
        let rows = summarize(&ints(&[5, 15, 10])).unwrap();
        let p50 = rows.iter().find(|r| r.point == 50.0).unwrap();
        assert_eq!(p50.value, 10.0);
    }

    #[test]
    fn points_are_emitted_in_declared_order() {
        let rows = summarize(&ints(&[1, 2, 3])).unwrap();
        let emitted: Vec<f64> = rows.iter().map(|r| r.point).collect();
        assert_eq!(emitted, PERCENTILE_POINTS.to_vec());
    }

    #[test]
    fn values_are_monotonic_in_the_percentile_point() {
        let rows = summarize(&ints(&[9, 1, 44, 3, 21, 7, 2])).unwrap();
        for pair in rows.windows(2) {
            assert!(pair[0].value <= pair[1].value);
        }
    }

    #[test]
    fn interpolates_between_order_statistics() {
        let rows = summarize(&ints(&[2, 4])).unwrap();
        let p1 = rows.iter().find(|r| r.point == 1.0).unwrap();
        assert!((p1.value - 2.02).abs() < 1e-9);
        let p50 = rows.iter().find(|r| r.point == 50.0).unwrap();
        assert_eq!(p50.value, 3.0);
    }

    #[test]
    fn empty_collection_has_no_summary() {
        assert!(summarize(&[]).is_none());
    }

    #[test]
    fn groups_emit_blocks_in_ascending_key_order() {
        let mut groups = BTreeMap::new();
        groups.insert(2, ints(&[100]));
        groups.insert(1, ints(&[2, 4]));
        let rows = summarize_groups(&groups).unwrap();
        assert_eq!(rows.len(), 2 * PERCENTILE_POINTS.len());
        assert!(rows[..PERCENTILE_POINTS.len()]
            .iter()
            .all(|r| r.group == 1));
        assert!(rows[PERCENTILE_POINTS.len()..]
            .iter()
            .all(|r| r.group == 2 && r.value == 100.0));
    }

    #[test]
    fn declared_but_empty_group_fails() {
        let mut groups = BTreeMap::new();
        groups.insert(5, Vec::new());
        assert!(summarize_groups(&groups).is_err());
    }
}
