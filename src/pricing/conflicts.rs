//! Overlapping validity periods within a (fuel type, trading point) scope.
//!
//! Records are partitioned by [`PriceKey`], then each partition is swept in
//! order of `valid_from`. A record only stays in the open set while its end
//! can still reach the next start, so the scan costs `O(n log n)` plus the
//! number of reported pairs instead of comparing every pair.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use super::models::{PriceKey, PriceRecord};
use super::responses::PriceConflict;

/// Find every pair of records with the same key whose validity intervals overlap.
///
/// Intervals are closed; a missing `valid_to` extends to infinity. Indices
/// refer to positions in `records`, with `index1 < index2`, and the result
/// is sorted by `(index1, index2)`.
pub fn check_conflicts(records: &[PriceRecord]) -> Vec<PriceConflict> {
    let mut conflicts = Vec::new();

    for (key, indices) in partition(records) {
        debug!(
            "Sweeping {} price(s) for {} at {}",
            indices.len(),
            key.fuel_type,
            key.trading_point_id
        );
        sweep(records, &key, indices, &mut conflicts);
    }

    conflicts.sort();
    report(&conflicts);
    conflicts
}

/// Reference implementation comparing every pair within a key.
///
/// Same output as [`check_conflicts`]; quadratic per key.
pub fn check_conflicts_pairwise(records: &[PriceRecord]) -> Vec<PriceConflict> {
    let mut conflicts = Vec::new();

    for (key, indices) in partition(records) {
        for (pos, &first) in indices.iter().enumerate() {
            for &second in &indices[pos + 1..] {
                if overlaps(&records[first], &records[second]) {
                    conflicts.push(conflict(first, second, &key));
                }
            }
        }
    }

    conflicts.sort();
    conflicts
}

/// Positions of existing records that `candidate` would overlap if stored.
pub fn conflicts_with(records: &[PriceRecord], candidate: &PriceRecord) -> Vec<usize> {
    let key = candidate.key();
    records
        .iter()
        .enumerate()
        .filter(|(_, existing)| existing.key() == key && overlaps(existing, candidate))
        .map(|(index, _)| index)
        .collect()
}

fn partition(records: &[PriceRecord]) -> BTreeMap<PriceKey, Vec<usize>> {
    let mut partitions: BTreeMap<PriceKey, Vec<usize>> = BTreeMap::new();
    for (index, record) in records.iter().enumerate() {
        partitions.entry(record.key()).or_default().push(index);
    }
    partitions
}

fn sweep(records: &[PriceRecord], key: &PriceKey, mut indices: Vec<usize>, out: &mut Vec<PriceConflict>) {
    indices.sort_by_key(|&index| (records[index].valid_from, index));

    let mut open: Vec<usize> = Vec::new();
    for index in indices {
        let start = records[index].valid_from;
        // Starts only grow from here, so anything ending before this one is done.
        open.retain(|&earlier| reaches(start, records[earlier].valid_to));

        for &earlier in &open {
            // Full check: an inverted interval (end before start) may still be open
            if overlaps(&records[earlier], &records[index]) {
                out.push(conflict(earlier, index, key));
            }
        }
        open.push(index);
    }
}

fn overlaps(a: &PriceRecord, b: &PriceRecord) -> bool {
    reaches(a.valid_from, b.valid_to) && reaches(b.valid_from, a.valid_to)
}

/// `start <= end`, with a missing end treated as infinity
fn reaches(start: DateTime<Utc>, end: Option<DateTime<Utc>>) -> bool {
    end.map_or(true, |end| start <= end)
}

fn conflict(a: usize, b: usize, key: &PriceKey) -> PriceConflict {
    PriceConflict {
        index1: a.min(b),
        index2: a.max(b),
        reason: format!(
            "Overlapping validity periods for fuel type {} at trading point {}",
            key.fuel_type, key.trading_point_id
        ),
    }
}

fn report(conflicts: &[PriceConflict]) {
    for c in conflicts {
        warn!("Price conflict between records {} and {}: {}", c.index1, c.index2, c.reason);
    }
}
