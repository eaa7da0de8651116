//! Point-in-time validity and active price resolution.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use super::models::{PriceKey, PriceRecord};

/// Where an instant falls relative to a record's validity interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidityPhase {
    /// Not started yet
    Upcoming,
    Current,
    /// Past its inclusive end
    Elapsed,
}

/// Check if a record is valid at the given instant (both ends inclusive)
pub fn is_valid_at(record: &PriceRecord, instant: DateTime<Utc>) -> bool {
    phase_at(record, instant) == ValidityPhase::Current
}

pub fn phase_at(record: &PriceRecord, instant: DateTime<Utc>) -> ValidityPhase {
    if instant < record.valid_from {
        return ValidityPhase::Upcoming;
    }
    match record.valid_to {
        Some(end) if instant > end => ValidityPhase::Elapsed,
        _ => ValidityPhase::Current,
    }
}

/// Pick the price in effect at `instant`.
///
/// Among records valid at that instant the one that started most recently
/// wins. When several share that start, the one appearing last in `records`
/// is chosen, matching append-only history where the newest row comes last.
pub fn find_active_price(records: &[PriceRecord], instant: DateTime<Utc>) -> Option<&PriceRecord> {
    latest_valid(records.iter(), instant)
}

/// [`find_active_price`] restricted to one fuel type and trading point.
pub fn find_active_price_for<'a>(
    records: &'a [PriceRecord],
    key: &PriceKey,
    instant: DateTime<Utc>,
) -> Option<&'a PriceRecord> {
    latest_valid(
        records
            .iter()
            .filter(|r| r.fuel_type.code() == key.fuel_type && r.trading_point_id == key.trading_point_id),
        instant,
    )
}

/// Active price for every fuel type and trading point that has one at `instant`.
pub fn resolve_active_prices(
    records: &[PriceRecord],
    instant: DateTime<Utc>,
) -> BTreeMap<PriceKey, &PriceRecord> {
    let mut active: BTreeMap<PriceKey, &PriceRecord> = BTreeMap::new();

    for record in records.iter().filter(|r| is_valid_at(r, instant)) {
        let key = record.key();
        match active.get(&key) {
            // Later input wins ties, same as find_active_price
            Some(current) if current.valid_from > record.valid_from => {}
            _ => {
                active.insert(key, record);
            }
        }
    }

    debug!(
        "Resolved {} active price(s) from {} record(s) at {}",
        active.len(),
        records.len(),
        instant
    );
    active
}

fn latest_valid<'a>(
    records: impl Iterator<Item = &'a PriceRecord>,
    instant: DateTime<Utc>,
) -> Option<&'a PriceRecord> {
    // max_by_key returns the last of equal maxima
    let active = records
        .filter(|r| is_valid_at(r, instant))
        .max_by_key(|r| r.valid_from);

    if let Some(record) = active {
        debug!(
            "Active price at {}: {} (valid from {})",
            instant, record.id, record.valid_from
        );
    }
    active
}
