//! Records grouped by fuel type code.

use std::collections::BTreeMap;

use super::models::PriceRecord;

/// Group records by fuel type code, keeping input order inside each group.
pub fn group_by_fuel_type(records: &[PriceRecord]) -> BTreeMap<String, Vec<&PriceRecord>> {
    let mut groups: BTreeMap<String, Vec<&PriceRecord>> = BTreeMap::new();
    for record in records {
        groups
            .entry(record.fuel_type.code().to_string())
            .or_default()
            .push(record);
    }
    groups
}
