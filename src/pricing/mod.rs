//! Fuel price engine.
//!
//! Pure functions over immutable price snapshots: VAT arithmetic, record
//! validation, active price resolution, overlap detection and change
//! analysis. Storage and UI live elsewhere.

pub mod calculators;
pub mod changes;
pub mod conflicts;
pub mod grouping;
pub mod models;
pub mod money;
pub mod responses;
pub mod validation;
pub mod validity;

// Re-export commonly used items
pub use calculators::{
    apply_discount, gross_from_net, margin, markup, net_from_gross, price_breakdown, round_money,
    vat_amount, PriceBreakdown, VatRate,
};
pub use changes::compare;
pub use conflicts::{check_conflicts, conflicts_with};
pub use grouping::group_by_fuel_type;
pub use models::{FuelType, FuelTypeRef, PriceKey, PriceRecord, PriceStatus};
pub use money::{format_price, to_major_units, to_minor_units, MinorUnits};
pub use responses::{ChangeDirection, PriceChange, PriceConflict, ValidationResult};
pub use validation::{validate, validate_with};
pub use validity::{
    find_active_price, find_active_price_for, is_valid_at, phase_at, resolve_active_prices,
    ValidityPhase,
};
