//! Minor/major currency unit conversion and display formatting.

use rust_decimal::Decimal;

use crate::config::PricingConfig;
use crate::pricing::calculators::round_to_minor;

/// Amount in minor currency units (kopecks).
pub type MinorUnits = i64;

const MINOR_PER_MAJOR: Decimal = Decimal::ONE_HUNDRED;

/// Convert a major-unit amount (rubles) to minor units, half away from zero.
///
/// Saturates at the `i64` bounds, including when `major` is too large to scale.
pub fn to_minor_units(major: Decimal) -> MinorUnits {
    major.checked_mul(MINOR_PER_MAJOR).map_or(
        if major.is_sign_negative() {
            MinorUnits::MIN
        } else {
            MinorUnits::MAX
        },
        round_to_minor,
    )
}

/// Convert minor units to an exact major-unit amount with two decimals.
pub fn to_major_units(minor: MinorUnits) -> Decimal {
    Decimal::new(minor, 2)
}

/// Render a price for display using the default currency settings.
///
/// ```
/// use fuel_pricing::pricing::format_price;
///
/// assert_eq!(format_price(6000, false), "60.00 ₽");
/// assert_eq!(format_price(6000, true), "60.00 ₽ (incl. VAT)");
/// ```
pub fn format_price(minor: MinorUnits, include_vat_note: bool) -> String {
    format_price_with(minor, include_vat_note, &PricingConfig::default())
}

/// Render a price for display with the currency symbol and VAT note from `config`.
pub fn format_price_with(
    minor: MinorUnits,
    include_vat_note: bool,
    config: &PricingConfig,
) -> String {
    let mut rendered = format!("{} {}", to_major_units(minor), config.currency_symbol);
    if include_vat_note {
        rendered.push_str(&format!(" ({})", config.vat_note));
    }
    rendered
}
