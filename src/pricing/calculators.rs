//! Core pricing calculation functions.
//!
//! Pure functions for VAT, discount, margin and markup math - no I/O.
//! Amounts are integer minor units; rates and percentages are `Decimal`.

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{PricingError, Result};
use crate::pricing::money::MinorUnits;

/// Round to specified decimal places, half away from zero.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use fuel_pricing::pricing::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(3));
/// assert_eq!(round_money(dec!(-2.5), 0), dec!(-3));
/// assert_eq!(round_money(dec!(1.235), 2), dec!(1.24));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
}

/// Round a decimal amount to whole minor units, saturating at the `i64` bounds.
pub fn round_to_minor(amount: Decimal) -> MinorUnits {
    let rounded = round_money(amount, 0);
    rounded.to_i64().unwrap_or(if rounded.is_sign_negative() {
        i64::MIN
    } else {
        i64::MAX
    })
}

/// Round a percentage to 2 decimals and fix its scale at 2, so `5` renders as `5.00`.
pub fn round_percent(value: Decimal) -> Decimal {
    let mut rounded = round_money(value, 2);
    rounded.rescale(2);
    rounded
}

/// VAT percentage, guaranteed to lie in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct VatRate(Decimal);

impl VatRate {
    /// Standard Russian VAT rate, 20 %.
    pub const STANDARD: VatRate = VatRate(Decimal::from_parts(20, 0, 0, false, 0));

    /// VAT exempt.
    pub const ZERO: VatRate = VatRate(Decimal::ZERO);

    pub fn new(percent: Decimal) -> Result<Self> {
        if percent < Decimal::ZERO || percent > Decimal::ONE_HUNDRED {
            return Err(PricingError::InvalidArgument(format!(
                "VAT rate {} is outside 0..=100",
                percent
            )));
        }
        Ok(Self(percent))
    }

    pub fn percent(self) -> Decimal {
        self.0
    }

    /// `1 + rate/100`; never below one.
    fn multiplier(self) -> Decimal {
        Decimal::ONE + self.0 / Decimal::ONE_HUNDRED
    }
}

impl Default for VatRate {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl TryFrom<Decimal> for VatRate {
    type Error = PricingError;

    fn try_from(percent: Decimal) -> Result<Self> {
        Self::new(percent)
    }
}

impl From<VatRate> for Decimal {
    fn from(rate: VatRate) -> Self {
        rate.0
    }
}

/// Gross (VAT-inclusive) price from a net price.
pub fn gross_from_net(net: MinorUnits, vat_rate: VatRate) -> MinorUnits {
    round_to_minor(Decimal::from(net) * vat_rate.multiplier())
}

/// Net price from a gross (VAT-inclusive) price.
pub fn net_from_gross(gross: MinorUnits, vat_rate: VatRate) -> MinorUnits {
    round_to_minor(Decimal::from(gross) / vat_rate.multiplier())
}

/// VAT charged on top of a net price.
pub fn vat_amount(net: MinorUnits, vat_rate: VatRate) -> MinorUnits {
    round_to_minor(Decimal::from(net) * vat_rate.percent() / Decimal::ONE_HUNDRED)
}

/// Apply a percentage discount to a price.
///
/// Fails with [`PricingError::InvalidArgument`] when `discount_percent` is
/// outside `0..=100`.
pub fn apply_discount(price: MinorUnits, discount_percent: Decimal) -> Result<MinorUnits> {
    if discount_percent < Decimal::ZERO || discount_percent > Decimal::ONE_HUNDRED {
        return Err(PricingError::InvalidArgument(format!(
            "discount {}% is outside 0..=100",
            discount_percent
        )));
    }

    let remaining = Decimal::ONE_HUNDRED - discount_percent;
    Ok(round_to_minor(
        Decimal::from(price) * remaining / Decimal::ONE_HUNDRED,
    ))
}

/// Margin as a percentage of the selling price, 2 decimals.
///
/// Returns zero when `selling_price` is zero.
pub fn margin(cost_price: MinorUnits, selling_price: MinorUnits) -> Decimal {
    if selling_price == 0 {
        return round_percent(Decimal::ZERO);
    }
    let profit = Decimal::from(selling_price) - Decimal::from(cost_price);
    round_percent(profit * Decimal::ONE_HUNDRED / Decimal::from(selling_price))
}

/// Markup as a percentage of the cost price, 2 decimals.
///
/// Returns zero when `cost_price` is zero.
pub fn markup(cost_price: MinorUnits, selling_price: MinorUnits) -> Decimal {
    if cost_price == 0 {
        return round_percent(Decimal::ZERO);
    }
    let profit = Decimal::from(selling_price) - Decimal::from(cost_price);
    round_percent(profit * Decimal::ONE_HUNDRED / Decimal::from(cost_price))
}

/// Split of a net price into its VAT and gross parts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriceBreakdown {
    pub net: MinorUnits,
    pub vat: MinorUnits,
    pub gross: MinorUnits,
    pub vat_rate: VatRate,
}

/// Break a net price down into VAT and gross amounts.
///
/// `net + vat == gross` always holds: adding a whole number of minor units
/// commutes with rounding.
pub fn price_breakdown(net: MinorUnits, vat_rate: VatRate) -> PriceBreakdown {
    let vat = vat_amount(net, vat_rate);
    PriceBreakdown {
        net,
        vat,
        gross: net.saturating_add(vat),
        vat_rate,
    }
}
