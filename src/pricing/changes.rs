//! Price change classification.

use std::cmp::Ordering;

use rust_decimal::Decimal;

use super::calculators::round_percent;
use super::money::MinorUnits;
use super::responses::{ChangeDirection, PriceChange};

/// Compare an old and a new price.
///
/// The percentage is relative to the old price and rounded to 2 decimals;
/// it is zero when the old price is zero. Percentage and direction come from
/// the exact difference; `change_amount` saturates at the `i64` bounds.
pub fn compare(old_price: MinorUnits, new_price: MinorUnits) -> PriceChange {
    let delta = Decimal::from(new_price) - Decimal::from(old_price);
    let change_amount = new_price.saturating_sub(old_price);

    let change_percent = if old_price == 0 {
        round_percent(Decimal::ZERO)
    } else {
        round_percent(delta * Decimal::ONE_HUNDRED / Decimal::from(old_price))
    };

    let direction = match new_price.cmp(&old_price) {
        Ordering::Greater => ChangeDirection::Up,
        Ordering::Less => ChangeDirection::Down,
        Ordering::Equal => ChangeDirection::Same,
    };

    PriceChange {
        change_amount,
        change_percent,
        direction,
    }
}
