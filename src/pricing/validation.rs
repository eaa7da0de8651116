//! Structural and cross-field checks on a single price record.
//!
//! Problems are collected, not raised, so a form can show every field
//! error at once.

use tracing::debug;

use crate::config::PricingConfig;

use super::calculators::{gross_from_net, VatRate};
use super::models::PriceRecord;
use super::responses::ValidationResult;

/// Validate a record with the default one-kopeck gross tolerance.
pub fn validate(record: &PriceRecord) -> ValidationResult {
    validate_with(record, &PricingConfig::default())
}

/// Validate a record using the gross tolerance from `config`.
pub fn validate_with(record: &PriceRecord, config: &PricingConfig) -> ValidationResult {
    let mut errors = Vec::new();

    if record.price_net.is_none() && record.price_gross.is_none() {
        errors.push("Either net or gross price must be provided".to_string());
    }

    if let Some(net) = record.price_net {
        if net < 0 {
            errors.push(format!("Net price must not be negative, got {}", net));
        }
    }

    if let Some(gross) = record.price_gross {
        if gross < 0 {
            errors.push(format!("Gross price must not be negative, got {}", gross));
        }
    }

    // An out-of-range rate is reported once; the consistency check needs a usable rate.
    let vat_rate = match record.vat_rate {
        Some(percent) => match VatRate::new(percent) {
            Ok(rate) => Some(rate),
            Err(_) => {
                errors.push(format!("VAT rate must be between 0 and 100, got {}", percent));
                None
            }
        },
        None => None,
    };

    if let (Some(net), Some(gross), Some(rate)) = (record.price_net, record.price_gross, vat_rate) {
        let expected = gross_from_net(net, rate);
        let tolerance = u64::try_from(config.gross_tolerance).unwrap_or(0);
        if expected.abs_diff(gross) > tolerance {
            errors.push(format!(
                "Gross price {} does not match net price {} at {}% VAT (expected {})",
                gross,
                net,
                rate.percent(),
                expected
            ));
        }
    }

    if let Some(valid_to) = record.valid_to {
        if valid_to < record.valid_from {
            errors.push(format!(
                "Validity end {} precedes validity start {}",
                valid_to, record.valid_from
            ));
        }
    }

    if !errors.is_empty() {
        debug!(
            "Price record {} failed validation with {} error(s)",
            record.id,
            errors.len()
        );
    }

    ValidationResult::from_errors(errors)
}
