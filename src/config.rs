//! Engine settings: default VAT rate, display currency and the gross/net tolerance.
//!
//! Pricing functions never read the environment themselves. A service that
//! wants deployment-specific settings loads a [`PricingConfig`] once and
//! passes it to the `*_with` variants.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{PricingError, Result};
use crate::pricing::calculators::VatRate;
use crate::pricing::money::MinorUnits;

const ENV_DEFAULT_VAT_RATE: &str = "PRICING_DEFAULT_VAT_RATE";
const ENV_CURRENCY_SYMBOL: &str = "PRICING_CURRENCY_SYMBOL";
const ENV_VAT_NOTE: &str = "PRICING_VAT_NOTE";
const ENV_GROSS_TOLERANCE: &str = "PRICING_GROSS_TOLERANCE";

/// Pricing engine settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Rate used when a record carries no VAT rate of its own
    pub default_vat_rate: VatRate,
    pub currency_symbol: String,
    pub vat_note: String,
    /// Allowed gap between stored and computed gross price, in minor units
    pub gross_tolerance: MinorUnits,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            default_vat_rate: VatRate::STANDARD,
            currency_symbol: "₽".to_string(),
            vat_note: "incl. VAT".to_string(),
            gross_tolerance: 1,
        }
    }
}

impl PricingConfig {
    /// Load settings from the process environment, reading `.env` first if present.
    pub fn from_env() -> Result<Self> {
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file loaded: {}", e);
        }
        Self::from_vars(std::env::vars())
    }

    /// Build settings from `PRICING_*` key/value pairs; other keys are ignored.
    pub fn from_vars<I, K, V>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut config = Self::default();

        for (key, value) in vars {
            let value: String = value.into();
            match key.as_ref() {
                ENV_DEFAULT_VAT_RATE => {
                    let percent = value.trim().parse::<Decimal>().map_err(|e| {
                        PricingError::Config(format!("{}={:?}: {}", ENV_DEFAULT_VAT_RATE, value, e))
                    })?;
                    config.default_vat_rate = VatRate::new(percent).map_err(|e| {
                        PricingError::Config(format!("{}: {}", ENV_DEFAULT_VAT_RATE, e))
                    })?;
                }
                ENV_CURRENCY_SYMBOL => config.currency_symbol = value,
                ENV_VAT_NOTE => config.vat_note = value,
                ENV_GROSS_TOLERANCE => {
                    let tolerance = value.trim().parse::<MinorUnits>().map_err(|e| {
                        PricingError::Config(format!("{}={:?}: {}", ENV_GROSS_TOLERANCE, value, e))
                    })?;
                    if tolerance < 0 {
                        return Err(PricingError::Config(format!(
                            "{} must not be negative, got {}",
                            ENV_GROSS_TOLERANCE, tolerance
                        )));
                    }
                    config.gross_tolerance = tolerance;
                }
                other if other.starts_with("PRICING_") => {
                    warn!("Ignoring unknown pricing setting {}", other);
                }
                _ => {}
            }
        }

        debug!("Pricing configuration: {:?}", config);
        Ok(config)
    }
}
