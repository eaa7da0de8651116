//! Price record model.
//!
//! Field names follow the `prices` table columns so rows fetched by the
//! storage layer deserialize directly with serde.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::calculators::{gross_from_net, VatRate};
use super::money::MinorUnits;

/// Fuel type as it appears on a price row: either a bare code or a catalog entry.
///
/// Untagged at the serde boundary, so both `"AI-95"` and
/// `{"code": "AI-95", "name": "Аи-95"}` are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FuelTypeRef {
    Code(String),
    Catalog(FuelType),
}

impl FuelTypeRef {
    pub fn code(&self) -> &str {
        match self {
            FuelTypeRef::Code(code) => code,
            FuelTypeRef::Catalog(fuel_type) => &fuel_type.code,
        }
    }
}

impl From<&str> for FuelTypeRef {
    fn from(code: &str) -> Self {
        FuelTypeRef::Code(code.to_string())
    }
}

impl From<String> for FuelTypeRef {
    fn from(code: String) -> Self {
        FuelTypeRef::Code(code)
    }
}

impl From<FuelType> for FuelTypeRef {
    fn from(fuel_type: FuelType) -> Self {
        FuelTypeRef::Catalog(fuel_type)
    }
}

/// Fuel type from the fuel_types catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FuelType {
    pub code: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Lifecycle tag owned by the price management service.
///
/// Carried through for callers that filter on it; the engine never
/// changes or enforces it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceStatus {
    #[default]
    Active,
    Scheduled,
    Expired,
    Cancelled,
}

/// Scope within which validity periods must not overlap
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct PriceKey {
    pub fuel_type: String,
    pub trading_point_id: String,
}

impl PriceKey {
    pub fn new(fuel_type: impl Into<String>, trading_point_id: impl Into<String>) -> Self {
        Self {
            fuel_type: fuel_type.into(),
            trading_point_id: trading_point_id.into(),
        }
    }
}

/// Price from the prices table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRecord {
    #[serde(default = "Uuid::nil")]
    pub id: Uuid,
    #[serde(alias = "fuel_type_id")]
    pub fuel_type: FuelTypeRef,
    pub trading_point_id: String,
    /// Net price in kopecks
    pub price_net: Option<MinorUnits>,
    /// Gross (VAT-inclusive) price in kopecks
    pub price_gross: Option<MinorUnits>,
    /// VAT percentage; range-checked by validation, not here
    pub vat_rate: Option<Decimal>,
    pub valid_from: DateTime<Utc>,
    /// Inclusive end; `None` means open-ended
    pub valid_to: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: PriceStatus,
    #[serde(default = "default_is_active")]
    pub is_active: bool,
}

fn default_is_active() -> bool {
    true
}

impl PriceRecord {
    /// Open-ended active record with no prices set
    pub fn new(
        fuel_type: impl Into<FuelTypeRef>,
        trading_point_id: impl Into<String>,
        valid_from: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            fuel_type: fuel_type.into(),
            trading_point_id: trading_point_id.into(),
            price_net: None,
            price_gross: None,
            vat_rate: None,
            valid_from,
            valid_to: None,
            status: PriceStatus::Active,
            is_active: true,
        }
    }

    pub fn with_net(mut self, price_net: MinorUnits) -> Self {
        self.price_net = Some(price_net);
        self
    }

    pub fn with_gross(mut self, price_gross: MinorUnits) -> Self {
        self.price_gross = Some(price_gross);
        self
    }

    pub fn with_vat_rate(mut self, vat_rate: Decimal) -> Self {
        self.vat_rate = Some(vat_rate);
        self
    }

    pub fn valid_until(mut self, valid_to: DateTime<Utc>) -> Self {
        self.valid_to = Some(valid_to);
        self
    }

    pub fn key(&self) -> PriceKey {
        PriceKey::new(self.fuel_type.code(), self.trading_point_id.as_str())
    }

    /// Stored gross price, or one computed from the net price.
    ///
    /// The record's own VAT rate wins over `default_rate`. Returns `None`
    /// when there is nothing to compute from or the record's rate is out
    /// of range.
    pub fn gross_or_computed(&self, default_rate: VatRate) -> Option<MinorUnits> {
        if let Some(gross) = self.price_gross {
            return Some(gross);
        }
        let rate = match self.vat_rate {
            Some(percent) => VatRate::new(percent).ok()?,
            None => default_rate,
        };
        self.price_net.map(|net| gross_from_net(net, rate))
    }
}
