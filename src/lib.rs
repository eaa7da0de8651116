//! Price validity and conflict resolution for a fuel station network.
//!
//! Amounts are integer kopecks throughout; see [`pricing::money`] for the
//! conversion to rubles at the display boundary.

pub mod config;
pub mod error;
pub mod pricing;

pub use config::PricingConfig;
pub use error::{PricingError, Result};
