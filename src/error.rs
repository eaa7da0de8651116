//! Error handling for the pricing engine

/// Pricing engine error type
///
/// Validation problems in user-entered prices are not errors; they come back
/// as [`ValidationResult`](crate::pricing::responses::ValidationResult).
/// These variants signal a caller bug or a broken deployment setting.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PricingError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, PricingError>;
