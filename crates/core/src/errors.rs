//! Core error types for the valuation engine.
//!
//! Every operation either returns a complete result or fails with one of these
//! errors before anything is built. Unknown sectors are not errors; they are
//! reported through [`crate::valuation::ValuationWarning`].

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the valuation engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid financial input: {0}")]
    InvalidInput(#[from] ValuationInputError),

    #[error("Invalid tax input: {0}")]
    InvalidTaxInput(#[from] TaxInputError),

    #[error("Failed to load configuration: {0}")]
    ConfigIO(String),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),

    #[error("Calculation failed: {0}")]
    Calculation(String),
}

/// Errors raised while validating company financials or scenario inputs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValuationInputError {
    #[error("field '{field}' must be a finite number, got {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("field '{field}' exceeds the supported magnitude, got {value}")]
    AmountOutOfRange { field: &'static str, value: f64 },

    #[error("revenue cannot be negative, got {0}")]
    NegativeRevenue(f64),

    #[error("revenue ({revenue}) and EBITDA ({ebitda}) are both non-positive; nothing to value")]
    NoPositiveBasis { revenue: f64, ebitda: f64 },

    #[error("acquisition cost must be zero or positive, got {0}")]
    NegativeAcquisitionCost(f64),

    #[error("scenario '{id}' has an invalid multiplier adjustment {value}")]
    InvalidScenarioAdjustment { id: String, value: f64 },

    #[error("unknown size bucket '{0}'")]
    UnknownSizeBucket(String),
}

/// Errors raised while validating a tax overlay request.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TaxInputError {
    #[error("sale percentage must be within [0, 100], got {0}")]
    SalePercentageOutOfRange(f64),

    #[error("holding percentage must be within [0, 100], got {0}")]
    HoldingPercentageOutOfRange(f64),

    #[error("could not parse {field} '{value}'")]
    UnparsableDate { field: &'static str, value: String },

    #[error("sale date {sale} is before acquisition date {acquisition}")]
    SaleBeforeAcquisition { acquisition: String, sale: String },

    #[error("field '{field}' must be a finite, non-negative amount, got {value}")]
    InvalidAmount { field: &'static str, value: f64 },
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::InvalidConfigValue(err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::ConfigIO(err.to_string())
    }
}
