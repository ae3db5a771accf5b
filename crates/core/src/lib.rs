//! M&A Valuation Core - Sector multiples, valuation, scenarios and tax overlay.
//!
//! This crate contains the valuation logic. It performs no I/O beyond
//! optionally reading a JSON configuration file, and is shared by the HTTP
//! server through [`valuation::ValuationServiceTrait`].

pub mod config;
pub mod constants;
pub mod errors;
pub mod scenarios;
pub mod sectors;
pub mod tax;
pub mod utils;
pub mod valuation;

// Re-export the types most callers need
pub use config::ValuationConfig;
pub use scenarios::{ScenarioConfig, ScenarioResult, ScenarioType};
pub use sectors::{SectorMultiple, SectorResolution, SectorTable};
pub use tax::{TaxCalculationResult, TaxScenarioInput, TaxpayerType};
pub use valuation::{
    CompanyFinancials, ValuationResult, ValuationService, ValuationServiceTrait,
};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
