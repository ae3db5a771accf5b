//! Tax module - simplified Spanish capital-gains overlay on a sale valuation.

mod tax_calculator;
pub mod tax_constants;
mod tax_model;

pub use tax_calculator::calculate_tax_overlay;
pub use tax_model::{
    TaxBracket, TaxBreakdownItem, TaxBreakdownKind, TaxCalculationResult, TaxScenarioInput,
    TaxpayerType,
};
