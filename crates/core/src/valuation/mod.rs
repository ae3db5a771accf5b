//! Valuation module - company financials in, point valuation and range out.

mod valuation_calculator;
mod valuation_model;
mod valuation_service;
mod valuation_traits;

pub use valuation_calculator::calculate_valuation;
pub use valuation_model::*;
pub use valuation_service::ValuationService;
pub use valuation_traits::ValuationServiceTrait;

#[cfg(test)]
mod valuation_calculator_tests;
