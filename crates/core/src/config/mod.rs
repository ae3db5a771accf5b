//! Configuration module - sector, growth, size and scenario tables.

mod config_defaults;
mod valuation_config;

pub use valuation_config::{GrowthBand, SizeNudge, ValuationConfig};
