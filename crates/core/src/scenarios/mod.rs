//! Scenario module - conservative/base/optimistic variants of a valuation.

mod scenario_generator;
mod scenarios_model;

pub(crate) use scenario_generator::project_scenarios;
pub use scenario_generator::{generate_scenarios, rank_scenarios};
pub use scenarios_model::{ScenarioConfig, ScenarioResult, ScenarioType};
