//! Service trait for the valuation engine.

use crate::errors::Result;
use crate::scenarios::{ScenarioConfig, ScenarioResult};
use crate::sectors::{SectorMultiple, SectorResolution};
use crate::tax::{TaxCalculationResult, TaxScenarioInput};
use crate::valuation::{CompanyFinancials, ValuationResult};

/// Entry points consumed by the form and API layers.
///
/// Implementations hold only read-only tables, so every call is independent.
pub trait ValuationServiceTrait: Send + Sync {
    /// Resolves a free-form sector key, falling back to the default sector.
    fn resolve_sector_multiple(&self, sector_key: &str) -> SectorResolution;

    /// Computes the point valuation, range and default scenarios.
    fn compute_valuation(&self, financials: &CompanyFinancials) -> Result<ValuationResult>;

    /// Recomputes `base` under each scenario config, in order, relative to
    /// `acquisition_cost`.
    fn generate_scenarios(
        &self,
        base: &ValuationResult,
        configs: &[ScenarioConfig],
        acquisition_cost: f64,
    ) -> Result<Vec<ScenarioResult>>;

    /// Estimates capital-gains tax and net proceeds for selling at
    /// `sale_valuation`.
    fn apply_tax_overlay(
        &self,
        sale_valuation: f64,
        input: &TaxScenarioInput,
    ) -> Result<TaxCalculationResult>;

    /// Configured sector entries, in table order.
    fn sectors(&self) -> &[SectorMultiple];

    /// Configured default scenario set.
    fn default_scenarios(&self) -> &[ScenarioConfig];
}
