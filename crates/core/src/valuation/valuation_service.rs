use std::sync::Arc;

use log::{debug, info};

use crate::config::ValuationConfig;
use crate::errors::Result;
use crate::scenarios::{self, ScenarioConfig, ScenarioResult};
use crate::sectors::{SectorMultiple, SectorResolution, SectorTable};
use crate::tax::{self, TaxCalculationResult, TaxScenarioInput};
use crate::utils::time_utils;
use crate::valuation::valuation_calculator::calculate_valuation;
use crate::valuation::{CompanyFinancials, ValuationResult, ValuationServiceTrait};

/// Valuation engine over a fixed set of tables.
///
/// Cloning is cheap; clones share the same tables.
#[derive(Debug, Clone)]
pub struct ValuationService {
    config: Arc<ValuationConfig>,
    sectors: Arc<SectorTable>,
}

impl ValuationService {
    /// Validates `config` and builds the sector lookup table.
    pub fn new(config: ValuationConfig) -> Result<Self> {
        config.validate()?;
        let sectors = config.sector_table()?;
        info!(
            "Valuation engine ready: {} sectors, default '{}'",
            sectors.entries().len(),
            sectors.default_entry().key
        );
        Ok(Self {
            config: Arc::new(config),
            sectors: Arc::new(sectors),
        })
    }

    /// Engine over the built-in tables.
    pub fn with_default_tables() -> Result<Self> {
        Self::new(ValuationConfig::default())
    }

    pub fn config(&self) -> &ValuationConfig {
        &self.config
    }
}

impl ValuationServiceTrait for ValuationService {
    fn resolve_sector_multiple(&self, sector_key: &str) -> SectorResolution {
        self.sectors.resolve(sector_key)
    }

    fn compute_valuation(&self, financials: &CompanyFinancials) -> Result<ValuationResult> {
        let result = calculate_valuation(financials, &self.sectors, &self.config)?;
        debug!(
            "Valued '{}' at {} ({:?}, {}x)",
            result.sector, result.point_valuation, result.method, result.ebitda_multiple_used
        );
        Ok(result)
    }

    fn generate_scenarios(
        &self,
        base: &ValuationResult,
        configs: &[ScenarioConfig],
        acquisition_cost: f64,
    ) -> Result<Vec<ScenarioResult>> {
        scenarios::generate_scenarios(base, configs, acquisition_cost)
    }

    fn apply_tax_overlay(
        &self,
        sale_valuation: f64,
        input: &TaxScenarioInput,
    ) -> Result<TaxCalculationResult> {
        tax::calculate_tax_overlay(sale_valuation, input, time_utils::today())
    }

    fn sectors(&self) -> &[SectorMultiple] {
        self.sectors.entries()
    }

    fn default_scenarios(&self) -> &[ScenarioConfig] {
        &self.config.scenarios
    }
}
