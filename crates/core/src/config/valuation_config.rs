//! Static valuation tables and their loading.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use super::config_defaults;
use crate::constants::DEFAULT_SECTOR_KEY;
use crate::errors::{Error, Result};
use crate::scenarios::ScenarioConfig;
use crate::sectors::{RevenueMultiple, SectorMultiple, SectorTable};
use crate::valuation::SizeBucket;

/// Growth premium: applies when growth is strictly above `min_growth_pct`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GrowthBand {
    pub min_growth_pct: f64,
    pub multiple_delta: f64,
}

/// Fraction of the remaining headroom to the sector max granted to a size bucket.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SizeNudge {
    pub size_bucket: SizeBucket,
    pub headroom_fraction: f64,
}

/// Every table the engine reads. Loaded once, read-only afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ValuationConfig {
    #[serde(default = "default_sector_key")]
    pub default_sector: String,
    pub sectors: Vec<SectorMultiple>,
    pub revenue_multiples: Vec<RevenueMultiple>,
    #[serde(default = "config_defaults::growth_bands")]
    pub growth_bands: Vec<GrowthBand>,
    /// Subtracted from the multiple when growth is negative
    #[serde(default = "config_defaults::decline_penalty")]
    pub decline_penalty: f64,
    #[serde(default = "config_defaults::size_nudges")]
    pub size_nudges: Vec<SizeNudge>,
    #[serde(default = "ScenarioConfig::default_set")]
    pub scenarios: Vec<ScenarioConfig>,
}

fn default_sector_key() -> String {
    DEFAULT_SECTOR_KEY.to_string()
}

impl Default for ValuationConfig {
    fn default() -> Self {
        Self {
            default_sector: default_sector_key(),
            sectors: config_defaults::sectors(),
            revenue_multiples: config_defaults::revenue_multiples(),
            growth_bands: config_defaults::growth_bands(),
            decline_penalty: config_defaults::decline_penalty(),
            size_nudges: config_defaults::size_nudges(),
            scenarios: ScenarioConfig::default_set(),
        }
    }
}

impl ValuationConfig {
    /// Parses and validates a JSON table file's contents.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON table file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .map_err(|e| Error::ConfigIO(format!("{}: {}", path.display(), e)))?;
        let config = Self::from_json_str(&raw)?;
        info!(
            "Loaded valuation tables from {} ({} sectors, {} scenarios)",
            path.display(),
            config.sectors.len(),
            config.scenarios.len()
        );
        Ok(config)
    }

    /// Checks every table for consistency.
    pub fn validate(&self) -> Result<()> {
        self.sector_table()?;

        for band in &self.growth_bands {
            if !band.min_growth_pct.is_finite() || !band.multiple_delta.is_finite() {
                return Err(Error::InvalidConfigValue(format!(
                    "growth band {:?} must contain finite numbers",
                    band
                )));
            }
        }

        if !self.decline_penalty.is_finite() || self.decline_penalty < 0.0 {
            return Err(Error::InvalidConfigValue(format!(
                "decline penalty must be finite and non-negative, got {}",
                self.decline_penalty
            )));
        }

        let mut buckets = HashSet::new();
        for nudge in &self.size_nudges {
            if !(0.0..=1.0).contains(&nudge.headroom_fraction) {
                return Err(Error::InvalidConfigValue(format!(
                    "size nudge for {} must be within [0, 1], got {}",
                    nudge.size_bucket, nudge.headroom_fraction
                )));
            }
            if !buckets.insert(nudge.size_bucket) {
                return Err(Error::InvalidConfigValue(format!(
                    "size bucket {} has more than one nudge",
                    nudge.size_bucket
                )));
            }
        }

        let mut scenario_ids = HashSet::new();
        for scenario in &self.scenarios {
            let adj = scenario.multiplier_adjustment;
            if !adj.is_finite() || adj < 0.0 {
                return Err(Error::InvalidConfigValue(format!(
                    "scenario '{}' has invalid multiplier adjustment {}",
                    scenario.id, adj
                )));
            }
            if !scenario_ids.insert(scenario.id.as_str()) {
                return Err(Error::InvalidConfigValue(format!(
                    "duplicate scenario id '{}'",
                    scenario.id
                )));
            }
        }

        Ok(())
    }

    /// Builds the lookup table for this configuration's sectors.
    pub fn sector_table(&self) -> Result<SectorTable> {
        SectorTable::new(
            self.sectors.clone(),
            self.revenue_multiples.clone(),
            &self.default_sector,
        )
    }

    /// Highest growth band strictly exceeded by `growth_rate`, if any.
    pub fn growth_band_for(&self, growth_rate: f64) -> Option<&GrowthBand> {
        self.growth_bands
            .iter()
            .filter(|band| growth_rate > band.min_growth_pct)
            .max_by(|a, b| a.min_growth_pct.total_cmp(&b.min_growth_pct))
    }

    /// Headroom fraction for a size bucket; zero when not configured.
    pub fn size_nudge_for(&self, bucket: SizeBucket) -> f64 {
        self.size_nudges
            .iter()
            .find(|nudge| nudge.size_bucket == bucket)
            .map(|nudge| nudge.headroom_fraction)
            .unwrap_or(0.0)
    }
}
