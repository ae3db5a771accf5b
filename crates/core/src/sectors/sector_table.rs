use std::collections::HashMap;

use log::{debug, warn};

use super::sector_key::normalize_sector_key;
use super::{RevenueMultiple, SectorMatch, SectorMultiple, SectorResolution};
use crate::errors::{Error, Result};

/// Read-only sector lookup table, built once from configuration.
#[derive(Debug, Clone)]
pub struct SectorTable {
    entries: Vec<SectorMultiple>,
    exact: HashMap<String, usize>,
    normalized: HashMap<String, usize>,
    aliases: HashMap<String, usize>,
    revenue_multiples: HashMap<String, RevenueMultiple>,
    default_index: usize,
}

impl SectorTable {
    /// Builds the table and validates every entry.
    ///
    /// Fails when keys collide after normalization, when multiples are not
    /// positive and ordered `min <= base <= max`, or when the default sector
    /// has no EBITDA or revenue entry.
    pub fn new(
        sectors: Vec<SectorMultiple>,
        revenue_multiples: Vec<RevenueMultiple>,
        default_sector: &str,
    ) -> Result<Self> {
        let mut exact = HashMap::with_capacity(sectors.len());
        let mut normalized = HashMap::with_capacity(sectors.len());
        let mut aliases = HashMap::new();

        for (index, entry) in sectors.iter().enumerate() {
            validate_band(
                &entry.key,
                entry.min_multiple,
                entry.base_multiple,
                entry.max_multiple,
            )?;
            if exact.insert(entry.key.clone(), index).is_some() {
                return Err(Error::InvalidConfigValue(format!(
                    "duplicate sector key '{}'",
                    entry.key
                )));
            }
            if normalized
                .insert(normalize_sector_key(&entry.key), index)
                .is_some()
            {
                return Err(Error::InvalidConfigValue(format!(
                    "sector key '{}' collides with another key after normalization",
                    entry.key
                )));
            }
            for alias in &entry.aliases {
                if let Some(previous) = aliases.insert(normalize_sector_key(alias), index) {
                    if previous != index {
                        return Err(Error::InvalidConfigValue(format!(
                            "alias '{}' is claimed by both '{}' and '{}'",
                            alias, sectors[previous].key, entry.key
                        )));
                    }
                }
            }
        }

        let default_index = *exact.get(default_sector).ok_or_else(|| {
            Error::InvalidConfigValue(format!(
                "default sector '{}' is not in the sector table",
                default_sector
            ))
        })?;

        let mut revenue_by_sector = HashMap::with_capacity(revenue_multiples.len());
        for entry in revenue_multiples {
            validate_band(
                &entry.sector,
                entry.min_multiple,
                entry.base_multiple,
                entry.max_multiple,
            )?;
            if !exact.contains_key(&entry.sector) {
                return Err(Error::InvalidConfigValue(format!(
                    "revenue multiple refers to unknown sector '{}'",
                    entry.sector
                )));
            }
            if let Some(dup) = revenue_by_sector.insert(entry.sector.clone(), entry) {
                return Err(Error::InvalidConfigValue(format!(
                    "duplicate revenue multiple for sector '{}'",
                    dup.sector
                )));
            }
        }
        if !revenue_by_sector.contains_key(default_sector) {
            return Err(Error::InvalidConfigValue(format!(
                "default sector '{}' has no revenue multiple",
                default_sector
            )));
        }

        Ok(Self {
            entries: sectors,
            exact,
            normalized,
            aliases,
            revenue_multiples: revenue_by_sector,
            default_index,
        })
    }

    /// Resolves a sector key: exact match, then normalized key, then alias,
    /// then the default entry.
    pub fn resolve(&self, sector_key: &str) -> SectorResolution {
        let (index, matched_by) = if let Some(&i) = self.exact.get(sector_key) {
            (i, SectorMatch::Exact)
        } else {
            let key = normalize_sector_key(sector_key);
            if let Some(&i) = self.normalized.get(&key) {
                (i, SectorMatch::Normalized)
            } else if let Some(&i) = self.aliases.get(&key) {
                (i, SectorMatch::Alias)
            } else {
                warn!(
                    "Sector '{}' not recognized; falling back to '{}'",
                    sector_key, self.entries[self.default_index].key
                );
                (self.default_index, SectorMatch::Default)
            }
        };

        let entry = self.entries[index].clone();
        debug!("Resolved sector '{}' to '{}' ({:?})", sector_key, entry.key, matched_by);

        SectorResolution {
            requested_key: sector_key.to_string(),
            entry,
            matched_by,
            recognized: matched_by != SectorMatch::Default,
        }
    }

    /// Revenue multiple for a canonical sector key, or the default sector's.
    pub fn revenue_multiple_for(&self, sector_key: &str) -> &RevenueMultiple {
        self.revenue_multiples
            .get(sector_key)
            .unwrap_or_else(|| &self.revenue_multiples[&self.default_entry().key])
    }

    pub fn default_entry(&self) -> &SectorMultiple {
        &self.entries[self.default_index]
    }

    pub fn entries(&self) -> &[SectorMultiple] {
        &self.entries
    }
}

fn validate_band(key: &str, min: f64, base: f64, max: f64) -> Result<()> {
    let finite = min.is_finite() && base.is_finite() && max.is_finite();
    if !finite || min <= 0.0 || min > base || base > max {
        return Err(Error::InvalidConfigValue(format!(
            "multiples for '{}' must satisfy 0 < min <= base <= max (got {} / {} / {})",
            key, min, base, max
        )));
    }
    Ok(())
}
