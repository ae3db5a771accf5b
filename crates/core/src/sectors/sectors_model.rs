//! Sector multiple domain models.

use serde::{Deserialize, Serialize};

/// EBITDA multiples for one sector.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SectorMultiple {
    /// Canonical key (e.g., "technology")
    pub key: String,
    /// Display name
    pub label: String,
    /// Alternative spellings accepted by the resolver
    #[serde(default)]
    pub aliases: Vec<String>,
    pub base_multiple: f64,
    pub min_multiple: f64,
    pub max_multiple: f64,
}

impl SectorMultiple {
    /// Restricts a multiple to this sector's `[min, max]` band.
    pub fn clamp(&self, multiple: f64) -> f64 {
        multiple.clamp(self.min_multiple, self.max_multiple)
    }
}

/// Revenue multiples for one sector, used when EBITDA is not positive.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RevenueMultiple {
    /// Sector key this entry belongs to
    pub sector: String,
    pub base_multiple: f64,
    pub min_multiple: f64,
    pub max_multiple: f64,
}

/// How a requested sector key was matched.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SectorMatch {
    /// The key matched a canonical key verbatim
    Exact,
    /// The key matched a canonical key after normalization
    Normalized,
    /// The key matched one of the sector's aliases after normalization
    Alias,
    /// Nothing matched; the default sector was used
    Default,
}

/// Outcome of resolving a sector key against the sector table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SectorResolution {
    pub requested_key: String,
    pub entry: SectorMultiple,
    pub matched_by: SectorMatch,
    /// False when the default entry was substituted
    pub recognized: bool,
}
