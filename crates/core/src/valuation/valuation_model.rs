//! Company valuation domain models.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::ValuationInputError;
use crate::scenarios::ScenarioResult;

/// Company size bucket, as captured by the lead form's employee-range field.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SizeBucket {
    /// 1-10 employees
    #[default]
    #[serde(alias = "1-10")]
    Micro,
    /// 11-50 employees
    #[serde(alias = "11-50")]
    Small,
    /// 51-250 employees
    #[serde(alias = "51-250")]
    Medium,
    /// More than 250 employees
    #[serde(alias = "250+", alias = "251+")]
    Large,
}

impl SizeBucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            SizeBucket::Micro => "MICRO",
            SizeBucket::Small => "SMALL",
            SizeBucket::Medium => "MEDIUM",
            SizeBucket::Large => "LARGE",
        }
    }

    pub fn employee_range(&self) -> &'static str {
        match self {
            SizeBucket::Micro => "1-10",
            SizeBucket::Small => "11-50",
            SizeBucket::Medium => "51-250",
            SizeBucket::Large => "250+",
        }
    }
}

impl fmt::Display for SizeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SizeBucket {
    type Err = ValuationInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "micro" | "1-10" => Ok(SizeBucket::Micro),
            "small" | "11-50" => Ok(SizeBucket::Small),
            "medium" | "51-250" => Ok(SizeBucket::Medium),
            "large" | "250+" | "251+" => Ok(SizeBucket::Large),
            _ => Err(ValuationInputError::UnknownSizeBucket(s.to_string())),
        }
    }
}

/// Normalized financial snapshot supplied by the caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CompanyFinancials {
    /// Annual revenue, zero or positive
    pub revenue: f64,
    /// Annual EBITDA, may be negative
    pub ebitda: f64,
    /// Free-form sector key
    pub sector: String,
    /// Year-over-year growth in percent (15.0 = 15 %)
    #[serde(default)]
    pub growth_rate: f64,
    #[serde(default)]
    pub size_bucket: SizeBucket,
}

/// Which metric the valuation is anchored on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValuationMethod {
    EbitdaMultiple,
    /// Fallback for companies with zero or negative EBITDA
    RevenueMultiple,
}

/// Unrounded inputs of the valuation: `metric × multiple`.
///
/// Scenarios are recomputed from these values, never from rounded outputs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ValuationBasis {
    pub method: ValuationMethod,
    /// EBITDA or revenue, depending on `method`
    pub metric: f64,
    pub multiple: f64,
    pub min_multiple: f64,
    pub max_multiple: f64,
}

impl ValuationBasis {
    pub fn point(&self) -> f64 {
        self.metric * self.multiple
    }

    pub fn low(&self) -> f64 {
        self.metric * self.min_multiple
    }

    pub fn high(&self) -> f64 {
        self.metric * self.max_multiple
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ValuationRange {
    pub min: Decimal,
    pub max: Decimal,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdjustmentSource {
    Growth,
    Size,
    /// The adjusted multiple was pulled back inside the sector band
    Clamp,
}

/// A single change applied to the sector's base multiple.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MultipleAdjustment {
    pub source: AdjustmentSource,
    pub delta: f64,
    pub description: String,
}

/// Non-fatal conditions surfaced alongside a successful valuation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValuationWarning {
    UnrecognizedSector { requested: String, fallback: String },
}

/// Final, immutable output of a valuation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ValuationResult {
    /// Canonical key of the sector actually used
    pub sector: String,
    pub sector_label: String,
    pub method: ValuationMethod,
    pub point_valuation: Decimal,
    pub range: ValuationRange,
    /// Multiple applied to the basis metric (EBITDA or revenue)
    pub ebitda_multiple_used: f64,
    pub basis: ValuationBasis,
    pub adjustments: Vec<MultipleAdjustment>,
    pub scenarios: Vec<ScenarioResult>,
    pub warnings: Vec<ValuationWarning>,
}

impl ValuationResult {
    pub fn has_unrecognized_sector(&self) -> bool {
        self.warnings
            .iter()
            .any(|w| matches!(w, ValuationWarning::UnrecognizedSector { .. }))
    }
}
