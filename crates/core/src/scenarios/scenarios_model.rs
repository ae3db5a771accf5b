//! Valuation scenario domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{BASE_SCENARIO_ID, CONSERVATIVE_SCENARIO_ID, OPTIMISTIC_SCENARIO_ID};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScenarioType {
    Conservative,
    Base,
    Optimistic,
    Custom,
}

/// Definition of one scenario variant.
///
/// `multiplier_adjustment` is a relative factor on the adjusted multiple:
/// 0.8 is a 20 % haircut, 1.0 leaves the multiple unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioConfig {
    pub id: String,
    pub name: String,
    pub scenario_type: ScenarioType,
    pub multiplier_adjustment: f64,
}

impl ScenarioConfig {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        scenario_type: ScenarioType,
        multiplier_adjustment: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            scenario_type,
            multiplier_adjustment,
        }
    }

    /// A user-defined scenario with a generated id.
    pub fn custom(name: impl Into<String>, multiplier_adjustment: f64) -> Self {
        Self::new(
            Uuid::new_v4().to_string(),
            name,
            ScenarioType::Custom,
            multiplier_adjustment,
        )
    }

    /// Conservative, base and optimistic, in display order.
    pub fn default_set() -> Vec<Self> {
        vec![
            Self::new(
                CONSERVATIVE_SCENARIO_ID,
                "Conservative",
                ScenarioType::Conservative,
                0.8,
            ),
            Self::new(BASE_SCENARIO_ID, "Base", ScenarioType::Base, 1.0),
            Self::new(
                OPTIMISTIC_SCENARIO_ID,
                "Optimistic",
                ScenarioType::Optimistic,
                1.2,
            ),
        ]
    }
}

/// Valuation recomputed under one scenario.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioResult {
    pub id: String,
    pub name: String,
    pub scenario_type: ScenarioType,
    pub multiplier_adjustment: f64,
    /// Multiple after applying the adjustment
    pub multiple: f64,
    pub valuation: Decimal,
    /// `valuation - acquisition cost`; absent without an acquisition cost
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net_return: Option<Decimal>,
    /// Net return over acquisition cost, in percent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roi_pct: Option<Decimal>,
    #[serde(skip)]
    pub(crate) raw_valuation: f64,
}

impl ScenarioResult {
    /// Valuation before display rounding, used for comparisons.
    pub fn raw_valuation(&self) -> f64 {
        self.raw_valuation
    }
}
