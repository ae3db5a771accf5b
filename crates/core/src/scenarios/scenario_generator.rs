use log::debug;

use super::{ScenarioConfig, ScenarioResult};
use crate::constants::MAX_SUPPORTED_AMOUNT;
use crate::errors::{Result, ValuationInputError};
use crate::utils::money::to_money;
use crate::valuation::{ValuationBasis, ValuationResult};

/// Produces one scenario per config, in config order, relative to an
/// acquisition cost.
///
/// Each scenario scales the unrounded multiple of `base` by the config's
/// `multiplier_adjustment` and recomputes valuation, net return and ROI.
/// ROI is omitted when the acquisition cost is zero.
pub fn generate_scenarios(
    base: &ValuationResult,
    configs: &[ScenarioConfig],
    acquisition_cost: f64,
) -> Result<Vec<ScenarioResult>> {
    if !acquisition_cost.is_finite() {
        return Err(ValuationInputError::NonFinite {
            field: "acquisitionCost",
            value: acquisition_cost,
        }
        .into());
    }
    if acquisition_cost < 0.0 {
        return Err(ValuationInputError::NegativeAcquisitionCost(acquisition_cost).into());
    }
    if acquisition_cost > MAX_SUPPORTED_AMOUNT {
        return Err(ValuationInputError::AmountOutOfRange {
            field: "acquisitionCost",
            value: acquisition_cost,
        }
        .into());
    }
    project_scenarios(&base.basis, configs, Some(acquisition_cost))
}

/// Shared by [`generate_scenarios`] and the valuation calculator, which
/// attaches the default set without an acquisition cost.
pub(crate) fn project_scenarios(
    basis: &ValuationBasis,
    configs: &[ScenarioConfig],
    acquisition_cost: Option<f64>,
) -> Result<Vec<ScenarioResult>> {
    validate_configs(configs)?;

    configs
        .iter()
        .map(|config| -> Result<ScenarioResult> {
            let multiple = basis.multiple * config.multiplier_adjustment;
            let raw_valuation = basis.metric * multiple;

            let (net_return, roi_pct) = match acquisition_cost {
                Some(cost) => {
                    let net = raw_valuation - cost;
                    let roi = if cost > 0.0 {
                        Some(to_money(net / cost * 100.0)?)
                    } else {
                        None
                    };
                    (Some(to_money(net)?), roi)
                }
                None => (None, None),
            };

            debug!(
                "Scenario '{}': multiple {:.4} -> valuation {:.2}",
                config.id, multiple, raw_valuation
            );

            Ok(ScenarioResult {
                id: config.id.clone(),
                name: config.name.clone(),
                scenario_type: config.scenario_type,
                multiplier_adjustment: config.multiplier_adjustment,
                multiple,
                valuation: to_money(raw_valuation)?,
                net_return,
                roi_pct,
                raw_valuation,
            })
        })
        .collect()
}

/// Scenario ids ordered from highest to lowest unrounded valuation.
/// Ties keep their input order.
pub fn rank_scenarios(results: &[ScenarioResult]) -> Vec<String> {
    let mut ordered: Vec<&ScenarioResult> = results.iter().collect();
    ordered.sort_by(|a, b| b.raw_valuation.total_cmp(&a.raw_valuation));
    ordered.into_iter().map(|r| r.id.clone()).collect()
}

fn validate_configs(configs: &[ScenarioConfig]) -> Result<()> {
    for config in configs {
        let value = config.multiplier_adjustment;
        if !value.is_finite() || value < 0.0 {
            return Err(ValuationInputError::InvalidScenarioAdjustment {
                id: config.id.clone(),
                value,
            }
            .into());
        }
    }
    Ok(())
}
