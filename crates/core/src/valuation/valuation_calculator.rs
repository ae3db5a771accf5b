use log::debug;

use crate::config::ValuationConfig;
use crate::constants::MAX_SUPPORTED_AMOUNT;
use crate::errors::{Result, ValuationInputError};
use crate::scenarios::project_scenarios;
use crate::sectors::{SectorMultiple, SectorTable};
use crate::utils::money::to_money;
use crate::valuation::{
    AdjustmentSource, CompanyFinancials, MultipleAdjustment, ValuationBasis, ValuationMethod,
    ValuationRange, ValuationResult, ValuationWarning,
};

/// Values a company from its financials.
///
/// With positive EBITDA the sector's base multiple is adjusted for growth and
/// size, clamped to the sector band and applied to EBITDA. Otherwise the
/// sector's revenue multiple is applied to revenue. All arithmetic is done in
/// `f64`; figures are rounded to cents only when the result is built.
///
/// # Arguments
///
/// * `financials` - Snapshot of the company's figures.
/// * `sectors` - Sector lookup table built from `config`.
/// * `config` - Growth bands, size nudges and default scenarios.
///
pub fn calculate_valuation(
    financials: &CompanyFinancials,
    sectors: &SectorTable,
    config: &ValuationConfig,
) -> Result<ValuationResult> {
    validate_financials(financials)?;

    let resolution = sectors.resolve(&financials.sector);
    let mut warnings = Vec::new();
    if !resolution.recognized {
        warnings.push(ValuationWarning::UnrecognizedSector {
            requested: resolution.requested_key.clone(),
            fallback: resolution.entry.key.clone(),
        });
    }
    let sector = resolution.entry;

    let (basis, adjustments) = if financials.ebitda > 0.0 {
        let (multiple, adjustments) = adjust_multiple(&sector, financials, config);
        let basis = ValuationBasis {
            method: ValuationMethod::EbitdaMultiple,
            metric: financials.ebitda,
            multiple,
            min_multiple: sector.min_multiple,
            max_multiple: sector.max_multiple,
        };
        (basis, adjustments)
    } else {
        let revenue_multiple = sectors.revenue_multiple_for(&sector.key);
        debug!(
            "EBITDA {} is not positive; valuing '{}' on revenue at {}x",
            financials.ebitda, sector.key, revenue_multiple.base_multiple
        );
        let basis = ValuationBasis {
            method: ValuationMethod::RevenueMultiple,
            metric: financials.revenue,
            multiple: revenue_multiple.base_multiple,
            min_multiple: revenue_multiple.min_multiple,
            max_multiple: revenue_multiple.max_multiple,
        };
        (basis, Vec::new())
    };

    let scenarios = project_scenarios(&basis, &config.scenarios, None)?;

    Ok(ValuationResult {
        sector: sector.key,
        sector_label: sector.label,
        method: basis.method,
        point_valuation: to_money(basis.point())?,
        range: ValuationRange {
            min: to_money(basis.low())?,
            max: to_money(basis.high())?,
        },
        ebitda_multiple_used: basis.multiple,
        basis,
        adjustments,
        scenarios,
        warnings,
    })
}

fn validate_financials(financials: &CompanyFinancials) -> Result<()> {
    for (field, value) in [
        ("revenue", financials.revenue),
        ("ebitda", financials.ebitda),
        ("growthRate", financials.growth_rate),
    ] {
        if !value.is_finite() {
            return Err(ValuationInputError::NonFinite { field, value }.into());
        }
    }
    for (field, value) in [("revenue", financials.revenue), ("ebitda", financials.ebitda)] {
        if value.abs() > MAX_SUPPORTED_AMOUNT {
            return Err(ValuationInputError::AmountOutOfRange { field, value }.into());
        }
    }
    if financials.revenue < 0.0 {
        return Err(ValuationInputError::NegativeRevenue(financials.revenue).into());
    }
    if financials.revenue <= 0.0 && financials.ebitda <= 0.0 {
        return Err(ValuationInputError::NoPositiveBasis {
            revenue: financials.revenue,
            ebitda: financials.ebitda,
        }
        .into());
    }
    Ok(())
}

/// Applies the growth band (or decline penalty), then the size nudge toward
/// the sector max, then clamps to the sector band.
fn adjust_multiple(
    sector: &SectorMultiple,
    financials: &CompanyFinancials,
    config: &ValuationConfig,
) -> (f64, Vec<MultipleAdjustment>) {
    let mut multiple = sector.base_multiple;
    let mut adjustments = Vec::new();

    if let Some(band) = config.growth_band_for(financials.growth_rate) {
        multiple += band.multiple_delta;
        adjustments.push(MultipleAdjustment {
            source: AdjustmentSource::Growth,
            delta: band.multiple_delta,
            description: format!(
                "Growth of {}% is above {}%",
                financials.growth_rate, band.min_growth_pct
            ),
        });
    } else if financials.growth_rate < 0.0 && config.decline_penalty > 0.0 {
        multiple -= config.decline_penalty;
        adjustments.push(MultipleAdjustment {
            source: AdjustmentSource::Growth,
            delta: -config.decline_penalty,
            description: format!("Revenue declining at {}%", financials.growth_rate),
        });
    }

    let fraction = config.size_nudge_for(financials.size_bucket);
    let headroom = sector.max_multiple - multiple;
    if fraction > 0.0 && headroom > 0.0 {
        let delta = headroom * fraction;
        multiple += delta;
        adjustments.push(MultipleAdjustment {
            source: AdjustmentSource::Size,
            delta,
            description: format!(
                "{} company ({} employees) moves {}% toward the sector max",
                financials.size_bucket,
                financials.size_bucket.employee_range(),
                fraction * 100.0
            ),
        });
    }

    let clamped = sector.clamp(multiple);
    if clamped != multiple {
        adjustments.push(MultipleAdjustment {
            source: AdjustmentSource::Clamp,
            delta: clamped - multiple,
            description: format!(
                "Kept within the {} band [{}, {}]",
                sector.key, sector.min_multiple, sector.max_multiple
            ),
        });
        multiple = clamped;
    }

    debug!(
        "Multiple for '{}': base {} -> adjusted {} ({} adjustments)",
        sector.key,
        sector.base_multiple,
        multiple,
        adjustments.len()
    );
    (multiple, adjustments)
}
