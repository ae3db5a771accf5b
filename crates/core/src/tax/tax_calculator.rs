use chrono::{Months, NaiveDate};
use log::{debug, warn};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::tax_constants::*;
use super::{
    TaxBracket, TaxBreakdownItem, TaxBreakdownKind, TaxCalculationResult, TaxScenarioInput,
    TaxpayerType,
};
use crate::errors::{Result, TaxInputError};
use crate::utils::money::{round_money, to_decimal};
use crate::utils::time_utils::{days_between, parse_flexible_date};

/// Estimates Spanish capital-gains tax on selling a stake at `sale_valuation`.
///
/// The gain is reduced by every applicable benefit before the bracket walk,
/// and each deduction, reduction, exemption and bracket is itemized in
/// `tax_breakdown`. `fallback_sale_date` is used when the input has no sale
/// date, so the calculation itself never reads the clock.
pub fn calculate_tax_overlay(
    sale_valuation: f64,
    input: &TaxScenarioInput,
    fallback_sale_date: NaiveDate,
) -> Result<TaxCalculationResult> {
    let (acquisition_date, sale_date) = validate_input(sale_valuation, input, fallback_sale_date)?;

    let sale_price =
        round_money(to_decimal(sale_valuation)? * to_decimal(input.sale_percentage)? / dec!(100));
    let acquisition_value = round_money(to_decimal(input.acquisition_value)?);
    let deductible_expenses = round_money(to_decimal(input.deductible_expenses)?);
    let reinvestment = round_money(to_decimal(input.reinvestment_amount)?);
    let holding_period_days = days_between(acquisition_date, sale_date);

    let mut breakdown = Vec::new();
    let mut notes = Vec::new();

    if deductible_expenses > Decimal::ZERO {
        breakdown.push(TaxBreakdownItem {
            kind: TaxBreakdownKind::Deduction,
            concept: "Deductible transaction expenses".to_string(),
            base: deductible_expenses,
            rate_pct: None,
            tax: Decimal::ZERO,
        });
    }

    let gross_gain = sale_price - acquisition_value - deductible_expenses;
    let mut remaining = gross_gain.max(Decimal::ZERO);

    if gross_gain <= Decimal::ZERO {
        notes.push(format!(
            "No taxable gain: the sale results in a capital loss of {}",
            -gross_gain
        ));
    } else {
        let reductions = match input.taxpayer_type {
            TaxpayerType::Individual => individual_reductions(
                remaining,
                sale_price,
                reinvestment,
                input,
                acquisition_date,
                sale_date,
                &mut notes,
            ),
            TaxpayerType::Company => company_reductions(
                remaining,
                reinvestment,
                input,
                holding_period_days,
                &mut notes,
            ),
        };
        for item in reductions {
            remaining -= item.base;
            breakdown.push(item);
        }
    }

    let taxable_gain = remaining;
    let total_reductions = gross_gain.max(Decimal::ZERO) - taxable_gain;

    let brackets = match input.taxpayer_type {
        TaxpayerType::Individual => individual_brackets(),
        TaxpayerType::Company => company_brackets(),
    };
    breakdown.extend(walk_brackets(taxable_gain, &brackets));

    let total_tax: Decimal = breakdown.iter().map(|item| item.tax).sum();
    let effective_rate_pct = if gross_gain > Decimal::ZERO {
        round_money(total_tax / gross_gain * dec!(100))
    } else {
        Decimal::ZERO
    };

    debug!(
        "Tax overlay ({:?}): gain {} -> taxable {} -> tax {}",
        input.taxpayer_type, gross_gain, taxable_gain, total_tax
    );

    Ok(TaxCalculationResult {
        taxpayer_type: input.taxpayer_type,
        sale_price,
        acquisition_value,
        deductible_expenses,
        gross_gain,
        total_reductions,
        taxable_gain,
        total_tax,
        effective_rate_pct,
        net_proceeds: sale_price - deductible_expenses - total_tax,
        holding_period_days,
        tax_breakdown: breakdown,
        notes,
    })
}

fn validate_input(
    sale_valuation: f64,
    input: &TaxScenarioInput,
    fallback_sale_date: NaiveDate,
) -> std::result::Result<(NaiveDate, NaiveDate), TaxInputError> {
    if !(0.0..=100.0).contains(&input.sale_percentage) {
        return Err(TaxInputError::SalePercentageOutOfRange(input.sale_percentage));
    }
    if let Some(stake) = input.holding_percentage {
        if !(0.0..=100.0).contains(&stake) {
            return Err(TaxInputError::HoldingPercentageOutOfRange(stake));
        }
    }
    for (field, value) in [
        ("saleValuation", sale_valuation),
        ("acquisitionValue", input.acquisition_value),
        ("deductibleExpenses", input.deductible_expenses),
        ("reinvestmentAmount", input.reinvestment_amount),
    ] {
        if !value.is_finite() || !(0.0..=MAX_SUPPORTED_AMOUNT).contains(&value) {
            return Err(TaxInputError::InvalidAmount { field, value });
        }
    }

    let acquisition_date = parse_flexible_date("acquisitionDate", &input.acquisition_date)?;
    let sale_date = match &input.sale_date {
        Some(raw) => parse_flexible_date("saleDate", raw)?,
        None => fallback_sale_date,
    };
    if sale_date < acquisition_date {
        return Err(TaxInputError::SaleBeforeAcquisition {
            acquisition: acquisition_date.to_string(),
            sale: sale_date.to_string(),
        });
    }
    Ok((acquisition_date, sale_date))
}

/// Abatement coefficients, then the life-annuity exemption, each applied to
/// the gain left by the previous one.
fn individual_reductions(
    gain: Decimal,
    sale_price: Decimal,
    reinvestment: Decimal,
    input: &TaxScenarioInput,
    acquisition_date: NaiveDate,
    sale_date: NaiveDate,
    notes: &mut Vec<String>,
) -> Vec<TaxBreakdownItem> {
    let mut items = Vec::new();
    let mut remaining = gain;

    if let Some(item) = abatement_reduction(remaining, sale_price, acquisition_date, sale_date) {
        remaining -= item.base;
        items.push(item);
    }

    if reinvestment > Decimal::ZERO {
        match input.taxpayer_age {
            Some(age) if age >= LIFE_ANNUITY_MIN_AGE => {
                let reinvested = reinvestment.min(LIFE_ANNUITY_REINVESTMENT_CAP).min(sale_price);
                let share = reinvested / sale_price;
                let exempt = round_money(remaining * share);
                if exempt > Decimal::ZERO {
                    items.push(TaxBreakdownItem {
                        kind: TaxBreakdownKind::Exemption,
                        concept: format!("Reinvestment of {} in a life annuity", reinvested),
                        base: exempt,
                        rate_pct: Some(round_money(share * dec!(100))),
                        tax: Decimal::ZERO,
                    });
                }
                if reinvestment > reinvested {
                    notes.push(format!(
                        "Only {} of the {} reinvested qualifies for the life-annuity exemption",
                        reinvested, reinvestment
                    ));
                }
            }
            _ => {
                warn!(
                    "Life-annuity reinvestment ignored: taxpayer age {:?} is below {}",
                    input.taxpayer_age, LIFE_ANNUITY_MIN_AGE
                );
                notes.push(format!(
                    "Life-annuity reinvestment only exempts gains for sellers aged {} or over; no exemption applied",
                    LIFE_ANNUITY_MIN_AGE
                ));
            }
        }
    }

    items
}

/// Abatement for shares acquired before 1995: 14.28 % per holding year up to
/// 1996 beyond the first two, on the gain generated before 2006-01-20, limited
/// to the share of sale value within the cumulative cap.
fn abatement_reduction(
    gain: Decimal,
    sale_price: Decimal,
    acquisition_date: NaiveDate,
    sale_date: NaiveDate,
) -> Option<TaxBreakdownItem> {
    if acquisition_date > abatement_eligibility_cutoff() {
        return None;
    }
    let years = holding_years_rounded_up(acquisition_date, abatement_reference_date());
    let qualifying_years = years.saturating_sub(ABATEMENT_GRACE_YEARS);
    let held_days = days_between(acquisition_date, sale_date);
    if qualifying_years == 0 || held_days <= 0 || sale_price <= Decimal::ZERO {
        return None;
    }

    let pct = (ABATEMENT_PCT_PER_YEAR * Decimal::from(qualifying_years)).min(dec!(100));
    let pre_cutoff_days = days_between(acquisition_date, abatement_gain_cutoff()).min(held_days);
    let pre_cutoff_share = Decimal::from(pre_cutoff_days) / Decimal::from(held_days);
    let value_share = if sale_price > ABATEMENT_SALE_VALUE_LIMIT {
        ABATEMENT_SALE_VALUE_LIMIT / sale_price
    } else {
        Decimal::ONE
    };

    let amount = round_money(gain * pre_cutoff_share * pct / dec!(100) * value_share);
    if amount <= Decimal::ZERO {
        return None;
    }
    Some(TaxBreakdownItem {
        kind: TaxBreakdownKind::Reduction,
        concept: format!(
            "Abatement coefficients: {} qualifying years at {}%",
            qualifying_years, ABATEMENT_PCT_PER_YEAR
        ),
        base: amount,
        rate_pct: Some(pct),
        tax: Decimal::ZERO,
    })
}

fn company_reductions(
    gain: Decimal,
    reinvestment: Decimal,
    input: &TaxScenarioInput,
    holding_period_days: i64,
    notes: &mut Vec<String>,
) -> Vec<TaxBreakdownItem> {
    let mut items = Vec::new();

    if reinvestment > Decimal::ZERO {
        notes.push("Life-annuity reinvestment does not apply to corporate sellers".to_string());
    }

    let stake = input.holding_percentage.unwrap_or(0.0);
    if stake >= PARTICIPATION_MIN_HOLDING_PCT && holding_period_days >= PARTICIPATION_MIN_HOLDING_DAYS
    {
        let exempt = round_money(gain * PARTICIPATION_EXEMPTION_PCT / dec!(100));
        items.push(TaxBreakdownItem {
            kind: TaxBreakdownKind::Exemption,
            concept: format!("Participation exemption on a {}% stake", stake),
            base: exempt,
            rate_pct: Some(PARTICIPATION_EXEMPTION_PCT),
            tax: Decimal::ZERO,
        });
    } else {
        notes.push(format!(
            "Participation exemption not applied: requires a stake of at least {}% held for {} days",
            PARTICIPATION_MIN_HOLDING_PCT, PARTICIPATION_MIN_HOLDING_DAYS
        ));
    }

    items
}

/// Splits the taxable gain across the brackets; each line is rounded to cents.
fn walk_brackets(taxable_gain: Decimal, brackets: &[TaxBracket]) -> Vec<TaxBreakdownItem> {
    let mut items = Vec::new();
    let mut lower = Decimal::ZERO;

    for bracket in brackets {
        if taxable_gain <= lower {
            break;
        }
        let upper = bracket
            .up_to
            .map_or(taxable_gain, |limit| limit.min(taxable_gain));
        let slice = upper - lower;
        let concept = match bracket.up_to {
            Some(limit) => format!("Bracket {} to {} at {}%", lower, limit, bracket.rate_pct),
            None => format!("Bracket above {} at {}%", lower, bracket.rate_pct),
        };
        items.push(TaxBreakdownItem {
            kind: TaxBreakdownKind::Bracket,
            concept,
            base: slice,
            rate_pct: Some(bracket.rate_pct),
            tax: round_money(slice * bracket.rate_pct / dec!(100)),
        });

        match bracket.up_to {
            Some(limit) => lower = limit,
            None => break,
        }
    }
    items
}

/// Whole years from `start` to `end`, counting a partial year as a full one.
fn holding_years_rounded_up(start: NaiveDate, end: NaiveDate) -> u32 {
    let full = end.years_since(start).unwrap_or(0);
    let anniversary = start.checked_add_months(Months::new(full * 12));
    if anniversary == Some(end) {
        full
    } else {
        full + 1
    }
}
