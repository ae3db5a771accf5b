//! Capital-gains tax overlay domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaxpayerType {
    /// Natural person, taxed on the savings base
    Individual,
    /// Holding company, taxed under corporate income tax
    Company,
}

/// Seller-side inputs for the tax overlay.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TaxScenarioInput {
    pub taxpayer_type: TaxpayerType,
    /// Share of the company being sold, 0-100
    pub sale_percentage: f64,
    /// Acquisition cost of the stake being sold
    pub acquisition_value: f64,
    pub acquisition_date: String,
    /// Defaults to today when absent
    #[serde(default)]
    pub sale_date: Option<String>,
    /// Notary, advisory and other transaction costs
    #[serde(default)]
    pub deductible_expenses: f64,
    /// Amount reinvested in a life annuity (individuals aged 65+)
    #[serde(default)]
    pub reinvestment_amount: f64,
    #[serde(default)]
    pub taxpayer_age: Option<u32>,
    /// Stake held by a corporate seller before the sale, 0-100
    #[serde(default)]
    pub holding_percentage: Option<f64>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaxBreakdownKind {
    /// Subtracted from the sale price to obtain the gain
    Deduction,
    /// Reduces the gain before the rate lookup
    Reduction,
    /// Exempt share of the gain
    Exemption,
    /// Tax charged on one bracket of the taxable gain
    Bracket,
}

/// One auditable line of the tax computation.
///
/// Only `Bracket` lines carry tax; the sum of `tax` over all lines equals
/// the result's `total_tax`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TaxBreakdownItem {
    pub kind: TaxBreakdownKind,
    pub concept: String,
    /// Amount deducted or exempted, or the slice of gain taxed
    pub base: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_pct: Option<Decimal>,
    pub tax: Decimal,
}

/// A bracket of a progressive rate table; `up_to` is `None` for the top bracket.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TaxBracket {
    pub up_to: Option<Decimal>,
    pub rate_pct: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TaxCalculationResult {
    pub taxpayer_type: TaxpayerType,
    /// Valuation multiplied by the sale percentage
    pub sale_price: Decimal,
    pub acquisition_value: Decimal,
    pub deductible_expenses: Decimal,
    /// `sale_price - acquisition_value - deductible_expenses`; negative for a loss
    pub gross_gain: Decimal,
    /// Sum of reductions and exemptions applied to the gain
    pub total_reductions: Decimal,
    pub taxable_gain: Decimal,
    pub total_tax: Decimal,
    /// Total tax over gross gain, in percent
    pub effective_rate_pct: Decimal,
    /// `sale_price - deductible_expenses - total_tax`
    pub net_proceeds: Decimal,
    pub holding_period_days: i64,
    pub tax_breakdown: Vec<TaxBreakdownItem>,
    pub notes: Vec<String>,
}

impl TaxCalculationResult {
    /// Sum of `tax` across the breakdown; always equal to `total_tax`.
    pub fn breakdown_tax_sum(&self) -> Decimal {
        self.tax_breakdown.iter().map(|item| item.tax).sum()
    }
}
