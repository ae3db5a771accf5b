//! Unit tests for the valuation calculator.

use rust_decimal_macros::dec;

use super::*;
use crate::config::ValuationConfig;
use crate::errors::{Error, ValuationInputError};
use crate::scenarios::ScenarioType;
use crate::sectors::SectorTable;

fn setup() -> (SectorTable, ValuationConfig) {
    let config = ValuationConfig::default();
    let table = config.sector_table().unwrap();
    (table, config)
}

fn financials(revenue: f64, ebitda: f64, sector: &str) -> CompanyFinancials {
    CompanyFinancials {
        revenue,
        ebitda,
        sector: sector.to_string(),
        growth_rate: 0.0,
        size_bucket: SizeBucket::Micro,
    }
}

fn value(input: &CompanyFinancials) -> ValuationResult {
    let (table, config) = setup();
    calculate_valuation(input, &table, &config).unwrap()
}

// ==================== Reference examples ====================

#[test]
fn test_technology_ebitda_example() {
    let result = value(&financials(1_000_000.0, 200_000.0, "technology"));

    assert_eq!(result.method, ValuationMethod::EbitdaMultiple);
    assert_eq!(result.ebitda_multiple_used, 6.0);
    assert_eq!(result.point_valuation, dec!(1200000));
    assert_eq!(result.range.min, dec!(800000));
    assert_eq!(result.range.max, dec!(1600000));
    assert!(result.adjustments.is_empty());
    assert!(result.warnings.is_empty());
}

#[test]
fn test_negative_ebitda_falls_back_to_revenue() {
    let result = value(&financials(500_000.0, -50_000.0, "retail"));

    assert_eq!(result.method, ValuationMethod::RevenueMultiple);
    assert_eq!(result.ebitda_multiple_used, 0.8);
    assert_eq!(result.point_valuation, dec!(400000));
    assert_eq!(result.range.min, dec!(250000));
    assert_eq!(result.range.max, dec!(550000));
}

#[test]
fn test_zero_ebitda_uses_revenue_branch() {
    let result = value(&financials(100_000.0, 0.0, "technology"));
    assert_eq!(result.method, ValuationMethod::RevenueMultiple);
    assert_eq!(result.point_valuation, dec!(150000));
}

#[test]
fn test_unknown_sector_uses_default_and_warns() {
    let result = value(&financials(1_000_000.0, 100_000.0, "quantum-widgets"));

    assert_eq!(result.sector, "general");
    assert_eq!(result.ebitda_multiple_used, 5.0);
    assert_eq!(result.point_valuation, dec!(500000));
    assert!(result.has_unrecognized_sector());
    assert_eq!(
        result.warnings,
        vec![ValuationWarning::UnrecognizedSector {
            requested: "quantum-widgets".to_string(),
            fallback: "general".to_string(),
        }]
    );
}

#[test]
fn test_alias_sector_is_not_a_warning() {
    let result = value(&financials(1_000_000.0, 200_000.0, "Tecnología"));
    assert_eq!(result.sector, "technology");
    assert!(!result.has_unrecognized_sector());
}

// ==================== Adjustments ====================

#[test]
fn test_growth_band_adds_delta() {
    let mut input = financials(1_000_000.0, 200_000.0, "technology");
    input.growth_rate = 25.0;
    let result = value(&input);

    assert_eq!(result.ebitda_multiple_used, 7.0);
    assert_eq!(result.point_valuation, dec!(1400000));
    assert_eq!(result.adjustments.len(), 1);
    assert_eq!(result.adjustments[0].source, AdjustmentSource::Growth);
    assert_eq!(result.adjustments[0].delta, 1.0);
}

#[test]
fn test_growth_exactly_on_threshold_gets_lower_band() {
    let mut input = financials(1_000_000.0, 200_000.0, "technology");
    input.growth_rate = 20.0;
    assert_eq!(value(&input).ebitda_multiple_used, 6.5);
}

#[test]
fn test_decline_penalty() {
    let mut input = financials(1_000_000.0, 200_000.0, "technology");
    input.growth_rate = -5.0;
    let result = value(&input);
    assert_eq!(result.ebitda_multiple_used, 5.5);
    assert_eq!(result.adjustments[0].delta, -0.5);
}

#[test]
fn test_size_nudges_toward_max() {
    let mut input = financials(1_000_000.0, 200_000.0, "technology");
    input.size_bucket = SizeBucket::Large;
    let result = value(&input);

    // Half of the 2.0 headroom between 6 and 8.
    assert_eq!(result.ebitda_multiple_used, 7.0);
    assert_eq!(result.adjustments[0].source, AdjustmentSource::Size);
}

#[test]
fn test_growth_and_size_combined() {
    let mut input = financials(1_000_000.0, 200_000.0, "technology");
    input.growth_rate = 35.0;
    input.size_bucket = SizeBucket::Medium;
    let result = value(&input);

    // 6 + 1.5 = 7.5, then a quarter of the remaining 0.5.
    assert!((result.ebitda_multiple_used - 7.625).abs() < 1e-12);
    assert_eq!(result.point_valuation, dec!(1525000));
    assert_eq!(result.adjustments.len(), 2);
}

#[test]
fn test_multiple_clamped_into_band() {
    let (table, mut config) = setup();
    config.growth_bands[2].multiple_delta = 5.0;

    let mut input = financials(1_000_000.0, 200_000.0, "technology");
    input.growth_rate = 50.0;
    let result = calculate_valuation(&input, &table, &config).unwrap();

    assert_eq!(result.ebitda_multiple_used, 8.0);
    assert_eq!(result.point_valuation, result.range.max);
    let clamp = result.adjustments.last().unwrap();
    assert_eq!(clamp.source, AdjustmentSource::Clamp);
    assert_eq!(clamp.delta, -3.0);
}

#[test]
fn test_revenue_branch_ignores_growth_and_size() {
    let mut input = financials(500_000.0, -10_000.0, "retail");
    input.growth_rate = 40.0;
    input.size_bucket = SizeBucket::Large;
    let result = value(&input);
    assert_eq!(result.point_valuation, dec!(400000));
    assert!(result.adjustments.is_empty());
}

// ==================== Scenarios ====================

#[test]
fn test_default_scenarios_attached_in_order() {
    let result = value(&financials(1_000_000.0, 200_000.0, "technology"));
    let types: Vec<ScenarioType> = result.scenarios.iter().map(|s| s.scenario_type).collect();
    assert_eq!(
        types,
        vec![
            ScenarioType::Conservative,
            ScenarioType::Base,
            ScenarioType::Optimistic
        ]
    );
    assert_eq!(result.scenarios[1].valuation, result.point_valuation);
    assert!(result.scenarios.iter().all(|s| s.roi_pct.is_none()));
}

// ==================== Validation ====================

#[test]
fn test_rejects_both_non_positive() {
    let (table, config) = setup();
    let err = calculate_valuation(&financials(0.0, -1.0, "retail"), &table, &config).unwrap_err();
    assert_eq!(
        err,
        Error::InvalidInput(ValuationInputError::NoPositiveBasis {
            revenue: 0.0,
            ebitda: -1.0
        })
    );
}

#[test]
fn test_rejects_non_finite() {
    let (table, config) = setup();
    for input in [
        financials(f64::NAN, 1.0, "retail"),
        financials(1.0, f64::INFINITY, "retail"),
        CompanyFinancials {
            growth_rate: f64::NAN,
            ..financials(1.0, 1.0, "retail")
        },
    ] {
        let err = calculate_valuation(&input, &table, &config).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidInput(ValuationInputError::NonFinite { .. })
        ));
    }
}

#[test]
fn test_rejects_negative_revenue() {
    let (table, config) = setup();
    let err = calculate_valuation(&financials(-1.0, 100.0, "retail"), &table, &config).unwrap_err();
    assert_eq!(
        err,
        Error::InvalidInput(ValuationInputError::NegativeRevenue(-1.0))
    );
}

#[test]
fn test_rejects_amounts_beyond_supported_magnitude() {
    let (table, config) = setup();
    for (input, expected_field) in [
        (financials(1_000_000.0, 1e28, "technology"), "ebitda"),
        (financials(1e20, -5.0, "retail"), "revenue"),
    ] {
        let err = calculate_valuation(&input, &table, &config).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidInput(ValuationInputError::AmountOutOfRange { field, .. })
                if field == expected_field
        ));
    }
}

#[test]
fn test_zero_revenue_with_positive_ebitda_is_valid() {
    let result = value(&financials(0.0, 100_000.0, "technology"));
    assert_eq!(result.point_valuation, dec!(600000));
}

// ==================== Determinism and serialization ====================

#[test]
fn test_repeated_calls_are_identical() {
    let mut input = financials(1_234_567.89, 234_567.89, "Hostelería");
    input.growth_rate = 12.3;
    input.size_bucket = SizeBucket::Small;

    let first = value(&input);
    let second = value(&input);
    assert_eq!(first, second);
    assert_eq!(
        first.basis.point().to_bits(),
        second.basis.point().to_bits()
    );
}

#[test]
fn test_result_serializes_camel_case() {
    let result = value(&financials(500_000.0, -50_000.0, "retail"));
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["method"], "REVENUE_MULTIPLE");
    assert!(json.get("pointValuation").is_some());
    assert!(json.get("ebitdaMultipleUsed").is_some());
    assert!(json["scenarios"][0].get("rawValuation").is_none());
}

#[test]
fn test_size_bucket_parsing() {
    assert_eq!("11-50".parse::<SizeBucket>().unwrap(), SizeBucket::Small);
    assert_eq!(" large ".parse::<SizeBucket>().unwrap(), SizeBucket::Large);
    assert!("huge".parse::<SizeBucket>().is_err());
    assert_eq!(
        serde_json::from_str::<SizeBucket>("\"51-250\"").unwrap(),
        SizeBucket::Medium
    );
    assert_eq!(serde_json::to_string(&SizeBucket::Micro).unwrap(), "\"MICRO\"");
}
