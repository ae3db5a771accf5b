//! Tests for sector resolution and table validation.

use super::*;
use crate::config::ValuationConfig;
use crate::errors::Error;

fn default_table() -> SectorTable {
    let config = ValuationConfig::default();
    SectorTable::new(
        config.sectors,
        config.revenue_multiples,
        &config.default_sector,
    )
    .unwrap()
}

fn sector(key: &str, min: f64, base: f64, max: f64) -> SectorMultiple {
    SectorMultiple {
        key: key.to_string(),
        label: key.to_string(),
        aliases: Vec::new(),
        base_multiple: base,
        min_multiple: min,
        max_multiple: max,
    }
}

fn revenue(key: &str, min: f64, base: f64, max: f64) -> RevenueMultiple {
    RevenueMultiple {
        sector: key.to_string(),
        base_multiple: base,
        min_multiple: min,
        max_multiple: max,
    }
}

// ==================== Resolution ====================

#[test]
fn test_exact_match() {
    let table = default_table();
    let res = table.resolve("technology");
    assert_eq!(res.matched_by, SectorMatch::Exact);
    assert!(res.recognized);
    assert_eq!(res.entry.base_multiple, 6.0);
    assert_eq!(res.entry.min_multiple, 4.0);
    assert_eq!(res.entry.max_multiple, 8.0);
}

#[test]
fn test_normalized_match() {
    let table = default_table();
    let res = table.resolve("  TECHNOLOGY ");
    assert_eq!(res.matched_by, SectorMatch::Normalized);
    assert_eq!(res.entry.key, "technology");
    assert_eq!(res.requested_key, "  TECHNOLOGY ");
}

#[test]
fn test_alias_match_with_diacritics() {
    let table = default_table();
    let res = table.resolve("Tecnología");
    assert_eq!(res.matched_by, SectorMatch::Alias);
    assert_eq!(res.entry.key, "technology");

    let res = table.resolve("Construcción");
    assert_eq!(res.entry.key, "construction");
    assert!(res.recognized);
}

#[test]
fn test_unknown_sector_falls_back_to_default() {
    let table = default_table();
    let res = table.resolve("quantum-widgets");
    assert_eq!(res.matched_by, SectorMatch::Default);
    assert!(!res.recognized);
    assert_eq!(res.entry.key, table.default_entry().key);
}

#[test]
fn test_empty_key_falls_back_to_default() {
    let table = default_table();
    assert!(!table.resolve("").recognized);
}

#[test]
fn test_resolution_is_deterministic() {
    let table = default_table();
    assert_eq!(table.resolve("Retail"), table.resolve("Retail"));
}

#[test]
fn test_revenue_multiple_lookup() {
    let table = default_table();
    assert_eq!(table.revenue_multiple_for("retail").base_multiple, 0.8);
    let fallback = table.revenue_multiple_for("no-such-sector");
    assert_eq!(fallback.sector, table.default_entry().key);
}

// ==================== Validation ====================

#[test]
fn test_rejects_missing_default_sector() {
    let err = SectorTable::new(
        vec![sector("retail", 3.0, 4.0, 5.0)],
        vec![revenue("retail", 0.5, 0.8, 1.1)],
        "general",
    )
    .unwrap_err();
    assert!(matches!(err, Error::InvalidConfigValue(_)));
}

#[test]
fn test_rejects_unordered_multiples() {
    let err = SectorTable::new(
        vec![sector("general", 5.0, 4.0, 6.0)],
        vec![revenue("general", 0.4, 0.7, 1.0)],
        "general",
    )
    .unwrap_err();
    assert!(err.to_string().contains("min <= base <= max"));
}

#[test]
fn test_rejects_non_positive_multiples() {
    assert!(SectorTable::new(
        vec![sector("general", 0.0, 4.0, 6.0)],
        vec![revenue("general", 0.4, 0.7, 1.0)],
        "general",
    )
    .is_err());
}

#[test]
fn test_rejects_keys_colliding_after_normalization() {
    let err = SectorTable::new(
        vec![
            sector("general", 3.0, 4.0, 5.0),
            sector("Retail", 3.0, 4.0, 5.0),
            sector("retail", 3.0, 4.0, 5.0),
        ],
        vec![revenue("general", 0.4, 0.7, 1.0)],
        "general",
    )
    .unwrap_err();
    assert!(err.to_string().contains("collides"));
}

#[test]
fn test_rejects_default_without_revenue_multiple() {
    let err = SectorTable::new(
        vec![sector("general", 3.0, 4.0, 5.0), sector("retail", 3.0, 4.0, 5.0)],
        vec![revenue("retail", 0.5, 0.8, 1.1)],
        "general",
    )
    .unwrap_err();
    assert!(err.to_string().contains("no revenue multiple"));
}

#[test]
fn test_rejects_revenue_multiple_for_unknown_sector() {
    assert!(SectorTable::new(
        vec![sector("general", 3.0, 4.0, 5.0)],
        vec![
            revenue("general", 0.4, 0.7, 1.0),
            revenue("mining", 0.4, 0.7, 1.0)
        ],
        "general",
    )
    .is_err());
}
