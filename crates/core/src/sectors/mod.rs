//! Sector module - multiple tables, key normalization and resolution.

mod sector_key;
mod sector_table;
mod sectors_model;

pub use sector_key::normalize_sector_key;
pub use sector_table::SectorTable;
pub use sectors_model::{RevenueMultiple, SectorMatch, SectorMultiple, SectorResolution};

#[cfg(test)]
mod sector_table_tests;
