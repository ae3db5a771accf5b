/// Decimal precision for monetary outputs
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Largest amount accepted as input, in euros
pub const MAX_SUPPORTED_AMOUNT: f64 = 1e15;

/// Sector used when a requested key cannot be resolved
pub const DEFAULT_SECTOR_KEY: &str = "general";

/// Identifiers of the built-in scenario set
pub const CONSERVATIVE_SCENARIO_ID: &str = "conservative";
pub const BASE_SCENARIO_ID: &str = "base";
pub const OPTIMISTIC_SCENARIO_ID: &str = "optimistic";
