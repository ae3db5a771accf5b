use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::TaxBracket;

pub use crate::constants::MAX_SUPPORTED_AMOUNT;

/// Assets acquired on or before this date qualify for abatement coefficients.
pub fn abatement_eligibility_cutoff() -> NaiveDate {
    NaiveDate::from_ymd_opt(1994, 12, 31).unwrap_or_default()
}

/// Holding years for abatement are counted up to this date.
pub fn abatement_reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1996, 12, 31).unwrap_or_default()
}

/// Only the gain generated before this date can be abated.
pub fn abatement_gain_cutoff() -> NaiveDate {
    NaiveDate::from_ymd_opt(2006, 1, 20).unwrap_or_default()
}

/// Abatement per qualifying year for non-listed shares.
pub const ABATEMENT_PCT_PER_YEAR: Decimal = dec!(14.28);

/// Years of holding that do not count toward abatement.
pub const ABATEMENT_GRACE_YEARS: u32 = 2;

/// Cumulative sale value that may benefit from abatement.
pub const ABATEMENT_SALE_VALUE_LIMIT: Decimal = dec!(400000);

/// Maximum amount reinvested in a life annuity that exempts gain.
pub const LIFE_ANNUITY_REINVESTMENT_CAP: Decimal = dec!(240000);

/// Minimum age for the life-annuity exemption.
pub const LIFE_ANNUITY_MIN_AGE: u32 = 65;

/// Exempt share of the gain under the corporate participation exemption.
pub const PARTICIPATION_EXEMPTION_PCT: Decimal = dec!(95);

/// Minimum stake for the participation exemption, in percent.
pub const PARTICIPATION_MIN_HOLDING_PCT: f64 = 5.0;

/// Minimum holding period for the participation exemption.
pub const PARTICIPATION_MIN_HOLDING_DAYS: i64 = 365;

/// Savings-base scale applied to individuals' capital gains.
pub fn individual_brackets() -> Vec<TaxBracket> {
    vec![
        TaxBracket {
            up_to: Some(dec!(6000)),
            rate_pct: dec!(19),
        },
        TaxBracket {
            up_to: Some(dec!(50000)),
            rate_pct: dec!(21),
        },
        TaxBracket {
            up_to: Some(dec!(200000)),
            rate_pct: dec!(23),
        },
        TaxBracket {
            up_to: Some(dec!(300000)),
            rate_pct: dec!(27),
        },
        TaxBracket {
            up_to: None,
            rate_pct: dec!(30),
        },
    ]
}

/// General corporate income tax rate.
pub fn company_brackets() -> Vec<TaxBracket> {
    vec![TaxBracket {
        up_to: None,
        rate_pct: dec!(25),
    }]
}
