use chrono::{DateTime, Local, NaiveDate};

use crate::errors::TaxInputError;

/// Date formats accepted from the tax form, tried in order.
const ACCEPTED_DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y"];

/// Parses a user-supplied date.
///
/// Accepts ISO dates (`2019-03-31`), Spanish day-first dates (`31/03/2019`)
/// and full RFC 3339 timestamps, in which case only the date part is kept.
pub fn parse_flexible_date(field: &'static str, value: &str) -> Result<NaiveDate, TaxInputError> {
    let trimmed = value.trim();
    for format in ACCEPTED_DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Ok(date);
        }
    }
    DateTime::parse_from_rfc3339(trimmed)
        .map(|dt| dt.date_naive())
        .map_err(|_| TaxInputError::UnparsableDate {
            field,
            value: value.to_string(),
        })
}

/// Local calendar date, used when a request does not carry a sale date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Number of whole days from `start` to `end`; negative when `end` precedes `start`.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_iso_and_spanish_formats() {
        let expected = NaiveDate::from_ymd_opt(2019, 3, 31).unwrap();
        assert_eq!(parse_flexible_date("d", "2019-03-31").unwrap(), expected);
        assert_eq!(parse_flexible_date("d", "31/03/2019").unwrap(), expected);
        assert_eq!(parse_flexible_date("d", " 31-03-2019 ").unwrap(), expected);
        assert_eq!(
            parse_flexible_date("d", "2019-03-31T10:15:00+02:00").unwrap(),
            expected
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = parse_flexible_date("acquisitionDate", "last spring").unwrap_err();
        assert_eq!(
            err,
            TaxInputError::UnparsableDate {
                field: "acquisitionDate",
                value: "last spring".to_string()
            }
        );
        assert!(parse_flexible_date("d", "2019-02-30").is_err());
    }

    #[test]
    fn test_days_between() {
        let a = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let b = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
        assert_eq!(days_between(a, b), 366);
        assert_eq!(days_between(b, a), -366);
    }
}
