use chrono::NaiveDate;

use crate::EngineError;

/// Wire format for every Monatis date.
pub const FORMAT_ISO: &str = "%Y-%m-%d";

/// Strict `YYYY-MM-DD` parsing; anything else is a validation error.
pub fn parse_date(input: &str) -> Result<NaiveDate, EngineError> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, FORMAT_ISO)
        .map_err(|_| EngineError::DateInvalide(trimmed.to_string()))
}

/// Optional form field: blank counts as absent, a non-blank value must be
/// a valid calendar date.
pub fn parse_date_opt(input: &str) -> Result<Option<NaiveDate>, EngineError> {
    if input.trim().is_empty() {
        return Ok(None);
    }
    parse_date(input).map(Some)
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(FORMAT_ISO).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_strict_iso() {
        assert_eq!(
            parse_date("2025-03-01").unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
        );
        assert!(parse_date("2025-02-30").is_err());
        assert!(parse_date("01/03/2025").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn blanc_est_absent() {
        assert_eq!(parse_date_opt("  ").unwrap(), None);
        assert!(parse_date_opt("pas-une-date").is_err());
    }

    #[test]
    fn format_round_trip() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        assert_eq!(parse_date(&format_date(date)).unwrap(), date);
    }
}
