//! Date helpers shared by the form and the date picker.

use chrono::NaiveDate;

/// Format a NaiveDate as "YYYY-MM-DD"
pub fn format_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse a date string in "YYYY-MM-DD" format
pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(s, "%Y-%m-%d")?)
}

/// Parse the value of an HTML `<input type="date">`.
///
/// Browsers report a cleared input as an empty string, which maps to `None`.
pub fn parse_input_date(s: &str) -> anyhow::Result<Option<NaiveDate>> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    parse_date(trimmed).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(format_date(&date), "2024-01-05");
    }

    #[test]
    fn test_parse_date() {
        let date = parse_date("2024-02-29").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert!(parse_date("2023-02-29").is_err());
        assert!(parse_date("20240101").is_err());
    }

    #[test]
    fn test_parse_input_date_empty_is_unset() {
        assert_eq!(parse_input_date("").unwrap(), None);
        assert_eq!(parse_input_date("   ").unwrap(), None);
    }

    #[test]
    fn test_parse_input_date_value() {
        let parsed = parse_input_date("2024-01-31").unwrap();
        assert_eq!(parsed, NaiveDate::from_ymd_opt(2024, 1, 31));
    }

    #[test]
    fn test_parse_input_date_invalid() {
        assert!(parse_input_date("2024-13-01").is_err());
        assert!(parse_input_date("yesterday").is_err());
    }
}
