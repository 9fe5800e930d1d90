//! Timestamp helpers for close approach data
//!
//! CAD timestamps arrive as `2020-Jan-01 00:00` (UTC, minute precision)
//! and are written back out as `2020-01-01 00:00`.

use chrono::NaiveDateTime;

/// Format used by the NASA close approach feed
pub const CAD_TIME_FORMAT: &str = "%Y-%b-%d %H:%M";

/// Format used for every written result
pub const OUTPUT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Parse a CAD calendar timestamp.
///
/// Returns `None` if the string is not in `YYYY-Mon-DD hh:mm` form.
pub fn cd_to_datetime(calendar_date: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(calendar_date.trim(), CAD_TIME_FORMAT).ok()
}

/// Render a timestamp in the output format (`YYYY-MM-DD hh:mm`).
pub fn datetime_to_str(dt: &NaiveDateTime) -> String {
    dt.format(OUTPUT_TIME_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_parse_cad_timestamp() {
        let dt = cd_to_datetime("2020-Jan-01 12:30").unwrap();
        let expected = NaiveDate::from_ymd_opt(2020, 1, 1)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap();
        assert_eq!(dt, expected);
    }

    #[test]
    fn test_parse_rejects_numeric_month() {
        assert!(cd_to_datetime("2020-01-01 12:30").is_none());
        assert!(cd_to_datetime("").is_none());
    }

    #[test]
    fn test_output_format() {
        let dt = cd_to_datetime("1900-Dec-31 23:59").unwrap();
        assert_eq!(datetime_to_str(&dt), "1900-12-31 23:59");
    }
}
