//! HTTP-date parsing and formatting module
//!
//! Strict IMF-fixdate handling per RFC 7231 §7.1.1.1, e.g.
//! `Sun, 06 Nov 1994 08:49:37 GMT`. All timestamps are UTC-normalized.

use chrono::{DateTime, NaiveDateTime, Utc};

/// IMF-fixdate layout; the only format accepted and produced here
const IMF_FIXDATE: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Parse an HTTP-date header value into a UTC timestamp
///
/// Returns `None` for anything that is not a well-formed IMF-fixdate
/// (including the obsolete RFC 850 and asctime formats). Per RFC 7232 a
/// conditional header carrying an unparsable date must be ignored entirely,
/// so malformed input is not an error.
///
/// # Arguments
/// * `value` - Raw header value, e.g. `Sun, 06 Nov 1994 08:49:37 GMT`
pub fn parse_http_date(value: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(value.trim(), IMF_FIXDATE)
        .ok()
        .map(|naive| naive.and_utc())
}

/// Format a UTC timestamp as an IMF-fixdate header value
///
/// Suitable for `Last-Modified` and `Date` response headers.
pub fn format_http_date(date: DateTime<Utc>) -> String {
    date.format(IMF_FIXDATE).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_imf_fixdate() {
        let parsed = parse_http_date("Sun, 06 Nov 1994 08:49:37 GMT").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(1994, 11, 6, 8, 49, 37).unwrap());
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert!(parse_http_date(" Sun, 06 Nov 1994 08:49:37 GMT ").is_some());
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(parse_http_date("").is_none());
        assert!(parse_http_date("not a date").is_none());
        assert!(parse_http_date("1994-11-06T08:49:37Z").is_none());
        // RFC 850 format is not accepted
        assert!(parse_http_date("Sunday, 06-Nov-94 08:49:37 GMT").is_none());
    }

    #[test]
    fn test_parse_rejects_wrong_weekday() {
        // 1994-11-06 was a Sunday
        assert!(parse_http_date("Mon, 06 Nov 1994 08:49:37 GMT").is_none());
    }

    #[test]
    fn test_format_round_trip() {
        let date = Utc.with_ymd_and_hms(1994, 11, 6, 8, 49, 37).unwrap();
        let formatted = format_http_date(date);
        assert_eq!(formatted, "Sun, 06 Nov 1994 08:49:37 GMT");
        assert_eq!(parse_http_date(&formatted), Some(date));
    }
}
