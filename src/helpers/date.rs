//! Date helper functions

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::cmp::Ordering;

/// Parse an article date in the formats found in `article.json` records
///
/// Offsets are normalized to UTC so dates from different zones compare
/// on a single timeline.
pub fn parse_date(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }

    let datetime_formats = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M:%S",
    ];
    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }

    None
}

/// Order two date strings newest first; unparseable dates sort last
pub fn newest_first(a: &str, b: &str) -> Ordering {
    // `None < Some(_)`, so reversing puts missing dates at the end
    parse_date(b).cmp(&parse_date(a))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_formats() {
        let day = NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(parse_date("2024-01-15"), Some(day));
        assert_eq!(parse_date("2024/01/15"), Some(day));
        assert_eq!(parse_date(" 2024-01-15T00:00:00Z "), Some(day));
        assert_eq!(parse_date("2024-01-15T02:00:00+02:00"), Some(day));
        assert_eq!(
            parse_date("2024-01-15 10:30:00"),
            day.checked_add_signed(chrono::Duration::minutes(630))
        );
    }

    #[test]
    fn test_parse_date_invalid() {
        assert_eq!(parse_date("soon"), None);
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("2024-13-01"), None);
    }

    #[test]
    fn test_newest_first() {
        assert_eq!(newest_first("2024-06-01", "2024-01-01"), Ordering::Less);
        assert_eq!(newest_first("2024-01-01", "2024-06-01"), Ordering::Greater);
        assert_eq!(newest_first("2024-01-01", "2024-01-01"), Ordering::Equal);
        assert_eq!(newest_first("garbage", "1970-01-01"), Ordering::Greater);
        assert_eq!(newest_first("garbage", "nope"), Ordering::Equal);
    }
}
