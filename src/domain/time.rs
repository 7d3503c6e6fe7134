//! Directory timestamp conversions
//!
//! Active Directory stores two timestamp encodings: Windows FILETIME integers
//! (`lastLogonTimestamp`, `pwdLastSet`, ...) and LDAP GeneralizedTime strings
//! (`whenCreated`, `whenChanged`).

use chrono::{DateTime, NaiveDateTime, Utc};

/// Seconds between 1601-01-01 (FILETIME epoch) and 1970-01-01
const FILETIME_EPOCH_OFFSET_SECS: i64 = 11_644_473_600;

/// FILETIME ticks (100ns) per second
const TICKS_PER_SECOND: i64 = 10_000_000;

/// Converts a FILETIME value to a UTC timestamp
///
/// Returns `None` for `0` and `i64::MAX`, which AD uses for "never".
///
/// # Examples
///
/// ```
/// use ou_export::domain::time::filetime_to_datetime;
///
/// let dt = filetime_to_datetime(116_444_736_000_000_000).unwrap();
/// assert_eq!(dt.timestamp(), 0);
/// assert!(filetime_to_datetime(0).is_none());
/// ```
pub fn filetime_to_datetime(filetime: i64) -> Option<DateTime<Utc>> {
    if filetime <= 0 || filetime == i64::MAX {
        return None;
    }
    let secs = filetime / TICKS_PER_SECOND - FILETIME_EPOCH_OFFSET_SECS;
    let nanos = (filetime % TICKS_PER_SECOND) * 100;
    DateTime::from_timestamp(secs, nanos as u32)
}

/// Converts a UTC timestamp to FILETIME ticks
pub fn datetime_to_filetime(datetime: DateTime<Utc>) -> i64 {
    (datetime.timestamp() + FILETIME_EPOCH_OFFSET_SECS) * TICKS_PER_SECOND
        + i64::from(datetime.timestamp_subsec_nanos()) / 100
}

/// Parses an LDAP GeneralizedTime value such as `20240115120000.0Z`
pub fn parse_generalized_time(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    let digits = value.get(..14)?;
    NaiveDateTime::parse_from_str(digits, "%Y%m%d%H%M%S")
        .ok()
        .map(|naive| naive.and_utc())
}

/// Parses a timestamp in either RFC 3339 or GeneralizedTime form
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| parse_generalized_time(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_filetime_round_trip_known_instant() {
        // 2024-01-15T12:00:00Z
        let dt = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
        let ft = datetime_to_filetime(dt);
        assert_eq!(ft, 133_497_936_000_000_000);
        assert_eq!(filetime_to_datetime(ft), Some(dt));
    }

    #[test]
    fn test_filetime_never_values() {
        assert!(filetime_to_datetime(0).is_none());
        assert!(filetime_to_datetime(-1).is_none());
        assert!(filetime_to_datetime(i64::MAX).is_none());
    }

    #[test]
    fn test_parse_generalized_time() {
        let dt = parse_generalized_time("20240115120000.0Z").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap());
        assert!(parse_generalized_time("2024").is_none());
        assert!(parse_generalized_time("not-a-time-value").is_none());
    }

    #[test]
    fn test_parse_timestamp_accepts_both_forms() {
        let expected = Utc.with_ymd_and_hms(2023, 6, 1, 8, 30, 0).unwrap();
        assert_eq!(parse_timestamp("2023-06-01T08:30:00Z"), Some(expected));
        assert_eq!(parse_timestamp("2023-06-01T10:30:00+02:00"), Some(expected));
        assert_eq!(parse_timestamp("20230601083000.0Z"), Some(expected));
        assert_eq!(parse_timestamp("yesterday"), None);
    }
}
