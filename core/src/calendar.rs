//! Calendar-day handling.
//!
//! All date comparisons in the engine happen at day granularity.
//! Values arriving with a time-of-day (ISO date-time strings from the
//! surrounding application) are reduced to their calendar day on the way in,
//! so nothing downstream ever compares a time component.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

pub const DAY_FORMAT: &str = "%Y-%m-%d";

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const TIME_FORMATS: &[&str] = &["%H:%M:%S%.f", "%H:%M"];

/// Parse a calendar day from a plain date, a naive date-time or an
/// RFC 3339 timestamp. Any time-of-day is discarded.
pub fn parse_day(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(day) = NaiveDate::parse_from_str(raw, DAY_FORMAT) {
        return Some(day);
    }
    for format in DATE_TIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt.date());
        }
    }
    DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive())
}

/// Parse a wall-clock time such as `09:00` or `17:30:00`.
pub fn parse_time(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim();
    TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(raw, format).ok())
}

/// Serde adapter for a required calendar day.
pub mod day {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(day: &NaiveDate, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(&day.format(super::DAY_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(d)?;
        super::parse_day(&raw)
            .ok_or_else(|| de::Error::custom(format!("invalid calendar day: {raw}")))
    }
}

/// Serde adapter for a calendar day that may be absent or null.
pub mod optional_day {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(day: &Option<NaiveDate>, s: S) -> Result<S::Ok, S::Error> {
        match day {
            Some(day) => s.collect_str(&day.format(super::DAY_FORMAT)),
            None      => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveDate>, D::Error> {
        match Option::<String>::deserialize(d)? {
            None => Ok(None),
            Some(raw) if raw.trim().is_empty() => Ok(None),
            Some(raw) => super::parse_day(&raw)
                .map(Some)
                .ok_or_else(|| de::Error::custom(format!("invalid calendar day: {raw}"))),
        }
    }
}

/// Serde adapter for an optional wall-clock time.
pub mod optional_time {
    use chrono::NaiveTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &Option<NaiveTime>, s: S) -> Result<S::Ok, S::Error> {
        match time {
            Some(time) => s.collect_str(&time.format("%H:%M")),
            None       => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveTime>, D::Error> {
        match Option::<String>::deserialize(d)? {
            None => Ok(None),
            Some(raw) => super::parse_time(&raw)
                .map(Some)
                .ok_or_else(|| de::Error::custom(format!("invalid time of day: {raw}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn plain_dates_parse() {
        assert_eq!(parse_day("2024-06-10"), Some(d(2024, 6, 10)));
        assert_eq!(parse_day(" 2024-06-10 "), Some(d(2024, 6, 10)));
    }

    #[test]
    fn time_of_day_is_discarded() {
        assert_eq!(parse_day("2024-06-10T23:59:59"), Some(d(2024, 6, 10)));
        assert_eq!(parse_day("2024-06-10T08:00"), Some(d(2024, 6, 10)));
        assert_eq!(parse_day("2024-06-10 07:15:00.250"), Some(d(2024, 6, 10)));
        assert_eq!(parse_day("2024-06-10T22:00:00+02:00"), Some(d(2024, 6, 10)));
    }

    #[test]
    fn garbage_is_rejected() {
        assert_eq!(parse_day("next tuesday"), None);
        assert_eq!(parse_day("2024-13-01"), None);
        assert_eq!(parse_time("25:00"), None);
    }

    #[test]
    fn short_and_long_times_parse() {
        let nine = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
        assert_eq!(parse_time("09:00"), Some(nine));
        assert_eq!(parse_time("09:00:00"), Some(nine));
    }
}
