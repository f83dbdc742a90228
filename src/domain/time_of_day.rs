//! Time-of-day parsing and formatting
//!
//! Scheduled times carry hours and minutes only; seconds are always zero.

use chrono::{NaiveTime, Timelike};

const ACCEPTED_FORMATS: [&str; 3] = ["%H:%M", "%I:%M %p", "%I:%M%p"];

/// The time pre-selected when scheduling (09:00)
pub fn default_time() -> NaiveTime {
    NaiveTime::from_hms_opt(9, 0, 0).expect("09:00 is a valid time")
}

/// Parse `HH:MM` (24-hour) or `HH:MM AM/PM`
pub fn parse_time(input: &str) -> Result<NaiveTime, String> {
    let normalized = input.trim().to_uppercase();

    ACCEPTED_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(&normalized, format).ok())
        .map(|time| time.with_second(0).unwrap_or(time))
        .ok_or_else(|| {
            format!(
                "Invalid time: '{}'. Use HH:MM (e.g., 18:30) or HH:MM AM/PM (e.g., 06:30 PM)",
                input
            )
        })
}

/// 12-hour clock with AM/PM suffix, e.g. `02:30 PM`
pub fn format_12h(time: NaiveTime) -> String {
    time.format("%I:%M %p").to_string()
}

/// 24-hour clock, e.g. `14:30`
pub fn format_24h(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// Serde adapter storing a time as `HH:MM`
pub mod hhmm {
    use super::{format_24h, parse_time};
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format_24h(*time))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_time(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hm(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn test_default_time_is_nine() {
        assert_eq!(default_time(), hm(9, 0));
    }

    #[test]
    fn test_parse_24h() {
        assert_eq!(parse_time("14:30").unwrap(), hm(14, 30));
        assert_eq!(parse_time("09:00").unwrap(), hm(9, 0));
        assert_eq!(parse_time("9:05").unwrap(), hm(9, 5));
        assert_eq!(parse_time(" 00:00 ").unwrap(), hm(0, 0));
    }

    #[test]
    fn test_parse_12h() {
        assert_eq!(parse_time("06:30 PM").unwrap(), hm(18, 30));
        assert_eq!(parse_time("6:30pm").unwrap(), hm(18, 30));
        assert_eq!(parse_time("12:00 AM").unwrap(), hm(0, 0));
        assert_eq!(parse_time("12:15 pm").unwrap(), hm(12, 15));
    }

    #[test]
    fn test_parse_invalid() {
        assert!(parse_time("").is_err());
        assert!(parse_time("25:00").is_err());
        assert!(parse_time("noon").is_err());

        let err = parse_time("later").unwrap_err();
        assert!(err.contains("Invalid time"));
        assert!(err.contains("HH:MM"));
    }

    #[test]
    fn test_format_12h() {
        assert_eq!(format_12h(hm(14, 30)), "02:30 PM");
        assert_eq!(format_12h(hm(9, 0)), "09:00 AM");
        assert_eq!(format_12h(hm(0, 5)), "12:05 AM");
    }

    #[test]
    fn test_format_24h() {
        assert_eq!(format_24h(hm(18, 0)), "18:00");
        assert_eq!(format_24h(hm(7, 45)), "07:45");
    }
}
