//! Timestamp utilities

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

/// Format used by the show form and the listings
pub const SHOW_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Formats accepted when parsing a submitted start time
const ACCEPTED_FORMATS: [&str; 3] = [SHOW_TIME_FORMAT, "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Get current UTC timestamp
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Parse a form timestamp as UTC.
///
/// Accepts `YYYY-MM-DD HH:MM:SS` and the two shapes browsers send from
/// `datetime-local` inputs.
pub fn parse_show_time(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();
    ACCEPTED_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// Format a start time for form fields
pub fn format_show_time(time: &DateTime<Utc>) -> String {
    time.format(SHOW_TIME_FORMAT).to_string()
}

/// Human-readable start time for listings, e.g. "Fri 05, 21, 2027 9:30PM"
pub fn display_show_time(time: &DateTime<Utc>) -> String {
    time.format("%a %m, %d, %Y %-I:%M%p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_now_returns_recent_timestamp() {
        let timestamp = now();
        assert!(timestamp.timestamp() > 946_684_800); // 2000-01-01 00:00:00 UTC
        assert!(timestamp.timestamp() < 4_102_444_800); // 2100-01-01 00:00:00 UTC
    }

    #[test]
    fn test_parse_form_format() {
        let parsed = parse_show_time("2035-04-01 20:00:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2035, 4, 1, 20, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_datetime_local_formats() {
        let minutes = parse_show_time("2035-04-01T20:15").unwrap();
        assert_eq!(minutes.minute(), 15);
        assert_eq!(minutes.second(), 0);

        let seconds = parse_show_time(" 2035-04-01T20:15:30 ").unwrap();
        assert_eq!(seconds.second(), 30);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_show_time("").is_none());
        assert!(parse_show_time("tomorrow night").is_none());
        assert!(parse_show_time("2035-13-01 20:00:00").is_none());
    }

    #[test]
    fn test_format_round_trips_through_parse() {
        let time = Utc.with_ymd_and_hms(2019, 5, 21, 21, 30, 0).unwrap();
        assert_eq!(format_show_time(&time), "2019-05-21 21:30:00");
        assert_eq!(parse_show_time(&format_show_time(&time)), Some(time));
    }

    #[test]
    fn test_display_show_time() {
        let time = Utc.with_ymd_and_hms(2019, 5, 21, 21, 30, 0).unwrap();
        assert_eq!(display_show_time(&time), "Tue 05, 21, 2019 9:30PM");
    }
}
