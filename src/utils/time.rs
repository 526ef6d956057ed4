//! Time utilities: timestamp parsing/formatting and HH:MM:SS clocktime
//! conversions shared by the log parser and the log writer.

use crate::errors::{AppError, AppResult};
use chrono::{Local, NaiveDateTime, NaiveTime};

/// Timestamp format used everywhere in the log grammar: `01/02/2024 09:00AM`.
pub const TIMESTAMP_FORMAT: &str = "%m/%d/%Y %I:%M%p";

/// Current local time at minute-level use. Always called at the call site so
/// every operation gets a fresh "now", never a stored default.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

pub fn format_timestamp(t: NaiveDateTime) -> String {
    t.format(TIMESTAMP_FORMAT).to_string()
}

pub fn parse_timestamp(s: &str) -> AppResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s.trim(), TIMESTAMP_FORMAT)
        .map_err(|_| AppError::InvalidTimestamp(s.trim().to_string()))
}

/// Extract the timestamp embedded in a marker line, i.e. the text between
/// the first `-` and the following `]`:
///
/// `===============[Clock In - 01/02/2024 09:00AM]===============`
pub fn parse_marker_timestamp(line: &str) -> AppResult<NaiveDateTime> {
    let (_, rest) = line
        .split_once('-')
        .ok_or_else(|| AppError::MalformedMarker(line.to_string()))?;
    let (stamp, _) = rest
        .split_once(']')
        .ok_or_else(|| AppError::MalformedMarker(line.to_string()))?;
    parse_timestamp(stamp)
}

/// Render a seconds count as zero-padded `HH:MM:SS`. Hours are not capped at
/// 24: durations of 100h and more simply widen the hour field.
pub fn format_clocktime(seconds: i64) -> String {
    let sign = if seconds < 0 { "-" } else { "" };
    let s = seconds.abs();
    format!("{}{:02}:{:02}:{:02}", sign, s / 3600, (s % 3600) / 60, s % 60)
}

/// Same as [`format_clocktime`], from an elapsed-time value.
pub fn elapsed_clocktime(elapsed: chrono::Duration) -> String {
    format_clocktime(elapsed.num_seconds())
}

/// Parse `HH:MM:SS` back into total seconds. Hours are read literally (not
/// modulo 24); minutes and seconds must stay below 60.
pub fn parse_clocktime(s: &str) -> AppResult<i64> {
    let text = s.trim();
    let parts: Vec<&str> = text.split(':').collect();
    if parts.len() != 3 {
        return Err(AppError::InvalidDuration(text.to_string()));
    }
    let field = |p: &str| -> AppResult<i64> {
        p.parse::<i64>()
            .map_err(|_| AppError::InvalidDuration(text.to_string()))
    };
    let (hours, minutes, seconds) = (field(parts[0])?, field(parts[1])?, field(parts[2])?);
    if hours < 0 || !(0..60).contains(&minutes) || !(0..60).contains(&seconds) {
        return Err(AppError::InvalidDuration(text.to_string()));
    }
    Ok(hours * 3600 + minutes * 60 + seconds)
}

/// Parse a bare `HH:MM` wall-clock time (used by `task --start`).
pub fn parse_wall_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dt(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
    }

    #[test]
    fn timestamp_formats_as_12_hour_clock() {
        assert_eq!(format_timestamp(dt(2024, 1, 2, 9, 0)), "01/02/2024 09:00AM");
        assert_eq!(format_timestamp(dt(2024, 1, 2, 17, 0)), "01/02/2024 05:00PM");
        assert_eq!(format_timestamp(dt(2024, 12, 31, 0, 5)), "12/31/2024 12:05AM");
    }

    #[test]
    fn timestamp_round_trips_at_minute_precision() {
        let t = dt(2025, 8, 6, 14, 37);
        assert_eq!(parse_timestamp(&format_timestamp(t)).unwrap(), t);
    }

    #[test]
    fn marker_timestamp_is_extracted_between_dash_and_bracket() {
        let line = "===============[Clock In - 01/02/2024 09:00AM]===============";
        assert_eq!(parse_marker_timestamp(line).unwrap(), dt(2024, 1, 2, 9, 0));
    }

    #[test]
    fn marker_without_separators_is_rejected() {
        assert!(matches!(
            parse_marker_timestamp("Clock In 01/02/2024 09:00AM"),
            Err(AppError::MalformedMarker(_))
        ));
        assert!(matches!(
            parse_marker_timestamp("[Clock In - 01/02/2024 09:00AM"),
            Err(AppError::MalformedMarker(_))
        ));
    }

    #[test]
    fn marker_with_bad_timestamp_is_a_format_error() {
        let line = "===============[Clock In - 13/45/2024 99:00XX]===============";
        assert!(parse_marker_timestamp(line).unwrap_err().is_format());
    }

    #[test]
    fn clocktime_round_trips() {
        for s in [0i64, 59, 3600, 86399, 90000, 359999] {
            assert_eq!(parse_clocktime(&format_clocktime(s)).unwrap(), s);
        }
    }

    #[test]
    fn clocktime_hours_widen_past_two_digits() {
        assert_eq!(format_clocktime(359999), "99:59:59");
        assert_eq!(format_clocktime(360000), "100:00:00");
        assert_eq!(parse_clocktime("100:00:00").unwrap(), 360000);
    }

    #[test]
    fn clocktime_rejects_malformed_text() {
        for bad in ["", "1:2", "aa:bb:cc", "01:60:00", "01:00:61", "1:2:3:4"] {
            assert!(matches!(
                parse_clocktime(bad),
                Err(AppError::InvalidDuration(_))
            ));
        }
    }

    #[test]
    fn eight_hour_day_formats_as_expected() {
        let elapsed = dt(2024, 1, 2, 17, 0) - dt(2024, 1, 2, 9, 0);
        assert_eq!(elapsed.num_seconds(), 28800);
        assert_eq!(elapsed_clocktime(elapsed), "08:00:00");
    }
}
