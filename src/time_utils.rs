// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time formatting.

use crate::models::BackendTimestamp;
use chrono::{DateTime, Local, SecondsFormat, TimeZone, Utc};

/// Display pattern: `Jan 1, 2022 at 12:00 PM`.
const DISPLAY_FORMAT: &str = "%b %-d, %Y at %-I:%M %p";

/// Format a UTC timestamp as RFC3339 using a `Z` suffix.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Format a backend timestamp for display in the viewer's local time zone.
///
/// Absent or unrepresentable timestamps format as the empty string.
pub fn format_timestamp(ts: Option<&BackendTimestamp>) -> String {
    format_timestamp_in(ts, &Local)
}

/// Format a backend timestamp for display in the given time zone.
pub fn format_timestamp_in<Tz>(ts: Option<&BackendTimestamp>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    ts.and_then(BackendTimestamp::to_datetime)
        .map(|date| date.with_timezone(tz).format(DISPLAY_FORMAT).to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn test_none_formats_empty() {
        assert_eq!(format_timestamp(None), "");
    }

    #[test]
    fn test_seconds_in_utc() {
        let ts = BackendTimestamp::Seconds {
            seconds: 1641038400,
        };
        assert_eq!(
            format_timestamp_in(Some(&ts), &Utc),
            "Jan 1, 2022 at 12:00 PM"
        );
    }

    #[test]
    fn test_midnight_is_twelve_am() {
        let ts = BackendTimestamp::Seconds {
            seconds: 1640995200,
        };
        assert_eq!(
            format_timestamp_in(Some(&ts), &Utc),
            "Jan 1, 2022 at 12:00 AM"
        );
    }

    #[test]
    fn test_date_in_offset_zone() {
        let date = Utc.with_ymd_and_hms(2022, 1, 1, 12, 5, 0).unwrap();
        let pacific = FixedOffset::west_opt(8 * 3600).unwrap();
        assert_eq!(
            format_timestamp_in(Some(&BackendTimestamp::Date(date)), &pacific),
            "Jan 1, 2022 at 4:05 AM"
        );
    }

    #[test]
    fn test_rfc3339_z_suffix() {
        let date = Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(format_utc_rfc3339(date), "2022-01-01T00:00:00Z");
    }
}
