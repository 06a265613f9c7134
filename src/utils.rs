use chrono::{DateTime, Duration, FixedOffset, Offset, SecondsFormat, Utc};

use crate::config::{FOOTER_UTC_OFFSET_SECS, LOOKBACK_HOURS};

// Lookback window `[since, until]` ending at `now`
pub fn lookback_window(now: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
    (now - Duration::hours(LOOKBACK_HOURS), now)
}

// ISO-8601 form GitHub accepts for `since`/`until`
pub fn to_query_timestamp(time: DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Secs, true)
}

// Civil time in the fixed UTC+8 zone, whatever the host zone is
pub fn footer_timestamp(now: DateTime<Utc>) -> String {
    let offset = FixedOffset::east_opt(FOOTER_UTC_OFFSET_SECS).unwrap_or_else(|| Utc.fix());
    now.with_timezone(&offset).format("%Y-%m-%d %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn window_spans_one_day() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let (since, until) = lookback_window(now);
        assert_eq!(until, now);
        assert_eq!(since, Utc.with_ymd_and_hms(2024, 2, 29, 12, 0, 0).unwrap());
    }

    #[test]
    fn query_timestamp_uses_z_suffix() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 5).unwrap();
        assert_eq!(to_query_timestamp(now), "2024-03-01T12:30:05Z");
    }

    #[test]
    fn footer_is_shifted_to_utc_plus_8() {
        let now = Utc.with_ymd_and_hms(2024, 12, 31, 20, 15, 0).unwrap();
        assert_eq!(footer_timestamp(now), "2025-01-01 04:15:00");
    }
}
