//! Line rendering.
//!
//! A log line is `<timestamp> [<TAG>]<padding> <message>\n`. The timestamp is
//! RFC 3339 with up to three fractional digits: milliseconds are truncated,
//! trailing zeros are trimmed, and a zero UTC offset prints as `Z`.

use std::fmt::{self, Write as _};

use chrono::{DateTime, Offset, TimeZone, Timelike};

use crate::level::Level;

/// Width the bracketed tag is padded to.
const TAG_WIDTH: usize = 5;

/// Render a timestamp, e.g. `2025-01-02T15:04:05.9-07:00`.
pub fn format_timestamp<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    let mut out = time.format("%Y-%m-%dT%H:%M:%S").to_string();

    // nanosecond() exceeds 10^9 during a leap second
    let millis = (time.nanosecond() % 1_000_000_000) / 1_000_000;
    if millis > 0 {
        let digits = format!("{:03}", millis);
        out.push('.');
        out.push_str(digits.trim_end_matches('0'));
    }

    let offset_secs = time.offset().fix().local_minus_utc();
    if offset_secs == 0 {
        out.push('Z');
    } else {
        let sign = if offset_secs < 0 { '-' } else { '+' };
        let abs = offset_secs.unsigned_abs();
        let _ = write!(out, "{}{:02}:{:02}", sign, abs / 3600, (abs % 3600) / 60);
    }

    out
}

/// Spaces needed after `[TAG]` to line up message bodies.
///
/// Tags longer than five characters get no padding.
pub fn tag_padding(tag: &str) -> usize {
    TAG_WIDTH.saturating_sub(tag.len())
}

/// Render a complete log line, trailing newline included.
pub fn format_line<Tz: TimeZone>(time: &DateTime<Tz>, level: Level, message: &str) -> String
where
    Tz::Offset: fmt::Display,
{
    let tag = level.tag();
    let mut line = String::with_capacity(40 + message.len());
    let _ = write!(
        line,
        "{} [{}]{:pad$} {}",
        format_timestamp(time),
        tag,
        "",
        message,
        pad = tag_padding(tag)
    );
    line.push('\n');
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, NaiveDate, Utc};

    fn at(offset_secs: i32, millis: u32) -> DateTime<FixedOffset> {
        let offset = FixedOffset::east_opt(offset_secs).unwrap();
        let naive = NaiveDate::from_ymd_opt(2025, 1, 2)
            .unwrap()
            .and_hms_milli_opt(15, 4, 5, millis)
            .unwrap();
        offset.from_local_datetime(&naive).unwrap()
    }

    #[test]
    fn test_timestamp_full_millis() {
        assert_eq!(
            format_timestamp(&at(-7 * 3600, 999)),
            "2025-01-02T15:04:05.999-07:00"
        );
    }

    #[test]
    fn test_timestamp_trims_trailing_zeros() {
        assert_eq!(
            format_timestamp(&at(-7 * 3600, 500)),
            "2025-01-02T15:04:05.5-07:00"
        );
        assert_eq!(
            format_timestamp(&at(-7 * 3600, 50)),
            "2025-01-02T15:04:05.05-07:00"
        );
        assert_eq!(
            format_timestamp(&at(-7 * 3600, 0)),
            "2025-01-02T15:04:05-07:00"
        );
    }

    #[test]
    fn test_timestamp_truncates_sub_millis() {
        let time = at(0, 0) + chrono::Duration::nanoseconds(1_999_999);
        assert_eq!(format_timestamp(&time), "2025-01-02T15:04:05.001Z");
    }

    #[test]
    fn test_timestamp_utc_is_z() {
        let time = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(format_timestamp(&time), "2024-12-31T23:59:59Z");
    }

    #[test]
    fn test_timestamp_positive_offset_with_minutes() {
        assert_eq!(
            format_timestamp(&at(5 * 3600 + 30 * 60, 120)),
            "2025-01-02T15:04:05.12+05:30"
        );
    }

    #[test]
    fn test_timestamp_pads_date_fields() {
        let offset = FixedOffset::west_opt(3 * 3600).unwrap();
        let time = offset.with_ymd_and_hms(987, 3, 4, 5, 6, 7).unwrap();
        assert_eq!(format_timestamp(&time), "0987-03-04T05:06:07-03:00");
    }

    #[test]
    fn test_tag_padding() {
        assert_eq!(tag_padding("ERROR"), 0);
        assert_eq!(tag_padding("WARN"), 1);
        assert_eq!(tag_padding("INFO"), 1);
        assert_eq!(tag_padding("DEBUG"), 0);
        assert_eq!(tag_padding("TRACE"), 0);
        assert_eq!(tag_padding("CRITICAL"), 0);
    }

    #[test]
    fn test_format_line() {
        let time = at(0, 250);
        assert_eq!(
            format_line(&time, Level::Warn, "disk almost full"),
            "2025-01-02T15:04:05.25Z [WARN]  disk almost full\n"
        );
        assert_eq!(
            format_line(&time, Level::Error, "boom"),
            "2025-01-02T15:04:05.25Z [ERROR] boom\n"
        );
    }

    #[test]
    fn test_format_line_keeps_message_verbatim() {
        let line = format_line(&at(0, 0), Level::Info, "");
        assert_eq!(line, "2025-01-02T15:04:05Z [INFO]  \n");
    }
}
