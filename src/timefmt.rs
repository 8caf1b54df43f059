use time::{OffsetDateTime, UtcOffset, format_description::FormatItem, macros::format_description};

const CLOCK_FORMAT: &[FormatItem<'static>] =
    format_description!("[hour repr:12 padding:zero]:[minute padding:zero] [period case:upper]");

const CALENDAR_FORMAT: &[FormatItem<'static>] =
    format_description!("[month padding:none]/[day padding:none]/[year]");

pub fn current_time() -> OffsetDateTime {
    OffsetDateTime::now_utc()
}

/// Shifts a timestamp into the local offset when the platform can report one.
pub fn to_local(timestamp: OffsetDateTime) -> OffsetDateTime {
    match UtcOffset::current_local_offset() {
        Ok(offset) => timestamp.to_offset(offset),
        Err(_) => timestamp,
    }
}

pub fn format_clock_time(timestamp: OffsetDateTime) -> String {
    timestamp
        .format(CLOCK_FORMAT)
        .unwrap_or_else(|_| timestamp.time().to_string())
}

pub fn format_calendar_date(timestamp: OffsetDateTime) -> String {
    timestamp
        .format(CALENDAR_FORMAT)
        .unwrap_or_else(|_| timestamp.date().to_string())
}

/// Coarse age label used by the history sidebar.
pub fn format_relative_time(timestamp: OffsetDateTime, now: OffsetDateTime) -> String {
    let hours = (now - timestamp).as_seconds_f64() / 3600.0;
    let days = hours / 24.0;

    if hours < 1.0 {
        "Just now".to_string()
    } else if hours < 24.0 {
        format!("{}h ago", hours.floor() as i64)
    } else if days < 7.0 {
        format!("{}d ago", days.floor() as i64)
    } else {
        format_calendar_date(timestamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::Duration;
    use time::macros::datetime;

    const NOW: OffsetDateTime = datetime!(2024-01-25 12:00:00 UTC);

    #[test]
    fn test_thirty_minutes_is_just_now() {
        assert_eq!(format_relative_time(NOW - Duration::minutes(30), NOW), "Just now");
    }

    #[test]
    fn test_hours_ago() {
        assert_eq!(format_relative_time(NOW - Duration::hours(5), NOW), "5h ago");
        assert_eq!(format_relative_time(NOW - Duration::minutes(60), NOW), "1h ago");
        assert_eq!(
            format_relative_time(NOW - Duration::minutes(23 * 60 + 59), NOW),
            "23h ago"
        );
    }

    #[test]
    fn test_days_ago() {
        assert_eq!(format_relative_time(NOW - Duration::days(3), NOW), "3d ago");
        assert_eq!(format_relative_time(NOW - Duration::hours(24), NOW), "1d ago");
        assert_eq!(format_relative_time(NOW - Duration::hours(167), NOW), "6d ago");
    }

    #[test]
    fn test_old_entries_show_calendar_date() {
        assert_eq!(format_relative_time(NOW - Duration::days(10), NOW), "1/15/2024");
        assert_eq!(format_relative_time(NOW - Duration::days(7), NOW), "1/18/2024");
    }

    #[test]
    fn test_future_timestamp_is_just_now() {
        assert_eq!(format_relative_time(NOW + Duration::hours(3), NOW), "Just now");
    }

    #[test]
    fn test_clock_time() {
        assert_eq!(format_clock_time(datetime!(2024-01-15 09:05:00 UTC)), "09:05 AM");
        assert_eq!(format_clock_time(datetime!(2024-01-15 22:41:00 UTC)), "10:41 PM");
    }
}
