use chrono::{DateTime, Duration, Utc};

/// Recent search only reaches back this far.
pub const RECENCY_WINDOW_DAYS: i64 = 7;

/// The API rejects an `end_time` closer than 10 seconds to the request.
const END_LAG_SECS: i64 = 10;

/// Keeps `start_time` inside the 7-day limit once the request is in flight.
const START_SLACK_SECS: i64 = 60;

/// Time range a search request is restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecencyWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl RecencyWindow {
    /// The fixed 7-day window ending at `now`.
    pub fn ending_at(now: DateTime<Utc>) -> Self {
        Self {
            start: now - Duration::days(RECENCY_WINDOW_DAYS) + Duration::seconds(START_SLACK_SECS),
            end: now - Duration::seconds(END_LAG_SECS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn window_ends_just_before_now_and_starts_a_week_back() {
        let now = Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap();
        let window = RecencyWindow::ending_at(now);

        assert_eq!(window.end, Utc.with_ymd_and_hms(2026, 10, 16, 11, 59, 50).unwrap());
        assert_eq!(window.start, Utc.with_ymd_and_hms(2026, 10, 9, 12, 1, 0).unwrap());
        assert!(window.start < window.end);
    }

    #[test]
    fn span_is_just_under_seven_days() {
        let window = RecencyWindow::ending_at(Utc::now());
        let span = window.end - window.start;
        assert!(span < Duration::days(7));
        assert!(span > Duration::days(7) - Duration::minutes(2));
    }
}
