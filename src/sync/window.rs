//! The sliding time window a sync run operates in.

use chrono::{DateTime, Months, Utc};

use crate::event::EventRecord;

/// Time bounds for one run, computed once so every decision in the run
/// agrees on them.
#[derive(Debug, Clone, Copy)]
pub struct SyncWindow {
    pub now: DateTime<Utc>,
    pub horizon: DateTime<Utc>,
}

impl SyncWindow {
    /// Window reaching `months` ahead of the current instant. A horizon
    /// past the calendar's supported range saturates to the far future
    /// rather than overflowing.
    pub fn starting_now(months: u32) -> Self {
        let now = Utc::now();
        SyncWindow {
            now,
            horizon: now
                .checked_add_months(Months::new(months))
                .unwrap_or(DateTime::<Utc>::MAX_UTC),
        }
    }

    /// Whether a record belongs in the window: not over yet, and starting
    /// no later than the horizon.
    pub fn retains(&self, record: &EventRecord) -> bool {
        record.end >= self.now && record.start <= self.horizon
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::PENDING_ID;
    use chrono::{Duration, TimeZone};

    fn record_spanning(start: DateTime<Utc>, end: DateTime<Utc>) -> EventRecord {
        EventRecord {
            id: "rec-1".to_string(),
            provider_event_id: "prov-1".to_string(),
            name: "Window check".to_string(),
            description: None,
            start,
            end,
            location: None,
            editor_event_id: PENDING_ID.to_string(),
            recurring_event_id: None,
            recurrence_rule: None,
            master_editor_event_id: None,
            updated_at: start,
        }
    }

    #[test]
    fn test_window_boundaries() {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        let window = SyncWindow {
            now,
            horizon: now + Duration::days(180),
        };

        let current = record_spanning(now + Duration::days(1), now + Duration::days(1));
        assert!(window.retains(&current));

        let over = record_spanning(now - Duration::days(2), now - Duration::days(1));
        assert!(!window.retains(&over));

        let distant = record_spanning(now + Duration::days(181), now + Duration::days(182));
        assert!(!window.retains(&distant));

        // A running event (started, not yet ended) stays.
        let in_progress = record_spanning(now - Duration::hours(1), now + Duration::hours(1));
        assert!(window.retains(&in_progress));
    }

    #[test]
    fn test_oversized_window_saturates_the_horizon() {
        let window = SyncWindow::starting_now(u32::MAX);

        let distant_start = Utc::now() + Duration::days(365 * 100);
        let record = record_spanning(distant_start, distant_start + Duration::hours(1));
        assert!(window.retains(&record));
    }
}
