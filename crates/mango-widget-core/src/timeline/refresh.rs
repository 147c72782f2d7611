//! Refresh scheduling: which entry is visible now and when to rebuild.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::entry::TimelineEntry;

/// Advisory instruction handed to the widget host.
///
/// The host OS owns the real refresh cadence and may coalesce or delay
/// reloads; `refresh_at` is the latest instant the chain should re-run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RefreshInstruction {
    pub visible_now: TimelineEntry,
    pub refresh_at: DateTime<Utc>,
}

/// Pick the entry visible at `now` from time-ordered `entries`.
///
/// The visible entry is the latest one whose timestamp is not after `now`;
/// before the first timestamp the first entry is shown. Returns `None` only
/// for an empty slice.
pub fn next_refresh(
    entries: &[TimelineEntry],
    next_refresh_at: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Option<RefreshInstruction> {
    let started = entries.partition_point(|e| e.timestamp <= now);
    let visible_now = entries.get(started.saturating_sub(1))?.clone();

    Some(RefreshInstruction {
        visible_now,
        refresh_at: next_refresh_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StateSnapshot;
    use crate::timeline::TimelineBuilder;
    use chrono::{Duration, TimeZone};

    fn timeline_at(now: DateTime<Utc>) -> crate::timeline::Timeline {
        let snapshot = StateSnapshot {
            affirmations: vec!["first".into(), "second".into(), "third".into()],
            ..StateSnapshot::default()
        };
        TimelineBuilder::new().build(&snapshot, now)
    }

    #[test]
    fn empty_entries_have_no_instruction() {
        let now = Utc::now();
        assert!(next_refresh(&[], now, now).is_none());
    }

    #[test]
    fn before_first_entry_shows_first() {
        let start = Utc.with_ymd_and_hms(2026, 1, 1, 9, 0, 0).unwrap();
        let timeline = timeline_at(start);
        let instruction = timeline.refresh_instruction(start - Duration::minutes(5));
        assert_eq!(instruction.visible_now.affirmation, "first");
    }

    #[test]
    fn mid_window_shows_latest_started_entry() {
        let start = Utc.with_ymd_and_hms(2026, 1, 1, 9, 0, 0).unwrap();
        let timeline = timeline_at(start);

        let at = |minutes| timeline.refresh_instruction(start + Duration::minutes(minutes));
        assert_eq!(at(0).visible_now.affirmation, "first");
        assert_eq!(at(59).visible_now.affirmation, "first");
        assert_eq!(at(60).visible_now.affirmation, "second");
        assert_eq!(at(150).visible_now.affirmation, "third");
        assert_eq!(at(600).visible_now.affirmation, "third");
    }

    #[test]
    fn refresh_at_comes_from_builder() {
        let start = Utc.with_ymd_and_hms(2026, 1, 1, 9, 0, 0).unwrap();
        let timeline = timeline_at(start);
        let instruction = timeline.refresh_instruction(start + Duration::hours(1));
        assert_eq!(instruction.refresh_at, start + Duration::hours(12));
        assert_eq!(instruction.refresh_at, timeline.next_refresh_at());
    }
}
