//! Timeline entry type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::{
    StateSnapshot, WeeklyActivity, DEFAULT_AFFIRMATION, DEFAULT_CATEGORY, DEFAULT_MASCOT_NAME,
    DEFAULT_STREAK_DAYS,
};

/// One point-in-time display unit.
///
/// Within one generation cycle only `timestamp` and `affirmation` differ
/// between entries; the rest is copied from the snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub timestamp: DateTime<Utc>,
    pub affirmation: String,
    pub category: String,
    pub streak_days: u32,
    pub mascot_name: String,
    pub mascot_asset: String,
    pub monthly_consistency: f64,
    pub weekly_activity: WeeklyActivity,
}

impl TimelineEntry {
    /// Entry for `timestamp` showing `affirmation`, with snapshot fields copied through.
    pub fn from_snapshot(
        snapshot: &StateSnapshot,
        timestamp: DateTime<Utc>,
        affirmation: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            affirmation: affirmation.into(),
            category: snapshot.category.clone(),
            streak_days: snapshot.streak_days,
            mascot_name: snapshot.mascot_name.clone(),
            mascot_asset: snapshot.mascot_asset.clone(),
            monthly_consistency: snapshot.monthly_consistency,
            weekly_activity: snapshot.weekly_activity,
        }
    }

    /// Sample entry for widget-gallery previews, before any app state exists.
    pub fn placeholder(timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            affirmation: DEFAULT_AFFIRMATION.to_string(),
            category: DEFAULT_CATEGORY.to_string(),
            streak_days: DEFAULT_STREAK_DAYS,
            mascot_name: DEFAULT_MASCOT_NAME.to_string(),
            mascot_asset: String::new(),
            monthly_consistency: 0.5,
            weekly_activity: WeeklyActivity::from_flags("1011101"),
        }
    }

    /// Consistency as a whole percentage, rounded down.
    pub fn consistency_percent(&self) -> u8 {
        (self.monthly_consistency.clamp(0.0, 1.0) * 100.0).floor() as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_snapshot_copies_state() {
        let snapshot = StateSnapshot {
            category: "Calm".into(),
            streak_days: 9,
            mascot_name: "Sprout".into(),
            mascot_asset: "sprout.png".into(),
            monthly_consistency: 0.4,
            weekly_activity: WeeklyActivity::from_flags("1100000"),
            ..StateSnapshot::default()
        };
        let now = Utc::now();
        let entry = TimelineEntry::from_snapshot(&snapshot, now, "Hello");

        assert_eq!(entry.timestamp, now);
        assert_eq!(entry.affirmation, "Hello");
        assert_eq!(entry.category, "Calm");
        assert_eq!(entry.streak_days, 9);
        assert_eq!(entry.mascot_name, "Sprout");
        assert_eq!(entry.mascot_asset, "sprout.png");
        assert_eq!(entry.weekly_activity.to_string(), "1100000");
    }

    #[test]
    fn placeholder_matches_gallery_preview() {
        let entry = TimelineEntry::placeholder(Utc::now());
        assert_eq!(entry.affirmation, DEFAULT_AFFIRMATION);
        assert_eq!(entry.monthly_consistency, 0.5);
        assert_eq!(entry.weekly_activity.to_string(), "1011101");
    }

    #[test]
    fn consistency_percent_truncates() {
        let mut entry = TimelineEntry::placeholder(Utc::now());
        entry.monthly_consistency = 0.999;
        assert_eq!(entry.consistency_percent(), 99);
        entry.monthly_consistency = 1.0;
        assert_eq!(entry.consistency_percent(), 100);
        entry.monthly_consistency = 0.0;
        assert_eq!(entry.consistency_percent(), 0);
    }
}
