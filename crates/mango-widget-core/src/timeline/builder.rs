//! Hourly timeline construction.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use super::entry::TimelineEntry;
use super::refresh::{next_refresh, RefreshInstruction};
use crate::store::StateSnapshot;

/// Hours planned ahead when no horizon is configured.
pub const DEFAULT_HORIZON_HOURS: u32 = 12;

/// Entries for one generation cycle plus the advisory rebuild instant.
///
/// A timeline always holds at least one entry, ordered by strictly
/// increasing timestamp.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Timeline {
    entries: Vec<TimelineEntry>,
    next_refresh_at: DateTime<Utc>,
}

impl Timeline {
    pub fn entries(&self) -> &[TimelineEntry] {
        &self.entries
    }

    pub fn next_refresh_at(&self) -> DateTime<Utc> {
        self.next_refresh_at
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the timeline has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn first(&self) -> &TimelineEntry {
        &self.entries[0]
    }

    /// What the host should show at `now` and when it should rebuild.
    pub fn refresh_instruction(&self, now: DateTime<Utc>) -> RefreshInstruction {
        next_refresh(&self.entries, self.next_refresh_at, now).unwrap_or_else(|| {
            RefreshInstruction {
                visible_now: self.first().clone(),
                refresh_at: self.next_refresh_at,
            }
        })
    }

    pub fn into_entries(self) -> Vec<TimelineEntry> {
        self.entries
    }
}

/// Builds hourly timelines from a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineBuilder {
    horizon_hours: u32,
}

impl TimelineBuilder {
    /// Builder with the default 12 hour horizon.
    pub fn new() -> Self {
        Self {
            horizon_hours: DEFAULT_HORIZON_HOURS,
        }
    }

    /// Set the horizon. The entry count is still bounded by the number of
    /// affirmations; `next_refresh_at` is always `now + hours`.
    pub fn with_horizon(mut self, hours: u32) -> Self {
        self.horizon_hours = hours;
        self
    }

    pub fn horizon_hours(&self) -> u32 {
        self.horizon_hours
    }

    /// Plan one entry per hour starting at `now`, cycling through the
    /// snapshot's affirmations, for at most `horizon_hours` entries.
    pub fn build(&self, snapshot: &StateSnapshot, now: DateTime<Utc>) -> Timeline {
        let affirmations = &snapshot.affirmations;
        let count = (self.horizon_hours as usize).min(affirmations.len());

        let mut entries: Vec<TimelineEntry> = (0..count)
            .map(|hour| {
                let text = &affirmations[hour % affirmations.len()];
                TimelineEntry::from_snapshot(snapshot, now + Duration::hours(hour as i64), text)
            })
            .collect();

        if entries.is_empty() {
            tracing::debug!("no affirmations to plan, using fallback entry");
            entries.push(TimelineEntry::from_snapshot(
                snapshot,
                now,
                snapshot.fallback_affirmation.as_str(),
            ));
        }

        let next_refresh_at = now + Duration::hours(i64::from(self.horizon_hours));
        tracing::debug!(
            entries = entries.len(),
            horizon_hours = self.horizon_hours,
            %next_refresh_at,
            "timeline built"
        );

        Timeline {
            entries,
            next_refresh_at,
        }
    }
}

impl Default for TimelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
