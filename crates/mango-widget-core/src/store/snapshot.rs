//! Typed, defaulted snapshot of the shared store.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{keys, SharedStore, StoreValue};
use crate::timeline::parse_affirmations;

pub const DEFAULT_AFFIRMATION: &str = "Deep breaths. You've got this.";
pub const DEFAULT_CATEGORY: &str = "Mango";
pub const DEFAULT_STREAK_DAYS: u32 = 1;
pub const DEFAULT_MASCOT_NAME: &str = "Seedling";

/// Seven daily activity flags in the order the app writes them.
///
/// The text form is exactly seven `'0'`/`'1'` characters. Shorter input is
/// right-padded with inactive days, longer input keeps the first seven, and
/// any character other than `'1'` counts as inactive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub struct WeeklyActivity([bool; 7]);

impl WeeklyActivity {
    pub const DAYS: usize = 7;

    pub fn from_flags(flags: &str) -> Self {
        let mut days = [false; 7];
        for (slot, c) in days.iter_mut().zip(flags.chars()) {
            *slot = c == '1';
        }
        Self(days)
    }

    pub fn days(&self) -> &[bool; 7] {
        &self.0
    }

    pub fn active_days(&self) -> usize {
        self.0.iter().filter(|d| **d).count()
    }
}

impl fmt::Display for WeeklyActivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for day in self.0 {
            f.write_str(if day { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl From<String> for WeeklyActivity {
    fn from(value: String) -> Self {
        Self::from_flags(&value)
    }
}

impl From<WeeklyActivity> for String {
    fn from(value: WeeklyActivity) -> Self {
        value.to_string()
    }
}

/// Why a store value was not used as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReadIssue {
    /// Key absent; the default was used.
    Missing { key: &'static str },
    /// Key present but unusable or out of range; default or normalized value used.
    Malformed { key: &'static str, reason: String },
}

impl ReadIssue {
    pub fn key(&self) -> &'static str {
        match self {
            Self::Missing { key } | Self::Malformed { key, .. } => key,
        }
    }
}

impl fmt::Display for ReadIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { key } => write!(f, "{key}: missing, default used"),
            Self::Malformed { key, reason } => write!(f, "{key}: {reason}"),
        }
    }
}

/// Diagnostics collected while reading a snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReadReport {
    pub issues: Vec<ReadIssue>,
}

impl ReadReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn issue_for(&self, key: &str) -> Option<&ReadIssue> {
        self.issues.iter().find(|i| i.key() == key)
    }

    fn missing(&mut self, key: &'static str) {
        tracing::debug!(key, "store key missing, using default");
        self.issues.push(ReadIssue::Missing { key });
    }

    fn malformed(&mut self, key: &'static str, reason: impl Into<String>) {
        let reason = reason.into();
        tracing::debug!(key, %reason, "store value malformed");
        self.issues.push(ReadIssue::Malformed { key, reason });
    }
}

/// Normalized view of the shared store at one instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub category: String,
    pub streak_days: u32,
    pub mascot_name: String,
    pub mascot_asset: String,
    /// Always within `[0.0, 1.0]`.
    pub monthly_consistency: f64,
    pub weekly_activity: WeeklyActivity,
    /// Never empty.
    pub affirmations: Vec<String>,
    /// Shown only when the builder would otherwise emit nothing.
    pub fallback_affirmation: String,
}

impl Default for StateSnapshot {
    fn default() -> Self {
        Self {
            category: DEFAULT_CATEGORY.to_string(),
            streak_days: DEFAULT_STREAK_DAYS,
            mascot_name: DEFAULT_MASCOT_NAME.to_string(),
            mascot_asset: String::new(),
            monthly_consistency: 0.0,
            weekly_activity: WeeklyActivity::default(),
            affirmations: vec![DEFAULT_AFFIRMATION.to_string()],
            fallback_affirmation: DEFAULT_AFFIRMATION.to_string(),
        }
    }
}

impl StateSnapshot {
    /// Read a snapshot, substituting defaults for anything missing or malformed.
    pub fn read(store: &impl SharedStore) -> Self {
        Self::read_with_report(store).0
    }

    /// Like [`read`](Self::read), also returning what was substituted.
    pub fn read_with_report(store: &impl SharedStore) -> (Self, ReadReport) {
        let mut report = ReadReport::default();

        let category = read_text(store, keys::CATEGORY_TEXT, &mut report)
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());
        let streak_days = read_streak(store, &mut report);
        let mascot_name = read_text(store, keys::EVOLUTION_NAME, &mut report)
            .unwrap_or_else(|| DEFAULT_MASCOT_NAME.to_string());
        let mascot_asset = read_mascot_asset(store, &mut report);
        let monthly_consistency = read_consistency(store, &mut report);
        let weekly_activity = read_activity(store, &mut report);

        let list = read_text(store, keys::AFFIRMATIONS_LIST, &mut report);
        let affirmations = parse_affirmations(list.as_deref(), DEFAULT_AFFIRMATION);
        let fallback_affirmation = read_text(store, keys::AFFIRMATION_TEXT, &mut report)
            .unwrap_or_else(|| DEFAULT_AFFIRMATION.to_string());

        let snapshot = Self {
            category,
            streak_days,
            mascot_name,
            mascot_asset,
            monthly_consistency,
            weekly_activity,
            affirmations,
            fallback_affirmation,
        };
        (snapshot, report)
    }
}

/// Non-empty text value, or `None` with the reason recorded.
fn read_text(
    store: &impl SharedStore,
    key: &'static str,
    report: &mut ReadReport,
) -> Option<String> {
    match store.value(key) {
        None => {
            report.missing(key);
            None
        }
        Some(StoreValue::Text(s)) if s.is_empty() => {
            report.malformed(key, "empty text");
            None
        }
        Some(StoreValue::Text(s)) => Some(s),
        Some(other) => {
            report.malformed(key, format!("expected text, found {}", other.kind()));
            None
        }
    }
}

fn read_mascot_asset(store: &impl SharedStore, report: &mut ReadReport) -> String {
    match store.value(keys::MASCOT_ASSET) {
        None => {
            report.missing(keys::MASCOT_ASSET);
            String::new()
        }
        Some(StoreValue::Text(s)) => s,
        Some(other) => {
            report.malformed(
                keys::MASCOT_ASSET,
                format!("expected text, found {}", other.kind()),
            );
            String::new()
        }
    }
}

fn read_streak(store: &impl SharedStore, report: &mut ReadReport) -> u32 {
    let key = keys::DAILY_STREAK;
    let raw = match store.value(key) {
        None => {
            report.missing(key);
            return DEFAULT_STREAK_DAYS;
        }
        Some(StoreValue::Integer(i)) => Some(i),
        Some(StoreValue::Float(f)) if f.is_finite() && f.fract() == 0.0 => Some(f as i64),
        Some(StoreValue::Text(s)) => s.trim().parse::<i64>().ok(),
        Some(_) => None,
    };

    match raw {
        Some(days) if days >= 0 => u32::try_from(days).unwrap_or(u32::MAX),
        Some(days) => {
            report.malformed(key, format!("negative streak {days}"));
            DEFAULT_STREAK_DAYS
        }
        None => {
            report.malformed(key, "expected a whole number of days");
            DEFAULT_STREAK_DAYS
        }
    }
}

fn read_consistency(store: &impl SharedStore, report: &mut ReadReport) -> f64 {
    let key = keys::MONTHLY_CONSISTENCY;
    let raw = match store.value(key) {
        None => {
            report.missing(key);
            return 0.0;
        }
        Some(StoreValue::Float(f)) => Some(f),
        Some(StoreValue::Integer(i)) => Some(i as f64),
        Some(StoreValue::Text(s)) => s.trim().parse::<f64>().ok(),
        Some(StoreValue::Bool(_)) => None,
    };

    match raw {
        Some(ratio) if ratio.is_nan() => {
            report.malformed(key, "not a number");
            0.0
        }
        Some(ratio) if !(0.0..=1.0).contains(&ratio) => {
            report.malformed(key, format!("{ratio} outside [0, 1], clamped"));
            ratio.clamp(0.0, 1.0)
        }
        Some(ratio) => ratio,
        None => {
            report.malformed(key, "expected a ratio");
            0.0
        }
    }
}

fn read_activity(store: &impl SharedStore, report: &mut ReadReport) -> WeeklyActivity {
    let key = keys::ACTIVITY_7DAYS;
    match store.value(key) {
        None => {
            report.missing(key);
            WeeklyActivity::default()
        }
        Some(StoreValue::Text(flags)) => {
            let len = flags.chars().count();
            if len != WeeklyActivity::DAYS {
                report.malformed(key, format!("{len} flags, normalized to 7"));
            }
            WeeklyActivity::from_flags(&flags)
        }
        Some(other) => {
            report.malformed(key, format!("expected text, found {}", other.kind()));
            WeeklyActivity::default()
        }
    }
}
