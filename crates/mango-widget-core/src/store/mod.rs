//! Read-only access to the shared key-value store.
//!
//! The companion app writes widget state into a platform-shared area
//! (an iOS app-group `UserDefaults` suite, Android `SharedPreferences`).
//! This crate never writes to it; each generation cycle takes one
//! [`StateSnapshot`] through the [`SharedStore`] trait.

mod snapshot;

pub use snapshot::{
    ReadIssue, ReadReport, StateSnapshot, WeeklyActivity, DEFAULT_AFFIRMATION, DEFAULT_CATEGORY,
    DEFAULT_MASCOT_NAME, DEFAULT_STREAK_DAYS,
};

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;
use std::path::Path;

use crate::error::StoreError;

/// iOS app-group suite shared between the app and the widget extension.
pub const APP_GROUP: &str = "group.com.affirmation.mango.18A6A43D";

/// Keys written by the companion app.
pub mod keys {
    /// Legacy single affirmation, used only as the last-resort fallback.
    pub const AFFIRMATION_TEXT: &str = "affirmation_text";
    /// Upcoming affirmations joined with `|||`.
    pub const AFFIRMATIONS_LIST: &str = "affirmations_list";
    pub const CATEGORY_TEXT: &str = "category_text";
    pub const DAILY_STREAK: &str = "daily_streak";
    pub const EVOLUTION_NAME: &str = "evolution_name";
    pub const MASCOT_ASSET: &str = "mascot_asset";
    pub const MONTHLY_CONSISTENCY: &str = "monthly_consistency";
    pub const ACTIVITY_7DAYS: &str = "activity_7days";

    /// Every key the reader understands.
    pub const ALL: [&str; 8] = [
        AFFIRMATION_TEXT,
        AFFIRMATIONS_LIST,
        CATEGORY_TEXT,
        DAILY_STREAK,
        EVOLUTION_NAME,
        MASCOT_ASSET,
        MONTHLY_CONSISTENCY,
        ACTIVITY_7DAYS,
    ];
}

/// A single value held by the shared store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoreValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl StoreValue {
    /// Short name of the value's shape, used in read diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Text(_) => "text",
        }
    }
}

impl From<&str> for StoreValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for StoreValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for StoreValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for StoreValue {
    fn from(value: i32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<i64> for StoreValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<u32> for StoreValue {
    fn from(value: u32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<f64> for StoreValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// Read-only view of the shared key-value store.
pub trait SharedStore {
    /// Look up a key. `None` means the key is absent.
    fn value(&self, key: &str) -> Option<StoreValue>;
}

impl<S: BuildHasher> SharedStore for HashMap<String, StoreValue, S> {
    fn value(&self, key: &str) -> Option<StoreValue> {
        self.get(key).cloned()
    }
}

impl SharedStore for BTreeMap<String, StoreValue> {
    fn value(&self, key: &str) -> Option<StoreValue> {
        self.get(key).cloned()
    }
}

/// In-memory store, also loadable from a JSON object fixture.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MemoryStore {
    values: BTreeMap<String, StoreValue>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<StoreValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<StoreValue>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Parse a JSON object such as `{"daily_streak": 4, "category_text": "Calm"}`.
    ///
    /// `null` values are treated as absent keys.
    ///
    /// # Errors
    /// Returns an error if the text is not JSON, not an object, or holds
    /// arrays/objects as values.
    pub fn from_json_str(json: &str) -> Result<Self, StoreError> {
        let root: serde_json::Value = serde_json::from_str(json)?;
        let object = root.as_object().ok_or(StoreError::NotAnObject)?;

        let mut store = Self::new();
        for (key, value) in object {
            let value = match value {
                serde_json::Value::Null => continue,
                serde_json::Value::Bool(b) => StoreValue::Bool(*b),
                serde_json::Value::Number(n) => match n.as_i64() {
                    Some(i) => StoreValue::Integer(i),
                    None => StoreValue::Float(n.as_f64().unwrap_or(f64::NAN)),
                },
                serde_json::Value::String(s) => StoreValue::Text(s.clone()),
                serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
                    return Err(StoreError::UnsupportedValue { key: key.clone() });
                }
            };
            store.values.insert(key.clone(), value);
        }
        Ok(store)
    }

    /// Load a JSON object fixture from disk.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let content = std::fs::read_to_string(path).map_err(|source| StoreError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }
}

impl SharedStore for MemoryStore {
    fn value(&self, key: &str) -> Option<StoreValue> {
        self.values.get(key).cloned()
    }
}

impl<K: Into<String>, V: Into<StoreValue>> FromIterator<(K, V)> for MemoryStore {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut store = Self::new();
        for (key, value) in iter {
            store.insert(key, value);
        }
        store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn from_json_str_maps_value_shapes() {
        let store = MemoryStore::from_json_str(indoc! {r#"
            {
                "category_text": "Calm",
                "daily_streak": 4,
                "monthly_consistency": 0.75,
                "flag": true,
                "cleared": null
            }
        "#})
        .unwrap();

        assert_eq!(store.len(), 4);
        assert_eq!(store.value("category_text"), Some(StoreValue::Text("Calm".into())));
        assert_eq!(store.value("daily_streak"), Some(StoreValue::Integer(4)));
        assert_eq!(store.value("monthly_consistency"), Some(StoreValue::Float(0.75)));
        assert_eq!(store.value("flag"), Some(StoreValue::Bool(true)));
        assert_eq!(store.value("cleared"), None);
    }

    #[test]
    fn from_json_str_rejects_non_object() {
        let err = MemoryStore::from_json_str("[1, 2]").unwrap_err();
        assert!(matches!(err, StoreError::NotAnObject));
    }

    #[test]
    fn from_json_str_rejects_nested_values() {
        let err = MemoryStore::from_json_str(r#"{"activity_7days": [1, 0, 1]}"#).unwrap_err();
        match err {
            StoreError::UnsupportedValue { key } => assert_eq!(key, "activity_7days"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = MemoryStore::load(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, StoreError::ReadFailed { .. }));
    }

    #[test]
    fn hash_map_is_a_store() {
        let mut map = HashMap::new();
        map.insert(keys::DAILY_STREAK.to_string(), StoreValue::from(9));
        assert_eq!(map.value(keys::DAILY_STREAK), Some(StoreValue::Integer(9)));
        assert_eq!(map.value(keys::CATEGORY_TEXT), None);
    }

    #[test]
    fn store_value_untagged_serde() {
        let values: Vec<StoreValue> = serde_json::from_str(r#"[true, 3, 0.5, "x"]"#).unwrap();
        assert_eq!(
            values,
            vec![
                StoreValue::Bool(true),
                StoreValue::Integer(3),
                StoreValue::Float(0.5),
                StoreValue::Text("x".into()),
            ]
        );
    }
}
