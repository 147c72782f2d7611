//! Display classes: the OS widget size / form-factor categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Broad grouping of display classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassFamily {
    /// Home-screen widgets
    FullSize,
    /// Lock-screen / watch accessories
    Accessory,
    /// Dedicated streak widget layouts
    Streak,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayClass {
    Small,
    #[default]
    Medium,
    Large,
    Circular,
    Rectangular,
    Inline,
    StreakSmall,
    StreakMedium,
}

impl DisplayClass {
    pub const ALL: [DisplayClass; 8] = [
        DisplayClass::Small,
        DisplayClass::Medium,
        DisplayClass::Large,
        DisplayClass::Circular,
        DisplayClass::Rectangular,
        DisplayClass::Inline,
        DisplayClass::StreakSmall,
        DisplayClass::StreakMedium,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::Circular => "circular",
            Self::Rectangular => "rectangular",
            Self::Inline => "inline",
            Self::StreakSmall => "streak_small",
            Self::StreakMedium => "streak_medium",
        }
    }

    pub fn family(&self) -> ClassFamily {
        match self {
            Self::Small | Self::Medium | Self::Large => ClassFamily::FullSize,
            Self::Circular | Self::Rectangular | Self::Inline => ClassFamily::Accessory,
            Self::StreakSmall | Self::StreakMedium => ClassFamily::Streak,
        }
    }

    pub fn is_accessory(&self) -> bool {
        self.family() == ClassFamily::Accessory
    }

    /// Small footprints get smaller type and fewer lines.
    pub fn is_compact(&self) -> bool {
        matches!(self, Self::Small | Self::StreakSmall)
    }

    /// Parse a class identifier.
    ///
    /// Accepts our own names (`"streak_small"`) as well as host family names
    /// such as `"systemSmall"` or `"accessoryCircular"`, ignoring case and
    /// `-`/`_`/space separators.
    pub fn parse(name: &str) -> Option<Self> {
        let normalized: String = name
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        let bare = normalized
            .strip_prefix("system")
            .or_else(|| normalized.strip_prefix("accessory"))
            .unwrap_or(&normalized);

        match bare {
            "small" => Some(Self::Small),
            "medium" => Some(Self::Medium),
            "large" => Some(Self::Large),
            "circular" => Some(Self::Circular),
            "rectangular" => Some(Self::Rectangular),
            "inline" => Some(Self::Inline),
            "streaksmall" => Some(Self::StreakSmall),
            "streakmedium" => Some(Self::StreakMedium),
            _ => None,
        }
    }

    /// Lookup that never fails: unknown identifiers degrade to [`DisplayClass::Medium`].
    pub fn from_host(name: &str) -> Self {
        Self::parse(name).unwrap_or_else(|| {
            tracing::debug!(display_class = name, "unknown display class, using medium");
            Self::Medium
        })
    }
}

impl fmt::Display for DisplayClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
