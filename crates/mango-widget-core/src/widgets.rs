//! Catalog of the widgets the extension ships.

use serde::{Deserialize, Serialize};

use crate::layout::{DisplayClass, LayoutDescriptor, Theme};
use crate::timeline::TimelineEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetKind {
    Classic,
    Ocean,
    Forest,
    Minimal,
    Streak,
}

const HOME_CLASSES: &[DisplayClass] = &[
    DisplayClass::Small,
    DisplayClass::Medium,
    DisplayClass::Large,
];

const CLASSIC_CLASSES: &[DisplayClass] = &[
    DisplayClass::Small,
    DisplayClass::Medium,
    DisplayClass::Large,
    DisplayClass::Circular,
    DisplayClass::Rectangular,
    DisplayClass::Inline,
];

const STREAK_CLASSES: &[DisplayClass] = &[DisplayClass::StreakSmall, DisplayClass::StreakMedium];

impl WidgetKind {
    pub const ALL: [WidgetKind; 5] = [
        WidgetKind::Classic,
        WidgetKind::Ocean,
        WidgetKind::Forest,
        WidgetKind::Minimal,
        WidgetKind::Streak,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Ocean => "ocean",
            Self::Forest => "forest",
            Self::Minimal => "minimal",
            Self::Streak => "streak",
        }
    }

    /// Identifier registered with the host.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Classic => "MangoWidget",
            Self::Ocean => "OceanWidget",
            Self::Forest => "ForestWidget",
            Self::Minimal => "MinimalWidget",
            Self::Streak => "StreakWidget",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Classic => "Mango Classic",
            Self::Ocean => "Mango Ocean",
            Self::Forest => "Mango Forest",
            Self::Minimal => "Mango Minimal",
            Self::Streak => "Mango Streak",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Classic => "Warm luxury affirmations with mango theme.",
            Self::Ocean => "Calm ocean-themed affirmations.",
            Self::Forest => "Grounded forest-themed affirmations.",
            Self::Minimal => "Clean, minimal left-aligned affirmations.",
            Self::Streak => "Track your mindfulness streak and consistency.",
        }
    }

    pub fn theme(&self) -> Theme {
        match self {
            Self::Classic | Self::Streak => Theme::Mango,
            Self::Ocean => Theme::Ocean,
            Self::Forest => Theme::Forest,
            Self::Minimal => Theme::Minimal,
        }
    }

    pub fn supported_classes(&self) -> &'static [DisplayClass] {
        match self {
            Self::Classic => CLASSIC_CLASSES,
            Self::Ocean | Self::Forest | Self::Minimal => HOME_CLASSES,
            Self::Streak => STREAK_CLASSES,
        }
    }

    pub fn supports(&self, class: DisplayClass) -> bool {
        self.supported_classes().contains(&class)
    }

    /// Look up by host identifier (`"OceanWidget"`) or short name (`"ocean"`).
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|w| w.kind().eq_ignore_ascii_case(name) || w.as_str().eq_ignore_ascii_case(name))
    }

    /// Map the family the host asks for onto the class this widget renders.
    ///
    /// The streak widget draws its small layout for small families and its
    /// medium layout for everything else. Other widgets render supported
    /// classes as-is and fall back to Medium.
    pub fn display_class_for(&self, requested: DisplayClass) -> DisplayClass {
        match self {
            Self::Streak => match requested {
                DisplayClass::Small | DisplayClass::StreakSmall => DisplayClass::StreakSmall,
                _ => DisplayClass::StreakMedium,
            },
            _ if self.supports(requested) => requested,
            _ => DisplayClass::Medium,
        }
    }

    /// Resolve `entry` as this widget would draw it for a host family.
    pub fn layout(&self, entry: &TimelineEntry, requested: DisplayClass) -> LayoutDescriptor {
        crate::layout::resolve(entry, self.theme(), self.display_class_for(requested))
    }
}
