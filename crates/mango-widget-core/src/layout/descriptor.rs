//! Renderer-agnostic layout descriptors.

use serde::{Deserialize, Serialize};

use super::class::DisplayClass;
use super::theme::{Background, Rgb, Theme};

/// Content fields a widget can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// Decorative emoji (mango or flame)
    Glyph,
    Affirmation,
    Category,
    MascotName,
    StreakCount,
    /// Caption under the streak count
    StreakLabel,
    ActivityHeader,
    WeeklyActivity,
    ConsistencyLabel,
    ConsistencyBar,
    ConsistencyPercent,
}

/// One day in the activity row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayMarker {
    pub label: char,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum FieldValue {
    Text(String),
    Count(u32),
    /// Ratio in `[0.0, 1.0]`
    Progress(f64),
    Markers(Vec<DayMarker>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    Light,
    Regular,
    Medium,
    Semibold,
    Bold,
    Heavy,
    Black,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontDesign {
    Default,
    Serif,
    Rounded,
}

/// Colour role; the renderer maps `Accent` to the descriptor's accent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tint {
    Primary,
    Secondary,
    Accent,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub size: f32,
    pub weight: FontWeight,
    pub design: FontDesign,
    pub italic: bool,
    pub uppercase: bool,
    pub tracking: f32,
    pub line_limit: Option<u8>,
    pub tint: Tint,
    pub opacity: f32,
}

impl TextStyle {
    pub const fn new(size: f32, weight: FontWeight) -> Self {
        Self {
            size,
            weight,
            design: FontDesign::Default,
            italic: false,
            uppercase: false,
            tracking: 0.0,
            line_limit: None,
            tint: Tint::Primary,
            opacity: 1.0,
        }
    }

    pub const fn design(mut self, design: FontDesign) -> Self {
        self.design = design;
        self
    }

    pub const fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub const fn caps(mut self, tracking: f32) -> Self {
        self.uppercase = true;
        self.tracking = tracking;
        self
    }

    pub const fn lines(mut self, limit: u8) -> Self {
        self.line_limit = Some(limit);
        self
    }

    pub const fn tint(mut self, tint: Tint, opacity: f32) -> Self {
        self.tint = tint;
        self.opacity = opacity;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSlot {
    pub field: Field,
    pub value: FieldValue,
    pub style: TextStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    Center,
    Leading,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    Vertical,
    Horizontal,
}

/// How the slots are stacked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arrangement {
    pub axis: Axis,
    pub alignment: Alignment,
    pub spacing: f32,
    pub padding: f32,
    /// Frosted rounded card around the text block.
    pub glass_card: bool,
}

impl Arrangement {
    pub const fn stack(axis: Axis, alignment: Alignment, spacing: f32) -> Self {
        Self {
            axis,
            alignment,
            spacing,
            padding: 0.0,
            glass_card: false,
        }
    }

    pub const fn padded(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    pub const fn with_glass_card(mut self) -> Self {
        self.glass_card = true;
        self
    }
}

/// Everything a renderer needs to present one entry in one theme and class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutDescriptor {
    /// Theme actually applied (streak classes always report Mango).
    pub theme: Theme,
    pub display_class: DisplayClass,
    pub accent: Rgb,
    /// `None` for accessory classes, which draw on the host's own backdrop.
    pub background: Option<Background>,
    pub arrangement: Arrangement,
    /// Visible fields in presentation order.
    pub fields: Vec<FieldSlot>,
}

impl LayoutDescriptor {
    pub fn slot(&self, field: Field) -> Option<&FieldSlot> {
        self.fields.iter().find(|s| s.field == field)
    }

    pub fn shows(&self, field: Field) -> bool {
        self.slot(field).is_some()
    }

    pub fn text(&self, field: Field) -> Option<&str> {
        match &self.slot(field)?.value {
            FieldValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn visible_fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.fields.iter().map(|s| s.field)
    }
}
