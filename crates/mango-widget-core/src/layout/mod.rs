//! Presentation-variant resolution.
//!
//! Themes and display classes are plain enums backed by static lookup
//! tables; [`resolve`] combines them with a timeline entry into a
//! [`LayoutDescriptor`] that any platform renderer can consume.

mod class;
mod descriptor;
mod resolver;
mod theme;

pub use class::{ClassFamily, DisplayClass};
pub use descriptor::{
    Alignment, Arrangement, Axis, DayMarker, Field, FieldSlot, FieldValue, FontDesign,
    FontWeight, LayoutDescriptor, TextStyle, Tint,
};
pub use resolver::{
    resolve, resolve_host, weekday_initial, FLAME_GLYPH, MANGO_GLYPH, WEEKDAY_INITIALS,
};
pub use theme::{
    Anchor, Background, Glow, Gradient, GradientDirection, Rgb, Theme, ThemeStyle,
    FOREST_ACCENT, MANGO_ACCENT, OCEAN_ACCENT,
};
