//! Platform renderer adapters.
//!
//! Each host platform gets one adapter that turns a [`LayoutDescriptor`]
//! into an opaque [`VisualDescription`]. The core never depends on either
//! platform's view hierarchy; adapters only read the descriptor.

mod app_widget;
mod widget_kit;

pub use app_widget::AppWidgetRenderer;
pub use widget_kit::WidgetKitRenderer;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::layout::{LayoutDescriptor, Rgb, Tint};
use crate::timeline::TimelineEntry;

/// Colour token naming the host's secondary label style.
pub const SECONDARY_COLOR: &str = "secondary";

/// Host platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Ios,
    Android,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ios => "ios",
            Self::Android => "android",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "ios" | "widgetkit" => Some(Self::Ios),
            "android" | "appwidget" => Some(Self::Android),
            _ => None,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Renderer output handed to the host; its payload is platform-specific.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisualDescription {
    pub platform: Platform,
    pub payload: serde_json::Value,
}

pub trait RendererAdapter {
    fn platform(&self) -> Platform;

    fn render(&self, entry: &TimelineEntry, layout: &LayoutDescriptor) -> VisualDescription;
}

/// Adapter for `platform`.
pub fn renderer_for(platform: Platform) -> Box<dyn RendererAdapter> {
    match platform {
        Platform::Ios => Box::new(WidgetKitRenderer),
        Platform::Android => Box::new(AppWidgetRenderer),
    }
}

/// Host-facing colour token for a tint role.
///
/// Concrete colours come back as `#RRGGBB`. `Secondary` has no fixed value;
/// it maps to [`SECONDARY_COLOR`], the host's adaptive secondary label style.
pub(crate) fn tint_color(tint: Tint, accent: Rgb) -> String {
    match tint {
        Tint::Primary => Rgb::WHITE.hex(),
        Tint::Secondary => SECONDARY_COLOR.to_string(),
        Tint::Accent => accent.hex(),
    }
}

/// Apply the style's case transform to display text.
pub(crate) fn styled_text(text: &str, uppercase: bool) -> String {
    if uppercase {
        text.to_uppercase()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_parse() {
        assert_eq!(Platform::parse("iOS"), Some(Platform::Ios));
        assert_eq!(Platform::parse("android"), Some(Platform::Android));
        assert_eq!(Platform::parse("web"), None);
    }

    #[test]
    fn tint_color_tokens() {
        let accent = Rgb::new(1.0, 0.5, 0.0);
        assert_eq!(tint_color(Tint::Primary, accent), "#FFFFFF");
        assert_eq!(tint_color(Tint::Accent, accent), accent.hex());
        assert_eq!(tint_color(Tint::Secondary, accent), SECONDARY_COLOR);
    }

    #[test]
    fn renderer_for_matches_platform() {
        for platform in [Platform::Ios, Platform::Android] {
            assert_eq!(renderer_for(platform).platform(), platform);
        }
    }
}
