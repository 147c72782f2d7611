//! iOS WidgetKit adapter: emits a SwiftUI-shaped view tree.

use serde_json::{json, Value};

use super::{styled_text, tint_color, Platform, RendererAdapter, VisualDescription};
use crate::layout::{
    Alignment, Axis, DisplayClass, Field, FieldSlot, FieldValue, LayoutDescriptor, MANGO_GLYPH,
};
use crate::timeline::TimelineEntry;

#[derive(Debug, Clone, Copy, Default)]
pub struct WidgetKitRenderer;

impl WidgetKitRenderer {
    /// WidgetKit family name for a display class.
    pub fn family(class: DisplayClass) -> &'static str {
        match class {
            DisplayClass::Small | DisplayClass::StreakSmall => "systemSmall",
            DisplayClass::Medium | DisplayClass::StreakMedium => "systemMedium",
            DisplayClass::Large => "systemLarge",
            DisplayClass::Circular => "accessoryCircular",
            DisplayClass::Rectangular => "accessoryRectangular",
            DisplayClass::Inline => "accessoryInline",
        }
    }

    fn node(slot: &FieldSlot, layout: &LayoutDescriptor) -> Value {
        let style = &slot.style;
        let color = tint_color(style.tint, layout.accent);
        match &slot.value {
            FieldValue::Text(text) => {
                // Inline accessories let the host pick the variant that fits.
                if layout.display_class == DisplayClass::Inline && slot.field == Field::Affirmation
                {
                    return json!({
                        "view": "view_that_fits",
                        "candidates": [format!("{MANGO_GLYPH} {text}"), text],
                    });
                }
                json!({
                    "view": "text",
                    "field": slot.field,
                    "text": styled_text(text, style.uppercase),
                    "font": {
                        "size": style.size,
                        "weight": style.weight,
                        "design": style.design,
                        "italic": style.italic,
                    },
                    "tracking": style.tracking,
                    "line_limit": style.line_limit,
                    "color": color,
                    "opacity": style.opacity,
                })
            }
            FieldValue::Count(count) => json!({
                "view": "text",
                "field": slot.field,
                "text": count.to_string(),
                "font": {
                    "size": style.size,
                    "weight": style.weight,
                    "design": style.design,
                    "italic": false,
                },
                "color": color,
                "opacity": style.opacity,
            }),
            FieldValue::Progress(value) => json!({
                "view": "progress",
                "field": slot.field,
                "value": value,
                "tint": color,
            }),
            FieldValue::Markers(markers) => {
                let children: Vec<Value> = markers
                    .iter()
                    .map(|m| {
                        let fill = if m.active {
                            color.clone()
                        } else {
                            "white@0.1".to_string()
                        };
                        json!({
                            "view": "day_marker",
                            "label": m.label.to_string(),
                            "filled": m.active,
                            "fill": fill,
                        })
                    })
                    .collect();
                json!({
                    "view": "hstack",
                    "field": slot.field,
                    "spacing": 8,
                    "label_size": style.size,
                    "children": children,
                })
            }
        }
    }
}

impl RendererAdapter for WidgetKitRenderer {
    fn platform(&self) -> Platform {
        Platform::Ios
    }

    fn render(&self, entry: &TimelineEntry, layout: &LayoutDescriptor) -> VisualDescription {
        let arrangement = &layout.arrangement;
        let stack = match (arrangement.axis, arrangement.alignment) {
            (Axis::Vertical, Alignment::Center) => "vstack",
            (Axis::Vertical, Alignment::Leading) => "vstack_leading",
            (Axis::Horizontal, _) => "hstack",
        };
        let children: Vec<Value> = layout
            .fields
            .iter()
            .map(|slot| Self::node(slot, layout))
            .collect();

        VisualDescription {
            platform: Platform::Ios,
            payload: json!({
                "date": entry.timestamp,
                "family": Self::family(layout.display_class),
                "theme": layout.theme,
                "accent": layout.accent.hex(),
                "background": layout.background,
                "content": {
                    "view": stack,
                    "spacing": arrangement.spacing,
                    "padding": arrangement.padding,
                    "glass_card": arrangement.glass_card,
                    "children": children,
                },
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{resolve, Theme};
    use chrono::Utc;

    #[test]
    fn accessory_has_no_background() {
        let entry = TimelineEntry::placeholder(Utc::now());
        let layout = resolve(&entry, Theme::Mango, DisplayClass::Circular);
        let out = WidgetKitRenderer.render(&entry, &layout);
        assert_eq!(out.payload["family"], "accessoryCircular");
        assert!(out.payload["background"].is_null());
    }

    #[test]
    fn category_is_uppercased() {
        let mut entry = TimelineEntry::placeholder(Utc::now());
        entry.category = "Calm".into();
        let layout = resolve(&entry, Theme::Forest, DisplayClass::Medium);
        let out = WidgetKitRenderer.render(&entry, &layout);
        let children = out.payload["content"]["children"].as_array().unwrap();
        assert!(children.iter().any(|c| c["text"] == "CALM"));
        assert_eq!(out.payload["background"]["kind"], "gradient");
    }

    #[test]
    fn inline_offers_glyph_and_plain_candidates() {
        let entry = TimelineEntry::placeholder(Utc::now());
        let layout = resolve(&entry, Theme::Mango, DisplayClass::Inline);
        let out = WidgetKitRenderer.render(&entry, &layout);
        let node = &out.payload["content"]["children"][0];
        assert_eq!(node["view"], "view_that_fits");
        assert_eq!(node["candidates"][1], entry.affirmation.as_str());
    }

    #[test]
    fn streak_medium_renders_markers() {
        let entry = TimelineEntry::placeholder(Utc::now());
        let layout = resolve(&entry, Theme::Ocean, DisplayClass::StreakMedium);
        let out = WidgetKitRenderer.render(&entry, &layout);
        assert_eq!(out.payload["family"], "systemMedium");
        let children = out.payload["content"]["children"].as_array().unwrap();
        let row = children.iter().find(|c| c["view"] == "hstack").unwrap();
        assert_eq!(row["children"].as_array().unwrap().len(), 7);
        assert_eq!(row["children"][0]["label"], "M");
    }
}
