//! Android AppWidget adapter: emits RemoteViews bindings.
//!
//! The provider inflates one layout and sets text/progress on view ids;
//! fields the layout does not show are bound as hidden so stale values
//! from a previous update never linger.

use serde::Serialize;
use serde_json::json;

use super::{styled_text, tint_color, Platform, RendererAdapter, VisualDescription};
use crate::layout::{ClassFamily, Field, FieldValue, LayoutDescriptor};
use crate::timeline::TimelineEntry;

pub const HOME_LAYOUT: &str = "mango_widget";
pub const STREAK_LAYOUT: &str = "mango_streak_widget";
pub const ACCESSORY_LAYOUT: &str = "mango_widget_compact";

#[derive(Debug, Clone, Copy, Default)]
pub struct AppWidgetRenderer;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum Binding {
    Text {
        view_id: String,
        text: String,
        color: String,
        size_sp: f32,
    },
    Progress {
        view_id: String,
        max: u32,
        progress: u32,
    },
    Checked {
        view_id: String,
        label: String,
        checked: bool,
    },
    Hidden {
        view_id: String,
    },
}

impl AppWidgetRenderer {
    /// RemoteViews id for a field.
    pub fn view_id(field: Field) -> &'static str {
        match field {
            Field::Affirmation => "app_widget_text",
            Field::Category => "app_widget_category",
            Field::MascotName => "app_widget_mascot",
            Field::Glyph => "app_widget_glyph",
            Field::StreakCount => "app_widget_streak",
            Field::StreakLabel => "app_widget_streak_label",
            Field::ActivityHeader => "app_widget_activity_header",
            Field::WeeklyActivity => "app_widget_activity",
            Field::ConsistencyLabel => "app_widget_consistency_caption",
            Field::ConsistencyBar => "app_widget_consistency",
            Field::ConsistencyPercent => "app_widget_consistency_label",
        }
    }

    fn layout_name(layout: &LayoutDescriptor) -> &'static str {
        match layout.display_class.family() {
            ClassFamily::FullSize => HOME_LAYOUT,
            ClassFamily::Accessory => ACCESSORY_LAYOUT,
            ClassFamily::Streak => STREAK_LAYOUT,
        }
    }

    /// Fields bound by each layout resource.
    fn layout_fields(layout: &LayoutDescriptor) -> &'static [Field] {
        match layout.display_class.family() {
            ClassFamily::FullSize | ClassFamily::Accessory => &[
                Field::Glyph,
                Field::Affirmation,
                Field::Category,
                Field::MascotName,
                Field::StreakCount,
            ],
            ClassFamily::Streak => &[
                Field::Glyph,
                Field::StreakCount,
                Field::StreakLabel,
                Field::ActivityHeader,
                Field::WeeklyActivity,
                Field::ConsistencyLabel,
                Field::ConsistencyBar,
                Field::ConsistencyPercent,
            ],
        }
    }

    fn bindings(layout: &LayoutDescriptor) -> Vec<Binding> {
        let mut bindings = Vec::new();
        for field in Self::layout_fields(layout) {
            let view_id = Self::view_id(*field);
            let Some(slot) = layout.slot(*field) else {
                bindings.push(Binding::Hidden {
                    view_id: view_id.to_string(),
                });
                continue;
            };

            let color = tint_color(slot.style.tint, layout.accent);
            match &slot.value {
                FieldValue::Text(text) => bindings.push(Binding::Text {
                    view_id: view_id.to_string(),
                    text: styled_text(text, slot.style.uppercase),
                    color,
                    size_sp: slot.style.size,
                }),
                FieldValue::Count(count) => bindings.push(Binding::Text {
                    view_id: view_id.to_string(),
                    text: count.to_string(),
                    color,
                    size_sp: slot.style.size,
                }),
                FieldValue::Progress(ratio) => bindings.push(Binding::Progress {
                    view_id: view_id.to_string(),
                    max: 100,
                    progress: (ratio.clamp(0.0, 1.0) * 100.0).floor() as u32,
                }),
                FieldValue::Markers(markers) => {
                    for (i, marker) in markers.iter().enumerate() {
                        bindings.push(Binding::Checked {
                            view_id: format!("{view_id}_{i}"),
                            label: marker.label.to_string(),
                            checked: marker.active,
                        });
                    }
                }
            }
        }
        bindings
    }
}

impl RendererAdapter for AppWidgetRenderer {
    fn platform(&self) -> Platform {
        Platform::Android
    }

    fn render(&self, entry: &TimelineEntry, layout: &LayoutDescriptor) -> VisualDescription {
        let background = layout.background.map(|_| layout.theme.as_str());
        VisualDescription {
            platform: Platform::Android,
            payload: json!({
                "layout": Self::layout_name(layout),
                "updated_at": entry.timestamp,
                "background_drawable": background.map(|t| format!("widget_bg_{t}")),
                "accent": layout.accent.hex(),
                "bindings": Self::bindings(layout),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{resolve, DisplayClass, Theme};
    use chrono::Utc;

    fn binding<'a>(out: &'a VisualDescription, view_id: &str) -> &'a serde_json::Value {
        out.payload["bindings"]
            .as_array()
            .unwrap()
            .iter()
            .find(|b| b["view_id"] == view_id)
            .unwrap()
    }

    #[test]
    fn home_layout_binds_text_and_category() {
        let mut entry = TimelineEntry::placeholder(Utc::now());
        entry.category = "Focus".into();
        let layout = resolve(&entry, Theme::Mango, DisplayClass::Medium);
        let out = AppWidgetRenderer.render(&entry, &layout);

        assert_eq!(out.payload["layout"], HOME_LAYOUT);
        assert_eq!(binding(&out, "app_widget_text")["text"], entry.affirmation.as_str());
        assert_eq!(binding(&out, "app_widget_category")["text"], "FOCUS");
        assert_eq!(binding(&out, "app_widget_streak")["kind"], "hidden");
        assert_eq!(out.payload["background_drawable"], "widget_bg_mango");
    }

    #[test]
    fn circular_hides_affirmation() {
        let entry = TimelineEntry::placeholder(Utc::now());
        let layout = resolve(&entry, Theme::Mango, DisplayClass::Circular);
        let out = AppWidgetRenderer.render(&entry, &layout);

        assert_eq!(out.payload["layout"], ACCESSORY_LAYOUT);
        assert_eq!(binding(&out, "app_widget_text")["kind"], "hidden");
        assert_eq!(binding(&out, "app_widget_streak")["text"], "1");
        assert!(out.payload["background_drawable"].is_null());
    }

    #[test]
    fn streak_layout_binds_progress_and_days() {
        let entry = TimelineEntry::placeholder(Utc::now());
        let layout = resolve(&entry, Theme::Minimal, DisplayClass::StreakMedium);
        let out = AppWidgetRenderer.render(&entry, &layout);

        assert_eq!(out.payload["layout"], STREAK_LAYOUT);
        assert_eq!(binding(&out, "app_widget_consistency")["progress"], 50);
        assert_eq!(binding(&out, "app_widget_activity_0")["checked"], true);
        assert_eq!(binding(&out, "app_widget_activity_1")["checked"], false);
        assert_eq!(binding(&out, "app_widget_activity_6")["label"], "S");
    }
}
