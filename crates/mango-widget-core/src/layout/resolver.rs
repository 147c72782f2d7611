//! Variant resolution: (entry, theme, display class) -> layout descriptor.

use super::class::{ClassFamily, DisplayClass};
use super::descriptor::{
    Alignment, Arrangement, Axis, DayMarker, Field, FieldSlot, FieldValue, FontDesign,
    FontWeight, LayoutDescriptor, TextStyle, Tint,
};
use super::theme::{Background, Theme, MANGO_ACCENT};
use crate::timeline::TimelineEntry;

pub const MANGO_GLYPH: &str = "\u{1F96D}";
pub const FLAME_GLYPH: &str = "\u{1F525}";

/// Labels for the activity row. Index 0 is always Monday regardless of
/// which day the app started collecting on.
pub const WEEKDAY_INITIALS: [char; 7] = ['M', 'T', 'W', 'T', 'F', 'S', 'S'];

pub fn weekday_initial(index: usize) -> char {
    WEEKDAY_INITIALS[index % WEEKDAY_INITIALS.len()]
}

/// Resolve how `entry` is presented for `theme` in `class`.
///
/// Streak classes ignore `theme`. The Minimal theme never shows the mascot.
pub fn resolve(entry: &TimelineEntry, theme: Theme, class: DisplayClass) -> LayoutDescriptor {
    let theme = match class.family() {
        ClassFamily::Streak => Theme::Mango,
        _ => theme,
    };
    let style = theme.style();

    let (arrangement, mut fields) = match class {
        DisplayClass::Small | DisplayClass::Medium | DisplayClass::Large => {
            if theme == Theme::Minimal {
                minimal_full_size(entry, class.is_compact())
            } else {
                full_size(entry, class.is_compact())
            }
        }
        DisplayClass::Circular => circular(entry),
        DisplayClass::Rectangular => rectangular(entry),
        DisplayClass::Inline => inline(entry),
        DisplayClass::StreakSmall => streak_small(entry),
        DisplayClass::StreakMedium => streak_medium(entry),
    };

    if !style.shows_mascot {
        fields.retain(|slot| slot.field != Field::MascotName);
    }

    let background = match class.family() {
        ClassFamily::Accessory => None,
        ClassFamily::Streak => Some(Background::LUXURY),
        ClassFamily::FullSize => Some(style.background),
    };

    LayoutDescriptor {
        theme,
        display_class: class,
        accent: if class.family() == ClassFamily::Streak {
            MANGO_ACCENT
        } else {
            style.accent
        },
        background,
        arrangement,
        fields,
    }
}

/// [`resolve`] from host-supplied identifiers; unknown names degrade to
/// Mango / Medium instead of failing.
pub fn resolve_host(entry: &TimelineEntry, theme: &str, class: &str) -> LayoutDescriptor {
    resolve(entry, Theme::from_host(theme), DisplayClass::from_host(class))
}

fn slot(field: Field, value: FieldValue, style: TextStyle) -> FieldSlot {
    FieldSlot {
        field,
        value,
        style,
    }
}

fn text(value: &str) -> FieldValue {
    FieldValue::Text(value.to_string())
}

fn full_size(entry: &TimelineEntry, compact: bool) -> (Arrangement, Vec<FieldSlot>) {
    let (spacing, padding) = if compact { (10.0, 16.0) } else { (14.0, 24.0) };
    let arrangement = Arrangement::stack(Axis::Vertical, Alignment::Center, spacing)
        .padded(padding)
        .with_glass_card();

    let fields = vec![
        slot(
            Field::Affirmation,
            text(&entry.affirmation),
            TextStyle::new(if compact { 17.0 } else { 24.0 }, FontWeight::Medium)
                .design(FontDesign::Serif)
                .italic()
                .lines(if compact { 3 } else { 4 }),
        ),
        slot(
            Field::Category,
            text(&entry.category),
            TextStyle::new(if compact { 8.0 } else { 10.0 }, FontWeight::Bold)
                .caps(3.0)
                .tint(Tint::Primary, 0.5),
        ),
        slot(
            Field::MascotName,
            text(&entry.mascot_name),
            TextStyle::new(10.0, FontWeight::Semibold)
                .design(FontDesign::Rounded)
                .tint(Tint::Accent, 0.8),
        ),
    ];
    (arrangement, fields)
}

fn minimal_full_size(entry: &TimelineEntry, compact: bool) -> (Arrangement, Vec<FieldSlot>) {
    let arrangement = Arrangement::stack(Axis::Vertical, Alignment::Leading, 12.0)
        .padded(if compact { 16.0 } else { 20.0 });

    let fields = vec![
        slot(
            Field::Affirmation,
            text(&entry.affirmation),
            TextStyle::new(if compact { 16.0 } else { 22.0 }, FontWeight::Light)
                .lines(if compact { 3 } else { 4 }),
        ),
        slot(
            Field::Glyph,
            text(MANGO_GLYPH),
            TextStyle::new(12.0, FontWeight::Regular),
        ),
        slot(
            Field::Category,
            text(&entry.category),
            TextStyle::new(9.0, FontWeight::Medium)
                .caps(2.0)
                .tint(Tint::Primary, 0.5),
        ),
    ];
    (arrangement, fields)
}

fn circular(entry: &TimelineEntry) -> (Arrangement, Vec<FieldSlot>) {
    let arrangement = Arrangement::stack(Axis::Vertical, Alignment::Center, -2.0);
    let fields = vec![
        slot(
            Field::Glyph,
            text(MANGO_GLYPH),
            TextStyle::new(20.0, FontWeight::Regular),
        ),
        slot(
            Field::StreakCount,
            FieldValue::Count(entry.streak_days),
            TextStyle::new(12.0, FontWeight::Bold).design(FontDesign::Rounded),
        ),
        slot(
            Field::MascotName,
            text(&entry.mascot_name),
            TextStyle::new(8.0, FontWeight::Medium).tint(Tint::Primary, 0.8),
        ),
    ];
    (arrangement, fields)
}

fn rectangular(entry: &TimelineEntry) -> (Arrangement, Vec<FieldSlot>) {
    let arrangement = Arrangement::stack(Axis::Horizontal, Alignment::Leading, 8.0);
    let fields = vec![
        slot(
            Field::Glyph,
            text(MANGO_GLYPH),
            TextStyle::new(14.0, FontWeight::Regular),
        ),
        slot(
            Field::Affirmation,
            text(&entry.affirmation),
            TextStyle::new(15.0, FontWeight::Medium)
                .design(FontDesign::Serif)
                .italic()
                .lines(2),
        ),
        slot(
            Field::Category,
            text(&entry.category),
            TextStyle::new(8.0, FontWeight::Heavy)
                .caps(2.0)
                .tint(Tint::Secondary, 1.0),
        ),
    ];
    (arrangement, fields)
}

/// The full string is supplied; truncation to the host width is the host's job.
fn inline(entry: &TimelineEntry) -> (Arrangement, Vec<FieldSlot>) {
    let arrangement = Arrangement::stack(Axis::Horizontal, Alignment::Leading, 0.0);
    let fields = vec![slot(
        Field::Affirmation,
        text(&entry.affirmation),
        TextStyle::new(12.0, FontWeight::Regular).lines(1),
    )];
    (arrangement, fields)
}

fn consistency_bar(entry: &TimelineEntry) -> FieldSlot {
    slot(
        Field::ConsistencyBar,
        FieldValue::Progress(entry.monthly_consistency.clamp(0.0, 1.0)),
        TextStyle::new(4.0, FontWeight::Regular).tint(Tint::Accent, 1.0),
    )
}

fn streak_small(entry: &TimelineEntry) -> (Arrangement, Vec<FieldSlot>) {
    let arrangement = Arrangement::stack(Axis::Vertical, Alignment::Center, 8.0).padded(20.0);
    let fields = vec![
        slot(
            Field::Glyph,
            text(FLAME_GLYPH),
            TextStyle::new(32.0, FontWeight::Regular),
        ),
        slot(
            Field::StreakCount,
            FieldValue::Count(entry.streak_days),
            TextStyle::new(36.0, FontWeight::Bold).design(FontDesign::Rounded),
        ),
        slot(
            Field::StreakLabel,
            text("DAY STREAK"),
            TextStyle::new(10.0, FontWeight::Heavy)
                .caps(2.0)
                .tint(Tint::Accent, 1.0),
        ),
        consistency_bar(entry),
    ];
    (arrangement, fields)
}

fn streak_medium(entry: &TimelineEntry) -> (Arrangement, Vec<FieldSlot>) {
    let arrangement = Arrangement::stack(Axis::Horizontal, Alignment::Center, 20.0).padded(16.0);

    let markers = entry
        .weekly_activity
        .days()
        .iter()
        .enumerate()
        .map(|(i, active)| DayMarker {
            label: weekday_initial(i),
            active: *active,
        })
        .collect();

    let fields = vec![
        slot(
            Field::Glyph,
            text(FLAME_GLYPH),
            TextStyle::new(40.0, FontWeight::Regular),
        ),
        slot(
            Field::StreakCount,
            FieldValue::Count(entry.streak_days),
            TextStyle::new(44.0, FontWeight::Black).design(FontDesign::Rounded),
        ),
        slot(
            Field::StreakLabel,
            text("DAYS"),
            TextStyle::new(12.0, FontWeight::Heavy)
                .caps(2.0)
                .tint(Tint::Accent, 1.0),
        ),
        slot(
            Field::ActivityHeader,
            text("LAST 7 DAYS"),
            TextStyle::new(10.0, FontWeight::Bold)
                .caps(1.0)
                .tint(Tint::Primary, 0.6),
        ),
        slot(
            Field::WeeklyActivity,
            FieldValue::Markers(markers),
            TextStyle::new(8.0, FontWeight::Medium).tint(Tint::Accent, 1.0),
        ),
        slot(
            Field::ConsistencyLabel,
            text("MONTHLY CONSISTENCY"),
            TextStyle::new(8.0, FontWeight::Bold).tint(Tint::Primary, 0.5),
        ),
        consistency_bar(entry),
        slot(
            Field::ConsistencyPercent,
            FieldValue::Text(format!("{}%", entry.consistency_percent())),
            TextStyle::new(10.0, FontWeight::Bold),
        ),
    ];
    (arrangement, fields)
}
