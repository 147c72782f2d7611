//! Visual themes and their static accent/background table.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Linear RGB colour with components in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// `#RRGGBB` form, for hosts that take hex colours.
    pub fn hex(&self) -> String {
        let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02X}{:02X}{:02X}",
            channel(self.r),
            channel(self.g),
            channel(self.b)
        )
    }
}

/// Mango orange; also the fixed accent of the streak widgets.
pub const MANGO_ACCENT: Rgb = Rgb::new(1.0, 0.7, 0.4);
pub const OCEAN_ACCENT: Rgb = Rgb::new(0.4, 0.7, 1.0);
pub const FOREST_ACCENT: Rgb = Rgb::new(0.5, 0.8, 0.5);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradientDirection {
    TopToBottom,
    TopLeadingToBottomTrailing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    TopTrailing,
    BottomLeading,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gradient {
    pub from: Rgb,
    pub to: Rgb,
    pub direction: GradientDirection,
}

/// Soft radial light layered over a gradient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Glow {
    pub color: Rgb,
    pub opacity: f32,
    pub anchor: Anchor,
    pub radius: f32,
}

/// Background treatment behind full-size and streak widgets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Background {
    /// Dark warm gradient lit by a halo and an ambient glow.
    Luxury {
        base: Gradient,
        halo: Glow,
        ambient: Glow,
    },
    /// Plain two-stop atmospheric gradient.
    Gradient { gradient: Gradient },
    Solid { color: Rgb },
}

impl Background {
    pub const LUXURY: Background = Background::Luxury {
        base: Gradient {
            from: Rgb::new(0.16, 0.12, 0.11),
            to: Rgb::new(0.08, 0.06, 0.05),
            direction: GradientDirection::TopLeadingToBottomTrailing,
        },
        halo: Glow {
            color: MANGO_ACCENT,
            opacity: 0.15,
            anchor: Anchor::TopTrailing,
            radius: 200.0,
        },
        ambient: Glow {
            color: Rgb::new(0.4, 0.5, 1.0),
            opacity: 0.1,
            anchor: Anchor::BottomLeading,
            radius: 150.0,
        },
    };

    /// Luxury and gradient treatments; a solid fill is neither.
    pub fn is_atmospheric(&self) -> bool {
        !matches!(self, Background::Solid { .. })
    }
}

/// Static styling for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThemeStyle {
    pub accent: Rgb,
    pub background: Background,
    pub shows_mascot: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Mango,
    Ocean,
    Forest,
    Minimal,
}

impl Theme {
    pub const ALL: [Theme; 4] = [Theme::Mango, Theme::Ocean, Theme::Forest, Theme::Minimal];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mango => "mango",
            Self::Ocean => "ocean",
            Self::Forest => "forest",
            Self::Minimal => "minimal",
        }
    }

    /// Case-insensitive lookup by name.
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(name))
    }

    /// Lookup that never fails: unknown names resolve to [`Theme::Mango`].
    pub fn from_host(name: &str) -> Self {
        Self::parse(name).unwrap_or_else(|| {
            tracing::debug!(theme = name, "unknown theme, using mango");
            Self::Mango
        })
    }

    pub fn style(&self) -> ThemeStyle {
        match self {
            Self::Mango => ThemeStyle {
                accent: MANGO_ACCENT,
                background: Background::LUXURY,
                shows_mascot: true,
            },
            Self::Ocean => ThemeStyle {
                accent: OCEAN_ACCENT,
                background: Background::Gradient {
                    gradient: Gradient {
                        from: Rgb::new(0.1, 0.2, 0.35),
                        to: Rgb::new(0.05, 0.1, 0.2),
                        direction: GradientDirection::TopToBottom,
                    },
                },
                shows_mascot: true,
            },
            Self::Forest => ThemeStyle {
                accent: FOREST_ACCENT,
                background: Background::Gradient {
                    gradient: Gradient {
                        from: Rgb::new(0.15, 0.25, 0.15),
                        to: Rgb::new(0.05, 0.1, 0.05),
                        direction: GradientDirection::TopLeadingToBottomTrailing,
                    },
                },
                shows_mascot: true,
            },
            Self::Minimal => ThemeStyle {
                accent: Rgb::WHITE,
                background: Background::Solid { color: Rgb::BLACK },
                shows_mascot: false,
            },
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
