//! Named foreground color themes.

use serde::{Deserialize, Serialize};

/// How the foreground is painted: one flat color or a two-stop linear
/// gradient with an angle in degrees, normalized to `[0, 360)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ThemePaint {
    Solid {
        color1: String,
    },
    Gradient {
        color1: String,
        color2: String,
        angle: f64,
    },
}

impl ThemePaint {
    /// The primary color - the one compared against the background for the
    /// low-contrast advisory.
    #[must_use]
    pub fn primary_color(&self) -> &str {
        match self {
            Self::Solid { color1 } | Self::Gradient { color1, .. } => color1,
        }
    }
}

/// A named theme preset.
///
/// Presets are an immutable catalog; the "Custom" entry is a template the
/// user overwrites in place via the customization surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorTheme {
    pub name: String,
    #[serde(flatten)]
    pub paint: ThemePaint,
}

impl ColorTheme {
    /// Name of the user-editable template entry.
    pub const CUSTOM: &'static str = "Custom";

    fn solid(name: &str, color1: &str) -> Self {
        Self {
            name: name.to_string(),
            paint: ThemePaint::Solid {
                color1: color1.to_string(),
            },
        }
    }

    fn gradient(name: &str, color1: &str, color2: &str, angle: f64) -> Self {
        Self {
            name: name.to_string(),
            paint: ThemePaint::Gradient {
                color1: color1.to_string(),
                color2: color2.to_string(),
                angle,
            },
        }
    }
}

impl Default for ColorTheme {
    /// The first catalog entry, "Black on White".
    fn default() -> Self {
        Self::solid("Black on White", "#000000")
    }
}

/// The preset catalog, in display order. The final entry is the mutable
/// "Custom" template.
#[must_use]
pub fn color_themes() -> Vec<ColorTheme> {
    vec![
        ColorTheme::solid("Black on White", "#000000"),
        ColorTheme::solid("White on Black", "#FFFFFF"),
        ColorTheme::gradient("Blue to Red", "#3B82F6", "#EF4444", 135.0),
        ColorTheme::gradient("Emerald to Teal", "#10B981", "#14B8A6", 135.0),
        ColorTheme::gradient("Purple to Pink", "#A855F7", "#EC4899", 135.0),
        ColorTheme::gradient(ColorTheme::CUSTOM, "#000000", "#FFFFFF", 135.0),
    ]
}

/// Look up a preset by name.
#[must_use]
pub fn theme_by_name(name: &str) -> Option<ColorTheme> {
    color_themes().into_iter().find(|t| t.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_six_entries_ending_in_custom() {
        let themes = color_themes();
        assert_eq!(themes.len(), 6);
        assert_eq!(themes.last().map(|t| t.name.as_str()), Some("Custom"));
    }

    #[test]
    fn default_theme_is_black_on_white() {
        let theme = ColorTheme::default();
        assert_eq!(theme.name, "Black on White");
        assert_eq!(theme.paint.primary_color(), "#000000");
    }

    #[test]
    fn lookup_by_name() {
        let theme = theme_by_name("Blue to Red").expect("preset exists");
        assert!(matches!(
            theme.paint,
            ThemePaint::Gradient { ref color2, .. } if color2 == "#EF4444"
        ));
        assert!(theme_by_name("Chartreuse Dream").is_none());
    }

    #[test]
    fn serde_tags_paint_with_type() {
        let theme = ColorTheme::default();
        let json = serde_json::to_value(&theme).expect("serialize");
        assert_eq!(json["type"], "solid");
        assert_eq!(json["name"], "Black on White");

        let parsed: ColorTheme = serde_json::from_str(
            r##"{"name":"Custom","type":"gradient","color1":"#111111","color2":"#222222","angle":90.0}"##,
        )
        .expect("deserialize");
        assert!(matches!(parsed.paint, ThemePaint::Gradient { angle, .. } if (angle - 90.0).abs() < f64::EPSILON));
    }
}
