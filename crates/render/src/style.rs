//! Engine-facing declarative styling and its mapping from `RenderConfig`.

use std::sync::Arc;

use qrforge_core::color::Rgb;
use qrforge_core::render_config::{DotStyle, ErrorCorrection, RenderConfig};
use qrforge_core::theme::ThemePaint;

use crate::engine::RenderError;

/// White margin (px) cleared around a knocked-out logo.
const KNOCKOUT_MARGIN_PX: u32 = 4;

/// Module shape understood by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DotShape {
    Square,
    Rounded,
    Dots,
}

/// Foreground paint understood by the engine.
#[derive(Debug, Clone, PartialEq)]
pub enum Fill {
    Flat(Rgb),
    /// Two-stop linear gradient; `rotation` is in radians.
    LinearGradient {
        rotation: f64,
        start: Rgb,
        end: Rgb,
    },
}

/// Background fill; `Transparent` is the sentinel the engine maps to a
/// fully transparent canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Background {
    Transparent,
    Solid(Rgb),
}

/// Embedded-image directive for a centered logo.
#[derive(Debug, Clone, PartialEq)]
pub struct LogoDirective {
    /// Encoded PNG bytes, shared with the owning configuration.
    pub png: Arc<Vec<u8>>,
    /// Logo edge as a fraction of the total symbol width.
    pub size_fraction: f64,
    /// White margin cleared around the logo, in pixels.
    pub knockout_margin: u32,
    /// Drop the modules underneath the logo region.
    pub hide_background_modules: bool,
}

/// The full declarative configuration handed to a [`crate::RenderEngine`].
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolStyle {
    /// Output edge length in pixels (square).
    pub size: u32,
    /// Blank margin around the symbol, in pixels.
    pub quiet_zone: u32,
    pub error_correction: ErrorCorrection,
    pub dot_shape: DotShape,
    pub foreground: Fill,
    pub background: Background,
    pub logo: Option<LogoDirective>,
}

impl SymbolStyle {
    /// Map a user-facing [`RenderConfig`] onto the engine's vocabulary.
    ///
    /// Gradient angles convert degrees to radians, the logo size percent
    /// becomes a width fraction, and a white-knockout logo gets the fixed
    /// margin plus hidden background modules.
    ///
    /// # Errors
    ///
    /// [`RenderError::Style`] when a configured color does not parse.
    pub fn from_config(config: &RenderConfig) -> Result<Self, RenderError> {
        let foreground = match &config.theme.paint {
            ThemePaint::Solid { color1 } => Fill::Flat(parse_color(color1)?),
            ThemePaint::Gradient {
                color1,
                color2,
                angle,
            } => Fill::LinearGradient {
                rotation: RenderConfig::normalize_angle(*angle).to_radians(),
                start: parse_color(color1)?,
                end: parse_color(color2)?,
            },
        };

        let background = if config.background_transparent {
            Background::Transparent
        } else {
            Background::Solid(parse_color(&config.background_color)?)
        };

        let logo = config.logo.as_ref().map(|logo| LogoDirective {
            png: Arc::clone(&logo.data),
            size_fraction: f64::from(logo.size_percent) / 100.0,
            knockout_margin: if logo.white_knockout {
                KNOCKOUT_MARGIN_PX
            } else {
                0
            },
            hide_background_modules: logo.white_knockout,
        });

        Ok(Self {
            size: config.size,
            quiet_zone: config.quiet_zone,
            error_correction: config.error_correction,
            dot_shape: match config.dot_style {
                DotStyle::Square => DotShape::Square,
                DotStyle::Rounded => DotShape::Rounded,
                DotStyle::Dots => DotShape::Dots,
            },
            foreground,
            background,
            logo,
        })
    }

}

fn parse_color(hex: &str) -> Result<Rgb, RenderError> {
    Rgb::parse(hex).ok_or_else(|| RenderError::Style(format!("unparsable color {hex:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use qrforge_core::render_config::LogoOverlay;
    use qrforge_core::theme::ColorTheme;

    #[test]
    fn default_config_maps_to_flat_black_on_transparent() {
        let style = SymbolStyle::from_config(&RenderConfig::default()).expect("valid config");
        assert_eq!(style.size, 1000);
        assert_eq!(style.quiet_zone, 0);
        assert_eq!(style.dot_shape, DotShape::Square);
        assert_eq!(style.foreground, Fill::Flat(Rgb { r: 0, g: 0, b: 0 }));
        assert_eq!(style.background, Background::Transparent);
        assert!(style.logo.is_none());
    }

    #[test]
    fn gradient_angle_converts_to_radians() {
        let mut config = RenderConfig::default();
        config.theme = ColorTheme {
            name: "Custom".to_string(),
            paint: ThemePaint::Gradient {
                color1: "#3B82F6".to_string(),
                color2: "#EF4444".to_string(),
                angle: 135.0,
            },
        };
        let style = SymbolStyle::from_config(&config).expect("valid config");
        let Fill::LinearGradient { rotation, .. } = style.foreground else {
            panic!("expected gradient fill");
        };
        assert!((rotation - 135.0f64.to_radians()).abs() < 1e-12);
    }

    #[test]
    fn opaque_background_maps_to_solid_fill() {
        let mut config = RenderConfig::default();
        config.background_transparent = false;
        config.background_color = "#112233".to_string();
        let style = SymbolStyle::from_config(&config).expect("valid config");
        assert_eq!(
            style.background,
            Background::Solid(Rgb {
                r: 0x11,
                g: 0x22,
                b: 0x33
            })
        );
    }

    #[test]
    fn unparsable_color_is_a_style_error() {
        let mut config = RenderConfig::default();
        config.background_transparent = false;
        config.background_color = "transparent-ish".to_string();
        let err = SymbolStyle::from_config(&config).expect_err("must fail");
        assert!(matches!(err, RenderError::Style(_)));
    }

    #[test]
    fn logo_maps_fraction_and_knockout() {
        let mut config = RenderConfig::default();
        let mut overlay = LogoOverlay::new(vec![0u8; 8]);
        overlay.size_percent = 20;
        overlay.white_knockout = true;
        config.set_logo(overlay);

        let style = SymbolStyle::from_config(&config).expect("valid config");
        let logo = style.logo.expect("logo directive");
        assert!((logo.size_fraction - 0.2).abs() < 1e-12);
        assert_eq!(logo.knockout_margin, 4);
        assert!(logo.hide_background_modules);
    }

    #[test]
    fn plain_logo_has_no_knockout() {
        let mut config = RenderConfig::default();
        config.set_logo(LogoOverlay::new(vec![0u8; 8]));
        let style = SymbolStyle::from_config(&config).expect("valid config");
        let logo = style.logo.expect("logo directive");
        assert_eq!(logo.knockout_margin, 0);
        assert!(!logo.hide_background_modules);
    }
}
