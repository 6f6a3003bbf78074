//! Declarative render configuration.
//!
//! [`RenderConfig`] is independent of the payload: it captures the user's
//! customization choices and is handed, together with the payload string,
//! to the rendering layer. It is owned by the top-level session, mutated
//! through discrete field setters (each clamping its input), and reset to
//! the fixed default instance on explicit user action.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::color::{self, LOW_CONTRAST_RATIO};
use crate::theme::ColorTheme;

/// QR error correction level, trading data density for damage tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ErrorCorrection {
    L,
    M,
    #[default]
    Q,
    H,
}

/// How dark modules are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DotStyle {
    #[default]
    Square,
    Rounded,
    Dots,
}

/// Backdrop drawn behind an embedded logo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogoShape {
    #[default]
    None,
    Circle,
    Rounded,
}

/// An uploaded logo overlaid on the symbol center.
///
/// The PNG bytes sit behind an `Arc`: clones of the configuration share
/// the allocation, and replacing or removing the logo drops it exactly
/// when the last owner goes away - repeated uploads cannot leak.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoOverlay {
    /// Encoded PNG bytes.
    pub data: Arc<Vec<u8>>,
    /// Edge length as a percentage of the symbol width, clamped to [5, 30].
    pub size_percent: u8,
    /// Backdrop shape drawn behind the logo.
    pub background_shape: LogoShape,
    /// Clear the modules underneath the logo and pad it with a white margin.
    pub white_knockout: bool,
}

impl LogoOverlay {
    pub const MIN_SIZE_PERCENT: u8 = 5;
    pub const MAX_SIZE_PERCENT: u8 = 30;
    pub const DEFAULT_SIZE_PERCENT: u8 = 18;

    /// Wrap uploaded PNG bytes with default placement settings.
    #[must_use]
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            data: Arc::new(data),
            size_percent: Self::DEFAULT_SIZE_PERCENT,
            background_shape: LogoShape::None,
            white_knockout: false,
        }
    }

    /// Clamp a requested size percentage into the allowed band.
    #[must_use]
    pub fn clamp_size(percent: u8) -> u8 {
        percent.clamp(Self::MIN_SIZE_PERCENT, Self::MAX_SIZE_PERCENT)
    }
}

/// Size, styling, and overlay settings for the rendering layer.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Output edge length in pixels. The symbol is always square; a single
    /// field is what enforces the width == height invariant.
    pub size: u32,
    /// Background fill, ignored while `background_transparent` is set.
    pub background_color: String,
    /// Transparency overrides the background color.
    pub background_transparent: bool,
    /// Foreground paint.
    pub theme: ColorTheme,
    pub error_correction: ErrorCorrection,
    /// Blank margin around the symbol, in pixels.
    pub quiet_zone: u32,
    pub dot_style: DotStyle,
    pub logo: Option<LogoOverlay>,
}

impl RenderConfig {
    pub const MIN_SIZE: u32 = 256;
    pub const MAX_SIZE: u32 = 4096;
    pub const DEFAULT_SIZE: u32 = 1000;
    pub const MAX_QUIET_ZONE: u32 = 64;

    /// Clamp an edge length into [256, 4096].
    #[must_use]
    pub fn clamp_size(size: u32) -> u32 {
        size.clamp(Self::MIN_SIZE, Self::MAX_SIZE)
    }

    /// Clamp a quiet zone into [0, 64].
    #[must_use]
    pub fn clamp_quiet_zone(px: u32) -> u32 {
        px.min(Self::MAX_QUIET_ZONE)
    }

    /// Normalize a gradient angle into `[0, 360)` degrees.
    #[must_use]
    pub fn normalize_angle(degrees: f64) -> f64 {
        degrees.rem_euclid(360.0)
    }

    /// Set the output size, clamped.
    pub fn set_size(&mut self, size: u32) {
        self.size = Self::clamp_size(size);
    }

    /// Set the quiet zone, clamped.
    pub fn set_quiet_zone(&mut self, px: u32) {
        self.quiet_zone = Self::clamp_quiet_zone(px);
    }

    /// Install a new logo, dropping any previous asset.
    pub fn set_logo(&mut self, logo: LogoOverlay) {
        self.logo = Some(logo);
    }

    /// Remove the logo, releasing its bytes once no render holds them.
    pub fn clear_logo(&mut self) {
        self.logo = None;
    }

    /// Restore the fixed default instance.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Foreground/background contrast ratio, when it is meaningful:
    /// the background must be opaque and both colors parsable.
    #[must_use]
    pub fn contrast(&self) -> Option<f64> {
        if self.background_transparent {
            return None;
        }
        color::contrast_between(self.theme.paint.primary_color(), &self.background_color)
    }

    /// Whether the low-contrast advisory should be surfaced.
    #[must_use]
    pub fn is_low_contrast(&self) -> bool {
        self.contrast().is_some_and(|ratio| ratio < LOW_CONTRAST_RATIO)
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            size: Self::DEFAULT_SIZE,
            background_color: "#FFFFFF".to_string(),
            background_transparent: true,
            theme: ColorTheme::default(),
            error_correction: ErrorCorrection::Q,
            quiet_zone: 0,
            dot_style: DotStyle::Square,
            logo: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemePaint;

    #[test]
    fn default_matches_the_fixed_instance() {
        let config = RenderConfig::default();
        assert_eq!(config.size, 1000);
        assert_eq!(config.background_color, "#FFFFFF");
        assert!(config.background_transparent);
        assert_eq!(config.theme.name, "Black on White");
        assert_eq!(config.error_correction, ErrorCorrection::Q);
        assert_eq!(config.quiet_zone, 0);
        assert_eq!(config.dot_style, DotStyle::Square);
        assert!(config.logo.is_none());
    }

    #[test]
    fn size_and_quiet_zone_are_clamped() {
        let mut config = RenderConfig::default();
        config.set_size(100);
        assert_eq!(config.size, 256);
        config.set_size(10_000);
        assert_eq!(config.size, 4096);
        config.set_quiet_zone(1000);
        assert_eq!(config.quiet_zone, 64);
    }

    #[test]
    fn logo_size_clamps_into_band() {
        assert_eq!(LogoOverlay::clamp_size(1), 5);
        assert_eq!(LogoOverlay::clamp_size(18), 18);
        assert_eq!(LogoOverlay::clamp_size(90), 30);
    }

    #[test]
    fn angle_wraps_into_half_open_range() {
        assert!((RenderConfig::normalize_angle(360.0) - 0.0).abs() < f64::EPSILON);
        assert!((RenderConfig::normalize_angle(-45.0) - 315.0).abs() < f64::EPSILON);
        assert!((RenderConfig::normalize_angle(495.0) - 135.0).abs() < f64::EPSILON);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut config = RenderConfig::default();
        config.set_size(512);
        config.dot_style = DotStyle::Dots;
        config.set_logo(LogoOverlay::new(vec![1, 2, 3]));
        config.reset();
        assert_eq!(config, RenderConfig::default());
    }

    #[test]
    fn replacing_the_logo_releases_the_old_asset() {
        let mut config = RenderConfig::default();
        config.set_logo(LogoOverlay::new(vec![1; 16]));
        let old = config
            .logo
            .as_ref()
            .map(|l| Arc::downgrade(&l.data))
            .expect("logo set");
        config.set_logo(LogoOverlay::new(vec![2; 16]));
        assert!(old.upgrade().is_none(), "old bytes must be dropped");
    }

    #[test]
    fn transparent_background_suppresses_contrast_advisory() {
        let mut config = RenderConfig::default();
        assert_eq!(config.contrast(), None);
        assert!(!config.is_low_contrast());

        config.background_transparent = false;
        // Black on white: maximum ratio, no advisory.
        assert!(!config.is_low_contrast());

        config.theme = ColorTheme {
            name: "Custom".to_string(),
            paint: ThemePaint::Solid {
                color1: "#FFFF00".to_string(),
            },
        };
        assert!(config.is_low_contrast());
    }
}
