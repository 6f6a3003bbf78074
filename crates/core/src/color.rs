//! sRGB color parsing and WCAG contrast math.
//!
//! Readability of a rendered symbol is advisory: consumers compare the
//! foreground/background contrast ratio against [`LOW_CONTRAST_RATIO`] and
//! surface a hint, nothing more. The math follows the WCAG 2.1 definition
//! of relative luminance and contrast ratio.

/// Ratio below which consumers surface a "low contrast" hint.
pub const LOW_CONTRAST_RATIO: f64 = 3.0;

/// An 8-bit-per-channel sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Parse a 6-digit hex color, with or without a leading `#`.
    ///
    /// Returns `None` for any other shape - short forms, named colors and
    /// garbage all degrade gracefully (the advisory that needed the color
    /// is simply suppressed).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let hex = value.strip_prefix('#').unwrap_or(value);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| {
            hex.get(range).and_then(|s| u8::from_str_radix(s, 16).ok())
        };
        Some(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }
}

/// Linearize one sRGB channel normalized to [0, 1].
fn srgb_to_linear(channel: f64) -> f64 {
    if channel <= 0.03928 {
        channel / 12.92
    } else {
        ((channel + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance of a color per WCAG 2.1.
///
/// Channels are normalized to [0, 1], linearized, then weighted
/// `0.2126 R + 0.7152 G + 0.0722 B`. Result lies in [0, 1].
#[must_use]
pub fn relative_luminance(color: Rgb) -> f64 {
    let r = srgb_to_linear(f64::from(color.r) / 255.0);
    let g = srgb_to_linear(f64::from(color.g) / 255.0);
    let b = srgb_to_linear(f64::from(color.b) / 255.0);
    0.2126f64.mul_add(r, 0.7152f64.mul_add(g, 0.0722 * b))
}

/// WCAG 2.1 contrast ratio between two colors.
///
/// `(L_lighter + 0.05) / (L_darker + 0.05)` - symmetric in its arguments
/// and always within [1, 21].
#[must_use]
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Contrast ratio between two hex color strings.
///
/// `None` when either color fails to parse; the caller drops the advisory
/// in that case rather than reporting a bogus ratio.
#[must_use]
pub fn contrast_between(color1: &str, color2: &str) -> Option<f64> {
    Some(contrast_ratio(Rgb::parse(color1)?, Rgb::parse(color2)?))
}
