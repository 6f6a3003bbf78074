//! Theme catalog listing.

use qrforge_core::theme::{ThemePaint, color_themes};

/// Print the preset catalog, one line per theme.
#[allow(clippy::print_stdout)] // listing to stdout is this command's job
pub fn list() {
    for theme in color_themes() {
        match theme.paint {
            ThemePaint::Solid { color1 } => {
                println!("{:<18} solid     {color1}", theme.name);
            }
            ThemePaint::Gradient {
                color1,
                color2,
                angle,
            } => {
                println!("{:<18} gradient  {color1} -> {color2} @ {angle}°", theme.name);
            }
        }
    }
}
