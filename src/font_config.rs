// src/font_config.rs

// Font handling for the timeline figure.
// Style files give sizes in points; the backends want pixels, so every size
// goes through `FontStyle::scaled` with the output dpi.

use crate::style::StyleConfig;

/// Font family used for all text. Resolved to a system font by plotters.
pub const FONT_FAMILY: &str = "sans-serif";

const POINTS_PER_INCH: f64 = 72.0;

/// A font family and size in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontStyle {
    pub family: &'static str,
    pub size_pt: u32,
}

impl FontStyle {
    pub const fn new(size_pt: u32) -> Self {
        Self {
            family: FONT_FAMILY,
            size_pt,
        }
    }

    /// Pixel size at `dpi`, as a tuple ready for `IntoFont`.
    pub fn scaled(&self, dpi: u32) -> (&'static str, f64) {
        (self.family, pt_to_px(self.size_pt, dpi))
    }
}

pub fn pt_to_px(size_pt: u32, dpi: u32) -> f64 {
    (size_pt as f64 * dpi as f64 / POINTS_PER_INCH).round()
}

/// Fonts for one figure, derived from the style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FigureFonts {
    pub axis: FontStyle,
    pub tick: FontStyle,
    pub legend: FontStyle,
    pub bar_label: FontStyle,
}

impl FigureFonts {
    pub fn from_style(style: &StyleConfig) -> Self {
        Self {
            axis: FontStyle::new(style.font_size_pt),
            // Tick labels one step below the axis title.
            tick: FontStyle::new(style.font_size_pt.saturating_sub(4).max(1)),
            legend: FontStyle::new(style.font_size_pt),
            bar_label: FontStyle::new(style.label_size_pt),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pt_to_px() {
        assert_eq!(pt_to_px(72, 100), 100.0);
        assert_eq!(pt_to_px(14, 100), 19.0);
        assert_eq!(pt_to_px(20, 200), 56.0);
    }

    #[test]
    fn test_fonts_from_default_style() {
        let fonts = FigureFonts::from_style(&StyleConfig::default());
        assert_eq!(fonts.axis.size_pt, 20);
        assert_eq!(fonts.bar_label.size_pt, 14);
        assert_eq!(fonts.bar_label.scaled(100), (FONT_FAMILY, 19.0));
    }
}
