//! Fonts and text measurement.
//!
//! The widget needs two things from text: the bounding box of a caption
//! (the arc geometry is derived from it) and the font's ascent/descent
//! (the caption baseline is derived from them). Both come through the
//! [`TextMetrics`] trait so a host can plug in its real text stack while
//! tests use the deterministic [`ScaledMetrics`] model.

use crate::types::Size;

/// A font family.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum FontFamily {
    /// The platform's default sans-serif face.
    #[default]
    SansSerif,
    /// The platform's default serif face.
    Serif,
    /// The platform's default monospace face.
    Monospace,
    /// A named face.
    Named(String),
}

/// A font description: family plus size in pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    pub family: FontFamily,
    pub size: f32,
}

impl Font {
    /// Create a font with the given family and size.
    pub fn new(family: FontFamily, size: f32) -> Self {
        Self { family, size }
    }
}

impl Default for Font {
    fn default() -> Self {
        Self {
            family: FontFamily::SansSerif,
            size: 24.0,
        }
    }
}

/// Vertical font metrics.
///
/// Both values are positive magnitudes: `ascent` is the distance from
/// the baseline up to the top of the line box, `descent` the distance
/// from the baseline down to its bottom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontMetrics {
    pub ascent: f32,
    pub descent: f32,
}

impl FontMetrics {
    /// Total line height.
    #[inline]
    pub fn line_height(&self) -> f32 {
        self.ascent + self.descent
    }
}

/// Measures caption text for layout and painting.
pub trait TextMetrics: Send + Sync {
    /// The bounding box of `text` rendered in `font`.
    fn measure(&self, text: &str, font: &Font) -> Size;

    /// The vertical metrics of `font`.
    fn metrics(&self, font: &Font) -> FontMetrics;
}

/// Deterministic, size-proportional text metrics.
///
/// Ascent and descent are fixed fractions of the font size and glyph
/// advances are a fixed fraction per character. This is the same model a
/// shaper falls back to when face metrics are unavailable; it is exact
/// enough for layout and makes geometry tests reproducible on any
/// machine.
#[derive(Debug, Clone, Copy)]
pub struct ScaledMetrics {
    /// Ascent as a fraction of font size.
    pub ascent_ratio: f32,
    /// Descent as a fraction of font size.
    pub descent_ratio: f32,
    /// Horizontal advance per character as a fraction of font size.
    pub advance_ratio: f32,
}

impl Default for ScaledMetrics {
    fn default() -> Self {
        Self {
            ascent_ratio: 0.8,
            descent_ratio: 0.2,
            advance_ratio: 0.6,
        }
    }
}

impl TextMetrics for ScaledMetrics {
    fn measure(&self, text: &str, font: &Font) -> Size {
        let chars = text.chars().count() as f32;
        Size::new(
            chars * font.size * self.advance_ratio,
            font.size * (self.ascent_ratio + self.descent_ratio),
        )
    }

    fn metrics(&self, font: &Font) -> FontMetrics {
        FontMetrics {
            ascent: font.size * self.ascent_ratio,
            descent: font.size * self.descent_ratio,
        }
    }
}
