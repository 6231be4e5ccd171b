//! The button's immutable style descriptor.
//!
//! Style is resolved once by the host (from its theme or resource
//! system) and handed to the widget at construction. The widget never
//! mutates it; the paint routine reads colors and captions from it every
//! frame. Absent values are not errors: colors default to the zero
//! (transparent) color and captions to empty strings.

use loading_button_render::{Color, Font};
use thiserror::Error;

/// Errors from building a style out of untrusted inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    /// A color string could not be parsed as hex.
    #[error("invalid color string: {0:?}")]
    InvalidColor(String),
}

/// Colors and captions for a [`LoadingButton`](crate::LoadingButton).
///
/// Four colors (base rectangle, progress overlay, progress arc, caption
/// text), two captions (idle and loading), and the caption font.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ButtonStyle {
    /// Fill of the base rectangle.
    pub base_color: Color,
    /// Fill of the progress overlay rectangle.
    pub overlay_color: Color,
    /// Fill of the progress arc.
    pub arc_color: Color,
    /// Fill of the caption text.
    pub text_color: Color,
    /// Caption shown while idle or completed.
    pub idle_label: String,
    /// Caption shown while loading.
    pub loading_label: String,
    /// Font used for the caption.
    pub font: Font,
}

impl ButtonStyle {
    /// Create a style with all values absent: transparent colors, empty
    /// captions, default font.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base rectangle color.
    pub fn with_base_color(mut self, color: Color) -> Self {
        self.base_color = color;
        self
    }

    /// Set the progress overlay color.
    pub fn with_overlay_color(mut self, color: Color) -> Self {
        self.overlay_color = color;
        self
    }

    /// Set the progress arc color.
    pub fn with_arc_color(mut self, color: Color) -> Self {
        self.arc_color = color;
        self
    }

    /// Set the caption text color.
    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    /// Set the idle caption.
    pub fn with_idle_label(mut self, label: impl Into<String>) -> Self {
        self.idle_label = label.into();
        self
    }

    /// Set the loading caption.
    pub fn with_loading_label(mut self, label: impl Into<String>) -> Self {
        self.loading_label = label.into();
        self
    }

    /// Set the caption font.
    pub fn with_font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    /// Build the four colors from hex strings.
    ///
    /// This is the entry point for hosts that load colors from textual
    /// resources. Unlike the builder methods, a malformed string here is
    /// a reportable error rather than a silent default.
    pub fn from_hex_colors(
        base: &str,
        overlay: &str,
        arc: &str,
        text: &str,
    ) -> Result<Self, StyleError> {
        let parse =
            |s: &str| Color::from_hex(s).ok_or_else(|| StyleError::InvalidColor(s.to_string()));

        Ok(Self::new()
            .with_base_color(parse(base)?)
            .with_overlay_color(parse(overlay)?)
            .with_arc_color(parse(arc)?)
            .with_text_color(parse(text)?))
    }
}
