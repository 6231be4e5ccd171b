//! The 2D drawing interface.
//!
//! [`Renderer`] is the small surface the widget paints against. A host
//! backs it with its real drawing stack; [`RecordingRenderer`] backs it
//! with a command list, which is what the tests (and headless capture)
//! use to assert exactly what was drawn.

use crate::text::Font;
use crate::types::{Color, Point, Rect};

/// Horizontal anchoring of drawn text relative to its anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    /// The anchor is the left edge of the text.
    #[default]
    Left,
    /// The anchor is the horizontal center of the text.
    Center,
    /// The anchor is the right edge of the text.
    Right,
}

/// The drawing operations the widget needs.
///
/// All coordinates are in the widget's local space. Angles are in
/// degrees, measured clockwise from the positive x axis (3 o'clock).
pub trait Renderer {
    /// Fill a rectangle with a solid color.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Fill a pie slice (a circular sector including the center point).
    ///
    /// The full ellipse is inscribed in `bounds`; the slice starts at
    /// `start_angle` and extends clockwise through `sweep_angle` degrees.
    fn fill_pie(&mut self, bounds: Rect, start_angle: f32, sweep_angle: f32, color: Color);

    /// Draw a single line of text.
    ///
    /// `anchor.y` is the text baseline; `anchor.x` is interpreted
    /// according to `align`.
    fn fill_text(&mut self, text: &str, anchor: Point, font: &Font, align: TextAlign, color: Color);

    /// Intersect the clip region with `rect`.
    fn clip_rect(&mut self, rect: Rect);

    /// The current clip rectangle, or `None` if no clip is active.
    fn clip_bounds(&self) -> Option<Rect>;
}

/// A single recorded drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect {
        rect: Rect,
        color: Color,
    },
    FillPie {
        bounds: Rect,
        start_angle: f32,
        sweep_angle: f32,
        color: Color,
    },
    FillText {
        text: String,
        anchor: Point,
        font: Font,
        align: TextAlign,
        color: Color,
    },
}

/// A renderer that records draw commands instead of rasterizing.
///
/// Commands are stored in issue order, so tests can assert both layer
/// ordering and exact geometry.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    commands: Vec<DrawCommand>,
    clip: Option<Rect>,
}

impl RecordingRenderer {
    /// Create an empty recorder with no active clip.
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded commands, in issue order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Discard all recorded commands and the clip.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.clip = None;
    }
}

impl Renderer for RecordingRenderer {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn fill_pie(&mut self, bounds: Rect, start_angle: f32, sweep_angle: f32, color: Color) {
        self.commands.push(DrawCommand::FillPie {
            bounds,
            start_angle,
            sweep_angle,
            color,
        });
    }

    fn fill_text(&mut self, text: &str, anchor: Point, font: &Font, align: TextAlign, color: Color) {
        self.commands.push(DrawCommand::FillText {
            text: text.to_string(),
            anchor,
            font: font.clone(),
            align,
            color,
        });
    }

    fn clip_rect(&mut self, rect: Rect) {
        self.clip = match self.clip {
            Some(current) => Some(current.intersect(&rect).unwrap_or(Rect::ZERO)),
            None => Some(rect),
        };
    }

    fn clip_bounds(&self) -> Option<Rect> {
        self.clip
    }
}
