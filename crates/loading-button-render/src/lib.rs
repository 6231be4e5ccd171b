//! Drawing primitives for the loading button widget.
//!
//! This crate defines what the widget draws with, not where the pixels
//! end up:
//!
//! - [`types`] — points, sizes, rectangles, and colors
//! - [`renderer`] — the [`Renderer`] trait the widget paints against,
//!   plus [`RecordingRenderer`] which captures draw commands for tests
//!   and headless capture
//! - [`text`] — fonts and the [`TextMetrics`] trait used to measure
//!   caption text and place baselines
//!
//! A host integrates by implementing [`Renderer`] on top of its own
//! drawing surface.

pub mod renderer;
pub mod text;
pub mod types;

pub use renderer::{DrawCommand, RecordingRenderer, Renderer, TextAlign};
pub use text::{Font, FontFamily, FontMetrics, ScaledMetrics, TextMetrics};
pub use types::{Color, Point, Rect, Size};
