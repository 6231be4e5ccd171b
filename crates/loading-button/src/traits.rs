//! The widget trait and the paint context handed to paint routines.

use loading_button_render::{Rect, Renderer};

use crate::base::WidgetBase;
use crate::layout::{SizeHint, SizePolicyPair};

/// Everything a paint routine needs for one draw: the target surface and
/// the widget's rectangle in local coordinates.
pub struct PaintContext<'a> {
    renderer: &'a mut dyn Renderer,
    widget_rect: Rect,
}

impl<'a> PaintContext<'a> {
    pub fn new(renderer: &'a mut dyn Renderer, widget_rect: Rect) -> Self {
        Self {
            renderer,
            widget_rect,
        }
    }

    /// The widget's rectangle, origin at zero.
    #[inline]
    pub fn rect(&self) -> Rect {
        self.widget_rect
    }

    /// The widget's width.
    #[inline]
    pub fn width(&self) -> f32 {
        self.widget_rect.width()
    }

    /// The widget's height.
    #[inline]
    pub fn height(&self) -> f32 {
        self.widget_rect.height()
    }

    /// The surface to draw on.
    #[inline]
    pub fn renderer(&mut self) -> &mut dyn Renderer {
        self.renderer
    }

    /// The effective clip: the renderer's clip if one is set, otherwise
    /// the widget's own rectangle.
    pub fn clip(&self) -> Rect {
        self.renderer.clip_bounds().unwrap_or(self.widget_rect)
    }
}

/// A paintable, measurable widget.
///
/// Implementors embed a [`WidgetBase`] and expose it through
/// [`widget_base`](Widget::widget_base); geometry, visibility, and
/// repaint state all come for free through the default methods.
pub trait Widget {
    fn widget_base(&self) -> &WidgetBase;

    fn widget_base_mut(&mut self) -> &mut WidgetBase;

    /// Preferred and minimum sizes for the host's layout pass.
    fn size_hint(&self) -> SizeHint;

    /// How the widget trades space with its siblings.
    fn size_policy(&self) -> SizePolicyPair {
        SizePolicyPair::default()
    }

    /// Draw the widget into the context.
    fn paint(&self, ctx: &mut PaintContext<'_>);

    fn rect(&self) -> Rect {
        self.widget_base().rect()
    }

    fn is_visible(&self) -> bool {
        self.widget_base().is_visible()
    }

    fn is_enabled(&self) -> bool {
        self.widget_base().is_enabled()
    }

    fn needs_repaint(&self) -> bool {
        self.widget_base().needs_repaint()
    }

    fn update(&mut self) {
        self.widget_base_mut().update();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loading_button_render::RecordingRenderer;

    #[test]
    fn test_clip_defaults_to_widget_rect() {
        let mut renderer = RecordingRenderer::new();
        let rect = Rect::new(0.0, 0.0, 120.0, 48.0);
        let ctx = PaintContext::new(&mut renderer, rect);
        assert_eq!(ctx.clip(), rect);
    }

    #[test]
    fn test_clip_follows_renderer_clip() {
        let mut renderer = RecordingRenderer::new();
        renderer.clip_rect(Rect::new(10.0, 10.0, 20.0, 20.0));
        let ctx = PaintContext::new(&mut renderer, Rect::new(0.0, 0.0, 120.0, 48.0));
        assert_eq!(ctx.clip(), Rect::new(10.0, 10.0, 20.0, 20.0));
    }

    #[test]
    fn test_dimension_accessors() {
        let mut renderer = RecordingRenderer::new();
        let ctx = PaintContext::new(&mut renderer, Rect::new(0.0, 0.0, 300.0, 100.0));
        assert_eq!(ctx.width(), 300.0);
        assert_eq!(ctx.height(), 100.0);
    }
}
