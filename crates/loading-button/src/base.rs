//! Common widget state shared by all widget implementations.

use loading_button_core::Signal;
use loading_button_render::{Point, Rect, Size};

/// State every widget carries: geometry, visibility, enabled flag, and
/// the repaint bookkeeping the host's draw pass consumes.
///
/// Widget types embed a `WidgetBase` and expose it through
/// [`Widget::widget_base`](crate::traits::Widget::widget_base).
pub struct WidgetBase {
    /// Position and size in the host's coordinate space.
    geometry: Rect,
    visible: bool,
    enabled: bool,
    /// Set by [`update`](Self::update), cleared by the host after paint.
    needs_repaint: bool,
    /// Emitted when position or size changes.
    pub geometry_changed: Signal<Rect>,
    /// Emitted when the enabled flag changes.
    pub enabled_changed: Signal<bool>,
}

impl WidgetBase {
    pub fn new() -> Self {
        Self {
            geometry: Rect::ZERO,
            visible: true,
            enabled: true,
            needs_repaint: false,
            geometry_changed: Signal::new(),
            enabled_changed: Signal::new(),
        }
    }

    /// The widget's geometry in the host's coordinate space.
    #[inline]
    pub fn geometry(&self) -> Rect {
        self.geometry
    }

    /// The widget's rectangle in its own coordinate space (origin zero).
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.geometry.width(), self.geometry.height())
    }

    /// The widget's size.
    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.geometry.width(), self.geometry.height())
    }

    /// Move and resize the widget.
    pub fn set_geometry(&mut self, geometry: Rect) {
        if self.geometry == geometry {
            return;
        }
        self.geometry = geometry;
        self.geometry_changed.emit(geometry);
        self.update();
    }

    /// Resize the widget, keeping its position.
    pub fn resize(&mut self, width: f32, height: f32) {
        let origin = Point::new(self.geometry.left(), self.geometry.top());
        self.set_geometry(Rect::new(origin.x, origin.y, width, height));
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        if self.visible != visible {
            self.visible = visible;
            self.update();
        }
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            self.enabled = enabled;
            self.enabled_changed.emit(enabled);
            self.update();
        }
    }

    /// Schedule a repaint. The host polls
    /// [`needs_repaint`](Self::needs_repaint) and repaints dirty widgets
    /// on its next frame.
    #[inline]
    pub fn update(&mut self) {
        self.needs_repaint = true;
    }

    #[inline]
    pub fn needs_repaint(&self) -> bool {
        self.needs_repaint
    }

    /// Called by the host once the widget has been repainted.
    #[inline]
    pub fn clear_repaint_flag(&mut self) {
        self.needs_repaint = false;
    }
}

impl Default for WidgetBase {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for WidgetBase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WidgetBase")
            .field("geometry", &self.geometry)
            .field("visible", &self.visible)
            .field("enabled", &self.enabled)
            .field("needs_repaint", &self.needs_repaint)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_defaults() {
        let base = WidgetBase::new();
        assert_eq!(base.geometry(), Rect::ZERO);
        assert!(base.is_visible());
        assert!(base.is_enabled());
        assert!(!base.needs_repaint());
    }

    #[test]
    fn test_resize_keeps_position() {
        let mut base = WidgetBase::new();
        base.set_geometry(Rect::new(10.0, 20.0, 100.0, 40.0));
        base.resize(200.0, 80.0);

        assert_eq!(base.geometry(), Rect::new(10.0, 20.0, 200.0, 80.0));
        assert_eq!(base.rect(), Rect::new(0.0, 0.0, 200.0, 80.0));
    }

    #[test]
    fn test_geometry_change_emits_and_dirties() {
        let mut base = WidgetBase::new();
        let count = Arc::new(AtomicU32::new(0));
        let count_clone = count.clone();
        base.geometry_changed.connect(move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        base.set_geometry(Rect::new(0.0, 0.0, 50.0, 50.0));
        assert!(base.needs_repaint());
        base.clear_repaint_flag();

        // Same geometry again is a no-op.
        base.set_geometry(Rect::new(0.0, 0.0, 50.0, 50.0));
        assert!(!base.needs_repaint());
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_enabled_change_emits() {
        let mut base = WidgetBase::new();
        let count = Arc::new(AtomicU32::new(0));
        let count_clone = count.clone();
        base.enabled_changed.connect(move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        base.set_enabled(false);
        base.set_enabled(false);
        base.set_enabled(true);
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_update_and_clear() {
        let mut base = WidgetBase::new();
        base.update();
        assert!(base.needs_repaint());
        base.clear_repaint_flag();
        assert!(!base.needs_repaint());
    }
}
