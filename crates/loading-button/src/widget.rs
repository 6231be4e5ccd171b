//! The loading button widget.

use std::sync::Arc;

use loading_button_core::{Clock, Signal};
use loading_button_render::{
    Point, Rect, Renderer, ScaledMetrics, Size, TextAlign, TextMetrics,
};

use crate::base::WidgetBase;
use crate::layout::{MeasureSpec, Padding, SizeHint, SizePolicy, SizePolicyPair};
use crate::state::{ButtonState, StateMachine};
use crate::style::ButtonStyle;
use crate::traits::{PaintContext, Widget};

/// A rectangular button that animates a progress overlay and a sweeping
/// arc while a long-running action is in flight.
///
/// The host drives it through three entry points: [`set_state`] for
/// transitions, [`measure`] from its layout pass, and [`render`] from
/// its draw pass, plus [`tick`] once per frame while loading.
///
/// [`set_state`]: LoadingButton::set_state
/// [`measure`]: LoadingButton::measure
/// [`render`]: LoadingButton::render
/// [`tick`]: LoadingButton::tick
pub struct LoadingButton {
    base: WidgetBase,
    style: ButtonStyle,
    machine: StateMachine,
    metrics: Box<dyn TextMetrics>,
    padding: Padding,
    /// Intrinsic minimum content width, before padding.
    min_width: f32,
}

impl LoadingButton {
    /// Create a button with the given style and time source.
    ///
    /// The button starts in [`ButtonState::Completed`] with zero
    /// geometry; the host's first layout pass sizes it.
    pub fn new(style: ButtonStyle, clock: Arc<dyn Clock>) -> Self {
        Self {
            base: WidgetBase::new(),
            style,
            machine: StateMachine::new(clock),
            metrics: Box::new(ScaledMetrics::default()),
            padding: Padding::default(),
            min_width: 0.0,
        }
    }

    /// Replace the text measurement backend.
    pub fn with_metrics(mut self, metrics: impl TextMetrics + 'static) -> Self {
        self.metrics = Box::new(metrics);
        self
    }

    /// Set the interior padding.
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    /// Set the intrinsic minimum content width.
    pub fn with_min_width(mut self, min_width: f32) -> Self {
        self.min_width = min_width;
        self
    }

    /// The button's style.
    #[inline]
    pub fn style(&self) -> &ButtonStyle {
        &self.style
    }

    /// The current state.
    #[inline]
    pub fn state(&self) -> ButtonState {
        self.machine.state()
    }

    /// The current animation progress in `[0, 1]`.
    #[inline]
    pub fn progress(&self) -> f32 {
        self.machine.progress()
    }

    /// Whether the button currently accepts activation.
    #[inline]
    pub fn is_interactive(&self) -> bool {
        self.machine.is_interactive()
    }

    /// Emitted whenever the button's visual output may have changed.
    /// The host connects its repaint scheduling here.
    #[inline]
    pub fn redraw_requested(&self) -> &Signal<()> {
        &self.machine.redraw_requested
    }

    /// Emitted after every effective state transition.
    #[inline]
    pub fn state_changed(&self) -> &Signal<ButtonState> {
        &self.machine.state_changed
    }

    /// Request a state change. Returns whether the transition was
    /// effective; requesting the current state changes nothing.
    pub fn set_state(&mut self, state: ButtonState) -> bool {
        let changed = self.machine.set_state(state);
        if changed {
            self.base.set_enabled(self.machine.is_interactive());
            self.base.update();
        }
        changed
    }

    /// Advance the animation by one host frame. Marks the widget dirty
    /// when the progress moved; inert unless the button is loading.
    pub fn tick(&mut self) -> Option<f32> {
        let progress = self.machine.tick();
        if progress.is_some() {
            self.base.update();
        }
        progress
    }

    /// Resolve the host's layout constraints and store the result as the
    /// widget's size.
    ///
    /// The width minimum is padding plus the intrinsic minimum width.
    /// The height minimum is the resolved width, not an independent
    /// height: that coupling is part of the widget's layout contract.
    pub fn measure(&mut self, width_spec: MeasureSpec, height_spec: MeasureSpec) -> Size {
        let min_width = self.padding.horizontal() + self.min_width;
        let width = width_spec.resolve(min_width);
        let height = height_spec.resolve(width);

        tracing::trace!(
            target: "loading_button::widget",
            width,
            height,
            "measured"
        );
        self.base.resize(width, height);
        Size::new(width, height)
    }

    /// Draw the button onto `surface`. An absent surface is a no-op, not
    /// an error. Clears the repaint flag after drawing.
    pub fn render(&mut self, surface: Option<&mut dyn Renderer>) {
        let Some(renderer) = surface else {
            tracing::trace!(target: "loading_button::widget", "render skipped, no surface");
            return;
        };

        let rect = self.base.rect();
        let mut ctx = PaintContext::new(renderer, rect);
        self.paint(&mut ctx);
        self.base.clear_repaint_flag();
    }
}

impl Widget for LoadingButton {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn size_hint(&self) -> SizeHint {
        let caption = self.metrics.measure(&self.style.idle_label, &self.style.font);
        let line = self.metrics.metrics(&self.style.font).line_height();

        let min_width = self.padding.horizontal() + self.min_width;
        let preferred_width = min_width.max(self.padding.horizontal() + caption.width);
        let preferred_height = self.padding.vertical() + line;

        SizeHint::from_dimensions(preferred_width, preferred_height)
            .with_minimum_dimensions(min_width, line)
    }

    fn size_policy(&self) -> SizePolicyPair {
        SizePolicyPair::new(SizePolicy::Expanding, SizePolicy::Preferred)
    }

    /// Paint the four layers in their fixed order: base rectangle,
    /// progress overlay, progress arc, caption.
    fn paint(&self, ctx: &mut PaintContext<'_>) {
        let width = ctx.width();
        let height = ctx.height();
        let clip = ctx.clip();
        let progress = self.machine.progress();

        ctx.renderer()
            .fill_rect(Rect::new(0.0, 0.0, width, height), self.style.base_color);

        // Overlay width is truncated to whole pixels, never rounded up.
        let overlay_width = (width * progress).trunc();
        ctx.renderer().fill_rect(
            Rect::new(0.0, 0.0, overlay_width, height),
            self.style.overlay_color,
        );

        // The arc rides just right of the loading caption, sized from
        // that caption's bounds at an exact 2/3 scale, and is centered in
        // the effective clip rather than the widget bounds.
        let text = self
            .metrics
            .measure(&self.style.loading_label, &self.style.font);
        let (tw, th) = (text.width, text.height);
        let (cw, ch) = (clip.width(), clip.height());
        let arc_box = Rect::from_edges(
            cw / 2.0 + tw / 1.5 - th / 1.5,
            ch / 2.0 - th / 1.5,
            cw / 2.0 + tw / 1.5 + th / 1.5,
            ch / 2.0 + th / 1.5,
        );
        ctx.renderer()
            .fill_pie(arc_box, 0.0, progress * 360.0, self.style.arc_color);

        let caption = if self.machine.state() == ButtonState::Loading {
            &self.style.loading_label
        } else {
            &self.style.idle_label
        };
        let fm = self.metrics.metrics(&self.style.font);
        let baseline = height / 2.0 + (fm.ascent - fm.descent) / 2.0;
        ctx.renderer().fill_text(
            caption,
            Point::new(width / 2.0, baseline),
            &self.style.font,
            TextAlign::Center,
            self.style.text_color,
        );
    }
}

impl std::fmt::Debug for LoadingButton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadingButton")
            .field("base", &self.base)
            .field("machine", &self.machine)
            .field("padding", &self.padding)
            .field("min_width", &self.min_width)
            .finish()
    }
}

static_assertions::assert_impl_all!(LoadingButton: Send, Sync);
