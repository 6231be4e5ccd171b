//! A self-drawing loading button widget.
//!
//! [`LoadingButton`] is a rectangular button that, while a long-running
//! action is in flight, overlays an animated progress layer and a
//! sweeping circular arc and swaps its caption from an idle label to a
//! loading label.
//!
//! The widget is host-agnostic. The host supplies three things:
//!
//! - a layout pass that calls [`LoadingButton::measure`] with
//!   [`MeasureSpec`] constraints,
//! - a draw pass that calls [`LoadingButton::render`] with a
//!   [`Renderer`](loading_button_render::Renderer) backed surface,
//! - a frame scheduler that calls [`LoadingButton::tick`] while the
//!   button is loading, and repaints whenever the button emits
//!   `redraw_requested`.
//!
//! State is driven through the single entry point
//! [`LoadingButton::set_state`]:
//!
//! ```
//! use std::sync::Arc;
//! use loading_button::{ButtonState, ButtonStyle, LoadingButton, MeasureSpec};
//! use loading_button_core::ManualClock;
//! use loading_button_render::{Color, RecordingRenderer};
//!
//! let clock = Arc::new(ManualClock::new());
//! let style = ButtonStyle::new()
//!     .with_base_color(Color::from_rgb8(0, 96, 166))
//!     .with_idle_label("Download")
//!     .with_loading_label("We are loading");
//!
//! let mut button = LoadingButton::new(style, clock);
//! button.measure(MeasureSpec::Exactly(300.0), MeasureSpec::Exactly(100.0));
//!
//! button.set_state(ButtonState::Loading);
//!
//! let mut surface = RecordingRenderer::new();
//! button.render(Some(&mut surface));
//! ```

pub mod base;
pub mod layout;
pub mod state;
pub mod style;
pub mod traits;
pub mod widget;

pub use base::WidgetBase;
pub use layout::{MeasureSpec, Padding, SizeHint, SizePolicy, SizePolicyPair};
pub use state::{ButtonState, StateMachine};
pub use style::{ButtonStyle, StyleError};
pub use traits::{PaintContext, Widget};
pub use widget::LoadingButton;
