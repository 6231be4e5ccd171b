//! Core systems for the loading button widget.
//!
//! This crate holds the pieces that have no knowledge of pixels:
//!
//! - [`Signal`] — a Qt-style signal/slot mechanism used for change
//!   notification (redraw requests, state changes, animation ticks)
//! - [`Clock`] — a time source abstraction so animations can run against
//!   real monotonic time in production and virtual time in tests
//! - [`ProgressTimeline`] — a repeating, linearly interpolated progress
//!   ramp driven by the host's frame scheduler
//!
//! The widget layer lives in the `loading-button` crate and the drawing
//! primitives in `loading-button-render`.

pub mod clock;
pub mod error;
pub mod logging;
pub mod signal;
pub mod timeline;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use error::SignalError;
pub use signal::{ConnectionId, Signal};
pub use timeline::{ProgressTimeline, DEFAULT_PERIOD, MIN_PERIOD};
