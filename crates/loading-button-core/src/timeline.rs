//! Repeating progress timeline.
//!
//! [`ProgressTimeline`] is the animation driver behind the loading
//! button's progress layers. While running it maps elapsed clock time to
//! a linear progress ramp in `[0, 1]` that wraps around every period
//! (infinite repeat). It holds no timer of its own: the host's frame
//! scheduler calls [`tick`](ProgressTimeline::tick) once per frame, which
//! makes cancellation ordering explicit and lets tests drive it with a
//! [`ManualClock`](crate::ManualClock).

use std::sync::Arc;
use std::time::Duration;

use crate::clock::Clock;
use crate::signal::Signal;

/// Default length of one full progress ramp.
pub const DEFAULT_PERIOD: Duration = Duration::from_millis(2000);

/// Defensive floor for the ramp period.
///
/// A zero period would make the progress mapping divide by zero, so
/// anything shorter than one frame is clamped up to this.
pub const MIN_PERIOD: Duration = Duration::from_millis(16);

/// A stoppable, repeating linear progress ramp.
///
/// The emitted value ramps from 0 toward 1 over one period, then wraps
/// back to 0 and repeats until [`stop`](Self::stop) is called. Stopping
/// is synchronous: once `stop` returns, any tick that was already
/// scheduled by the host observes a stopped timeline and emits nothing.
pub struct ProgressTimeline {
    /// Length of one full ramp.
    period: Duration,
    /// The time source to sample on each tick.
    clock: Arc<dyn Clock>,
    /// Clock time at which the ramp started, `None` while stopped.
    started_at: Option<Duration>,
    /// Signal emitted with the clamped progress value on every tick.
    pub ticked: Signal<f32>,
}

impl ProgressTimeline {
    /// Create a stopped timeline with the default period.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            period: DEFAULT_PERIOD,
            clock,
            started_at: None,
            ticked: Signal::new(),
        }
    }

    /// Create a stopped timeline with a custom period.
    ///
    /// Periods shorter than [`MIN_PERIOD`] are floored to it.
    pub fn with_period(clock: Arc<dyn Clock>, period: Duration) -> Self {
        let period = if period < MIN_PERIOD {
            tracing::warn!(
                target: "loading_button_core::timeline",
                requested_ms = period.as_millis() as u64,
                floor_ms = MIN_PERIOD.as_millis() as u64,
                "timeline period below floor, clamping"
            );
            MIN_PERIOD
        } else {
            period
        };

        Self {
            period,
            clock,
            started_at: None,
            ticked: Signal::new(),
        }
    }

    /// Get the ramp period.
    #[inline]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Check whether the timeline is running.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Start (or restart) the ramp at the clock's current time.
    ///
    /// Calling `start` on a running timeline restarts the ramp from the
    /// current instant.
    pub fn start(&mut self) {
        let now = self.clock.now();
        if self.started_at.is_some() {
            tracing::debug!(
                target: "loading_button_core::timeline",
                "start() on a running timeline, restarting ramp"
            );
        }
        self.started_at = Some(now);
        tracing::trace!(
            target: "loading_button_core::timeline",
            at_ms = now.as_millis() as u64,
            period_ms = self.period.as_millis() as u64,
            "timeline started"
        );
    }

    /// Stop the ramp.
    ///
    /// Synchronous: after this returns, [`tick`](Self::tick) returns
    /// `None` and emits nothing, even for a frame that was already
    /// scheduled before the stop.
    pub fn stop(&mut self) {
        if self.started_at.take().is_some() {
            tracing::trace!(
                target: "loading_button_core::timeline",
                "timeline stopped"
            );
        }
    }

    /// Sample the clock and emit the current progress.
    ///
    /// Returns the emitted value, or `None` if the timeline is stopped.
    /// Each call emits at most once through [`ticked`](Self::ticked).
    pub fn tick(&self) -> Option<f32> {
        let progress = self.progress()?;
        self.ticked.emit(progress);
        Some(progress)
    }

    /// The current progress in `[0, 1]`, or `None` while stopped.
    ///
    /// Does not emit; use [`tick`](Self::tick) for the emitting variant.
    pub fn progress(&self) -> Option<f32> {
        let started_at = self.started_at?;
        let elapsed = self.clock.now().saturating_sub(started_at);

        let period = self.period.as_secs_f32();
        let wrapped = elapsed.as_secs_f32() % period;

        Some((wrapped / period).clamp(0.0, 1.0))
    }
}

impl std::fmt::Debug for ProgressTimeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressTimeline")
            .field("period", &self.period)
            .field("running", &self.is_running())
            .finish()
    }
}

static_assertions::assert_impl_all!(ProgressTimeline: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn timeline() -> (Arc<ManualClock>, ProgressTimeline) {
        let clock = Arc::new(ManualClock::new());
        let timeline = ProgressTimeline::new(clock.clone() as Arc<dyn Clock>);
        (clock, timeline)
    }

    #[test]
    fn test_stopped_timeline_does_not_tick() {
        let (_clock, timeline) = timeline();
        assert!(!timeline.is_running());
        assert_eq!(timeline.tick(), None);
    }

    #[test]
    fn test_linear_ramp() {
        let (clock, mut timeline) = timeline();
        timeline.start();

        assert_eq!(timeline.tick(), Some(0.0));

        clock.advance(Duration::from_millis(500));
        assert_eq!(timeline.tick(), Some(0.25));

        clock.advance(Duration::from_millis(500));
        assert_eq!(timeline.tick(), Some(0.5));
    }

    #[test]
    fn test_ramp_wraps_after_period() {
        let (clock, mut timeline) = timeline();
        timeline.start();

        clock.advance(Duration::from_millis(2000));
        assert_eq!(timeline.tick(), Some(0.0));

        clock.advance(Duration::from_millis(2500));
        assert_eq!(timeline.tick(), Some(0.25));
    }

    #[test]
    fn test_progress_stays_in_unit_interval() {
        let (clock, mut timeline) = timeline();
        timeline.start();

        for _ in 0..100 {
            clock.advance(Duration::from_millis(137));
            let p = timeline.tick().unwrap();
            assert!((0.0..=1.0).contains(&p), "progress {p} out of range");
        }
    }

    #[test]
    fn test_stop_is_synchronous() {
        let (clock, mut timeline) = timeline();
        timeline.start();
        clock.advance(Duration::from_millis(700));
        assert!(timeline.tick().is_some());

        timeline.stop();

        // A frame that was already scheduled must observe the stop.
        assert_eq!(timeline.tick(), None);
        clock.advance(Duration::from_millis(100));
        assert_eq!(timeline.tick(), None);
    }

    #[test]
    fn test_stop_does_not_emit() {
        let (clock, mut timeline) = timeline();
        let emissions = Arc::new(AtomicU32::new(0));
        let emissions_clone = emissions.clone();
        timeline.ticked.connect(move |_| {
            emissions_clone.fetch_add(1, Ordering::SeqCst);
        });

        timeline.start();
        timeline.tick();
        timeline.stop();
        clock.advance(Duration::from_millis(100));
        timeline.tick();

        assert_eq!(emissions.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_restart_while_running_restarts_ramp() {
        let (clock, mut timeline) = timeline();
        timeline.start();
        clock.advance(Duration::from_millis(1000));
        assert_eq!(timeline.tick(), Some(0.5));

        timeline.start();
        assert_eq!(timeline.tick(), Some(0.0));

        clock.advance(Duration::from_millis(500));
        assert_eq!(timeline.tick(), Some(0.25));
    }

    #[test]
    fn test_each_tick_emits_exactly_once() {
        let (clock, mut timeline) = timeline();
        let emissions = Arc::new(AtomicU32::new(0));
        let emissions_clone = emissions.clone();
        timeline.ticked.connect(move |_| {
            emissions_clone.fetch_add(1, Ordering::SeqCst);
        });

        timeline.start();
        for _ in 0..5 {
            clock.advance(Duration::from_millis(100));
            timeline.tick();
        }

        assert_eq!(emissions.load(Ordering::SeqCst), 5);
    }

    #[test]
    fn test_zero_period_is_floored() {
        let clock = Arc::new(ManualClock::new());
        let timeline = ProgressTimeline::with_period(clock, Duration::ZERO);
        assert_eq!(timeline.period(), MIN_PERIOD);
    }

    #[test]
    fn test_custom_period() {
        let clock = Arc::new(ManualClock::new());
        let mut timeline =
            ProgressTimeline::with_period(clock.clone() as Arc<dyn Clock>, Duration::from_secs(4));
        timeline.start();
        clock.advance(Duration::from_secs(1));
        assert_eq!(timeline.tick(), Some(0.25));
    }
}
