//! The button state machine.
//!
//! [`StateMachine`] owns the current [`ButtonState`], the animation
//! timeline, and the progress value, and applies transition side effects
//! synchronously inside [`set_state`](StateMachine::set_state). This
//! replaces the observable-property-with-side-effects pattern with an
//! explicit object whose transitions can be unit tested.

use std::sync::Arc;
use std::time::Duration;

use loading_button_core::{Clock, ProgressTimeline, Signal, DEFAULT_PERIOD};

/// The widget's current mode.
///
/// All states are mutually reachable; the machine accepts any requested
/// state at any time and the caller is responsible for meaningful
/// sequencing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ButtonState {
    /// Transient marker set by the host when the button is activated.
    ///
    /// Observably identical to the preceding state apart from the state
    /// flag itself; it exists for external callers to react to.
    Clicked,
    /// A long-running action is in flight: the progress layers animate
    /// and the button is not interactive.
    Loading,
    /// Idle / terminal state. The default at construction.
    #[default]
    Completed,
}

/// Holds the current state and applies transition side effects.
///
/// The animation timeline is exclusively owned by the machine and is
/// replaced with a fresh one each time a new `Loading` phase begins, so
/// a stopped phase can never leak ticks into the next one.
pub struct StateMachine {
    /// Current state.
    state: ButtonState,
    /// Animation progress in `[0, 1]`; 0 unless `Loading` is current.
    progress: f32,
    /// Whether the button accepts activation. False iff `Loading`.
    interactive: bool,
    /// Time source handed to each new timeline.
    clock: Arc<dyn Clock>,
    /// Ramp period for new timelines.
    period: Duration,
    /// The current animation timeline.
    timeline: ProgressTimeline,
    /// Emitted after every effective state transition.
    pub state_changed: Signal<ButtonState>,
    /// Emitted whenever the widget's visual output may have changed.
    pub redraw_requested: Signal<()>,
}

impl StateMachine {
    /// Create a machine in the `Completed` state with the default
    /// animation period.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self::with_period(clock, DEFAULT_PERIOD)
    }

    /// Create a machine with a custom animation period.
    pub fn with_period(clock: Arc<dyn Clock>, period: Duration) -> Self {
        let timeline = ProgressTimeline::with_period(clock.clone(), period);
        Self {
            state: ButtonState::default(),
            progress: 0.0,
            interactive: true,
            clock,
            period,
            timeline,
            state_changed: Signal::new(),
            redraw_requested: Signal::new(),
        }
    }

    /// The current state.
    #[inline]
    pub fn state(&self) -> ButtonState {
        self.state
    }

    /// The current animation progress in `[0, 1]`.
    #[inline]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Whether the button currently accepts activation.
    #[inline]
    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// Whether the animation timeline is running.
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.timeline.is_running()
    }

    /// Request a state change.
    ///
    /// Requesting the current state is a no-op: no side effects, no
    /// redraw. Otherwise the state is changed, the transition's side
    /// effects are applied synchronously, and one redraw is requested.
    /// Returns whether the transition was effective.
    pub fn set_state(&mut self, new_state: ButtonState) -> bool {
        if self.state == new_state {
            return false;
        }

        tracing::debug!(
            target: "loading_button::state",
            from = ?self.state,
            to = ?new_state,
            "state transition"
        );
        self.state = new_state;

        match new_state {
            // Marker state: no side effects beyond the flag itself.
            ButtonState::Clicked => {}
            ButtonState::Loading => {
                // A fresh timeline per loading phase; a stopped phase's
                // ticks can never reach this one.
                self.timeline = ProgressTimeline::with_period(self.clock.clone(), self.period);
                self.timeline.start();
                self.interactive = false;
            }
            ButtonState::Completed => {
                // Stop before resetting so no in-flight tick can observe
                // (or overwrite) the reset.
                self.timeline.stop();
                self.progress = 0.0;
                self.interactive = true;
            }
        }

        self.state_changed.emit(new_state);
        self.redraw_requested.emit(());
        true
    }

    /// Advance the animation by one host frame.
    ///
    /// Samples the timeline, stores the new progress, and requests a
    /// redraw. Returns `None` without mutating anything when `Loading`
    /// is not current or the timeline has been stopped.
    pub fn tick(&mut self) -> Option<f32> {
        if self.state != ButtonState::Loading {
            return None;
        }

        let progress = self.timeline.tick()?;
        self.progress = progress;
        self.redraw_requested.emit(());
        Some(progress)
    }
}

impl std::fmt::Debug for StateMachine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateMachine")
            .field("state", &self.state)
            .field("progress", &self.progress)
            .field("interactive", &self.interactive)
            .field("animating", &self.is_animating())
            .finish()
    }
}

static_assertions::assert_impl_all!(StateMachine: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use loading_button_core::ManualClock;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn machine() -> (Arc<ManualClock>, StateMachine) {
        let clock = Arc::new(ManualClock::new());
        let machine = StateMachine::new(clock.clone() as Arc<dyn Clock>);
        (clock, machine)
    }

    fn count_redraws(machine: &StateMachine) -> Arc<AtomicU32> {
        let count = Arc::new(AtomicU32::new(0));
        let count_clone = count.clone();
        machine.redraw_requested.connect(move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });
        count
    }

    #[test]
    fn test_initial_state() {
        let (_clock, machine) = machine();
        assert_eq!(machine.state(), ButtonState::Completed);
        assert_eq!(machine.progress(), 0.0);
        assert!(machine.is_interactive());
        assert!(!machine.is_animating());
    }

    #[test]
    fn test_same_state_is_a_no_op() {
        let (_clock, mut machine) = machine();
        let redraws = count_redraws(&machine);

        assert!(!machine.set_state(ButtonState::Completed));
        assert_eq!(redraws.load(Ordering::SeqCst), 0);

        assert!(machine.set_state(ButtonState::Loading));
        assert!(!machine.set_state(ButtonState::Loading));
        assert_eq!(redraws.load(Ordering::SeqCst), 1);
        assert!(machine.is_animating());
    }

    #[test]
    fn test_loading_disables_interactivity_and_starts_animation() {
        let (_clock, mut machine) = machine();
        machine.set_state(ButtonState::Loading);

        assert_eq!(machine.state(), ButtonState::Loading);
        assert!(!machine.is_interactive());
        assert!(machine.is_animating());
    }

    #[test]
    fn test_tick_updates_progress_while_loading() {
        let (clock, mut machine) = machine();
        machine.set_state(ButtonState::Loading);

        clock.advance(Duration::from_millis(1000));
        assert_eq!(machine.tick(), Some(0.5));
        assert_eq!(machine.progress(), 0.5);
    }

    #[test]
    fn test_completed_resets_progress_and_stops_animation() {
        let (clock, mut machine) = machine();
        machine.set_state(ButtonState::Loading);
        clock.advance(Duration::from_millis(1000));
        machine.tick();
        assert!(machine.progress() > 0.0);

        machine.set_state(ButtonState::Completed);
        assert_eq!(machine.progress(), 0.0);
        assert!(machine.is_interactive());
        assert!(!machine.is_animating());
    }

    #[test]
    fn test_tick_after_completed_is_inert() {
        let (clock, mut machine) = machine();
        machine.set_state(ButtonState::Loading);
        clock.advance(Duration::from_millis(500));
        machine.tick();

        machine.set_state(ButtonState::Completed);
        let redraws = count_redraws(&machine);

        // A frame the host had already scheduled before the transition.
        clock.advance(Duration::from_millis(500));
        assert_eq!(machine.tick(), None);
        assert_eq!(machine.progress(), 0.0);
        assert_eq!(redraws.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_clicked_is_an_inert_marker() {
        let (_clock, mut machine) = machine();
        let redraws = count_redraws(&machine);

        assert!(machine.set_state(ButtonState::Clicked));
        assert_eq!(machine.state(), ButtonState::Clicked);
        assert!(machine.is_interactive());
        assert!(!machine.is_animating());
        assert_eq!(machine.progress(), 0.0);
        // The transition itself still requests one redraw.
        assert_eq!(redraws.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_all_states_mutually_reachable() {
        let (_clock, mut machine) = machine();

        machine.set_state(ButtonState::Loading);
        machine.set_state(ButtonState::Clicked);
        machine.set_state(ButtonState::Loading);
        machine.set_state(ButtonState::Completed);
        machine.set_state(ButtonState::Clicked);
        machine.set_state(ButtonState::Completed);

        assert_eq!(machine.state(), ButtonState::Completed);
    }

    #[test]
    fn test_new_loading_phase_gets_a_fresh_timeline() {
        let (clock, mut machine) = machine();

        machine.set_state(ButtonState::Loading);
        clock.advance(Duration::from_millis(1500));
        assert_eq!(machine.tick(), Some(0.75));

        machine.set_state(ButtonState::Completed);
        machine.set_state(ButtonState::Loading);

        // The replacement timeline starts its ramp from now, not from
        // the previous phase's origin.
        assert_eq!(machine.tick(), Some(0.0));
        clock.advance(Duration::from_millis(500));
        assert_eq!(machine.tick(), Some(0.25));
    }

    #[test]
    fn test_state_changed_signal() {
        let (_clock, mut machine) = machine();
        let seen = Arc::new(AtomicU32::new(0));
        let seen_clone = seen.clone();
        machine.state_changed.connect(move |&state| {
            if state == ButtonState::Loading {
                seen_clone.fetch_add(1, Ordering::SeqCst);
            }
        });

        machine.set_state(ButtonState::Loading);
        machine.set_state(ButtonState::Loading);
        assert_eq!(seen.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_progress_invariant_across_transitions() {
        let (clock, mut machine) = machine();

        for _ in 0..3 {
            machine.set_state(ButtonState::Loading);
            for _ in 0..10 {
                clock.advance(Duration::from_millis(333));
                if let Some(p) = machine.tick() {
                    assert!((0.0..=1.0).contains(&p));
                }
            }
            machine.set_state(ButtonState::Completed);
            assert_eq!(machine.progress(), 0.0);
        }
    }
}
