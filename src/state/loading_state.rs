//! Loading screen animation state

use std::time::{Duration, Instant};

/// Animation phase for the loading overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingPhase {
    /// Progress bar filling toward 100
    Filling,
    /// Bar full, overlay still visible for the settle delay
    Full,
}

/// Loading overlay state: a deterministic progress fill on fixed ticks.
/// The caller passes `now` so the animation can be driven in tests.
#[derive(Debug)]
pub struct LoadingState {
    pub started: Instant,
    pub phase: LoadingPhase,
    /// Displayed progress, 0.0..=100.0
    pub progress: f32,
}

impl LoadingState {
    /// How long the bar takes to fill
    pub const FILL_DURATION: Duration = Duration::from_millis(1800);
    /// Overlay stays up this long after the bar fills
    pub const SETTLE_DELAY: Duration = Duration::from_millis(500);
    /// Fixed animation tick interval
    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

    pub fn new(now: Instant) -> Self {
        Self {
            started: now,
            phase: LoadingPhase::Filling,
            progress: 0.0,
        }
    }

    /// Advance the animation. Returns true on the tick where the bar first
    /// reaches 100, which is when the overlay hide gets scheduled.
    pub fn update(&mut self, now: Instant) -> bool {
        if self.phase == LoadingPhase::Full {
            return false;
        }

        let elapsed = now.saturating_duration_since(self.started);
        if elapsed >= Self::FILL_DURATION {
            self.progress = 100.0;
            self.phase = LoadingPhase::Full;
            return true;
        }

        let t = elapsed.as_secs_f32() / Self::FILL_DURATION.as_secs_f32();
        // Fast start, decelerating as the bar approaches full
        self.progress = simple_easing::cubic_out(t) * 100.0;
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_empty_and_filling() {
        let state = LoadingState::new(Instant::now());
        assert_eq!(state.phase, LoadingPhase::Filling);
        assert_eq!(state.progress, 0.0);
    }

    #[test]
    fn test_progress_grows_monotonically() {
        let start = Instant::now();
        let mut state = LoadingState::new(start);
        let mut last = 0.0;
        for tick in 1..=17 {
            state.update(start + LoadingState::TICK_INTERVAL * tick);
            assert!(state.progress >= last);
            last = state.progress;
        }
        assert!(last < 100.0);
    }

    #[test]
    fn test_fill_completion_reported_exactly_once() {
        let start = Instant::now();
        let mut state = LoadingState::new(start);
        assert!(!state.update(start + Duration::from_millis(900)));
        assert!(state.update(start + LoadingState::FILL_DURATION));
        assert_eq!(state.phase, LoadingPhase::Full);
        assert_eq!(state.progress, 100.0);
        // Further ticks never re-report completion
        assert!(!state.update(start + LoadingState::FILL_DURATION * 2));
    }

    #[test]
    fn test_update_before_start_is_zero() {
        let start = Instant::now() + Duration::from_secs(10);
        let mut state = LoadingState::new(start);
        assert!(!state.update(Instant::now()));
        assert_eq!(state.progress, 0.0);
    }
}
