//! Depth progression and win sequencing.
//! This module exists to own the phase machine and the delayed advance.
//! It does not rebuild levels; `session` does that when an advance fires.

/// Pause between capturing the goal and descending to the next depth.
pub const WIN_ADVANCE_DELAY_MS: f32 = 2000.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Waiting on the start gesture.
    Idle,
    /// Ball under player control.
    Active,
    /// Goal captured; the descent fires after the delay.
    Won,
}

#[derive(Clone, Copy, Debug)]
pub struct Progression {
    depth: u32,
    best_depth: u32,
    phase: Phase,
    /// Countdown to the next descent. Dropping it is how a restart cancels
    /// the advance; a stale countdown can never fire into a fresh run.
    pending_ms: Option<f32>,
}

impl Progression {
    pub fn new() -> Self {
        Self { depth: 1, best_depth: 0, phase: Phase::Idle, pending_ms: None }
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn best_depth(&self) -> u32 {
        self.best_depth
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Raises the record when a persisted value beats the in-memory one.
    pub fn set_best_depth(&mut self, best: u32) {
        self.best_depth = self.best_depth.max(best);
    }

    pub fn start(&mut self) {
        if self.phase == Phase::Idle {
            self.phase = Phase::Active;
        }
    }

    /// Records a goal capture. Only the first capture of a level counts;
    /// later calls while the descent is pending return false.
    pub fn record_win(&mut self) -> bool {
        if self.phase != Phase::Active {
            return false;
        }
        self.phase = Phase::Won;
        self.best_depth = self.best_depth.max(self.depth);
        self.pending_ms = Some(WIN_ADVANCE_DELAY_MS);
        true
    }

    /// Counts down a pending advance. When it elapses the depth increments,
    /// the phase returns to `Active`, and the new depth is handed back so
    /// the caller can rebuild the level.
    pub fn tick(&mut self, dt_ms: f32) -> Option<u32> {
        let remaining = self.pending_ms.as_mut()?;
        *remaining -= dt_ms;
        if *remaining > 0.0 {
            return None;
        }
        self.pending_ms = None;
        self.depth += 1;
        self.phase = Phase::Active;
        Some(self.depth)
    }

    /// Abandons the current run: depth back to 1, any pending descent
    /// cancelled. An idle session stays idle.
    pub fn reset_run(&mut self) {
        self.pending_ms = None;
        self.depth = 1;
        if self.phase != Phase::Idle {
            self.phase = Phase::Active;
        }
    }
}

impl Default for Progression {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active() -> Progression {
        let mut progression = Progression::new();
        progression.start();
        progression
    }

    #[test]
    fn starts_idle_at_depth_one() {
        let progression = Progression::new();
        assert_eq!(progression.phase(), Phase::Idle);
        assert_eq!(progression.depth(), 1);
        assert_eq!(progression.best_depth(), 0);
    }

    #[test]
    fn win_only_counts_once_per_level() {
        let mut progression = active();
        assert!(progression.record_win());
        assert!(!progression.record_win());
        assert_eq!(progression.phase(), Phase::Won);
    }

    #[test]
    fn win_before_start_is_ignored() {
        let mut progression = Progression::new();
        assert!(!progression.record_win());
        assert_eq!(progression.phase(), Phase::Idle);
    }

    #[test]
    fn advance_fires_after_the_full_delay() {
        let mut progression = active();
        progression.record_win();

        assert_eq!(progression.tick(500.0), None);
        assert_eq!(progression.tick(1499.0), None);
        assert_eq!(progression.tick(2.0), Some(2));
        assert_eq!(progression.phase(), Phase::Active);
        assert_eq!(progression.depth(), 2);

        // Nothing left scheduled.
        assert_eq!(progression.tick(10_000.0), None);
    }

    #[test]
    fn restart_mid_flight_resets_depth_and_cancels_the_pending_advance() {
        let mut progression = active();
        while progression.depth() < 7 {
            progression.record_win();
            progression.tick(WIN_ADVANCE_DELAY_MS);
        }
        progression.record_win();
        progression.tick(1000.0);
        progression.reset_run();

        assert_eq!(progression.depth(), 1);
        assert_eq!(progression.phase(), Phase::Active);
        assert_eq!(progression.best_depth(), 7);
        assert_eq!(progression.tick(10_000.0), None);
    }

    #[test]
    fn best_depth_tracks_the_deepest_win() {
        let mut progression = active();
        progression.record_win();
        progression.tick(WIN_ADVANCE_DELAY_MS);
        progression.record_win();
        progression.tick(WIN_ADVANCE_DELAY_MS);
        assert_eq!(progression.best_depth(), 2);

        progression.reset_run();
        progression.record_win();
        assert_eq!(progression.best_depth(), 2, "a shallower win must not lower the record");
    }

    #[test]
    fn persisted_record_never_lowers_the_best() {
        let mut progression = active();
        progression.set_best_depth(7);
        assert_eq!(progression.best_depth(), 7);
        progression.set_best_depth(3);
        assert_eq!(progression.best_depth(), 7);
    }

    #[test]
    fn reset_from_idle_stays_idle() {
        let mut progression = Progression::new();
        progression.reset_run();
        assert_eq!(progression.phase(), Phase::Idle);
    }
}
