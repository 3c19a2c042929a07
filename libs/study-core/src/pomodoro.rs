//! Pomodoro timer state machine.
//!
//! Bundled productivity widget, unrelated to the document pipeline. The
//! machine owns no clock: callers sample wall time and feed elapsed time in
//! through [`Pomodoro::advance`], then render [`Pomodoro::remaining`] and
//! [`Pomodoro::progress`].

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Which phase the timer is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Work,
    Break,
}

/// A work/break cycle with a completed-work streak counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pomodoro {
    work: Duration,
    rest: Duration,
    phase: Phase,
    elapsed_in_phase: Duration,
    streak: u32,
}

impl Pomodoro {
    /// Create a timer starting in the work phase. Zero-length phases are
    /// clamped to one second so a completed phase always consumes time.
    pub fn new(work: Duration, rest: Duration) -> Self {
        Self {
            work: work.max(Duration::from_secs(1)),
            rest: rest.max(Duration::from_secs(1)),
            phase: Phase::Work,
            elapsed_in_phase: Duration::ZERO,
            streak: 0,
        }
    }

    /// Convenience constructor matching the minute-granularity UI inputs.
    pub fn from_minutes(work_minutes: u64, break_minutes: u64) -> Self {
        Self::new(
            Duration::from_secs(work_minutes * 60),
            Duration::from_secs(break_minutes * 60),
        )
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Completed work phases since creation or the last reset.
    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn phase_length(&self) -> Duration {
        match self.phase {
            Phase::Work => self.work,
            Phase::Break => self.rest,
        }
    }

    pub fn remaining(&self) -> Duration {
        self.phase_length().saturating_sub(self.elapsed_in_phase)
    }

    /// Fraction of the current phase that has passed, 0.0 to 1.0.
    pub fn progress(&self) -> f64 {
        self.elapsed_in_phase.as_secs_f64() / self.phase_length().as_secs_f64()
    }

    /// Advance the timer by `elapsed`, rolling over as many phase
    /// boundaries as the elapsed time covers. Finishing a work phase
    /// increments the streak and starts the break; finishing a break starts
    /// the next work phase.
    pub fn advance(&mut self, elapsed: Duration) {
        let mut remaining_input = elapsed;

        while remaining_input >= self.remaining() {
            remaining_input -= self.remaining();
            match self.phase {
                Phase::Work => {
                    self.streak += 1;
                    self.phase = Phase::Break;
                }
                Phase::Break => self.phase = Phase::Work,
            }
            self.elapsed_in_phase = Duration::ZERO;
        }

        self.elapsed_in_phase += remaining_input;
    }

    /// Return to the start of a work phase, keeping the streak.
    pub fn reset(&mut self) {
        self.phase = Phase::Work;
        self.elapsed_in_phase = Duration::ZERO;
    }
}
