//! Health sweep timing
//!
//! The scheduler only decides *when* the next sweep fires. Whoever owns the
//! event loop sleeps until [`HealthScheduler::next_fire`], runs the sweep and
//! reports back with [`HealthScheduler::complete_sweep`]. The first sweep
//! fires shortly after startup; each later one fires a full interval after
//! the previous sweep finished, so sweeps never overlap.

use crate::constants::INITIAL_SWEEP_DELAY;
use std::time::{Duration, Instant};

/// Where the scheduler is in its cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    /// Not started yet
    Idle,
    /// Waiting to fire at the given instant
    Waiting(Instant),
    /// A sweep is running
    Sweeping,
}

#[derive(Debug, Clone)]
pub struct HealthScheduler {
    interval: Duration,
    initial_delay: Duration,
    state: SchedulerState,
    sweeps_completed: u64,
}

impl HealthScheduler {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            initial_delay: INITIAL_SWEEP_DELAY,
            state: SchedulerState::Idle,
            sweeps_completed: 0,
        }
    }

    pub fn with_initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = delay;
        self
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn initial_delay(&self) -> Duration {
        self.initial_delay
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    pub fn sweeps_completed(&self) -> u64 {
        self.sweeps_completed
    }

    /// Arm the first sweep; a started scheduler keeps its pending fire time
    pub fn start(&mut self, now: Instant) -> Instant {
        match self.state {
            SchedulerState::Idle => {
                let at = now + self.initial_delay;
                self.state = SchedulerState::Waiting(at);
                at
            }
            SchedulerState::Waiting(at) => at,
            SchedulerState::Sweeping => now,
        }
    }

    /// Next fire time, if one is armed
    pub fn next_fire(&self) -> Option<Instant> {
        match self.state {
            SchedulerState::Waiting(at) => Some(at),
            _ => None,
        }
    }

    pub fn is_due(&self, now: Instant) -> bool {
        self.next_fire().is_some_and(|at| now >= at)
    }

    /// Mark a sweep as running
    ///
    /// Returns false when nothing was due, so the caller can skip the sweep.
    pub fn begin_sweep(&mut self, now: Instant) -> bool {
        if self.is_due(now) {
            self.state = SchedulerState::Sweeping;
            true
        } else {
            false
        }
    }

    /// Record a finished sweep and arm the next one
    pub fn complete_sweep(&mut self, now: Instant) -> Instant {
        self.sweeps_completed += 1;
        let at = now + self.interval;
        self.state = SchedulerState::Waiting(at);
        at
    }
}
