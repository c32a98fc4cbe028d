// ABOUTME: Step store - authoritative current step and registered step count
// Derives boundary flags and absorbs out-of-range navigation as no-ops

use serde::Serialize;
use tracing::{debug, info, warn};

/// Read-only snapshot of a wizard's step state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StepState {
    /// Active step, 1-indexed
    pub current_step: usize,
    /// Registered panel count, 0 until the content reports
    pub total_steps: usize,
    pub is_first_step: bool,
    pub is_last_step: bool,
}

/// Step state machine for one wizard instance.
///
/// The store never notifies anyone itself. It keeps an observation point (the
/// step value last handed to the notifier) and [`StepStore::observe`] reports
/// whether a transition happened since then.
#[derive(Debug, Clone)]
pub struct StepStore {
    current_step: usize,
    total_steps: usize,
    observed_step: usize,
}

impl StepStore {
    /// Create a store seeded at `initial_step` with no registered steps.
    ///
    /// Step 0 does not exist, so it is normalized to 1.
    pub fn new(initial_step: usize) -> Self {
        let current_step = if initial_step == 0 {
            warn!("Initial step 0 is out of range, starting at step 1");
            1
        } else {
            initial_step
        };

        Self {
            current_step,
            total_steps: 0,
            observed_step: current_step,
        }
    }

    pub const fn current_step(&self) -> usize {
        self.current_step
    }

    pub const fn total_steps(&self) -> usize {
        self.total_steps
    }

    pub const fn is_first_step(&self) -> bool {
        self.current_step == 1
    }

    /// Never true before the content has registered its panels
    pub const fn is_last_step(&self) -> bool {
        self.total_steps > 0 && self.current_step == self.total_steps
    }

    pub const fn state(&self) -> StepState {
        StepState {
            current_step: self.current_step,
            total_steps: self.total_steps,
            is_first_step: self.is_first_step(),
            is_last_step: self.is_last_step(),
        }
    }

    /// Advance one step unless already at (or past) the last known step
    pub fn next_step(&mut self) {
        if self.current_step < self.total_steps {
            self.current_step += 1;
            debug!("Advanced to step {}/{}", self.current_step, self.total_steps);
        } else {
            debug!(
                "next_step ignored at step {}/{}",
                self.current_step, self.total_steps
            );
        }
    }

    /// Go back one step unless already on the first
    pub fn prev_step(&mut self) {
        if self.current_step > 1 {
            self.current_step -= 1;
            debug!("Retreated to step {}/{}", self.current_step, self.total_steps);
        } else {
            debug!("prev_step ignored on first step");
        }
    }

    /// Jump to `index` when `1 <= index <= total_steps`, otherwise do nothing
    pub fn go_to(&mut self, index: usize) {
        if index > 0 && index <= self.total_steps {
            self.current_step = index;
            debug!("Jumped to step {}/{}", index, self.total_steps);
        } else {
            debug!(
                "go_to({}) ignored, valid range is 1..={}",
                index, self.total_steps
            );
        }
    }

    /// Register the panel count. Re-reporting the current count is a no-op.
    ///
    /// Shrinking to a positive count below the current step pulls the current
    /// step back onto the new last step. Shrinking to 0 puts the store back in
    /// its unregistered state without touching the current step.
    pub fn define_total_steps(&mut self, count: usize) {
        if count == self.total_steps {
            return;
        }

        info!("Registered {} steps (was {})", count, self.total_steps);
        self.total_steps = count;

        if count > 0 && self.current_step > count {
            debug!(
                "Clamping current step {} to new last step {}",
                self.current_step, count
            );
            self.current_step = count;
        }
    }

    /// Move the observation point to the current step.
    ///
    /// Returns true when the step changed since the previous observation.
    pub fn observe(&mut self) -> bool {
        if self.observed_step == self.current_step {
            return false;
        }
        self.observed_step = self.current_step;
        true
    }
}

impl Default for StepStore {
    fn default() -> Self {
        Self::new(1)
    }
}
