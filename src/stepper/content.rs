// ABOUTME: Step content - owns the panel sequence and registers its size with the stepper
// Selects the panel for the active step, tolerating an unsynchronized store

use tracing::debug;

use super::error::StepperResult;
use super::instance::StepperScope;

/// Ordered panels of a wizard, one per step.
///
/// The panel type is opaque to the stepper; only the count is reported.
/// Callers mutate the sequence and then call [`StepperContent::sync`].
#[derive(Debug, Clone)]
pub struct StepperContent<P> {
    panels: Vec<P>,
}

impl<P> StepperContent<P> {
    pub const fn new(panels: Vec<P>) -> Self {
        Self { panels }
    }

    pub fn panels(&self) -> &[P] {
        &self.panels
    }

    pub fn panels_mut(&mut self) -> &mut [P] {
        &mut self.panels
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    pub fn set_panels(&mut self, panels: Vec<P>) {
        self.panels = panels;
    }

    pub fn push_panel(&mut self, panel: P) {
        self.panels.push(panel);
    }

    pub fn remove_panel(&mut self, index: usize) -> Option<P> {
        (index < self.panels.len()).then(|| self.panels.remove(index))
    }

    /// Report the panel count to the stepper if the stepper holds a different one.
    ///
    /// The stepper's own count is the reference, so a count overwritten
    /// elsewhere (or a freshly bound scope) is corrected on the next sync.
    /// Returns true when a report was sent.
    pub fn sync(&self, scope: &StepperScope) -> StepperResult<bool> {
        let stepper = scope.stepper()?;
        let count = self.panels.len();

        if stepper.total_steps() == count {
            return Ok(false);
        }

        debug!("Reporting {} panels to stepper", count);
        stepper.define_total_steps(count);
        Ok(true)
    }

    /// Panel for the active step, if the step maps onto the sequence
    pub fn active_panel(&self, scope: &StepperScope) -> StepperResult<Option<&P>> {
        let current_step = scope.stepper()?.current_step();
        Ok(current_step
            .checked_sub(1)
            .and_then(|index| self.panels.get(index)))
    }

    /// Mutable access to the panel for the active step
    pub fn active_panel_mut(&mut self, scope: &StepperScope) -> StepperResult<Option<&mut P>> {
        let current_step = scope.stepper()?.current_step();
        Ok(current_step
            .checked_sub(1)
            .and_then(|index| self.panels.get_mut(index)))
    }
}

impl<P> Default for StepperContent<P> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<P> FromIterator<P> for StepperContent<P> {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
