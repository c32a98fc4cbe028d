// ABOUTME: Navigation triggers (previous, next, submit) for wizard front ends
// Stateless: visibility and activation both read through the stepper scope

use super::error::StepperResult;
use super::instance::StepperScope;
use super::store::StepState;

/// Advances the wizard. Hidden on the last step unless asked otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NextTrigger {
    pub show_in_last_step: bool,
}

impl NextTrigger {
    pub const fn is_visible_in(&self, state: &StepState) -> bool {
        !state.is_last_step || self.show_in_last_step
    }

    pub fn is_visible(&self, scope: &StepperScope) -> StepperResult<bool> {
        Ok(self.is_visible_in(&scope.state()?))
    }

    pub fn activate(&self, scope: &StepperScope) -> StepperResult<()> {
        scope.stepper()?.next_step();
        Ok(())
    }
}

/// Goes back one step. Hidden on the first step unless asked otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrevTrigger {
    pub show_in_first_step: bool,
}

impl PrevTrigger {
    pub const fn is_visible_in(&self, state: &StepState) -> bool {
        !state.is_first_step || self.show_in_first_step
    }

    pub fn is_visible(&self, scope: &StepperScope) -> StepperResult<bool> {
        Ok(self.is_visible_in(&scope.state()?))
    }

    pub fn activate(&self, scope: &StepperScope) -> StepperResult<()> {
        scope.stepper()?.prev_step();
        Ok(())
    }
}

/// Submit action, only offered on the last step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubmitTrigger;

impl SubmitTrigger {
    pub const fn is_visible_in(&self, state: &StepState) -> bool {
        state.is_last_step
    }

    pub fn is_visible(&self, scope: &StepperScope) -> StepperResult<bool> {
        Ok(self.is_visible_in(&scope.state()?))
    }

    /// Returns whether submitting is allowed right now
    pub fn activate(&self, scope: &StepperScope) -> StepperResult<bool> {
        self.is_visible(scope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stepper::{StepperError, StepperOptions};

    fn scope_with(total: usize) -> StepperScope {
        let scope = StepperScope::create(StepperOptions::default());
        scope.stepper().unwrap().define_total_steps(total);
        scope
    }

    #[test]
    fn test_prev_hidden_on_first_step() {
        let scope = scope_with(3);
        assert!(!PrevTrigger::default().is_visible(&scope).unwrap());

        let always = PrevTrigger {
            show_in_first_step: true,
        };
        assert!(always.is_visible(&scope).unwrap());
    }

    #[test]
    fn test_next_hidden_on_last_step() {
        let scope = scope_with(2);
        let next = NextTrigger::default();
        assert!(next.is_visible(&scope).unwrap());

        next.activate(&scope).unwrap();
        assert!(!next.is_visible(&scope).unwrap());

        let always = NextTrigger {
            show_in_last_step: true,
        };
        assert!(always.is_visible(&scope).unwrap());
    }

    #[test]
    fn test_next_visible_before_registration() {
        let scope = scope_with(0);
        assert!(NextTrigger::default().is_visible(&scope).unwrap());
        assert!(!SubmitTrigger.is_visible(&scope).unwrap());
    }

    #[test]
    fn test_submit_only_on_last_step() {
        let scope = scope_with(2);
        assert!(!SubmitTrigger.activate(&scope).unwrap());

        NextTrigger::default().activate(&scope).unwrap();
        assert!(SubmitTrigger.activate(&scope).unwrap());

        PrevTrigger::default().activate(&scope).unwrap();
        assert!(!SubmitTrigger.is_visible(&scope).unwrap());
    }

    #[test]
    fn test_triggers_require_bound_scope() {
        let scope = StepperScope::unbound();
        assert_eq!(
            NextTrigger::default().activate(&scope).unwrap_err(),
            StepperError::ContextMissing
        );
        assert_eq!(
            PrevTrigger::default().is_visible(&scope).unwrap_err(),
            StepperError::ContextMissing
        );
        assert_eq!(
            SubmitTrigger.activate(&scope).unwrap_err(),
            StepperError::ContextMissing
        );
    }
}
