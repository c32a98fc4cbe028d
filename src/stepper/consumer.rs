// ABOUTME: Render accessor - hands the current step state to a caller-supplied function

use std::fmt;

use super::error::{StepperError, StepperResult};
use super::instance::StepperScope;
use super::store::StepState;

type RenderFn<R> = Box<dyn Fn(&StepState) -> R>;

/// Produces output from the wizard's current state on demand
pub struct StepperConsumer<R> {
    render: Option<RenderFn<R>>,
}

impl<R> StepperConsumer<R> {
    /// Consumer without a render function. Rendering it is an error.
    pub const fn new() -> Self {
        Self { render: None }
    }

    pub fn with_render(render: impl Fn(&StepState) -> R + 'static) -> Self {
        Self {
            render: Some(Box::new(render)),
        }
    }

    pub fn render(&self, scope: &StepperScope) -> StepperResult<R> {
        let state = scope.state()?;
        let render = self.render.as_ref().ok_or(StepperError::InvalidRenderProp)?;
        Ok(render(&state))
    }
}

impl<R> Default for StepperConsumer<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> fmt::Debug for StepperConsumer<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepperConsumer")
            .field("has_render", &self.render.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stepper::StepperOptions;

    #[test]
    fn test_render_receives_state() {
        let scope = StepperScope::create(StepperOptions::default());
        scope.stepper().unwrap().define_total_steps(3);

        let progress = StepperConsumer::with_render(|state: &StepState| {
            format!("{} / {}", state.current_step, state.total_steps)
        });

        assert_eq!(progress.render(&scope).unwrap(), "1 / 3");
        scope.stepper().unwrap().next_step();
        assert_eq!(progress.render(&scope).unwrap(), "2 / 3");
    }

    #[test]
    fn test_missing_render_function() {
        let scope = StepperScope::create(StepperOptions::default());
        let consumer: StepperConsumer<String> = StepperConsumer::new();
        assert_eq!(
            consumer.render(&scope).unwrap_err(),
            StepperError::InvalidRenderProp
        );
    }

    #[test]
    fn test_unbound_scope_reported_first() {
        let consumer = StepperConsumer::with_render(|state: &StepState| state.current_step);
        assert_eq!(
            consumer.render(&StepperScope::unbound()).unwrap_err(),
            StepperError::ContextMissing
        );
    }
}
