// ABOUTME: Error taxonomy for the step controller
// Only wiring mistakes are errors; out-of-range navigation is a silent no-op

use thiserror::Error;

/// Programmer errors raised by stepper collaborators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StepperError {
    /// State or navigation was requested through a scope with no wizard bound
    #[error("stepper accessed outside a wizard instance: bind a Stepper to the scope first")]
    ContextMissing,

    /// The consumer accessor was rendered without a render function
    #[error("stepper consumer needs a render function (StepperConsumer::with_render)")]
    InvalidRenderProp,
}

/// Result type for stepper operations
pub type StepperResult<T> = Result<T, StepperError>;
