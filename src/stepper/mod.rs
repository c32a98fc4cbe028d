// ABOUTME: Step controller for multi-step forms and wizards
// Store, instance scope, panel registrar, triggers and render accessor

pub mod consumer;
pub mod content;
pub mod controls;
pub mod error;
pub mod instance;
pub mod store;

pub use consumer::StepperConsumer;
pub use content::StepperContent;
pub use controls::{NextTrigger, PrevTrigger, SubmitTrigger};
pub use error::{StepperError, StepperResult};
pub use instance::{StepObserver, Stepper, StepperOptions, StepperScope};
pub use store::{StepState, StepStore};
