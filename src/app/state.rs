// ABOUTME: Application state for the wizard TUI
// Binds one stepper instance to the configured form steps and collected input

use std::cell::Cell;
use std::rc::Rc;

use serde::Serialize;
use tracing::info;

use crate::config::{AppConfig, StepConfig};
use crate::stepper::{
    NextTrigger, PrevTrigger, StepState, StepperContent, StepperOptions, StepperResult,
    StepperScope, SubmitTrigger,
};

/// One form step: its configuration and what the user typed so far
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormStep {
    pub config: StepConfig,
    pub value: String,
}

impl FormStep {
    pub const fn new(config: StepConfig) -> Self {
        Self {
            config,
            value: String::new(),
        }
    }
}

/// Answer for a single step in a submitted form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Answer {
    pub step: usize,
    pub title: String,
    pub value: String,
}

/// Everything collected when the form was submitted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub answers: Vec<Answer>,
}

pub struct AppState {
    pub scope: StepperScope,
    pub content: StepperContent<FormStep>,
    pub next_trigger: NextTrigger,
    pub prev_trigger: PrevTrigger,
    pub submit_trigger: SubmitTrigger,
    pub help_visible: bool,
    pub should_quit: bool,
    pub submission: Option<Submission>,
    transitions: Rc<Cell<usize>>,
}

impl AppState {
    pub fn new(config: &AppConfig) -> StepperResult<Self> {
        let transitions = Rc::new(Cell::new(0));

        let options = StepperOptions::new()
            .initial_step(config.wizard.initial_step)
            .on_step_change({
                let transitions = Rc::clone(&transitions);
                move || transitions.set(transitions.get() + 1)
            });

        let state = Self {
            scope: StepperScope::create(options),
            content: config
                .wizard
                .steps
                .iter()
                .cloned()
                .map(FormStep::new)
                .collect(),
            next_trigger: NextTrigger {
                show_in_last_step: config.controls.show_next_in_last_step,
            },
            prev_trigger: PrevTrigger {
                show_in_first_step: config.controls.show_prev_in_first_step,
            },
            submit_trigger: SubmitTrigger,
            help_visible: false,
            should_quit: false,
            submission: None,
            transitions,
        };

        state.content.sync(&state.scope)?;
        Ok(state)
    }

    pub fn step_state(&self) -> StepperResult<StepState> {
        self.scope.state()
    }

    /// Number of step transitions observed so far
    pub fn transitions(&self) -> usize {
        self.transitions.get()
    }

    pub fn active_step(&self) -> StepperResult<Option<&FormStep>> {
        self.content.active_panel(&self.scope)
    }

    /// Replace the form steps, keeping the stepper's count in sync
    pub fn set_steps(&mut self, steps: Vec<StepConfig>) -> StepperResult<()> {
        self.content
            .set_panels(steps.into_iter().map(FormStep::new).collect());
        self.content.sync(&self.scope)?;
        Ok(())
    }

    pub fn next_step(&mut self) -> StepperResult<()> {
        self.next_trigger.activate(&self.scope)
    }

    pub fn prev_step(&mut self) -> StepperResult<()> {
        self.prev_trigger.activate(&self.scope)
    }

    pub fn go_to(&mut self, index: usize) -> StepperResult<()> {
        self.scope.stepper()?.go_to(index);
        Ok(())
    }

    pub fn input_char(&mut self, c: char) -> StepperResult<()> {
        if let Some(step) = self.content.active_panel_mut(&self.scope)? {
            step.value.push(c);
        }
        Ok(())
    }

    pub fn backspace(&mut self) -> StepperResult<()> {
        if let Some(step) = self.content.active_panel_mut(&self.scope)? {
            step.value.pop();
        }
        Ok(())
    }

    /// Submit the form if the wizard is on its last step
    pub fn submit(&mut self) -> StepperResult<bool> {
        if !self.submit_trigger.activate(&self.scope)? {
            return Ok(false);
        }

        let answers = self
            .content
            .panels()
            .iter()
            .enumerate()
            .map(|(index, step)| Answer {
                step: index + 1,
                title: step.config.title.clone(),
                value: step.value.clone(),
            })
            .collect();

        info!("Form submitted after {} step transitions", self.transitions());
        self.submission = Some(Submission { answers });
        self.should_quit = true;
        Ok(true)
    }

    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
