// ABOUTME: Event handling system for keyboard input and wizard actions

use crate::app::AppState;
use crate::stepper::StepperResult;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Quit,
    ToggleHelp,
    NextStep,
    PrevStep,
    GoToStep(usize),
    Submit,
    InputChar(char),
    Backspace,
}

pub struct EventHandler;

impl EventHandler {
    /// Map a key press to a wizard action.
    ///
    /// Enter depends on the last-step flag, so an unbound scope is an error here.
    pub fn handle_key_event(
        key_event: KeyEvent,
        state: &AppState,
    ) -> StepperResult<Option<AppEvent>> {
        // Ctrl+C always quits
        if key_event.modifiers.contains(KeyModifiers::CONTROL)
            && key_event.code == KeyCode::Char('c')
        {
            return Ok(Some(AppEvent::Quit));
        }

        if state.help_visible {
            return Ok(match key_event.code {
                KeyCode::F(1) | KeyCode::Esc => Some(AppEvent::ToggleHelp),
                _ => None,
            });
        }

        // Alt+digit jumps straight to a step
        if key_event.modifiers.contains(KeyModifiers::ALT) {
            if let KeyCode::Char(c) = key_event.code {
                return Ok(c
                    .to_digit(10)
                    .map(|digit| AppEvent::GoToStep(digit as usize)));
            }
        }

        let event = match key_event.code {
            KeyCode::Esc => Some(AppEvent::Quit),
            KeyCode::F(1) => Some(AppEvent::ToggleHelp),
            KeyCode::Right | KeyCode::Tab => Some(AppEvent::NextStep),
            KeyCode::Left | KeyCode::BackTab => Some(AppEvent::PrevStep),
            KeyCode::Enter => {
                if state.step_state()?.is_last_step {
                    Some(AppEvent::Submit)
                } else {
                    Some(AppEvent::NextStep)
                }
            }
            KeyCode::Backspace => Some(AppEvent::Backspace),
            KeyCode::Char(c) => Some(AppEvent::InputChar(c)),
            _ => None,
        };
        Ok(event)
    }

    pub fn process_event(event: AppEvent, state: &mut AppState) -> StepperResult<()> {
        debug!("Processing {:?}", event);
        match event {
            AppEvent::Quit => state.quit(),
            AppEvent::ToggleHelp => state.toggle_help(),
            AppEvent::NextStep => state.next_step()?,
            AppEvent::PrevStep => state.prev_step()?,
            AppEvent::GoToStep(index) => state.go_to(index)?,
            AppEvent::Submit => {
                state.submit()?;
            }
            AppEvent::InputChar(c) => state.input_char(c)?,
            AppEvent::Backspace => state.backspace()?,
        }
        Ok(())
    }
}
