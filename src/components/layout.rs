// ABOUTME: Main layout component arranging the wizard and its help overlay

use ratatui::prelude::*;

use super::{HelpComponent, WizardComponent};
use crate::app::AppState;
use crate::stepper::StepperResult;

pub struct LayoutComponent {
    wizard: WizardComponent,
    help: HelpComponent,
}

impl LayoutComponent {
    pub fn new() -> Self {
        Self {
            wizard: WizardComponent::new(),
            help: HelpComponent::new(),
        }
    }

    pub fn render(&self, frame: &mut Frame, state: &AppState) -> StepperResult<()> {
        let area = frame.size();
        self.wizard.render(frame, area, state)?;

        if state.help_visible {
            self.help.render(frame, area);
        }

        Ok(())
    }
}

impl Default for LayoutComponent {
    fn default() -> Self {
        Self::new()
    }
}
