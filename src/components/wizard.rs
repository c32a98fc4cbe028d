// ABOUTME: Wizard component - renders the active form step with progress and triggers
// Header via a stepper consumer, body from the step content, footer from visible triggers

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use super::theme::{
    CORNFLOWER_BLUE, DARK_BG, GOLD, MUTED_GRAY, PANEL_BG, SELECTION_GREEN, SOFT_WHITE,
    SUBDUED_BORDER,
};
use crate::app::{AppState, FormStep};
use crate::stepper::{StepState, StepperConsumer, StepperResult};

/// The main wizard component
pub struct WizardComponent {
    progress_label: StepperConsumer<String>,
}

impl WizardComponent {
    pub fn new() -> Self {
        Self {
            progress_label: StepperConsumer::with_render(|state: &StepState| {
                format!("{} / {}", state.current_step, state.total_steps)
            }),
        }
    }

    /// Main render function
    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) -> StepperResult<()> {
        frame.render_widget(Clear, area);
        frame.render_widget(Block::default().style(Style::default().bg(DARK_BG)), area);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // Header with progress
                Constraint::Min(7),    // Active step
                Constraint::Length(3), // Navigation footer
            ])
            .split(area);

        let step_state = state.step_state()?;
        self.render_header(frame, layout[0], state, &step_state)?;
        Self::render_step(frame, layout[1], state.active_step()?, &step_state);
        Self::render_navigation(frame, layout[2], state, &step_state);
        Ok(())
    }

    fn render_header(
        &self,
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        step_state: &StepState,
    ) -> StepperResult<()> {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CORNFLOWER_BLUE))
            .style(Style::default().bg(PANEL_BG));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let header_layout = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(inner);

        let title = Paragraph::new(Line::from(vec![
            Span::styled("Stepper", Style::default().fg(GOLD).add_modifier(Modifier::BOLD)),
            Span::styled("  ", Style::default()),
            Span::styled(
                self.progress_label.render(&state.scope)?,
                Style::default().fg(SOFT_WHITE),
            ),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(title, header_layout[0]);

        Self::render_progress(frame, header_layout[1], state.content.panels(), step_state);
        Ok(())
    }

    /// Render step progress dots
    fn render_progress(frame: &mut Frame, area: Rect, steps: &[FormStep], step_state: &StepState) {
        let current_idx = step_state.current_step.saturating_sub(1);
        let mut spans = Vec::new();

        for (idx, step) in steps.iter().enumerate() {
            let (icon, style) = if idx < current_idx {
                ("●", Style::default().fg(SELECTION_GREEN))
            } else if idx == current_idx {
                ("◉", Style::default().fg(GOLD).add_modifier(Modifier::BOLD))
            } else {
                ("○", Style::default().fg(MUTED_GRAY))
            };

            spans.push(Span::styled(icon, style));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                step.config.title.clone(),
                if idx == current_idx {
                    Style::default().fg(SOFT_WHITE)
                } else {
                    Style::default().fg(MUTED_GRAY)
                },
            ));

            if idx + 1 < steps.len() {
                spans.push(Span::styled(" → ", Style::default().fg(SUBDUED_BORDER)));
            }
        }

        let progress = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(progress, area);
    }

    fn render_step(frame: &mut Frame, area: Rect, step: Option<&FormStep>, step_state: &StepState) {
        // Store not synced yet, or the step count shrank under us
        let Some(step) = step else {
            let empty = Paragraph::new(format!("No content for step {}", step_state.current_step))
                .style(Style::default().fg(MUTED_GRAY))
                .alignment(Alignment::Center)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(Style::default().fg(SUBDUED_BORDER))
                        .style(Style::default().bg(PANEL_BG)),
                );
            frame.render_widget(empty, area);
            return;
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CORNFLOWER_BLUE))
            .style(Style::default().bg(PANEL_BG))
            .title(format!(" {} ", step.config.title))
            .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let content_layout = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(2), // Prompt
                Constraint::Length(3), // Input field
                Constraint::Min(0),
            ])
            .split(inner);

        let prompt = Paragraph::new(step.config.prompt.as_str())
            .style(Style::default().fg(SOFT_WHITE))
            .alignment(Alignment::Center);
        frame.render_widget(prompt, content_layout[0]);

        let input_line = if step.value.is_empty() {
            Line::from(vec![
                Span::styled("│", Style::default().fg(GOLD)),
                Span::styled(step.config.placeholder.as_str(), Style::default().fg(MUTED_GRAY)),
            ])
        } else {
            Line::from(vec![
                Span::styled(step.value.as_str(), Style::default().fg(SOFT_WHITE)),
                Span::styled("│", Style::default().fg(GOLD)),
            ])
        };

        let input = Paragraph::new(input_line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(GOLD))
                .style(Style::default().bg(DARK_BG)),
        );
        frame.render_widget(input, content_layout[1]);
    }

    fn render_navigation(frame: &mut Frame, area: Rect, state: &AppState, step_state: &StepState) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(SUBDUED_BORDER))
            .style(Style::default().bg(DARK_BG));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut buttons: Vec<(&str, &str)> = Vec::new();
        if state.prev_trigger.is_visible_in(step_state) {
            buttons.push(("←", "Back"));
        }
        if state.next_trigger.is_visible_in(step_state) {
            buttons.push(("→", "Next"));
        }
        if state.submit_trigger.is_visible_in(step_state) {
            buttons.push(("Enter", "Submit"));
        }
        buttons.push(("Esc", "Cancel"));

        let mut spans = Vec::new();
        for (idx, (key, label)) in buttons.into_iter().enumerate() {
            if idx > 0 {
                spans.push(Span::styled("  |  ", Style::default().fg(SUBDUED_BORDER)));
            }
            spans.push(Span::styled("[", Style::default().fg(SUBDUED_BORDER)));
            spans.push(Span::styled(key, Style::default().fg(GOLD)));
            spans.push(Span::styled("]", Style::default().fg(SUBDUED_BORDER)));
            spans.push(Span::styled(format!(" {label}"), Style::default().fg(SOFT_WHITE)));
        }

        let nav = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(nav, inner);
    }
}

impl Default for WizardComponent {
    fn default() -> Self {
        Self::new()
    }
}
