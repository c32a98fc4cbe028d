// ABOUTME: Help overlay component displaying wizard key bindings

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem},
};

use super::theme::GOLD;

pub struct HelpComponent;

impl HelpComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let popup_area = self.centered_rect(60, 60, area);

        frame.render_widget(Clear, popup_area);

        let section = Style::default().fg(GOLD).add_modifier(Modifier::BOLD);
        let help_items = vec![
            ListItem::new("Navigation:").style(section),
            ListItem::new("  →/Tab      Next step"),
            ListItem::new("  ←/S-Tab    Previous step"),
            ListItem::new("  Alt+1..9   Jump to step"),
            ListItem::new("  Enter      Next step, submit on the last one"),
            ListItem::new(""),
            ListItem::new("Editing:").style(section),
            ListItem::new("  type       Fill in the current step"),
            ListItem::new("  Backspace  Delete last character"),
            ListItem::new(""),
            ListItem::new("General:").style(section),
            ListItem::new("  F1         Toggle this help"),
            ListItem::new("  Esc        Cancel"),
            ListItem::new("  Ctrl+C     Force quit"),
        ];

        let help_list = List::new(help_items).block(
            Block::default()
                .title("Help - Press F1 or Esc to close")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

        frame.render_widget(help_list, popup_area);
    }

    fn centered_rect(&self, percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }
}

impl Default for HelpComponent {
    fn default() -> Self {
        Self::new()
    }
}
