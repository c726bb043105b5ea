//! Header bar: title, section tabs, and the theme-toggle control.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::constants::APP_NAME;
use crate::tui::theme::ThemePreference;
use crate::tui::{Section, Theme};

/// Renders the header bar.
pub fn render(
    f: &mut Frame,
    area: Rect,
    theme: &Theme,
    active: Section,
    preference: ThemePreference,
) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(theme.primary));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(APP_NAME.len() as u16 + 3),
            Constraint::Min(0),
            Constraint::Length(16),
        ])
        .split(inner);

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!(" {APP_NAME} "),
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        ))),
        columns[0],
    );

    let mut tabs = Vec::new();
    for (i, section) in Section::ALL.into_iter().enumerate() {
        let style = if section == active {
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(theme.text_secondary)
        };
        tabs.push(Span::styled(
            format!(" {} {} ", i + 1, section.label()),
            style,
        ));
    }
    f.render_widget(Paragraph::new(Line::from(tabs)), columns[1]);

    let indicator = match preference {
        ThemePreference::Dark => "☾ Dark (t)",
        ThemePreference::Light => "☀ Light (t)",
    };
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            indicator,
            Style::default().fg(theme.text_secondary),
        )))
        .right_aligned(),
        columns[2],
    );
}
