//! Status bar with messages and contextual key hints.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::{AppState, Section, Theme};

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar with contextual help
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let mut lines: Vec<Line> = Vec::new();

        // First line: error, status message, or sending indicator
        if let Some(error) = &state.error_message {
            lines.push(Line::from(vec![
                Span::styled("ERROR: ", Style::default().fg(theme.error)),
                Span::styled(error.clone(), Style::default().fg(theme.text)),
            ]));
        } else if state.contact.form().is_pending() {
            lines.push(Line::from(vec![
                Span::styled("Contact: ", Style::default().fg(theme.primary)),
                Span::styled("Sending...", Style::default().fg(theme.accent)),
            ]));
        } else if !state.status_message.is_empty() {
            lines.push(Line::from(Span::styled(
                state.status_message.clone(),
                Style::default().fg(theme.text),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                state.profile.footer.clone(),
                Style::default().fg(theme.text_muted),
            )));
        }

        lines.push(Self::hints_line(state, theme));

        let widget = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(theme.primary)),
        );
        f.render_widget(widget, area);
    }

    fn hints_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let hints = match state.section {
            Section::Contact if state.contact.is_editing() => {
                "Tab/↑↓ field · Enter next/send · Esc done"
            }
            Section::Contact => "Enter edit form · y copy email · 1-4/Tab section · t theme · q quit",
            Section::Portfolio => {
                "←→ filter · ↑↓ project · y copy link · 1-4/Tab section · t theme · q quit"
            }
            _ => "1-4/Tab section · t theme · q quit",
        };
        Line::from(Span::styled(
            hints.to_string(),
            Style::default().fg(theme.text_muted),
        ))
    }
}
