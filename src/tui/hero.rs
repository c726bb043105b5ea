//! Home section: identity, tagline, and discipline badges.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::models::{Category, Profile};
use crate::tui::Theme;

/// Renders the hero section.
pub fn render(f: &mut Frame, area: Rect, theme: &Theme, profile: &Profile) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(8),
            Constraint::Min(0),
        ])
        .split(area);

    let lines = vec![
        Line::from(Span::styled(
            "Hello, I'm",
            Style::default().fg(theme.text_secondary),
        )),
        Line::from(Span::styled(
            profile.name.clone(),
            Style::default()
                .fg(theme.text)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            profile.role.clone(),
            Style::default().fg(theme.primary),
        )),
        Line::from(Span::styled(
            profile.tagline.clone(),
            Style::default().fg(theme.text_secondary),
        )),
        Line::default(),
        Line::from(Span::styled(
            profile.summary.clone(),
            Style::default().fg(theme.text),
        )),
        Line::default(),
        discipline_badges(theme),
    ];

    f.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        rows[1],
    );
}

fn discipline_badges(theme: &Theme) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, category) in Category::ALL.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ·  ", Style::default().fg(theme.text_muted)));
        }
        spans.push(Span::styled(
            category.label(),
            Style::default().fg(category.accent()),
        ));
    }
    Line::from(spans)
}
