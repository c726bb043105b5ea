//! About section: biography, skills by category, and the experience
//! timeline.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::models::Profile;
use crate::tui::Theme;

/// Renders the about section.
pub fn render(f: &mut Frame, area: Rect, theme: &Theme, profile: &Profile) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(7)])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[0]);

    render_story(f, columns[0], theme, profile);
    render_skills(f, columns[1], theme, profile);
    render_timeline(f, rows[1], theme, profile);
}

fn render_story(f: &mut Frame, area: Rect, theme: &Theme, profile: &Profile) {
    let mut lines: Vec<Line> = Vec::new();
    for paragraph in &profile.bio {
        lines.push(Line::from(Span::styled(
            paragraph.clone(),
            Style::default().fg(theme.text),
        )));
        lines.push(Line::default());
    }
    lines.push(Line::from(vec![
        Span::styled(profile.location.clone(), Style::default().fg(theme.text_secondary)),
        Span::styled("  ·  ", Style::default().fg(theme.text_muted)),
        Span::styled(
            profile.experience_badge.clone(),
            Style::default().fg(theme.text_secondary),
        ),
    ]));

    f.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::default()
                .title(" About Me ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.primary)),
        ),
        area,
    );
}

fn render_skills(f: &mut Frame, area: Rect, theme: &Theme, profile: &Profile) {
    let mut lines: Vec<Line> = Vec::new();
    for group in &profile.skills {
        lines.push(Line::from(Span::styled(
            group.category.label(),
            Style::default()
                .fg(group.category.accent())
                .add_modifier(Modifier::BOLD),
        )));
        let mut spans = vec![Span::raw("  ")];
        for (i, skill) in group.skills.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(
                format!("[{skill}]"),
                Style::default().fg(theme.text_secondary),
            ));
        }
        lines.push(Line::from(spans));
        lines.push(Line::default());
    }

    f.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::default()
                .title(" Technical Skills ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.primary)),
        ),
        area,
    );
}

fn render_timeline(f: &mut Frame, area: Rect, theme: &Theme, profile: &Profile) {
    let mut lines: Vec<Line> = Vec::new();
    for entry in &profile.timeline {
        lines.push(Line::from(vec![
            Span::styled(
                entry.role.clone(),
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", entry.period),
                Style::default().fg(theme.text_muted),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            entry.organization.clone(),
            Style::default().fg(theme.primary),
        )));
        lines.push(Line::from(Span::styled(
            entry.description.clone(),
            Style::default().fg(theme.text_secondary),
        )));
    }

    f.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::default()
                .title(" Professional Experience ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.primary)),
        ),
        area,
    );
}
