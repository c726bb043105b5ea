//! Contact section: the message form and the info panels beside it.
//!
//! The form component owns field focus and edit mode; the submission rules
//! themselves live in [`crate::contact::ContactForm`]. Disabling the send
//! action while a submission is pending is a convenience here; the form's
//! own guard is what actually enforces at-most-one-in-flight.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::contact::{ContactForm, Field};
use crate::models::Profile;
use crate::notify::NotificationSink;
use crate::tui::component::Component;
use crate::tui::Theme;

/// Events emitted by the contact section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactEvent {
    /// A submission attempt was accepted and is now pending
    SubmissionStarted,
    /// A submission attempt was rejected for empty required fields
    SubmissionRejected,
    /// User asked to copy the listed email address
    CopyEmail,
}

/// Contact section state.
pub struct ContactView {
    form: ContactForm,
    focus: Field,
    editing: bool,
    show_validation: bool,
}

impl ContactView {
    /// Creates the section with an empty form and the default transport.
    #[must_use]
    pub fn new() -> Self {
        Self::with_form(ContactForm::new())
    }

    /// Creates the section around an existing form (tests inject transports
    /// this way).
    #[must_use]
    pub fn with_form(form: ContactForm) -> Self {
        Self {
            form,
            focus: Field::Name,
            editing: false,
            show_validation: false,
        }
    }

    /// The underlying form state.
    #[must_use]
    pub const fn form(&self) -> &ContactForm {
        &self.form
    }

    /// Whether keystrokes currently edit the form.
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        self.editing
    }

    /// Drains the in-flight submission, if any. Returns `true` when an
    /// outcome was observed.
    pub fn poll_submission(&mut self, sink: &mut dyn NotificationSink) -> bool {
        let resolved = self.form.poll(sink);
        if resolved {
            self.show_validation = false;
        }
        resolved
    }

    fn try_submit(&mut self) -> Option<ContactEvent> {
        if self.form.is_pending() {
            // Redundant UI disablement; the form's guard is authoritative.
            return None;
        }
        if self.form.submit() {
            self.show_validation = false;
            Some(ContactEvent::SubmissionStarted)
        } else {
            self.show_validation = true;
            Some(ContactEvent::SubmissionRejected)
        }
    }
}

impl Default for ContactView {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for ContactView {
    type Context = Profile;
    type Event = ContactEvent;

    fn handle_input(&mut self, key: KeyEvent, _profile: &Profile) -> Option<ContactEvent> {
        if !self.editing {
            return match key.code {
                KeyCode::Enter | KeyCode::Char('i') => {
                    self.editing = true;
                    None
                }
                KeyCode::Char('y') => Some(ContactEvent::CopyEmail),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Esc => {
                self.editing = false;
                None
            }
            KeyCode::Tab | KeyCode::Down => {
                self.focus = self.focus.next();
                None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = self.focus.previous();
                None
            }
            KeyCode::Backspace => {
                self.form.pop_char(self.focus);
                None
            }
            KeyCode::Enter => {
                // Enter advances through the single-line fields and submits
                // from the message body.
                if self.focus == Field::Message {
                    self.try_submit()
                } else {
                    self.focus = self.focus.next();
                    None
                }
            }
            KeyCode::Char(c) => {
                self.form.push_char(self.focus, c);
                None
            }
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme, profile: &Profile) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(area);

        self.render_form(f, columns[0], theme);
        render_info_panels(f, columns[1], theme, profile);
    }
}

impl ContactView {
    fn render_form(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let outer = Block::default()
            .title(" Send Message ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary))
            .style(Style::default().bg(theme.surface));
        let inner = outer.inner(area);
        f.render_widget(outer, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Min(2),
                Constraint::Length(1),
            ])
            .split(inner);

        for (field, row) in Field::ALL.into_iter().zip(rows.iter()) {
            self.render_field(f, *row, theme, field);
        }
        self.render_send_row(f, rows[4], theme);
    }

    fn render_field(&self, f: &mut Frame, area: Rect, theme: &Theme, field: Field) {
        let focused = self.editing && self.focus == field;
        let missing =
            self.show_validation && self.form.field(field).trim().is_empty();

        let label_style = if missing {
            Style::default().fg(theme.error).add_modifier(Modifier::BOLD)
        } else if focused {
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text_secondary)
        };

        let mut label_spans = vec![Span::styled(field.label(), label_style)];
        if missing {
            label_spans.push(Span::styled(" (required)", Style::default().fg(theme.error)));
        }

        let value = self.form.field(field);
        let value_line = if value.is_empty() && !focused {
            Line::from(Span::styled(
                field.placeholder(),
                Style::default()
                    .fg(theme.text_muted)
                    .add_modifier(Modifier::ITALIC),
            ))
        } else {
            let mut spans = vec![Span::styled(
                value.to_string(),
                Style::default().fg(theme.text),
            )];
            if focused {
                spans.push(Span::styled("▌", Style::default().fg(theme.accent)));
            }
            Line::from(spans)
        };

        let widget = Paragraph::new(vec![Line::from(label_spans), value_line])
            .wrap(Wrap { trim: false });
        f.render_widget(widget, area);
    }

    fn render_send_row(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let line = if self.form.is_pending() {
            Line::from(Span::styled(
                "[ Sending... ]",
                Style::default().fg(theme.text_muted),
            ))
        } else if self.editing {
            Line::from(vec![
                Span::styled(
                    "[ Send Message ]",
                    Style::default()
                        .fg(theme.primary)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    "  Enter on Message sends · Esc done",
                    Style::default().fg(theme.text_muted),
                ),
            ])
        } else {
            Line::from(Span::styled(
                "Press Enter to fill out the form",
                Style::default().fg(theme.text_muted),
            ))
        };
        f.render_widget(Paragraph::new(line), area);
    }
}

fn render_info_panels(f: &mut Frame, area: Rect, theme: &Theme, profile: &Profile) {
    let panels = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),
            Constraint::Length(4),
            Constraint::Length(4),
        ])
        .split(area);

    // Contact information
    let mut info_lines: Vec<Line> = Vec::new();
    for channel in &profile.channels {
        info_lines.push(Line::from(vec![
            Span::styled(
                format!("{}: ", channel.label),
                Style::default().fg(theme.text_secondary),
            ),
            Span::styled(channel.value.clone(), Style::default().fg(theme.text)),
        ]));
        if let Some(href) = &channel.href {
            info_lines.push(Line::from(Span::styled(
                format!("  {href}"),
                Style::default().fg(theme.text_muted),
            )));
        }
    }
    info_lines.push(Line::from(Span::styled(
        "y copies the email address",
        Style::default().fg(theme.text_muted),
    )));
    f.render_widget(
        Paragraph::new(info_lines).wrap(Wrap { trim: true }).block(
            Block::default()
                .title(" Contact Information ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.primary)),
        ),
        panels[0],
    );

    // Availability
    let availability = vec![
        Line::from(Span::styled(
            profile.availability.clone(),
            Style::default().fg(theme.text),
        )),
        Line::from(vec![
            Span::styled("● ", Style::default().fg(theme.success)),
            Span::styled("Available now", Style::default().fg(theme.success)),
        ]),
    ];
    f.render_widget(
        Paragraph::new(availability).block(
            Block::default()
                .title(" Availability ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.primary)),
        ),
        panels[1],
    );

    // Social links
    let socials: Vec<Line> = profile
        .socials
        .iter()
        .map(|social| {
            Line::from(vec![
                Span::styled(
                    format!("{}: ", social.label),
                    Style::default().fg(theme.text_secondary),
                ),
                Span::styled(social.href.clone(), Style::default().fg(theme.primary)),
            ])
        })
        .collect();
    f.render_widget(
        Paragraph::new(socials).block(
            Block::default()
                .title(" Connect With Me ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.primary)),
        ),
        panels[2],
    );
}
