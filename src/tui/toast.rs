//! Transient toast notifications.
//!
//! The TUI's implementation of the notification sink: outcomes stack in the
//! bottom-right corner and age out on the event-loop tick. Rendering always
//! uses the palette passed in from the root view, so toasts follow theme
//! toggles immediately.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::notify::NotificationSink;
use crate::tui::Theme;

/// Ticks a toast stays visible (~4 seconds at the 100ms poll cadence).
const TOAST_TICKS: u16 = 40;

/// Most toasts shown at once; older ones drop off first.
const MAX_VISIBLE: usize = 3;

/// Visual flavor of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    /// Confirmation notice
    Success,
    /// Failure notice
    Failure,
}

/// One transient notice.
#[derive(Debug, Clone)]
pub struct Toast {
    /// Notice flavor
    pub kind: ToastKind,
    /// Notice text
    pub message: String,
    ticks_remaining: u16,
}

/// Bottom-right toast stack.
#[derive(Debug, Default)]
pub struct Toasts {
    entries: Vec<Toast>,
}

impl Toasts {
    /// Creates an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ages entries by one tick and drops the expired.
    pub fn tick(&mut self) {
        for toast in &mut self.entries {
            toast.ticks_remaining = toast.ticks_remaining.saturating_sub(1);
        }
        self.entries.retain(|t| t.ticks_remaining > 0);
    }

    /// Whether anything is currently visible.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Currently visible entries, newest last.
    #[must_use]
    pub fn entries(&self) -> &[Toast] {
        &self.entries
    }

    fn push(&mut self, kind: ToastKind, message: &str) {
        self.entries.push(Toast {
            kind,
            message: message.to_string(),
            ticks_remaining: TOAST_TICKS,
        });
        if self.entries.len() > MAX_VISIBLE {
            let excess = self.entries.len() - MAX_VISIBLE;
            self.entries.drain(..excess);
        }
    }

    /// Renders the stack anchored to the bottom-right of `area`.
    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let width = area.width.min(46);
        if width < 8 || area.height < 4 {
            return;
        }

        let mut bottom = area.y + area.height.saturating_sub(1);
        for toast in self.entries.iter().rev() {
            let inner_width = width.saturating_sub(4) as usize;
            let lines = wrap_text(&toast.message, inner_width.max(1));
            let height = lines.len() as u16 + 2;
            if bottom < area.y + height {
                break;
            }

            let toast_area = Rect {
                x: area.x + area.width - width,
                y: bottom - height,
                width,
                height,
            };

            let (marker, color) = match toast.kind {
                ToastKind::Success => ("✓", theme.success),
                ToastKind::Failure => ("✗", theme.error),
            };

            let text: Vec<Line> = lines
                .into_iter()
                .enumerate()
                .map(|(i, line)| {
                    if i == 0 {
                        Line::from(vec![
                            Span::styled(format!("{marker} "), Style::default().fg(color)),
                            Span::styled(line, Style::default().fg(theme.text)),
                        ])
                    } else {
                        Line::from(Span::styled(
                            format!("  {line}"),
                            Style::default().fg(theme.text),
                        ))
                    }
                })
                .collect();

            f.render_widget(Clear, toast_area);
            let widget = Paragraph::new(text).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color))
                    .style(Style::default().bg(theme.surface)),
            );
            f.render_widget(widget, toast_area);

            bottom = toast_area.y.saturating_sub(1);
        }
    }
}

impl NotificationSink for Toasts {
    fn notify_success(&mut self, message: &str) {
        self.push(ToastKind::Success, message);
    }

    fn notify_failure(&mut self, message: &str) {
        self.push(ToastKind::Failure, message);
    }
}

/// Greedy word wrap for toast bodies.
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(current);
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}
