//! Project gallery with category filtering.
//!
//! Holds the filter selection and the highlighted project; the visible
//! subset is derived from the catalog on every use, never cached. An empty
//! subset renders an explicit empty state rather than a blank panel.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::models::{CategoryFilter, Project};
use crate::tui::component::Component;
use crate::tui::Theme;

/// Events emitted by the gallery for the root view to act on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortfolioEvent {
    /// User asked to copy the highlighted project's link
    CopyLink {
        /// Which link was chosen (live site, source, ...)
        label: &'static str,
        /// The URL to copy
        url: String,
    },
    /// The highlighted project has no outbound link to copy
    NothingToCopy,
}

/// Gallery state: current filter and highlighted row.
#[derive(Debug)]
pub struct PortfolioView {
    filter: CategoryFilter,
    selected: usize,
    list_state: ListState,
}

impl PortfolioView {
    /// Creates a gallery showing the full catalog.
    #[must_use]
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            filter: CategoryFilter::All,
            selected: 0,
            list_state,
        }
    }

    /// Current filter selection.
    #[must_use]
    pub const fn filter(&self) -> CategoryFilter {
        self.filter
    }

    /// Selects a filter and resets the highlight to the top.
    pub fn select_filter(&mut self, filter: CategoryFilter) {
        self.filter = filter;
        self.selected = 0;
        self.list_state.select(Some(0));
    }

    /// The highlighted project under the current filter, if any.
    #[must_use]
    pub fn selected_project<'a>(&self, catalog: &'a [Project]) -> Option<&'a Project> {
        self.filter.visible(catalog).get(self.selected).copied()
    }

    /// Whether the current filter leaves nothing to show.
    #[must_use]
    pub fn empty_state_active(&self, catalog: &[Project]) -> bool {
        self.filter.visible(catalog).is_empty()
    }

    fn move_selection(&mut self, catalog: &[Project], delta: isize) {
        let count = self.filter.visible(catalog).len();
        if count == 0 {
            return;
        }
        let count = count as isize;
        let next = (self.selected as isize + delta).rem_euclid(count);
        self.selected = next as usize;
        self.list_state.select(Some(self.selected));
    }

    fn copy_event(&self, catalog: &[Project]) -> PortfolioEvent {
        self.selected_project(catalog)
            .and_then(|project| project.links.primary())
            .map_or(PortfolioEvent::NothingToCopy, |(label, url)| {
                PortfolioEvent::CopyLink {
                    label,
                    url: url.to_string(),
                }
            })
    }
}

impl Default for PortfolioView {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for PortfolioView {
    type Context = [Project];
    type Event = PortfolioEvent;

    fn handle_input(&mut self, key: KeyEvent, catalog: &[Project]) -> Option<PortfolioEvent> {
        match key.code {
            KeyCode::Left | KeyCode::Char('[') => {
                self.select_filter(self.filter.previous());
                None
            }
            KeyCode::Right | KeyCode::Char(']') => {
                self.select_filter(self.filter.next());
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_selection(catalog, -1);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_selection(catalog, 1);
                None
            }
            KeyCode::Char('y') => Some(self.copy_event(catalog)),
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme, catalog: &[Project]) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(area);

        self.render_filter_chips(f, chunks[0], theme);

        let visible = self.filter.visible(catalog);
        if visible.is_empty() {
            let empty = Paragraph::new(Line::from(Span::styled(
                "No projects found in this category.",
                Style::default().fg(theme.text_muted),
            )))
            .centered()
            .block(Block::default().borders(Borders::ALL).border_style(
                Style::default().fg(theme.text_muted),
            ));
            f.render_widget(empty, chunks[1]);
            return;
        }

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(chunks[1]);

        self.render_project_list(f, columns[0], theme, &visible);
        if let Some(project) = visible.get(self.selected) {
            render_project_card(f, columns[1], theme, project);
        }
    }
}

impl PortfolioView {
    fn render_filter_chips(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let mut spans = vec![Span::raw(" ")];
        for option in CategoryFilter::OPTIONS {
            let style = if option == self.filter {
                Style::default()
                    .fg(option.accent())
                    .bg(theme.highlight_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text_secondary)
            };
            spans.push(Span::styled(format!(" {} ", option.label()), style));
            spans.push(Span::raw(" "));
        }
        f.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_project_list(
        &self,
        f: &mut Frame,
        area: Rect,
        theme: &Theme,
        visible: &[&Project],
    ) {
        let items: Vec<ListItem> = visible
            .iter()
            .map(|project| {
                let mut spans = vec![
                    Span::styled("● ", Style::default().fg(project.category.accent())),
                    Span::styled(&project.title, Style::default().fg(theme.text)),
                ];
                if project.featured {
                    spans.push(Span::styled(" ★", Style::default().fg(theme.accent)));
                }
                ListItem::new(Line::from(spans))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .title(" Projects ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.primary)),
            )
            .highlight_style(
                Style::default()
                    .bg(theme.highlight_bg)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▸ ");

        let mut list_state = self.list_state.clone();
        f.render_stateful_widget(list, area, &mut list_state);
    }
}

fn render_project_card(f: &mut Frame, area: Rect, theme: &Theme, project: &Project) {
    let mut lines: Vec<Line> = Vec::new();

    let mut title_spans = vec![Span::styled(
        &project.title,
        Style::default()
            .fg(theme.primary)
            .add_modifier(Modifier::BOLD),
    )];
    if project.featured {
        title_spans.push(Span::styled(
            "  ★ Featured Project",
            Style::default().fg(theme.accent),
        ));
    }
    lines.push(Line::from(title_spans));

    lines.push(Line::from(Span::styled(
        format!("[{}]", project.category.label()),
        Style::default().fg(project.category.accent()),
    )));
    lines.push(Line::default());

    lines.push(Line::from(Span::styled(
        project.description.clone(),
        Style::default().fg(theme.text),
    )));
    lines.push(Line::default());

    if !project.technologies.is_empty() {
        let mut spans = vec![Span::styled(
            "Technologies: ",
            Style::default().fg(theme.text_secondary),
        )];
        for (i, tech) in project.technologies.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(
                format!("[{tech}]"),
                Style::default().fg(theme.accent),
            ));
        }
        lines.push(Line::from(spans));
        lines.push(Line::default());
    }

    for (label, url) in project.links.entries() {
        lines.push(Line::from(vec![
            Span::styled(format!("{label}: "), Style::default().fg(theme.text_secondary)),
            Span::styled(url.to_string(), Style::default().fg(theme.primary)),
        ]));
    }
    if !project.image.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("Image: {}", project.image),
            Style::default().fg(theme.text_muted),
        )));
    }

    let card = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" Details ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.primary))
                .style(Style::default().bg(theme.surface)),
        );
    f.render_widget(card, area);
}
