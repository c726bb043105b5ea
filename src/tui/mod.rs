//! Terminal UI: root view state, event loop, and rendering.
//!
//! The root [`AppState`] owns the theme controller and passes the active
//! palette down to every section and to the toast stack each frame. The
//! stateful pieces (theme, gallery filter, contact form) have no
//! shared mutable state and talk to the root only through values and
//! component events.

/// About section renderer
pub mod about;
/// Component trait pattern
pub mod component;
/// Contact section component
pub mod contact_form;
/// Header bar renderer
pub mod header;
/// Home section renderer
pub mod hero;
/// Project gallery component
pub mod portfolio;
/// Status bar widget
pub mod status_bar;
/// Theme palette, preference, and controller
pub mod theme;
/// Toast notification stack
pub mod toast;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

use crate::models::{Profile, Project};
use crate::tui::component::Component;
use crate::tui::contact_form::{ContactEvent, ContactView};
use crate::tui::portfolio::{PortfolioEvent, PortfolioView};
use crate::tui::status_bar::StatusBar;
use crate::tui::toast::Toasts;

pub use theme::{Theme, ThemeController, ThemePreference};

/// The four top-level sections, mirroring the page's navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// Hero / landing
    Home,
    /// Biography, skills, experience
    About,
    /// Project gallery
    Portfolio,
    /// Contact form and channels
    Contact,
}

impl Section {
    /// All sections, in navigation order.
    pub const ALL: [Self; 4] = [Self::Home, Self::About, Self::Portfolio, Self::Contact];

    /// Tab label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Portfolio => "Portfolio",
            Self::Contact => "Contact",
        }
    }

    /// Next section, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Home => Self::About,
            Self::About => Self::Portfolio,
            Self::Portfolio => Self::Contact,
            Self::Contact => Self::Home,
        }
    }

    /// Previous section, wrapping around.
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Home => Self::Contact,
            Self::About => Self::Home,
            Self::Portfolio => Self::About,
            Self::Contact => Self::Portfolio,
        }
    }
}

/// Root view state.
pub struct AppState {
    // Core data
    /// Profile content for the static sections
    pub profile: Profile,
    /// Fixed project catalog
    pub catalog: Vec<Project>,

    // UI state
    /// Theme preference owner; every palette read goes through it
    pub theme: ThemeController,
    /// Active section
    pub section: Section,
    /// Project gallery component
    pub portfolio: PortfolioView,
    /// Contact section component
    pub contact: ContactView,
    /// Toast notification stack
    pub toasts: Toasts,
    /// Status bar message
    pub status_message: String,
    /// Current error message (if any)
    pub error_message: Option<String>,

    // Control flags
    /// Whether application should exit
    pub should_quit: bool,
}

impl AppState {
    /// Creates the root state around the embedded content and a resolved
    /// theme controller.
    #[must_use]
    pub fn new(profile: Profile, catalog: Vec<Project>, theme: ThemeController) -> Self {
        Self {
            profile,
            catalog,
            theme,
            section: Section::Home,
            portfolio: PortfolioView::new(),
            contact: ContactView::new(),
            toasts: Toasts::new(),
            status_message: String::new(),
            error_message: None,
            should_quit: false,
        }
    }

    /// Sets a status message (clears any error).
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.error_message = None;
    }

    /// Sets an error message shown until the next keypress.
    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error_message = Some(error.into());
    }

    fn process_portfolio_event(&mut self, event: PortfolioEvent) {
        match event {
            PortfolioEvent::CopyLink { label, url } => {
                self.copy_to_clipboard(&url, &format!("Copied {label} link to clipboard"));
            }
            PortfolioEvent::NothingToCopy => {
                self.set_status("Selected project has no link to copy");
            }
        }
    }

    fn process_contact_event(&mut self, event: ContactEvent) {
        match event {
            ContactEvent::SubmissionStarted => self.set_status("Sending message..."),
            ContactEvent::SubmissionRejected => {
                self.set_error("Please fill in all required fields");
            }
            ContactEvent::CopyEmail => {
                if let Some(email) = self.profile.email().map(ToString::to_string) {
                    self.copy_to_clipboard(&email, "Email address copied to clipboard");
                } else {
                    self.set_status("No email address listed");
                }
            }
        }
    }

    fn copy_to_clipboard(&mut self, text: &str, success_message: &str) {
        match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text)) {
            Ok(()) => self.set_status(success_message.to_string()),
            Err(e) => self.set_error(format!("Failed to copy to clipboard: {e}")),
        }
    }
}

/// Sets up the terminal for TUI mode.
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        // Render current state
        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if handle_key_event(state, key) {
                    break;
                }
            }
        }

        // Drain the in-flight submission and age toasts
        state.contact.poll_submission(&mut state.toasts);
        state.toasts.tick();

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Routes one key event. Returns `true` when the user quit.
fn handle_key_event(state: &mut AppState, key: KeyEvent) -> bool {
    // A fresh keypress retires any lingering error
    state.error_message = None;

    // Text entry owns the keyboard while the contact form is being edited
    if state.section == Section::Contact && state.contact.is_editing() {
        if let Some(event) = state.contact.handle_input(key, &state.profile) {
            state.process_contact_event(event);
        }
        return false;
    }

    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('t') => {
            let preference = state.theme.toggle();
            state.set_status(format!("{preference} theme enabled"));
        }
        KeyCode::Tab => {
            state.section = state.section.next();
            state.status_message.clear();
        }
        KeyCode::BackTab => {
            state.section = state.section.previous();
            state.status_message.clear();
        }
        KeyCode::Char('1') => state.section = Section::Home,
        KeyCode::Char('2') => state.section = Section::About,
        KeyCode::Char('3') => state.section = Section::Portfolio,
        KeyCode::Char('4') => state.section = Section::Contact,
        _ => match state.section {
            Section::Portfolio => {
                if let Some(event) = state.portfolio.handle_input(key, &state.catalog) {
                    state.process_portfolio_event(event);
                }
            }
            Section::Contact => {
                if let Some(event) = state.contact.handle_input(key, &state.profile) {
                    state.process_contact_event(event);
                }
            }
            Section::Home | Section::About => {}
        },
    }
    false
}

/// Render the UI from current state
fn render(f: &mut Frame, state: &AppState) {
    let theme = state.theme.palette();

    // Fill the whole screen with the theme background first, so the palette
    // holds regardless of terminal defaults
    let full_bg = Block::default().style(Style::default().bg(theme.background));
    f.render_widget(full_bg, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    header::render(f, chunks[0], theme, state.section, state.theme.preference());

    match state.section {
        Section::Home => hero::render(f, chunks[1], theme, &state.profile),
        Section::About => about::render(f, chunks[1], theme, &state.profile),
        Section::Portfolio => state.portfolio.render(f, chunks[1], theme, &state.catalog),
        Section::Contact => state.contact.render(f, chunks[1], theme, &state.profile),
    }

    StatusBar::render(f, chunks[2], state, theme);

    // Toasts draw last, over everything, themed like the rest
    state.toasts.render(f, f.area(), theme);
}
