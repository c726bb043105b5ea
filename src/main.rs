//! Termfolio - Terminal portfolio viewer
//!
//! Presents a personal portfolio in the terminal: biography, skills, work
//! history, a filterable project gallery, and a contact form, with a
//! persisted light/dark theme preference.

use anyhow::Result;
use clap::Parser;
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use termfolio::content;
use termfolio::prefs::{FilePreferences, MemoryPreferences, PreferenceStore};
use termfolio::tui::{self, AppState, ThemeController};

/// Termfolio - Terminal portfolio viewer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {}

/// Sends logs to a file next to the preference store; writing to
/// stdout/stderr would corrupt the raw-mode terminal, so when no log file
/// can be opened we prefer no logs at all.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let log_file = FilePreferences::default_path().ok().and_then(|prefs_path| {
        let log_path = prefs_path.with_file_name("termfolio.log");
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent).ok()?;
        }
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
            .ok()
    });

    if let Some(file) = log_file {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();
        tracing::info!("Logging initialized");
    } else {
        tracing_subscriber::registry().with(env_filter).init();
    }
}

fn main() -> Result<()> {
    Cli::parse();
    init_tracing();

    // An unreachable preference file downgrades to a session-only store;
    // the theme still toggles, it just won't survive a restart.
    let store: Box<dyn PreferenceStore> = match FilePreferences::open_default() {
        Ok(prefs) => Box::new(prefs),
        Err(e) => {
            tracing::warn!("Preference file unavailable, theme will not persist: {e:#}");
            Box::new(MemoryPreferences::new())
        }
    };
    let theme = ThemeController::initialize(store);

    let mut state = AppState::new(content::default_profile(), content::default_catalog(), theme);

    // Initialize TUI
    let mut terminal = tui::setup_terminal()?;

    // Run main TUI loop
    let result = tui::run_tui(&mut state, &mut terminal);

    // Restore terminal
    tui::restore_terminal(terminal)?;

    result
}
