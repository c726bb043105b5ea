//! Component trait pattern for TUI sections.
//!
//! Stateful sections are self-contained components that handle their own
//! input and rendering, and emit events for anything the root view must act
//! on (clipboard access, status messages). Shared application data stays
//! owned by the root view and is lent to the component per call as its
//! context. Stateless sections are plain render functions and skip the
//! trait.

use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

use crate::tui::Theme;

/// A component that can be rendered and handle input.
pub trait Component {
    /// Read-only application data this component needs on every call
    type Context: ?Sized;

    /// Event type this component can emit
    type Event;

    /// Handle keyboard input.
    ///
    /// Returns `Some(Event)` if the component wants to signal something to
    /// the parent; `None` if input was handled internally.
    fn handle_input(&mut self, key: KeyEvent, context: &Self::Context) -> Option<Self::Event>;

    /// Render the component within `area`.
    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme, context: &Self::Context);
}
