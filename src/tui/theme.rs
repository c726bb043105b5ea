//! Theme preference and palette management.
//!
//! One explicitly-owned [`ThemeController`] resolves the startup preference
//! (persisted value first, OS signal second, light last), carries the active
//! [`Theme`] palette, and keeps palette and persisted value in lock-step on
//! every toggle. Every widget reads the palette through the controller
//! rather than consulting any ambient state.

use ratatui::style::Color;

use crate::constants::THEME_PREF_KEY;
use crate::prefs::PreferenceStore;

/// The persisted light/dark display choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemePreference {
    /// Light palette
    Light,
    /// Dark palette
    Dark,
}

impl ThemePreference {
    /// Value stored in the preference file.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parses a stored value. Anything but `"dark"`/`"light"` reads as no
    /// preference, so a corrupt entry can never wedge startup.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// The opposite preference. Toggle is its own inverse.
    #[must_use]
    pub const fn inverted(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl std::fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Light => write!(f, "Light"),
            Self::Dark => write!(f, "Dark"),
        }
    }
}

/// Queries the OS color-scheme signal.
///
/// Sampled once at initialization; Unspecified and detection errors both
/// read as "no signal".
#[must_use]
pub fn detect_os_preference() -> Option<ThemePreference> {
    match dark_light::detect() {
        dark_light::Mode::Light => Some(ThemePreference::Light),
        dark_light::Mode::Dark => Some(ThemePreference::Dark),
        dark_light::Mode::Default => None,
    }
}

/// Semantic color palette for the TUI.
///
/// Provides consistent colors across all sections with support for both
/// dark and light terminal backgrounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Primary color for borders, titles, and emphasis
    pub primary: Color,
    /// Accent color for highlights and focus states
    pub accent: Color,
    /// Success state color
    pub success: Color,
    /// Error state color
    pub error: Color,

    /// Primary text content color
    pub text: Color,
    /// Secondary text color for labels and less important content
    pub text_secondary: Color,
    /// Muted text color for help text and dim content
    pub text_muted: Color,

    /// Main background color
    pub background: Color,
    /// Highlight/selection background color
    pub highlight_bg: Color,
    /// Surface color for cards and elevated panels
    pub surface: Color,
}

impl Theme {
    /// Palette for the given preference.
    #[must_use]
    pub const fn for_preference(preference: ThemePreference) -> Self {
        match preference {
            ThemePreference::Dark => Self::dark(),
            ThemePreference::Light => Self::light(),
        }
    }

    /// Dark palette, for dark terminal backgrounds.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Cyan,
            accent: Color::Yellow,
            success: Color::Green,
            error: Color::Red,

            text: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::DarkGray,

            background: Color::Black,
            highlight_bg: Color::DarkGray,
            surface: Color::Rgb(30, 30, 30),
        }
    }

    /// Light palette. Accents are darkened for visibility on white.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Blue,
            accent: Color::Rgb(180, 100, 0),
            success: Color::Rgb(0, 128, 0),
            error: Color::Red,

            text: Color::Black,
            text_secondary: Color::Rgb(60, 60, 60),
            text_muted: Color::Gray,

            background: Color::White,
            highlight_bg: Color::Rgb(230, 230, 230),
            surface: Color::Rgb(245, 245, 245),
        }
    }
}

/// Owner of the theme preference and the palette derived from it.
///
/// The palette and the persisted value always agree immediately after any
/// toggle; there is no observable intermediate state.
pub struct ThemeController {
    preference: ThemePreference,
    palette: Theme,
    store: Box<dyn PreferenceStore>,
}

impl ThemeController {
    /// Resolves the startup preference and builds the controller.
    ///
    /// Resolution order: the persisted value always wins when present and
    /// parseable; otherwise the OS signal; otherwise light. Initialization
    /// never writes the store; only toggles do.
    #[must_use]
    pub fn initialize(store: Box<dyn PreferenceStore>) -> Self {
        Self::resolve(store, detect_os_preference())
    }

    /// [`ThemeController::initialize`] with the OS signal injected, so
    /// resolution can be exercised without the real OS query.
    #[must_use]
    pub fn resolve(store: Box<dyn PreferenceStore>, os_signal: Option<ThemePreference>) -> Self {
        let preference = store
            .get(THEME_PREF_KEY)
            .and_then(|value| ThemePreference::parse(&value))
            .or(os_signal)
            .unwrap_or(ThemePreference::Light);

        Self {
            preference,
            palette: Theme::for_preference(preference),
            store,
        }
    }

    /// Flips the preference, swaps the palette, and persists the new value.
    ///
    /// A failed write is logged and otherwise ignored; the in-memory flip
    /// stands and the next successful write reconverges the store.
    pub fn toggle(&mut self) -> ThemePreference {
        let next = self.preference.inverted();
        self.preference = next;
        self.palette = Theme::for_preference(next);
        if let Err(e) = self.store.set(THEME_PREF_KEY, next.as_str()) {
            tracing::warn!("Failed to persist theme preference: {e:#}");
        }
        next
    }

    /// Current preference.
    #[must_use]
    pub const fn preference(&self) -> ThemePreference {
        self.preference
    }

    /// Active palette.
    #[must_use]
    pub const fn palette(&self) -> &Theme {
        &self.palette
    }

    /// Whether the dark palette is active.
    #[must_use]
    pub const fn is_dark(&self) -> bool {
        matches!(self.preference, ThemePreference::Dark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::MemoryPreferences;

    #[test]
    fn test_persisted_value_wins_over_os_signal() {
        let store = MemoryPreferences::with_entry(THEME_PREF_KEY, "dark");
        let controller =
            ThemeController::resolve(Box::new(store), Some(ThemePreference::Light));
        assert_eq!(controller.preference(), ThemePreference::Dark);
        assert!(controller.is_dark());
    }

    #[test]
    fn test_os_signal_used_when_store_empty() {
        let controller = ThemeController::resolve(
            Box::new(MemoryPreferences::new()),
            Some(ThemePreference::Dark),
        );
        assert_eq!(controller.preference(), ThemePreference::Dark);
    }

    #[test]
    fn test_light_default_when_both_absent() {
        let controller = ThemeController::resolve(Box::new(MemoryPreferences::new()), None);
        assert_eq!(controller.preference(), ThemePreference::Light);
        assert_eq!(*controller.palette(), Theme::light());
    }

    #[test]
    fn test_unparseable_stored_value_reads_as_absent() {
        let store = MemoryPreferences::with_entry(THEME_PREF_KEY, "solarized");
        let controller =
            ThemeController::resolve(Box::new(store), Some(ThemePreference::Dark));
        assert_eq!(controller.preference(), ThemePreference::Dark);
    }

    #[test]
    fn test_initialize_does_not_write_store() {
        let store = MemoryPreferences::new();
        let observer = store.clone();
        let _controller = ThemeController::resolve(Box::new(store), Some(ThemePreference::Dark));
        assert_eq!(observer.get(THEME_PREF_KEY), None);
    }

    #[test]
    fn test_toggle_persists_and_swaps_palette() {
        let store = MemoryPreferences::new();
        let observer = store.clone();
        let mut controller = ThemeController::resolve(Box::new(store), None);

        let flipped = controller.toggle();
        assert_eq!(flipped, ThemePreference::Dark);
        assert_eq!(*controller.palette(), Theme::dark());
        assert_eq!(observer.get(THEME_PREF_KEY), Some("dark".to_string()));
    }

    #[test]
    fn test_double_toggle_restores_value_and_store() {
        for start in ["light", "dark"] {
            let store = MemoryPreferences::with_entry(THEME_PREF_KEY, start);
            let observer = store.clone();
            let mut controller = ThemeController::resolve(Box::new(store), None);
            let original = controller.preference();

            controller.toggle();
            controller.toggle();

            assert_eq!(controller.preference(), original);
            assert_eq!(observer.get(THEME_PREF_KEY), Some(start.to_string()));
        }
    }

    #[test]
    fn test_palettes_are_distinct_and_readable() {
        let dark = Theme::dark();
        assert_eq!(dark.text, Color::White);
        assert_eq!(dark.background, Color::Black);

        let light = Theme::light();
        assert_eq!(light.text, Color::Black);
        assert_eq!(light.background, Color::White);
        // Yellow accents are unreadable on white
        assert_ne!(light.accent, Color::Yellow);
    }

    #[test]
    fn test_preference_round_trips_through_storage_form() {
        for preference in [ThemePreference::Light, ThemePreference::Dark] {
            assert_eq!(
                ThemePreference::parse(preference.as_str()),
                Some(preference)
            );
        }
        assert_eq!(ThemePreference::parse("auto"), None);
    }
}
