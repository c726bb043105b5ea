//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the preference-store keys.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Termfolio";

/// The binary name of the application (used in command examples, lowercase).
pub const APP_BINARY_NAME: &str = "termfolio";

/// Preference-store key under which the theme choice is persisted.
///
/// The stored value is `"dark"` or `"light"`; anything else is treated as
/// "no preference recorded".
pub const THEME_PREF_KEY: &str = "theme";
