//! Data models for the portfolio.
//!
//! Everything in here is constructed once at startup from code-embedded
//! literals and never mutated at runtime; the only moving part is the
//! [`CategoryFilter`] selection, which lives in the view state.

/// Profile content: identity, biography, skills, and work history.
pub mod profile;
/// Project catalog, categories, and the category filter.
pub mod project;

pub use profile::{ContactChannel, Experience, Profile, SkillGroup, SocialLink};
pub use project::{Category, CategoryFilter, Project, ProjectLinks};
