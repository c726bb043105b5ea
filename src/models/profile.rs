//! Profile content: identity, biography, skills, and work history.
//!
//! Pure data carried from startup to the section renderers. None of it is
//! editable at runtime.

use crate::models::Category;

/// A group of skills under one portfolio category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillGroup {
    /// Category the skills belong to
    pub category: Category,
    /// Skill names, in display order
    pub skills: Vec<String>,
}

/// One entry in the professional-experience timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Experience {
    /// Period covered, e.g. "2023-2024"
    pub period: String,
    /// Role or engagement title
    pub role: String,
    /// Organization name
    pub organization: String,
    /// What the work involved
    pub description: String,
}

/// A way to reach the author: email, phone, location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactChannel {
    /// Channel label, e.g. "Email"
    pub label: String,
    /// Displayed value
    pub value: String,
    /// Optional outbound link for the channel
    pub href: Option<String>,
}

/// An external profile link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLink {
    /// Site label, e.g. "GitHub"
    pub label: String,
    /// Profile URL
    pub href: String,
}

/// Everything the static sections render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    /// Full name
    pub name: String,
    /// Short role line shown under the name
    pub role: String,
    /// One-line list of disciplines
    pub tagline: String,
    /// Hero summary sentence
    pub summary: String,
    /// Biography paragraphs for the about section
    pub bio: Vec<String>,
    /// Location line
    pub location: String,
    /// Experience badge, e.g. "1+ years experience"
    pub experience_badge: String,
    /// Skills grouped by category
    pub skills: Vec<SkillGroup>,
    /// Professional experience, newest first
    pub timeline: Vec<Experience>,
    /// Contact channels shown next to the form
    pub channels: Vec<ContactChannel>,
    /// External profile links
    pub socials: Vec<SocialLink>,
    /// Availability note shown in the contact section
    pub availability: String,
    /// Footer credit line
    pub footer: String,
}

impl Profile {
    /// The email address among the contact channels, if one is listed.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.channels
            .iter()
            .find(|c| c.label.eq_ignore_ascii_case("email"))
            .map(|c| c.value.as_str())
    }

    /// Skills listed under `category`, if any group exists for it.
    #[must_use]
    pub fn skills_for(&self, category: Category) -> Option<&SkillGroup> {
        self.skills.iter().find(|g| g.category == category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::default_profile;

    #[test]
    fn test_email_channel_lookup() {
        let profile = default_profile();
        let email = profile.email().expect("profile lists an email channel");
        assert!(email.contains('@'));
    }

    #[test]
    fn test_every_category_has_skills() {
        let profile = default_profile();
        for category in Category::ALL {
            let group = profile
                .skills_for(category)
                .unwrap_or_else(|| panic!("missing skill group for {}", category.label()));
            assert!(!group.skills.is_empty());
        }
    }
}
