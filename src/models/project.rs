//! Project catalog and category filtering.
//!
//! The catalog is a fixed ordered sequence of [`Project`] records. The only
//! state here is the [`CategoryFilter`] selection; deriving the visible
//! subset from it is a pure function with no side effects.

use ratatui::style::Color;

/// Fixed classification tags for portfolio projects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Security assessments, penetration tests, incident response
    Cybersecurity,
    /// Application and backend development
    Development,
    /// UI/UX and visual design work
    Design,
    /// Data analysis and machine learning
    Data,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Self; 4] = [
        Self::Cybersecurity,
        Self::Development,
        Self::Design,
        Self::Data,
    ];

    /// Display label for this category.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Cybersecurity => "Cybersecurity",
            Self::Development => "Development",
            Self::Design => "Design",
            Self::Data => "Data Science",
        }
    }

    /// Accent color used for this category's badges and filter chip.
    #[must_use]
    pub const fn accent(self) -> Color {
        match self {
            Self::Cybersecurity => Color::Red,
            Self::Development => Color::Blue,
            Self::Design => Color::Magenta,
            Self::Data => Color::Green,
        }
    }
}

/// Outbound links attached to a project.
///
/// All fields are optional; design-category items typically carry a case
/// study document and a design-tool link instead of a live site and source
/// repository. Values are plain URLs, not validated beyond presence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectLinks {
    /// Deployed site
    pub live_url: Option<String>,
    /// Source repository
    pub source_url: Option<String>,
    /// Case study or specification document
    pub document_url: Option<String>,
    /// Design tool workspace (e.g. a Figma file)
    pub design_tool_url: Option<String>,
}

impl ProjectLinks {
    /// The primary outbound link: the first populated field, in the order
    /// live site, source, document, design tool.
    #[must_use]
    pub fn primary(&self) -> Option<(&'static str, &str)> {
        if let Some(url) = &self.live_url {
            Some(("live site", url))
        } else if let Some(url) = &self.source_url {
            Some(("source", url))
        } else if let Some(url) = &self.document_url {
            Some(("document", url))
        } else {
            self.design_tool_url
                .as_deref()
                .map(|url| ("design file", url))
        }
    }

    /// All populated links with their display labels, in a stable order.
    #[must_use]
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        let mut entries = Vec::new();
        if let Some(url) = &self.live_url {
            entries.push(("Live", url.as_str()));
        }
        if let Some(url) = &self.source_url {
            entries.push(("Source", url.as_str()));
        }
        if let Some(url) = &self.document_url {
            entries.push(("Case study", url.as_str()));
        }
        if let Some(url) = &self.design_tool_url {
            entries.push(("Figma", url.as_str()));
        }
        entries
    }
}

/// A single portfolio entry.
///
/// Immutable once constructed; the catalog never changes at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    /// Unique identifier
    pub id: String,
    /// Project title
    pub title: String,
    /// Short description
    pub description: String,
    /// Classification tag
    pub category: Category,
    /// Illustration reference (URL)
    pub image: String,
    /// Technology tags, in display order
    pub technologies: Vec<String>,
    /// Optional outbound links
    pub links: ProjectLinks,
    /// Highlighted on the gallery
    pub featured: bool,
}

impl Project {
    /// Creates a project with no technologies, links, or featured flag.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        category: Category,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            category,
            image: image.into(),
            technologies: Vec::new(),
            links: ProjectLinks::default(),
            featured: false,
        }
    }

    /// Sets the technology tags.
    #[must_use]
    pub fn with_technologies<I, S>(mut self, technologies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.technologies = technologies.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the deployed-site link.
    #[must_use]
    pub fn with_live_url(mut self, url: impl Into<String>) -> Self {
        self.links.live_url = Some(url.into());
        self
    }

    /// Sets the source-repository link.
    #[must_use]
    pub fn with_source_url(mut self, url: impl Into<String>) -> Self {
        self.links.source_url = Some(url.into());
        self
    }

    /// Sets the case-study document link.
    #[must_use]
    pub fn with_document_url(mut self, url: impl Into<String>) -> Self {
        self.links.document_url = Some(url.into());
        self
    }

    /// Sets the design-tool link.
    #[must_use]
    pub fn with_design_tool_url(mut self, url: impl Into<String>) -> Self {
        self.links.design_tool_url = Some(url.into());
        self
    }

    /// Marks the project as featured.
    #[must_use]
    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }
}

/// Current gallery selection: everything, or a single category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Show the full catalog
    #[default]
    All,
    /// Show only projects in one category
    Only(Category),
}

impl CategoryFilter {
    /// All selectable filter options, in chip display order.
    pub const OPTIONS: [Self; 5] = [
        Self::All,
        Self::Only(Category::Cybersecurity),
        Self::Only(Category::Development),
        Self::Only(Category::Design),
        Self::Only(Category::Data),
    ];

    /// Display label for the filter chip.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All Projects",
            Self::Only(category) => category.label(),
        }
    }

    /// Accent color for the filter chip. The "all" chip uses a neutral
    /// accent rather than any category color.
    #[must_use]
    pub const fn accent(self) -> Color {
        match self {
            Self::All => Color::Gray,
            Self::Only(category) => category.accent(),
        }
    }

    /// Whether `project` passes this filter.
    #[must_use]
    pub fn matches(self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => project.category == category,
        }
    }

    /// The visible subset of `catalog` under this selection.
    ///
    /// Pure: for [`CategoryFilter::All`] every catalog entry is returned, in
    /// order; for a specific category, the stable-ordered matching subset.
    /// An empty result is valid and drives the gallery's empty state.
    #[must_use]
    pub fn visible<'a>(self, catalog: &'a [Project]) -> Vec<&'a Project> {
        catalog.iter().filter(|p| self.matches(p)).collect()
    }

    /// The next filter option, wrapping past the end.
    #[must_use]
    pub fn next(self) -> Self {
        let index = Self::OPTIONS.iter().position(|f| *f == self).unwrap_or(0);
        Self::OPTIONS[(index + 1) % Self::OPTIONS.len()]
    }

    /// The previous filter option, wrapping past the start.
    #[must_use]
    pub fn previous(self) -> Self {
        let index = Self::OPTIONS.iter().position(|f| *f == self).unwrap_or(0);
        Self::OPTIONS[(index + Self::OPTIONS.len() - 1) % Self::OPTIONS.len()]
    }
}
