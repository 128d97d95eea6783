/// A named, vertically stacked region of the page with one navigation entry.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Section {
    /// Stable key, also the anchor id of the section element.
    pub id: String,
    /// Navigation label.
    pub label: String,
    /// Icon name shown next to the label.
    pub icon: String,
}

impl Section {
    /// Build a section entry.
    pub fn new(id: impl Into<String>, label: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: icon.into(),
        }
    }
}

/// Sections of the portfolio page, in on-page order.
pub fn default_sections() -> Vec<Section> {
    vec![
        Section::new("hero", "Home", "home"),
        Section::new("about", "About", "user"),
        Section::new("experience", "Experience", "briefcase"),
        Section::new("projects", "Projects", "cpu"),
        Section::new("dockerhub", "Docker Hub", "server"),
        Section::new("packages", "My Packages", "package"),
        Section::new("medium", "Medium", "book-open"),
    ]
}
