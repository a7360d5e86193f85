use std::fmt;

/// Identifier of a content section. The set is closed: one variant per
/// section built into the handbook, fixed at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Html,
    Css,
    JavaScript,
    Responsive,
    Resources,
}

impl SectionId {
    /// All sections, in sidebar order. The first entry is the section shown
    /// at startup.
    pub fn all() -> &'static [SectionId] {
        &[
            Self::Html,
            Self::Css,
            Self::JavaScript,
            Self::Responsive,
            Self::Resources,
        ]
    }

    pub fn default_section() -> SectionId {
        Self::Html
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Css => "css",
            Self::JavaScript => "javascript",
            Self::Responsive => "responsive",
            Self::Resources => "resources",
        }
    }

    /// Title shown in the section header and on nav buttons.
    pub fn title(self) -> &'static str {
        match self {
            Self::Html => "HTML Fundamentals",
            Self::Css => "CSS Styling",
            Self::JavaScript => "JavaScript Basics",
            Self::Responsive => "Responsive Design",
            Self::Resources => "Resources",
        }
    }

    pub fn nav_label(self) -> &'static str {
        match self {
            Self::Html => "HTML",
            Self::Css => "CSS",
            Self::JavaScript => "JavaScript",
            Self::Responsive => "Responsive",
            Self::Resources => "Resources",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_first() {
        assert_eq!(SectionId::all()[0], SectionId::default_section());
        assert_eq!(SectionId::default_section(), SectionId::Html);
    }

    #[test]
    fn test_string_forms_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for id in SectionId::all() {
            assert!(seen.insert(id.as_str()), "duplicate id string {}", id);
        }
    }
}
