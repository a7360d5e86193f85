//! Core data: theme choice, section identifiers, and the static handbook
//! catalog.

pub mod content;
pub mod section;
pub mod theme;

pub use content::{Card, ResourceLink, Section, Snippet, SnippetLang};
pub use section::SectionId;
pub use theme::ThemeChoice;
