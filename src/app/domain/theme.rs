use serde::{Deserialize, Serialize};

/// The binary visual theme. Persisted as `"light"` / `"dark"`; an absent
/// value means the user has never chosen and the app follows the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    Light,
    Dark,
}

impl ThemeChoice {
    pub fn opposite(self) -> ThemeChoice {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Theme matching a "system prefers dark" signal.
    pub fn from_system_dark(dark: bool) -> ThemeChoice {
        if dark { Self::Dark } else { Self::Light }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Label for the toggle control: sun while dark is active (click to go
    /// light), moon while light is active.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Self::Dark => "\u{2600}",
            Self::Light => "\u{1f319}",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_is_involution() {
        assert_eq!(ThemeChoice::Light.opposite(), ThemeChoice::Dark);
        assert_eq!(ThemeChoice::Dark.opposite().opposite(), ThemeChoice::Dark);
    }

    #[test]
    fn test_from_system_signal() {
        assert_eq!(ThemeChoice::from_system_dark(true), ThemeChoice::Dark);
        assert_eq!(ThemeChoice::from_system_dark(false), ThemeChoice::Light);
    }

    #[test]
    fn test_serialized_forms() {
        assert_eq!(serde_json::to_string(&ThemeChoice::Dark).unwrap(), "\"dark\"");
        let parsed: ThemeChoice = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(parsed, ThemeChoice::Light);
    }
}
