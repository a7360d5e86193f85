//! Orchestration: the theme controller, the section router, and snippet
//! copying. Controllers hold no widget handles; they drive the
//! [`UiSurface`](crate::app::surface::UiSurface) seam.

pub mod copy;
pub mod router;
pub mod theme;

pub use copy::{CopyController, CopyOutcome};
pub use router::SectionRouter;
pub use theme::ThemeController;

#[cfg(test)]
pub(crate) mod testing {
    //! Recording fakes shared by controller tests.

    use crate::app::domain::{SectionId, ThemeChoice};
    use crate::app::infrastructure::error::{AppError, Result};
    use crate::app::infrastructure::prefs::PrefStore;
    use crate::app::surface::UiSurface;

    pub struct FakeStore {
        theme: Option<ThemeChoice>,
        fail_writes: bool,
    }

    impl FakeStore {
        pub fn with(theme: Option<ThemeChoice>) -> Self {
            Self { theme, fail_writes: false }
        }

        pub fn failing() -> Self {
            Self { theme: None, fail_writes: true }
        }

        pub fn stored(&self) -> Option<ThemeChoice> {
            self.theme
        }

        /// Simulate the preference file disappearing out from under a
        /// running session.
        pub fn clear(&mut self) {
            self.theme = None;
        }
    }

    impl PrefStore for FakeStore {
        fn load_theme(&self) -> Option<ThemeChoice> {
            self.theme
        }

        fn store_theme(&mut self, choice: ThemeChoice) -> Result<()> {
            if self.fail_writes {
                return Err(AppError::Preferences("store unavailable".to_string()));
            }
            self.theme = Some(choice);
            Ok(())
        }
    }

    #[derive(Default)]
    pub struct FakeSurface {
        pub theme: Option<ThemeChoice>,
        pub toggle_icon: String,
        pub nav_active: Option<SectionId>,
        pub overlay_open: bool,
        pub scrolled_top: bool,
        active: Vec<SectionId>,
        missing: Vec<SectionId>,
    }

    impl FakeSurface {
        /// Simulate a content/markup mismatch: no widget exists for `id`.
        pub fn without_section(mut self, id: SectionId) -> Self {
            self.missing.push(id);
            self
        }

        pub fn active_sections(&self) -> Vec<SectionId> {
            self.active.clone()
        }
    }

    impl UiSurface for FakeSurface {
        fn paint_theme(&mut self, choice: ThemeChoice) {
            self.theme = Some(choice);
        }

        fn set_toggle_icon(&mut self, icon: &str) {
            self.toggle_icon = icon.to_string();
        }

        fn deactivate_all_sections(&mut self) {
            self.active.clear();
        }

        fn activate_section(&mut self, id: SectionId) -> bool {
            if self.missing.contains(&id) {
                return false;
            }
            self.active.push(id);
            true
        }

        fn highlight_nav(&mut self, id: SectionId) {
            self.nav_active = Some(id);
        }

        fn close_overlay(&mut self) {
            self.overlay_open = false;
        }

        fn scroll_to_top(&mut self) {
            self.scrolled_top = true;
        }
    }
}
