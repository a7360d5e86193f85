//! Single-selection navigation among the fixed section set.

use crate::app::domain::SectionId;
use crate::app::surface::UiSurface;

/// Tracks which content section is active and keeps the section widgets and
/// nav highlight in agreement. Lives for the whole session; the only state
/// is the active-section pointer.
pub struct SectionRouter {
    active: Option<SectionId>,
}

impl SectionRouter {
    pub fn new() -> Self {
        Self { active: None }
    }

    /// Show the default section. Called once at startup.
    pub fn show_initial(&mut self, surface: &mut dyn UiSurface) {
        self.show_section(SectionId::default_section(), surface);
    }

    pub fn active(&self) -> Option<SectionId> {
        self.active
    }

    /// Switch to `id`. Safe to call with the already-active id; the steps
    /// re-run and land in the same state.
    ///
    /// A missing section widget is a content/markup mismatch, not a crash:
    /// it logs, leaves zero sections visible, and the nav highlight still
    /// moves so the user sees which entry they picked.
    pub fn show_section(&mut self, id: SectionId, surface: &mut dyn UiSurface) {
        surface.deactivate_all_sections();
        if !surface.activate_section(id) {
            eprintln!("Section not found: {}-section", id);
        }
        surface.highlight_nav(id);
        self.active = Some(id);
        surface.close_overlay();
        surface.scroll_to_top();
    }
}

impl Default for SectionRouter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::controllers::testing::FakeSurface;

    #[test]
    fn test_initial_shows_default_section() {
        let mut surface = FakeSurface::default();
        let mut router = SectionRouter::new();
        router.show_initial(&mut surface);

        assert_eq!(router.active(), Some(SectionId::Html));
        assert_eq!(surface.active_sections(), vec![SectionId::Html]);
        assert_eq!(surface.nav_active, Some(SectionId::Html));
    }

    #[test]
    fn test_exactly_one_active_after_each_switch() {
        let mut surface = FakeSurface::default();
        let mut router = SectionRouter::new();
        router.show_initial(&mut surface);

        for &id in SectionId::all() {
            router.show_section(id, &mut surface);
            assert_eq!(surface.active_sections(), vec![id]);
            assert_eq!(surface.nav_active, Some(id));
            assert_eq!(router.active(), Some(id));
        }
    }

    #[test]
    fn test_switch_closes_overlay_and_scrolls_top() {
        let mut surface = FakeSurface::default();
        surface.overlay_open = true;
        surface.scrolled_top = false;

        let mut router = SectionRouter::new();
        router.show_section(SectionId::Css, &mut surface);

        assert!(!surface.overlay_open);
        assert!(surface.scrolled_top);
    }

    #[test]
    fn test_missing_section_leaves_none_active() {
        let mut surface = FakeSurface::default().without_section(SectionId::Responsive);
        let mut router = SectionRouter::new();
        router.show_section(SectionId::Html, &mut surface);

        router.show_section(SectionId::Responsive, &mut surface);
        assert!(surface.active_sections().is_empty());
        // The highlight and the recorded pointer still move
        assert_eq!(surface.nav_active, Some(SectionId::Responsive));
        assert_eq!(router.active(), Some(SectionId::Responsive));
    }

    #[test]
    fn test_repeat_show_is_a_no_op_in_effect() {
        let mut surface = FakeSurface::default();
        let mut router = SectionRouter::new();
        router.show_section(SectionId::Css, &mut surface);
        let state_once = (surface.active_sections(), surface.nav_active);

        router.show_section(SectionId::Css, &mut surface);
        assert_eq!((surface.active_sections(), surface.nav_active), state_once);
        assert_eq!(router.active(), Some(SectionId::Css));
    }

    #[test]
    fn test_end_to_end_default_then_css_click() {
        let mut surface = FakeSurface::default();
        let mut router = SectionRouter::new();
        router.show_initial(&mut surface);
        assert_eq!(surface.active_sections(), vec![SectionId::Html]);

        surface.overlay_open = true;
        router.show_section(SectionId::Css, &mut surface);

        assert_eq!(surface.active_sections(), vec![SectionId::Css]);
        assert_eq!(surface.nav_active, Some(SectionId::Css));
        assert!(!surface.overlay_open);
        assert!(surface.scrolled_top);
    }
}
