//! Theme resolution and persistence.
//!
//! User choice beats system preference: an explicit choice is persisted and
//! frozen against system flips; with no stored choice the app follows the
//! system signal live. Only user actions write to the store - the startup
//! paint and system-driven repaints leave it untouched, so "never chosen"
//! survives until the user actually clicks the toggle.

use crate::app::domain::ThemeChoice;
use crate::app::infrastructure::prefs::PrefStore;
use crate::app::surface::UiSurface;

pub struct ThemeController<P: PrefStore> {
    store: P,
    current: ThemeChoice,
    /// Set once the user chooses in this session. Covers the degraded case
    /// where the store cannot retain the choice.
    explicit: bool,
}

impl<P: PrefStore> ThemeController<P> {
    /// Stored choice if present, otherwise whatever the system reports.
    /// No side effects.
    pub fn resolve_initial(store: &P, system_dark: bool) -> ThemeChoice {
        store
            .load_theme()
            .unwrap_or_else(|| ThemeChoice::from_system_dark(system_dark))
    }

    /// Resolve the initial theme and paint it. Does not persist: resolution
    /// is not a user action.
    pub fn new(store: P, system_dark: bool, surface: &mut dyn UiSurface) -> Self {
        let initial = Self::resolve_initial(&store, system_dark);
        let explicit = store.load_theme().is_some();
        let mut controller = Self {
            store,
            current: initial,
            explicit,
        };
        controller.paint(initial, surface);
        controller
    }

    pub fn current(&self) -> ThemeChoice {
        self.current
    }

    /// Apply an explicit user choice: paint it and persist it. Idempotent.
    ///
    /// A failed write degrades silently to a session-only preference;
    /// theme is cosmetic and the paint already succeeded.
    pub fn apply(&mut self, choice: ThemeChoice, surface: &mut dyn UiSurface) {
        self.paint(choice, surface);
        self.explicit = true;
        if let Err(e) = self.store.store_theme(choice) {
            eprintln!("Theme preference not persisted: {}", e);
        }
    }

    pub fn toggle(&mut self, surface: &mut dyn UiSurface) {
        self.apply(self.current.opposite(), surface);
    }

    /// React to a system color-scheme flip. Repaints to match iff the user
    /// has never made an explicit choice; an existing stored choice wins.
    ///
    /// `explicit` freezes the session even when the stored choice is gone
    /// (write failed, or the file was removed while running). Clearing the
    /// preference file restores follow-system on the next start, when
    /// `explicit` is re-derived from the store.
    pub fn system_changed(&mut self, system_dark: bool, surface: &mut dyn UiSurface) {
        if !self.explicit && self.store.load_theme().is_none() {
            self.paint(ThemeChoice::from_system_dark(system_dark), surface);
        }
    }

    fn paint(&mut self, choice: ThemeChoice, surface: &mut dyn UiSurface) {
        surface.paint_theme(choice);
        surface.set_toggle_icon(choice.toggle_icon());
        self.current = choice;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::controllers::testing::{FakeStore, FakeSurface};

    fn setup(stored: Option<ThemeChoice>, system_dark: bool) -> (ThemeController<FakeStore>, FakeSurface) {
        let mut surface = FakeSurface::default();
        let controller = ThemeController::new(FakeStore::with(stored), system_dark, &mut surface);
        (controller, surface)
    }

    #[test]
    fn test_resolve_prefers_stored_choice() {
        let store = FakeStore::with(Some(ThemeChoice::Light));
        assert_eq!(
            ThemeController::resolve_initial(&store, true),
            ThemeChoice::Light
        );
    }

    #[test]
    fn test_resolve_falls_back_to_system() {
        let store = FakeStore::with(None);
        assert_eq!(ThemeController::resolve_initial(&store, true), ThemeChoice::Dark);
        assert_eq!(ThemeController::resolve_initial(&store, false), ThemeChoice::Light);
    }

    #[test]
    fn test_startup_paints_without_persisting() {
        let (controller, surface) = setup(None, true);
        assert_eq!(controller.current(), ThemeChoice::Dark);
        assert_eq!(surface.theme, Some(ThemeChoice::Dark));
        // Still unset: startup is not a user action
        assert_eq!(controller.store.stored(), None);
    }

    #[test]
    fn test_apply_persists_and_reload_returns_it() {
        let (mut controller, mut surface) = setup(None, false);
        controller.apply(ThemeChoice::Dark, &mut surface);

        let store = FakeStore::with(controller.store.stored());
        assert_eq!(
            ThemeController::resolve_initial(&store, false),
            ThemeChoice::Dark
        );
    }

    #[test]
    fn test_apply_is_idempotent() {
        let (mut controller, mut surface) = setup(None, false);
        controller.apply(ThemeChoice::Dark, &mut surface);
        let after_once = (surface.theme, surface.toggle_icon.clone(), controller.current());
        controller.apply(ThemeChoice::Dark, &mut surface);
        assert_eq!(
            after_once,
            (surface.theme, surface.toggle_icon.clone(), controller.current())
        );
    }

    #[test]
    fn test_double_toggle_returns_to_start() {
        let (mut controller, mut surface) = setup(None, false);
        let before = controller.current();
        controller.toggle(&mut surface);
        assert_eq!(controller.current(), before.opposite());
        controller.toggle(&mut surface);
        assert_eq!(controller.current(), before);
    }

    #[test]
    fn test_toggle_icon_tracks_theme() {
        let (mut controller, mut surface) = setup(None, false);
        controller.apply(ThemeChoice::Dark, &mut surface);
        assert_eq!(surface.toggle_icon, ThemeChoice::Dark.toggle_icon());
        controller.apply(ThemeChoice::Light, &mut surface);
        assert_eq!(surface.toggle_icon, ThemeChoice::Light.toggle_icon());
    }

    #[test]
    fn test_system_flip_followed_while_unset() {
        let (mut controller, mut surface) = setup(None, true);
        assert_eq!(controller.current(), ThemeChoice::Dark);

        controller.system_changed(false, &mut surface);
        assert_eq!(controller.current(), ThemeChoice::Light);
        assert_eq!(surface.theme, Some(ThemeChoice::Light));
        // Following the system still does not count as a choice
        assert_eq!(controller.store.stored(), None);
    }

    #[test]
    fn test_system_flip_ignored_once_chosen() {
        let (mut controller, mut surface) = setup(Some(ThemeChoice::Dark), false);
        controller.system_changed(false, &mut surface);
        assert_eq!(controller.current(), ThemeChoice::Dark);
        assert_eq!(surface.theme, Some(ThemeChoice::Dark));
    }

    #[test]
    fn test_broken_store_degrades_silently() {
        let mut surface = FakeSurface::default();
        let mut controller = ThemeController::new(FakeStore::failing(), false, &mut surface);

        controller.apply(ThemeChoice::Dark, &mut surface);
        // Visual state updated for the session even though nothing persisted
        assert_eq!(controller.current(), ThemeChoice::Dark);
        assert_eq!(surface.theme, Some(ThemeChoice::Dark));
    }

    #[test]
    fn test_clearing_store_midsession_keeps_session_frozen() {
        let (mut controller, mut surface) = setup(None, false);
        controller.apply(ThemeChoice::Dark, &mut surface);

        // The stored choice vanishes while running; the session choice
        // still holds until restart
        controller.store.clear();
        controller.system_changed(true, &mut surface);
        assert_eq!(controller.current(), ThemeChoice::Dark);

        // A fresh start over the now-empty store follows the system again
        let mut surface = FakeSurface::default();
        let mut fresh = ThemeController::new(FakeStore::with(None), false, &mut surface);
        assert_eq!(fresh.current(), ThemeChoice::Light);
        fresh.system_changed(true, &mut surface);
        assert_eq!(fresh.current(), ThemeChoice::Dark);
    }

    #[test]
    fn test_session_choice_freezes_system_even_without_storage() {
        let mut surface = FakeSurface::default();
        let mut controller = ThemeController::new(FakeStore::failing(), false, &mut surface);
        controller.apply(ThemeChoice::Dark, &mut surface);

        // The store never retained the choice, but it was still explicit
        controller.system_changed(false, &mut surface);
        assert_eq!(controller.current(), ThemeChoice::Dark);
    }
}
