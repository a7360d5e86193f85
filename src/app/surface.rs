//! The seam between core logic and the widget toolkit.
//!
//! Theme and navigation controllers never touch FLTK directly; they drive
//! this trait. The production implementation ([`crate::ui::FltkSurface`])
//! paints real widgets, tests inject a recording fake.

use crate::app::domain::{SectionId, ThemeChoice};

pub trait UiSurface {
    /// Repaint the whole window for `choice`.
    fn paint_theme(&mut self, choice: ThemeChoice);

    /// Set the label shown on the theme toggle control.
    fn set_toggle_icon(&mut self, icon: &str);

    /// Remove the active marker from every content section.
    fn deactivate_all_sections(&mut self);

    /// Mark the section `id` active. Returns `false` when no widget exists
    /// for `id` (a content/markup mismatch, recoverable).
    fn activate_section(&mut self, id: SectionId) -> bool;

    /// Move the nav highlight so exactly the control for `id` is marked.
    fn highlight_nav(&mut self, id: SectionId);

    /// Close the narrow-layout navigation overlay if it is open.
    fn close_overlay(&mut self);

    /// Scroll the content viewport back to the top.
    fn scroll_to_top(&mut self);
}
