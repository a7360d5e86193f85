//! [`UiSurface`] over the real FLTK widgets.

use fltk::button::Button;
use fltk::frame::Frame;
use fltk::group::{Flex, Scroll};
use fltk::prelude::*;
use fltk::window::Window;

use crate::app::domain::{SectionId, ThemeChoice};
use crate::app::surface::UiSurface;
use crate::ui::sections::{SectionPane, ThemedWidgets};
use crate::ui::sidebar::Sidebar;
use crate::ui::snippet::{SnippetHighlighter, SnippetView};
use crate::ui::theme::Palette;

pub struct FltkSurface {
    window: Window,
    header: Flex,
    body: Flex,
    title: Frame,
    menu_btn: Button,
    toggle_btn: Button,
    sidebar: Sidebar,
    scroll: Scroll,
    panes: Vec<SectionPane>,
    themed: ThemedWidgets,
    snippets: Vec<SnippetView>,
    highlighter: SnippetHighlighter,
    palette: Palette,
    nav_active: Option<SectionId>,
}

impl FltkSurface {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        window: Window,
        header: Flex,
        body: Flex,
        title: Frame,
        menu_btn: Button,
        toggle_btn: Button,
        sidebar: Sidebar,
        scroll: Scroll,
        panes: Vec<SectionPane>,
        themed: ThemedWidgets,
        snippets: Vec<SnippetView>,
    ) -> Self {
        Self {
            window,
            header,
            body,
            title,
            menu_btn,
            toggle_btn,
            sidebar,
            scroll,
            panes,
            themed,
            snippets,
            highlighter: SnippetHighlighter::new(),
            palette: Palette::for_dark(false),
            nav_active: None,
        }
    }

    pub fn snippet_code(&self, index: usize) -> Option<&'static str> {
        self.snippets.get(index).map(|s| s.code())
    }

    /// Card widgets of one pane, in reveal order.
    pub fn pane_cards(&self, id: SectionId) -> Vec<fltk::widget::Widget> {
        self.panes
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.cards.clone())
            .unwrap_or_default()
    }

    pub fn toggle_overlay(&mut self) {
        self.sidebar.toggle_overlay(&mut self.body);
    }

    pub fn handle_resize(&mut self) {
        let w = self.window.w();
        self.sidebar.update_layout(&mut self.body, w);
    }

    pub fn show_window(&mut self) {
        self.window.show();
    }
}

impl UiSurface for FltkSurface {
    fn paint_theme(&mut self, choice: ThemeChoice) {
        let dark = choice.is_dark();
        let p = Palette::for_dark(dark);
        self.palette = p;

        self.window.set_color(p.window_bg);
        self.header.set_color(p.header_bg);
        self.title.set_label_color(p.text);
        self.scroll.set_color(p.window_bg);
        for btn in [&mut self.menu_btn, &mut self.toggle_btn] {
            btn.set_color(p.header_bg);
            btn.set_label_color(p.text);
        }
        self.sidebar.paint(&p, self.nav_active);

        for w in &mut self.themed.text_labels {
            w.set_label_color(p.text);
        }
        for w in &mut self.themed.muted_labels {
            w.set_label_color(p.muted);
        }
        for w in &mut self.themed.cards {
            w.set_color(p.card_bg);
            w.set_label_color(p.text);
        }
        for w in &mut self.themed.chrome_buttons {
            w.set_color(p.header_bg);
            w.set_label_color(p.accent);
        }
        for view in &mut self.themed.code_views {
            view.set_color(p.code_bg);
            view.set_text_color(p.code_fg);
        }
        for snippet in &mut self.snippets {
            snippet.restyle(&self.highlighter, dark, p.code_fg);
        }

        self.window.redraw();
    }

    fn set_toggle_icon(&mut self, icon: &str) {
        self.toggle_btn.set_label(icon);
        self.toggle_btn.redraw();
    }

    fn deactivate_all_sections(&mut self) {
        for pane in &mut self.panes {
            pane.pack.hide();
        }
    }

    fn activate_section(&mut self, id: SectionId) -> bool {
        match self.panes.iter_mut().find(|p| p.id == id) {
            Some(pane) => {
                pane.pack.show();
                self.scroll.redraw();
                true
            }
            None => false,
        }
    }

    fn highlight_nav(&mut self, id: SectionId) {
        self.nav_active = Some(id);
        self.sidebar.set_active(id, &self.palette);
    }

    fn close_overlay(&mut self) {
        self.sidebar.close_overlay(&mut self.body);
    }

    fn scroll_to_top(&mut self) {
        self.scroll.scroll_to(0, 0);
    }
}
