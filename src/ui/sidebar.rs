//! The navigation sidebar.
//!
//! Wide windows show it as a fixed column; narrow windows collapse it into
//! an overlay toggled from the header menu button. Every navigation action
//! closes the overlay.

use fltk::app::Sender;
use fltk::button::Button;
use fltk::enums::{Event, FrameType, Key};
use fltk::frame::Frame;
use fltk::group::Flex;
use fltk::prelude::*;

use crate::app::domain::SectionId;
use crate::app::messages::Message;
use crate::ui::theme::Palette;

pub const SIDEBAR_WIDTH: i32 = 180;
pub const NAV_BUTTON_HEIGHT: i32 = 36;

/// Window widths below this collapse the sidebar into an overlay.
pub const NARROW_THRESHOLD: i32 = 640;

pub struct Sidebar {
    pub group: Flex,
    buttons: Vec<(SectionId, Button)>,
    narrow: bool,
    overlay_open: bool,
}

impl Sidebar {
    /// Build inside the current group. The caller fixes the width via the
    /// surrounding row flex.
    pub fn new(sender: &Sender<Message>) -> Self {
        let mut group = Flex::default().column();
        group.set_frame(FrameType::FlatBox);
        group.set_margin(8);
        group.set_pad(6);

        let mut buttons = Vec::new();
        for &id in SectionId::all() {
            let mut btn = Button::default().with_label(id.nav_label());
            btn.set_frame(FrameType::FlatBox);
            btn.set_tooltip(&format!("Go to {}", id.title()));
            wire_nav_trigger(&mut btn, id, sender);
            group.fixed(&btn, NAV_BUTTON_HEIGHT);
            buttons.push((id, btn));
        }
        // Filler keeps the buttons pinned to the top
        Frame::default();
        group.end();

        Self {
            group,
            buttons,
            narrow: false,
            overlay_open: false,
        }
    }

    /// Move the active marker so exactly the button for `active` carries it.
    pub fn set_active(&mut self, active: SectionId, palette: &Palette) {
        for (id, btn) in &mut self.buttons {
            let color = if *id == active {
                palette.nav_active
            } else {
                palette.nav_idle
            };
            btn.set_color(color);
            btn.set_label_color(palette.text);
            btn.redraw();
        }
    }

    pub fn paint(&mut self, palette: &Palette, active: Option<SectionId>) {
        self.group.set_color(palette.sidebar_bg);
        match active {
            Some(id) => self.set_active(id, palette),
            None => {
                for (_, btn) in &mut self.buttons {
                    btn.set_color(palette.nav_idle);
                    btn.set_label_color(palette.text);
                }
            }
        }
        self.group.redraw();
    }

    /// React to a window resize: entering narrow mode hides the sidebar
    /// (overlay closed), leaving it restores the fixed column.
    pub fn update_layout(&mut self, body: &mut Flex, window_w: i32) {
        let narrow = window_w < NARROW_THRESHOLD;
        if narrow == self.narrow {
            return;
        }
        self.narrow = narrow;
        self.overlay_open = false;
        if narrow {
            self.collapse(body);
        } else {
            self.expand(body);
        }
    }

    pub fn is_overlay_open(&self) -> bool {
        self.narrow && self.overlay_open
    }

    pub fn toggle_overlay(&mut self, body: &mut Flex) {
        if !self.narrow {
            return;
        }
        if self.overlay_open {
            self.close_overlay(body);
        } else {
            self.overlay_open = true;
            self.expand(body);
        }
    }

    pub fn close_overlay(&mut self, body: &mut Flex) {
        if self.is_overlay_open() {
            self.overlay_open = false;
            self.collapse(body);
        }
    }

    fn expand(&mut self, body: &mut Flex) {
        self.group.show();
        body.fixed(&self.group, SIDEBAR_WIDTH);
        body.recalc();
    }

    fn collapse(&mut self, body: &mut Flex) {
        self.group.hide();
        body.fixed(&self.group, 0);
        body.recalc();
    }
}

/// Wire a widget as a navigable trigger carrying a SectionId payload.
/// Sidebar buttons and topic cards share this one path: click or Enter on a
/// focused trigger routes to the section.
pub fn wire_nav_trigger<W>(widget: &mut W, id: SectionId, sender: &Sender<Message>)
where
    W: WidgetBase + WidgetExt,
{
    let s = *sender;
    widget.set_callback(move |_| s.send(Message::ShowSection(id)));
    let s = *sender;
    widget.handle(move |_, ev| {
        if ev == Event::KeyDown && fltk::app::event_key() == Key::Enter {
            s.send(Message::ShowSection(id));
            return true;
        }
        false
    });
}
