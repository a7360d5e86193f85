use std::path::PathBuf;

use fltk::app::Sender;
use fltk::button::Button;
use fltk::enums::{Align, Event, FrameType, Key};
use fltk::frame::Frame;
use fltk::group::Flex;
use fltk::prelude::*;
use fltk::window::Window;

use crate::app::messages::Message;
use crate::ui::lazy::LazyIllustrations;
use crate::ui::sections::{build_content, ContentArea, ThemedWidgets};
use crate::ui::sidebar::{Sidebar, SIDEBAR_WIDTH};
use crate::ui::snippet::SnippetView;

pub const HEADER_HEIGHT: i32 = 48;

pub struct MainWidgets {
    pub window: Window,
    pub header: Flex,
    pub body: Flex,
    pub title: Frame,
    pub menu_btn: Button,
    pub toggle_btn: Button,
    pub sidebar: Sidebar,
    pub content: ContentArea,
    pub themed: ThemedWidgets,
    pub snippets: Vec<SnippetView>,
    pub lazy: LazyIllustrations,
}

pub fn build_main_window(sender: &Sender<Message>) -> MainWidgets {
    let mut window = Window::new(100, 100, 900, 640, "Web Development Handbook");
    window.set_xclass("DevHandbook");
    window.size_range(360, 420, 0, 0);

    let mut root = Flex::default_fill().column();
    root.set_pad(0);

    // Header: menu button, title, theme toggle
    let mut header = Flex::default().row();
    header.set_frame(FrameType::FlatBox);
    header.set_margin(6);
    root.fixed(&header, HEADER_HEIGHT);

    let mut themed = ThemedWidgets::default();

    let mut menu_btn = Button::default().with_label("\u{2630}");
    menu_btn.set_frame(FrameType::FlatBox);
    menu_btn.set_tooltip("Toggle navigation menu");
    {
        let s = *sender;
        menu_btn.set_callback(move |_| s.send(Message::ToggleOverlay));
    }
    header.fixed(&menu_btn, 40);

    // Header title and buttons are painted directly by the surface
    let mut title = Frame::default().with_label("\u{1f310} Web Development Handbook");
    title.set_align(Align::Inside | Align::Left);
    title.set_label_size(18);

    // Icon label is owned by the theme controller
    let mut toggle_btn = Button::default();
    toggle_btn.set_frame(FrameType::FlatBox);
    toggle_btn.set_tooltip("Toggle dark mode");
    {
        let s = *sender;
        toggle_btn.set_callback(move |_| s.send(Message::ToggleTheme));
    }
    header.fixed(&toggle_btn, 40);
    header.end();

    // Body: sidebar column + scrolling content
    let mut body = Flex::default().row();
    body.set_pad(0);
    let sidebar = Sidebar::new(sender);
    body.fixed(&sidebar.group, SIDEBAR_WIDTH);

    let mut snippets = Vec::new();
    let mut lazy = LazyIllustrations::new(assets_dir());
    let content = build_content(sender, &mut themed, &mut snippets, &mut lazy);

    body.end();
    root.end();
    window.end();
    window.resizable(&root);

    // Escape closes the nav overlay (and never quits the app, which is
    // FLTK's default for Escape)
    {
        let s = *sender;
        window.handle(move |_, ev| {
            if ev == Event::KeyDown && fltk::app::event_key() == Key::Escape {
                s.send(Message::CloseOverlay);
                return true;
            }
            false
        });
    }
    {
        let s = *sender;
        window.resize_callback(move |_, _, _, _, _| s.send(Message::WindowResized));
    }
    {
        let s = *sender;
        window.set_callback(move |_| {
            if fltk::app::event() == Event::Close {
                s.send(Message::Quit);
            }
        });
    }

    MainWidgets {
        window,
        header,
        body,
        title,
        menu_btn,
        toggle_btn,
        sidebar,
        content,
        themed,
        snippets,
        lazy,
    }
}

/// Illustrations live in `assets/` next to the executable, falling back to
/// the working directory during development.
fn assets_dir() -> PathBuf {
    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            let candidate = dir.join("assets");
            if candidate.is_dir() {
                return candidate;
            }
        }
    }
    PathBuf::from("assets")
}
