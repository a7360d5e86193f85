//! Main application coordinator.
//!
//! Owns the production surface and the controllers, and dispatches every
//! [`Message`] coming off the FLTK channel. All handlers run to completion
//! on the UI thread; the only deferred work goes back through the channel
//! via timeouts (copy feedback restore, reveal steps, scroll coalescing,
//! the system theme poll).

use std::collections::VecDeque;
use std::time::Instant;

use fltk::app::{self, Sender};
use fltk::button::Button;
use fltk::enums::Color;
use fltk::group::Scroll;
use fltk::prelude::*;
use fltk::widget::Widget;

use super::controllers::{CopyController, SectionRouter, ThemeController};
use super::infrastructure::clipboard::{CommandClipboard, FltkClipboard};
use super::infrastructure::platform::detect_system_dark_mode;
use super::infrastructure::prefs::FilePrefStore;
use super::messages::Message;
use super::surface::UiSurface;
use crate::ui::lazy::LazyIllustrations;
use crate::ui::main_window::{build_main_window, MainWidgets};
use crate::ui::sections::{ContentArea, DemoWidgets};
use crate::ui::FltkSurface;

const COPY_ICON: &str = "\u{1f4cb}";
const COPY_FEEDBACK_SECS: f64 = 2.0;
const REVEAL_STEP_SECS: f64 = 0.08;
/// One coalesced scroll tick per ~frame.
const SCROLL_TICK_SECS: f64 = 0.016;
const SYSTEM_POLL_SECS: f64 = 5.0;

const DEMO_COLORS: [(u8, u8, u8); 6] = [
    (255, 107, 53),
    (247, 147, 30),
    (102, 126, 234),
    (118, 75, 162),
    (79, 172, 254),
    (0, 242, 254),
];

pub struct AppState {
    surface: FltkSurface,
    theme: ThemeController<Option<FilePrefStore>>,
    router: SectionRouter,
    copier: CopyController,
    copy_buttons: Vec<Button>,
    link_urls: Vec<&'static str>,
    demo: DemoWidgets,
    demo_color: usize,
    lazy: LazyIllustrations,
    scroll: Scroll,
    sender: Sender<Message>,
    scroll_ticking: bool,
    reveal: RevealQueue<Widget>,
    started: Instant,
}

/// A staggered reveal in flight. Restarting bumps the generation so timeout
/// messages scheduled for an abandoned run are recognizably stale.
struct RevealQueue<T> {
    generation: u32,
    items: VecDeque<T>,
}

impl<T> Default for RevealQueue<T> {
    fn default() -> Self {
        Self {
            generation: 0,
            items: VecDeque::new(),
        }
    }
}

impl<T> RevealQueue<T> {
    /// Drop whatever is queued and start a new run. Returns the new
    /// generation to stamp onto the scheduled steps.
    fn restart(&mut self, items: impl IntoIterator<Item = T>) -> u32 {
        self.generation = self.generation.wrapping_add(1);
        self.items = items.into_iter().collect();
        self.generation
    }

    /// Next item for a step of generation `generation`; `None` when the
    /// step is stale or the run is finished.
    fn step(&mut self, generation: u32) -> Option<T> {
        if generation != self.generation {
            return None;
        }
        self.items.pop_front()
    }

    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl AppState {
    /// Build the window, resolve and paint the initial theme, and show the
    /// default section.
    pub fn new(sender: Sender<Message>) -> Self {
        let MainWidgets {
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
        } = build_main_window(&sender);
        let ContentArea {
            scroll,
            panes,
            demo,
            copy_buttons,
            link_urls,
        } = content;

        let mut surface = FltkSurface::new(
            window,
            header,
            body,
            title,
            menu_btn,
            toggle_btn,
            sidebar,
            scroll.clone(),
            panes,
            themed,
            snippets,
        );

        let store = match FilePrefStore::new() {
            Ok(store) => Some(store),
            Err(e) => {
                // Session-only preference from here on; not a user-facing error
                eprintln!("Preferences unavailable: {}", e);
                None
            }
        };
        let theme = ThemeController::new(store, detect_system_dark_mode(), &mut surface);

        let mut router = SectionRouter::new();
        router.show_initial(&mut surface);

        let mut state = Self {
            surface,
            theme,
            router,
            copier: CopyController::new(Box::new(FltkClipboard), Box::new(CommandClipboard)),
            copy_buttons,
            link_urls,
            demo,
            demo_color: 0,
            lazy,
            scroll,
            sender,
            scroll_ticking: false,
            reveal: RevealQueue::default(),
            started: Instant::now(),
        };
        state.begin_reveal();
        state
    }

    pub fn show(&mut self) {
        self.surface.show_window();
        self.request_scroll_tick();
    }

    /// Dispatch one message. Returns `false` when the app should exit.
    pub fn handle(&mut self, msg: Message) -> bool {
        match msg {
            Message::ShowSection(id) => {
                self.router.show_section(id, &mut self.surface);
                self.begin_reveal();
            }
            Message::ToggleOverlay => self.surface.toggle_overlay(),
            Message::CloseOverlay => self.surface.close_overlay(),
            Message::WindowResized => self.surface.handle_resize(),

            Message::ToggleTheme => self.theme.toggle(&mut self.surface),
            Message::SystemThemeChanged(dark) => self.theme.system_changed(dark, &mut self.surface),

            Message::CopySnippet(index) => self.copy_snippet(index),
            Message::RestoreCopyButton(index) => {
                if let Some(btn) = self.copy_buttons.get_mut(index) {
                    btn.set_label(COPY_ICON);
                    btn.redraw();
                }
            }

            Message::OpenLink(index) => {
                if let Some(url) = self.link_urls.get(index) {
                    if let Err(e) = open::that(url) {
                        eprintln!("Failed to open {}: {}", url, e);
                    }
                }
            }

            Message::ViewportScrolled => self.request_scroll_tick(),
            Message::ScrollTick => {
                self.scroll_ticking = false;
                self.lazy.load_visible(&self.scroll);
            }
            Message::RevealStep(generation) => self.reveal_step(generation),

            Message::DemoClick => {
                self.demo.buffer.set_text("Button was clicked! \u{1f389}");
                self.demo.output.redraw();
            }
            Message::DemoChangeColor => self.demo_change_color(),
            Message::DemoAddText => {
                let elapsed = self.started.elapsed().as_secs_f64();
                self.demo
                    .buffer
                    .append(&format!("New paragraph added at {:.1}s\n", elapsed));
                self.demo.output.redraw();
            }

            Message::Quit => return false,
        }
        true
    }

    fn copy_snippet(&mut self, index: usize) {
        let Some(code) = self.surface.snippet_code(index) else {
            return;
        };
        let outcome = self.copier.copy(code);
        if let Some(btn) = self.copy_buttons.get_mut(index) {
            btn.set_label(outcome.feedback_icon());
            btn.redraw();
            let s = self.sender;
            app::add_timeout3(COPY_FEEDBACK_SECS, move |_| {
                s.send(Message::RestoreCopyButton(index));
            });
        }
    }

    /// Queue the active section's cards for a staggered entrance. A reveal
    /// already in flight is abandoned; its remaining steps arrive stale.
    fn begin_reveal(&mut self) {
        let Some(active) = self.router.active() else {
            return;
        };
        let mut cards = self.surface.pane_cards(active);
        for card in &mut cards {
            card.hide();
        }
        let generation = self.reveal.restart(cards);
        if self.reveal.is_empty() {
            self.request_scroll_tick();
        } else {
            self.schedule_reveal_step(generation);
        }
    }

    fn reveal_step(&mut self, generation: u32) {
        let Some(mut card) = self.reveal.step(generation) else {
            return;
        };
        card.show();
        self.scroll.redraw();
        if self.reveal.is_empty() {
            // Cards are all visible; give lazy images a pass
            self.request_scroll_tick();
        } else {
            self.schedule_reveal_step(generation);
        }
    }

    fn schedule_reveal_step(&self, generation: u32) {
        let s = self.sender;
        app::add_timeout3(REVEAL_STEP_SECS, move |_| {
            s.send(Message::RevealStep(generation));
        });
    }

    /// Coalesce scroll events to at most one handled tick per frame.
    fn request_scroll_tick(&mut self) {
        if self.scroll_ticking {
            return;
        }
        self.scroll_ticking = true;
        let s = self.sender;
        app::add_timeout3(SCROLL_TICK_SECS, move |_| s.send(Message::ScrollTick));
    }

    fn demo_change_color(&mut self) {
        self.demo_color = (self.demo_color + 1) % DEMO_COLORS.len();
        let (r, g, b) = DEMO_COLORS[self.demo_color];
        self.demo.output.set_color(Color::from_rgb(r, g, b));
        self.demo.output.set_text_color(Color::White);
        self.demo
            .buffer
            .set_text("Background color changed! \u{2728}");
        self.demo.output.redraw();
    }
}

/// Poll the system color scheme and report flips over the channel. The
/// theme controller decides whether a flip is followed.
pub fn start_system_theme_watcher(sender: Sender<Message>) {
    let mut last = detect_system_dark_mode();
    app::add_timeout3(SYSTEM_POLL_SECS, move |handle| {
        let now = detect_system_dark_mode();
        if now != last {
            last = now;
            sender.send(Message::SystemThemeChanged(now));
        }
        app::repeat_timeout3(SYSTEM_POLL_SECS, handle);
    });
}

#[cfg(test)]
mod tests {
    use super::RevealQueue;

    #[test]
    fn test_reveal_steps_pop_in_order() {
        let mut queue = RevealQueue::default();
        let generation = queue.restart([1, 2, 3]);
        assert_eq!(queue.step(generation), Some(1));
        assert_eq!(queue.step(generation), Some(2));
        assert_eq!(queue.step(generation), Some(3));
        assert_eq!(queue.step(generation), None);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_restart_invalidates_pending_steps() {
        let mut queue = RevealQueue::default();
        let old = queue.restart([1, 2, 3]);
        assert_eq!(queue.step(old), Some(1));

        // Switching sections mid-reveal starts a fresh run
        let new = queue.restart([10, 20]);
        assert_ne!(old, new);

        // A step scheduled for the abandoned run must not drain the new one
        assert_eq!(queue.step(old), None);
        assert_eq!(queue.step(new), Some(10));
        assert_eq!(queue.step(old), None);
        assert_eq!(queue.step(new), Some(20));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_restart_with_no_items_is_immediately_empty() {
        let mut queue = RevealQueue::<i32>::default();
        let generation = queue.restart([]);
        assert!(queue.is_empty());
        assert_eq!(queue.step(generation), None);
    }
}
