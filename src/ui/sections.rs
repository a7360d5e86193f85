//! Builds the content area: one pane per section, stacked in the same spot
//! inside the scroll region with only the active one visible.

use fltk::app::Sender;
use fltk::button::Button;
use fltk::enums::{Align, Event, FrameType};
use fltk::frame::Frame;
use fltk::group::{Flex, Pack, PackType, Scroll, ScrollType};
use fltk::prelude::*;
use fltk::text::{TextBuffer, TextDisplay};
use fltk::widget::Widget;

use crate::app::domain::{content, Card, ResourceLink, Section, SectionId, Snippet};
use crate::app::messages::Message;
use crate::ui::lazy::LazyIllustrations;
use crate::ui::sidebar::wire_nav_trigger;
use crate::ui::snippet::{SnippetView, CODE_FONT, CODE_FONT_SIZE};

pub const CONTENT_WIDTH: i32 = 620;
const CARD_HEIGHT: i32 = 96;
const ILLUSTRATION_WIDTH: i32 = 140;
const ROW_GAP: i32 = 10;

/// Widget handles grouped by the paint treatment they get on theme change.
#[derive(Default)]
pub struct ThemedWidgets {
    pub text_labels: Vec<Widget>,
    pub muted_labels: Vec<Widget>,
    pub cards: Vec<Widget>,
    pub chrome_buttons: Vec<Widget>,
    pub code_views: Vec<TextDisplay>,
}

/// One content section: its pane plus the card widgets revealed with a
/// stagger when the section becomes active.
pub struct SectionPane {
    pub id: SectionId,
    pub pack: Pack,
    pub cards: Vec<Widget>,
}

pub struct DemoWidgets {
    pub output: TextDisplay,
    pub buffer: TextBuffer,
}

pub struct ContentArea {
    pub scroll: Scroll,
    pub panes: Vec<SectionPane>,
    pub demo: DemoWidgets,
    /// Snippet code registry; `Message::CopySnippet(i)` indexes into this.
    pub copy_buttons: Vec<Button>,
    /// Link registry; `Message::OpenLink(i)` indexes into this.
    pub link_urls: Vec<&'static str>,
}

/// Build the scroll region and every section pane inside it. Must be called
/// with the parent group current; the scroll fills whatever space the
/// surrounding flex gives it.
pub fn build_content(
    sender: &Sender<Message>,
    themed: &mut ThemedWidgets,
    snippets: &mut Vec<SnippetView>,
    lazy: &mut LazyIllustrations,
) -> ContentArea {
    let mut scroll = Scroll::default();
    scroll.set_type(ScrollType::Vertical);
    scroll.set_frame(FrameType::FlatBox);
    {
        let s = *sender;
        scroll.handle(move |_, ev| {
            match ev {
                Event::MouseWheel => s.send(Message::ViewportScrolled),
                // A click landing on the content closes the nav overlay
                Event::Push => s.send(Message::CloseOverlay),
                _ => {}
            }
            false
        });
    }
    // Scrollbar drags and key presses move the viewport without a wheel
    // event reaching the scroll itself; observe them on the bars. Returning
    // false leaves the scroll's own callback in charge of the movement.
    for mut bar in [scroll.scrollbar(), scroll.hscrollbar()] {
        let s = *sender;
        bar.handle(move |_, ev| {
            if matches!(
                ev,
                Event::Push | Event::Drag | Event::Released | Event::MouseWheel | Event::KeyDown
            ) {
                s.send(Message::ViewportScrolled);
            }
            false
        });
    }

    let mut panes = Vec::new();
    let mut demo = None;
    let mut copy_buttons = Vec::new();
    let mut link_urls = Vec::new();

    for section in content::catalog() {
        let mut pack = Pack::new(0, 0, CONTENT_WIDTH, 400, None);
        pack.set_type(PackType::Vertical);
        pack.set_spacing(ROW_GAP);
        pack.auto_layout();

        let mut cards = Vec::new();
        build_heading(section, themed);
        for card in section.cards {
            let widget = build_card(card, sender, themed, lazy);
            cards.push(widget);
        }
        for snippet in section.snippets {
            let idx = snippets.len();
            let (view, copy_btn) = build_snippet_block(snippet, idx, sender, themed);
            snippets.push(view);
            copy_buttons.push(copy_btn);
        }
        if section.id == SectionId::JavaScript {
            demo = Some(build_demo_panel(sender, themed));
        }
        if !section.links.is_empty() {
            build_links(section.links, &mut link_urls, sender, themed);
        }

        pack.end();
        pack.hide();
        panes.push(SectionPane {
            id: section.id,
            pack,
            cards,
        });
    }

    scroll.end();

    ContentArea {
        scroll,
        panes,
        // The catalog always carries the JavaScript section
        demo: demo.expect("javascript section missing from catalog"),
        copy_buttons,
        link_urls,
    }
}

fn build_heading(section: &Section, themed: &mut ThemedWidgets) {
    let mut title = Frame::default()
        .with_size(CONTENT_WIDTH, 36)
        .with_label(section.id.title());
    title.set_align(Align::Inside | Align::Left);
    title.set_label_size(22);
    themed.text_labels.push(title.as_base_widget());

    let mut intro = Frame::default()
        .with_size(CONTENT_WIDTH, 44)
        .with_label(section.intro);
    intro.set_align(Align::Inside | Align::Left | Align::Top | Align::Wrap);
    intro.set_label_size(13);
    themed.muted_labels.push(intro.as_base_widget());
}

/// Cards with a navigation target are buttons wired into the shared
/// navigable-trigger path; plain topic cards are static groups.
fn build_card(
    card: &Card,
    sender: &Sender<Message>,
    themed: &mut ThemedWidgets,
    lazy: &mut LazyIllustrations,
) -> Widget {
    if let Some(target) = card.target {
        let mut btn = Button::default()
            .with_size(CONTENT_WIDTH, CARD_HEIGHT)
            .with_label(&format!("{}\n{}", card.title, card.blurb));
        btn.set_frame(FrameType::RFlatBox);
        btn.set_align(Align::Inside | Align::Left | Align::Wrap);
        btn.set_tooltip(&format!("Go to {}", target.title()));
        wire_nav_trigger(&mut btn, target, sender);
        themed.cards.push(btn.as_base_widget());
        return btn.as_base_widget();
    }

    let mut row = Flex::default()
        .with_size(CONTENT_WIDTH, CARD_HEIGHT)
        .row();
    row.set_frame(FrameType::RFlatBox);
    row.set_margin(10);

    let mut text_col = Flex::default().column();
    let mut title = Frame::default().with_label(card.title);
    title.set_align(Align::Inside | Align::Left);
    title.set_label_size(15);
    themed.text_labels.push(title.as_base_widget());
    let mut blurb = Frame::default().with_label(card.blurb);
    blurb.set_align(Align::Inside | Align::Left | Align::Top | Align::Wrap);
    blurb.set_label_size(12);
    themed.muted_labels.push(blurb.as_base_widget());
    text_col.fixed(&title, 24);
    text_col.end();

    if let Some(file) = card.illustration {
        let mut placeholder = Frame::default().with_label("\u{1f5bc}");
        placeholder.set_frame(FrameType::FlatBox);
        row.fixed(&placeholder, ILLUSTRATION_WIDTH);
        themed.muted_labels.push(placeholder.as_base_widget());
        lazy.register(placeholder, file);
    }

    row.end();
    themed.cards.push(row.as_base_widget());
    row.as_base_widget()
}

fn build_snippet_block(
    snippet: &Snippet,
    index: usize,
    sender: &Sender<Message>,
    themed: &mut ThemedWidgets,
) -> (SnippetView, Button) {
    let mut header = Flex::default().with_size(CONTENT_WIDTH, 26).row();
    let mut title = Frame::default().with_label(snippet.title);
    title.set_align(Align::Inside | Align::Left);
    title.set_label_size(13);
    themed.muted_labels.push(title.as_base_widget());

    let mut copy_btn = Button::default().with_label("\u{1f4cb}");
    copy_btn.set_frame(FrameType::FlatBox);
    copy_btn.set_tooltip("Copy code");
    let s = *sender;
    copy_btn.set_callback(move |_| s.send(Message::CopySnippet(index)));
    header.fixed(&copy_btn, 36);
    themed.chrome_buttons.push(copy_btn.as_base_widget());
    header.end();

    let lines = snippet.code.lines().count() as i32;
    let mut display = TextDisplay::default().with_size(CONTENT_WIDTH, lines * 18 + 14);
    let mut buffer = TextBuffer::default();
    buffer.set_text(snippet.code);
    display.set_buffer(buffer);
    display.set_text_font(CODE_FONT);
    display.set_text_size(CODE_FONT_SIZE);
    display.set_frame(FrameType::BorderBox);
    themed.code_views.push(display.clone());

    (SnippetView::new(display, *snippet), copy_btn)
}

fn build_demo_panel(sender: &Sender<Message>, themed: &mut ThemedWidgets) -> DemoWidgets {
    let mut caption = Frame::default()
        .with_size(CONTENT_WIDTH, 24)
        .with_label("Try it live");
    caption.set_align(Align::Inside | Align::Left);
    caption.set_label_size(15);
    themed.text_labels.push(caption.as_base_widget());

    let mut row = Flex::default().with_size(CONTENT_WIDTH, 32).row();
    row.set_pad(8);
    for (label, msg) in [
        ("Click Me", Message::DemoClick),
        ("Change Color", Message::DemoChangeColor),
        ("Add Text", Message::DemoAddText),
    ] {
        let mut btn = Button::default().with_label(label);
        btn.set_frame(FrameType::RFlatBox);
        let s = *sender;
        btn.set_callback(move |_| s.send(msg));
        themed.chrome_buttons.push(btn.as_base_widget());
    }
    row.end();

    let mut output = TextDisplay::default().with_size(CONTENT_WIDTH, 90);
    let buffer = TextBuffer::default();
    output.set_buffer(buffer.clone());
    output.set_frame(FrameType::BorderBox);
    output.set_text_size(13);
    themed.code_views.push(output.clone());

    DemoWidgets { output, buffer }
}

fn build_links(
    links: &'static [ResourceLink],
    link_urls: &mut Vec<&'static str>,
    sender: &Sender<Message>,
    themed: &mut ThemedWidgets,
) {
    for link in links {
        let idx = link_urls.len();
        link_urls.push(link.url);

        let mut btn = Button::default()
            .with_size(CONTENT_WIDTH, 32)
            .with_label(&format!("{}  \u{2192}  {}", link.label, link.url));
        btn.set_frame(FrameType::FlatBox);
        btn.set_align(Align::Inside | Align::Left);
        btn.set_tooltip("Open in browser");
        let s = *sender;
        btn.set_callback(move |_| s.send(Message::OpenLink(idx)));
        themed.chrome_buttons.push(btn.as_base_widget());
    }
}
