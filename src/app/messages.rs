use crate::app::domain::SectionId;

/// All messages that can be sent through the FLTK channel.
/// Widget callbacks send one of these; the dispatch loop in main handles them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    // Navigation: sidebar buttons and topic cards both send this
    ShowSection(SectionId),
    ToggleOverlay,
    CloseOverlay,
    WindowResized,

    // Theme
    ToggleTheme,
    SystemThemeChanged(bool),

    // Snippets: index into the registered copy buttons
    CopySnippet(usize),
    RestoreCopyButton(usize),

    // Resources
    OpenLink(usize),

    // Lazy loading / reveal. RevealStep carries the reveal generation it
    // was scheduled for; steps from a superseded reveal are dropped.
    ViewportScrolled,
    ScrollTick,
    RevealStep(u32),

    // JavaScript-section live demo
    DemoClick,
    DemoChangeColor,
    DemoAddText,

    Quit,
}
