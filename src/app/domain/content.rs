//! Static handbook content: one [`Section`] per [`SectionId`], each holding
//! topic cards, code examples, and (for the resources section) external
//! links. The catalog is fixed at compile time; nothing here is mutated at
//! runtime.

use super::section::SectionId;

/// Syntax used to highlight a code example.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnippetLang {
    Html,
    Css,
    JavaScript,
}

impl SnippetLang {
    /// File extension handed to syntect for syntax lookup.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Css => "css",
            Self::JavaScript => "js",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Snippet {
    pub title: &'static str,
    pub lang: SnippetLang,
    pub code: &'static str,
}

/// A topic card. Cards with a `target` act as navigation triggers and route
/// to that section when clicked, exactly like a sidebar button.
#[derive(Debug, Clone, Copy)]
pub struct Card {
    pub title: &'static str,
    pub blurb: &'static str,
    pub target: Option<SectionId>,
    /// Illustration file under the assets directory, loaded lazily on first
    /// visibility. `None` means the card is text-only.
    pub illustration: Option<&'static str>,
}

#[derive(Debug, Clone, Copy)]
pub struct ResourceLink {
    pub label: &'static str,
    pub url: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Section {
    pub id: SectionId,
    pub intro: &'static str,
    pub cards: &'static [Card],
    pub snippets: &'static [Snippet],
    pub links: &'static [ResourceLink],
}

pub fn catalog() -> &'static [Section] {
    SECTIONS
}

static SECTIONS: &[Section] = &[
    Section {
        id: SectionId::Html,
        intro: "HTML gives a page its structure. These topics cover the \
                elements you will reach for on every page you build.",
        cards: &[
            Card {
                title: "Document skeleton",
                blurb: "Doctype, head, body, and the metadata that belongs in each.",
                target: None,
                illustration: Some("html-skeleton.png"),
            },
            Card {
                title: "Semantic elements",
                blurb: "header, nav, main, article and friends - structure that \
                        screen readers and search engines understand.",
                target: None,
                illustration: None,
            },
            Card {
                title: "Style it with CSS",
                blurb: "Once the structure is right, jump to the CSS section to \
                        make it look like something.",
                target: Some(SectionId::Css),
                illustration: None,
            },
        ],
        snippets: &[Snippet {
            title: "A minimal page",
            lang: SnippetLang::Html,
            code: "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n  <meta charset=\"UTF-8\">\n  <title>My Page</title>\n</head>\n<body>\n  <main>\n    <h1>Hello, web!</h1>\n  </main>\n</body>\n</html>\n",
        }],
        links: &[],
    },
    Section {
        id: SectionId::Css,
        intro: "CSS turns structure into design: selectors, the cascade, and \
                modern layout with flexbox and grid.",
        cards: &[
            Card {
                title: "Selectors & specificity",
                blurb: "How the browser decides which rule wins.",
                target: None,
                illustration: Some("css-cascade.png"),
            },
            Card {
                title: "Flexbox layout",
                blurb: "One-dimensional layout for toolbars, cards, and centering.",
                target: None,
                illustration: None,
            },
            Card {
                title: "Make it interactive",
                blurb: "Behavior lives in JavaScript - continue there.",
                target: Some(SectionId::JavaScript),
                illustration: None,
            },
        ],
        snippets: &[Snippet {
            title: "Centering with flexbox",
            lang: SnippetLang::Css,
            code: ".hero {\n  display: flex;\n  align-items: center;\n  justify-content: center;\n  min-height: 60vh;\n}\n",
        }],
        links: &[],
    },
    Section {
        id: SectionId::JavaScript,
        intro: "JavaScript adds behavior. Start with the DOM, events, and \
                small state - the demo below runs live in this app.",
        cards: &[
            Card {
                title: "DOM & events",
                blurb: "Find elements, listen for clicks, update the page.",
                target: None,
                illustration: Some("js-events.png"),
            },
            Card {
                title: "Fetch & async",
                blurb: "Promises, async/await, and talking to an API.",
                target: None,
                illustration: None,
            },
        ],
        snippets: &[Snippet {
            title: "Counting clicks",
            lang: SnippetLang::JavaScript,
            code: "const btn = document.querySelector('#counter');\nlet clicks = 0;\n\nbtn.addEventListener('click', () => {\n  clicks += 1;\n  btn.textContent = `Clicked ${clicks} times`;\n});\n",
        }],
        links: &[],
    },
    Section {
        id: SectionId::Responsive,
        intro: "One page, every screen: fluid layout, media queries, and \
                responsive images.",
        cards: &[
            Card {
                title: "Media queries",
                blurb: "Breakpoints that follow the content, not the device list.",
                target: None,
                illustration: Some("responsive-breakpoints.png"),
            },
            Card {
                title: "Fluid type & spacing",
                blurb: "clamp(), viewport units, and intrinsic sizing.",
                target: None,
                illustration: None,
            },
        ],
        snippets: &[Snippet {
            title: "A mobile-first breakpoint",
            lang: SnippetLang::Css,
            code: ".sidebar {\n  display: none;\n}\n\n@media (min-width: 48rem) {\n  .sidebar {\n    display: block;\n  }\n}\n",
        }],
        links: &[],
    },
    Section {
        id: SectionId::Resources,
        intro: "References worth keeping open in a second window.",
        cards: &[],
        snippets: &[],
        links: &[
            ResourceLink {
                label: "MDN Web Docs",
                url: "https://developer.mozilla.org/",
            },
            ResourceLink {
                label: "web.dev",
                url: "https://web.dev/",
            },
            ResourceLink {
                label: "Can I Use",
                url: "https://caniuse.com/",
            },
        ],
    },
];
