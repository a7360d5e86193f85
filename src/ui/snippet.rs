//! Syntax-highlighted code snippet views.
//!
//! Each snippet gets a read-only `TextDisplay` with an FLTK style buffer:
//! one style character per byte of code, mapping into a per-snippet
//! `StyleTableEntry` table built from syntect's highlight run. Snippets are
//! static, so a single full highlight per theme change is all that is needed.

use std::collections::HashMap;

use fltk::enums::{Color, Font};
use fltk::prelude::*;
use fltk::text::{StyleTableEntry, TextBuffer, TextDisplay};
use syntect::easy::HighlightLines;
use syntect::highlighting::{Color as SyntectColor, ThemeSet};
use syntect::parsing::SyntaxSet;

use crate::app::domain::{Snippet, SnippetLang};

pub const CODE_FONT: Font = Font::Courier;
pub const CODE_FONT_SIZE: i32 = 14;

/// Maps syntect RGB colors to FLTK style characters ('A', 'B', 'C', ...),
/// building the style table as colors are encountered.
struct StyleMap {
    color_to_char: HashMap<(u8, u8, u8), char>,
    entries: Vec<StyleTableEntry>,
}

impl StyleMap {
    fn new(fallback: Color) -> Self {
        let mut map = Self {
            color_to_char: HashMap::new(),
            entries: Vec::new(),
        };
        // 'A' is the default style for anything unmapped
        map.entries.push(StyleTableEntry {
            color: fallback,
            font: CODE_FONT,
            size: CODE_FONT_SIZE,
        });
        map.color_to_char.insert((0, 0, 0), 'A');
        map
    }

    fn get_or_insert(&mut self, color: SyntectColor) -> char {
        let key = (color.r, color.g, color.b);
        if let Some(&ch) = self.color_to_char.get(&key) {
            return ch;
        }
        let idx = self.entries.len();
        if idx >= 26 {
            return 'A';
        }
        let ch = (b'A' + idx as u8) as char;
        self.entries.push(StyleTableEntry {
            color: Color::from_rgb(color.r, color.g, color.b),
            font: CODE_FONT,
            size: CODE_FONT_SIZE,
        });
        self.color_to_char.insert(key, ch);
        ch
    }
}

pub struct SnippetHighlighter {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
}

impl SnippetHighlighter {
    pub fn new() -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
        }
    }

    fn theme_name(dark: bool) -> &'static str {
        if dark { "base16-ocean.dark" } else { "InspiredGitHub" }
    }

    /// Full highlight of `code`: returns the style string (one char per
    /// byte, UTF-8 safe) and the matching style table.
    pub fn style(
        &self,
        code: &str,
        lang: SnippetLang,
        dark: bool,
        fallback: Color,
    ) -> (String, Vec<StyleTableEntry>) {
        let syntax = self
            .syntax_set
            .find_syntax_by_extension(lang.extension())
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());
        let theme = &self.theme_set.themes[Self::theme_name(dark)];

        let mut highlighter = HighlightLines::new(syntax, theme);
        let mut style_map = StyleMap::new(fallback);
        let mut style_string = String::with_capacity(code.len());

        for line in code.split_inclusive('\n') {
            let regions = highlighter
                .highlight_line(line, &self.syntax_set)
                .unwrap_or_default();
            for (style, piece) in regions {
                let ch = style_map.get_or_insert(style.foreground);
                // One style char per byte (not per char) for UTF-8 correctness
                for _ in 0..piece.len() {
                    style_string.push(ch);
                }
            }
        }

        (style_string, style_map.entries)
    }
}

impl Default for SnippetHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

/// A built snippet widget plus what is needed to re-style it on theme change.
pub struct SnippetView {
    pub display: TextDisplay,
    style_buffer: TextBuffer,
    snippet: Snippet,
}

impl SnippetView {
    /// Wrap an already-laid-out display. The display's text buffer must
    /// already hold the snippet code.
    pub fn new(display: TextDisplay, snippet: Snippet) -> Self {
        Self {
            display,
            style_buffer: TextBuffer::default(),
            snippet,
        }
    }

    pub fn code(&self) -> &'static str {
        self.snippet.code
    }

    pub fn restyle(&mut self, highlighter: &SnippetHighlighter, dark: bool, fallback: Color) {
        let (style_string, entries) =
            highlighter.style(self.snippet.code, self.snippet.lang, dark, fallback);
        self.style_buffer.set_text(&style_string);
        self.display
            .set_highlight_data(self.style_buffer.clone(), entries);
        self.display.redraw();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_string_covers_every_byte() {
        let hl = SnippetHighlighter::new();
        let code = "const emoji = '\u{1f980}';\nlet n = 1;\n";
        let (style_string, entries) =
            hl.style(code, SnippetLang::JavaScript, false, Color::Black);
        assert_eq!(style_string.len(), code.len());
        assert!(!entries.is_empty());
    }

    #[test]
    fn test_style_chars_stay_in_table() {
        let hl = SnippetHighlighter::new();
        let code = ".hero {\n  display: flex;\n}\n";
        let (style_string, entries) = hl.style(code, SnippetLang::Css, true, Color::White);
        for ch in style_string.chars() {
            let idx = (ch as u8 - b'A') as usize;
            assert!(idx < entries.len(), "style char {} has no entry", ch);
        }
    }

    #[test]
    fn test_unknown_extension_falls_back_to_plain_text() {
        // All three languages resolve; this guards the lookup path itself
        let hl = SnippetHighlighter::new();
        for lang in [SnippetLang::Html, SnippetLang::Css, SnippetLang::JavaScript] {
            let (style_string, _) = hl.style("x\n", lang, false, Color::Black);
            assert_eq!(style_string.len(), 2);
        }
    }
}
