//! Snippet copying with a fallback path.
//!
//! Primary writer first; on failure the fallback writer gets one chance.
//! Failures are logged and folded into a [`CopyOutcome`] so the UI can show
//! honest feedback - a copy where both paths fail is reported as failed
//! rather than flashing a false-positive confirmation.

use crate::app::infrastructure::clipboard::ClipboardWriter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    CopiedViaFallback,
    Failed,
}

impl CopyOutcome {
    pub fn succeeded(self) -> bool {
        !matches!(self, Self::Failed)
    }

    /// Transient glyph shown on the copy button.
    pub fn feedback_icon(self) -> &'static str {
        match self {
            Self::Copied | Self::CopiedViaFallback => "\u{2705}",
            Self::Failed => "\u{26a0}",
        }
    }
}

pub struct CopyController {
    primary: Box<dyn ClipboardWriter>,
    fallback: Box<dyn ClipboardWriter>,
}

impl CopyController {
    pub fn new(primary: Box<dyn ClipboardWriter>, fallback: Box<dyn ClipboardWriter>) -> Self {
        Self { primary, fallback }
    }

    pub fn copy(&mut self, text: &str) -> CopyOutcome {
        match self.primary.write_text(text) {
            Ok(()) => CopyOutcome::Copied,
            Err(e) => {
                eprintln!("Failed to copy snippet: {}", e);
                match self.fallback.write_text(text) {
                    Ok(()) => CopyOutcome::CopiedViaFallback,
                    Err(e) => {
                        eprintln!("Fallback copy failed: {}", e);
                        CopyOutcome::Failed
                    }
                }
            }
        }
    }
}
