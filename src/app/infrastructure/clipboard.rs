//! Clipboard writers.
//!
//! The primary path is the toolkit clipboard; the fallback shells out to
//! whatever clipboard tool the platform ships. Both sit behind
//! [`ClipboardWriter`] so the copy controller can be tested with fakes.

use std::io::Write;
use std::process::{Command, Stdio};

use super::error::{AppError, Result};

pub trait ClipboardWriter {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// FLTK's selection-buffer clipboard. Requires a running display.
pub struct FltkClipboard;

impl ClipboardWriter for FltkClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        fltk::app::copy(text);
        Ok(())
    }
}

/// Pipes text into the platform clipboard tool. Used when the toolkit
/// clipboard is unavailable.
pub struct CommandClipboard;

impl CommandClipboard {
    fn candidates() -> &'static [(&'static str, &'static [&'static str])] {
        #[cfg(target_os = "linux")]
        {
            &[
                ("wl-copy", &[]),
                ("xclip", &["-selection", "clipboard"]),
                ("xsel", &["--clipboard", "--input"]),
            ]
        }
        #[cfg(target_os = "macos")]
        {
            &[("pbcopy", &[])]
        }
        #[cfg(target_os = "windows")]
        {
            &[("clip", &[])]
        }
        #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
        {
            &[]
        }
    }

    fn pipe_to(tool: &str, args: &[&str], text: &str) -> Result<()> {
        let mut child = Command::new(tool)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        if let Some(ref mut stdin) = child.stdin {
            stdin.write_all(text.as_bytes())?;
        }
        let status = child.wait()?;
        if status.success() {
            Ok(())
        } else {
            Err(AppError::Clipboard(format!("{} exited with {}", tool, status)))
        }
    }
}

impl ClipboardWriter for CommandClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        for (tool, args) in Self::candidates() {
            if Self::pipe_to(tool, args, text).is_ok() {
                return Ok(());
            }
        }
        Err(AppError::Clipboard("no clipboard tool found".to_string()))
    }
}
