//! Application layer.
//!
//! # Structure
//!
//! - `domain/` - Core data (ThemeChoice, SectionId, the handbook catalog)
//! - `controllers/` - Orchestration (ThemeController, SectionRouter, CopyController)
//! - `infrastructure/` - External integrations (preference file, platform, clipboard, error)
//! - `surface.rs` - The UI seam controllers drive
//! - `state.rs` - Main application coordinator

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod messages;
pub mod state;
pub mod surface;

// Re-exports for convenient external access
pub use controllers::{CopyController, CopyOutcome, SectionRouter, ThemeController};
pub use domain::{SectionId, ThemeChoice};
pub use infrastructure::error::{AppError, Result};
pub use infrastructure::platform::detect_system_dark_mode;
pub use messages::Message;
pub use surface::UiSurface;
