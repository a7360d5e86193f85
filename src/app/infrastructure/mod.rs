//! Infrastructure layer - external integrations.
//!
//! - Preference file on disk
//! - Platform color-scheme probing
//! - Clipboard writers
//! - Error types

pub mod clipboard;
pub mod error;
pub mod platform;
pub mod prefs;
