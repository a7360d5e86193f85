//! DevHandbook - a native desktop reader for the Web Development Handbook.
//!
//! Core logic (theme preference, section routing, snippet copying) lives in
//! [`app`] behind injectable seams; [`ui`] holds the FLTK widgets and the
//! production implementations of those seams.

pub mod app;
pub mod ui;
