//! API module
//!
//! Contains HTTP request handlers for the file store endpoints

pub mod files;

// Re-export file API for convenience (used by main.rs)
pub use files::*;
