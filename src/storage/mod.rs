//! Storage layer for persistent user preferences.
//!
//! # Modules
//!
//! - `backend`: Storage trait abstraction for backend implementations
//! - `json`: JSON file-based storage implementation
//! - `memory`: In-memory fallback used when the data directory is unavailable

pub mod backend;
pub mod json;
pub mod memory;

pub use backend::Storage;
pub use json::JsonStorage;
pub use memory::MemoryStorage;

/// Key under which the theme preference is stored.
pub const THEME_KEY: &str = "theme";
