//! Domain layer for the Custom Board plugin.
//!
//! Core types independent of Zellij APIs, storage or rendering.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`theme`]: Light/dark preference
//! - [`category`]: Fixed navigation categories and the selection sentinel
//! - [`article`]: Wire and normalized search result records

pub mod article;
pub mod category;
pub mod error;
pub mod theme;

pub use article::{Article, RawArticle};
pub use category::{Category, CategorySelection, CATEGORIES, ROOT_PATH};
pub use error::{BoardError, Result};
pub use theme::Theme;
