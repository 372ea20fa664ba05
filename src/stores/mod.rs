//! State containers the shell coordinator composes.
//!
//! Each store is an explicit, independently testable value with a small
//! getter/setter contract. [`AppState`](crate::app::AppState) owns one of each
//! and the event handler is the only code that mutates them.
//!
//! - [`theme`]: active theme, persisted on every change
//! - [`navigation`]: active category, always changed together with the route
//! - [`query`]: raw search field text
//! - [`modal`]: visibility of the "choose a category" overlay

pub mod modal;
pub mod navigation;
pub mod query;
pub mod theme;

pub use modal::SearchModalTrigger;
pub use navigation::NavigationStore;
pub use query::SearchQueryStore;
pub use theme::ThemeStore;
