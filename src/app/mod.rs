//! Application layer: the shell coordinator.
//!
//! Sits between the plugin runtime (main.rs) and the stores, fetcher and UI.
//!
//! ```text
//! User Input → Events → Event Handler → Store Mutations → Actions → Host
//!                           ↑                                 ↓
//!                           └──────── Search Responses ───────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and the submit flow
//! - [`modes`]: Keyboard input modes
//! - [`router`]: Routing collaborator with back history
//! - [`state`]: Central state container and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod router;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::InputMode;
pub use router::{Navigator, Router};
pub use state::AppState;
