//! Input mode state machine.
//!
//! The shell has two keyboard modes. In [`InputMode::Normal`] keys drive the
//! header and navigation bar (`1`-`5`, `t`, `/`, ...). In
//! [`InputMode::Search`] printable keys are typed into the search field.
//!
//! ```text
//! Normal ──'/'──► Search
//!   ▲               │
//!   └─────Esc───────┘
//! ```
//!
//! While the search modal is visible the plugin shim routes keys to the
//! modal regardless of mode.

/// Where keystrokes go.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputMode {
    /// Keys are shortcuts for the header and navigation bar.
    #[default]
    Normal,
    /// Keys are typed into the search field.
    Search,
}
