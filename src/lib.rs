//! Custom Board: a Zellij plugin shell for a news-aggregation board.
//!
//! The plugin keeps a small set of cross-cutting UI state consistent while
//! the user works with the header and the category navigator:
//! - a light/dark theme, persisted across sessions
//! - the active category, synchronised with the current route
//! - the search query, with a clear affordance
//! - a "choose a category first" modal for searches made from the home route
//! - the article list returned by the search endpoint, HTML-stripped

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point, host I/O
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Coordinator
//! │  - Event handling and the submit flow               │
//! │  - Action dispatching                               │
//! │  - Router with back history                         │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Stores        │   │ Fetcher       │   │ UI Layer      │
//! │ (stores/)     │   │ (fetcher/)    │   │ (ui/)         │
//! │ - Theme       │   │ - Request     │   │ - View model  │
//! │ - Navigation  │   │ - Response    │   │ - Palettes    │
//! │ - Query/Modal │   │ - HTML strip  │   │ - Components  │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │
//! ┌─────────────────────────────────────────────────────┐
//! │  Storage, Domain & Infrastructure                   │
//! │  - Key/value preference storage (storage/)          │
//! │  - Theme, Category, Article, errors (domain/)       │
//! │  - Sandbox paths (infrastructure/)                  │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing, file-based OTLP export    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/custom-board.wasm" {
//!         api_url "https://api.example.com/news/search"
//!         api_method "PUT"
//!         trace_level "info"
//!         dark_palette "~/.config/custom-board/dark.toml"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use custom_board::{handle_event, initialize, Action, Config, Event};
//!
//! let dir = tempfile::tempdir()?;
//! let config = Config {
//!     api_url: Some("https://api.example.com/news/search".to_string()),
//!     data_dir: Some(dir.path().display().to_string()),
//!     ..Default::default()
//! };
//! let mut state = initialize(&config);
//!
//! handle_event(&mut state, &Event::QueryChanged("gold".to_string()))?;
//! let (_, actions) = handle_event(&mut state, &Event::Submit)?;
//!
//! // No category yet: the modal opens and the request still goes out.
//! assert!(state.modal.is_visible());
//! assert!(matches!(actions.as_slice(), [Action::Fetch(_)]));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod app;
pub mod domain;
pub mod fetcher;
pub mod infrastructure;
pub mod storage;
pub mod stores;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, InputMode};
pub use domain::{BoardError, Category, Result, Theme};

use crate::fetcher::{HttpMethod, SearchEndpoint};
use crate::infrastructure::paths::{expand_tilde, preferences_path, resolve_data_dir};
use crate::storage::{JsonStorage, MemoryStorage, Storage};
use crate::stores::ThemeStore;
use crate::ui::{Palette, Palettes};
use std::collections::BTreeMap;

/// Environment variable consulted when `api_url` is not configured.
pub const API_URL_ENV: &str = "CUSTOM_BOARD_API_URL";

/// Plugin configuration parsed from Zellij's configuration system.
///
/// ```kdl
/// plugin location="file:/path/to/custom-board.wasm" {
///     api_url "https://api.example.com/news/search"
///     api_method "PUT"
///     light_palette "~/.config/custom-board/light.toml"
///     dark_palette "~/.config/custom-board/dark.toml"
///     data_dir "~/.local/share/custom-board"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Search endpoint. Without it searches are logged and not sent.
    pub api_url: Option<String>,

    /// HTTP method for the search call. Default: `PUT`
    pub api_method: HttpMethod,

    /// Tracing filter directive (`trace`, `debug`, `info`, ...). Default: `"info"`
    pub trace_level: Option<String>,

    /// Custom TOML palette replacing the built-in light palette.
    pub light_palette: Option<String>,

    /// Custom TOML palette replacing the built-in dark palette.
    pub dark_palette: Option<String>,

    /// Overrides the directory holding preferences and traces.
    pub data_dir: Option<String>,
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Blank values count as absent. `api_url` falls back to the
    /// `CUSTOM_BOARD_API_URL` environment variable; an unknown `api_method`
    /// is logged and replaced by `PUT`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use custom_board::Config;
    /// use custom_board::fetcher::HttpMethod;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("api_url".to_string(), "https://api.example.com/s".to_string());
    /// map.insert("api_method".to_string(), "post".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.api_url.as_deref(), Some("https://api.example.com/s"));
    /// assert_eq!(config.api_method, HttpMethod::Post);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let value = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let api_url = value("api_url").or_else(|| {
            std::env::var(API_URL_ENV)
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        });

        let api_method = value("api_method").map_or_else(HttpMethod::default, |raw| {
            raw.parse().unwrap_or_else(|e| {
                tracing::warn!(error = %e, "falling back to PUT");
                HttpMethod::default()
            })
        });

        Self {
            api_url,
            api_method,
            trace_level: value("trace_level"),
            light_palette: value("light_palette"),
            dark_palette: value("dark_palette"),
            data_dir: value("data_dir"),
        }
    }

    /// The configured search endpoint, if any.
    #[must_use]
    pub fn endpoint(&self) -> Option<SearchEndpoint> {
        self.api_url
            .as_ref()
            .map(|url| SearchEndpoint::new(url.clone(), self.api_method))
    }
}

/// Initializes the shell state from configuration.
///
/// - Preferences are read from `preferences.json` in the data directory.
///   If that file cannot be opened the theme lives in memory only.
/// - Custom palettes that fail to load are logged and replaced by the
///   built-in ones.
///
/// Never fails: every problem degrades to a default and is logged.
pub fn initialize(config: &Config) -> AppState {
    let _span = tracing::debug_span!("initialize").entered();

    let data_dir = resolve_data_dir(config.data_dir.as_deref());
    let storage: Box<dyn Storage> = match JsonStorage::new(preferences_path(&data_dir)) {
        Ok(storage) => Box::new(storage),
        Err(e) => {
            tracing::warn!(error = %e, "preferences unavailable, theme will not be saved");
            Box::new(MemoryStorage::unavailable())
        }
    };

    let endpoint = config.endpoint();
    if endpoint.is_none() {
        tracing::warn!("no api_url configured, searches will not be sent");
    }

    AppState::new(ThemeStore::load(storage), endpoint, load_palettes(config))
}

fn load_palettes(config: &Config) -> Palettes {
    let load = |path: Option<&String>, theme: Theme| {
        path.map_or_else(
            || Palette::builtin(theme),
            |path| {
                Palette::from_file(expand_tilde(path)).unwrap_or_else(|e| {
                    tracing::warn!(palette = %path, error = %e, "using built-in palette");
                    Palette::builtin(theme)
                })
            },
        )
    };

    Palettes {
        light: load(config.light_palette.as_ref(), Theme::Light),
        dark: load(config.dark_palette.as_ref(), Theme::Dark),
    }
}
