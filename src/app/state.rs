//! Application state and view model computation.
//!
//! [`AppState`] composes the stores, the router and the current result set.
//! It is the single source of truth the render collaborators read from; the
//! event handler is the only code that mutates it.
//!
//! # Example
//!
//! ```rust
//! use custom_board::app::AppState;
//! use custom_board::storage::MemoryStorage;
//! use custom_board::stores::ThemeStore;
//! use custom_board::ui::Palettes;
//!
//! let theme = ThemeStore::load(Box::new(MemoryStorage::default()));
//! let state = AppState::new(theme, None, Palettes::default());
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert_eq!(viewmodel.header.title, "Custom Board");
//! ```

use super::modes::InputMode;
use super::router::Router;
use crate::domain::{Article, Category, Theme, CATEGORIES, ROOT_PATH};
use crate::fetcher::SearchEndpoint;
use crate::stores::{NavigationStore, SearchModalTrigger, SearchQueryStore, ThemeStore};
use crate::ui::helpers::{text_width, truncate_to_width};
use crate::ui::theme::{Palette, Palettes};
use crate::ui::viewmodel::{
    ContentPanel, FooterInfo, HeaderInfo, ModalInfo, NavItem, ResultItem, SearchBarInfo,
    UIViewModel,
};
use fuzzy_matcher::skim::SkimMatcherV2;

/// Rows taken by everything except the article list: header, search box
/// (3), navigation bar, two borders, the footer and the results count line.
const CHROME_ROWS: usize = 9;

/// Each result occupies a title line and a date/link line.
const ROWS_PER_RESULT: usize = 2;

/// Central application state container.
#[derive(Debug)]
pub struct AppState {
    /// Active theme, persisted on every change.
    pub theme: ThemeStore,

    /// Active category; only changed together with `router`.
    pub navigation: NavigationStore,

    /// Raw search field text.
    pub query: SearchQueryStore,

    /// "Choose a category first" overlay.
    pub modal: SearchModalTrigger,

    /// Current route and back history.
    pub router: Router,

    /// Latest successful search results, replaced wholesale.
    pub results: Vec<Article>,

    /// Where keystrokes go.
    pub input_mode: InputMode,

    /// Search endpoint; `None` when not configured.
    pub endpoint: Option<SearchEndpoint>,

    /// Light and dark palettes.
    pub palettes: Palettes,

    /// Number of search requests sent and not yet answered.
    pub in_flight: usize,

    next_request_id: u64,
}

impl AppState {
    /// Creates the initial shell state: no category, empty query, modal
    /// hidden, root route, no results.
    #[must_use]
    pub fn new(theme: ThemeStore, endpoint: Option<SearchEndpoint>, palettes: Palettes) -> Self {
        Self {
            theme,
            navigation: NavigationStore::default(),
            query: SearchQueryStore::default(),
            modal: SearchModalTrigger::default(),
            router: Router::default(),
            results: Vec::new(),
            input_mode: InputMode::Normal,
            endpoint,
            palettes,
            in_flight: 0,
            next_request_id: 1,
        }
    }

    /// Hands out the next request id.
    pub fn take_request_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// Palette matching the active theme.
    #[must_use]
    pub fn palette(&self) -> &Palette {
        self.palettes.for_theme(self.theme.get())
    }

    /// Computes the view model for a `rows` x `cols` pane.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        UIViewModel {
            header: self.compute_header(),
            search_bar: SearchBarInfo {
                query: self.query.get().to_string(),
                is_focused: self.input_mode == InputMode::Search,
                show_clear: self.query.shows_clear_affordance(),
            },
            nav_items: self.compute_nav_items(),
            content: self.compute_content(rows, cols),
            modal: self.modal.is_visible().then(Self::compute_modal),
            footer: self.compute_footer(),
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let theme_toggle = match self.theme.get() {
            Theme::Light => "☾ dark",
            Theme::Dark => "☀ light",
        };
        HeaderInfo {
            title: "Custom Board".to_string(),
            theme_toggle: theme_toggle.to_string(),
            sign_in: "Sign in".to_string(),
        }
    }

    fn compute_nav_items(&self) -> Vec<NavItem> {
        let active = self.navigation.selection().index();
        CATEGORIES
            .iter()
            .enumerate()
            .map(|(index, category)| NavItem {
                shortcut: shortcut_for(index),
                label: category.label().to_string(),
                is_active: active == Some(index),
            })
            .collect()
    }

    fn compute_content(&self, rows: usize, cols: usize) -> ContentPanel {
        let path = self.router.current_path();
        if path == ROOT_PATH {
            return ContentPanel::Home {
                message: "Pick a category or press / to search".to_string(),
            };
        }
        if path != Category::News.path() {
            let title = Category::index_for_path(path)
                .and_then(Category::from_index)
                .map_or_else(|| path.to_string(), |c| c.label().to_string());
            return ContentPanel::Placeholder { title };
        }
        if self.results.is_empty() {
            return ContentPanel::Empty {
                message: "No articles yet".to_string(),
                subtitle: "Type a query and press Enter".to_string(),
            };
        }

        let capacity = rows.saturating_sub(CHROME_ROWS) / ROWS_PER_RESULT;
        let matcher = (!self.query.get().is_empty()).then(SkimMatcherV2::default);

        let items = self
            .results
            .iter()
            .take(capacity)
            .map(|article| {
                let title = truncate_to_width(&article.title, cols.saturating_sub(4));
                let highlight_ranges = matcher
                    .as_ref()
                    .map_or_else(Vec::new, |m| self.compute_highlight_ranges(&title, m));
                let date = truncate_to_width(&article.display_date(), cols.saturating_sub(8));
                let link_room = cols.saturating_sub(8 + text_width(&date));
                ResultItem {
                    title,
                    link: truncate_to_width(&article.original_link, link_room),
                    date,
                    highlight_ranges,
                }
            })
            .collect();

        ContentPanel::Results {
            items,
            total: self.results.len(),
        }
    }

    /// Coalesces fuzzy match indices into `(start, end)` character ranges.
    fn compute_highlight_ranges(&self, text: &str, matcher: &SkimMatcherV2) -> Vec<(usize, usize)> {
        use fuzzy_matcher::FuzzyMatcher;

        let Some((_score, indices)) = matcher.fuzzy_indices(text, self.query.get()) else {
            return vec![];
        };

        let mut ranges: Vec<(usize, usize)> = Vec::new();
        for idx in indices {
            match ranges.last_mut() {
                Some((_, end)) if *end == idx => *end = idx + 1,
                _ => ranges.push((idx, idx + 1)),
            }
        }
        ranges
    }

    fn compute_modal() -> ModalInfo {
        ModalInfo {
            message: "Choose where to search first".to_string(),
            options: CATEGORIES
                .iter()
                .enumerate()
                .map(|(index, category)| format!("{} {}", shortcut_for(index), category.label()))
                .collect(),
            hint: "1-5: choose  Esc/click: dismiss".to_string(),
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = if self.modal.is_visible() {
            "1-5: choose category  Esc: dismiss"
        } else {
            match self.input_mode {
                InputMode::Search => "Enter: search  Ctrl+u: clear  Esc: done  Type to edit",
                InputMode::Normal => {
                    "/: search  1-5 or h/l: category  g: home  b: back  t: theme  q: quit"
                }
            }
        };

        let mut status = Vec::new();
        if self.in_flight > 0 {
            status.push("searching…".to_string());
        }
        if !self.theme.is_persisted() {
            status.push("theme not saved".to_string());
        }

        FooterInfo {
            keybindings: keybindings.to_string(),
            status: (!status.is_empty()).then(|| status.join("  ")),
        }
    }
}

/// Keyboard shortcut for the category at `index` (`'1'`..).
#[must_use]
pub fn shortcut_for(index: usize) -> char {
    u32::try_from(index + 1)
        .ok()
        .and_then(|n| char::from_digit(n, 10))
        .unwrap_or('?')
}
