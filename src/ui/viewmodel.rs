//! View model types representing renderable shell state.
//!
//! View models are computed from [`AppState`](crate::app::AppState) via
//! `compute_viewmodel()` and consumed by the renderer. They hold display-ready
//! data only; render components never look at state directly.

/// Complete view model for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    pub header: HeaderInfo,
    pub search_bar: SearchBarInfo,
    /// Navigation bar items in category order.
    pub nav_items: Vec<NavItem>,
    /// Routed content panel for the current path.
    pub content: ContentPanel,
    /// Present while the "choose a category" overlay is visible.
    pub modal: Option<ModalInfo>,
    pub footer: FooterInfo,
}

/// Title bar: logo, theme toggle and the sign-in stub.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
    /// Label of the theme toggle; names the theme a toggle would switch to.
    pub theme_toggle: String,
    pub sign_in: String,
}

/// Search input box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    pub query: String,
    /// Whether keystrokes currently go to the field.
    pub is_focused: bool,
    /// Whether the clear affordance is drawn (non-empty query).
    pub show_clear: bool,
}

/// One entry of the navigation bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    /// Key that selects this item (`1`..`5`).
    pub shortcut: char,
    pub label: String,
    pub is_active: bool,
}

/// What the routed content area shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentPanel {
    /// Root route.
    Home { message: String },
    /// `/news`: the current result set, windowed to the available rows.
    Results {
        items: Vec<ResultItem>,
        total: usize,
    },
    /// No results to show on `/news`.
    Empty { message: String, subtitle: String },
    /// A category route without a page of its own yet.
    Placeholder { title: String },
}

/// One article row in the results panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultItem {
    pub title: String,
    pub date: String,
    pub link: String,
    /// Character ranges of `title` matching the query, `(start, end)` exclusive.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Content of the search modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalInfo {
    pub message: String,
    /// Category choices, already prefixed with their shortcut.
    pub options: Vec<String>,
    pub hint: String,
}

/// Help text and transient status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
    /// e.g. "searching…" while requests are outstanding.
    pub status: Option<String>,
}
