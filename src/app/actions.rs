//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event. All
//! state changes have already happened by then; actions are only the effects
//! the library cannot perform itself because they need the host.
//!
//! # Example
//!
//! ```rust
//! use custom_board::app::Action;
//! use custom_board::fetcher::{HttpMethod, SearchEndpoint, SearchRequest};
//!
//! let endpoint = SearchEndpoint::new("https://api.example.com/news", HttpMethod::Put);
//! let actions = vec![Action::Fetch(SearchRequest::new(1, &endpoint, "gold")?)];
//! # Ok::<(), custom_board::BoardError>(())
//! ```

use crate::fetcher::SearchRequest;

/// Commands for the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Sends a search request through the host.
    ///
    /// The response comes back as
    /// [`Event::SearchResponse`](crate::app::Event::SearchResponse), or
    /// [`Event::SearchFailed`](crate::app::Event::SearchFailed) when it could
    /// not be sent, carrying the same request id.
    Fetch(SearchRequest),
}
