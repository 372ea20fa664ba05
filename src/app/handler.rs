//! Event handling: the shell coordinator.
//!
//! Every user or host event goes through [`handle_event`], which mutates the
//! stores in [`AppState`] and returns the side effects for the runtime. The
//! only asynchronous effect is the search request; its outcome comes back as
//! another event.
//!
//! # Submit flow
//!
//! ```text
//! Idle ──Submit──► Validating ─┬─ empty query ───────────────► Idle
//!                              ├─ no category ─► ShowingModal ─┐
//!                              └───────────────────────────────┴─► DispatchingFetch ──► Idle
//! ```
//!
//! The modal is advisory: submitting without a category shows it *and*
//! still sends the request. Responses are applied in arrival order, so when
//! two requests overlap the one answered last wins.
//!
//! # Example
//!
//! ```rust
//! use custom_board::app::{handle_event, AppState, Event};
//! use custom_board::storage::MemoryStorage;
//! use custom_board::stores::ThemeStore;
//! use custom_board::ui::Palettes;
//!
//! let theme = ThemeStore::load(Box::new(MemoryStorage::default()));
//! let mut state = AppState::new(theme, None, Palettes::default());
//! let (should_render, actions) = handle_event(&mut state, &Event::ToggleTheme)?;
//! assert!(should_render);
//! assert!(actions.is_empty());
//! # Ok::<(), custom_board::BoardError>(())
//! ```

use std::collections::BTreeMap;

use super::modes::InputMode;
use crate::app::{Action, AppState};
use crate::domain::error::{BoardError, Result};
use crate::domain::{Category, CATEGORIES};
use crate::fetcher::{parse_response, SearchRequest};

/// Events produced by user input or by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Replaces the whole query (paste, programmatic input).
    QueryChanged(String),
    /// Types one character into the search field.
    Char(char),
    /// Deletes the last character of the search field.
    Backspace,
    /// The clear affordance of the search field.
    ClearQuery,
    /// Moves keyboard focus into the search field.
    FocusSearch,
    /// Moves keyboard focus back to the navigation shortcuts.
    BlurSearch,
    /// Submits the search form.
    Submit,

    /// Clicks the navigation item at this index.
    SelectCategory(usize),
    /// Selects the next category, wrapping to the first.
    NextCategory,
    /// Selects the previous category, wrapping to the last.
    PreviousCategory,
    /// Clicks the logo: clears the selection and goes home.
    Logo,
    /// Returns to the previously visited route.
    Back,

    /// Flips light/dark.
    ToggleTheme,
    /// The sign-in button (stub).
    SignIn,

    /// Overlay click or Esc on the search modal.
    DismissModal,
    /// Picks a category from inside the search modal.
    ModalSelectCategory(usize),

    /// The host answered a search request.
    SearchResponse {
        /// Id from the request context, when the host echoed it.
        request_id: Option<u64>,
        status: u16,
        body: Vec<u8>,
    },
    /// The search request could not be performed at all.
    SearchFailed {
        request_id: Option<u64>,
        error: String,
    },

    /// Hides the plugin pane.
    CloseFocus,
}

impl Event {
    /// Classifies the host's answer to a web request.
    ///
    /// When the request cannot be sent at all the host still reports a
    /// result, with a non-2xx status, no headers and the error text as the
    /// body. That shape becomes [`Event::SearchFailed`]; anything else is a
    /// real HTTP response and becomes [`Event::SearchResponse`].
    #[must_use]
    pub fn from_web_result(
        status: u16,
        headers: &BTreeMap<String, String>,
        body: Vec<u8>,
        context: &BTreeMap<String, String>,
    ) -> Self {
        let request_id = SearchRequest::id_from_context(context);
        if !(200..300).contains(&status) && headers.is_empty() {
            let error = String::from_utf8_lossy(&body).trim().to_string();
            return Self::SearchFailed {
                request_id,
                error: if error.is_empty() {
                    format!("no response (status {status})")
                } else {
                    error
                },
            };
        }
        Self::SearchResponse {
            request_id,
            status,
            body,
        }
    }

    /// Events the modal overlay lets through while it is visible.
    const fn passes_modal(&self) -> bool {
        matches!(
            self,
            Self::DismissModal
                | Self::ModalSelectCategory(_)
                | Self::SearchResponse { .. }
                | Self::SearchFailed { .. }
                | Self::CloseFocus
        )
    }
}

/// Processes an event, mutates application state, and returns whether to
/// re-render plus the actions to execute.
///
/// # Errors
///
/// Returns [`BoardError::UnknownCategory`] for a category index outside the
/// navigation list. State is unchanged in that case.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = event_name(event)).entered();

    if state.modal.is_visible() && !event.passes_modal() {
        tracing::debug!("search modal open, event blocked by overlay");
        return Ok((false, vec![]));
    }

    match event {
        Event::QueryChanged(query) => {
            state.query.set(query.clone());
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if state.input_mode != InputMode::Search {
                return Ok((false, vec![]));
            }
            state.query.push(*c);
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if state.input_mode != InputMode::Search {
                return Ok((false, vec![]));
            }
            state.query.pop();
            Ok((true, vec![]))
        }
        Event::ClearQuery => {
            state.query.clear();
            Ok((true, vec![]))
        }
        Event::FocusSearch => {
            state.input_mode = InputMode::Search;
            Ok((true, vec![]))
        }
        Event::BlurSearch => {
            state.input_mode = InputMode::Normal;
            Ok((true, vec![]))
        }
        Event::Submit => submit(state),
        Event::SelectCategory(index) => {
            state.navigation.select(*index, &mut state.router)?;
            Ok((true, vec![]))
        }
        Event::NextCategory => {
            let next = state
                .navigation
                .selection()
                .index()
                .map_or(0, |i| (i + 1) % CATEGORIES.len());
            state.navigation.select(next, &mut state.router)?;
            Ok((true, vec![]))
        }
        Event::PreviousCategory => {
            let previous = state
                .navigation
                .selection()
                .index()
                .map_or(CATEGORIES.len() - 1, |i| {
                    (i + CATEGORIES.len() - 1) % CATEGORIES.len()
                });
            state.navigation.select(previous, &mut state.router)?;
            Ok((true, vec![]))
        }
        Event::Logo => {
            state.navigation.reset(&mut state.router);
            Ok((true, vec![]))
        }
        Event::Back => {
            let Some(path) = state.router.back() else {
                return Ok((false, vec![]));
            };
            state.navigation.sync_with_path(path);
            Ok((true, vec![]))
        }
        Event::ToggleTheme => {
            let theme = state.theme.toggle();
            tracing::debug!(theme = %theme, "theme toggled");
            Ok((true, vec![]))
        }
        Event::SignIn => {
            tracing::info!("sign-in is not available yet");
            Ok((false, vec![]))
        }
        Event::DismissModal => {
            state.modal.hide();
            Ok((true, vec![]))
        }
        Event::ModalSelectCategory(index) => {
            Category::from_index(*index).ok_or(BoardError::UnknownCategory(*index))?;
            state.modal.hide();
            state.navigation.select(*index, &mut state.router)?;
            Ok((true, vec![]))
        }
        Event::SearchResponse {
            request_id,
            status,
            body,
        } => {
            state.in_flight = state.in_flight.saturating_sub(1);
            match parse_response(*status, body) {
                Ok(articles) => {
                    tracing::debug!(
                        request_id = ?request_id,
                        article_count = articles.len(),
                        "search results replaced"
                    );
                    state.results = articles;
                }
                Err(e) => {
                    tracing::error!(request_id = ?request_id, error = %e, "error fetching search results");
                }
            }
            Ok((true, vec![]))
        }
        Event::SearchFailed { request_id, error } => {
            state.in_flight = state.in_flight.saturating_sub(1);
            let e = BoardError::Transport(error.clone());
            tracing::error!(request_id = ?request_id, error = %e, "error fetching search results");
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
    }
}

/// Submit: validate, maybe show the modal, maybe dispatch the request.
fn submit(state: &mut AppState) -> Result<(bool, Vec<Action>)> {
    let query = state.query.get().to_string();
    if query.is_empty() {
        tracing::debug!("empty query, submit ignored");
        return Ok((false, vec![]));
    }

    let mut changed = false;
    if state.navigation.selection().is_none() {
        state.modal.show();
        changed = true;
    }

    let Some(endpoint) = state.endpoint.clone() else {
        let e = BoardError::Config("no search endpoint configured (api_url)".to_string());
        tracing::error!(error = %e, "search not sent");
        return Ok((changed, vec![]));
    };

    let id = state.take_request_id();
    match SearchRequest::new(id, &endpoint, &query) {
        Ok(request) => {
            state.in_flight += 1;
            tracing::debug!(
                request_id = id,
                in_flight = state.in_flight,
                modal = state.modal.is_visible(),
                "search dispatched"
            );
            Ok((true, vec![Action::Fetch(request)]))
        }
        Err(e) => {
            tracing::error!(request_id = id, error = %e, "search not sent");
            Ok((changed, vec![]))
        }
    }
}

/// Short event name for span fields; avoids dumping response bodies.
const fn event_name(event: &Event) -> &'static str {
    match event {
        Event::QueryChanged(_) => "QueryChanged",
        Event::Char(_) => "Char",
        Event::Backspace => "Backspace",
        Event::ClearQuery => "ClearQuery",
        Event::FocusSearch => "FocusSearch",
        Event::BlurSearch => "BlurSearch",
        Event::Submit => "Submit",
        Event::SelectCategory(_) => "SelectCategory",
        Event::NextCategory => "NextCategory",
        Event::PreviousCategory => "PreviousCategory",
        Event::Logo => "Logo",
        Event::Back => "Back",
        Event::ToggleTheme => "ToggleTheme",
        Event::SignIn => "SignIn",
        Event::DismissModal => "DismissModal",
        Event::ModalSelectCategory(_) => "ModalSelectCategory",
        Event::SearchResponse { .. } => "SearchResponse",
        Event::SearchFailed { .. } => "SearchFailed",
        Event::CloseFocus => "CloseFocus",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetcher::REQUEST_ID_KEY;

    fn context(id: u64) -> BTreeMap<String, String> {
        BTreeMap::from([(REQUEST_ID_KEY.to_string(), id.to_string())])
    }

    fn json_headers() -> BTreeMap<String, String> {
        BTreeMap::from([("content-type".to_string(), "application/json".to_string())])
    }

    #[test]
    fn unsent_request_becomes_search_failed() {
        let event = Event::from_web_result(
            400,
            &BTreeMap::new(),
            b"error sending request: connection refused".to_vec(),
            &context(3),
        );
        assert_eq!(
            event,
            Event::SearchFailed {
                request_id: Some(3),
                error: "error sending request: connection refused".to_string(),
            }
        );

        let event = Event::from_web_result(0, &BTreeMap::new(), Vec::new(), &BTreeMap::new());
        assert_eq!(
            event,
            Event::SearchFailed {
                request_id: None,
                error: "no response (status 0)".to_string(),
            }
        );
    }

    #[test]
    fn http_answers_stay_search_responses() {
        let event = Event::from_web_result(500, &json_headers(), b"oops".to_vec(), &context(4));
        assert!(matches!(
            event,
            Event::SearchResponse { request_id: Some(4), status: 500, .. }
        ));

        let event = Event::from_web_result(200, &BTreeMap::new(), b"[]".to_vec(), &context(5));
        assert!(matches!(
            event,
            Event::SearchResponse { request_id: Some(5), status: 200, .. }
        ));
    }
}
