//! End-to-end behaviour of the shell coordinator, driven through events the
//! way the plugin runtime drives it.

use std::collections::BTreeMap;

use custom_board::app::{Navigator, Router};
use custom_board::domain::CategorySelection;
use custom_board::fetcher::{HttpMethod, SearchEndpoint, SearchRequest};
use custom_board::storage::MemoryStorage;
use custom_board::stores::ThemeStore;
use custom_board::ui::Palettes;
use custom_board::{handle_event, initialize, Action, AppState, Config, Event, InputMode, Theme};

fn state() -> AppState {
    let theme = ThemeStore::load(Box::new(MemoryStorage::default()));
    let endpoint = SearchEndpoint::new("https://api.example.com/news/search", HttpMethod::Put);
    AppState::new(theme, Some(endpoint), Palettes::default())
}

fn send(state: &mut AppState, event: Event) -> (bool, Vec<Action>) {
    handle_event(state, &event).unwrap()
}

fn fetched(actions: &[Action]) -> &SearchRequest {
    match actions {
        [Action::Fetch(request)] => request,
        other => panic!("expected exactly one fetch, got {other:?}"),
    }
}

fn response(request: &SearchRequest, body: &str) -> Event {
    Event::SearchResponse {
        request_id: Some(request.id),
        status: 200,
        body: body.as_bytes().to_vec(),
    }
}

#[test]
fn empty_submit_changes_nothing() {
    let mut state = state();

    let (render, actions) = send(&mut state, Event::Submit);

    assert!(!render);
    assert!(actions.is_empty());
    assert!(!state.modal.is_visible());
    assert_eq!(state.in_flight, 0);
}

#[test]
fn submit_without_category_shows_modal_and_still_fetches() {
    let mut state = state();
    send(&mut state, Event::QueryChanged("gold".to_string()));

    let (render, actions) = send(&mut state, Event::Submit);

    assert!(render);
    assert!(state.modal.is_visible());
    let request = fetched(&actions);
    assert_eq!(request.method, HttpMethod::Put);
    assert_eq!(request.query, "gold");
    assert_eq!(
        serde_json::from_slice::<serde_json::Value>(&request.body).unwrap(),
        serde_json::json!({ "inputValue": "gold" })
    );
}

#[test]
fn submit_with_category_fetches_without_modal() {
    let mut state = state();
    send(&mut state, Event::SelectCategory(0));
    send(&mut state, Event::QueryChanged("gold".to_string()));

    let (_, actions) = send(&mut state, Event::Submit);

    fetched(&actions);
    assert!(!state.modal.is_visible());
    assert_eq!(state.in_flight, 1);
}

#[test]
fn successful_response_replaces_results_and_strips_markup() {
    let mut state = state();
    send(&mut state, Event::SelectCategory(0));
    send(&mut state, Event::QueryChanged("gold".to_string()));
    let (_, actions) = send(&mut state, Event::Submit);
    let request = fetched(&actions).clone();

    send(
        &mut state,
        response(
            &request,
            r#"[{"title":"<b>Gold</b> &amp; silver","description":"<p>Prices up</p>","pubDate":"Mon, 14 Oct 2024 10:00:00 +0900","originallink":"https://news.example.com/1","imageUrls":["https://img.example.com/1.png"],"articleText":"<div>Body</div>"}]"#,
        ),
    );

    assert_eq!(state.results.len(), 1);
    let article = &state.results[0];
    assert_eq!(article.title, "Gold & silver");
    assert_eq!(article.description, "Prices up");
    assert_eq!(article.article_text, "Body");
    assert_eq!(article.image_urls, vec!["https://img.example.com/1.png".to_string()]);
    assert_eq!(state.in_flight, 0);
}

#[test]
fn overlapping_searches_last_arrival_wins() {
    let mut state = state();
    send(&mut state, Event::SelectCategory(0));

    send(&mut state, Event::QueryChanged("gold".to_string()));
    let (_, first) = send(&mut state, Event::Submit);
    send(&mut state, Event::QueryChanged("silver".to_string()));
    let (_, second) = send(&mut state, Event::Submit);
    let (first, second) = (fetched(&first).clone(), fetched(&second).clone());
    assert_ne!(first.id, second.id);
    assert_eq!(state.in_flight, 2);

    send(&mut state, response(&second, r#"[{"title":"silver"}]"#));
    send(&mut state, response(&first, r#"[{"title":"gold"}]"#));

    assert_eq!(state.results.len(), 1);
    assert_eq!(state.results[0].title, "gold");
    assert_eq!(state.in_flight, 0);
}

#[test]
fn failed_searches_keep_previous_results() {
    let mut state = state();
    send(&mut state, Event::SelectCategory(0));
    send(&mut state, Event::QueryChanged("gold".to_string()));

    let (_, actions) = send(&mut state, Event::Submit);
    let ok = fetched(&actions).clone();
    send(&mut state, response(&ok, r#"[{"title":"kept"}]"#));

    let (_, actions) = send(&mut state, Event::Submit);
    let server_error = fetched(&actions).clone();
    send(
        &mut state,
        Event::SearchResponse {
            request_id: Some(server_error.id),
            status: 500,
            body: b"oops".to_vec(),
        },
    );

    let (_, actions) = send(&mut state, Event::Submit);
    let malformed = fetched(&actions).clone();
    send(&mut state, response(&malformed, r#"{"not":"a list"}"#));

    let (_, actions) = send(&mut state, Event::Submit);
    let unreachable = fetched(&actions).clone();
    send(
        &mut state,
        Event::SearchFailed {
            request_id: Some(unreachable.id),
            error: "connection refused".to_string(),
        },
    );

    assert_eq!(state.results.len(), 1);
    assert_eq!(state.results[0].title, "kept");
    assert_eq!(state.in_flight, 0);
}

#[test]
fn unsent_request_is_reported_as_failure() {
    let mut state = state();
    send(&mut state, Event::SelectCategory(0));
    send(&mut state, Event::QueryChanged("gold".to_string()));
    let (_, actions) = send(&mut state, Event::Submit);
    let request = fetched(&actions).clone();

    let event = Event::from_web_result(
        400,
        &BTreeMap::new(),
        b"error sending request".to_vec(),
        &request.context(),
    );
    assert!(matches!(
        event,
        Event::SearchFailed { request_id: Some(id), .. } if id == request.id
    ));

    let (render, actions) = send(&mut state, event);
    assert!(render);
    assert!(actions.is_empty());
    assert!(state.results.is_empty());
    assert_eq!(state.in_flight, 0);
}

#[test]
fn modal_blocks_the_shell_until_resolved() {
    let mut state = state();
    send(&mut state, Event::QueryChanged("gold".to_string()));
    send(&mut state, Event::Submit);
    assert!(state.modal.is_visible());

    let (render, actions) = send(&mut state, Event::SelectCategory(1));
    assert!(!render);
    assert!(actions.is_empty());
    assert_eq!(state.navigation.selection(), CategorySelection::None);

    send(&mut state, Event::ModalSelectCategory(1));
    assert!(!state.modal.is_visible());
    assert_eq!(state.navigation.selection(), CategorySelection::Selected(1));
    assert_eq!(state.router.current_path(), "/youtube");
}

#[test]
fn dismissing_modal_leaves_navigation_alone() {
    let mut state = state();
    send(&mut state, Event::QueryChanged("gold".to_string()));
    send(&mut state, Event::Submit);

    send(&mut state, Event::DismissModal);

    assert!(!state.modal.is_visible());
    assert!(state.navigation.selection().is_none());
    assert_eq!(state.router.current_path(), "/");
}

#[test]
fn unknown_category_is_rejected_without_change() {
    let mut state = state();
    send(&mut state, Event::SelectCategory(3));

    assert!(handle_event(&mut state, &Event::SelectCategory(9)).is_err());
    assert_eq!(state.navigation.selection(), CategorySelection::Selected(3));
    assert_eq!(state.router.current_path(), "/x");
}

#[test]
fn logo_and_back_keep_selection_in_sync_with_route() {
    let mut state = state();
    send(&mut state, Event::SelectCategory(0));
    send(&mut state, Event::NextCategory);
    assert_eq!(state.router.current_path(), "/youtube");

    send(&mut state, Event::Logo);
    assert!(state.navigation.selection().is_none());
    assert_eq!(state.router.current_path(), "/");

    send(&mut state, Event::Back);
    assert_eq!(state.router.current_path(), "/youtube");
    assert_eq!(state.navigation.selection(), CategorySelection::Selected(1));

    send(&mut state, Event::PreviousCategory);
    assert_eq!(state.router.current_path(), "/news");
}

#[test]
fn typing_only_reaches_focused_field() {
    let mut state = state();
    send(&mut state, Event::Char('x'));
    assert_eq!(state.query.get(), "");

    send(&mut state, Event::FocusSearch);
    assert_eq!(state.input_mode, InputMode::Search);
    for c in "gold".chars() {
        send(&mut state, Event::Char(c));
    }
    send(&mut state, Event::Backspace);
    assert_eq!(state.query.get(), "gol");

    send(&mut state, Event::ClearQuery);
    assert_eq!(state.query.get(), "");
    send(&mut state, Event::ClearQuery);
    assert_eq!(state.query.get(), "");
}

#[test]
fn missing_endpoint_sends_nothing() {
    let theme = ThemeStore::load(Box::new(MemoryStorage::default()));
    let mut state = AppState::new(theme, None, Palettes::default());
    send(&mut state, Event::SelectCategory(0));
    send(&mut state, Event::QueryChanged("gold".to_string()));

    let (_, actions) = send(&mut state, Event::Submit);

    assert!(actions.is_empty());
    assert_eq!(state.in_flight, 0);
}

#[test]
fn close_focus_is_forwarded_to_the_runtime() {
    let mut state = state();
    let (_, actions) = send(&mut state, Event::CloseFocus);
    assert_eq!(actions, vec![Action::CloseFocus]);
}

#[test]
fn theme_toggle_persists_across_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        data_dir: Some(dir.path().display().to_string()),
        ..Default::default()
    };

    let mut state = initialize(&config);
    assert_eq!(state.theme.get(), Theme::Light);
    send(&mut state, Event::ToggleTheme);
    assert_eq!(state.theme.stored_value().as_deref(), Some("dark"));
    drop(state);

    let mut state = initialize(&config);
    assert_eq!(state.theme.get(), Theme::Dark);
    send(&mut state, Event::ToggleTheme);
    assert_eq!(state.theme.get(), Theme::Light);
    assert_eq!(state.theme.stored_value().as_deref(), Some("light"));
}

#[test]
fn router_collaborator_can_be_driven_directly() {
    let mut router = Router::default();
    router.navigate("/news");
    router.navigate("/bookmark");
    assert!(router.can_go_back());
    assert_eq!(router.back(), Some("/news"));
}
