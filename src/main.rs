//! Zellij plugin wrapper and entry point.
//!
//! This module is the thin integration layer between the Custom Board library
//! and the Zellij plugin system. It translates host events into library
//! events, runs the library's actions against the host API and forwards
//! render calls.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Permissions**: Request `WebAccess` for the search endpoint
//! 3. **Subscribe**: Key, Mouse, `WebRequestResult`, `PermissionRequestResult`
//! 4. **Update**: Map events, delegate to `handle_event`, execute actions
//! 5. **Render**: Call library render function
//!
//! # Keybindings
//!
//! While the search modal is open:
//! - `1`-`5`: Choose a category
//! - `Esc` / left click: Dismiss
//!
//! In normal mode:
//! - `/`: Focus the search field
//! - `1`-`5`: Select a category
//! - `h`/`Left`, `l`/`Right`: Previous / next category
//! - `g`: Home (clear the selection)
//! - `b`: Back
//! - `t`: Toggle light/dark
//! - `s`: Sign in
//! - `Enter`: Submit the current query
//! - `q`: Close plugin
//!
//! In search mode:
//! - Characters: Type into the field
//! - `Backspace`: Delete a character
//! - `Ctrl+u`: Clear the field
//! - `Enter`: Submit
//! - `Esc`: Leave the field

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use custom_board::fetcher::HttpMethod;
use custom_board::{handle_event, Action, Config, Event, InputMode};

register_plugin!(State);

/// Plugin state wrapper.
struct State {
    /// Core application state from library layer.
    app: custom_board::AppState,

    /// Whether the host granted web access.
    web_access: bool,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: custom_board::initialize(&Config::default()),
            web_access: false,
        }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        custom_board::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(api_method = %config.api_method, has_endpoint = config.api_url.is_some(), "parsed configuration");
        self.app = custom_board::initialize(&config);

        request_permission(&[PermissionType::WebAccess]);

        subscribe(&[
            EventType::Key,
            EventType::Mouse,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::Mouse(mouse) => match self.map_mouse_event(mouse) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::WebRequestResult(status, headers, body, context) => {
                Event::from_web_result(status, &headers, body, &context)
            }
            zellij_tile::prelude::Event::PermissionRequestResult(permissions) => {
                self.web_access = matches!(permissions, PermissionStatus::Granted);
                if !self.web_access {
                    tracing::warn!("web access denied - searches will fail");
                }
                return false;
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled"
                );
                for action in actions {
                    self.execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        custom_board::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::Mouse(_) => "Mouse".to_string(),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                format!("WebRequestResult({status})")
            }
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        if self.app.modal.is_visible() {
            return match key.bare_key {
                BareKey::Esc => Some(Event::DismissModal),
                BareKey::Char(c @ '1'..='5') => Some(Event::ModalSelectCategory(digit_index(c))),
                _ => None,
            };
        }

        if key.bare_key == BareKey::Char('u') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::ClearQuery);
        }

        Some(match self.app.input_mode {
            InputMode::Search => match key.bare_key {
                BareKey::Enter => Event::Submit,
                BareKey::Esc => Event::BlurSearch,
                BareKey::Backspace => Event::Backspace,
                BareKey::Char(c) => Event::Char(c),
                _ => return None,
            },
            InputMode::Normal => match key.bare_key {
                BareKey::Char('/') => Event::FocusSearch,
                BareKey::Char(c @ '1'..='5') => Event::SelectCategory(digit_index(c)),
                BareKey::Left | BareKey::Char('h') => Event::PreviousCategory,
                BareKey::Right | BareKey::Char('l') => Event::NextCategory,
                BareKey::Char('g') => Event::Logo,
                BareKey::Char('b') => Event::Back,
                BareKey::Char('t') => Event::ToggleTheme,
                BareKey::Char('s') => Event::SignIn,
                BareKey::Char('q') => Event::CloseFocus,
                BareKey::Enter => Event::Submit,
                _ => return None,
            },
        })
    }

    /// A click anywhere while the modal is open dismisses it.
    fn map_mouse_event(&self, mouse: Mouse) -> Option<Event> {
        match mouse {
            Mouse::LeftClick(..) if self.app.modal.is_visible() => Some(Event::DismissModal),
            _ => None,
        }
    }

    /// Executes an action returned from event handling.
    #[tracing::instrument(level = "debug", skip_all)]
    fn execute_action(&self, action: Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::Fetch(request) => {
                if !self.web_access {
                    tracing::warn!(request_id = request.id, "web access not granted, request may be refused");
                }
                tracing::debug!(
                    request_id = request.id,
                    method = %request.method,
                    url = %request.url,
                    "sending search request"
                );
                let context = request.context();
                web_request(
                    &request.url,
                    to_verb(request.method),
                    request.headers,
                    request.body,
                    context,
                );
            }
        }
    }
}

/// `'1'` → 0, …, `'5'` → 4.
fn digit_index(c: char) -> usize {
    c.to_digit(10).map_or(0, |d| d as usize - 1)
}

const fn to_verb(method: HttpMethod) -> HttpVerb {
    match method {
        HttpMethod::Get => HttpVerb::Get,
        HttpMethod::Post => HttpVerb::Post,
        HttpMethod::Put => HttpVerb::Put,
        HttpMethod::Delete => HttpVerb::Delete,
    }
}
