//! Session holder: bearer token persistence, login and logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token lives in the `auth_token` cookie for seven days and in
//! [`SessionState`] while the app runs. The root component provides a
//! [`Session`] handle; screens use it to read the token, sign in, and end
//! the session when the server rejects the token.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use gatewire::ApiError;
use leptos::prelude::*;

use crate::net::channel::GateChannel;
use crate::state::session::SessionState;

pub const AUTH_COOKIE: &str = "auth_token";

/// Cookie lifetime: seven days.
pub const AUTH_COOKIE_MAX_AGE_SECS: u64 = 7 * 24 * 60 * 60;

/// `document.cookie` assignment storing `token`.
pub fn auth_cookie(token: &str) -> String {
    format!("{AUTH_COOKIE}={token}; max-age={AUTH_COOKIE_MAX_AGE_SECS}; path=/; SameSite=Strict")
}

/// `document.cookie` assignment deleting the token cookie.
pub fn expired_auth_cookie() -> String {
    format!("{AUTH_COOKIE}=; max-age=0; path=/; SameSite=Strict")
}

/// Value of cookie `name` in a raw `document.cookie` string.
pub fn read_cookie(raw: &str, name: &str) -> Option<String> {
    raw.split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

/// Where to go after a successful login.
///
/// Only same-site absolute paths are honoured; anything else, including
/// protocol-relative `//host` targets, falls back to `/`.
pub fn login_redirect_target(next: Option<&str>) -> String {
    match next.map(str::trim) {
        Some(path) if path.starts_with('/') && !path.starts_with("//") && !path.contains('\\') => {
            path.to_owned()
        }
        _ => "/".to_owned(),
    }
}

/// Login URL that returns to `path` afterwards.
pub fn login_path_for(path: &str) -> String {
    if path.is_empty() || path == "/" || path.starts_with("/login") {
        "/login".to_owned()
    } else {
        format!("/login?next={path}")
    }
}

/// Token stored in the cookie jar, if any.
pub fn stored_token() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let raw = html_document()?.cookie().ok()?;
        read_cookie(&raw, AUTH_COOKIE)
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

fn write_cookie(assignment: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(document) = html_document() {
            if document.set_cookie(assignment).is_err() {
                leptos::logging::warn!("failed to write session cookie");
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = assignment;
    }
}

#[cfg(feature = "csr")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    use wasm_bindgen::JsCast;

    web_sys::window()?.document()?.dyn_into::<web_sys::HtmlDocument>().ok()
}

/// Copyable session handle provided through context.
#[derive(Clone, Copy)]
pub struct Session {
    pub state: RwSignal<SessionState>,
    pub channel: GateChannel,
}

impl Session {
    /// Session restored from the cookie jar.
    pub fn restore(channel: GateChannel) -> Self {
        Self { state: RwSignal::new(SessionState::restored(stored_token())), channel }
    }

    /// Current token without subscribing to changes.
    pub fn token(self) -> Option<String> {
        self.state.with_untracked(|state| state.token.clone())
    }

    /// Persist `token` and make it the active session.
    pub fn log_in(self, token: String) {
        write_cookie(&auth_cookie(&token));
        self.state.update(|state| state.sign_in(token));
    }

    /// Tear down the channel, forget the token and return to `/login`.
    pub fn log_out(self) {
        self.channel.close();
        let _ = self.state.try_update(SessionState::sign_out);
        write_cookie(&expired_auth_cookie());
        crate::util::browser::redirect("/login");
    }

    /// End the session when `err` says the token was rejected.
    ///
    /// Returns `true` when the caller should stop handling the failure.
    pub fn expire_on_auth_failure(self, err: &ApiError) -> bool {
        if !err.is_auth() {
            return false;
        }
        leptos::logging::warn!("session rejected by server: {err}");
        self.log_out();
        true
    }
}
