//! Signed-in user: bearer token plus the profile fetched for it.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use gatewire::model::{GeneralInfo, Permissions};

/// Session state tracking the token and the loading status of its profile.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub token: Option<String>,
    pub info: Option<GeneralInfo>,
    /// A profile request for `token` is in flight.
    pub loading: bool,
}

impl SessionState {
    /// State restored from a stored token.
    pub fn restored(token: Option<String>) -> Self {
        let mut state = Self::default();
        if let Some(token) = token {
            state.sign_in(token);
        }
        state
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Permission flags; all denied until the profile has loaded.
    pub fn permissions(&self) -> Permissions {
        self.info.as_ref().map(GeneralInfo::permissions).unwrap_or_default()
    }

    pub fn is_admin(&self) -> bool {
        self.permissions().admin
    }

    pub fn username(&self) -> Option<&str> {
        self.info
            .as_ref()
            .and_then(|info| info.user.as_ref())
            .map(|user| user.username.as_str())
            .filter(|name| !name.is_empty())
    }

    /// Adopt a new token; the previous profile no longer applies.
    pub fn sign_in(&mut self, token: String) {
        self.token = Some(token);
        self.info = None;
        self.loading = true;
    }

    /// Store the profile loaded for `token`. Stale responses are ignored.
    pub fn profile_loaded(&mut self, token: &str, info: GeneralInfo) -> bool {
        if self.token.as_deref() != Some(token) {
            return false;
        }
        self.info = Some(info);
        self.loading = false;
        true
    }

    /// Profile request for `token` failed without ending the session.
    pub fn profile_failed(&mut self, token: &str) {
        if self.token.as_deref() == Some(token) {
            self.loading = false;
        }
    }

    pub fn sign_out(&mut self) {
        *self = Self::default();
    }
}
