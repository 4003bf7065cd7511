//! Success/error banner with automatic dismissal.
//!
//! ERROR HANDLING
//! ==============
//! [`report_api_error`] is the single place screens send REST failures to:
//! a rejected token (401) ends the session. Everything else, 403 included,
//! becomes a banner whose text depends on the failure kind.

use std::time::Duration;

use gatewire::ApiError;
use leptos::prelude::*;

use crate::session::Session;
use crate::state::flash::{FlashKind, FlashState};

/// How long a banner stays visible.
pub const BANNER_DISMISS_AFTER: Duration = Duration::from_secs(3);

/// Show a banner and schedule its dismissal.
pub fn show_flash(state: RwSignal<FlashState>, kind: FlashKind, text: impl Into<String>) {
    let mut generation = 0;
    state.update(|flash| generation = flash.show(kind, text));
    crate::util::browser::run_after(BANNER_DISMISS_AFTER, move || {
        let _ = state.try_update(|flash| flash.dismiss(generation));
    });
}

/// Route a failed REST call to logout or an error banner.
pub fn report_api_error(session: Session, state: RwSignal<FlashState>, err: &ApiError, fallback: &str) {
    if session.expire_on_auth_failure(err) {
        return;
    }
    leptos::logging::error!("{fallback}: {err}");
    show_flash(state, FlashKind::Error, err.user_message(fallback));
}

fn flash_class(kind: FlashKind) -> &'static str {
    match kind {
        FlashKind::Success => "flash flash--success",
        FlashKind::Error => "flash flash--error",
    }
}

#[component]
pub fn FlashBanner(state: RwSignal<FlashState>) -> impl IntoView {
    move || {
        state.get().current.map(|flash| {
            view! {
                <div class=flash_class(flash.kind) role="status">
                    <span class="flash__text">{flash.text}</span>
                    <button class="flash__close" aria-label="Zavrieť" on:click=move |_| state.update(FlashState::clear)>
                        "×"
                    </button>
                </div>
            }
        })
    }
}
