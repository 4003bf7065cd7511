//! Login page exchanging username + password for a bearer token.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use gatewire::model::Credentials;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::net::api;
use crate::session::{Session, login_redirect_target};

const MISSING_FIELDS: &str = "Zadajte používateľské meno aj heslo.";

fn validate_credentials(username: &str, password: &str) -> Result<Credentials, &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS);
    }
    Ok(Credentials { username: username.to_owned(), password: password.to_owned() })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();
    let query = use_query_map();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    // Signed in (now or already): continue to the requested screen.
    Effect::new(move || {
        if session.state.with(|state| state.is_authenticated()) {
            let next = query.with_untracked(|params| params.get("next"));
            let target = login_redirect_target(next.as_deref());
            navigate(&target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let credentials = match validate_credentials(&username.get_untracked(), &password.get_untracked()) {
            Ok(credentials) => credentials,
            Err(message) => {
                info.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        info.set(None);
        leptos::task::spawn_local(async move {
            match api::obtain_token(&credentials).await {
                Ok(token) => session.log_in(token),
                Err(err) => {
                    leptos::logging::warn!("login failed: {err}");
                    info.set(Some(err.user_message("Prihlásenie zlyhalo.")));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <div class="login-card__icon">"🔒"</div>
                <h1 class="login-card__title">"Sign In"</h1>
                <form class="login-form" on:submit=on_submit>
                    <label class="field">
                        <span class="field__label">"Email"</span>
                        <input
                            class="field__input"
                            type="text"
                            autocomplete="username"
                            placeholder="Enter your email"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span class="field__label">"Password"</span>
                        <input
                            class="field__input"
                            type="password"
                            autocomplete="current-password"
                            placeholder="Enter your password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary btn--block" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <Show when=move || info.get().is_some()>
                    <p class="login-card__message">{move || info.get().unwrap_or_default()}</p>
                </Show>
            </div>
        </div>
    }
}
