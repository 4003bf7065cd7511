//! Route guard for screens that need a signed-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every authenticated screen applies the same redirect: without a token the
//! user lands on `/login?next=<current path>` and returns after signing in.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_location;

use crate::session::{Session, login_path_for};

/// Redirect to the login screen whenever the session has no token.
pub fn install_unauth_redirect<F>(session: Session, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let pathname = use_location().pathname;
    Effect::new(move || {
        if session.state.with(|state| state.is_authenticated()) {
            return;
        }
        let target = login_path_for(&pathname.get_untracked());
        navigate(&target, NavigateOptions { replace: true, ..NavigateOptions::default() });
    });
}
