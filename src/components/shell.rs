//! Frame shared by every authenticated screen.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::header::Header;
use crate::session::Session;
use crate::util::auth::install_unauth_redirect;

/// Header + menu around `children`, redirecting to login without a token.
#[component]
pub fn AuthenticatedShell(children: Children) -> impl IntoView {
    let session = expect_context::<Session>();
    install_unauth_redirect(session, use_navigate());

    view! {
        <div class="app-shell">
            <Header/>
            <main class="screen">{children()}</main>
        </div>
    }
}
