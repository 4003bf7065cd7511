//! Root application component with routing and context providers.

use gatewire::ChannelScope;
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::shell::AuthenticatedShell;
use crate::net::api;
use crate::net::channel::GateChannel;
use crate::pages::{
    gate_control::GateControlPage, guest::GuestPage, history::HistoryPage, license_plates::LicensePlatesPage,
    login::LoginPage, parking::ParkingPage, temp_access::TempAccessPage, temp_access_form::TempAccessFormPage,
};
use crate::session::Session;

/// Root application component.
///
/// Provides the session and the shared status channel, keeps both in step
/// with the current token, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let channel = GateChannel::new();
    let session = Session::restore(channel);
    provide_context(session);

    // Each new token gets a fresh channel run and profile; losing the token
    // tears the channel down.
    let token = Memo::new(move |_| session.state.with(|state| state.token.clone()));
    Effect::new(move || {
        let Some(token) = token.get() else {
            channel.close();
            return;
        };
        channel.connect(ChannelScope::Token(token.clone()));
        leptos::task::spawn_local(async move {
            match api::general_info(&token).await {
                Ok(info) => {
                    let _ = session.state.try_update(|state| state.profile_loaded(&token, info));
                }
                Err(err) => {
                    leptos::logging::error!("failed to load profile: {err}");
                    if !session.expire_on_auth_failure(&err) {
                        let _ = session.state.try_update(|state| state.profile_failed(&token));
                    }
                }
            }
        });
    });
    on_cleanup(move || channel.close());

    view! {
        <Title text="School Gate Control"/>

        <Router>
            <Routes fallback=|| view! { <Redirect path="/"/> }>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=|| view! { <AuthenticatedShell><GateControlPage/></AuthenticatedShell> }/>
                <Route path=StaticSegment("parking") view=|| view! { <AuthenticatedShell><ParkingPage/></AuthenticatedShell> }/>
                <Route path=StaticSegment("temp-access") view=|| view! { <AuthenticatedShell><TempAccessPage/></AuthenticatedShell> }/>
                <Route
                    path=(StaticSegment("temp-access"), StaticSegment("create"))
                    view=|| view! { <AuthenticatedShell><TempAccessFormPage/></AuthenticatedShell> }
                />
                <Route
                    path=(StaticSegment("temp-access"), ParamSegment("link"), StaticSegment("edit"))
                    view=|| view! { <AuthenticatedShell><TempAccessFormPage/></AuthenticatedShell> }
                />
                <Route path=StaticSegment("history") view=|| view! { <AuthenticatedShell><HistoryPage/></AuthenticatedShell> }/>
                <Route
                    path=StaticSegment("license-plates")
                    view=|| view! { <AuthenticatedShell><LicensePlatesPage/></AuthenticatedShell> }
                />
                <Route path=(StaticSegment("guest"), ParamSegment("link")) view=GuestPage/>
            </Routes>
        </Router>
    }
}
