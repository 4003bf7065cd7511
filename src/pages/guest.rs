//! Gate control for guests holding a temporary access link.
//!
//! No session is involved: the grant is fetched anonymously and the status
//! channel authenticates with the link itself. The page owns its channel and
//! disposes it on unmount.

#[cfg(test)]
#[path = "guest_test.rs"]
mod guest_test;

use gatewire::model::{TemporaryAccess, UsageLimit};
use gatewire::{ChannelScope, TriggerAction};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::gate_status::GateStatus;
use crate::net::api;
use crate::net::channel::GateChannel;

/// Right side of a guest trigger button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum GuestFace {
    Locked,
    Unlimited,
    Remaining(u32),
}

fn guest_face(limit: UsageLimit) -> GuestFace {
    match limit {
        UsageLimit::Disabled => GuestFace::Locked,
        UsageLimit::Unlimited => GuestFace::Unlimited,
        UsageLimit::Remaining(n) => GuestFace::Remaining(n),
    }
}

fn face_text(face: GuestFace) -> String {
    match face {
        GuestFace::Locked => "🔒".to_owned(),
        GuestFace::Unlimited => "∞".to_owned(),
        GuestFace::Remaining(n) => n.to_string(),
    }
}

fn button_copy(action: TriggerAction) -> (&'static str, &'static str) {
    match action {
        TriggerAction::StartVehicle => ("Open Gate", "For vehicles"),
        TriggerAction::StartPedestrian => ("Open Gate", "For pedestrians"),
        TriggerAction::Stop => ("Close Gate", "All access points"),
    }
}

#[component]
pub fn GuestPage() -> impl IntoView {
    let navigate = use_navigate();
    let params = use_params_map();
    let link = params.with_untracked(|params| params.get("link")).unwrap_or_default();

    let channel = GateChannel::new();
    let grant = RwSignal::new(None::<TemporaryAccess>);
    on_cleanup(move || channel.close());

    if link.is_empty() {
        navigate("/", NavigateOptions { replace: true, ..NavigateOptions::default() });
    } else {
        channel.connect(ChannelScope::TempLink(link.clone()));
        leptos::task::spawn_local(async move {
            match api::temporary_access(None, &link).await {
                Ok(loaded) => {
                    let _ = grant.try_set(Some(loaded));
                }
                Err(err) => {
                    leptos::logging::error!("guest link rejected: {err}");
                    channel.close();
                    navigate("/", NavigateOptions { replace: true, ..NavigateOptions::default() });
                }
            }
        });
    }

    let buttons = TriggerAction::ALL
        .into_iter()
        .map(|action| {
            let limit = move || grant.with(|grant| grant.as_ref().map_or(UsageLimit::Disabled, |g| g.limit_for(action)));
            let (title, subtitle) = button_copy(action);
            view! {
                <button
                    class="guest-button"
                    class:guest-button--locked=move || !limit().is_enabled()
                    disabled=move || !limit().is_enabled()
                    on:click=move |_| {
                        if limit().is_enabled() {
                            let _ = channel.send(action);
                        }
                    }
                >
                    <span class="guest-button__text">
                        <span class="guest-button__title">{title}</span>
                        <span class="guest-button__subtitle">{subtitle}</span>
                    </span>
                    <span class="guest-button__face">{move || face_text(guest_face(limit()))}</span>
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="guest-page">
            <header class="guest-header">
                <h1>"School Gate Control"</h1>
            </header>
            <main class="guest-main">
                <section class="card gate-card">
                    <GateStatus view=channel.view()/>
                </section>
                <section class="guest-actions">{buttons}</section>
            </main>
        </div>
    }
}
