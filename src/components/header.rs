//! Top bar of authenticated screens: menu toggle, gate status and quick
//! trigger buttons.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use gatewire::TriggerAction;
use leptos::prelude::*;

use crate::components::gate_status::{ConnectionDot, GatePill};
use crate::components::menu::SideMenu;
use crate::session::Session;

fn quick_label(action: TriggerAction) -> &'static str {
    match action {
        TriggerAction::StartVehicle => "Vehicles",
        TriggerAction::StartPedestrian => "Pedestrians",
        TriggerAction::Stop => "Close",
    }
}

fn quick_aria_label(action: TriggerAction) -> &'static str {
    match action {
        TriggerAction::StartVehicle => "Open for vehicles",
        TriggerAction::StartPedestrian => "Open for pedestrians",
        TriggerAction::Stop => "Close gate",
    }
}

fn quick_class(action: TriggerAction) -> &'static str {
    match action {
        TriggerAction::Stop => "quick-trigger quick-trigger--close",
        TriggerAction::StartVehicle | TriggerAction::StartPedestrian => "quick-trigger",
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let session = expect_context::<Session>();
    let gate = session.channel.view();
    let menu_open = RwSignal::new(false);

    let buttons = TriggerAction::ALL
        .into_iter()
        .map(|action| {
            let allowed = move || session.state.with(|state| state.permissions().allows(action));
            view! {
                <button
                    class=quick_class(action)
                    aria-label=quick_aria_label(action)
                    disabled=move || !allowed()
                    on:click=move |_| {
                        let _ = session.channel.send(action);
                    }
                >
                    <span class="quick-trigger__text">{quick_label(action)}</span>
                </button>
            }
        })
        .collect_view();

    view! {
        <header class="app-header">
            <div class="app-header__left">
                <button
                    class="app-header__menu"
                    aria-label="Toggle menu"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    "☰"
                </button>
                <span class="app-header__status-label">"Status:"</span>
                <GatePill view=gate/>
                <ConnectionDot view=gate/>
            </div>
            <div class="app-header__actions">{buttons}</div>
        </header>
        <SideMenu open=menu_open/>
    }
}
