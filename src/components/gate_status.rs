//! Gate status pill and socket connection dot.

#[cfg(test)]
#[path = "gate_status_test.rs"]
mod gate_status_test;

use gatewire::{ChannelStatus, GateTone};
use leptos::prelude::*;

use crate::state::gate::GateView;

fn gate_dot_class(tone: GateTone) -> String {
    format!("gate-dot gate-dot--{}", tone.css_modifier())
}

fn gate_pill_class(tone: GateTone) -> String {
    format!("gate-pill gate-pill--{}", tone.css_modifier())
}

fn connection_dot_class(status: ChannelStatus) -> &'static str {
    match status {
        ChannelStatus::Open => "conn-dot conn-dot--open",
        ChannelStatus::Connecting => "conn-dot conn-dot--connecting",
        ChannelStatus::Closed | ChannelStatus::Disposed => "conn-dot conn-dot--closed",
    }
}

fn connection_title(status: ChannelStatus) -> &'static str {
    match status {
        ChannelStatus::Open => "Pripojené",
        ChannelStatus::Connecting => "Pripája sa...",
        ChannelStatus::Closed | ChannelStatus::Disposed => "Odpojené",
    }
}

/// Coloured dot followed by the localized gate state.
#[component]
pub fn GateStatus(view: RwSignal<GateView>) -> impl IntoView {
    let tone = move || view.get().gate.tone();
    view! {
        <span class="gate-status">
            <span class=move || gate_dot_class(tone())></span>
            <span class="gate-status__label">{move || view.get().gate.label()}</span>
        </span>
    }
}

/// Compact pill variant used in the header.
#[component]
pub fn GatePill(view: RwSignal<GateView>) -> impl IntoView {
    view! {
        <span class=move || gate_pill_class(view.get().gate.tone())>
            {move || view.get().gate.label()}
        </span>
    }
}

#[component]
pub fn ConnectionDot(view: RwSignal<GateView>) -> impl IntoView {
    let status = move || view.get().connection;
    view! {
        <span class=move || connection_dot_class(status()) title=move || connection_title(status())></span>
    }
}
