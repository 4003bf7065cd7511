//! Parking lot occupancy bar.

#[cfg(test)]
#[path = "capacity_meter_test.rs"]
mod capacity_meter_test;

use gatewire::model::{CapacityLevel, occupancy_percent};
use leptos::prelude::*;

fn capacity_dot_class(level: CapacityLevel) -> String {
    format!("capacity-dot capacity-dot--{}", level.css_modifier())
}

fn capacity_fill_style(parked: u32) -> String {
    format!("width: {}%", occupancy_percent(parked))
}

/// Level dot + label.
#[component]
pub fn CapacityLevelBadge(#[prop(into)] parked: Signal<u32>) -> impl IntoView {
    let level = move || CapacityLevel::for_parked(parked.get());
    view! {
        <span class="capacity-level">
            <span class=move || capacity_dot_class(level())></span>
            <span>{move || level().label()}</span>
        </span>
    }
}

/// Horizontal bar filled to the occupancy percentage.
#[component]
pub fn CapacityBar(#[prop(into)] parked: Signal<u32>) -> impl IntoView {
    let level = move || CapacityLevel::for_parked(parked.get());
    view! {
        <div class="capacity-bar">
            <div
                class=move || format!("capacity-bar__fill capacity-bar__fill--{}", level().css_modifier())
                style=move || capacity_fill_style(parked.get())
            ></div>
        </div>
    }
}
