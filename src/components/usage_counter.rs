//! Plus/minus control for one usage limit of a temporary access grant.
//!
//! DESIGN
//! ======
//! Stepping rules live on `UsageLimit`; this component only decides what the
//! face shows and which buttons are live. A control the user holds no
//! permission for is locked and shows a ban mark.

#[cfg(test)]
#[path = "usage_counter_test.rs"]
mod usage_counter_test;

use gatewire::model::UsageLimit;
use leptos::prelude::*;

/// What the middle of the control shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterFace {
    Locked,
    Unlimited,
    Count(u32),
}

pub fn counter_face(value: UsageLimit, can_modify: bool) -> CounterFace {
    if !can_modify {
        return CounterFace::Locked;
    }
    match value {
        UsageLimit::Unlimited => CounterFace::Unlimited,
        UsageLimit::Disabled => CounterFace::Count(0),
        UsageLimit::Remaining(n) => CounterFace::Count(n),
    }
}

fn face_text(face: CounterFace) -> String {
    match face {
        CounterFace::Locked => "⊘".to_owned(),
        CounterFace::Unlimited => "∞".to_owned(),
        CounterFace::Count(n) => n.to_string(),
    }
}

/// Minus button label: administrators at zero step into unlimited.
fn decrement_text(value: UsageLimit, can_modify: bool, is_admin: bool) -> &'static str {
    if can_modify && is_admin && value == UsageLimit::Disabled { "∞" } else { "−" }
}

#[component]
pub fn UsageCounter(
    label: &'static str,
    helper: &'static str,
    value: RwSignal<UsageLimit>,
    #[prop(into)] can_modify: Signal<bool>,
    #[prop(into)] is_admin: Signal<bool>,
) -> impl IntoView {
    let decrement_disabled = move || !can_modify.get() || !value.get().can_decrement(is_admin.get());
    view! {
        <div class="usage-counter" class:usage-counter--locked=move || !can_modify.get()>
            <button
                type="button"
                class="usage-counter__step"
                disabled=move || !can_modify.get()
                on:click=move |_| {
                    if can_modify.get_untracked() {
                        value.update(|limit| *limit = limit.increment());
                    }
                }
            >
                "+"
            </button>
            <div class="usage-counter__face">{move || face_text(counter_face(value.get(), can_modify.get()))}</div>
            <button
                type="button"
                class="usage-counter__step"
                disabled=decrement_disabled
                on:click=move |_| {
                    let admin = is_admin.get_untracked();
                    if can_modify.get_untracked() && value.get_untracked().can_decrement(admin) {
                        value.update(|limit| *limit = limit.decrement(admin));
                    }
                }
            >
                {move || decrement_text(value.get(), can_modify.get(), is_admin.get())}
            </button>
            <div class="usage-counter__label">{label}</div>
            <div class="usage-counter__helper">{helper}</div>
        </div>
    }
}
