//! Gate control dashboard: live status, open buttons and a parking summary.

#[cfg(test)]
#[path = "gate_control_test.rs"]
mod gate_control_test;

use std::time::Duration;

use gatewire::TriggerAction;
use gatewire::model::{LOT_CAPACITY, ParkingStatistics, occupancy_percent};
use leptos::prelude::*;

use crate::components::capacity_meter::{CapacityBar, CapacityLevelBadge};
use crate::components::flash_banner::{FlashBanner, report_api_error, show_flash};
use crate::components::gate_status::GateStatus;
use crate::net::api;
use crate::session::Session;
use crate::state::flash::{FlashKind, FlashState};
use crate::util::browser::run_after;

const TOAST_PENDING_FOR: Duration = Duration::from_secs(1);
const TOAST_DONE_FOR: Duration = Duration::from_secs(2);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ToastPhase {
    Pending,
    Done,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct ActionToast {
    action: TriggerAction,
    phase: ToastPhase,
}

/// Pending -> done -> hidden progression of the action toast. Timers carry
/// the generation they were started for and are ignored once superseded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct ToastState {
    current: Option<ActionToast>,
    generation: u64,
}

impl ToastState {
    fn start(&mut self, action: TriggerAction) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.current = Some(ActionToast { action, phase: ToastPhase::Pending });
        self.generation
    }

    fn complete(&mut self, generation: u64) -> bool {
        match &mut self.current {
            Some(toast) if self.generation == generation && toast.phase == ToastPhase::Pending => {
                toast.phase = ToastPhase::Done;
                true
            }
            _ => false,
        }
    }

    fn hide(&mut self, generation: u64) -> bool {
        if self.generation != generation || self.current.is_none() {
            return false;
        }
        self.current = None;
        true
    }
}

fn toast_text(toast: ActionToast) -> String {
    match toast.phase {
        ToastPhase::Pending => format!("Spracúva sa {}...", toast.action.pending_label()),
        ToastPhase::Done => "Akcia dokončená".to_owned(),
    }
}

fn open_button_subtitle(action: TriggerAction) -> &'static str {
    match action {
        TriggerAction::StartPedestrian => "Pre chodcov",
        TriggerAction::StartVehicle | TriggerAction::Stop => "Pre vozidlá",
    }
}

fn open_button_class(action: TriggerAction) -> &'static str {
    match action {
        TriggerAction::StartPedestrian => "gate-button gate-button--pedestrian",
        TriggerAction::StartVehicle | TriggerAction::Stop => "gate-button gate-button--vehicle",
    }
}

#[component]
pub fn GateControlPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let gate = session.channel.view();
    let flash = RwSignal::new(FlashState::default());
    let toast = RwSignal::new(ToastState::default());
    let stats = RwSignal::new(None::<ParkingStatistics>);

    if let Some(token) = session.token() {
        leptos::task::spawn_local(async move {
            match api::parking_statistics(&token).await {
                Ok(loaded) => {
                    let _ = stats.try_set(Some(loaded));
                }
                Err(err) => report_api_error(session, flash, &err, "Nepodarilo sa načítať stav parkoviska"),
            }
        });
    }

    let trigger = move |action: TriggerAction| {
        if session.channel.send(action).is_err() {
            show_flash(flash, FlashKind::Error, "Brána nie je pripojená. Skúste to znova.");
            return;
        }
        let mut generation = 0;
        toast.update(|state| generation = state.start(action));
        run_after(TOAST_PENDING_FOR, move || {
            let _ = toast.try_update(|state| state.complete(generation));
            run_after(TOAST_DONE_FOR, move || {
                let _ = toast.try_update(|state| state.hide(generation));
            });
        });
    };

    let open_buttons = [TriggerAction::StartVehicle, TriggerAction::StartPedestrian]
        .into_iter()
        .map(|action| {
            let allowed = move || session.state.with(|state| state.permissions().allows(action));
            view! {
                <button
                    class=open_button_class(action)
                    class:gate-button--locked=move || !allowed()
                    disabled=move || !allowed()
                    on:click=move |_| trigger(action)
                >
                    <span class="gate-button__title">"Otvoriť Bránu"</span>
                    <span class="gate-button__subtitle">{open_button_subtitle(action)}</span>
                    <Show when=move || !allowed()>
                        <span class="gate-button__lock" aria-hidden="true">"🔒"</span>
                    </Show>
                </button>
            }
        })
        .collect_view();

    let parked = Signal::derive(move || stats.with(|s| s.as_ref().map_or(0, |s| s.current_parked)));
    let today = move || stats.with(|s| s.as_ref().map_or(0, ParkingStatistics::today_visits));

    view! {
        <FlashBanner state=flash/>
        <section class="card gate-card">
            <h2 class="card__title">"Stav Brány"</h2>
            <GateStatus view=gate/>
        </section>
        <section class="gate-actions">{open_buttons}</section>
        {move || {
            toast.get().current.map(|current| {
                let done = current.phase == ToastPhase::Done;
                view! {
                    <div class="action-toast" class:action-toast--done=done role="status">
                        {toast_text(current)}
                    </div>
                }
            })
        }}
        <section class="card parking-card">
            <div class="card__header">
                <h2 class="card__title">"Stav parkoviska"</h2>
                <CapacityLevelBadge parked=parked/>
            </div>
            <div class="parking-card__count">
                {move || format!("{} / {LOT_CAPACITY}", parked.get())}
            </div>
            <CapacityBar parked=parked/>
            <div class="parking-card__meta">
                <span>{move || format!("Obsadenosť {}%", occupancy_percent(parked.get()))}</span>
                <span>{move || format!("Dnes návštev: {}", today())}</span>
            </div>
            <a href="/parking" class="card__link">
                "Podrobný prehľad"
            </a>
        </section>
    }
}
