//! Parking overview: occupancy cards, weekly visits chart and the list of
//! vehicles currently inside.

#[cfg(test)]
#[path = "parking_test.rs"]
mod parking_test;

use gatewire::ApiError;
use gatewire::model::{LOT_CAPACITY, ParkedVehicle, ParkingStatistics, lot_filling_warning, occupancy_percent};
use leptos::prelude::*;

use crate::components::capacity_meter::{CapacityBar, CapacityLevelBadge};
use crate::components::flash_banner::{FlashBanner, report_api_error};
use crate::net::api;
use crate::session::Session;
use crate::state::flash::FlashState;
use crate::util::browser::now;
use crate::util::format::{day_label, format_parked_duration};

/// CSS height of one weekly chart bar. Empty days get a hairline, others at
/// least a tenth of the chart so small counts stay visible.
fn bar_height(count: u32, max: u32) -> String {
    if count == 0 || max == 0 {
        return "2px".to_owned();
    }
    let percent = u64::from(count) * 100 / u64::from(max);
    format!("{}%", percent.max(10))
}

fn filling_warning_text(parked: usize) -> String {
    let parked = u32::try_from(parked).unwrap_or(u32::MAX);
    format!("Parkovisko sa zapĺňa. Aktuálne obsadené na {}%.", occupancy_percent(parked))
}

/// Sections fetched for the overview; `None` where the fetch failed or never ran.
#[derive(Debug, Default)]
struct Overview {
    stats: Option<ParkingStatistics>,
    vehicles: Option<Vec<ParkedVehicle>>,
}

/// Fetch statistics, then parked vehicles. `on_error` returns `true` when
/// the session ended, which skips the remaining fetch.
async fn load_overview<S, V>(
    fetch_stats: impl FnOnce() -> S,
    fetch_vehicles: impl FnOnce() -> V,
    mut on_error: impl FnMut(&ApiError, &'static str) -> bool,
) -> Overview
where
    S: Future<Output = Result<ParkingStatistics, ApiError>>,
    V: Future<Output = Result<Vec<ParkedVehicle>, ApiError>>,
{
    let mut overview = Overview::default();
    match fetch_stats().await {
        Ok(loaded) => overview.stats = Some(loaded),
        Err(err) => {
            if on_error(&err, "Nepodarilo sa načítať štatistiky parkoviska") {
                return overview;
            }
        }
    }
    match fetch_vehicles().await {
        Ok(loaded) => overview.vehicles = Some(loaded),
        Err(err) => {
            let _ = on_error(&err, "Nepodarilo sa načítať zaparkované vozidlá");
        }
    }
    overview
}

#[component]
pub fn ParkingPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let flash = RwSignal::new(FlashState::default());
    let stats = RwSignal::new(ParkingStatistics::default());
    let vehicles = RwSignal::new(Vec::<ParkedVehicle>::new());
    let loading = RwSignal::new(true);

    if let Some(token) = session.token() {
        leptos::task::spawn_local(async move {
            let overview = load_overview(
                || api::parking_statistics(&token),
                || api::parked_vehicles(&token),
                |err, fallback| {
                    if session.expire_on_auth_failure(err) {
                        return true;
                    }
                    report_api_error(session, flash, err, fallback);
                    false
                },
            )
            .await;
            if let Some(loaded) = overview.stats {
                let _ = stats.try_set(loaded);
            }
            if let Some(loaded) = overview.vehicles {
                let _ = vehicles.try_set(loaded);
            }
            let _ = loading.try_set(false);
        });
    }

    let parked = Signal::derive(move || stats.with(|s| s.current_parked));

    let chart = move || {
        stats.with(|s| {
            let max = s.max_daily();
            s.daily_stats
                .iter()
                .map(|(day, &count)| {
                    view! {
                        <div class="week-chart__day">
                            <div class="week-chart__track">
                                <div class="week-chart__bar" style:height=bar_height(count, max)></div>
                            </div>
                            <div class="week-chart__label">{day_label(day)}</div>
                            <div class="week-chart__count">{count}</div>
                        </div>
                    }
                })
                .collect_view()
        })
    };

    let parked_list = move || {
        let list = vehicles.get();
        if list.is_empty() {
            return view! { <p class="muted">"Aktuálne nie sú zaparkované žiadne vozidlá"</p> }.into_any();
        }
        let at = now();
        list.into_iter()
            .map(|vehicle| {
                view! {
                    <div class="vehicle-tile">
                        <span class="vehicle-tile__plate">{vehicle.ecv}</span>
                        <span class="vehicle-tile__duration">"⏱ " {format_parked_duration(vehicle.entered_at, at)}</span>
                    </div>
                }
            })
            .collect_view()
            .into_any()
    };

    let warning = move || {
        let count = vehicles.with(Vec::len);
        lot_filling_warning(count).then(|| {
            view! { <div class="flash flash--warning">"⚠ " {filling_warning_text(count)}</div> }
        })
    };

    view! {
        <FlashBanner state=flash/>
        <section class="card">
            <h1 class="card__title card__title--center">"Prehľad parkoviska"</h1>
            <p class="muted card__subtitle">"Aktuálny stav a štatistiky využitia parkoviska"</p>
            <Show when=move || !loading.get() fallback=|| view! { <div class="spinner"></div> }>
                <div class="stat-grid">
                    <div class="stat-card">
                        <h3>"Aktuálne vozidlá"</h3>
                        <div class="stat-card__value">{move || parked.get()}</div>
                        <div class="muted">{format!("z približnej kapacity {LOT_CAPACITY} vozidiel")}</div>
                    </div>
                    <div class="stat-card">
                        <h3>"Stav"</h3>
                        <CapacityLevelBadge parked=parked/>
                        <CapacityBar parked=parked/>
                        <div class="muted">{move || format!("obsadenosť {}%", occupancy_percent(parked.get()))}</div>
                    </div>
                    <div class="stat-card">
                        <h3>"Dnes navštívené"</h3>
                        <div class="stat-card__value">{move || stats.with(ParkingStatistics::today_visits)}</div>
                        <div class="muted">"vozidiel celkovo"</div>
                    </div>
                </div>
                <div class="week-chart">
                    <h3>"Týždenná štatistika"</h3>
                    <div class="week-chart__days">{chart}</div>
                </div>
                <h3>"Zaparkované vozidlá"</h3>
                <div class="vehicle-grid">{parked_list}</div>
                {warning}
            </Show>
        </section>
    }
}
