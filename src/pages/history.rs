//! Paginated trigger and gate-state history.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use gatewire::model::{StateRecord, TriggerRecord};
use gatewire::{PageCursor, TriggerAction};
use leptos::prelude::*;

use crate::components::flash_banner::{FlashBanner, report_api_error};
use crate::components::pager::Pager;
use crate::net::api;
use crate::session::Session;
use crate::state::flash::FlashState;
use crate::state::request::LatestRequest;
use crate::util::format::timestamp_or_empty;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum HistoryTab {
    Triggers,
    States,
}

impl HistoryTab {
    fn label(self) -> &'static str {
        match self {
            Self::Triggers => "História spúšťačov",
            Self::States => "História stavov",
        }
    }

    /// State history is visible to administrators only.
    fn available(self, is_admin: bool) -> bool {
        self == Self::Triggers || is_admin
    }
}

#[derive(Clone, Debug, PartialEq)]
enum HistoryRows {
    Triggers(Vec<TriggerRecord>),
    States(Vec<StateRecord>),
}

impl HistoryRows {
    fn is_empty(&self) -> bool {
        match self {
            Self::Triggers(rows) => rows.is_empty(),
            Self::States(rows) => rows.is_empty(),
        }
    }
}

fn trigger_class(record: &TriggerRecord) -> &'static str {
    match record.action() {
        Some(TriggerAction::StartVehicle) => "history__type history__type--vehicle",
        Some(TriggerAction::StartPedestrian) => "history__type history__type--pedestrian",
        Some(TriggerAction::Stop) | None => "history__type",
    }
}

fn state_class(record: &StateRecord) -> String {
    format!("history__type history__type--{}", record.gate_state.tone().css_modifier())
}

#[component]
pub fn HistoryPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let flash = RwSignal::new(FlashState::default());
    let tab = RwSignal::new(HistoryTab::Triggers);
    let rows = RwSignal::new(None::<HistoryRows>);
    let cursor = RwSignal::new(PageCursor::default());
    let loading = RwSignal::new(false);
    let latest = StoredValue::new(LatestRequest::default());

    let load = move |wanted: HistoryTab, page: u32| {
        let Some(token) = session.token() else {
            return;
        };
        let Some(ticket) = latest.try_update_value(LatestRequest::begin) else {
            return;
        };
        loading.set(true);
        leptos::task::spawn_local(async move {
            let fetched = match wanted {
                HistoryTab::Triggers => api::trigger_history(&token, page)
                    .await
                    .map(|data| (PageCursor::loaded(page, &data), HistoryRows::Triggers(data.results))),
                HistoryTab::States => api::state_history(&token, page)
                    .await
                    .map(|data| (PageCursor::loaded(page, &data), HistoryRows::States(data.results))),
            };
            // A newer page or tab request owns the table now.
            if latest.try_with_value(|latest| latest.is_current(ticket)) != Some(true) {
                return;
            }
            match fetched {
                Ok((next_cursor, next_rows)) => {
                    cursor.set(next_cursor);
                    rows.set(Some(next_rows));
                }
                Err(err) => report_api_error(session, flash, &err, "Nepodarilo sa načítať históriu"),
            }
            loading.set(false);
        });
    };
    load(HistoryTab::Triggers, 1);

    let is_admin = move || session.state.with(|state| state.is_admin());
    let select_tab = move |next: HistoryTab| {
        if tab.get_untracked() == next || !next.available(is_admin()) {
            return;
        }
        tab.set(next);
        rows.set(None);
        cursor.set(PageCursor::default());
        load(next, 1);
    };

    let tabs = [HistoryTab::Triggers, HistoryTab::States]
        .into_iter()
        .map(|each| {
            view! {
                <button
                    class="tabs__tab"
                    class:tabs__tab--active=move || tab.get() == each
                    disabled=move || !each.available(is_admin())
                    on:click=move |_| select_tab(each)
                >
                    {each.label()}
                    <Show when=move || !each.available(is_admin())>
                        <span class="tabs__note">"(Len pre administrátorov)"</span>
                    </Show>
                </button>
            }
        })
        .collect_view();

    let header = move || match tab.get() {
        HistoryTab::Triggers => view! {
            <tr>
                <th>"Dátum a čas"</th>
                <th>"Typ otvorenia"</th>
                <th>"Používateľ"</th>
            </tr>
        }
        .into_any(),
        HistoryTab::States => view! {
            <tr>
                <th>"Dátum a čas"</th>
                <th>"Stav"</th>
            </tr>
        }
        .into_any(),
    };

    let body = move || {
        if loading.get() {
            return view! { <tr><td class="table__notice" colspan="3">"Načítavam..."</td></tr> }.into_any();
        }
        let empty = || view! { <tr><td class="table__notice" colspan="3">"Žiadne dostupné údaje"</td></tr> }.into_any();
        match rows.get() {
            None => empty(),
            Some(page) if page.is_empty() => empty(),
            Some(HistoryRows::Triggers(list)) => list
                .into_iter()
                .map(|record| {
                    view! {
                        <tr>
                            <td>{timestamp_or_empty(record.timestamp.as_ref())}</td>
                            <td><span class=trigger_class(&record)>{record.trigger_type.clone()}</span></td>
                            <td>{record.actor().to_owned()}</td>
                        </tr>
                    }
                })
                .collect_view()
                .into_any(),
            Some(HistoryRows::States(list)) => list
                .into_iter()
                .map(|record| {
                    view! {
                        <tr>
                            <td>{timestamp_or_empty(record.timestamp.as_ref())}</td>
                            <td><span class=state_class(&record)>{record.gate_state.label()}</span></td>
                        </tr>
                    }
                })
                .collect_view()
                .into_any(),
        }
    };

    let on_page = Callback::new(move |page: u32| load(tab.get_untracked(), page));

    view! {
        <FlashBanner state=flash/>
        <section class="card">
            <div class="tabs">{tabs}</div>
            <table class="table">
                <thead>{header}</thead>
                <tbody>{body}</tbody>
            </table>
            <Pager cursor=cursor on_page=on_page/>
        </section>
    }
}
