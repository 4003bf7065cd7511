//! Temporary access list with type/status filters.

#[cfg(test)]
#[path = "temp_access_test.rs"]
mod temp_access_test;

use gatewire::model::{AccessKind, AccessStatus, TemporaryAccess, UsageLimit};
use leptos::prelude::*;

use crate::components::flash_banner::{FlashBanner, report_api_error, show_flash};
use crate::net::api;
use crate::session::Session;
use crate::state::flash::{FlashKind, FlashState};
use crate::util::browser::{confirm, copy_to_clipboard};
use crate::util::format::validity_or_empty;

/// Type filter; `None` shows every kind.
fn parse_kind_filter(raw: &str) -> Option<AccessKind> {
    match raw {
        "link" => Some(AccessKind::Link),
        "ecv" => Some(AccessKind::Ecv),
        _ => None,
    }
}

fn parse_status_filter(raw: &str) -> Option<AccessStatus> {
    AccessStatus::ALL.into_iter().find(|status| status.label() == raw)
}

fn matches_filters(entry: &TemporaryAccess, kind: Option<AccessKind>, status: Option<AccessStatus>) -> bool {
    kind.is_none_or(|kind| entry.access_type == kind) && status.is_none_or(|status| entry.status == status)
}

/// Shareable URL of a guest link served by this front-end.
pub fn guest_link_url(origin: &str, link: &str) -> String {
    format!("{}/guest/{link}", origin.trim_end_matches('/'))
}

fn status_class(status: AccessStatus) -> String {
    format!("status-pill status-pill--{}", status.label().to_lowercase())
}

fn validity_text(entry: &TemporaryAccess) -> String {
    format!(
        "Valid: {} – {}",
        validity_or_empty(entry.valid_from.as_ref()),
        validity_or_empty(entry.valid_until.as_ref())
    )
}

fn usage_badge_class(limit: UsageLimit) -> &'static str {
    if limit.is_enabled() { "usage-badge" } else { "usage-badge usage-badge--muted" }
}

#[component]
pub fn TempAccessPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let flash = RwSignal::new(FlashState::default());
    let entries = RwSignal::new(Vec::<TemporaryAccess>::new());
    let loading = RwSignal::new(true);
    let kind_filter = RwSignal::new(None::<AccessKind>);
    let status_filter = RwSignal::new(None::<AccessStatus>);

    let load = move || {
        let Some(token) = session.token() else {
            return;
        };
        leptos::task::spawn_local(async move {
            match api::temporary_accesses(&token).await {
                Ok(list) => {
                    let _ = entries.try_set(list);
                }
                Err(err) => report_api_error(session, flash, &err, "Failed to load temporary accesses"),
            }
            let _ = loading.try_set(false);
        });
    };
    load();

    let delete = move |link: String| {
        if !confirm("Are you sure you want to delete this temporary access?") {
            return;
        }
        let Some(token) = session.token() else {
            return;
        };
        leptos::task::spawn_local(async move {
            match api::delete_temporary_access(&token, &link).await {
                Ok(()) => {
                    let _ = entries.try_update(|list| list.retain(|entry| entry.link != link));
                    show_flash(flash, FlashKind::Success, "Temporary access deleted");
                }
                Err(err) => report_api_error(session, flash, &err, "Failed to delete temporary access"),
            }
        });
    };

    let copy_link = move |link: String| {
        let url = guest_link_url(&crate::config::location_origin(), &link);
        leptos::task::spawn_local(async move {
            if copy_to_clipboard(url).await {
                show_flash(flash, FlashKind::Success, "Link copied to clipboard");
            } else {
                show_flash(flash, FlashKind::Error, "Could not copy the link");
            }
        });
    };

    let visible = move || {
        let kind = kind_filter.get();
        let status = status_filter.get();
        entries.with(|list| {
            list.iter()
                .filter(|entry| matches_filters(entry, kind, status))
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    let status_options = AccessStatus::ALL
        .into_iter()
        .map(|status| view! { <option value=status.label()>{status.label()}</option> })
        .collect_view();

    view! {
        <FlashBanner state=flash/>
        <section class="card">
            <div class="card__header">
                <h2 class="card__title">"Temporary Access"</h2>
                <a class="btn btn--primary" href="/temp-access/create">
                    "+ New"
                </a>
            </div>
            <div class="filters">
                <select
                    class="filters__select"
                    on:change=move |ev| kind_filter.set(parse_kind_filter(&event_target_value(&ev)))
                >
                    <option value="all">"All"</option>
                    <option value="link">"Link"</option>
                    <option value="ecv">"License Plate"</option>
                </select>
                <select
                    class="filters__select"
                    on:change=move |ev| status_filter.set(parse_status_filter(&event_target_value(&ev)))
                >
                    <option value="all">"All"</option>
                    {status_options}
                </select>
            </div>
            <Show when=move || !loading.get() fallback=|| view! { <p class="muted">"Loading..."</p> }>
                <Show
                    when=move || !visible().is_empty()
                    fallback=|| view! { <p class="muted">"No temporary accesses found"</p> }
                >
                    <ul class="access-list">
                        {move || {
                            visible()
                                .into_iter()
                                .map(|entry| access_entry(entry, copy_link, delete))
                                .collect_view()
                        }}
                    </ul>
                </Show>
            </Show>
        </section>
    }
}

fn access_entry(
    entry: TemporaryAccess,
    copy_link: impl Fn(String) + Copy + 'static,
    delete: impl Fn(String) + Copy + 'static,
) -> impl IntoView {
    let subject = match entry.access_type {
        AccessKind::Ecv => {
            let plate = entry.ecv.clone().unwrap_or_default();
            view! { <span class="access-entry__plate">{plate}</span> }.into_any()
        }
        AccessKind::Link => {
            let link = entry.link.clone();
            view! {
                <button class="btn btn--ghost" on:click=move |_| copy_link(link.clone())>
                    "Copy link"
                </button>
            }
            .into_any()
        }
    };
    let badges = [("🚗", entry.open_vehicle), ("🚶", entry.open_pedestrian), ("🔒", entry.close_gate)]
        .into_iter()
        .map(|(icon, limit)| {
            view! { <span class=usage_badge_class(limit)>{icon} " " {limit.badge()}</span> }
        })
        .collect_view();
    let edit_href = format!("/temp-access/{}/edit", entry.link);
    let link = entry.link.clone();

    view! {
        <li class="access-entry">
            <div class="access-entry__head">
                <span class="access-entry__kind">{entry.access_type.label()}</span>
                {subject}
                <span class=status_class(entry.status)>{entry.status.label()}</span>
            </div>
            <div class="access-entry__validity">{validity_text(&entry)}</div>
            <div class="access-entry__badges">{badges}</div>
            <div class="access-entry__actions">
                <a class="btn btn--ghost" href=edit_href>
                    "Edit"
                </a>
                <button class="btn btn--danger" on:click=move |_| delete(link.clone())>
                    "Delete"
                </button>
            </div>
        </li>
    }
}
