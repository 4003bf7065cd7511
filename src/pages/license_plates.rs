//! Licence plate register: paginated list with add, inline edit, delete and
//! the administrator approval toggle.

#[cfg(test)]
#[path = "license_plates_test.rs"]
mod license_plates_test;

use gatewire::PageCursor;
use gatewire::model::{LicensePlate, PlateDraft};
use leptos::prelude::*;

use crate::components::flash_banner::{FlashBanner, report_api_error, show_flash};
use crate::components::pager::Pager;
use crate::net::api;
use crate::session::Session;
use crate::state::flash::{FlashKind, FlashState};
use crate::state::request::LatestRequest;
use crate::util::format::timestamp_or_empty;

const MISSING_NEW_PLATE: &str = "Zadajte číslo EČV";
const MISSING_EDITED_PLATE: &str = "EČV nemôže byť prázdna";

fn plate_draft(raw: &str, missing: &'static str) -> Result<PlateDraft, &'static str> {
    let ecv = raw.trim();
    if ecv.is_empty() {
        return Err(missing);
    }
    Ok(PlateDraft { ecv: ecv.to_owned() })
}

fn allowed_label(is_allowed: bool) -> &'static str {
    if is_allowed { "Schválené" } else { "Neschválené" }
}

fn allowed_class(is_allowed: bool) -> &'static str {
    if is_allowed { "status-pill status-pill--active" } else { "status-pill status-pill--revoked" }
}

fn toggled_message(is_allowed: bool) -> &'static str {
    if is_allowed { "EČV schválená" } else { "EČV neschválená" }
}

/// Row being renamed: plate id and the text typed so far.
#[derive(Clone, Debug, PartialEq, Eq)]
struct PlateEdit {
    id: i64,
    value: String,
}

#[component]
pub fn LicensePlatesPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let flash = RwSignal::new(FlashState::default());
    let plates = RwSignal::new(Vec::<LicensePlate>::new());
    let cursor = RwSignal::new(PageCursor::default());
    let loading = RwSignal::new(true);
    let submitting = RwSignal::new(false);
    let new_plate = RwSignal::new(String::new());
    let editing = RwSignal::new(None::<PlateEdit>);
    let delete_confirm = RwSignal::new(None::<i64>);
    let latest = StoredValue::new(LatestRequest::default());

    let load = move |page: u32| {
        let Some(token) = session.token() else {
            return;
        };
        let Some(ticket) = latest.try_update_value(LatestRequest::begin) else {
            return;
        };
        loading.set(true);
        leptos::task::spawn_local(async move {
            let fetched = api::license_plates(&token, page).await;
            if latest.try_with_value(|latest| latest.is_current(ticket)) != Some(true) {
                return;
            }
            match fetched {
                Ok(data) => {
                    let _ = cursor.try_set(PageCursor::loaded(page, &data));
                    let _ = plates.try_set(data.results);
                }
                Err(err) => report_api_error(session, flash, &err, "Nepodarilo sa načítať EČV"),
            }
            let _ = loading.try_set(false);
        });
    };
    load(1);

    let on_add = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let draft = match plate_draft(&new_plate.get_untracked(), MISSING_NEW_PLATE) {
            Ok(draft) => draft,
            Err(message) => {
                show_flash(flash, FlashKind::Error, message);
                return;
            }
        };
        let Some(token) = session.token() else {
            return;
        };
        submitting.set(true);
        leptos::task::spawn_local(async move {
            match api::add_license_plate(&token, &draft).await {
                Ok(()) => {
                    new_plate.set(String::new());
                    show_flash(flash, FlashKind::Success, "EČV bola úspešne pridaná");
                    if let Some(current) = cursor.try_get_untracked() {
                        load(current.page);
                    }
                }
                Err(err) => report_api_error(session, flash, &err, "Nepodarilo sa pridať EČV"),
            }
            let _ = submitting.try_set(false);
        });
    };

    let save_edit = move || {
        let Some(edit) = editing.get_untracked() else {
            return;
        };
        let draft = match plate_draft(&edit.value, MISSING_EDITED_PLATE) {
            Ok(draft) => draft,
            Err(message) => {
                show_flash(flash, FlashKind::Error, message);
                return;
            }
        };
        let Some(token) = session.token() else {
            return;
        };
        submitting.set(true);
        leptos::task::spawn_local(async move {
            match api::rename_license_plate(&token, edit.id, &draft).await {
                Ok(()) => {
                    plates.update(|list| {
                        if let Some(plate) = list.iter_mut().find(|plate| plate.id == edit.id) {
                            plate.ecv = draft.ecv;
                        }
                    });
                    editing.set(None);
                    show_flash(flash, FlashKind::Success, "EČV bola úspešne aktualizovaná");
                }
                Err(err) => report_api_error(session, flash, &err, "Nepodarilo sa aktualizovať EČV"),
            }
            let _ = submitting.try_set(false);
        });
    };

    let delete = move |id: i64| {
        let Some(token) = session.token() else {
            return;
        };
        submitting.set(true);
        leptos::task::spawn_local(async move {
            match api::delete_license_plate(&token, id).await {
                Ok(()) => {
                    plates.update(|list| list.retain(|plate| plate.id != id));
                    delete_confirm.set(None);
                    show_flash(flash, FlashKind::Success, "EČV bola úspešne odstránená");
                }
                Err(err) => report_api_error(session, flash, &err, "Nepodarilo sa odstrániť EČV"),
            }
            let _ = submitting.try_set(false);
        });
    };

    let toggle = move |id: i64, currently_allowed: bool| {
        let Some(token) = session.token() else {
            return;
        };
        let is_allowed = !currently_allowed;
        leptos::task::spawn_local(async move {
            match api::set_plate_allowed(&token, id, is_allowed).await {
                Ok(()) => {
                    plates.update(|list| {
                        if let Some(plate) = list.iter_mut().find(|plate| plate.id == id) {
                            plate.is_allowed = is_allowed;
                        }
                    });
                    show_flash(flash, FlashKind::Success, toggled_message(is_allowed));
                }
                Err(err) => report_api_error(session, flash, &err, "Nepodarilo sa aktualizovať EČV"),
            }
        });
    };

    let is_admin = move || session.state.with(|state| state.is_admin());

    let row = move |plate: LicensePlate| {
        let id = plate.id;
        let is_allowed = plate.is_allowed;
        let ecv = plate.ecv.clone();
        let is_editing = move || editing.with(|edit| edit.as_ref().is_some_and(|edit| edit.id == id));
        let confirming = move || delete_confirm.get() == Some(id);

        let plate_cell = move || {
            if is_editing() {
                view! {
                    <input
                        class="field__input field__input--inline"
                        type="text"
                        prop:value=move || editing.with(|edit| edit.as_ref().map(|e| e.value.clone()).unwrap_or_default())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            editing.update(|edit| {
                                if let Some(edit) = edit {
                                    edit.value = value;
                                }
                            });
                        }
                    />
                }
                .into_any()
            } else {
                view! { <span class="plate">{ecv.clone()}</span> }.into_any()
            }
        };

        let status_cell = move || {
            if is_admin() {
                view! {
                    <button class=allowed_class(is_allowed) on:click=move |_| toggle(id, is_allowed)>
                        {allowed_label(is_allowed)}
                    </button>
                }
                .into_any()
            } else {
                view! { <span class=allowed_class(is_allowed)>{allowed_label(is_allowed)}</span> }.into_any()
            }
        };

        let original = plate.ecv.clone();
        let actions = move || {
            if is_editing() {
                view! {
                    <button class="btn btn--primary" disabled=move || submitting.get() on:click=move |_| save_edit()>
                        "Uložiť"
                    </button>
                    <button class="btn btn--ghost" on:click=move |_| editing.set(None)>
                        "Zrušiť"
                    </button>
                }
                .into_any()
            } else if confirming() {
                view! {
                    <button class="btn btn--danger" disabled=move || submitting.get() on:click=move |_| delete(id)>
                        "Potvrdiť"
                    </button>
                    <button class="btn btn--ghost" on:click=move |_| delete_confirm.set(None)>
                        "Zrušiť"
                    </button>
                }
                .into_any()
            } else {
                let original = original.clone();
                view! {
                    <button
                        class="btn btn--ghost"
                        on:click=move |_| editing.set(Some(PlateEdit { id, value: original.clone() }))
                    >
                        "Upraviť"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| delete_confirm.set(Some(id))>
                        "Odstrániť"
                    </button>
                }
                .into_any()
            }
        };

        view! {
            <tr>
                <td>{plate_cell}</td>
                <td>{status_cell}</td>
                <td>{timestamp_or_empty(plate.created_at.as_ref())}</td>
                <td class="table__actions">{actions}</td>
            </tr>
        }
    };

    let body = move || {
        if loading.get() {
            return view! { <tr><td class="table__notice" colspan="4">"Načítavam..."</td></tr> }.into_any();
        }
        let list = plates.get();
        if list.is_empty() {
            return view! { <tr><td class="table__notice" colspan="4">"Žiadne záznamy"</td></tr> }.into_any();
        }
        list.into_iter().map(row).collect_view().into_any()
    };

    view! {
        <FlashBanner state=flash/>
        <section class="card">
            <h1 class="card__title card__title--center">"Správa EČV"</h1>
            <p class="muted card__subtitle">"Zobraziť a spravovať vaše registrované EČV"</p>
            <form class="inline-form" on:submit=on_add>
                <h2 class="inline-form__title">"Pridať novú EČV"</h2>
                <input
                    class="field__input"
                    type="text"
                    placeholder="Zadajte číslo EČV"
                    prop:value=move || new_plate.get()
                    on:input=move |ev| new_plate.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                    "Pridať"
                </button>
            </form>
            <table class="table">
                <thead>
                    <tr>
                        <th>"EČV"</th>
                        <th>"Stav"</th>
                        <th>"Vytvorené"</th>
                        <th class="table__actions">"Akcie"</th>
                    </tr>
                </thead>
                <tbody>{body}</tbody>
            </table>
            <Pager cursor=cursor on_page=Callback::new(load)/>
        </section>
    }
}
