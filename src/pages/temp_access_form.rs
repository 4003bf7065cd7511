//! Create and edit forms for temporary access grants.
//!
//! Both routes render [`TempAccessFormPage`]; the `link` route parameter
//! selects edit mode. Creating chooses the grant kind and plate. Editing
//! reloads the grant and only changes the validity window and limits.

#[cfg(test)]
#[path = "temp_access_form_test.rs"]
mod temp_access_form_test;

use gatewire::model::{AccessKind, TemporaryAccess, TemporaryAccessDraft, UsageLimit, to_datetime_local};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::flash_banner::{FlashBanner, report_api_error, show_flash};
use crate::components::usage_counter::UsageCounter;
use crate::net::api;
use crate::pages::temp_access::guest_link_url;
use crate::session::Session;
use crate::state::flash::{FlashKind, FlashState};
use crate::util::browser::copy_to_clipboard;

#[derive(Clone, Debug, PartialEq, Eq)]
enum FormMode {
    Create,
    Edit { link: String },
}

impl FormMode {
    fn from_param(link: Option<String>) -> Self {
        match link.filter(|link| !link.is_empty()) {
            Some(link) => Self::Edit { link },
            None => Self::Create,
        }
    }

    fn title(&self) -> &'static str {
        match self {
            Self::Create => "Create Temporary Access",
            Self::Edit { .. } => "Edit Temporary Access",
        }
    }
}

/// Snapshot of the form fields at submit time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct FormFields {
    kind: AccessKind,
    plate: String,
    valid_from: String,
    valid_until: String,
    open_vehicle: UsageLimit,
    open_pedestrian: UsageLimit,
    close_gate: UsageLimit,
}

impl FormFields {
    fn from_grant(grant: &TemporaryAccess) -> Self {
        Self {
            kind: grant.access_type,
            plate: grant.ecv.clone().unwrap_or_default(),
            valid_from: grant.valid_from.as_ref().map(to_datetime_local).unwrap_or_default(),
            valid_until: grant.valid_until.as_ref().map(to_datetime_local).unwrap_or_default(),
            open_vehicle: grant.open_vehicle,
            open_pedestrian: grant.open_pedestrian,
            close_gate: grant.close_gate,
        }
    }

    /// Request body. Kind and plate are fixed once a grant exists.
    fn draft(&self, mode: &FormMode) -> TemporaryAccessDraft {
        let (access_type, ecv) = match mode {
            FormMode::Create => {
                let ecv = (self.kind == AccessKind::Ecv).then(|| self.plate.trim().to_owned());
                (Some(self.kind), ecv)
            }
            FormMode::Edit { .. } => (None, None),
        };
        TemporaryAccessDraft {
            access_type,
            ecv,
            valid_from: self.valid_from.clone(),
            valid_until: self.valid_until.clone(),
            open_vehicle: self.open_vehicle,
            open_pedestrian: self.open_pedestrian,
            close_gate: self.close_gate,
        }
    }
}

fn tab_label(kind: AccessKind) -> &'static str {
    match kind {
        AccessKind::Ecv => "License Plate",
        AccessKind::Link => "Temporary Link",
    }
}

#[component]
pub fn TempAccessFormPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();
    let params = use_params_map();
    let mode = FormMode::from_param(params.with_untracked(|params| params.get("link")));

    let flash = RwSignal::new(FlashState::default());
    let busy = RwSignal::new(false);
    let kind = RwSignal::new(AccessKind::Ecv);
    let plate = RwSignal::new(String::new());
    let valid_from = RwSignal::new(String::new());
    let valid_until = RwSignal::new(String::new());
    let open_vehicle = RwSignal::new(UsageLimit::Disabled);
    let open_pedestrian = RwSignal::new(UsageLimit::Disabled);
    let close_gate = RwSignal::new(UsageLimit::Disabled);

    let apply = move |fields: FormFields| {
        kind.set(fields.kind);
        plate.set(fields.plate);
        valid_from.set(fields.valid_from);
        valid_until.set(fields.valid_until);
        open_vehicle.set(fields.open_vehicle);
        open_pedestrian.set(fields.open_pedestrian);
        close_gate.set(fields.close_gate);
    };

    if let (FormMode::Edit { link }, Some(token)) = (&mode, session.token()) {
        let link = link.clone();
        leptos::task::spawn_local(async move {
            match api::temporary_access(Some(&token), &link).await {
                Ok(grant) => {
                    if !kind.is_disposed() {
                        apply(FormFields::from_grant(&grant));
                    }
                }
                Err(err) => report_api_error(session, flash, &err, "Failed to load temporary access"),
            }
        });
    }

    let permissions = move || session.state.with(|state| state.permissions());
    let is_admin = Signal::derive(move || permissions().admin);

    let mode_for_submit = mode.clone();
    let on_submit = move |_| {
        if busy.get_untracked() {
            return;
        }
        let fields = FormFields {
            kind: kind.get_untracked(),
            plate: plate.get_untracked(),
            valid_from: valid_from.get_untracked(),
            valid_until: valid_until.get_untracked(),
            open_vehicle: open_vehicle.get_untracked(),
            open_pedestrian: open_pedestrian.get_untracked(),
            close_gate: close_gate.get_untracked(),
        };
        let draft = fields.draft(&mode_for_submit);
        if let Err(err) = draft.validate() {
            show_flash(flash, FlashKind::Error, err.to_string());
            return;
        }
        let Some(token) = session.token() else {
            return;
        };
        busy.set(true);
        let mode = mode_for_submit.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = match &mode {
                FormMode::Create => api::create_temporary_access(&token, &draft).await,
                FormMode::Edit { link } => api::update_temporary_access(&token, link, &draft).await,
            };
            match result {
                Ok(()) => navigate("/temp-access", NavigateOptions::default()),
                Err(err) => {
                    report_api_error(session, flash, &err, "Failed to save temporary access");
                    let _ = busy.try_set(false);
                }
            }
        });
    };

    let tabs = matches!(mode, FormMode::Create).then(|| {
        [AccessKind::Ecv, AccessKind::Link]
            .into_iter()
            .map(|tab| {
                view! {
                    <button
                        type="button"
                        class="tabs__tab"
                        class:tabs__tab--active=move || kind.get() == tab
                        on:click=move |_| kind.set(tab)
                    >
                        {tab_label(tab)}
                    </button>
                }
            })
            .collect_view()
    });

    let subject = match mode.clone() {
        FormMode::Create => view! {
            <Show when=move || kind.get() == AccessKind::Ecv>
                <label class="field">
                    <span class="field__label">"Vehicle License Plate Number"</span>
                    <input
                        class="field__input"
                        type="text"
                        placeholder="Enter license plate number"
                        prop:value=move || plate.get()
                        on:input=move |ev| plate.set(event_target_value(&ev))
                    />
                    <span class="field__helper">
                        "Enter the vehicle's license plate number for temporary access authorization"
                    </span>
                </label>
            </Show>
        }
        .into_any(),
        FormMode::Edit { link } => {
            let url = guest_link_url(&crate::config::location_origin(), &link);
            let copy_url = url.clone();
            view! {
                <Show
                    when=move || kind.get() == AccessKind::Ecv
                    fallback=move || {
                        let url = url.clone();
                        let copy_url = copy_url.clone();
                        view! {
                            <div class="field">
                                <span class="field__label">"Access link URL"</span>
                                <div class="field__row">
                                    <span class="field__value">{url}</span>
                                    <button
                                        type="button"
                                        class="btn btn--ghost"
                                        on:click=move |_| {
                                            let url = copy_url.clone();
                                            leptos::task::spawn_local(async move {
                                                if copy_to_clipboard(url).await {
                                                    show_flash(flash, FlashKind::Success, "Link copied to clipboard");
                                                }
                                            });
                                        }
                                    >
                                        "Copy"
                                    </button>
                                </div>
                            </div>
                        }
                    }
                >
                    <div class="field">
                        <span class="field__label">"Vehicle License Plate Number"</span>
                        <span class="field__value">{move || plate.get()}</span>
                    </div>
                </Show>
            }
            .into_any()
        }
    };

    view! {
        <FlashBanner state=flash/>
        <section class="card form-card">
            <a class="form-card__close" href="/temp-access" aria-label="Back">
                "×"
            </a>
            <h1 class="form-card__title">{mode.title()}</h1>
            <div class="tabs">{tabs}</div>
            {subject}
            <div class="field-grid">
                <label class="field">
                    <span class="field__label">"Start Date/Time"</span>
                    <input
                        class="field__input"
                        type="datetime-local"
                        prop:value=move || valid_from.get()
                        on:input=move |ev| valid_from.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span class="field__label">"End Date/Time"</span>
                    <input
                        class="field__input"
                        type="datetime-local"
                        prop:value=move || valid_until.get()
                        on:input=move |ev| valid_until.set(event_target_value(&ev))
                    />
                </label>
            </div>
            <div class="counter-grid">
                <UsageCounter
                    label="Vehicle Access"
                    helper="Number of vehicles allowed"
                    value=open_vehicle
                    can_modify=Signal::derive(move || permissions().open_vehicle)
                    is_admin=is_admin
                />
                <UsageCounter
                    label="Pedestrian Access"
                    helper="Number of people allowed"
                    value=open_pedestrian
                    can_modify=Signal::derive(move || permissions().open_pedestrian)
                    is_admin=is_admin
                />
                <UsageCounter
                    label="Close Gate"
                    helper="Auto-close after entries"
                    value=close_gate
                    can_modify=Signal::derive(move || permissions().close_gate)
                    is_admin=is_admin
                />
            </div>
            <p class="form-card__hint">
                "Set the number of entries allowed for each access type. Gates will automatically close after the specified number of entries."
            </p>
            <button class="btn btn--primary btn--block" disabled=move || busy.get() on:click=on_submit>
                {mode.title()}
            </button>
        </section>
    }
}
