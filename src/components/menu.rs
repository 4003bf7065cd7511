//! Slide-out navigation menu.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::session::Session;

/// Menu destinations in display order.
pub const MENU_ENTRIES: [(&str, &str); 5] = [
    ("/", "Ovládanie brány"),
    ("/parking", "Prehľad parkoviska"),
    ("/temp-access", "Generovať dočasný prístup"),
    ("/history", "História"),
    ("/license-plates", "Spravovať ŠPZ"),
];

#[component]
pub fn SideMenu(open: RwSignal<bool>) -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();

    let entries = MENU_ENTRIES
        .into_iter()
        .map(|(path, label)| {
            let navigate = navigate.clone();
            view! {
                <li>
                    <button
                        class="side-menu__entry"
                        on:click=move |_| {
                            navigate(path, NavigateOptions::default());
                            open.set(false);
                        }
                    >
                        {label}
                    </button>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="side-menu__backdrop" class:side-menu__backdrop--open=move || open.get() on:click=move |_| open.set(false)></div>
        <nav class="side-menu" class:side-menu--open=move || open.get()>
            <button class="side-menu__close" aria-label="Zavrieť menu" on:click=move |_| open.set(false)>
                "×"
            </button>
            <ul class="side-menu__entries">
                {entries}
                <li>
                    <button class="side-menu__entry side-menu__entry--logout" on:click=move |_| session.log_out()>
                        "Odhlásiť sa"
                    </button>
                </li>
            </ul>
        </nav>
    }
}
