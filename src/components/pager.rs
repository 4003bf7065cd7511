//! Previous/next pager for paginated tables.

#[cfg(test)]
#[path = "pager_test.rs"]
mod pager_test;

use gatewire::PageCursor;
use leptos::prelude::*;

/// "Zobrazujem a - b z c záznamov", or the empty-table notice.
pub fn window_label(cursor: &PageCursor) -> String {
    match cursor.window() {
        Some((first, last)) => format!("Zobrazujem {first} - {last} z {} záznamov", cursor.count),
        None => "Žiadne záznamy".to_owned(),
    }
}

/// Pager bound to a cursor; `on_page` receives the page number taken from
/// the `next`/`previous` link.
#[component]
pub fn Pager(cursor: RwSignal<PageCursor>, on_page: Callback<u32>) -> impl IntoView {
    let previous = move || cursor.with(PageCursor::previous_page);
    let next = move || cursor.with(PageCursor::next_page);
    view! {
        <div class="pager">
            <span class="pager__summary">{move || cursor.with(window_label)}</span>
            <div class="pager__controls">
                <button
                    class="pager__button"
                    disabled=move || previous().is_none()
                    on:click=move |_| {
                        if let Some(page) = previous() {
                            on_page.run(page);
                        }
                    }
                >
                    "‹"
                </button>
                <span class="pager__page">"Strana " {move || cursor.with(|c| c.page)}</span>
                <button
                    class="pager__button"
                    disabled=move || next().is_none()
                    on:click=move |_| {
                        if let Some(page) = next() {
                            on_page.run(page);
                        }
                    }
                >
                    "›"
                </button>
            </div>
        </div>
    }
}
