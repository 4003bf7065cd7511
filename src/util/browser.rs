//! Thin wrappers over `window` APIs. Native builds no-op.

/// Full page navigation to `href`.
pub fn redirect(href: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(href);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = href;
    }
}

/// Blocking `confirm()` dialog. `false` when no window is available.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
        false
    }
}

/// Copy `text` to the clipboard. Resolves to whether the browser accepted
/// the write.
pub async fn copy_to_clipboard(text: String) -> bool {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        let clipboard = window.navigator().clipboard();
        match wasm_bindgen_futures::JsFuture::from(clipboard.write_text(&text)).await {
            Ok(_) => true,
            Err(err) => {
                leptos::logging::warn!("clipboard write rejected: {err:?}");
                false
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = text;
        false
    }
}

/// Wall clock of the browser.
pub fn now() -> chrono::DateTime<chrono::Utc> {
    #[cfg(feature = "csr")]
    {
        #[allow(clippy::cast_possible_truncation)]
        let millis = js_sys::Date::now() as i64;
        chrono::DateTime::from_timestamp_millis(millis).unwrap_or_default()
    }
    #[cfg(not(feature = "csr"))]
    {
        chrono::Utc::now()
    }
}

/// Run `task` once after `delay` on the UI thread.
pub fn run_after(delay: std::time::Duration, task: impl FnOnce() + 'static) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(delay).await;
        task();
    });
    #[cfg(not(feature = "csr"))]
    let _ = (delay, task);
}
