//! Build-time server configuration.
//!
//! `GATEHOUSE_SERVER_DOMAIN` is read when the WASM bundle is compiled. When it
//! is set, REST calls go to `https://<domain>` and the status socket to
//! `wss://<domain>`. When it is absent the bundle assumes it is served from
//! the gate service itself and derives both from `window.location`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Server domain baked in at compile time, if any.
pub const SERVER_DOMAIN: Option<&str> = option_env!("GATEHOUSE_SERVER_DOMAIN");

/// REST origin for `domain`, falling back to the page origin.
pub fn api_origin(domain: Option<&str>, location_origin: &str) -> String {
    match domain.map(str::trim).filter(|domain| !domain.is_empty()) {
        Some(domain) => format!("https://{}", domain.trim_end_matches('/')),
        None => location_origin.trim_end_matches('/').to_owned(),
    }
}

/// Socket base matching an HTTP origin (`https` -> `wss`, `http` -> `ws`).
pub fn ws_base_from_origin(origin: &str) -> String {
    let origin = origin.trim_end_matches('/');
    if let Some(rest) = origin.strip_prefix("https://") {
        format!("wss://{rest}")
    } else if let Some(rest) = origin.strip_prefix("http://") {
        format!("ws://{rest}")
    } else {
        origin.to_owned()
    }
}

/// Origin the page was loaded from.
pub fn location_origin() -> String {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|window| window.location().origin().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "csr"))]
    {
        "http://localhost".to_owned()
    }
}

/// Origin all REST paths are resolved against.
pub fn rest_origin() -> String {
    api_origin(SERVER_DOMAIN, &location_origin())
}

/// Base URL of the status socket.
pub fn socket_base() -> String {
    ws_base_from_origin(&rest_origin())
}
