//! REST contract: endpoint paths, pagination, and the error taxonomy.
//!
//! ERROR HANDLING
//! ==============
//! Transport clients (gloo-net in the browser, reqwest in the CLI) hand the
//! raw status and body of every non-2xx response to
//! [`ApiError::from_response`] so both front-ends classify failures the
//! same way.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const AUTH_JWT_CREATE: &str = "/api/auth/jwt/create/";
pub const GENERAL_INFO: &str = "/api/general-info/";
pub const TEMPORARY_ACCESS: &str = "/api/temporary-access/";
pub const LICENSE_PLATES: &str = "/api/license-plates/";
pub const PARKING_STATISTICS: &str = "/api/parking/statistics/";
pub const PARKING: &str = "/api/parking/";

/// Rows per page on the paginated endpoints.
pub const PAGE_SIZE: u32 = 10;

#[must_use]
pub fn temporary_access_item(link: &str) -> String {
    format!("{TEMPORARY_ACCESS}{link}/")
}

#[must_use]
pub fn license_plate_item(id: i64) -> String {
    format!("{LICENSE_PLATES}{id}/")
}

#[must_use]
pub fn license_plates_page(page: u32) -> String {
    format!("{LICENSE_PLATES}?page={page}")
}

#[must_use]
pub fn triggers_page(page: u32) -> String {
    format!("/api/triggers/?page={page}")
}

#[must_use]
pub fn states_page(page: u32) -> String {
    format!("/api/states/?page={page}")
}

/// `Authorization` header value for a bearer token.
#[must_use]
pub fn auth_header_value(token: &str) -> String {
    format!("JWT {token}")
}

/// Failure of a REST call, classified for the UI.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network request failed: {0}")]
    Network(String),
    /// 401: token missing or expired.
    #[error("not authorized ({status})")]
    Auth { status: u16, detail: Option<String> },
    /// 403: valid token without permission for this call.
    #[error("forbidden")]
    Forbidden { detail: Option<String> },
    /// 400: the server rejected the submitted fields; `body` is the raw payload.
    #[error("validation failed: {body}")]
    Validation { body: String },
    #[error("not found")]
    NotFound,
    #[error("server error {status}")]
    Server { status: u16, body: String },
    /// 2xx response whose body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classify a non-success response.
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Self {
        match status {
            400 => Self::Validation { body: body.to_owned() },
            401 => Self::Auth { status, detail: detail_of(body) },
            403 => Self::Forbidden { detail: detail_of(body) },
            404 => Self::NotFound,
            _ => Self::Server { status, body: body.to_owned() },
        }
    }

    #[must_use]
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Auth { .. })
    }

    /// Message suitable for a banner; `fallback` is used when the server
    /// gave no usable detail.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Network(_) => "Server je nedostupný. Skontrolujte pripojenie.".to_owned(),
            Self::Auth { detail, .. } => detail
                .clone()
                .unwrap_or_else(|| "Prihlásenie vypršalo.".to_owned()),
            Self::Forbidden { detail } => detail
                .clone()
                .unwrap_or_else(|| "Na túto akciu nemáte oprávnenie.".to_owned()),
            Self::Validation { body } => {
                detail_of(body).unwrap_or_else(|| summarize_field_errors(body).unwrap_or_else(|| fallback.to_owned()))
            }
            Self::NotFound => "Záznam neexistuje.".to_owned(),
            Self::Server { body, .. } => detail_of(body).unwrap_or_else(|| fallback.to_owned()),
            Self::Decode(_) => fallback.to_owned(),
        }
    }
}

/// `detail` string of a JSON error payload, if present.
#[must_use]
pub fn detail_of(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value.get("detail")?.as_str().map(str::to_owned)
}

/// Flatten `{"field": ["msg", ...], ...}` into `field: msg; field: msg`.
#[must_use]
pub fn summarize_field_errors(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    let map = value.as_object()?;
    let parts: Vec<String> = map
        .iter()
        .filter_map(|(field, messages)| {
            let text = match messages {
                Value::Array(items) => items
                    .iter()
                    .filter_map(Value::as_str)
                    .collect::<Vec<_>>()
                    .join(" "),
                Value::String(text) => text.clone(),
                _ => return None,
            };
            (!text.is_empty()).then(|| format!("{field}: {text}"))
        })
        .collect();
    (!parts.is_empty()).then(|| parts.join("; "))
}

/// One page of a paginated collection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(default)]
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

/// Either a paginated page or a bare array, as collection endpoints may
/// return both depending on server pagination settings.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Listing<T> {
    Paged(Page<T>),
    Plain(Vec<T>),
}

impl<T> Listing<T> {
    /// Normalize into a [`Page`]; bare arrays become a single page.
    #[must_use]
    pub fn into_page(self) -> Page<T> {
        match self {
            Self::Paged(page) => page,
            Self::Plain(results) => Page {
                count: u32::try_from(results.len()).unwrap_or(u32::MAX),
                next: None,
                previous: None,
                results,
            },
        }
    }
}

/// Page number carried by a `next`/`previous` link.
///
/// `None` when there is no link. A link without a `page` parameter points
/// at the first page, which servers render without the parameter.
#[must_use]
pub fn page_from_url(url: Option<&str>) -> Option<u32> {
    let url = url?;
    let query = url.split_once('?').map_or("", |(_, query)| query);
    let query = query.split('#').next().unwrap_or_default();
    let page = query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "page")
        .and_then(|(_, value)| value.parse::<u32>().ok());
    Some(page.unwrap_or(1))
}

/// Pagination position of a table screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageCursor {
    pub page: u32,
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
}

impl Default for PageCursor {
    fn default() -> Self {
        Self { page: 1, count: 0, next: None, previous: None }
    }
}

impl PageCursor {
    /// Cursor after loading `page` and receiving `data`.
    #[must_use]
    pub fn loaded<T>(page: u32, data: &Page<T>) -> Self {
        Self {
            page,
            count: data.count,
            next: data.next.clone(),
            previous: data.previous.clone(),
        }
    }

    #[must_use]
    pub fn next_page(&self) -> Option<u32> {
        page_from_url(self.next.as_deref())
    }

    #[must_use]
    pub fn previous_page(&self) -> Option<u32> {
        page_from_url(self.previous.as_deref())
    }

    /// 1-based inclusive row window shown on this page, `None` when empty.
    #[must_use]
    pub fn window(&self) -> Option<(u32, u32)> {
        if self.count == 0 {
            return None;
        }
        let first = self.page.saturating_sub(1).saturating_mul(PAGE_SIZE).saturating_add(1);
        let last = self.page.saturating_mul(PAGE_SIZE).min(self.count);
        Some((first, last))
    }
}
