//! REST client for the gate service.
//!
//! Browser builds (`csr`) issue real HTTP calls via `gloo-net`. Native builds
//! compile the same signatures but every call fails with a network error,
//! which keeps page logic testable off-browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Non-2xx responses are classified
//! by `ApiError::from_response`; callers decide whether an auth failure ends
//! the session or an error banner is enough.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use gatewire::ApiError;
use gatewire::api::{self as paths, Listing, Page};
use gatewire::model::{
    Credentials, GeneralInfo, LicensePlate, ParkedVehicle, ParkingStatistics, PlateDraft, PlateToggle,
    StateRecord, TemporaryAccess, TemporaryAccessDraft, TokenResponse, TriggerRecord,
};
use serde::Serialize;
use serde::de::DeserializeOwned;

#[derive(Clone, Copy, Debug)]
enum Verb {
    Post,
    Patch,
    Delete,
}

#[cfg(any(test, feature = "csr"))]
fn endpoint(origin: &str, path: &str) -> String {
    format!("{}{path}", origin.trim_end_matches('/'))
}

#[cfg(feature = "csr")]
fn request(verb: Verb, url: &str) -> gloo_net::http::RequestBuilder {
    use gloo_net::http::Request;
    match verb {
        Verb::Post => Request::post(url),
        Verb::Patch => Request::patch(url),
        Verb::Delete => Request::delete(url),
    }
}

#[cfg(feature = "csr")]
fn authorize(builder: gloo_net::http::RequestBuilder, token: Option<&str>) -> gloo_net::http::RequestBuilder {
    match token {
        Some(token) => builder.header("Authorization", &paths::auth_header_value(token)),
        None => builder,
    }
}

#[cfg(feature = "csr")]
async fn ensure_ok(response: gloo_net::http::Response) -> Result<gloo_net::http::Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::from_response(status, &body))
}

#[cfg(feature = "csr")]
fn network(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

async fn get_json<T: DeserializeOwned>(path: &str, token: Option<&str>) -> Result<T, ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = endpoint(&crate::config::rest_origin(), path);
        let response = authorize(gloo_net::http::Request::get(&url), token)
            .send()
            .await
            .map_err(network)?;
        let response = ensure_ok(response).await?;
        response.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (path, token);
        Err(ApiError::Network("browser only".to_owned()))
    }
}

/// Send `body` and ignore the response payload.
async fn send<B: Serialize>(verb: Verb, path: &str, token: Option<&str>, body: Option<&B>) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        dispatch(verb, path, token, body).await.map(|_| ())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (verb, path, token, body.is_some());
        Err(ApiError::Network("browser only".to_owned()))
    }
}

/// Send `body` and decode the JSON response.
async fn send_json<B: Serialize, T: DeserializeOwned>(
    verb: Verb,
    path: &str,
    token: Option<&str>,
    body: &B,
) -> Result<T, ApiError> {
    #[cfg(feature = "csr")]
    {
        let response = dispatch(verb, path, token, Some(body)).await?;
        response.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (verb, path, token, body);
        Err(ApiError::Network("browser only".to_owned()))
    }
}

#[cfg(feature = "csr")]
async fn dispatch<B: Serialize>(
    verb: Verb,
    path: &str,
    token: Option<&str>,
    body: Option<&B>,
) -> Result<gloo_net::http::Response, ApiError> {
    let url = endpoint(&crate::config::rest_origin(), path);
    let builder = authorize(request(verb, &url), token);
    let response = match body {
        Some(body) => builder
            .json(body)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await,
        None => builder.send().await,
    }
    .map_err(network)?;
    ensure_ok(response).await
}

// =============================================================
// Auth / profile
// =============================================================

/// Exchange credentials for a bearer token.
///
/// # Errors
///
/// `ApiError::Auth` carries the server's `detail` for wrong credentials.
pub async fn obtain_token(credentials: &Credentials) -> Result<String, ApiError> {
    let response: TokenResponse = send_json(Verb::Post, paths::AUTH_JWT_CREATE, None, credentials).await?;
    Ok(response.access)
}

/// Profile and permission flags of the token's user.
///
/// # Errors
///
/// Propagates transport and status failures.
pub async fn general_info(token: &str) -> Result<GeneralInfo, ApiError> {
    get_json(paths::GENERAL_INFO, Some(token)).await
}

// =============================================================
// Temporary access
// =============================================================

/// All temporary access grants visible to the user.
///
/// # Errors
///
/// Propagates transport and status failures.
pub async fn temporary_accesses(token: &str) -> Result<Vec<TemporaryAccess>, ApiError> {
    let listing: Listing<TemporaryAccess> = get_json(paths::TEMPORARY_ACCESS, Some(token)).await?;
    Ok(listing.into_page().results)
}

/// One grant by link. Guests call this without a token.
///
/// # Errors
///
/// `ApiError::NotFound` for unknown or revoked links.
pub async fn temporary_access(token: Option<&str>, link: &str) -> Result<TemporaryAccess, ApiError> {
    get_json(&paths::temporary_access_item(link), token).await
}

/// # Errors
///
/// `ApiError::Validation` carries the rejected field payload.
pub async fn create_temporary_access(token: &str, draft: &TemporaryAccessDraft) -> Result<(), ApiError> {
    send(Verb::Post, paths::TEMPORARY_ACCESS, Some(token), Some(draft)).await
}

/// # Errors
///
/// `ApiError::Validation` carries the rejected field payload.
pub async fn update_temporary_access(token: &str, link: &str, draft: &TemporaryAccessDraft) -> Result<(), ApiError> {
    send(Verb::Patch, &paths::temporary_access_item(link), Some(token), Some(draft)).await
}

/// # Errors
///
/// Propagates transport and status failures.
pub async fn delete_temporary_access(token: &str, link: &str) -> Result<(), ApiError> {
    send::<()>(Verb::Delete, &paths::temporary_access_item(link), Some(token), None).await
}

// =============================================================
// License plates
// =============================================================

/// # Errors
///
/// Propagates transport and status failures.
pub async fn license_plates(token: &str, page: u32) -> Result<Page<LicensePlate>, ApiError> {
    let listing: Listing<LicensePlate> = get_json(&paths::license_plates_page(page), Some(token)).await?;
    Ok(listing.into_page())
}

/// # Errors
///
/// `ApiError::Validation` for duplicate or malformed plates.
pub async fn add_license_plate(token: &str, plate: &PlateDraft) -> Result<(), ApiError> {
    send(Verb::Post, paths::LICENSE_PLATES, Some(token), Some(plate)).await
}

/// # Errors
///
/// `ApiError::Validation` for duplicate or malformed plates.
pub async fn rename_license_plate(token: &str, id: i64, plate: &PlateDraft) -> Result<(), ApiError> {
    send(Verb::Patch, &paths::license_plate_item(id), Some(token), Some(plate)).await
}

/// Approve or revoke a plate. Admin only server-side.
///
/// # Errors
///
/// `ApiError::Forbidden` when the user is not an administrator.
pub async fn set_plate_allowed(token: &str, id: i64, is_allowed: bool) -> Result<(), ApiError> {
    let body = PlateToggle { is_allowed };
    send(Verb::Patch, &paths::license_plate_item(id), Some(token), Some(&body)).await
}

/// # Errors
///
/// Propagates transport and status failures.
pub async fn delete_license_plate(token: &str, id: i64) -> Result<(), ApiError> {
    send::<()>(Verb::Delete, &paths::license_plate_item(id), Some(token), None).await
}

// =============================================================
// History / parking
// =============================================================

/// # Errors
///
/// Propagates transport and status failures.
pub async fn trigger_history(token: &str, page: u32) -> Result<Page<TriggerRecord>, ApiError> {
    let listing: Listing<TriggerRecord> = get_json(&paths::triggers_page(page), Some(token)).await?;
    Ok(listing.into_page())
}

/// # Errors
///
/// `ApiError::Forbidden` for non-administrators.
pub async fn state_history(token: &str, page: u32) -> Result<Page<StateRecord>, ApiError> {
    let listing: Listing<StateRecord> = get_json(&paths::states_page(page), Some(token)).await?;
    Ok(listing.into_page())
}

/// # Errors
///
/// Propagates transport and status failures.
pub async fn parking_statistics(token: &str) -> Result<ParkingStatistics, ApiError> {
    get_json(paths::PARKING_STATISTICS, Some(token)).await
}

/// # Errors
///
/// Propagates transport and status failures.
pub async fn parked_vehicles(token: &str) -> Result<Vec<ParkedVehicle>, ApiError> {
    let listing: Listing<ParkedVehicle> = get_json(paths::PARKING, Some(token)).await?;
    Ok(listing.into_page().results)
}
