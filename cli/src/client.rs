//! Async REST client for the gate service.
//!
//! Mirrors the browser client call for call. Non-2xx responses go through
//! `ApiError::from_response`, so both front-ends report failures alike.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use gatewire::ApiError;
use gatewire::api::{self as paths, Listing, Page};
use gatewire::model::{
    Credentials, GeneralInfo, LicensePlate, ParkedVehicle, ParkingStatistics, PlateDraft, PlateToggle,
    StateRecord, TemporaryAccess, TokenResponse, TriggerRecord,
};
use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::CliError;

/// Normalized `http(s)://host[:port]` origin.
pub fn normalize_server(server: &str) -> Result<String, CliError> {
    let server = server.trim().trim_end_matches('/');
    if server.starts_with("http://") || server.starts_with("https://") {
        Ok(server.to_owned())
    } else {
        Err(CliError::InvalidServer(server.to_owned()))
    }
}

/// Socket base for an HTTP origin (`https` -> `wss`, `http` -> `ws`).
pub fn ws_base(origin: &str) -> Result<String, CliError> {
    if let Some(rest) = origin.strip_prefix("https://") {
        return Ok(format!("wss://{rest}"));
    }
    if let Some(rest) = origin.strip_prefix("http://") {
        return Ok(format!("ws://{rest}"));
    }
    Err(CliError::InvalidServer(origin.to_owned()))
}

pub struct ApiClient {
    http: reqwest::Client,
    origin: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(server: &str, token: Option<String>) -> Result<Self, CliError> {
        Ok(Self {
            http: reqwest::Client::builder().build()?,
            origin: normalize_server(server)?,
            token,
        })
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.origin)
    }

    fn token(&self) -> Result<&str, CliError> {
        self.token.as_deref().ok_or(CliError::MissingToken)
    }

    async fn dispatch<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        body: Option<&B>,
    ) -> Result<reqwest::Response, CliError> {
        let mut request = self.http.request(method.clone(), self.url(path));
        if let Some(token) = token {
            request = request.header(reqwest::header::AUTHORIZATION, paths::auth_header_value(token));
        }
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send().await?;
        let status = response.status();
        tracing::debug!(%method, path, status = status.as_u16(), "api response");
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::from_response(status.as_u16(), &body).into())
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, CliError> {
        let response = self.dispatch::<()>(Method::GET, path, Some(self.token()?), None).await?;
        decode(response).await
    }

    async fn send<B: Serialize + ?Sized>(&self, method: Method, path: &str, body: Option<&B>) -> Result<(), CliError> {
        self.dispatch(method, path, Some(self.token()?), body).await?;
        Ok(())
    }

    pub async fn obtain_token(&self, credentials: &Credentials) -> Result<String, CliError> {
        let response = self.dispatch(Method::POST, paths::AUTH_JWT_CREATE, None, Some(credentials)).await?;
        let token: TokenResponse = decode(response).await?;
        Ok(token.access)
    }

    pub async fn general_info(&self) -> Result<GeneralInfo, CliError> {
        self.get(paths::GENERAL_INFO).await
    }

    pub async fn temporary_accesses(&self) -> Result<Vec<TemporaryAccess>, CliError> {
        let listing: Listing<TemporaryAccess> = self.get(paths::TEMPORARY_ACCESS).await?;
        Ok(listing.into_page().results)
    }

    /// Works without a token, like the guest screen.
    pub async fn temporary_access(&self, link: &str) -> Result<TemporaryAccess, CliError> {
        let path = paths::temporary_access_item(link);
        let response = self.dispatch::<()>(Method::GET, &path, self.token.as_deref(), None).await?;
        decode(response).await
    }

    pub async fn delete_temporary_access(&self, link: &str) -> Result<(), CliError> {
        self.send::<()>(Method::DELETE, &paths::temporary_access_item(link), None).await
    }

    pub async fn license_plates(&self, page: u32) -> Result<Page<LicensePlate>, CliError> {
        let listing: Listing<LicensePlate> = self.get(&paths::license_plates_page(page)).await?;
        Ok(listing.into_page())
    }

    pub async fn add_license_plate(&self, ecv: &str) -> Result<(), CliError> {
        let body = PlateDraft { ecv: ecv.trim().to_owned() };
        self.send(Method::POST, paths::LICENSE_PLATES, Some(&body)).await
    }

    pub async fn set_plate_allowed(&self, id: i64, is_allowed: bool) -> Result<(), CliError> {
        let body = PlateToggle { is_allowed };
        self.send(Method::PATCH, &paths::license_plate_item(id), Some(&body)).await
    }

    pub async fn delete_license_plate(&self, id: i64) -> Result<(), CliError> {
        self.send::<()>(Method::DELETE, &paths::license_plate_item(id), None).await
    }

    pub async fn trigger_history(&self, page: u32) -> Result<Page<TriggerRecord>, CliError> {
        let listing: Listing<TriggerRecord> = self.get(&paths::triggers_page(page)).await?;
        Ok(listing.into_page())
    }

    pub async fn state_history(&self, page: u32) -> Result<Page<StateRecord>, CliError> {
        let listing: Listing<StateRecord> = self.get(&paths::states_page(page)).await?;
        Ok(listing.into_page())
    }

    pub async fn parking_statistics(&self) -> Result<ParkingStatistics, CliError> {
        self.get(paths::PARKING_STATISTICS).await
    }

    pub async fn parked_vehicles(&self) -> Result<Vec<ParkedVehicle>, CliError> {
        let listing: Listing<ParkedVehicle> = self.get(paths::PARKING).await?;
        Ok(listing.into_page().results)
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, CliError> {
    let text = response.text().await?;
    serde_json::from_str(&text).map_err(|error| ApiError::Decode(error.to_string()).into())
}
