//! Stateless HTTP request builder and response parser for the ride API.
//!
//! # Design
//! `RideClient` holds only a `base_url` and the versioned API prefix, and
//! carries no mutable state between calls. Each operation is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method that
//! consumes an `HttpResponse`. The caller executes the actual HTTP round-trip.

use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{
    PingRequest, PongResponse, RideRequest, RideResponse, RideStatusResponse, RootResponse,
};

const DEFAULT_API_VERSION: &str = "v1";

/// Synchronous, stateless client for the ride API.
#[derive(Debug, Clone)]
pub struct RideClient {
    base_url: String,
    api_prefix: String,
}

impl RideClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_prefix: api_prefix(DEFAULT_API_VERSION),
        }
    }

    /// Target a different API version, e.g. `v2` for `/api/v2/...`.
    pub fn with_api_version(mut self, version: &str) -> Self {
        self.api_prefix = api_prefix(version);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_root(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_ping(&self, input: &PingRequest) -> Result<HttpRequest, ApiError> {
        self.json_post("/ping", input)
    }

    pub fn build_request_ride(&self, input: &RideRequest) -> Result<HttpRequest, ApiError> {
        self.json_post("/ride/request", input)
    }

    /// `ride_id` is sent as a single percent-encoded path segment, so ids
    /// containing `/`, `?`, `#` or `%` reach the service intact.
    pub fn build_get_ride_status(&self, ride_id: &str) -> Result<HttpRequest, ApiError> {
        let base = self.url("/ride");
        let mut url = Url::parse(&base).map_err(|e| ApiError::InvalidUrl(format!("{base}: {e}")))?;
        url.path_segments_mut()
            .map_err(|()| ApiError::InvalidUrl(format!("{base}: cannot carry a path")))?
            .push(ride_id);
        Ok(HttpRequest {
            method: HttpMethod::Get,
            path: url.into(),
            headers: Vec::new(),
            body: None,
        })
    }

    pub fn parse_root(&self, response: HttpResponse) -> Result<RootResponse, ApiError> {
        parse_ok(response)
    }

    pub fn parse_ping(&self, response: HttpResponse) -> Result<PongResponse, ApiError> {
        parse_ok(response)
    }

    pub fn parse_request_ride(&self, response: HttpResponse) -> Result<RideResponse, ApiError> {
        parse_ok(response)
    }

    pub fn parse_get_ride_status(
        &self,
        response: HttpResponse,
    ) -> Result<RideStatusResponse, ApiError> {
        parse_ok(response)
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}{endpoint}", self.base_url, self.api_prefix)
    }

    fn json_post<T: Serialize>(&self, endpoint: &str, input: &T) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: self.url(endpoint),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }
}

fn api_prefix(version: &str) -> String {
    format!("/api/{}", version.trim_matches('/'))
}

fn parse_ok<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    check_status(&response, 200)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

/// Map any status other than `expected` to `ApiError::HttpError`.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}
