//! Network side of the ride client.
//!
//! # Design
//! `RideSession` pairs the sans-IO `RideClient` with a `reqwest::Client`
//! that actually moves bytes. The connection pool is created on the first
//! request and reused afterwards; `close` tears it down and every later call
//! fails with `ClientError::Closed`. Only the call that finds an open pool
//! releases it, so the release happens exactly once no matter how many
//! holders race to close.

use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use ride_core::{
    HttpMethod, HttpRequest, HttpResponse, PingRequest, PongResponse, RideClient, RideRequest,
    RideResponse, RideStatusResponse, RootResponse,
};
use tracing::{debug, info, warn};

use crate::config::ClientConfig;
use crate::error::ClientError;

enum Connection {
    Idle,
    Open(reqwest::Client),
    Closed,
}

pub struct RideSession {
    api: RideClient,
    timeout: Duration,
    ping_token: String,
    connection: Mutex<Connection>,
}

impl RideSession {
    pub fn new(api: RideClient, timeout: Duration) -> Self {
        Self {
            api,
            timeout,
            ping_token: ride_core::PING_TOKEN.to_string(),
            connection: Mutex::new(Connection::Idle),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        let api = RideClient::new(&config.server_url).with_api_version(&config.api_version);
        Self::new(api, config.timeout).with_ping_token(&config.ping_token)
    }

    /// Send `token` instead of the default from `ping`.
    pub fn with_ping_token(mut self, token: impl Into<String>) -> Self {
        self.ping_token = token.into();
        self
    }

    pub fn base_url(&self) -> &str {
        self.api.base_url()
    }

    /// True once the pool has been created and not yet closed.
    pub fn is_open(&self) -> bool {
        matches!(*self.lock(), Connection::Open(_))
    }

    /// Release the connection pool. Returns `true` only for the call that
    /// released an open pool.
    pub fn close(&self) -> bool {
        let previous = std::mem::replace(&mut *self.lock(), Connection::Closed);
        match previous {
            Connection::Open(http) => {
                drop(http);
                info!(base_url = %self.base_url(), "session closed");
                true
            }
            Connection::Idle | Connection::Closed => false,
        }
    }

    pub async fn root(&self) -> Result<RootResponse, ClientError> {
        let response = self.execute(self.api.build_root()).await?;
        Ok(self.api.parse_root(response)?)
    }

    /// Health check with the configured ping token.
    pub async fn ping(&self) -> Result<PongResponse, ClientError> {
        let request = PingRequest {
            data: self.ping_token.clone(),
        };
        self.ping_with(&request).await
    }

    pub async fn ping_with(&self, request: &PingRequest) -> Result<PongResponse, ClientError> {
        let response = self.execute(self.api.build_ping(request)?).await?;
        Ok(self.api.parse_ping(response)?)
    }

    pub async fn request_ride(&self, request: &RideRequest) -> Result<RideResponse, ClientError> {
        let response = self.execute(self.api.build_request_ride(request)?).await?;
        let ride = self.api.parse_request_ride(response)?;
        info!(ride_id = %ride.ride_id, status = %ride.status, "ride confirmed");
        Ok(ride)
    }

    pub async fn get_status(&self, ride_id: &str) -> Result<RideStatusResponse, ClientError> {
        let response = self.execute(self.api.build_get_ride_status(ride_id)?).await?;
        Ok(self.api.parse_get_ride_status(response)?)
    }

    fn lock(&self) -> MutexGuard<'_, Connection> {
        self.connection.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Hand out the pool, building it on first use.
    fn connection(&self) -> Result<reqwest::Client, ClientError> {
        let mut connection = self.lock();
        match &*connection {
            Connection::Open(http) => Ok(http.clone()),
            Connection::Closed => Err(ClientError::Closed),
            Connection::Idle => {
                let http = reqwest::Client::builder().timeout(self.timeout).build()?;
                debug!(base_url = %self.base_url(), timeout = ?self.timeout, "session opened");
                *connection = Connection::Open(http.clone());
                Ok(http)
            }
        }
    }

    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ClientError> {
        let http = self.connection()?;

        let mut builder = match request.method {
            HttpMethod::Get => http.get(&request.path),
            HttpMethod::Post => http.post(&request.path),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|err| {
            warn!(method = request.method.as_str(), path = %request.path, error = %err, "request failed");
            err
        })?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.as_str().to_string(), value.to_string()))
            })
            .collect();
        let body = response.text().await?;
        debug!(method = request.method.as_str(), path = %request.path, status, "exchange complete");

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

impl Drop for RideSession {
    fn drop(&mut self) {
        self.close();
    }
}
