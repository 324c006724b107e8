//! Error types for the ride API client.
//!
//! Every non-200 answer lands in `HttpError` with the raw status code and
//! body. The mock service puts a human-readable `detail` in its 4xx bodies;
//! `ApiError::detail` digs it out when present.

use serde::Deserialize;

/// Errors returned by `RideClient` build and parse methods.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server answered with something other than 200.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),

    /// The base URL and path do not form a usable request URL.
    #[error("invalid request URL: {0}")]
    InvalidUrl(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: String,
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::HttpError { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The server's `detail` message, if the error body carries one.
    pub fn detail(&self) -> Option<String> {
        match self {
            ApiError::HttpError { body, .. } => serde_json::from_str::<ErrorBody>(body)
                .ok()
                .map(|b| b.detail),
            _ => None,
        }
    }
}
