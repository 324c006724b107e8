//! Request-level failures and their HTTP mapping.
//!
//! Every failure leaves the service as a 4xx with a `{"detail": ...}` body,
//! the shape clients already parse.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::warn;

use crate::schema::ErrorBody;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Well-formed JSON whose content is not acceptable.
    #[error("{0}")]
    InvalidInput(String),

    /// The body could not be extracted at all.
    #[error("{0}")]
    Malformed(#[from] JsonRejection),

    /// A path parameter could not be decoded.
    #[error("{0}")]
    BadPath(#[from] PathRejection),
}

impl ServiceError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServiceError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ServiceError::Malformed(rejection) => rejection.status(),
            ServiceError::BadPath(rejection) => rejection.status(),
        }
    }

    fn detail(&self) -> String {
        match self {
            ServiceError::InvalidInput(msg) => msg.clone(),
            ServiceError::Malformed(rejection) => rejection.body_text(),
            ServiceError::BadPath(rejection) => rejection.body_text(),
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = self.detail();
        warn!(status = status.as_u16(), detail = %detail, "rejecting request");
        (status, Json(ErrorBody { detail })).into_response()
    }
}
