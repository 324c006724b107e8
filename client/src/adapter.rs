//! Client-facing HTTP adapter.
//!
//! Lets curl or Postman drive the ride flow through the client: each route
//! forwards to the mock service via the shared `RideSession`. Upstream failures
//! come back as a 400 and unreadable requests keep their extractor status;
//! either way the body is `{"detail": ...}`.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use ride_core::{PongResponse, RideRequest, RideResponse, RideStatusResponse, RootResponse};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::error::ClientError;
use crate::session::RideSession;

/// Body of `POST /submit-ride`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RideSubmission {
    pub source_location: String,
    pub dest_location: String,
    pub user_id: String,
}

impl From<RideSubmission> for RideRequest {
    fn from(submission: RideSubmission) -> Self {
        RideRequest {
            pickup_location: submission.source_location,
            destination: submission.dest_location,
            rider_name: submission.user_id,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AdapterError {
    /// An upstream call that did not produce a usable answer.
    #[error("{0}")]
    Upstream(#[from] ClientError),

    #[error("{0}")]
    Malformed(#[from] JsonRejection),

    #[error("{0}")]
    BadPath(#[from] PathRejection),
}

impl AdapterError {
    pub fn status(&self) -> StatusCode {
        match self {
            AdapterError::Upstream(_) => StatusCode::BAD_REQUEST,
            AdapterError::Malformed(rejection) => rejection.status(),
            AdapterError::BadPath(rejection) => rejection.status(),
        }
    }

    fn detail(&self) -> String {
        match self {
            AdapterError::Upstream(err) => err.detail().unwrap_or_else(|| err.to_string()),
            AdapterError::Malformed(rejection) => rejection.body_text(),
            AdapterError::BadPath(rejection) => rejection.body_text(),
        }
    }
}

impl IntoResponse for AdapterError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = self.detail();
        match &self {
            AdapterError::Upstream(err) => {
                warn!(upstream_status = ?err.status(), detail = %detail, "upstream call failed");
            }
            AdapterError::Malformed(_) | AdapterError::BadPath(_) => {
                warn!(status = status.as_u16(), detail = %detail, "rejecting request");
            }
        }
        (status, Json(ErrorBody { detail })).into_response()
    }
}

pub fn app(session: Arc<RideSession>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/ping", post(ping))
        .route("/submit-ride", post(submit_ride))
        .route("/ride-status/{ride_id}", get(ride_status))
        .layer(TraceLayer::new_for_http())
        .with_state(session)
}

async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Mini-Uber Client API".to_string(),
    })
}

async fn ping(State(session): State<Arc<RideSession>>) -> Result<Json<PongResponse>, AdapterError> {
    Ok(Json(session.ping().await?))
}

async fn submit_ride(
    State(session): State<Arc<RideSession>>,
    submission: Result<Json<RideSubmission>, JsonRejection>,
) -> Result<Json<RideResponse>, AdapterError> {
    let Json(submission) = submission?;
    let request = RideRequest::from(submission);
    Ok(Json(session.request_ride(&request).await?))
}

async fn ride_status(
    State(session): State<Arc<RideSession>>,
    ride_id: Result<Path<String>, PathRejection>,
) -> Result<Json<RideStatusResponse>, AdapterError> {
    let Path(ride_id) = ride_id?;
    Ok(Json(session.get_status(&ride_id).await?))
}
