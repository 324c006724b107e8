//! Mock ride service.
//!
//! Answers a health check, ride submissions and ride status lookups with
//! synthesized data. Nothing is stored: every handler builds its answer from
//! the request, the startup `ServerConfig` and the injected `RandomSource`.

pub mod config;
pub mod error;
pub mod logging;
pub mod random;
pub mod schema;

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    routing::{get, post},
    Json, Router,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};
use uuid::Uuid;

pub use config::{ConfigError, ServerConfig};
pub use error::ServiceError;
pub use random::{RandomSource, ScriptedRandom, SeededRandom, ThreadRandom};
pub use schema::{
    ErrorBody, Location, PingRequest, PingStatus, PongResponse, RideRequest, RideResponse,
    RideStatus, RideStatusResponse, RootResponse,
};

use schema::{DRIVERS, DRIVER_LOCATION, ESTIMATED_ARRIVAL};

/// Shared by every handler invocation. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ServerConfig>,
    random: Arc<dyn RandomSource>,
}

/// Build the route table, seeding the random source when the config asks for it.
pub fn app(config: ServerConfig) -> Router {
    let random: Arc<dyn RandomSource> = match config.random_seed {
        Some(seed) => Arc::new(SeededRandom::new(seed)),
        None => Arc::new(ThreadRandom),
    };
    app_with_random(config, random)
}

/// Build the route table with an explicit randomness source.
///
/// `GET /` sits at the root; the rest of the table is mounted under
/// `/api/<api_version>`.
pub fn app_with_random(config: ServerConfig, random: Arc<dyn RandomSource>) -> Router {
    let prefix = config.api_prefix();
    let state = AppState {
        config: Arc::new(config),
        random,
    };
    Router::new()
        .route("/", get(root))
        .nest(&prefix, api_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/ping", post(ping))
        .route("/ride/request", post(request_ride))
        .route("/ride/{ride_id}", get(ride_status))
}

pub async fn run(listener: TcpListener, config: ServerConfig) -> Result<(), std::io::Error> {
    axum::serve(listener, app(config)).await
}

async fn root(State(state): State<AppState>) -> Json<RootResponse> {
    Json(RootResponse {
        message: format!("Welcome to {} API", state.config.app_name),
    })
}

async fn ping(
    State(state): State<AppState>,
    payload: Result<Json<PingRequest>, JsonRejection>,
) -> Result<Json<PongResponse>, ServiceError> {
    let Json(request) = payload?;
    if request.data != state.config.ping_token {
        return Err(ServiceError::InvalidInput("Invalid ping data".to_string()));
    }
    debug!("ping answered");
    Ok(Json(PongResponse::success()))
}

async fn request_ride(
    State(state): State<AppState>,
    payload: Result<Json<RideRequest>, JsonRejection>,
) -> Result<Json<RideResponse>, ServiceError> {
    let Json(request) = payload?;
    request.validate()?;

    let driver = random::choose(state.random.as_ref(), DRIVERS);
    let ride = RideResponse {
        ride_id: Uuid::new_v4(),
        status: RideStatus::Confirmed,
        driver_name: Some(driver.to_string()),
        estimated_arrival: Some(ESTIMATED_ARRIVAL.to_string()),
    };
    info!(
        ride_id = %ride.ride_id,
        rider = %request.rider_name,
        pickup = %request.pickup_location,
        destination = %request.destination,
        driver,
        "ride confirmed"
    );
    Ok(Json(ride))
}

async fn ride_status(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<RideStatusResponse>, ServiceError> {
    let Path(ride_id) = path?;
    let status = *random::choose(state.random.as_ref(), &RideStatus::ALL);
    debug!(ride_id = %ride_id, %status, "ride status synthesized");
    Ok(Json(RideStatusResponse {
        ride_id,
        status,
        driver_location: DRIVER_LOCATION,
    }))
}
