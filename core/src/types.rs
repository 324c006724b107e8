//! Domain DTOs for the ride API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! `ride_id` stays a plain `String` on this side: the status endpoint echoes
//! whatever id it was given, so the client cannot assume a UUID there.
//! Integration tests catch any schema drift between the two crates.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Health-check payload both sides agree on.
pub const PING_TOKEN: &str = "ping";

/// Request payload for `POST /ping`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PingRequest {
    pub data: String,
}

impl Default for PingRequest {
    fn default() -> Self {
        Self {
            data: PING_TOKEN.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PingStatus {
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PongResponse {
    pub message: String,
    pub status: PingStatus,
}

/// Request payload for `POST /ride/request`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RideRequest {
    pub pickup_location: String,
    pub destination: String,
    pub rider_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RideStatus {
    Confirmed,
    DriverAssigned,
    EnRoute,
    Arrived,
    Completed,
}

impl RideStatus {
    pub const ALL: [RideStatus; 5] = [
        RideStatus::Confirmed,
        RideStatus::DriverAssigned,
        RideStatus::EnRoute,
        RideStatus::Arrived,
        RideStatus::Completed,
    ];
}

impl fmt::Display for RideStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RideStatus::Confirmed => "confirmed",
            RideStatus::DriverAssigned => "driver_assigned",
            RideStatus::EnRoute => "en_route",
            RideStatus::Arrived => "arrived",
            RideStatus::Completed => "completed",
        };
        f.write_str(name)
    }
}

/// Confirmation returned for a ride request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RideResponse {
    pub ride_id: String,
    pub status: RideStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driver_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_arrival: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

/// Point-in-time view of a ride. Not tied to any earlier confirmation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RideStatusResponse {
    pub ride_id: String,
    pub status: RideStatus,
    pub driver_location: Location,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
}
