//! Wire schema for the mock ride service.
//!
//! Every type here lives for exactly one request/response cycle; nothing is
//! stored between calls.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ServiceError;

/// Drivers handed out by `POST /ride/request`.
pub const DRIVERS: &[&str] = &["John Doe", "Jane Smith", "Bob Johnson", "Alice Brown"];

/// ETA attached to every confirmation.
pub const ESTIMATED_ARRIVAL: &str = "5-10 minutes";

/// Fixed driver position reported by the status endpoint (Bangalore).
pub const DRIVER_LOCATION: Location = Location {
    lat: 12.9716,
    lng: 77.5946,
};

/// Message returned by a successful health check.
pub const PONG: &str = "pong";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PingRequest {
    pub data: String,
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

impl PongResponse {
    pub fn success() -> Self {
        Self {
            message: PONG.to_string(),
            status: PingStatus::Success,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RideRequest {
    pub pickup_location: String,
    pub destination: String,
    pub rider_name: String,
}

impl RideRequest {
    /// Rejects blank fields. Everything else is accepted as-is.
    pub fn validate(&self) -> Result<(), ServiceError> {
        let fields = [
            ("pickup_location", &self.pickup_location),
            ("destination", &self.destination),
            ("rider_name", &self.rider_name),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(ServiceError::InvalidInput(format!("{name} must not be empty")));
            }
        }
        Ok(())
    }
}

/// Lifecycle stages a ride can be reported in. The mock never enforces
/// transitions between them.
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

    pub fn as_str(self) -> &'static str {
        match self {
            RideStatus::Confirmed => "confirmed",
            RideStatus::DriverAssigned => "driver_assigned",
            RideStatus::EnRoute => "en_route",
            RideStatus::Arrived => "arrived",
            RideStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for RideStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RideResponse {
    pub ride_id: Uuid,
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

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RideStatusResponse {
    pub ride_id: String,
    pub status: RideStatus,
    pub driver_location: Location,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
}

/// Body of every 4xx answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ride_request(pickup: &str, destination: &str, rider: &str) -> RideRequest {
        RideRequest {
            pickup_location: pickup.to_string(),
            destination: destination.to_string(),
            rider_name: rider.to_string(),
        }
    }

    #[test]
    fn ride_status_serializes_snake_case() {
        let json = serde_json::to_value(RideStatus::DriverAssigned).unwrap();
        assert_eq!(json, "driver_assigned");
        for status in RideStatus::ALL {
            let json = serde_json::to_value(status).unwrap();
            assert_eq!(json, status.as_str());
        }
    }

    #[test]
    fn pong_serializes_status_as_string() {
        let json = serde_json::to_value(PongResponse::success()).unwrap();
        assert_eq!(json["message"], "pong");
        assert_eq!(json["status"], "success");
    }

    #[test]
    fn ride_response_roundtrips_through_json() {
        let ride = RideResponse {
            ride_id: Uuid::new_v4(),
            status: RideStatus::Confirmed,
            driver_name: Some("Jane Smith".to_string()),
            estimated_arrival: Some(ESTIMATED_ARRIVAL.to_string()),
        };
        let json = serde_json::to_string(&ride).unwrap();
        let back: RideResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ride);
    }

    #[test]
    fn ride_response_omits_missing_optionals() {
        let ride = RideResponse {
            ride_id: Uuid::nil(),
            status: RideStatus::Confirmed,
            driver_name: None,
            estimated_arrival: None,
        };
        let json = serde_json::to_value(&ride).unwrap();
        assert_eq!(json["ride_id"], "00000000-0000-0000-0000-000000000000");
        assert!(json.get("driver_name").is_none());
        assert!(json.get("estimated_arrival").is_none());
    }

    #[test]
    fn validate_accepts_filled_request() {
        assert!(ride_request("Koramangala", "Indiranagar", "Test User").validate().is_ok());
    }

    #[test]
    fn validate_names_the_blank_field() {
        let err = ride_request("Koramangala", "  ", "Test User").validate().unwrap_err();
        assert_eq!(err.to_string(), "destination must not be empty");

        let err = ride_request("Koramangala", "Indiranagar", "").validate().unwrap_err();
        assert_eq!(err.to_string(), "rider_name must not be empty");
    }

    #[test]
    fn ride_request_rejects_missing_field() {
        let result: Result<RideRequest, _> =
            serde_json::from_str(r#"{"pickup_location":"A","destination":"B"}"#);
        assert!(result.is_err());
    }
}
