//! Client wrapper for the mock ride service.
//!
//! # Overview
//! - `session`: executes `ride_core` requests over a lazily opened,
//!   explicitly closed HTTP connection pool.
//! - `render`: prints responses for a human operator.
//! - `adapter`: a small HTTP front-end that forwards to the session.

pub mod adapter;
pub mod config;
pub mod error;
pub mod logging;
pub mod render;
pub mod session;

pub use config::{ClientConfig, ConfigError};
pub use error::ClientError;
pub use render::{display_response, format_ride_info, render};
pub use session::RideSession;
