//! `RideSession` against a live mock server.

use std::collections::HashSet;
use std::net::SocketAddr;
use std::time::Duration;

use mock_server::ServerConfig;
use ride_client::{ClientConfig, ClientError, RideSession};
use ride_core::{ApiError, PingRequest, PingStatus, RideClient, RideRequest, RideStatus};
use tokio::net::TcpListener;

const DRIVERS: [&str; 4] = ["John Doe", "Jane Smith", "Bob Johnson", "Alice Brown"];

async fn spawn_server(config: ServerConfig) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(mock_server::run(listener, config));
    addr
}

fn session_for(addr: SocketAddr) -> RideSession {
    RideSession::new(RideClient::new(&format!("http://{addr}")), Duration::from_secs(5))
}

fn ride_request() -> RideRequest {
    RideRequest {
        pickup_location: "Koramangala".to_string(),
        destination: "Indiranagar".to_string(),
        rider_name: "Test User".to_string(),
    }
}

#[tokio::test]
async fn demo_flow_round_trips() {
    let addr = spawn_server(ServerConfig::default()).await;
    let session = session_for(addr);
    assert!(!session.is_open());

    let root = session.root().await.unwrap();
    assert_eq!(root.message, "Welcome to Mini-Uber API");
    assert!(session.is_open());

    let pong = session.ping().await.unwrap();
    assert_eq!(pong.message, "pong");
    assert_eq!(pong.status, PingStatus::Success);

    let ride = session.request_ride(&ride_request()).await.unwrap();
    assert_eq!(ride.status, RideStatus::Confirmed);
    assert!(DRIVERS.contains(&ride.driver_name.as_deref().unwrap()));
    assert_eq!(ride.estimated_arrival.as_deref(), Some("5-10 minutes"));

    let status = session.get_status(&ride.ride_id).await.unwrap();
    assert_eq!(status.ride_id, ride.ride_id);
    assert!(RideStatus::ALL.contains(&status.status));

    assert!(session.close());
}

#[tokio::test]
async fn repeated_requests_get_distinct_ids() {
    let addr = spawn_server(ServerConfig::default()).await;
    let session = session_for(addr);

    let mut ids = HashSet::new();
    for _ in 0..10 {
        let ride = session.request_ride(&ride_request()).await.unwrap();
        assert!(ids.insert(ride.ride_id));
    }
}

#[tokio::test]
async fn mismatched_ping_token_surfaces_400() {
    let addr = spawn_server(ServerConfig {
        ping_token: "pong".to_string(),
        ..ServerConfig::default()
    })
    .await;
    let session = session_for(addr);

    let err = session.ping().await.unwrap_err();
    assert_eq!(err.status(), Some(400));
    assert_eq!(err.detail().as_deref(), Some("Invalid ping data"));
    assert!(matches!(err, ClientError::Api(ApiError::HttpError { status: 400, .. })));
    assert!(err.to_string().starts_with("HTTP 400:"));

    let pong = session
        .ping_with(&PingRequest {
            data: "pong".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(pong.status, PingStatus::Success);
}

#[tokio::test]
async fn configured_ping_token_matches_service() {
    let addr = spawn_server(ServerConfig {
        ping_token: "marco".to_string(),
        ..ServerConfig::default()
    })
    .await;

    let config = ClientConfig {
        server_url: format!("http://{addr}"),
        ping_token: "marco".to_string(),
        ..ClientConfig::default()
    };
    let pong = RideSession::from_config(&config).ping().await.unwrap();
    assert_eq!(pong.status, PingStatus::Success);

    let pong = session_for(addr).with_ping_token("marco").ping().await.unwrap();
    assert_eq!(pong.message, "pong");
}

#[tokio::test]
async fn ride_ids_with_reserved_characters_round_trip() {
    let addr = spawn_server(ServerConfig::default()).await;
    let session = session_for(addr);

    for ride_id in ["a?x=1", "r#1", "a/b", "50% off"] {
        let status = session.get_status(ride_id).await.unwrap();
        assert_eq!(status.ride_id, ride_id);
    }
}

#[tokio::test]
async fn requests_after_close_fail() {
    let addr = spawn_server(ServerConfig::default()).await;
    let session = session_for(addr);

    session.ping().await.unwrap();
    assert!(session.close());
    assert!(!session.close());

    let err = session.get_status("abc123").await.unwrap_err();
    assert!(matches!(err, ClientError::Closed));
}

#[tokio::test]
async fn refused_connection_is_a_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = session_for(addr).ping().await.unwrap_err();
    assert!(matches!(err, ClientError::Transport(_)), "got {err:?}");
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn silent_server_hits_the_timeout() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    // Accept and hold connections without ever answering.
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((stream, _)) = listener.accept().await {
            held.push(stream);
        }
    });

    let session = RideSession::new(
        RideClient::new(&format!("http://{addr}")),
        Duration::from_millis(200),
    );
    match session.ping().await.unwrap_err() {
        ClientError::Transport(err) => assert!(err.is_timeout(), "got {err:?}"),
        other => panic!("expected a transport timeout, got {other:?}"),
    }
}
