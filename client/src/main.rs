use ride_client::{display_response, logging, ClientConfig, RideSession};
use ride_core::RideRequest;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ClientConfig::from_env()?;
    logging::init(config.debug);

    let session = RideSession::from_config(&config);

    println!("=== Mini-Uber Client Demo ===");

    println!("\n1. Testing Ping-Pong:");
    match session.ping().await {
        Ok(pong) => display_response("Ping", &pong)?,
        Err(err) => println!("Error: {err}"),
    }

    println!("\n2. Requesting a ride:");
    let request = RideRequest {
        pickup_location: "Koramangala".to_string(),
        destination: "Indiranagar".to_string(),
        rider_name: "Test User".to_string(),
    };
    match session.request_ride(&request).await {
        Ok(ride) => {
            display_response("Ride Request", &ride)?;

            println!("\n3. Checking ride status:");
            match session.get_status(&ride.ride_id).await {
                Ok(status) => display_response("Ride Status", &status)?,
                Err(err) => println!("Error: {err}"),
            }
        }
        Err(err) => println!("Error: {err}"),
    }

    session.close();
    Ok(())
}
