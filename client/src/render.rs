//! Operator-facing output.

use std::io::{self, Write};

use ride_core::RideResponse;
use serde::Serialize;

const RULE_WIDTH: usize = 40;

/// Write `response` as indented JSON framed by a heading and two rules.
pub fn render<W, T>(sink: &mut W, label: &str, response: &T) -> io::Result<()>
where
    W: Write,
    T: Serialize + ?Sized,
{
    let body = serde_json::to_string_pretty(response).map_err(io::Error::other)?;
    let rule = "-".repeat(RULE_WIDTH);
    writeln!(sink, "\n{label} Response:")?;
    writeln!(sink, "{rule}")?;
    writeln!(sink, "{body}")?;
    writeln!(sink, "{rule}")
}

/// `render` to stdout.
pub fn display_response<T: Serialize + ?Sized>(label: &str, response: &T) -> io::Result<()> {
    let stdout = io::stdout();
    let mut sink = stdout.lock();
    render(&mut sink, label, response)?;
    sink.flush()
}

/// One line per known field of a confirmation; absent optionals are skipped.
pub fn format_ride_info(ride: &RideResponse) -> String {
    let mut info = format!("Ride ID: {}\nStatus: {}\n", ride.ride_id, ride.status);
    if let Some(driver) = &ride.driver_name {
        info.push_str(&format!("Driver: {driver}\n"));
    }
    if let Some(eta) = &ride.estimated_arrival {
        info.push_str(&format!("ETA: {eta}\n"));
    }
    info
}
