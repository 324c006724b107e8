//! Log subscriber setup for the service binary.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a `fmt` subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level is `debug` when the service
/// runs in debug mode and `info` when it does not.
pub fn init(debug: bool) {
    tracing_subscriber::registry()
        .with(filter(debug))
        .with(fmt::layer().with_target(true))
        .init();
}

fn filter(debug: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level(debug)))
}

fn default_level(debug: bool) -> &'static str {
    if debug {
        "debug"
    } else {
        "info"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_level_follows_debug_flag() {
        assert_eq!(default_level(true), "debug");
        assert_eq!(default_level(false), "info");
    }
}
