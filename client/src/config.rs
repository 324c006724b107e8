use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

pub const DEFAULT_SERVER_URL: &str = "http://localhost:8000";
pub const DEFAULT_ADAPTER_PORT: u16 = 8001;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Settings shared by the demo binary and the client-facing adapter.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Where the mock ride service listens.
    pub server_url: String,
    pub api_version: String,
    /// Upper bound for one full request/response exchange.
    pub timeout: Duration,
    pub debug: bool,
    pub adapter_host: IpAddr,
    pub adapter_port: u16,
    /// Payload sent by `ping`; must match the service's `PING_TOKEN`.
    pub ping_token: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            api_version: "v1".to_string(),
            timeout: DEFAULT_TIMEOUT,
            debug: false,
            adapter_host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            adapter_port: DEFAULT_ADAPTER_PORT,
            ping_token: ride_core::PING_TOKEN.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(url) = lookup("RIDE_SERVER_URL") {
            config.server_url = url;
        }
        if let Some(version) = lookup("API_VERSION") {
            config.api_version = version;
        }
        if let Some(raw) = lookup("RIDE_CLIENT_TIMEOUT_SECS") {
            let secs: u64 = parse("RIDE_CLIENT_TIMEOUT_SECS", &raw)?;
            if secs == 0 {
                return Err(invalid("RIDE_CLIENT_TIMEOUT_SECS", &raw, "timeout must be positive"));
            }
            config.timeout = Duration::from_secs(secs);
        }
        if let Some(raw) = lookup("DEBUG") {
            config.debug = parse_bool("DEBUG", &raw)?;
        }
        if let Some(raw) = lookup("CLIENT_API_HOST") {
            config.adapter_host = parse("CLIENT_API_HOST", &raw)?;
        }
        if let Some(raw) = lookup("CLIENT_API_PORT") {
            config.adapter_port = parse("CLIENT_API_PORT", &raw)?;
        }
        if let Some(token) = lookup("PING_TOKEN") {
            config.ping_token = token;
        }
        Ok(config)
    }

    pub fn adapter_addr(&self) -> SocketAddr {
        SocketAddr::new(self.adapter_host, self.adapter_port)
    }
}

fn invalid(key: &'static str, raw: &str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        key,
        value: raw.to_string(),
        reason: reason.into(),
    }
}

fn parse<T>(key: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| invalid(key, raw, e.to_string()))
}

fn parse_bool(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(invalid(key, raw, "expected a boolean")),
    }
}
