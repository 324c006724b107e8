use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_PING_TOKEN: &str = "ping";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Startup settings for the mock service. Built once and handed to `app`.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub app_name: String,
    pub debug: bool,
    pub api_version: String,
    pub host: IpAddr,
    pub port: u16,
    /// Payload `POST /ping` must carry to be answered with `pong`.
    pub ping_token: String,
    /// Makes driver and status picks reproducible when set.
    pub random_seed: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            app_name: "Mini-Uber".to_string(),
            debug: true,
            api_version: "v1".to_string(),
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            ping_token: DEFAULT_PING_TOKEN.to_string(),
            random_seed: None,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Start from the defaults and override every key `lookup` knows about.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(name) = lookup("APP_NAME") {
            config.app_name = name;
        }
        if let Some(raw) = lookup("DEBUG") {
            config.debug = parse_bool("DEBUG", &raw)?;
        }
        if let Some(version) = lookup("API_VERSION") {
            config.api_version = version.trim_matches('/').to_string();
        }
        if let Some(raw) = lookup("HOST") {
            config.host = raw.parse().map_err(|e: std::net::AddrParseError| ConfigError::Invalid {
                key: "HOST",
                value: raw.clone(),
                reason: e.to_string(),
            })?;
        }
        if let Some(raw) = lookup("PORT") {
            config.port = raw.parse().map_err(|e: std::num::ParseIntError| ConfigError::Invalid {
                key: "PORT",
                value: raw.clone(),
                reason: e.to_string(),
            })?;
        }
        if let Some(token) = lookup("PING_TOKEN") {
            config.ping_token = token;
        }
        if let Some(raw) = lookup("RANDOM_SEED") {
            let seed = raw.parse().map_err(|e: std::num::ParseIntError| ConfigError::Invalid {
                key: "RANDOM_SEED",
                value: raw.clone(),
                reason: e.to_string(),
            })?;
            config.random_seed = Some(seed);
        }
        Ok(config)
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Mount point of the versioned API, e.g. `/api/v1`.
    pub fn api_prefix(&self) -> String {
        format!("/api/{}", self.api_version)
    }
}

fn parse_bool(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid {
            key,
            value: raw.to_string(),
            reason: "expected a boolean".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.app_name, "Mini-Uber");
        assert!(config.debug);
        assert_eq!(config.api_prefix(), "/api/v1");
        assert_eq!(config.bind_addr().to_string(), "0.0.0.0:8000");
        assert_eq!(config.ping_token, "ping");
        assert!(config.random_seed.is_none());
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("APP_NAME", "Ride Mock"),
            ("DEBUG", "off"),
            ("API_VERSION", "/v2/"),
            ("HOST", "127.0.0.1"),
            ("PORT", "9100"),
            ("RANDOM_SEED", "7"),
        ]))
        .unwrap();
        assert_eq!(config.app_name, "Ride Mock");
        assert!(!config.debug);
        assert_eq!(config.api_prefix(), "/api/v2");
        assert_eq!(config.bind_addr().to_string(), "127.0.0.1:9100");
        assert_eq!(config.random_seed, Some(7));
    }

    #[test]
    fn bad_port_is_reported_with_its_key() {
        let err = ServerConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "PORT", .. }));
    }

    #[test]
    fn bad_debug_flag_is_rejected() {
        let err = ServerConfig::from_lookup(lookup(&[("DEBUG", "maybe")])).unwrap_err();
        assert!(err.to_string().contains("DEBUG"));
    }
}
