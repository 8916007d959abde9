//! Process configuration from environment variables.

use std::net::SocketAddr;

use thiserror::Error;

use forgebom_resources::FanOut;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {message}")]
    Invalid { key: &'static str, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    /// Load the development catalog before serving.
    pub seed_on_startup: bool,
    /// Mount `POST /dev/seed`.
    pub enable_dev_routes: bool,
    pub fan_out: FanOut,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            seed_on_startup: true,
            enable_dev_routes: true,
            fan_out: FanOut::Sequential,
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset keys take their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let bind_addr = match lookup("BIND_ADDR") {
            Some(raw) => raw.trim().parse().map_err(|e| ConfigError::Invalid {
                key: "BIND_ADDR",
                message: format!("{raw:?}: {e}"),
            })?,
            None => {
                tracing::debug!("BIND_ADDR not set; using {DEFAULT_BIND_ADDR}");
                defaults.bind_addr
            }
        };

        let seed_on_startup = parse_bool(&lookup, "SEED_ON_STARTUP", defaults.seed_on_startup)?;
        let enable_dev_routes =
            parse_bool(&lookup, "ENABLE_DEV_ROUTES", defaults.enable_dev_routes)?;

        let fan_out = match lookup("RESOURCE_FAN_OUT") {
            Some(raw) => raw.parse().map_err(|e| ConfigError::Invalid {
                key: "RESOURCE_FAN_OUT",
                message: format!("{e}"),
            })?,
            None => defaults.fan_out,
        };

        Ok(Self {
            bind_addr,
            seed_on_startup,
            enable_dev_routes,
            fan_out,
        })
    }
}

fn parse_bool<F>(lookup: &F, key: &'static str, default: bool) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid {
            key,
            message: format!("expected a boolean, got {raw:?}"),
        }),
    }
}
