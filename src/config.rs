//! Configuration loading and constants.
//!
//! The listener address and the response are fixed at compile time. The
//! optional TOML file only carries the `[logging]` section; without it the
//! responder logs in text format.

use const_format::formatcp;
use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::Path;

// =============================================================================
// Health Response
// =============================================================================

/// Body returned for every request, regardless of method, path or payload
pub const HEALTHY_BODY: &str = "CoBank Backend Service - Healthy";

// =============================================================================
// Bind Address
// =============================================================================

/// Listen on all interfaces
pub const BIND_HOST: Ipv4Addr = Ipv4Addr::UNSPECIFIED;

/// Fixed liveness port
pub const BIND_PORT: u16 = 5000;

pub const BIND_ADDR: SocketAddr = SocketAddr::new(IpAddr::V4(BIND_HOST), BIND_PORT);

/// Human-readable form of `BIND_ADDR`
pub const BIND_ADDR_STR: &str = formatcp!("0.0.0.0:{}", BIND_PORT);

// =============================================================================
// Logging Defaults
// =============================================================================

/// Default log filter when neither --log-level nor RUST_LOG is set
pub const DEFAULT_LOG_FILTER: &str = "cobank_backend=info";

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
}

impl AppConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}
