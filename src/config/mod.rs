//! Configuration module for the ShoreSquad backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Pre-shared key for API authentication (required in production)
    pub api_psk: Option<String>,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// How long a notification stays visible before auto-dismissal
    pub notification_ttl_ms: u64,
    /// Live weather API endpoint (reserved; no fetch is performed yet)
    pub weather_api_url: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let api_psk = env::var("SHORESQUAD_API_PSK").ok();

        let bind_addr = env::var("SHORESQUAD_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()
            .expect("Invalid SHORESQUAD_BIND_ADDR format");

        let log_level = env::var("SHORESQUAD_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let notification_ttl_ms = env::var("SHORESQUAD_NOTIFICATION_TTL_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3000);

        let weather_api_url = env::var("SHORESQUAD_WEATHER_URL").ok();

        Self {
            api_psk,
            bind_addr,
            log_level,
            notification_ttl_ms,
            weather_api_url,
        }
    }
}
