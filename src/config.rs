// src/config.rs

use std::env;

/// Runtime configuration, resolved once at startup from the environment.
///
/// The grouped report endpoints include every ticket regardless of status
/// unless `INCLUDE_CANCELLED=false`, in which case rows whose status equals
/// `CANCELLED_STATUS` are excluded from counts and sums.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_host: String,
    pub port: u16,
    pub include_cancelled: bool,
    pub cancelled_status: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let bind_host = env::var("BIND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port: u16 = env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(8080);
        let include_cancelled = env::var("INCLUDE_CANCELLED")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(true);
        let cancelled_status =
            env::var("CANCELLED_STATUS").unwrap_or_else(|_| "cancelado".to_string());

        AppConfig { bind_host, port, include_cancelled, cancelled_status }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            bind_host: "0.0.0.0".to_string(),
            port: 8080,
            include_cancelled: true,
            cancelled_status: "cancelado".to_string(),
        }
    }
}
