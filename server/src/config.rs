//! Server configuration, read once at startup.

use std::env;

use spacely_core::catalog::DEFAULT_CATALOG_URL;

/// Runtime configuration for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind, e.g. "0.0.0.0:8080".
    pub bind_addr: String,
    /// URL of the furniture catalog CSV.
    pub catalog_url: String,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `SPACELY_BIND_ADDR` (default: "0.0.0.0:8080")
    /// - `SPACELY_CATALOG_URL` (default: the published catalog CSV)
    pub fn from_env() -> Self {
        let bind_addr =
            env::var("SPACELY_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        let catalog_url =
            env::var("SPACELY_CATALOG_URL").unwrap_or_else(|_| DEFAULT_CATALOG_URL.to_string());

        Self {
            bind_addr,
            catalog_url,
        }
    }
}
