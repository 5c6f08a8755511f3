//! Configuration model loaded from external sources.

use serde::Deserialize;

fn default_timeout_secs() -> u64 {
    10
}

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// Base URL of the remote catalog service.
    pub catalog_url: String,
    pub templates_dir: String,
    pub secret: String,
    /// Per-request timeout towards the catalog service.
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
}
