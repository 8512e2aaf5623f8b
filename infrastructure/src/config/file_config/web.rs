//! Web API configuration from TOML (`[web]` section)

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// Raw web API configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileWebConfig {
    /// Listen address for `--serve`
    pub bind: String,
}

impl Default for FileWebConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:5000".to_string(),
        }
    }
}

impl FileWebConfig {
    pub fn socket_addr(&self) -> Option<SocketAddr> {
        self.bind.parse().ok()
    }
}
