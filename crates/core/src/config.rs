//! Client configuration
//!
//! Connection settings for the resource service. Loading these from files or
//! the environment is the embedding application's concern; this module only
//! defines the shape and the public default host.

use serde::{Deserialize, Serialize};

/// Default resource-service host
pub const DEFAULT_RS_HOST: &str = "http://rs.qiniu.com";

/// Connection settings for the resource service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RsConfig {
    /// Base URL of the resource-service host, without a trailing slash.
    /// Request paths are concatenated onto it verbatim.
    #[serde(default = "default_rs_host")]
    pub rs_host: String,
}

fn default_rs_host() -> String {
    DEFAULT_RS_HOST.to_string()
}

impl Default for RsConfig {
    fn default() -> Self {
        Self {
            rs_host: default_rs_host(),
        }
    }
}

impl RsConfig {
    /// Config pointing at a specific host
    pub fn with_host(rs_host: impl Into<String>) -> Self {
        Self {
            rs_host: rs_host.into(),
        }
    }
}
