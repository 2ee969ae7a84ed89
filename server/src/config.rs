use std::net::SocketAddr;

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub web: Web,
    pub upstream: Upstream,
    pub cache: Cache,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Web {
    pub host: SocketAddr,
}

impl Default for Web {
    fn default() -> Self {
        Self {
            host: SocketAddr::from(([0, 0, 0, 0], 8081)),
        }
    }
}

/// Where the Pokémon data comes from.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Upstream {
    pub base_url: String,
    /// Deadline for a single outbound request. Unset means the transport default.
    pub timeout_secs: Option<u64>,
}

impl Default for Upstream {
    fn default() -> Self {
        Self {
            base_url: "https://pokeapi.co".to_string(),
            timeout_secs: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Cache {
    /// Lifetime in seconds advertised through `Cache-Control`.
    pub max_age: u64,
    /// When off, `If-None-Match` is ignored and every request gets a full body.
    pub etag_validation: bool,
}

impl Default for Cache {
    fn default() -> Self {
        Self {
            max_age: 3600,
            etag_validation: true,
        }
    }
}

impl Cache {
    pub fn header_value(&self) -> String {
        format!("public, max-age={}, must-revalidate", self.max_age)
    }
}
