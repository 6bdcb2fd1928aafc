//! Client configuration.
//!
//! Endpoints, cache location and TTL are explicit configuration passed to
//! [`crate::EnturClient::new`] rather than ambient globals, so hosts (and
//! tests) can point the client elsewhere.

use std::path::PathBuf;
use std::time::Duration;

/// Default journey-planner GraphQL endpoint.
const DEFAULT_API_ENDPOINT: &str = "https://api.entur.io/journey-planner/v3/graphql";

/// Default geocoder/autocomplete endpoint.
const DEFAULT_GEOCODER_ENDPOINT: &str = "https://api.entur.io/geocoder/v1/autocomplete";

/// Default `ET-Client-Name` header value. Hosts should set their own.
const DEFAULT_CLIENT_NAME: &str = "ruter-client-rs";

/// Default cache TTL: 10 minutes.
const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(600);

/// Default request timeout. The APIs specify none, so we pick a
/// conservative bound rather than blocking forever.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the Entur client.
#[derive(Debug, Clone)]
pub struct Config {
    /// Value sent as the `ET-Client-Name` header on every request.
    pub client_name: String,
    /// Journey-planner GraphQL endpoint.
    pub api_endpoint: String,
    /// Geocoder/autocomplete endpoint.
    pub geocoder_endpoint: String,
    /// Directory holding cached responses, one file per stop place.
    pub cache_dir: PathBuf,
    /// How long a cached response stays valid.
    pub cache_ttl: Duration,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Config {
    /// Create a config identifying the calling application.
    ///
    /// Entur asks API consumers to send a stable `ET-Client-Name`.
    pub fn new(client_name: impl Into<String>) -> Self {
        Self {
            client_name: client_name.into(),
            api_endpoint: DEFAULT_API_ENDPOINT.to_string(),
            geocoder_endpoint: DEFAULT_GEOCODER_ENDPOINT.to_string(),
            cache_dir: default_cache_dir(),
            cache_ttl: DEFAULT_CACHE_TTL,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom journey-planner endpoint (for testing).
    pub fn with_api_endpoint(mut self, url: impl Into<String>) -> Self {
        self.api_endpoint = url.into();
        self
    }

    /// Set a custom geocoder endpoint (for testing).
    pub fn with_geocoder_endpoint(mut self, url: impl Into<String>) -> Self {
        self.geocoder_endpoint = url.into();
        self
    }

    /// Set a custom cache directory.
    pub fn with_cache_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cache_dir = dir.into();
        self
    }

    /// Set a custom cache TTL.
    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    /// Set a custom request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_CLIENT_NAME)
    }
}

/// Cache directory per the XDG convention: `$XDG_CACHE_HOME/ruter-client`,
/// falling back to `$HOME/.cache/ruter-client`, then a relative path for
/// environments with neither variable set.
fn default_cache_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os("XDG_CACHE_HOME")
        && !dir.is_empty()
    {
        return PathBuf::from(dir).join("ruter-client");
    }
    if let Some(home) = std::env::var_os("HOME")
        && !home.is_empty()
    {
        return PathBuf::from(home).join(".cache").join("ruter-client");
    }
    PathBuf::from(".cache").join("ruter-client")
}
