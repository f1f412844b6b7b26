// Configuration for Proxy6Client

use crate::constants::DEFAULT_BASE_URL;

/// Configuration for the Proxy6 HTTP client
#[derive(Clone, Debug)]
pub struct Proxy6ClientConfig {
    /// Personal API key, issued in the vendor's control panel
    pub api_key: String,
    /// Endpoint prefix the key and method name are appended to
    pub base_url: String,
    /// Connection timeout in milliseconds (default: 5000)
    pub connect_timeout_ms: u64,
    /// Read timeout in milliseconds (default: 30000)
    pub read_timeout_ms: u64,
}

impl Default for Proxy6ClientConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout_ms: 5000,
            read_timeout_ms: 30000,
        }
    }
}

impl Proxy6ClientConfig {
    /// Create a new config with the given API key
    pub fn new(api_key: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            ..Default::default()
        }
    }

    /// Override the endpoint prefix (e.g. to point at a mock server)
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    /// Set timeouts
    pub fn with_timeouts(mut self, connect_ms: u64, read_ms: u64) -> Self {
        self.connect_timeout_ms = connect_ms;
        self.read_timeout_ms = read_ms;
        self
    }
}
