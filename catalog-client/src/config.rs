//! Client configuration

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";
/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client configuration for connecting to the catalog API
///
/// # Environment variables
///
/// | Variable              | Default                     |
/// |-----------------------|-----------------------------|
/// | CATALOG_API_URL       | http://localhost:8080/api   |
/// | CATALOG_API_TIMEOUT   | 30 (seconds)                |
/// | CATALOG_API_TOKEN     | unset                       |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL every endpoint path is joined to (e.g., "http://localhost:8080/api")
    pub base_url: String,

    /// Bearer token sent with every request
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Load configuration from the environment, reading `.env` first if present
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new(
            lookup("CATALOG_API_URL")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        );
        if let Some(timeout) = lookup("CATALOG_API_TIMEOUT").and_then(|v| v.trim().parse().ok()) {
            config.timeout = timeout;
        }
        config.token = lookup("CATALOG_API_TOKEN").filter(|v| !v.trim().is_empty());
        config
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Full URL for an endpoint path
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, 30);
        assert!(config.token.is_none());
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ClientConfig::new("http://catalog.local/api/");
        assert_eq!(config.base_url, "http://catalog.local/api");
        assert_eq!(
            config.endpoint("/categories/tree"),
            "http://catalog.local/api/categories/tree"
        );
        assert_eq!(
            config.endpoint("products"),
            "http://catalog.local/api/products"
        );
    }

    #[test]
    fn test_from_lookup() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("CATALOG_API_URL", "https://shop.example.com/api"),
            ("CATALOG_API_TIMEOUT", "5"),
            ("CATALOG_API_TOKEN", "secret"),
        ]);
        let config = ClientConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(config.base_url, "https://shop.example.com/api");
        assert_eq!(config.timeout, 5);
        assert_eq!(config.token.as_deref(), Some("secret"));
    }

    #[test]
    fn test_from_lookup_ignores_bad_values() {
        let vars: HashMap<&str, &str> =
            HashMap::from([("CATALOG_API_TIMEOUT", "soon"), ("CATALOG_API_TOKEN", " ")]);
        let config = ClientConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT_SECS);
        assert!(config.token.is_none());
    }

    #[test]
    fn test_builders() {
        let config = ClientConfig::new("http://x").with_token("t").with_timeout(3);
        assert_eq!(config.token.as_deref(), Some("t"));
        assert_eq!(config.timeout, 3);
    }
}
