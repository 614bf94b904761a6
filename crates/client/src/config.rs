//! Client configuration.

/// GraphQL endpoint used when nothing else is configured.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:9000/graphql";

/// Environment variable overriding the endpoint.
pub const ENDPOINT_ENV: &str = "JOBBOARD_GRAPHQL_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub endpoint: String,
}

impl ClientConfig {
    /// Read the endpoint from `JOBBOARD_GRAPHQL_URL`, falling back to the default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`ClientConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        match lookup(ENDPOINT_ENV) {
            Some(endpoint) if !endpoint.trim().is_empty() => Self::default().with_endpoint(endpoint),
            _ => Self::default(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into().trim().to_string();
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}
