//! Runtime configuration for the dashboard core.

use rolegate_client::DEFAULT_BASE_URL;

/// Environment variable overriding the remote API base URL.
pub const API_URL_ENV: &str = "ROLEGATE_API_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the remote user/role store.
    pub api_base_url: String,
}

impl Config {
    /// Read configuration from the environment, falling back to the
    /// deployed store.
    pub fn from_env() -> Self {
        let api_base_url =
            std::env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self { api_base_url }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_deployed_store() {
        assert_eq!(Config::default().api_base_url, DEFAULT_BASE_URL);
    }
}
