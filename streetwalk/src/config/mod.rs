//! Configuration for Streetwalk.
//!
//! The Mapillary access token is read once, when configuration is built,
//! and handed explicitly to [`ImageryClient`](crate::imagery::ImageryClient).
//! There is no process-wide credential.
//!
//! # Sources
//!
//! Values are resolved in this order (first match wins):
//!
//! 1. Environment: `MAPILLARY_ACCESS_TOKEN`, then `VITE_mapillary_Access_Token`
//! 2. Config file: `~/.config/streetwalk/config.ini`
//! 3. Built-in defaults (empty token, public Graph API endpoint)
//!
//! # Config File Format
//!
//! ```ini
//! [mapillary]
//! access_token = MLY|1234|abcd
//! base_url = https://graph.mapillary.com
//!
//! [walker]
//! start_lat = -29.378889
//! start_lng = -50.876111
//! start_bearing = 90
//! ```

mod error;
mod file;
mod token;

pub use error::ConfigError;
pub use file::{config_file_path, ConfigFile, MapillarySettings, WalkerSettings};
pub use token::AccessToken;

/// Public Mapillary Graph API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://graph.mapillary.com";

/// Primary environment variable holding the access token.
pub const TOKEN_ENV_VAR: &str = "MAPILLARY_ACCESS_TOKEN";

/// Legacy variable name used by the web front-end build.
pub const LEGACY_TOKEN_ENV_VAR: &str = "VITE_mapillary_Access_Token";

/// Settings needed by the imagery client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageryConfig {
    /// Credential appended to every request.
    pub access_token: AccessToken,

    /// Graph API root, without the `/images` path.
    pub base_url: String,
}

impl Default for ImageryConfig {
    fn default() -> Self {
        Self {
            access_token: AccessToken::default(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ImageryConfig {
    /// Create a config for the public endpoint with the given token.
    pub fn new(access_token: impl Into<AccessToken>) -> Self {
        Self {
            access_token: access_token.into(),
            ..Default::default()
        }
    }

    /// Set the API root (useful for tests and proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Build the config from process environment variables.
    ///
    /// A missing token is not an error; the empty token is used instead.
    pub fn from_env() -> Self {
        Self::from_lookup(env_lookup)
    }

    /// Build the config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        ConfigFile::default().imagery_config(lookup)
    }
}

/// Reads a process environment variable.
pub fn env_lookup(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Resolves the token from the environment variables, in priority order.
pub(crate) fn token_from_lookup<F>(lookup: &F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    [TOKEN_ENV_VAR, LEGACY_TOKEN_ENV_VAR]
        .iter()
        .filter_map(|name| lookup(name))
        .find(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = ImageryConfig::default();
        assert_eq!(config.access_token.as_str(), "");
        assert_eq!(config.base_url, "https://graph.mapillary.com");
    }

    #[test]
    fn test_primary_env_var() {
        let config = ImageryConfig::from_lookup(lookup_from(&[
            ("MAPILLARY_ACCESS_TOKEN", "MLY|1|primary"),
            ("VITE_mapillary_Access_Token", "MLY|2|legacy"),
        ]));
        assert_eq!(config.access_token.as_str(), "MLY|1|primary");
    }

    #[test]
    fn test_legacy_env_var_fallback() {
        let config = ImageryConfig::from_lookup(lookup_from(&[
            ("MAPILLARY_ACCESS_TOKEN", ""),
            ("VITE_mapillary_Access_Token", "MLY|2|legacy"),
        ]));
        assert_eq!(config.access_token.as_str(), "MLY|2|legacy");
    }

    #[test]
    fn test_missing_token_is_empty() {
        let config = ImageryConfig::from_lookup(lookup_from(&[]));
        assert!(config.access_token.is_empty());
    }

    #[test]
    fn test_builder() {
        let config = ImageryConfig::new("tok").with_base_url("http://localhost:8080");
        assert_eq!(config.access_token.as_str(), "tok");
        assert_eq!(config.base_url, "http://localhost:8080");
    }
}
