//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::time::Duration;

use crate::cache::DEFAULT_CACHE_TTL;

/// Shortest allowed interval between cache sweeps, in seconds
pub const MIN_CLEANUP_INTERVAL: u64 = 1;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Lifetime of a cached item in seconds
    pub cache_ttl: u64,
    /// Interval in seconds between expired cache entry sweeps
    pub cleanup_interval: u64,
    /// Bearer tokens accepted on the item endpoints
    pub api_tokens: Vec<String>,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 8000)
    /// - `CACHE_TTL` - Cached item lifetime in seconds (default: 900)
    /// - `CLEANUP_INTERVAL` - Cache sweep frequency in seconds (default: 60, minimum: 1)
    /// - `API_TOKENS` - Comma-separated bearer tokens (default: none)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            cache_ttl: parse_var("CACHE_TTL").unwrap_or(defaults.cache_ttl),
            cleanup_interval: parse_var("CLEANUP_INTERVAL").unwrap_or(defaults.cleanup_interval),
            api_tokens: env::var("API_TOKENS")
                .map(|v| parse_tokens(&v))
                .unwrap_or_default(),
        }
        .normalized()
    }

    /// Clamps values that would misbehave at runtime.
    pub fn normalized(mut self) -> Self {
        self.cleanup_interval = self.cleanup_interval.max(MIN_CLEANUP_INTERVAL);
        self
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 8000,
            cache_ttl: DEFAULT_CACHE_TTL.as_secs(),
            cleanup_interval: 60,
            api_tokens: Vec::new(),
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

/// Splits a comma-separated token list, dropping blanks.
fn parse_tokens(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server_port, 8000);
        assert_eq!(config.cache_ttl, 900);
        assert_eq!(config.cleanup_interval, 60);
        assert!(config.api_tokens.is_empty());
        assert_eq!(config.cache_ttl(), Duration::from_secs(15 * 60));
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("SERVER_PORT");
        env::remove_var("CACHE_TTL");
        env::remove_var("CLEANUP_INTERVAL");
        env::remove_var("API_TOKENS");

        let config = Config::from_env();
        assert_eq!(config.server_port, 8000);
        assert_eq!(config.cache_ttl, 900);
        assert_eq!(config.cleanup_interval, 60);
        assert!(config.api_tokens.is_empty());
    }

    #[test]
    fn test_zero_cleanup_interval_is_clamped() {
        let config = Config {
            cleanup_interval: 0,
            ..Config::default()
        }
        .normalized();
        assert_eq!(config.cleanup_interval, MIN_CLEANUP_INTERVAL);

        let config = Config::default().normalized();
        assert_eq!(config.cleanup_interval, 60);
    }

    #[test]
    fn test_parse_tokens() {
        assert_eq!(parse_tokens("a, b,,c "), vec!["a", "b", "c"]);
        assert!(parse_tokens(" , ").is_empty());
    }
}
