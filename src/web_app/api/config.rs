// web_app/api/config.rs - Environment configuration
//
// Values come from the process environment, optionally seeded from a .env
// file. Leptos site settings (address, site root) are read separately from
// Cargo.toml metadata by leptos_config.

use std::env;
use std::time::Duration;

/// Remote books backend
pub const DEFAULT_CATALOG_URL: &str = "https://books-backend.p.goit.global/api/books";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Endpoint returning the full book catalog
    pub catalog_url: String,
    /// Request timeout for the catalog call; `None` waits indefinitely
    pub catalog_timeout: Option<Duration>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            catalog_timeout: None,
        }
    }
}

impl AppConfig {
    /// Load from `.env` and the environment
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let catalog_url = lookup("CATALOG_API_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CATALOG_URL.to_string());

        let catalog_timeout = lookup("CATALOG_TIMEOUT_SECS").and_then(|raw| match raw.trim().parse::<u64>() {
            Ok(0) => None,
            Ok(secs) => Some(Duration::from_secs(secs)),
            Err(e) => {
                tracing::warn!("Ignoring CATALOG_TIMEOUT_SECS='{}': {}", raw, e);
                None
            }
        });

        Self {
            catalog_url,
            catalog_timeout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup(&[]));
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.catalog_url, DEFAULT_CATALOG_URL);
        assert!(config.catalog_timeout.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            ("CATALOG_API_URL", "http://localhost:9000/books"),
            ("CATALOG_TIMEOUT_SECS", "15"),
        ]));
        assert_eq!(config.catalog_url, "http://localhost:9000/books");
        assert_eq!(config.catalog_timeout, Some(Duration::from_secs(15)));
    }

    #[test]
    fn test_blank_url_and_bad_timeout_fall_back() {
        let config = AppConfig::from_lookup(lookup(&[
            ("CATALOG_API_URL", "  "),
            ("CATALOG_TIMEOUT_SECS", "soon"),
        ]));
        assert_eq!(config.catalog_url, DEFAULT_CATALOG_URL);
        assert!(config.catalog_timeout.is_none());
    }

    #[test]
    fn test_zero_timeout_means_none() {
        let config = AppConfig::from_lookup(lookup(&[("CATALOG_TIMEOUT_SECS", "0")]));
        assert!(config.catalog_timeout.is_none());
    }
}
