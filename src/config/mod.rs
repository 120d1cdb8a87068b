//! Configuration management
//!
//! This module handles loading and parsing configuration for the Tourhub frontend.
//! Configuration is read from a config.yml file; when the file is missing the
//! built-in defaults are used so a bare checkout can start against a local backend.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Backend HTTP service configuration
    #[serde(default)]
    pub backend: BackendConfig,
    /// Cache configuration
    #[serde(default)]
    pub cache: CacheConfig,
    /// Session configuration
    #[serde(default)]
    pub session: SessionConfig,
    /// Site configuration
    #[serde(default)]
    pub site: SiteConfig,
}

impl Config {
    /// Load configuration from a YAML file.
    ///
    /// A missing file is not an error; defaults apply. A present but
    /// malformed file is.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config: Self = serde_yaml::from_str(&raw)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;
        Ok(config)
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind to
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
    /// CORS allowed origin (for the JSON endpoints)
    #[serde(default = "default_cors_origin")]
    pub cors_origin: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origin: default_cors_origin(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_cors_origin() -> String {
    "http://localhost:3000".to_string()
}

/// Backend HTTP service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the backend API
    #[serde(default = "default_backend_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
    /// Revalidation window for cached list reads, in seconds
    #[serde(default = "default_revalidate")]
    pub revalidate_seconds: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_backend_url(),
            timeout_seconds: default_timeout(),
            revalidate_seconds: default_revalidate(),
        }
    }
}

fn default_backend_url() -> String {
    "http://localhost:9000".to_string()
}

fn default_timeout() -> u64 {
    10
}

fn default_revalidate() -> u64 {
    3600
}

/// Cache configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Maximum number of cached entries
    #[serde(default = "default_capacity")]
    pub capacity: u64,
    /// Cache TTL in seconds
    #[serde(default = "default_ttl")]
    pub ttl_seconds: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            ttl_seconds: default_ttl(),
        }
    }
}

fn default_capacity() -> u64 {
    10_000
}

fn default_ttl() -> u64 {
    3600
}

/// Session configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Name of the session cookie
    #[serde(default = "default_session_cookie")]
    pub cookie_name: String,
    /// Session expiration in days
    #[serde(default = "default_expiration_days")]
    pub expiration_days: i64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: default_session_cookie(),
            expiration_days: default_expiration_days(),
        }
    }
}

fn default_session_cookie() -> String {
    "session".to_string()
}

fn default_expiration_days() -> i64 {
    7
}

/// Site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Display name of the site
    #[serde(default = "default_site_name")]
    pub name: String,
    /// Name of the locale cookie
    #[serde(default = "default_locale_cookie")]
    pub locale_cookie: String,
    /// Fallback locale when the cookie is absent
    #[serde(default = "default_locale")]
    pub default_locale: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: default_site_name(),
            locale_cookie: default_locale_cookie(),
            default_locale: default_locale(),
        }
    }
}

fn default_site_name() -> String {
    "Tourhub".to_string()
}

fn default_locale_cookie() -> String {
    "locale".to_string()
}

fn default_locale() -> String {
    "ja".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.backend.revalidate_seconds, 3600);
        assert_eq!(config.session.cookie_name, "session");
        assert_eq!(config.session.expiration_days, 7);
        assert_eq!(config.site.default_locale, "ja");
        assert_eq!(config.site.locale_cookie, "locale");
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let config = Config::load(Path::new("does-not-exist.yml")).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.backend.base_url, "http://localhost:9000");
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let yaml = r#"
server:
  port: 3001
backend:
  base_url: "https://api.example.com"
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.server.port, 3001);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.backend.base_url, "https://api.example.com");
        assert_eq!(config.backend.timeout_seconds, 10);
        assert_eq!(config.cache.capacity, 10_000);
    }
}
