//! Storefront configuration.
//!
//! The only deployment-specific value the components need is the base URL of
//! the static asset host that serves product images.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable holding the asset host base URL.
pub const ASSET_BASE_URL_ENV: &str = "SHOPFRONT_ASSET_BASE_URL";

/// Asset host used when nothing is configured (local backend).
pub const DEFAULT_ASSET_BASE_URL: &str = "http://localhost:5000";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("asset base URL must not be empty")]
    EmptyAssetBaseUrl,
}

/// Where the effective configuration came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigSource {
    /// Process environment at runtime.
    Runtime,
    /// Environment captured at compile time (WASM builds).
    Build,
    Default,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    asset_base_url: String,
}

impl StorefrontConfig {
    /// Build a config from an explicit asset host.
    ///
    /// Surrounding whitespace is trimmed; the URL is otherwise kept verbatim,
    /// including any trailing slash, since image URLs are formed by plain
    /// concatenation.
    pub fn new(asset_base_url: impl Into<String>) -> Result<Self, ConfigError> {
        let asset_base_url = asset_base_url.into();
        let trimmed = asset_base_url.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::EmptyAssetBaseUrl);
        }
        Ok(Self {
            asset_base_url: trimmed.to_string(),
        })
    }

    /// Resolve the config from the runtime environment, then the build
    /// environment, then the default.
    pub fn from_env() -> Self {
        let (config, source) = Self::resolve(
            std::env::var(ASSET_BASE_URL_ENV).ok(),
            option_env!("SHOPFRONT_ASSET_BASE_URL"),
        );
        tracing::info!(
            asset_base_url = %config.asset_base_url,
            source = ?source,
            "storefront config loaded"
        );
        config
    }

    /// First valid candidate wins; blank values are skipped with a warning.
    pub fn resolve(runtime: Option<String>, build: Option<&str>) -> (Self, ConfigSource) {
        if let Some(raw) = runtime {
            match Self::new(raw) {
                Ok(config) => return (config, ConfigSource::Runtime),
                Err(err) => tracing::warn!("ignoring {ASSET_BASE_URL_ENV} from environment: {err}"),
            }
        }
        if let Some(raw) = build {
            match Self::new(raw) {
                Ok(config) => return (config, ConfigSource::Build),
                Err(err) => tracing::warn!("ignoring build-time {ASSET_BASE_URL_ENV}: {err}"),
            }
        }
        (Self::default(), ConfigSource::Default)
    }

    pub fn asset_base_url(&self) -> &str {
        &self.asset_base_url
    }

    /// Absolute URL of an asset: base + path, concatenated as-is.
    pub fn asset_url(&self, path: &str) -> String {
        format!("{}{}", self.asset_base_url, path)
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            asset_base_url: DEFAULT_ASSET_BASE_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_base_url() {
        assert_eq!(
            StorefrontConfig::new("   ").unwrap_err(),
            ConfigError::EmptyAssetBaseUrl
        );
    }

    #[test]
    fn asset_url_is_plain_concatenation() {
        let config = StorefrontConfig::new("https://cdn.example.com").unwrap();
        assert_eq!(
            config.asset_url("/uploads/a.png"),
            "https://cdn.example.com/uploads/a.png"
        );

        let slashed = StorefrontConfig::new("https://cdn.example.com/").unwrap();
        assert_eq!(
            slashed.asset_url("/uploads/a.png"),
            "https://cdn.example.com//uploads/a.png"
        );
    }

    #[test]
    fn runtime_value_wins_over_build_value() {
        let (config, source) =
            StorefrontConfig::resolve(Some("https://rt".into()), Some("https://build"));
        assert_eq!(config.asset_base_url(), "https://rt");
        assert_eq!(source, ConfigSource::Runtime);
    }

    #[test]
    fn blank_runtime_value_falls_through() {
        let (config, source) = StorefrontConfig::resolve(Some(" ".into()), Some("https://build"));
        assert_eq!(config.asset_base_url(), "https://build");
        assert_eq!(source, ConfigSource::Build);

        let (config, source) = StorefrontConfig::resolve(None, None);
        assert_eq!(config.asset_base_url(), DEFAULT_ASSET_BASE_URL);
        assert_eq!(source, ConfigSource::Default);
    }
}
