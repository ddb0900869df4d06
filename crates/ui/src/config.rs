//! Storefront configuration (environment driven).

use std::path::PathBuf;

use thiserror::Error;

pub const ENV_ASSET_BASE_URL: &str = "STOREFRONT_ASSET_BASE_URL";
pub const ENV_CATALOG_PATH: &str = "STOREFRONT_CATALOG_PATH";
pub const ENV_CARD_WIDTH: &str = "STOREFRONT_CARD_WIDTH";
pub const ENV_CARD_HEIGHT: &str = "STOREFRONT_CARD_HEIGHT";

pub const DEFAULT_CARD_WIDTH: &str = "250px";
pub const DEFAULT_CARD_HEIGHT: &str = "300px";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key}={value:?} is not a CSS length")]
    InvalidLength { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Prefix for relative image paths.
    pub asset_base_url: String,
    /// Product file; `None` uses the bundled mock catalog.
    pub catalog_path: Option<PathBuf>,
    pub card_width: String,
    pub card_height: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            asset_base_url: String::new(),
            catalog_path: None,
            card_width: DEFAULT_CARD_WIDTH.to_string(),
            card_height: DEFAULT_CARD_HEIGHT.to_string(),
        }
    }
}

impl StorefrontConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (tests pass a map).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let asset_base_url = lookup(ENV_ASSET_BASE_URL).unwrap_or_else(|| {
            tracing::warn!("{ENV_ASSET_BASE_URL} not set; image paths are used as-is");
            defaults.asset_base_url.clone()
        });

        let catalog_path = lookup(ENV_CATALOG_PATH)
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let card_width = match lookup(ENV_CARD_WIDTH) {
            Some(raw) => css_length(ENV_CARD_WIDTH, &raw)?,
            None => defaults.card_width,
        };
        let card_height = match lookup(ENV_CARD_HEIGHT) {
            Some(raw) => css_length(ENV_CARD_HEIGHT, &raw)?,
            None => defaults.card_height,
        };

        Ok(Self {
            asset_base_url,
            catalog_path,
            card_width,
            card_height,
        })
    }

    /// Resolve an image reference against the asset base URL.
    ///
    /// Absolute URLs pass through untouched.
    pub fn image_src(&self, image_url: &str) -> String {
        let base = self.asset_base_url.trim_end_matches('/');
        if base.is_empty() || image_url.starts_with("http://") || image_url.starts_with("https://") {
            return image_url.to_string();
        }
        format!("{}/{}", base, image_url.trim_start_matches('/'))
    }
}

/// Accepts `250px`, `18rem`, `100%`, or a bare number (taken as pixels).
fn css_length(key: &'static str, raw: &str) -> Result<String, ConfigError> {
    let value = raw.trim();
    let invalid = || ConfigError::InvalidLength {
        key,
        value: raw.to_string(),
    };

    let digits_end = value
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(value.len());
    let (number, unit) = value.split_at(digits_end);

    if number.is_empty() || number.parse::<f64>().is_err() {
        return Err(invalid());
    }
    match unit {
        "" => Ok(format!("{number}px")),
        "px" | "rem" | "em" | "%" | "vw" | "vh" => Ok(value.to_string()),
        _ => Err(invalid()),
    }
}
