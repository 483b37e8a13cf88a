use std::path::Path;

use config::{Config, Environment, File};
use media::{DEFAULT_STORAGE_PREFIX, PhotoResolver};
use serde::Deserialize;

use crate::error::ListingError;

/// Photo handling configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct MediaConfig {
    /// Root-relative prefix prepended to non-absolute photo paths.
    /// Default: "/storage/".
    #[serde(default = "default_storage_prefix")]
    pub storage_prefix: String,
    /// Image rendering collaborators show when a record resolves to no
    /// photo. No default: absent means the collaborator renders its own
    /// placeholder.
    #[serde(default)]
    pub fallback_photo_url: Option<String>,
}

/// Browse-page configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct ListingConfig {
    /// Items per page for client-side pagination. Default: 20.
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub media: MediaConfig,
    #[serde(default)]
    pub listing: ListingConfig,
}

fn default_storage_prefix() -> String {
    DEFAULT_STORAGE_PREFIX.into()
}

fn default_per_page() -> u64 {
    20
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            storage_prefix: default_storage_prefix(),
            fallback_photo_url: None,
        }
    }
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            per_page: default_per_page(),
        }
    }
}

impl MediaConfig {
    /// Resolver configured with this storage prefix.
    pub fn resolver(&self) -> PhotoResolver {
        PhotoResolver::new(self.storage_prefix.clone())
    }
}

impl AppConfig {
    /// Load from `config/config.toml` (optional) with environment overrides
    /// (e.g. `HOMEFIND__MEDIA__STORAGE_PREFIX`).
    pub fn load() -> Result<Self, ListingError> {
        let s = Config::builder()
            // Load from config/config.toml
            .add_source(File::with_name("config/config").required(false))
            // Override from environment (e.g., HOMEFIND__MEDIA__STORAGE_PREFIX)
            .add_source(Environment::with_prefix("HOMEFIND").separator("__"))
            .build()?;

        Ok(s.try_deserialize()?)
    }

    /// Load from an explicit config file, without environment overrides.
    pub fn load_from(path: &Path) -> Result<Self, ListingError> {
        let s = Config::builder().add_source(File::from(path)).build()?;

        Ok(s.try_deserialize()?)
    }
}
