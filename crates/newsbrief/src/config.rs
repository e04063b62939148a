//! Application configuration.

use derive_getters::Getters;
use newsbrief_cache::DigestCacheConfig;
use newsbrief_core::Category;
use newsbrief_error::{ConfigError, NewsbriefResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration loaded from a TOML file.
///
/// Every field has a default, so an empty file (or no file at all) is a
/// valid configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Getters)]
pub struct NewsbriefConfig {
    /// Digest cache settings
    #[serde(default)]
    cache: DigestCacheConfig,
    /// Default category for bare commands
    #[serde(default)]
    default_category: Category,
    /// Stories per digest
    #[serde(default = "default_story_count")]
    story_count: usize,
    /// Per-request timeout in seconds (unset means the HTTP layer default)
    #[serde(default)]
    request_timeout_seconds: Option<u64>,
}

fn default_story_count() -> usize {
    5
}

impl Default for NewsbriefConfig {
    fn default() -> Self {
        Self {
            cache: DigestCacheConfig::default(),
            default_category: Category::default(),
            story_count: default_story_count(),
            request_timeout_seconds: None,
        }
    }
}

impl NewsbriefConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML configuration file
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] (wrapped) if the file cannot be read or
    /// the TOML is invalid.
    pub fn from_file(path: impl AsRef<Path>) -> NewsbriefResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::new(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config: Self = toml::from_str(&contents)
            .map_err(|e| ConfigError::new(format!("Invalid TOML in {}: {}", path.display(), e)))?;
        Ok(config)
    }
}
