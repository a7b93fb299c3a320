//! Startup configuration passed from the page as JSON.

use serde::Deserialize;

use crate::session::DEFAULT_SCORE_STEP;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("asset_root must not be empty")]
    EmptyAssetRoot,
}

/// Explorer configuration.
///
/// Every field has a default, so `{}` is a valid config.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    /// Directory the asset server loads textures and fonts from.
    pub asset_root: String,
    /// Font used for world-space labels. Falls back to the built-in font.
    pub font: Option<String>,
    /// Points added for each level selection.
    pub score_step: u32,
}

impl ExplorerConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        if config.asset_root.trim().is_empty() {
            return Err(ConfigError::EmptyAssetRoot);
        }
        Ok(config)
    }
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            asset_root: "assets".to_string(),
            font: None,
            score_step: DEFAULT_SCORE_STEP,
        }
    }
}
