//! Configuration file support for velocity.
//!
//! Loads optional `.velocity/config.toml` from the project root.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;
use velocity_storefront::{LandingContent, MountState, RenderOptions, ViewerSession};

/// Root configuration structure
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct VelocityConfig {
    pub render: RenderConfig,
    pub viewer: ViewerConfig,
    /// Collection overrides; absent collections keep the built-in content
    pub content: LandingContent,
}

/// `[render]` section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Bake the post-paint state into static output
    pub mounted: bool,
    /// Embed the inspector manifest
    pub manifest: bool,
    pub title: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        let defaults = RenderOptions::default();
        Self {
            mounted: defaults.mount.is_mounted(),
            manifest: defaults.embed_manifest,
            title: defaults.title,
        }
    }
}

/// `[viewer]` section
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Present means the viewer is recognized
    pub display_name: Option<String>,
}

impl VelocityConfig {
    /// Load config from `.velocity/config.toml` in the given root directory.
    /// Returns default config if the file doesn't exist; a file that exists
    /// but cannot be read or parsed is an error.
    pub fn try_load(root: &Path) -> Result<Self> {
        let config_path = root.join(".velocity").join("config.toml");
        if !config_path.exists() {
            debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::try_load_from_path(&config_path)
    }

    /// Load config from a specific path, which must exist.
    pub fn try_load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            mount: if self.render.mounted {
                MountState::Mounted
            } else {
                MountState::Initial
            },
            embed_manifest: self.render.manifest,
            title: self.render.title.clone(),
        }
    }

    pub fn session(&self) -> ViewerSession {
        let display_name = self.viewer.display_name.clone();
        ViewerSession::from_capability(display_name.is_some(), display_name)
    }
}
