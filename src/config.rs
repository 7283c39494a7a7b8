use crate::metadata::ArtifactFlags;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,

    pub metadata: MetadataConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Which metadata artifacts to generate. Everything is opt-in.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MetadataConfig {
    /// Naming convention to use for generated files.
    pub convention: Convention,

    pub show_metadata: bool,

    pub episode_metadata: bool,

    pub fanart: bool,

    pub poster: bool,

    pub banner: bool,

    pub episode_thumbnails: bool,

    pub season_posters: bool,

    pub season_banners: bool,

    pub season_all_poster: bool,

    pub season_all_banner: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Convention {
    #[default]
    KodiLegacy,
}

impl MetadataConfig {
    #[must_use]
    pub const fn artifact_flags(&self) -> ArtifactFlags {
        ArtifactFlags {
            show_metadata: self.show_metadata,
            episode_metadata: self.episode_metadata,
            fanart: self.fanart,
            poster: self.poster,
            banner: self.banner,
            episode_thumbnails: self.episode_thumbnails,
            season_posters: self.season_posters,
            season_banners: self.season_banners,
            season_all_poster: self.season_all_poster,
            season_all_banner: self.season_all_banner,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let paths = Self::config_paths();

        for path in &paths {
            if path.exists() {
                info!("Loading config from: {}", path.display());
                return Self::load_from_path(path);
            }
        }

        info!("No config file found, using defaults");
        Ok(Self::default())
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        info!("Config saved to: {}", path.display());
        Ok(())
    }

    fn config_paths() -> Vec<PathBuf> {
        let mut paths = vec![];

        paths.push(PathBuf::from("config.toml"));

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("kodarr").join("config.toml"));
        }

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".kodarr").join("config.toml"));
        }

        paths
    }

    pub fn validate(&self) -> Result<()> {
        if self.general.log_level.is_empty() {
            anyhow::bail!("Log level cannot be empty");
        }

        Ok(())
    }
}
