//! Naming policies for on-disk metadata and artwork files.
//!
//! A [`NamingPolicy`] is plain configuration data: it records which artifact
//! kinds a convention supports, which ones the user enabled, and the fixed
//! filename each kind resolves to. The metadata generator queries it, there is
//! no dispatch through the policy itself.

pub mod kodi_legacy;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A category of generated metadata file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArtifactKind {
    ShowMetadata,
    EpisodeMetadata,
    Fanart,
    Poster,
    Banner,
    EpisodeThumbnails,
    SeasonPosters,
    SeasonBanners,
    SeasonAllPoster,
    SeasonAllBanner,
}

impl ArtifactKind {
    pub const ALL: [Self; 10] = [
        Self::ShowMetadata,
        Self::EpisodeMetadata,
        Self::Fanart,
        Self::Poster,
        Self::Banner,
        Self::EpisodeThumbnails,
        Self::SeasonPosters,
        Self::SeasonBanners,
        Self::SeasonAllPoster,
        Self::SeasonAllBanner,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ShowMetadata => "show metadata",
            Self::EpisodeMetadata => "episode metadata",
            Self::Fanart => "fanart",
            Self::Poster => "poster",
            Self::Banner => "banner",
            Self::EpisodeThumbnails => "episode thumbnails",
            Self::SeasonPosters => "season posters",
            Self::SeasonBanners => "season banners",
            Self::SeasonAllPoster => "season-all poster",
            Self::SeasonAllBanner => "season-all banner",
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::ShowMetadata => 0,
            Self::EpisodeMetadata => 1,
            Self::Fanart => 2,
            Self::Poster => 3,
            Self::Banner => 4,
            Self::EpisodeThumbnails => 5,
            Self::SeasonPosters => 6,
            Self::SeasonBanners => 7,
            Self::SeasonAllPoster => 8,
            Self::SeasonAllBanner => 9,
        }
    }
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// User-facing enable flags, one per artifact kind.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ArtifactFlags {
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

impl ArtifactFlags {
    #[must_use]
    pub const fn get(self, kind: ArtifactKind) -> bool {
        match kind {
            ArtifactKind::ShowMetadata => self.show_metadata,
            ArtifactKind::EpisodeMetadata => self.episode_metadata,
            ArtifactKind::Fanart => self.fanart,
            ArtifactKind::Poster => self.poster,
            ArtifactKind::Banner => self.banner,
            ArtifactKind::EpisodeThumbnails => self.episode_thumbnails,
            ArtifactKind::SeasonPosters => self.season_posters,
            ArtifactKind::SeasonBanners => self.season_banners,
            ArtifactKind::SeasonAllPoster => self.season_all_poster,
            ArtifactKind::SeasonAllBanner => self.season_all_banner,
        }
    }
}

/// Errors specific to naming-policy validation.
#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("Empty filename for enabled artifact kind: {0}")]
    EmptyFilename(&'static str),
}

/// Immutable naming configuration for one convention.
///
/// Construction cannot fail; every field is a literal or a pass-through flag.
#[derive(Debug, Clone)]
pub struct NamingPolicy {
    pub name: &'static str,

    pub show_metadata_name: &'static str,
    pub fanart_name: &'static str,
    pub poster_name: &'static str,
    pub banner_name: &'static str,
    pub season_all_poster_name: &'static str,

    flags: ArtifactFlags,
    supported: [bool; 10],
    examples: [&'static str; 10],
}

impl NamingPolicy {
    /// Whether this convention is able to produce the given artifact kind at
    /// all, regardless of user flags.
    #[must_use]
    pub const fn supports(&self, kind: ArtifactKind) -> bool {
        self.supported[kind.index()]
    }

    /// Whether the generator should produce the given artifact kind: the user
    /// asked for it and the convention supports it.
    #[must_use]
    pub const fn enabled(&self, kind: ArtifactKind) -> bool {
        self.flags.get(kind) && self.supports(kind)
    }

    #[must_use]
    pub const fn flags(&self) -> ArtifactFlags {
        self.flags
    }

    /// Fixed filename for kinds that resolve to a single file per show.
    /// Per-episode and per-season kinds derive their paths instead and
    /// return `None` here.
    #[must_use]
    pub const fn filename(&self, kind: ArtifactKind) -> Option<&'static str> {
        match kind {
            ArtifactKind::ShowMetadata => Some(self.show_metadata_name),
            ArtifactKind::Fanart => Some(self.fanart_name),
            ArtifactKind::Poster => Some(self.poster_name),
            ArtifactKind::Banner => Some(self.banner_name),
            ArtifactKind::SeasonAllPoster => Some(self.season_all_poster_name),
            _ => None,
        }
    }

    /// Human-readable example path for UI display.
    #[must_use]
    pub const fn example(&self, kind: ArtifactKind) -> &'static str {
        self.examples[kind.index()]
    }

    pub fn validate(&self) -> Result<(), PolicyError> {
        for kind in ArtifactKind::ALL {
            if !self.enabled(kind) {
                continue;
            }

            if matches!(self.filename(kind), Some(name) if name.is_empty()) {
                return Err(PolicyError::EmptyFilename(kind.as_str()));
            }
        }

        Ok(())
    }
}
