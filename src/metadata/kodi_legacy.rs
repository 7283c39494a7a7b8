//! KODI (legacy) naming convention.
//!
//! File structure produced under this layout:
//!
//! ```text
//! show_root/tvshow.nfo              (show metadata)
//! show_root/fanart.jpg              (fanart)
//! show_root/folder.jpg              (poster)
//! show_root/folder.jpg              (banner)
//! show_root/Season ##/filename.ext  (episode media)
//! show_root/Season ##/filename.nfo  (episode metadata)
//! show_root/Season ##/filename.tbn  (episode thumb)
//! show_root/season##.tbn            (season posters)
//! show_root/season-all.tbn          (season all poster)
//! ```
//!
//! Season banners and the season-all banner are not supported by this layout.

use crate::metadata::{ArtifactFlags, NamingPolicy};
use crate::models::{Episode, Show};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Extension used for all thumbnail artifacts under this layout.
const THUMB_EXTENSION: &str = "tbn";

impl NamingPolicy {
    /// Naming policy for the KODI legacy layout.
    ///
    /// The poster and banner both resolve to `folder.jpg`, and the aggregate
    /// season-all poster to `season-all.tbn`; these differ from the newer
    /// KODI 12+ convention.
    #[must_use]
    pub const fn kodi_legacy(flags: ArtifactFlags) -> Self {
        Self {
            name: "KODI",
            show_metadata_name: "tvshow.nfo",
            fanart_name: "fanart.jpg",
            poster_name: "folder.jpg",
            banner_name: "folder.jpg",
            season_all_poster_name: "season-all.tbn",
            flags,
            // show meta, ep meta, fanart, poster, banner, ep thumbs,
            // season posters, season banners, season-all poster, season-all banner
            supported: [
                true, true, true, true, true, true, true, false, true, false,
            ],
            examples: [
                "tvshow.nfo",
                "Season##\\<i>filename</i>.nfo",
                "fanart.jpg",
                "folder.jpg",
                "folder.jpg",
                "Season##\\<i>filename</i>.tbn",
                "season##.tbn",
                "<i>not supported</i>",
                "season-all.tbn",
                "<i>not supported</i>",
            ],
        }
    }
}

/// Replaces a media file's extension with the thumbnail extension.
///
/// Pure path formatting: no filesystem access, callers decide separately
/// whether the media file (or the thumbnail) actually exists.
#[must_use]
pub fn episode_thumb_filename(location: &Path) -> PathBuf {
    location.with_extension(THUMB_EXTENSION)
}

/// Returns the path where the episode's thumbnail should be stored: the
/// episode file's own path with a `.tbn` extension.
///
/// Yields `None` when the episode's media file does not exist on disk. That
/// is a normal outcome for undownloaded episodes, not an error. Only the
/// media file is probed, never the thumbnail itself.
#[must_use]
pub fn episode_thumb_path(episode: &Episode) -> Option<PathBuf> {
    if episode.location.is_file() {
        Some(episode_thumb_filename(&episode.location))
    } else {
        debug!(
            location = %episode.location.display(),
            "Episode media file not found, no thumbnail path"
        );
        None
    }
}

/// Returns the full path for a season poster under the show root.
///
/// Season 0 means specials and maps to `season-specials.tbn`; any other
/// season N maps to `seasonNN.tbn` with N zero-padded to at least two
/// digits (season 150 stays `season150.tbn`). No existence check: this
/// decides where the poster goes whether or not one is there yet.
#[must_use]
pub fn season_poster_path(show: &Show, season: i32) -> PathBuf {
    // Our specials thumbnail is, well, special
    let stem = if season == 0 {
        "season-specials".to_string()
    } else {
        format!("season{season:02}")
    };

    show.location.join(format!("{stem}.{THUMB_EXTENSION}"))
}

/// No-op: season banners are not supported by this layout. Callers must not
/// treat this as a failure.
pub fn create_season_banners(_show: Option<&Show>, _season: Option<i32>) {
    debug!("Season banners not supported by the KODI legacy layout, skipping");
}

/// No-op: the season-all banner is not supported by this layout.
pub fn create_season_all_banner(_show: Option<&Show>) {
    debug!("Season-all banner not supported by the KODI legacy layout, skipping");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::ArtifactKind;

    fn test_show() -> Show {
        Show::new("Winter Garden", "/library/Winter Garden")
    }

    #[test]
    fn test_fixed_filenames() {
        let policy = NamingPolicy::kodi_legacy(ArtifactFlags::default());
        assert_eq!(policy.poster_name, "folder.jpg");
        assert_eq!(policy.banner_name, "folder.jpg");
        assert_eq!(policy.season_all_poster_name, "season-all.tbn");
        assert_eq!(policy.show_metadata_name, "tvshow.nfo");
        assert_eq!(policy.fanart_name, "fanart.jpg");
    }

    #[test]
    fn test_unsupported_kinds() {
        let policy = NamingPolicy::kodi_legacy(ArtifactFlags::default());
        assert!(!policy.supports(ArtifactKind::SeasonBanners));
        assert!(!policy.supports(ArtifactKind::SeasonAllBanner));
        assert_eq!(
            policy.example(ArtifactKind::SeasonBanners),
            "<i>not supported</i>"
        );
        assert_eq!(
            policy.example(ArtifactKind::SeasonAllBanner),
            "<i>not supported</i>"
        );
    }

    #[test]
    fn test_season_poster_path_specials() {
        let path = season_poster_path(&test_show(), 0);
        assert_eq!(
            path,
            PathBuf::from("/library/Winter Garden/season-specials.tbn")
        );
    }

    #[test]
    fn test_season_poster_path_padding() {
        let show = test_show();
        assert_eq!(
            season_poster_path(&show, 3),
            PathBuf::from("/library/Winter Garden/season03.tbn")
        );
        assert_eq!(
            season_poster_path(&show, 12),
            PathBuf::from("/library/Winter Garden/season12.tbn")
        );
        // Padding is a minimum width, not a truncation.
        assert_eq!(
            season_poster_path(&show, 150),
            PathBuf::from("/library/Winter Garden/season150.tbn")
        );
    }

    #[test]
    fn test_episode_thumb_filename_replaces_extension() {
        assert_eq!(
            episode_thumb_filename(Path::new("/x/Show/S01E01.mkv")),
            PathBuf::from("/x/Show/S01E01.tbn")
        );
        assert_eq!(
            episode_thumb_filename(Path::new("/x/Show/Season 01/ep 2.final.mp4")),
            PathBuf::from("/x/Show/Season 01/ep 2.final.tbn")
        );
    }

    #[test]
    fn test_episode_thumb_path_missing_file() {
        let episode = Episode::new(
            "Winter Garden",
            1,
            1,
            "/nonexistent/Winter Garden/S01E01.mkv",
        );
        assert_eq!(episode_thumb_path(&episode), None);
    }

    #[test]
    fn test_no_op_hooks_accept_absent_entities() {
        create_season_banners(None, None);
        create_season_banners(Some(&test_show()), Some(1));
        create_season_all_banner(None);
        create_season_all_banner(Some(&test_show()));
    }
}
