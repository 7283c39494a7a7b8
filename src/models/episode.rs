use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Episode {
    pub show_title: String,
    pub season: i32,
    pub episode_number: i32,
    pub title: Option<String>,
    /// Full path of the episode's media file. The file may or may not exist
    /// on disk (e.g. a wanted episode that has not been downloaded yet).
    pub location: PathBuf,
}

impl Episode {
    #[must_use]
    pub fn new(
        show_title: impl Into<String>,
        season: i32,
        episode_number: i32,
        location: impl Into<PathBuf>,
    ) -> Self {
        Self {
            show_title: show_title.into(),
            season,
            episode_number,
            title: None,
            location: location.into(),
        }
    }
}
