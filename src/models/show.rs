use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Show {
    pub title: String,
    /// Root directory of the show in the library.
    pub location: PathBuf,
    pub year: Option<i32>,
    pub tvdb_id: Option<i32>,
}

impl Show {
    #[must_use]
    pub fn new(title: impl Into<String>, location: impl Into<PathBuf>) -> Self {
        Self {
            title: title.into(),
            location: location.into(),
            year: None,
            tvdb_id: None,
        }
    }
}
