//! Episode domain type

use serde::{Deserialize, Serialize};

/// Podcast episode as supplied by the episode data source
///
/// Episodes carry no identity of their own: inside a queue they are
/// addressed by position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    /// Episode title
    pub title: String,

    /// Display-only attribution (hosts and guests)
    #[serde(default)]
    pub members: String,

    /// Cover image reference
    #[serde(default)]
    pub thumbnail: String,

    /// Length in whole seconds
    pub duration: u64,

    /// Audio source reference
    pub url: String,
}

impl Episode {
    /// Create a new episode with minimal metadata
    pub fn new(title: impl Into<String>, url: impl Into<String>, duration: u64) -> Self {
        Self {
            title: title.into(),
            members: String::new(),
            thumbnail: String::new(),
            duration,
            url: url.into(),
        }
    }

    /// Set the attribution line
    pub fn with_members(mut self, members: impl Into<String>) -> Self {
        self.members = members.into();
        self
    }

    /// Set the cover image reference
    pub fn with_thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.thumbnail = thumbnail.into();
        self
    }
}
