//! Episode catalog
//!
//! Parses the JSON served by the podcast API into playable [`Episode`]s.
//! Two document shapes are accepted:
//!
//! ```text
//! { "episodes": [ { "title", "members", "thumbnail", "file": { "url", "duration" } } ] }
//! [ { "title", "members", "thumbnail", "file": { "url", "duration" } } ]
//! ```
//!
//! Fields the player does not use (`id`, `published_at`, `description`,
//! `file.type`) are ignored.

use crate::episode::Episode;
use crate::error::{CoreError, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    Wrapped { episodes: Vec<EpisodeRecord> },
    Bare(Vec<EpisodeRecord>),
}

#[derive(Debug, Deserialize)]
struct EpisodeRecord {
    title: String,
    #[serde(default)]
    members: String,
    #[serde(default)]
    thumbnail: String,
    file: FileRecord,
}

#[derive(Debug, Deserialize)]
struct FileRecord {
    url: String,
    duration: u64,
}

impl From<EpisodeRecord> for Episode {
    fn from(record: EpisodeRecord) -> Self {
        Episode {
            title: record.title,
            members: record.members,
            thumbnail: record.thumbnail,
            duration: record.file.duration,
            url: record.file.url,
        }
    }
}

/// Ordered list of episodes available for playback
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    episodes: Vec<Episode>,
}

impl Catalog {
    /// Build a catalog from already-constructed episodes
    pub fn new(episodes: Vec<Episode>) -> Self {
        Self { episodes }
    }

    /// Parse a catalog document
    ///
    /// Records with an empty `file.url` are rejected since nothing could be
    /// rendered for them.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let records = match serde_json::from_str::<CatalogDocument>(json)? {
            CatalogDocument::Wrapped { episodes } | CatalogDocument::Bare(episodes) => episodes,
        };

        let mut episodes = Vec::with_capacity(records.len());
        for (index, record) in records.into_iter().enumerate() {
            if record.file.url.trim().is_empty() {
                return Err(CoreError::InvalidEpisode {
                    index,
                    reason: "missing audio url".to_string(),
                });
            }
            episodes.push(Episode::from(record));
        }

        tracing::debug!("Parsed catalog with {} episodes", episodes.len());
        Ok(Self { episodes })
    }

    /// Read and parse a catalog file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CoreError::CatalogIo {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = Self::from_json_str(&json)?;
        tracing::info!(
            "Loaded {} episodes from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// All episodes in catalog order
    pub fn episodes(&self) -> &[Episode] {
        &self.episodes
    }

    /// Episode at `index`, if present
    pub fn get(&self, index: usize) -> Option<&Episode> {
        self.episodes.get(index)
    }

    /// Number of episodes
    pub fn len(&self) -> usize {
        self.episodes.len()
    }

    /// Whether the catalog has no episodes
    pub fn is_empty(&self) -> bool {
        self.episodes.is_empty()
    }

    /// Consume the catalog, returning its episodes
    pub fn into_episodes(self) -> Vec<Episode> {
        self.episodes
    }
}
