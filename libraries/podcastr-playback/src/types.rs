//! Core types for playback management

use podcastr_core::Episode;
use serde::{Deserialize, Serialize};

/// Point-in-time copy of the playback store
///
/// An empty queue means "no current episode" regardless of `current_index`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackSnapshot {
    /// Episodes loaded for playback, in playback order
    pub queue: Vec<Episode>,

    /// Position of the now-playing episode in `queue`
    pub current_index: usize,

    /// Whether audio should be rendering
    pub is_playing: bool,

    /// Whether the current episode repeats instead of ending
    pub is_looping: bool,

    /// Whether "next" picks a random queue position
    pub is_shuffling: bool,
}

impl PlaybackSnapshot {
    /// Now-playing episode, if the queue has one at `current_index`
    pub fn current_episode(&self) -> Option<&Episode> {
        self.queue.get(self.current_index)
    }

    /// Whether "previous" would move
    pub fn has_previous(&self) -> bool {
        self.current_index > 0
    }

    /// Whether "next" would move
    pub fn has_next(&self) -> bool {
        self.is_shuffling || self.current_index + 1 < self.queue.len()
    }
}

/// Configuration for a playback session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Initial loop flag (default: false)
    pub start_looping: bool,

    /// Initial shuffle flag (default: false)
    pub start_shuffling: bool,

    /// Seed for shuffle picks; `None` uses the thread RNG
    pub shuffle_seed: Option<u64>,
}
