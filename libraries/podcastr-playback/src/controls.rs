//! Player control states
//!
//! Which transport buttons are usable and highlighted for a given store state.

use crate::store::PlaybackStore;
use serde::{Deserialize, Serialize};

/// State of one button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlState {
    /// Button accepts input
    pub enabled: bool,
    /// Button shows its highlighted (mode on) style
    pub active: bool,
}

impl ControlState {
    fn new(enabled: bool, active: bool) -> Self {
        Self { enabled, active }
    }
}

/// Glyph shown on the play/pause button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayGlyph {
    Play,
    Pause,
}

/// All transport buttons, left to right
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Controls {
    pub shuffle: ControlState,
    pub previous: ControlState,
    pub play_pause: ControlState,
    pub next: ControlState,
    pub looping: ControlState,
    pub glyph: PlayGlyph,
}

impl Controls {
    /// Derive button states from the store
    ///
    /// Every button is disabled without a current episode. Shuffle also needs
    /// more than one queued episode; previous/next follow the derived flags.
    pub fn for_store(store: &PlaybackStore) -> Self {
        let has_episode = store.current_episode().is_some();

        Self {
            shuffle: ControlState::new(
                has_episode && store.queue().len() > 1,
                store.is_shuffling(),
            ),
            previous: ControlState::new(has_episode && store.has_previous(), false),
            play_pause: ControlState::new(has_episode, store.is_playing()),
            next: ControlState::new(has_episode && store.has_next(), false),
            looping: ControlState::new(has_episode, store.is_looping()),
            glyph: if store.is_playing() {
                PlayGlyph::Pause
            } else {
                PlayGlyph::Play
            },
        }
    }
}
