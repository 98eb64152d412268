//! Store Events
//!
//! Transition notifications for UI synchronization. The store emits one event
//! per state change, in the order the changes happen, and only when something
//! actually changed.

use serde::{Deserialize, Serialize};

/// Events emitted by the playback store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StoreEvent {
    /// Queue was replaced wholesale
    QueueReplaced {
        /// New queue length
        length: usize,
        /// Index selected in the new queue
        index: usize,
    },

    /// Current index moved within the same queue
    ///
    /// `from == to` when a shuffle pick reselects the current episode.
    IndexChanged {
        /// Previous index
        from: usize,
        /// New index
        to: usize,
    },

    /// `is_playing` flipped
    PlayingChanged(bool),

    /// `is_looping` flipped
    LoopingChanged(bool),

    /// `is_shuffling` flipped
    ShufflingChanged(bool),

    /// Queue was emptied
    Cleared,
}

impl StoreEvent {
    /// Whether this event changes which episode is current
    pub fn changes_episode(&self) -> bool {
        matches!(
            self,
            StoreEvent::QueueReplaced { .. } | StoreEvent::IndexChanged { .. } | StoreEvent::Cleared
        )
    }
}

/// Handle returned by `PlaybackStore::subscribe`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub(crate) u64);

/// Callback invoked synchronously for every store event
pub type Subscriber = Box<dyn FnMut(&StoreEvent)>;
