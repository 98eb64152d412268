//! Playback store - session playback state
//!
//! Holds the episode queue, the current index and the play/loop/shuffle flags.
//! Every operation is synchronous and total: out-of-range requests are clamped
//! and operations with nothing to do are silently absorbed.

use crate::{
    events::{StoreEvent, Subscriber, SubscriptionId},
    shuffle::{picker_for, IndexPicker},
    types::{PlaybackSnapshot, PlayerConfig},
};
use podcastr_core::Episode;
use tracing::debug;

/// Session playback state
///
/// Subscribers are called synchronously as each change happens. An owner that
/// polls instead turns on [`PlaybackStore::record_events`] and collects the
/// queued events with [`PlaybackStore::drain_events`]; nothing is queued
/// otherwise.
pub struct PlaybackStore {
    queue: Vec<Episode>,
    current_index: usize,
    is_playing: bool,
    is_looping: bool,
    is_shuffling: bool,

    picker: Box<dyn IndexPicker>,

    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
    recording: bool,
    pending_events: Vec<StoreEvent>,
}

impl Default for PlaybackStore {
    fn default() -> Self {
        Self::new(PlayerConfig::default())
    }
}

impl std::fmt::Debug for PlaybackStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackStore")
            .field("queue_len", &self.queue.len())
            .field("current_index", &self.current_index)
            .field("is_playing", &self.is_playing)
            .field("is_looping", &self.is_looping)
            .field("is_shuffling", &self.is_shuffling)
            .field("subscribers", &self.subscribers.len())
            .finish_non_exhaustive()
    }
}

impl PlaybackStore {
    /// Create an empty store
    pub fn new(config: PlayerConfig) -> Self {
        Self::with_picker(config.clone(), picker_for(config.shuffle_seed))
    }

    /// Create an empty store with a custom shuffle picker
    pub fn with_picker(config: PlayerConfig, picker: Box<dyn IndexPicker>) -> Self {
        Self {
            queue: Vec::new(),
            current_index: 0,
            is_playing: false,
            is_looping: config.start_looping,
            is_shuffling: config.start_shuffling,
            picker,
            subscribers: Vec::new(),
            next_subscription: 0,
            recording: false,
            pending_events: Vec::new(),
        }
    }

    // ===== Loading =====

    /// Play a single episode, discarding the current queue
    pub fn play_single(&mut self, episode: Episode) {
        self.queue = vec![episode];
        self.current_index = 0;
        self.emit(StoreEvent::QueueReplaced {
            length: 1,
            index: 0,
        });
        self.set_playing_state(true);
    }

    /// Play `list` starting at `index`
    ///
    /// An out-of-range `index` is clamped to the last episode (0 for an
    /// empty list).
    pub fn play_list(&mut self, list: Vec<Episode>, index: usize) {
        let clamped = index.min(list.len().saturating_sub(1));
        if clamped != index {
            debug!(
                "play_list index {} out of range for {} episodes, using {}",
                index,
                list.len(),
                clamped
            );
        }

        let length = list.len();
        self.queue = list;
        self.current_index = clamped;
        self.emit(StoreEvent::QueueReplaced {
            length,
            index: clamped,
        });
        self.set_playing_state(true);
    }

    /// Empty the queue
    ///
    /// Playback flags are left as they are.
    pub fn clear_player_state(&mut self) {
        if self.queue.is_empty() && self.current_index == 0 {
            return;
        }
        self.queue.clear();
        self.current_index = 0;
        self.emit(StoreEvent::Cleared);
    }

    // ===== Flags =====

    /// Flip `is_playing`
    pub fn toggle_play(&mut self) {
        self.set_playing_state(!self.is_playing);
    }

    /// Flip `is_looping`
    pub fn toggle_loop(&mut self) {
        self.is_looping = !self.is_looping;
        self.emit(StoreEvent::LoopingChanged(self.is_looping));
    }

    /// Flip `is_shuffling`
    pub fn toggle_shuffle(&mut self) {
        self.is_shuffling = !self.is_shuffling;
        self.emit(StoreEvent::ShufflingChanged(self.is_shuffling));
    }

    /// Set `is_playing` to mirror the audio environment
    pub fn set_playing_state(&mut self, playing: bool) {
        if self.is_playing == playing {
            return;
        }
        self.is_playing = playing;
        self.emit(StoreEvent::PlayingChanged(playing));
    }

    // ===== Navigation =====

    /// Advance to the next episode
    ///
    /// While shuffling, jumps to a random position (possibly the current one).
    /// Otherwise moves forward by one if there is a next episode.
    pub fn play_next(&mut self) {
        if self.is_shuffling {
            if self.queue.is_empty() {
                return;
            }
            let next = self.picker.pick(self.queue.len());
            self.move_to(next);
        } else if self.has_next() {
            self.move_to(self.current_index + 1);
        }
    }

    /// Go back one episode if there is one
    pub fn play_previous(&mut self) {
        if self.has_previous() {
            self.move_to(self.current_index - 1);
        }
    }

    fn move_to(&mut self, index: usize) {
        let from = self.current_index;
        self.current_index = index;
        self.emit(StoreEvent::IndexChanged { from, to: index });
    }

    // ===== Queries =====

    /// Episodes in playback order
    pub fn queue(&self) -> &[Episode] {
        &self.queue
    }

    /// Stored current index (meaningless while the queue is empty)
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Now-playing episode
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

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn is_looping(&self) -> bool {
        self.is_looping
    }

    pub fn is_shuffling(&self) -> bool {
        self.is_shuffling
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> PlaybackSnapshot {
        PlaybackSnapshot {
            queue: self.queue.clone(),
            current_index: self.current_index,
            is_playing: self.is_playing,
            is_looping: self.is_looping,
            is_shuffling: self.is_shuffling,
        }
    }

    // ===== Events =====

    /// Register a callback for every future store event
    pub fn subscribe(&mut self, subscriber: impl FnMut(&StoreEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Remove a subscriber; returns false if the id was unknown
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(existing, _)| *existing != id);
        self.subscribers.len() != before
    }

    /// Queue events for [`PlaybackStore::drain_events`]
    ///
    /// Turning recording off drops anything still queued.
    pub fn record_events(&mut self, enabled: bool) {
        self.recording = enabled;
        if !enabled {
            self.pending_events.clear();
        }
    }

    pub fn is_recording_events(&self) -> bool {
        self.recording
    }

    /// Take all events emitted since the last drain
    pub fn drain_events(&mut self) -> Vec<StoreEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    fn emit(&mut self, event: StoreEvent) {
        debug!(?event, "playback store transition");
        for (_, subscriber) in &mut self.subscribers {
            subscriber(&event);
        }
        if self.recording {
            self.pending_events.push(event);
        }
    }
}
