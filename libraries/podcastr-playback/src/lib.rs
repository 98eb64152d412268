//! Podcastr Player - Playback Management
//!
//! Platform-agnostic playback state for Podcastr Player.
//!
//! This crate provides:
//! - Episode queue with positional navigation (next/previous)
//! - Play/pause, loop and shuffle flags
//! - Random shuffle-next (may reselect the current episode)
//! - Store events with synchronous subscribers
//! - Player panel reconciling an audio output with the store
//! - Control (button) states and `MM:SS` time labels
//!
//! # Architecture
//!
//! `podcastr-playback` is completely platform-agnostic:
//! - No audio decoding
//! - No media fetching
//! - No persistence
//!
//! Platform-specific audio rendering is provided through the `AudioOutput`
//! trait. The `wasm` feature adds bindings that drive a browser `<audio>`
//! element.
//!
//! # Example: Store
//!
//! ```rust
//! use podcastr_core::Episode;
//! use podcastr_playback::PlaybackStore;
//!
//! let mut store = PlaybackStore::default();
//! store.play_list(
//!     vec![
//!         Episode::new("Episode 1", "https://cdn.example.com/1.mp3", 1800),
//!         Episode::new("Episode 2", "https://cdn.example.com/2.mp3", 2400),
//!     ],
//!     0,
//! );
//!
//! assert!(store.is_playing());
//! assert!(store.has_next());
//!
//! store.play_next();
//! assert_eq!(store.current_index(), 1);
//! assert!(!store.has_next());
//! ```
//!
//! # Example: Platform Integration
//!
//! ```rust
//! use podcastr_core::Episode;
//! use podcastr_playback::{AudioEvent, AudioOutput, PlaybackStore, PlayerPanel, Result};
//!
//! // Implement AudioOutput for your platform
//! struct MyOutput;
//!
//! impl AudioOutput for MyOutput {
//!     fn load(&mut self, _url: &str) -> Result<()> { Ok(()) }
//!     fn unload(&mut self) -> Result<()> { Ok(()) }
//!     fn start(&mut self) -> Result<()> { Ok(()) }
//!     fn stop(&mut self) -> Result<()> { Ok(()) }
//!     fn seek(&mut self, _position_secs: u64) -> Result<()> { Ok(()) }
//!     fn set_loop(&mut self, _looping: bool) -> Result<()> { Ok(()) }
//! }
//!
//! let mut panel = PlayerPanel::with_output(PlaybackStore::default(), MyOutput);
//! panel.play_single(Episode::new("Episode 1", "https://cdn.example.com/1.mp3", 1800));
//!
//! // Forward events from the platform's audio environment
//! panel.handle_audio_event(AudioEvent::MetadataReady);
//! panel.handle_audio_event(AudioEvent::PositionTick(61.4));
//! assert_eq!(panel.view().progress_label, "01:01");
//!
//! // Last episode finished: the queue is cleared
//! panel.handle_audio_event(AudioEvent::Ended);
//! assert!(panel.view().episode.is_none());
//! ```

mod controls;
mod error;
pub mod events;
mod output;
mod panel;
pub mod shuffle;
mod store;
mod time;
pub mod types;

#[cfg(feature = "wasm")]
pub mod wasm;

// Public exports
pub use controls::{ControlState, Controls, PlayGlyph};
pub use error::{PlaybackError, Result};
pub use events::{StoreEvent, SubscriptionId};
pub use output::{AudioEvent, AudioOutput};
pub use panel::{PanelView, PlayerPanel};
pub use shuffle::{IndexPicker, SeededPicker, ThreadRngPicker};
pub use store::PlaybackStore;
pub use time::format_duration;
pub use types::{PlaybackSnapshot, PlayerConfig};
