//! Platform-agnostic audio output boundary
//!
//! The panel commands an `AudioOutput` and the environment reports back
//! through `AudioEvent`s. Browser builds back this with an `<audio>` element,
//! the CLI with a simulated clock.

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Audio rendering handle
///
/// Implementors accept a media reference and play/pause/seek commands.
/// Commands are fire-and-forget: a failure is reported but never retried.
#[cfg_attr(test, mockall::automock)]
pub trait AudioOutput {
    /// Point the output at a new media reference
    ///
    /// The environment reports `AudioEvent::MetadataReady` once the media is
    /// ready to render.
    fn load(&mut self, url: &str) -> Result<()>;

    /// Drop the current media reference and stop rendering
    fn unload(&mut self) -> Result<()>;

    /// Start or resume rendering
    fn start(&mut self) -> Result<()>;

    /// Pause rendering
    fn stop(&mut self) -> Result<()>;

    /// Move the render position
    ///
    /// # Arguments
    /// * `position_secs` - Target position in whole seconds from the start
    fn seek(&mut self, position_secs: u64) -> Result<()>;

    /// Repeat the current media when it ends
    fn set_loop(&mut self, looping: bool) -> Result<()>;
}

/// Events reported by the audio environment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AudioEvent {
    /// Rendering started (including programmatic starts)
    Started,

    /// Rendering paused
    Stopped,

    /// Media metadata is available
    MetadataReady,

    /// Periodic position sample in seconds
    PositionTick(f64),

    /// Media reached its end without looping
    Ended,
}
