//! Error types for playback management

use thiserror::Error;

/// Playback errors
///
/// Store operations never fail. These errors come from the audio output
/// boundary and are absorbed by the panel after logging.
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// The audio output rejected a command
    #[error("Audio output error: {0}")]
    AudioOutput(String),

    /// JavaScript interop failed
    #[error("JS interop error: {0}")]
    Interop(String),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
