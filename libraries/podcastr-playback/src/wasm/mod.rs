//! WASM bindings for podcastr-playback
//!
//! Drives a browser `<audio>` element from the playback store, so the state
//! logic runs as WebAssembly while the page only forwards DOM events.

#[cfg(feature = "wasm")]
pub mod output;

#[cfg(feature = "wasm")]
pub mod player;

#[cfg(feature = "wasm")]
pub use output::HtmlAudioOutput;

#[cfg(feature = "wasm")]
pub use player::WasmPlayer;
