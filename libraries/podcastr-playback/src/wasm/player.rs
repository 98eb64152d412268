//! WASM-compatible player wrapper

use super::output::HtmlAudioOutput;
use crate::{format_duration, PlaybackStore, PlayerConfig, PlayerPanel};
use js_sys::Function;
use podcastr_core::Episode;
use wasm_bindgen::prelude::*;
use web_sys::HtmlAudioElement;

/// Player exposed to JavaScript
///
/// The page wires the audio element's `play`, `pause`, `loadedmetadata`,
/// `timeupdate` and `ended` listeners to the matching `on*` methods and binds
/// buttons to the intent methods.
#[wasm_bindgen]
pub struct WasmPlayer {
    panel: PlayerPanel<HtmlAudioOutput>,
    on_change: Option<Function>,
}

#[wasm_bindgen]
impl WasmPlayer {
    /// Create a player driving `element`
    #[wasm_bindgen(constructor)]
    pub fn new(element: HtmlAudioElement) -> Self {
        console_error_panic_hook::set_once();

        Self {
            panel: PlayerPanel::with_output(
                PlaybackStore::new(PlayerConfig::default()),
                HtmlAudioOutput::new(element),
            ),
            on_change: None,
        }
    }

    /// Register a callback receiving the store snapshot after each change
    #[wasm_bindgen(js_name = onChange)]
    pub fn on_change(&mut self, callback: Function) {
        self.on_change = Some(callback);
    }

    // ===== Intents =====

    #[wasm_bindgen(js_name = playSingle)]
    pub fn play_single(&mut self, episode: JsValue) -> Result<(), JsValue> {
        let episode: Episode = serde_wasm_bindgen::from_value(episode)?;
        self.panel.play_single(episode);
        self.notify()
    }

    #[wasm_bindgen(js_name = playList)]
    pub fn play_list(&mut self, list: JsValue, index: usize) -> Result<(), JsValue> {
        let list: Vec<Episode> = serde_wasm_bindgen::from_value(list)?;
        self.panel.play_list(list, index);
        self.notify()
    }

    #[wasm_bindgen(js_name = togglePlay)]
    pub fn toggle_play(&mut self) -> Result<(), JsValue> {
        self.panel.toggle_play();
        self.notify()
    }

    #[wasm_bindgen(js_name = toggleLoop)]
    pub fn toggle_loop(&mut self) -> Result<(), JsValue> {
        self.panel.toggle_loop();
        self.notify()
    }

    #[wasm_bindgen(js_name = toggleShuffle)]
    pub fn toggle_shuffle(&mut self) -> Result<(), JsValue> {
        self.panel.toggle_shuffle();
        self.notify()
    }

    #[wasm_bindgen(js_name = playNext)]
    pub fn play_next(&mut self) -> Result<(), JsValue> {
        self.panel.play_next();
        self.notify()
    }

    #[wasm_bindgen(js_name = playPrevious)]
    pub fn play_previous(&mut self) -> Result<(), JsValue> {
        self.panel.play_previous();
        self.notify()
    }

    #[wasm_bindgen(js_name = clearPlayerState)]
    pub fn clear_player_state(&mut self) -> Result<(), JsValue> {
        self.panel.clear();
        self.notify()
    }

    /// Seek to a position in whole seconds
    pub fn seek(&mut self, position_secs: u32) -> Result<(), JsValue> {
        self.panel.seek(u64::from(position_secs));
        self.notify()
    }

    // ===== Audio element events =====

    #[wasm_bindgen(js_name = onPlay)]
    pub fn on_play(&mut self) -> Result<(), JsValue> {
        self.panel.handle_audio_event(crate::AudioEvent::Started);
        self.notify()
    }

    #[wasm_bindgen(js_name = onPause)]
    pub fn on_pause(&mut self) -> Result<(), JsValue> {
        self.panel.handle_audio_event(crate::AudioEvent::Stopped);
        self.notify()
    }

    #[wasm_bindgen(js_name = onLoadedMetadata)]
    pub fn on_loaded_metadata(&mut self) -> Result<(), JsValue> {
        self.panel.handle_audio_event(crate::AudioEvent::MetadataReady);
        self.notify()
    }

    /// Forward `timeupdate` with the element's `currentTime`
    #[wasm_bindgen(js_name = onTimeUpdate)]
    pub fn on_time_update(&mut self, current_time: f64) -> Result<(), JsValue> {
        self.panel
            .handle_audio_event(crate::AudioEvent::PositionTick(current_time));
        self.notify()
    }

    #[wasm_bindgen(js_name = onEnded)]
    pub fn on_ended(&mut self) -> Result<(), JsValue> {
        self.panel.handle_audio_event(crate::AudioEvent::Ended);
        self.notify()
    }

    // ===== Queries =====

    /// Current store snapshot as a plain object
    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.panel.store().snapshot())?)
    }

    /// Current panel view (episode, labels, controls) as a plain object
    pub fn view(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.panel.view())?)
    }

    /// Current button states as a plain object
    pub fn controls(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.panel.controls())?)
    }

    #[wasm_bindgen(getter)]
    pub fn progress(&self) -> f64 {
        self.panel.progress() as f64
    }

    #[wasm_bindgen(getter, js_name = hasNext)]
    pub fn has_next(&self) -> bool {
        self.panel.store().has_next()
    }

    #[wasm_bindgen(getter, js_name = hasPrevious)]
    pub fn has_previous(&self) -> bool {
        self.panel.store().has_previous()
    }
}

impl WasmPlayer {
    fn notify(&self) -> Result<(), JsValue> {
        if let Some(callback) = &self.on_change {
            callback.call1(&JsValue::NULL, &self.snapshot()?)?;
        }
        Ok(())
    }
}

/// Format whole seconds as `MM:SS`
#[wasm_bindgen(js_name = formatDuration)]
pub fn format_duration_js(seconds: u32) -> String {
    format_duration(u64::from(seconds))
}
