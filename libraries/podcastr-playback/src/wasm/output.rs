//! `AudioOutput` backed by an `HtmlAudioElement`

use crate::error::{PlaybackError, Result};
use crate::output::AudioOutput;
use tracing::warn;
use wasm_bindgen::{closure::Closure, JsValue};
use web_sys::HtmlAudioElement;

fn js_err(value: JsValue) -> PlaybackError {
    PlaybackError::Interop(format!("{value:?}"))
}

/// Browser audio element output
///
/// Events flow back through the element's DOM listeners, which the page
/// forwards to `WasmPlayer`.
pub struct HtmlAudioOutput {
    element: HtmlAudioElement,
    on_play_rejected: Closure<dyn FnMut(JsValue)>,
}

impl HtmlAudioOutput {
    pub fn new(element: HtmlAudioElement) -> Self {
        let on_play_rejected = Closure::<dyn FnMut(JsValue)>::new(|reason: JsValue| {
            warn!("Audio element refused to play: {:?}", reason);
        });

        Self {
            element,
            on_play_rejected,
        }
    }

    pub fn element(&self) -> &HtmlAudioElement {
        &self.element
    }
}

impl AudioOutput for HtmlAudioOutput {
    fn load(&mut self, url: &str) -> Result<()> {
        self.element.set_src(url);
        Ok(())
    }

    fn unload(&mut self) -> Result<()> {
        self.element.pause().map_err(js_err)?;
        self.element.remove_attribute("src").map_err(js_err)?;
        self.element.load();
        Ok(())
    }

    fn start(&mut self) -> Result<()> {
        // Rejects when autoplay is blocked; the element stays paused and no
        // "play" event reaches the store.
        let _ = self
            .element
            .play()
            .map_err(js_err)?
            .catch(&self.on_play_rejected);
        Ok(())
    }

    fn stop(&mut self) -> Result<()> {
        self.element.pause().map_err(js_err)
    }

    fn seek(&mut self, position_secs: u64) -> Result<()> {
        self.element.set_current_time(position_secs as f64);
        Ok(())
    }

    fn set_loop(&mut self, looping: bool) -> Result<()> {
        self.element.set_loop(looping);
        Ok(())
    }
}
