use portal_common::{AudioTrack, PlaybackError};
use tracing::warn;
use wasm_bindgen_x::prelude::*;

/// `<audio>` element driven by the track player
pub struct HtmlAudioTrack {
    index: usize,
    element: web_sys_x::HtmlMediaElement,
}

impl HtmlAudioTrack {
    pub fn new(index: usize, element: web_sys_x::HtmlMediaElement) -> Self {
        Self { index, element }
    }
}

impl AudioTrack for HtmlAudioTrack {
    /// `play()` resolves asynchronously; a rejected promise (autoplay policy,
    /// bad source) is only logged.
    fn play(&self) -> Result<(), PlaybackError> {
        let promise = self.element.play().map_err(|e| PlaybackError(js_reason(&e)))?;
        let index = self.index;
        wasm_bindgen_futures_x::spawn_local(async move {
            if let Err(e) = wasm_bindgen_futures_x::JsFuture::from(promise).await {
                warn!("Track {index} playback did not start: {}", js_reason(&e));
            }
        });
        Ok(())
    }

    fn pause(&self) {
        if let Err(e) = self.element.pause() {
            warn!("Track {} pause failed: {}", self.index, js_reason(&e));
        }
    }

    fn current_time(&self) -> f64 {
        self.element.current_time()
    }

    fn set_current_time(&self, seconds: f64) {
        self.element.set_current_time(seconds);
    }

    fn duration(&self) -> f64 {
        self.element.duration()
    }

    fn set_volume(&self, volume: f64) {
        self.element.set_volume(volume);
    }
}

/// DOMException name when there is one (`NotAllowedError`, ...), else the
/// debug form of the value.
fn js_reason(err: &JsValue) -> String {
    js_sys_x::Reflect::get(err, &"name".into())
        .ok()
        .and_then(|name| name.as_string())
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{err:?}"))
}
