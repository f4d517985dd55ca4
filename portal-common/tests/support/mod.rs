#![allow(dead_code)]

use portal_common::{AudioTrack, BridgeError, BridgeEvent, HostBridge, PlaybackError};
use std::cell::{Cell, RefCell};

pub fn tracing_init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .with_line_number(true)
        .with_target(false)
        .with_file(true)
        .try_init();
}

/// Host stand-in that records every outbound event
#[derive(Default)]
pub struct RecordingBridge {
    pub sent: RefCell<Vec<(BridgeEvent, serde_json::Value)>>,
}

impl RecordingBridge {
    pub fn last_request_id(&self) -> Option<u64> {
        self.sent
            .borrow()
            .last()
            .and_then(|(_, body)| body["requestId"].as_u64())
    }
}

impl HostBridge for RecordingBridge {
    fn send_event(&self, event: BridgeEvent, payload: &str) -> Result<(), BridgeError> {
        let body = serde_json::from_str(payload).map_err(|e| BridgeError {
            event,
            reason: e.to_string(),
        })?;
        self.sent.borrow_mut().push((event, body));
        Ok(())
    }
}

/// Audio stand-in whose clock is advanced by the test
pub struct ScriptedTrack {
    pub playing: Cell<bool>,
    pub position: Cell<f64>,
    pub duration: Cell<f64>,
    pub volume: Cell<f64>,
    pub play_calls: Cell<u32>,
}

impl ScriptedTrack {
    pub fn new() -> Self {
        Self {
            playing: Cell::new(false),
            position: Cell::new(0.0),
            duration: Cell::new(f64::NAN),
            volume: Cell::new(1.0),
            play_calls: Cell::new(0),
        }
    }

    /// Simulate `loadedmetadata`
    pub fn load(&self, duration: f64) {
        self.duration.set(duration);
    }

    /// Simulate playback time passing
    pub fn advance(&self, seconds: f64) {
        if self.playing.get() {
            self.position.set(self.position.get() + seconds);
        }
    }
}

impl AudioTrack for ScriptedTrack {
    fn play(&self) -> Result<(), PlaybackError> {
        self.play_calls.set(self.play_calls.get() + 1);
        self.playing.set(true);
        Ok(())
    }

    fn pause(&self) {
        self.playing.set(false);
    }

    fn current_time(&self) -> f64 {
        self.position.get()
    }

    fn set_current_time(&self, seconds: f64) {
        self.position.set(seconds);
    }

    fn duration(&self) -> f64 {
        self.duration.get()
    }

    fn set_volume(&self, volume: f64) {
        self.volume.set(volume);
    }
}
