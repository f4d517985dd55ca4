//! Background music player UI state store

use dioxus::prelude::*;

/// UI state for the transport bar
#[derive(Clone, Debug, PartialEq, Store)]
pub struct PlayerUiState {
    pub is_playing: bool,
    pub current_index: usize,
    pub track_count: usize,
    /// Progress fill width, 0..=100
    pub progress_percent: f64,
    pub elapsed: String,
    pub total: String,
}

impl Default for PlayerUiState {
    fn default() -> Self {
        Self {
            is_playing: false,
            current_index: 0,
            track_count: 0,
            progress_percent: 0.0,
            elapsed: "0:00".to_string(),
            total: "0:00".to_string(),
        }
    }
}
