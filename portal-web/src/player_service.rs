use crate::audio::HtmlAudioTrack;
use dioxus::prelude::*;
use portal_common::{AudioTrack, Progress, TrackPlayer};
use portal_ui::stores::player::{PlayerUiState, PlayerUiStateStoreExt};
use tracing::{debug, error, info};

/// Web player service managing the page's `<audio>` elements and store
/// updates.
///
/// Elements mount one by one; the player exists once every slot is filled.
/// Transport commands issued before that are remembered as the desired
/// playing state and applied when the player is built.
pub struct WebPlayerService {
    slots: Vec<Option<web_sys_x::HtmlMediaElement>>,
    volume: f64,
    player: Option<TrackPlayer<HtmlAudioTrack>>,
    wants_play: bool,
    store: Store<PlayerUiState>,
}

impl WebPlayerService {
    pub fn new(track_count: usize, volume: f64, mut store: Store<PlayerUiState>) -> Self {
        store.track_count().set(track_count);
        Self {
            slots: vec![None; track_count],
            volume,
            player: None,
            wants_play: false,
            store,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.player.is_some()
    }

    /// Set the audio element for playlist entry `index` (called from the
    /// element's onmounted)
    pub fn set_audio_element(&mut self, index: usize, element: web_sys_x::HtmlMediaElement) {
        if self.player.is_some() {
            debug!("Audio element {index} remounted after player was built");
            return;
        }
        let Some(slot) = self.slots.get_mut(index) else {
            error!("Audio element index {index} outside playlist");
            return;
        };
        *slot = Some(element);

        if self.slots.iter().all(Option::is_some) {
            self.build_player();
        }
    }

    fn build_player(&mut self) {
        let tracks: Vec<HtmlAudioTrack> = self
            .slots
            .drain(..)
            .enumerate()
            .filter_map(|(i, el)| el.map(|el| HtmlAudioTrack::new(i, el)))
            .collect();

        match TrackPlayer::new(tracks, self.volume) {
            Ok(mut player) => {
                info!("Track player ready with {} tracks", player.len());
                if self.wants_play {
                    player.play();
                }
                self.player = Some(player);
                self.sync_store();
            }
            Err(e) => error!("Failed to build track player: {e}"),
        }
    }

    pub fn play(&mut self) {
        self.wants_play = true;
        if let Some(player) = self.player.as_mut() {
            player.play();
        }
        self.sync_store();
    }

    pub fn toggle_playback(&mut self) {
        match self.player.as_mut() {
            Some(player) => player.toggle_playback(),
            None => self.wants_play = !self.wants_play,
        }
        self.sync_store();
    }

    pub fn next(&mut self) {
        if let Some(player) = self.player.as_mut() {
            player.next();
            self.sync_store();
        }
    }

    pub fn previous(&mut self) {
        if let Some(player) = self.player.as_mut() {
            player.previous();
            self.sync_store();
        }
    }

    /// Called from each element's ontimeupdate
    pub fn on_time_update(&mut self, index: usize) {
        let Some(progress) = self.player.as_ref().and_then(|p| p.on_time_update(index)) else {
            return;
        };
        self.set_progress(progress);
    }

    /// Called from each element's onended
    pub fn on_ended(&mut self, index: usize) {
        let advanced = self
            .player
            .as_mut()
            .map(|p| p.on_ended(index))
            .unwrap_or(false);
        if advanced {
            self.sync_store();
        }
    }

    /// Called from each element's onloadedmetadata
    pub fn on_loaded_metadata(&mut self, index: usize) {
        if let Some(total) = self.player.as_ref().and_then(|p| p.on_loaded_metadata(index)) {
            self.store.total().set(total);
        }
    }

    fn sync_store(&mut self) {
        let Some(player) = self.player.as_ref() else {
            self.store.is_playing().set(self.wants_play);
            return;
        };
        self.wants_play = player.is_playing();
        let progress = player.progress();
        self.store.is_playing().set(player.is_playing());
        self.store.current_index().set(player.current_index());
        self.set_progress(progress);
    }

    fn set_progress(&mut self, progress: Progress) {
        self.store.progress_percent().set(progress.percent);
        self.store.elapsed().set(progress.elapsed);
        self.store.total().set(progress.total);
    }
}

impl Drop for WebPlayerService {
    fn drop(&mut self) {
        if let Some(player) = self.player.as_ref() {
            player.current_track().pause();
        }
    }
}
