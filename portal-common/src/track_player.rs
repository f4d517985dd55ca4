use thiserror::Error;
use tracing::{debug, info, warn};

use crate::time_format::format_time;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlayerError {
    #[error("playlist is empty")]
    EmptyPlaylist,
}

/// A track refused to start (autoplay policy, missing source, ...)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("playback did not start: {0}")]
pub struct PlaybackError(pub String);

/// One preloaded audio source.
///
/// Methods take `&self` because the browser element is a shared handle.
pub trait AudioTrack {
    fn play(&self) -> Result<(), PlaybackError>;
    fn pause(&self);
    /// Position in seconds
    fn current_time(&self) -> f64;
    fn set_current_time(&self, seconds: f64);
    /// Length in seconds; NaN until metadata is known
    fn duration(&self) -> f64;
    fn set_volume(&self, volume: f64);
}

/// Progress readout for the current track
#[derive(Debug, Clone, PartialEq)]
pub struct Progress {
    /// Fill width in percent, 0 when the duration is unknown
    pub percent: f64,
    pub elapsed: String,
    pub total: String,
}

impl Progress {
    pub fn new(position: f64, duration: f64) -> Self {
        let percent = if duration.is_finite() && duration > 0.0 && position.is_finite() {
            (position / duration * 100.0).clamp(0.0, 100.0)
        } else {
            0.0
        };
        Self {
            percent,
            elapsed: format_time(position),
            total: format_time(duration),
        }
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::new(0.0, f64::NAN)
    }
}

/// Looping player over a fixed playlist.
///
/// Owns the current index and the playing flag. Only the current track is
/// ever playing: switching always pauses and rewinds the outgoing one first.
pub struct TrackPlayer<T> {
    tracks: Vec<T>,
    current: usize,
    is_playing: bool,
}

impl<T: AudioTrack> TrackPlayer<T> {
    /// Build a player over `tracks`, setting every track's volume.
    pub fn new(tracks: Vec<T>, volume: f64) -> Result<Self, PlayerError> {
        if tracks.is_empty() {
            return Err(PlayerError::EmptyPlaylist);
        }
        let volume = volume.clamp(0.0, 1.0);
        for track in &tracks {
            track.set_volume(volume);
        }
        Ok(Self {
            tracks,
            current: 0,
            is_playing: false,
        })
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Always false; construction rejects empty playlists.
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn current_track(&self) -> &T {
        &self.tracks[self.current]
    }

    pub fn tracks(&self) -> &[T] {
        &self.tracks
    }

    /// Start the current track.
    ///
    /// A refused start is only logged; the player still reports playing.
    pub fn play(&mut self) {
        if let Err(e) = self.current_track().play() {
            warn!("Track {} {e}", self.current);
        }
        self.is_playing = true;
    }

    pub fn pause(&mut self) {
        self.current_track().pause();
        self.is_playing = false;
    }

    /// Play/pause button
    pub fn toggle_playback(&mut self) {
        if self.is_playing {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Make `index` (modulo the playlist length) current, keeping the
    /// playing state.
    pub fn switch_track(&mut self, index: usize) {
        let outgoing = self.current_track();
        outgoing.pause();
        outgoing.set_current_time(0.0);

        self.current = index % self.tracks.len();
        info!("Switched to track {}", self.current);

        if self.is_playing {
            self.play();
        }
    }

    pub fn next(&mut self) {
        self.switch_track(self.next_index());
    }

    pub fn previous(&mut self) {
        let len = self.tracks.len();
        self.switch_track((self.current + len - 1) % len);
    }

    /// Time-update notification from track `index`.
    ///
    /// Returns the new readout, or None when the notification came from a
    /// track that is not current.
    pub fn on_time_update(&self, index: usize) -> Option<Progress> {
        if index != self.current {
            return None;
        }
        Some(self.progress())
    }

    /// Track `index` reached its end: advance and keep playing.
    ///
    /// Returns false when the notification came from a track that is not
    /// current.
    pub fn on_ended(&mut self, index: usize) -> bool {
        if index != self.current {
            debug!("Ignoring ended from inactive track {index}");
            return false;
        }
        let was_playing = self.is_playing;
        self.switch_track(self.next_index());
        // switch_track already started the new track if we were playing
        if !was_playing {
            self.play();
        }
        true
    }

    /// Metadata for track `index` loaded. Returns the new total label when
    /// the track is current.
    pub fn on_loaded_metadata(&self, index: usize) -> Option<String> {
        if index != self.current {
            return None;
        }
        Some(format_time(self.current_track().duration()))
    }

    pub fn progress(&self) -> Progress {
        let track = self.current_track();
        Progress::new(track.current_time(), track.duration())
    }

    fn next_index(&self) -> usize {
        (self.current + 1) % self.tracks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct FakeTrack {
        playing: Cell<bool>,
        position: Cell<f64>,
        duration: Cell<f64>,
        volume: Cell<f64>,
        refuse_play: bool,
    }

    impl FakeTrack {
        fn new(duration: f64) -> Self {
            Self {
                playing: Cell::new(false),
                position: Cell::new(0.0),
                duration: Cell::new(duration),
                volume: Cell::new(1.0),
                refuse_play: false,
            }
        }
    }

    impl AudioTrack for FakeTrack {
        fn play(&self) -> Result<(), PlaybackError> {
            if self.refuse_play {
                return Err(PlaybackError("NotAllowedError".into()));
            }
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

    fn two_tracks() -> TrackPlayer<FakeTrack> {
        TrackPlayer::new(vec![FakeTrack::new(180.0), FakeTrack::new(240.0)], 0.5).unwrap()
    }

    #[test]
    fn test_empty_playlist_rejected() {
        let result = TrackPlayer::<FakeTrack>::new(vec![], 0.5);
        assert!(matches!(result, Err(PlayerError::EmptyPlaylist)));
    }

    #[test]
    fn test_volume_applied_to_all_tracks() {
        let player = two_tracks();
        assert!(player.tracks().iter().all(|t| t.volume.get() == 0.5));
    }

    #[test]
    fn test_next_and_previous_wrap() {
        let mut player = two_tracks();
        player.next();
        assert_eq!(player.current_index(), 1);
        player.next();
        assert_eq!(player.current_index(), 0);
        player.previous();
        assert_eq!(player.current_index(), 1);
    }

    #[test]
    fn test_switch_rewinds_and_pauses_outgoing() {
        let mut player = two_tracks();
        player.play();
        player.tracks()[0].position.set(42.0);

        player.switch_track(1);
        assert!(!player.tracks()[0].playing.get());
        assert_eq!(player.tracks()[0].position.get(), 0.0);
        assert!(player.tracks()[1].playing.get());
        assert!(player.is_playing());
    }

    #[test]
    fn test_switch_while_paused_stays_paused() {
        let mut player = two_tracks();
        player.switch_track(1);
        assert!(!player.is_playing());
        assert!(!player.tracks()[1].playing.get());
    }

    #[test]
    fn test_switch_index_is_reduced() {
        let mut player = two_tracks();
        player.switch_track(5);
        assert_eq!(player.current_index(), 1);
    }

    #[test]
    fn test_ended_advances_and_plays() {
        let mut player = two_tracks();
        player.play();
        assert!(player.on_ended(0));
        assert_eq!(player.current_index(), 1);
        assert!(player.is_playing());
        assert!(player.tracks()[1].playing.get());
    }

    #[test]
    fn test_ended_from_inactive_track_ignored() {
        let mut player = two_tracks();
        assert!(!player.on_ended(1));
        assert_eq!(player.current_index(), 0);
    }

    #[test]
    fn test_refused_play_still_reports_playing() {
        let mut tracks = vec![FakeTrack::new(10.0)];
        tracks[0].refuse_play = true;
        let mut player = TrackPlayer::new(tracks, 0.5).unwrap();
        player.play();
        assert!(player.is_playing());
        assert!(!player.tracks()[0].playing.get());
    }

    #[test]
    fn test_toggle_playback() {
        let mut player = two_tracks();
        player.toggle_playback();
        assert!(player.is_playing());
        player.toggle_playback();
        assert!(!player.is_playing());
        assert!(!player.tracks()[0].playing.get());
    }

    #[test]
    fn test_time_update_only_for_current() {
        let player = two_tracks();
        player.tracks()[0].position.set(90.0);
        let progress = player.on_time_update(0).unwrap();
        assert_eq!(progress.percent, 50.0);
        assert_eq!(progress.elapsed, "1:30");
        assert_eq!(progress.total, "3:00");
        assert_eq!(player.on_time_update(1), None);
    }

    #[test]
    fn test_progress_with_unknown_duration() {
        let progress = Progress::new(12.0, f64::NAN);
        assert_eq!(progress.percent, 0.0);
        assert_eq!(progress.elapsed, "0:12");
        assert_eq!(progress.total, "0:00");
        assert_eq!(Progress::new(3.0, 0.0).percent, 0.0);
    }

    #[test]
    fn test_loaded_metadata_label() {
        let player = two_tracks();
        assert_eq!(player.on_loaded_metadata(0), Some("3:00".to_string()));
        assert_eq!(player.on_loaded_metadata(1), None);
    }
}
