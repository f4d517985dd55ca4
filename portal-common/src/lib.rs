//! portal-common - Browser-free state for the portal page
//!
//! Form and player controllers are plain data structures driven by method
//! calls. The web crate owns the DOM, the host bridge object, and the audio
//! elements, and forwards events into these types.

pub mod auth;
pub mod bridge;
pub mod config;
pub mod form_mode;
pub mod time_format;
pub mod track_player;

pub use auth::{
    AuthAction, AuthError, AuthForm, AuthResponse, AuthResult, Credentials, Dispatched, Feedback,
    ResponseOutcome, SubmitError, SubmissionId, ValidationError,
};
pub use bridge::{BridgeCallback, BridgeError, BridgeEvent, HostBridge};
pub use config::{ConfigError, PortalConfig};
pub use form_mode::{FormCopy, FormMode, Locale, Messages};
pub use time_format::format_time;
pub use track_player::{AudioTrack, PlaybackError, PlayerError, Progress, TrackPlayer};
