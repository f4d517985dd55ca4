use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::form_mode::Locale;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Configuration error: {0}")]
    Config(String),
}

fn default_demo_delay_ms() -> u64 {
    1000
}

fn default_autoplay_delay_ms() -> u64 {
    500
}

fn default_true() -> bool {
    true
}

fn default_volume() -> f64 {
    0.5
}

fn default_playlist() -> Vec<String> {
    vec![
        "/audio/track1.mp3".to_string(),
        "/audio/track2.mp3".to_string(),
    ]
}

/// Page configuration.
///
/// Every field has a default, so an absent or partial document is fine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortalConfig {
    #[serde(default)]
    pub locale: Locale,
    /// Delay before demo mode answers a submission
    #[serde(default = "default_demo_delay_ms")]
    pub demo_delay_ms: u64,
    /// Delay between page start and the autoplay attempt
    #[serde(default = "default_autoplay_delay_ms")]
    pub autoplay_delay_ms: u64,
    #[serde(default = "default_true")]
    pub autoplay: bool,
    /// Volume applied to every track, 0.0..=1.0
    #[serde(default = "default_volume")]
    pub initial_volume: f64,
    /// Audio sources, played in order and looped
    #[serde(default = "default_playlist")]
    pub playlist: Vec<String>,
    /// Target of the "forgot password" link; `#` when unset
    #[serde(default)]
    pub forgot_password_url: Option<String>,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            demo_delay_ms: default_demo_delay_ms(),
            autoplay_delay_ms: default_autoplay_delay_ms(),
            autoplay: true,
            initial_volume: default_volume(),
            playlist: default_playlist(),
            forgot_password_url: None,
        }
    }
}

impl PortalConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let mut config: PortalConfig = serde_json::from_str(json)?;
        config.validate()?;
        config.initial_volume = config.initial_volume.clamp(0.0, 1.0);
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.playlist.is_empty() {
            return Err(ConfigError::Config("playlist must not be empty".into()));
        }
        if self.playlist.iter().any(|src| src.trim().is_empty()) {
            return Err(ConfigError::Config("playlist entries must not be blank".into()));
        }
        if !self.initial_volume.is_finite() {
            return Err(ConfigError::Config("initial_volume must be a number".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_gives_defaults() {
        let config = PortalConfig::from_json("{}").unwrap();
        assert_eq!(config, PortalConfig::default());
        assert_eq!(config.demo_delay_ms, 1000);
        assert_eq!(config.autoplay_delay_ms, 500);
        assert_eq!(config.initial_volume, 0.5);
        assert_eq!(config.playlist.len(), 2);
    }

    #[test]
    fn test_partial_document() {
        let config =
            PortalConfig::from_json(r#"{"locale": "pt-br", "autoplay": false, "initial_volume": 3}"#)
                .unwrap();
        assert_eq!(config.locale, Locale::PtBr);
        assert!(!config.autoplay);
        assert_eq!(config.initial_volume, 1.0);
        assert_eq!(config.demo_delay_ms, 1000);
    }

    #[test]
    fn test_empty_playlist_rejected() {
        let err = PortalConfig::from_json(r#"{"playlist": []}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Config(_)));
    }

    #[test]
    fn test_malformed_document() {
        let err = PortalConfig::from_json("{").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
