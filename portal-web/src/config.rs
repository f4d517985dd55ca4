//! Page configuration from `window.portalConfig`

use portal_common::{ConfigError, PortalConfig};
use tracing::{info, warn};

/// Read the optional `window.portalConfig` object.
///
/// Absent or invalid configuration falls back to the defaults.
pub fn load_config() -> PortalConfig {
    match read_window_config() {
        Ok(Some(config)) => {
            info!("Loaded page configuration: {config:?}");
            config
        }
        Ok(None) => PortalConfig::default(),
        Err(e) => {
            warn!("Ignoring page configuration: {e}");
            PortalConfig::default()
        }
    }
}

fn read_window_config() -> Result<Option<PortalConfig>, ConfigError> {
    let Some(window) = web_sys_x::window() else {
        return Ok(None);
    };
    let value = js_sys_x::Reflect::get(&window, &"portalConfig".into())
        .map_err(|e| ConfigError::Config(format!("{e:?}")))?;
    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }

    let json = js_sys_x::JSON::stringify(&value)
        .map_err(|e| ConfigError::Config(format!("portalConfig is not serializable: {e:?}")))?;
    PortalConfig::from_json(&String::from(json)).map(Some)
}
