use log::{info, warn};
use shared::wheel_config::WheelConfig;
use web_sys::window;

/// localStorage key holding an optional JSON wheel configuration
pub const WHEEL_CONFIG_KEY: &str = "wheel_config";

pub fn load_wheel_config() -> WheelConfig {
    let stored = window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(WHEEL_CONFIG_KEY).ok().flatten());

    match stored {
        Some(json) => parse_wheel_config(&json),
        None => WheelConfig::default(),
    }
}

/// Falls back to the reference wheel rather than failing the page.
pub fn parse_wheel_config(json: &str) -> WheelConfig {
    match WheelConfig::from_json(json) {
        Ok(config) => {
            info!("Using stored wheel config with {} segments", config.segment_count());
            config
        }
        Err(e) => {
            warn!("Ignoring stored wheel config: {}", e);
            WheelConfig::default()
        }
    }
}
