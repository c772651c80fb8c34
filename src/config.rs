use log::Level;
use serde::Serialize;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub const SCROLL_THROTTLE_MS: u32 = 16; // ~60fps
pub const RESIZE_DEBOUNCE_MS: u32 = 250;

pub const NAVBAR_SCROLL_THRESHOLD: f64 = 50.0;
pub const NAVBAR_HEIGHT: f64 = 70.0;

pub const CAROUSEL_VISIBILITY_THRESHOLD: f64 = 0.1;
pub const COUNTER_VISIBILITY_THRESHOLD: f64 = 0.5;
pub const COUNTER_ROOT_MARGIN: &str = "0px 0px -100px 0px";
pub const COUNTER_DURATION_MS: f64 = 2000.0;

pub const MODAL_ENTRANCE_DELAY_MS: u32 = 100;
pub const MODAL_RESET_DELAY_MS: u32 = 400;

pub const TOAST_LIFETIME_MS: u32 = 5000;
pub const TOAST_EXIT_MS: u32 = 300;

pub const TYPEWRITER_SPEED_MS: u32 = 80;
pub const CONTACT_SEND_DELAY_MS: u32 = 2000;

/// Options handed to the animate-on-scroll library at startup.
#[derive(Debug, Clone, Serialize)]
pub struct AosOptions {
    pub duration: u32,
    pub easing: &'static str,
    pub once: bool,
    pub offset: u32,
}

impl Default for AosOptions {
    fn default() -> Self {
        Self {
            duration: 800,
            easing: "ease-in-out",
            once: true,
            offset: 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn aos_options_wire_shape() {
        let value = serde_json::to_value(AosOptions::default()).unwrap();
        assert_eq!(
            value,
            json!({
                "duration": 800,
                "easing": "ease-in-out",
                "once": true,
                "offset": 100
            })
        );
    }
}
