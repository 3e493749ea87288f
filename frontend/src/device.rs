use wasm_bindgen::JsValue;
use web_sys::Window;

use crate::config::Config;

/// Capabilities sampled once at startup. A resize reloads the page instead of
/// recomputing these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeviceProfile {
    pub small_viewport: bool,
    pub touch: bool,
}

impl DeviceProfile {
    pub fn detect(window: &Window, config: &Config) -> Self {
        let width = window
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or(f64::MAX);
        let touch = js_sys::Reflect::has(window, &JsValue::from_str("ontouchstart")).unwrap_or(false);

        Self::from_measurements(width, touch, config)
    }

    pub fn from_measurements(viewport_width: f64, touch: bool, config: &Config) -> Self {
        Self {
            small_viewport: viewport_width <= config.small_viewport_max_width,
            touch,
        }
    }

    /// Pointer hover effects only make sense on a large, mouse-driven screen.
    pub fn hover_capable(&self) -> bool {
        !self.small_viewport && !self.touch
    }

    pub fn label(&self) -> &'static str {
        if self.small_viewport {
            "Mobile"
        } else {
            "Desktop"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_is_inclusive() {
        let config = Config::default();
        assert!(DeviceProfile::from_measurements(768.0, false, &config).small_viewport);
        assert!(!DeviceProfile::from_measurements(769.0, false, &config).small_viewport);
    }

    #[test]
    fn hover_needs_large_non_touch_screen() {
        let config = Config::default();
        assert!(DeviceProfile::from_measurements(1280.0, false, &config).hover_capable());
        assert!(!DeviceProfile::from_measurements(1280.0, true, &config).hover_capable());
        assert!(!DeviceProfile::from_measurements(400.0, false, &config).hover_capable());
    }
}
