//! Page-level behaviors: the initial fade-in and the resize reload.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use gloo_render::{request_animation_frame, AnimationFrame};
use gloo_timers::callback::Timeout;
use web_sys::{HtmlElement, Window};

use crate::config::Config;
use crate::dom;

pub fn fade_transition(config: &Config) -> String {
    format!("opacity {}s ease", config.page_fade_secs)
}

/// Hides the body, then fades it in on the next frame. The fade is cancelled
/// if the returned handle is dropped before that frame.
pub fn fade_in(body: &HtmlElement, config: &Config) -> AnimationFrame {
    dom::set_style(body, "opacity", "0");
    dom::set_style(body, "transition", &fade_transition(config));

    let body = body.clone();
    request_animation_frame(move |_| dom::set_style(&body, "opacity", "1"))
}

/// Holds the pending reload while the window is still being resized.
pub struct ResizeReload {
    _listener: EventListener,
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl ResizeReload {
    /// Reloads the page once resizing has been quiet for the configured
    /// period. Layout-dependent state (breakpoints, offsets, star layers) is
    /// all computed at load, so a reload is how it gets recomputed.
    pub fn install(window: &Window, config: &Config) -> Self {
        let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
        let quiet_ms = config.resize_debounce_ms;

        let slot = pending.clone();
        let reload_window = window.clone();
        let listener = EventListener::new(window, "resize", move |_| {
            let window = reload_window.clone();
            // Replacing the previous timeout clears it.
            *slot.borrow_mut() = Some(Timeout::new(quiet_ms, move || {
                if let Err(e) = window.location().reload() {
                    log::warn!("Reload after resize failed: {:?}", e);
                }
            }));
        });

        Self {
            _listener: listener,
            pending,
        }
    }
}

impl Drop for ResizeReload {
    fn drop(&mut self) {
        self.pending.borrow_mut().take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fade_uses_configured_duration() {
        assert_eq!(fade_transition(&Config::default()), "opacity 0.6s ease");

        let slow = Config {
            page_fade_secs: 1.5,
            ..Config::default()
        };
        assert_eq!(fade_transition(&slow), "opacity 1.5s ease");
    }
}
