//! Per-frame scroll work: video parallax, nav bar backdrop and the active
//! nav link. Scroll events only schedule a frame; the frame does the work.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use gloo_render::{request_animation_frame, AnimationFrame};
use web_sys::{Document, HtmlElement, Window};

use crate::config::Config;
use crate::device::DeviceProfile;
use crate::dom;
use crate::navigation::NavLinks;

pub const VIDEO_ID: &str = "video";

/// The two looks of the nav bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAppearance {
    Resting,
    Solid,
}

impl NavAppearance {
    pub fn for_scroll(scroll: f64, threshold: f64) -> Self {
        if scroll >= threshold {
            NavAppearance::Solid
        } else {
            NavAppearance::Resting
        }
    }

    pub fn background(&self) -> &'static str {
        match self {
            NavAppearance::Resting => "rgba(255, 255, 255, 0.08)",
            NavAppearance::Solid => "rgba(0, 0, 0, 0.4)",
        }
    }

    pub fn backdrop_filter(&self) -> &'static str {
        match self {
            NavAppearance::Resting => "blur(20px)",
            NavAppearance::Solid => "blur(25px)",
        }
    }

    pub fn border_color(&self) -> &'static str {
        match self {
            NavAppearance::Resting => "rgba(255, 255, 255, 0.1)",
            NavAppearance::Solid => "rgba(255, 255, 255, 0.2)",
        }
    }

    fn apply(&self, nav: &HtmlElement) {
        dom::set_style(nav, "background", self.background());
        dom::set_style(nav, "backdrop-filter", self.backdrop_filter());
        dom::set_style(nav, "border-color", self.border_color());
    }
}

pub fn parallax_transform(scroll: f64, factor: f64) -> String {
    format!("translate3d(0, {}px, 0)", scroll * factor)
}

/// Collapses any number of scroll events into one update per frame by
/// holding the handle of the frame already requested.
pub struct FrameGate<H = AnimationFrame> {
    pending: RefCell<Option<H>>,
}

impl<H> Default for FrameGate<H> {
    fn default() -> Self {
        Self {
            pending: RefCell::new(None),
        }
    }
}

impl<H> FrameGate<H> {
    /// Calls `request` and keeps its handle unless a frame is already pending.
    /// Returns whether a new frame was requested.
    pub fn schedule(&self, request: impl FnOnce() -> H) -> bool {
        if self.pending.borrow().is_some() {
            return false;
        }
        let handle = request();
        *self.pending.borrow_mut() = Some(handle);
        true
    }

    /// Hands back the pending handle, opening the gate for the next frame.
    pub fn release(&self) -> Option<H> {
        self.pending.borrow_mut().take()
    }
}

struct ScrollEffects {
    window: Window,
    document: Document,
    nav_links: Rc<NavLinks>,
    device: DeviceProfile,
    threshold: f64,
    parallax_factor: f64,
    gate: FrameGate,
}

impl ScrollEffects {
    fn update(&self) {
        let scrolled = self.window.page_y_offset().unwrap_or(0.0);

        if !self.device.small_viewport {
            if let Some(video) = dom::by_id::<HtmlElement>(&self.document, VIDEO_ID) {
                dom::set_style(&video, "transform", &parallax_transform(scrolled, self.parallax_factor));
            }
        }

        if let Some(nav) = dom::query_one::<HtmlElement>(&self.document, "nav") {
            NavAppearance::for_scroll(scrolled, self.threshold).apply(&nav);
        }

        self.nav_links.sync_to_scroll(scrolled);
    }
}

pub fn install(
    window: &Window,
    document: &Document,
    nav_links: Rc<NavLinks>,
    device: DeviceProfile,
    config: &Config,
) -> EventListener {
    let effects = Rc::new(ScrollEffects {
        window: window.clone(),
        document: document.clone(),
        nav_links,
        device,
        threshold: config.nav_threshold,
        parallax_factor: config.parallax_factor,
        gate: FrameGate::default(),
    });

    // Passive: the handler never cancels scrolling.
    EventListener::new(window, "scroll", move |_| {
        let frame = effects.clone();
        effects.gate.schedule(move || {
            request_animation_frame(move |_| {
                let _fired = frame.gate.release();
                frame.update();
            })
        });
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_switches_exactly_at_threshold() {
        assert_eq!(NavAppearance::for_scroll(0.0, 100.0), NavAppearance::Resting);
        assert_eq!(NavAppearance::for_scroll(99.0, 100.0), NavAppearance::Resting);
        assert_eq!(NavAppearance::for_scroll(99.9, 100.0), NavAppearance::Resting);
        assert_eq!(NavAppearance::for_scroll(100.0, 100.0), NavAppearance::Solid);
        assert_eq!(NavAppearance::for_scroll(4000.0, 100.0), NavAppearance::Solid);
    }

    #[test]
    fn appearances_differ_in_every_property() {
        let (a, b) = (NavAppearance::Resting, NavAppearance::Solid);
        assert_ne!(a.background(), b.background());
        assert_ne!(a.backdrop_filter(), b.backdrop_filter());
        assert_ne!(a.border_color(), b.border_color());
    }

    #[test]
    fn parallax_moves_at_half_speed() {
        assert_eq!(parallax_transform(0.0, 0.5), "translate3d(0, 0px, 0)");
        assert_eq!(parallax_transform(300.0, 0.5), "translate3d(0, 150px, 0)");
        assert_eq!(parallax_transform(75.0, 0.5), "translate3d(0, 37.5px, 0)");
    }

    #[test]
    fn one_frame_per_burst_of_scroll_events() {
        let gate: FrameGate<u32> = FrameGate::default();
        let mut requests = 0;
        let scheduled = (0..10)
            .filter(|_| {
                gate.schedule(|| {
                    requests += 1;
                    requests
                })
            })
            .count();
        assert_eq!(scheduled, 1);
        assert_eq!(requests, 1);

        assert_eq!(gate.release(), Some(1));
        assert!(gate.schedule(|| 2));
        assert!(!gate.schedule(|| 3));
        assert_eq!(gate.release(), Some(2));
        assert_eq!(gate.release(), None);
    }
}
