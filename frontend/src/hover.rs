use gloo_events::EventListener;
use web_sys::{Document, HtmlElement};

use crate::device::DeviceProfile;
use crate::dom;

pub const REST_TRANSFORM: &str = "translateY(0) scale(1)";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HoverGroup {
    ProjectCard,
    SocialCard,
}

impl HoverGroup {
    pub const ALL: [HoverGroup; 2] = [HoverGroup::ProjectCard, HoverGroup::SocialCard];

    pub fn selector(&self) -> &'static str {
        match self {
            HoverGroup::ProjectCard => ".project-item",
            HoverGroup::SocialCard => ".social-card",
        }
    }

    /// Lift in px and scale factor.
    pub fn lift_and_scale(&self) -> (u32, f64) {
        match self {
            HoverGroup::ProjectCard => (15, 1.03),
            HoverGroup::SocialCard => (10, 1.02),
        }
    }

    pub fn transform(&self, hovered: bool) -> String {
        if !hovered {
            return REST_TRANSFORM.to_string();
        }
        let (lift, scale) = self.lift_and_scale();
        format!("translateY(-{}px) scale({})", lift, scale)
    }
}

fn attach(el: &HtmlElement, group: HoverGroup) -> [EventListener; 2] {
    let target = el.clone();
    let enter = EventListener::new(el, "mouseenter", move |_| {
        dom::set_style(&target, "transform", &group.transform(true));
    });
    let target = el.clone();
    let leave = EventListener::new(el, "mouseleave", move |_| {
        dom::set_style(&target, "transform", &group.transform(false));
    });
    [enter, leave]
}

/// Lift-on-hover for the cards. Does nothing on touch or small screens.
pub fn install(document: &Document, device: &DeviceProfile) -> Vec<EventListener> {
    if !device.hover_capable() {
        log::debug!("Skipping hover effects on touch/small viewport");
        return Vec::new();
    }

    let mut listeners = Vec::new();
    for group in HoverGroup::ALL {
        for el in dom::query_all::<HtmlElement>(document, group.selector()) {
            listeners.extend(attach(&el, group));
        }
    }
    listeners
}
