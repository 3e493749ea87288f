//! Click tagging for outbound contact links, forwarded to the page's `gtag`
//! when the site has analytics loaded.

use gloo_events::EventListener;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Window};

use crate::dom;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutboundLink {
    WhatsApp,
    Instagram,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsPayload {
    pub event_category: &'static str,
    pub event_label: &'static str,
}

impl OutboundLink {
    pub const ALL: [OutboundLink; 2] = [OutboundLink::WhatsApp, OutboundLink::Instagram];

    pub fn href_fragment(&self) -> &'static str {
        match self {
            OutboundLink::WhatsApp => "wa.me",
            OutboundLink::Instagram => "instagram.com",
        }
    }

    pub fn selector(&self) -> String {
        format!("a[href*=\"{}\"]", self.href_fragment())
    }

    pub fn event_name(&self) -> &'static str {
        match self {
            OutboundLink::WhatsApp => "contact",
            OutboundLink::Instagram => "social",
        }
    }

    pub fn payload(&self) -> AnalyticsPayload {
        AnalyticsPayload {
            event_category: "engagement",
            event_label: match self {
                OutboundLink::WhatsApp => "whatsapp",
                OutboundLink::Instagram => "instagram",
            },
        }
    }
}

/// Sends `gtag('event', name, payload)` if the page defines `gtag`.
fn track(window: &Window, link: OutboundLink) {
    let Ok(gtag) = js_sys::Reflect::get(window, &JsValue::from_str("gtag")) else {
        return;
    };
    let Some(gtag) = gtag.dyn_ref::<js_sys::Function>() else {
        return;
    };
    let payload = match serde_wasm_bindgen::to_value(&link.payload()) {
        Ok(payload) => payload,
        Err(e) => {
            log::warn!("Could not encode analytics payload: {}", e);
            return;
        }
    };
    let _ = gtag.call3(
        &JsValue::NULL,
        &JsValue::from_str("event"),
        &JsValue::from_str(link.event_name()),
        &payload,
    );
}

/// Tags the first link of each known outbound kind.
pub fn install(window: &Window, document: &Document) -> Vec<EventListener> {
    let mut listeners = Vec::new();
    for link in OutboundLink::ALL {
        let Some(anchor) = dom::query_one::<Element>(document, &link.selector()) else {
            continue;
        };
        let window = window.clone();
        listeners.push(EventListener::new(&anchor, "click", move |_| track(&window, link)));
    }
    listeners
}
