use std::fmt::Display;
use std::rc::Rc;

use gloo_events::EventListener;
use gloo_render::AnimationFrame;
use web_sys::{HtmlElement, Window};

use crate::config::Config;
use crate::device::DeviceProfile;
use crate::dom::{self, Observer};
use crate::error::Result;
use crate::lifecycle::{self, ResizeReload};
use crate::navigation::{self, NavLinks};
use crate::typewriter::{Typewriter, TypewriterHandle};
use crate::{analytics, hover, media, particles, reveal, scroll};

pub const ROLE_SELECTOR: &str = ".role";

/// Everything the page behaviors keep alive. Dropping it detaches listeners,
/// disconnects observers and cancels timers.
pub struct PageController {
    _listeners: Vec<EventListener>,
    _observers: Vec<Observer>,
    _typewriter: Option<TypewriterHandle>,
    _fade: Option<AnimationFrame>,
    _resize: ResizeReload,
}

/// Per-behavior counts for the startup log line.
#[derive(Default)]
struct Summary {
    revealed: usize,
    nav_links: usize,
    stars: usize,
    hover_listeners: usize,
    media: usize,
}

/// Logs a failed behavior and carries on with the rest.
fn guarded<T, E: Display>(behavior: &str, result: std::result::Result<T, E>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("{} disabled: {}", behavior, e);
            None
        }
    }
}

impl PageController {
    pub fn install(window: &Window, config: &Config) -> Result<Self> {
        let document = dom::document(window)?;
        let device = DeviceProfile::detect(window, config);

        let mut listeners = Vec::new();
        let mut observers = Vec::new();
        let mut summary = Summary::default();

        if let Some((observer, count)) = guarded("Reveal animations", reveal::install(&document, config)) {
            observers.push(observer);
            summary.revealed = count;
        }

        let typewriter = dom::query_one::<HtmlElement>(&document, ROLE_SELECTOR).map(|role| {
            let text = role.text_content().unwrap_or_default();
            Typewriter::start(role, text, &config.typing)
        });

        let nav_links = Rc::new(NavLinks::collect(&document, config));
        summary.nav_links = nav_links.len();
        listeners.extend(navigation::install(window, nav_links.clone(), device, config));
        listeners.push(scroll::install(window, &document, nav_links, device, config));

        if let Some(stars) = guarded("Background stars", particles::install(&document, &device, config)) {
            summary.stars = stars;
        }

        let hovers = hover::install(&document, &device);
        summary.hover_listeners = hovers.len();
        listeners.extend(hovers);

        if let Some((observer, count)) = guarded("Lazy media", media::install_lazy_play(&document, config)) {
            observers.push(observer);
            summary.media = count;
        }

        if let Some(guards) = guarded("Video guards", media::install_video_guards(&document, &device)) {
            listeners.extend(guards);
        }

        let fade = document.body().map(|body| lifecycle::fade_in(&body, config));
        let resize = ResizeReload::install(window, config);
        listeners.extend(analytics::install(window, &document));

        log::info!(
            "Portfolio enhancements ready. Device: {}, touch: {}",
            device.label(),
            if device.touch { "enabled" } else { "disabled" }
        );
        log::debug!(
            "Wired {} reveal targets, {} nav links, {} stars, {} hover listeners, {} media elements",
            summary.revealed,
            summary.nav_links,
            summary.stars,
            summary.hover_listeners,
            summary.media
        );

        Ok(Self {
            _listeners: listeners,
            _observers: observers,
            _typewriter: typewriter,
            _fade: fade,
            _resize: resize,
        })
    }
}
