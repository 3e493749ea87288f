//! Starts background videos once they scroll into view, and keeps broken
//! videos out of the layout.

use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, HtmlMediaElement, HtmlVideoElement};

use crate::config::Config;
use crate::device::DeviceProfile;
use crate::dom::{self, Observer};
use crate::error::{EnhanceError, Result};

pub const MEDIA_SELECTOR: &str = "video, img";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Video,
    Image,
}

impl MediaKind {
    pub fn from_tag(tag: &str) -> Option<Self> {
        if tag.eq_ignore_ascii_case("video") {
            Some(MediaKind::Video)
        } else if tag.eq_ignore_ascii_case("img") {
            Some(MediaKind::Image)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaAction {
    Play,
    Ignore,
}

/// What to do the first time a media element becomes visible. The element is
/// unobserved afterwards either way.
pub fn on_visible(kind: MediaKind) -> MediaAction {
    match kind {
        MediaKind::Video => MediaAction::Play,
        MediaKind::Image => MediaAction::Ignore,
    }
}

fn play(media: HtmlMediaElement) {
    let promise = match media.play() {
        Ok(promise) => promise,
        Err(e) => {
            log::warn!("Video autoplay failed: {}", EnhanceError::from(e));
            return;
        }
    };
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(e) = JsFuture::from(promise).await {
            log::warn!("Video autoplay failed for {}: {}", media.current_src(), EnhanceError::from(e));
        }
    });
}

/// Watches every video and image; plays videos on first sight.
pub fn install_lazy_play(document: &Document, config: &Config) -> Result<(Observer, usize)> {
    let observer = Observer::new(config.media_threshold, None, |entries, observer| {
        for entry in dom::intersection_entries(&entries) {
            if !entry.is_intersecting() {
                continue;
            }
            let target: Element = entry.target();
            if let Some(MediaAction::Play) = MediaKind::from_tag(&target.tag_name()).map(on_visible) {
                if let Ok(media) = target.clone().dyn_into::<HtmlMediaElement>() {
                    play(media);
                }
            }
            observer.unobserve(&target);
        }
    })?;

    let media = dom::query_all::<Element>(document, MEDIA_SELECTOR);
    for el in &media {
        observer.observe(el);
    }
    Ok((observer, media.len()))
}

/// Mobile playback attributes and load-failure handling for every video.
pub fn install_video_guards(document: &Document, device: &DeviceProfile) -> Result<Vec<EventListener>> {
    let mut listeners = Vec::new();
    for video in dom::query_all::<HtmlVideoElement>(document, "video") {
        if device.small_viewport {
            video.set_attribute("playsinline", "")?;
            video.set_muted(true);
        }

        let failed = video.clone();
        listeners.push(EventListener::new(&video, "error", move |_| {
            log::warn!("Video failed to load: {}", failed.src());
            dom::set_style(&failed, "display", "none");
        }));
    }
    Ok(listeners)
}
