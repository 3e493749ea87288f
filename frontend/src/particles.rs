//! Drifting background stars for the dark sections.

use web_sys::{Document, HtmlElement};

use crate::config::{Config, StarCounts};
use crate::device::DeviceProfile;
use crate::dom;
use crate::error::Result;

pub const STARS_CLASS: &str = "moving-stars";

const LAYER_STYLE: &str = "position: absolute; top: 0; left: 0; width: 100%; height: 100%; \
    pointer-events: none; z-index: 1; overflow: hidden;";

/// Section ids that get a star layer, with the star count for each.
pub fn star_fields(counts: &StarCounts) -> [(&'static str, usize); 3] {
    [
        ("projects", counts.projects),
        ("stats", counts.stats),
        ("contact", counts.contact),
    ]
}

pub fn star_count(base: usize, small_viewport: bool) -> usize {
    if small_viewport {
        base / 2
    } else {
        base
    }
}

/// Uniform samples in `[0, 1)`.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;

    fn in_range(&mut self, low: f64, high: f64) -> f64 {
        low + self.next_f64() * (high - low)
    }
}

pub struct JsRandom;

impl RandomSource for JsRandom {
    fn next_f64(&mut self) -> f64 {
        js_sys::Math::random()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StarSpec {
    pub size: f64,
    pub x: f64,
    pub y: f64,
    pub opacity: f64,
    pub duration: f64,
    pub delay: f64,
}

impl StarSpec {
    pub fn sample<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        Self {
            size: rng.in_range(0.5, 2.5),
            x: rng.in_range(0.0, 100.0),
            y: rng.in_range(0.0, 100.0),
            opacity: rng.in_range(0.2, 0.8),
            duration: rng.in_range(8.0, 18.0),
            delay: rng.in_range(0.0, 5.0),
        }
    }

    pub fn css(&self) -> String {
        format!(
            "position: absolute; width: {size}px; height: {size}px; background: #fff; \
             border-radius: 50%; left: {x}%; top: {y}%; opacity: {opacity}; \
             animation: moveStar {duration}s linear {delay}s infinite; will-change: transform; \
             box-shadow: 0 0 {glow}px rgba(255, 255, 255, 0.3);",
            size = self.size,
            x = self.x,
            y = self.y,
            opacity = self.opacity,
            duration = self.duration,
            delay = self.delay,
            glow = self.size * 2.0,
        )
    }
}

/// The stars one container should get.
pub fn plan_field<R: RandomSource + ?Sized>(
    container_present: bool,
    base: usize,
    device: &DeviceProfile,
    config: &Config,
    rng: &mut R,
) -> Vec<StarSpec> {
    if !container_present || (device.small_viewport && !config.particles_on_small_viewport) {
        return Vec::new();
    }
    (0..star_count(base, device.small_viewport))
        .map(|_| StarSpec::sample(rng))
        .collect()
}

fn mount(document: &Document, container: &HtmlElement, stars: &[StarSpec]) -> Result<()> {
    let layer = document.create_element("div")?;
    layer.set_class_name(STARS_CLASS);
    layer.set_attribute("style", LAYER_STYLE)?;

    for spec in stars {
        let star = document.create_element("div")?;
        star.set_attribute("style", &spec.css())?;
        layer.append_child(&star)?;
    }

    container.append_child(&layer)?;
    Ok(())
}

/// Adds a star layer to each background section. Returns how many stars went in.
pub fn install(document: &Document, device: &DeviceProfile, config: &Config) -> Result<usize> {
    let mut rng = JsRandom;
    let mut total = 0;

    for (id, base) in star_fields(&config.star_counts) {
        let container = dom::by_id::<HtmlElement>(document, id);
        let stars = plan_field(container.is_some(), base, device, config, &mut rng);
        if let (Some(container), false) = (container, stars.is_empty()) {
            mount(document, &container, &stars)?;
            total += stars.len();
        }
    }

    if total == 0 && device.small_viewport {
        log::debug!("Skipping background stars on small viewport");
    }
    Ok(total)
}
