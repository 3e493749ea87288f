//! Scroll-triggered reveal of content blocks.
//!
//! Eligible elements start hidden and pushed down. The first time one crosses
//! into the viewport it gets the `animated` class, which the injected styles
//! resolve to its resting position. Members of the repeating grids are
//! staggered by their position in the grid. The stagger only applies to the
//! reveal itself and is lifted once that transition has run, so later
//! transitions (hover lifts) start immediately.

use gloo_timers::future::TimeoutFuture;
use web_sys::{Document, HtmlElement};

use crate::config::Config;
use crate::dom::{self, Observer};
use crate::error::Result;

pub const REVEAL_SELECTORS: [&str; 8] = [
    ".project-item",
    ".stat-item",
    ".social-card",
    ".projects-description",
    ".more-projects",
    ".projects h2",
    ".contact h2",
    ".contact-description",
];

pub const REVEALED_CLASS: &str = "animated";

const HIDDEN_OPACITY: &str = "0";
const HIDDEN_TRANSFORM: &str = "translateY(50px)";
const REVEAL_TRANSITION: &str = "all 0.8s cubic-bezier(0.25, 0.46, 0.45, 0.94)";
/// Duration of `REVEAL_TRANSITION`.
pub const REVEAL_DURATION_MS: u32 = 800;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealGroup {
    Project,
    Stat,
    Social,
}

impl RevealGroup {
    pub const ALL: [RevealGroup; 3] = [RevealGroup::Project, RevealGroup::Stat, RevealGroup::Social];

    pub fn class(&self) -> &'static str {
        match self {
            RevealGroup::Project => "project-item",
            RevealGroup::Stat => "stat-item",
            RevealGroup::Social => "social-card",
        }
    }

    pub fn selector(&self) -> &'static str {
        match self {
            RevealGroup::Project => ".project-item",
            RevealGroup::Stat => ".stat-item",
            RevealGroup::Social => ".social-card",
        }
    }

    pub fn stagger_step_ms(&self) -> u32 {
        match self {
            RevealGroup::Project => 100,
            RevealGroup::Stat => 200,
            RevealGroup::Social => 150,
        }
    }
}

/// Where an element sits inside its repeating group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupSlot {
    pub group: RevealGroup,
    pub index: usize,
}

impl GroupSlot {
    pub fn stagger_ms(&self) -> u32 {
        self.index as u32 * self.group.stagger_step_ms()
    }

    /// When the staggered reveal has finished, counted from the reveal.
    pub fn settle_ms(&self) -> u32 {
        self.stagger_ms() + REVEAL_DURATION_MS
    }
}

pub trait RevealTarget {
    fn is_revealed(&self) -> bool;
    fn mark_revealed(&self);
    fn set_stagger(&self, delay_ms: u32);
    /// Drops the transition delay so the element reacts without lag again.
    fn clear_stagger(&self);
}

/// Reveals `target` unless it already was. Returns whether anything changed.
pub fn reveal<T: RevealTarget + ?Sized>(target: &T, slot: Option<GroupSlot>) -> bool {
    if target.is_revealed() {
        return false;
    }
    target.mark_revealed();
    if let Some(slot) = slot {
        target.set_stagger(slot.stagger_ms());
    }
    true
}

/// Runs once a staggered reveal is over.
pub fn settle<T: RevealTarget + ?Sized>(target: &T) {
    if target.is_revealed() {
        target.clear_stagger();
    }
}

impl RevealTarget for HtmlElement {
    fn is_revealed(&self) -> bool {
        dom::has_class(self, REVEALED_CLASS)
    }

    fn mark_revealed(&self) {
        let _ = self.class_list().add_1(REVEALED_CLASS);
    }

    fn set_stagger(&self, delay_ms: u32) {
        let delay = format!("{}ms", delay_ms);
        dom::set_style(self, "animation-delay", &delay);
        dom::set_style(self, "transition-delay", &delay);
    }

    fn clear_stagger(&self) {
        let _ = self.style().remove_property("transition-delay");
    }
}

fn slot_for(document: &Document, el: &HtmlElement) -> Option<GroupSlot> {
    let group = RevealGroup::ALL
        .into_iter()
        .find(|group| dom::has_class(el, group.class()))?;
    let index = dom::query_all::<HtmlElement>(document, group.selector())
        .iter()
        .position(|member| member == el)?;
    Some(GroupSlot { group, index })
}

/// Hides every eligible element and starts watching for it to scroll in.
/// Returns the observer along with how many elements it watches.
pub fn install(document: &Document, config: &Config) -> Result<(Observer, usize)> {
    let doc = document.clone();
    let observer = Observer::new(
        config.reveal_threshold,
        Some(config.reveal_root_margin.as_str()),
        move |entries, _| {
            for entry in dom::intersection_entries(&entries) {
                if !entry.is_intersecting() {
                    continue;
                }
                let Ok(el) = wasm_bindgen::JsCast::dyn_into::<HtmlElement>(entry.target()) else {
                    continue;
                };
                if el.is_revealed() {
                    continue;
                }
                let slot = slot_for(&doc, &el);
                if !reveal(&el, slot) {
                    continue;
                }
                if let Some(slot) = slot {
                    wasm_bindgen_futures::spawn_local(async move {
                        TimeoutFuture::new(slot.settle_ms()).await;
                        settle(&el);
                    });
                }
            }
        },
    )?;

    let mut watched = 0;
    for selector in REVEAL_SELECTORS {
        for el in dom::query_all::<HtmlElement>(document, selector) {
            dom::set_style(&el, "opacity", HIDDEN_OPACITY);
            dom::set_style(&el, "transform", HIDDEN_TRANSFORM);
            dom::set_style(&el, "transition", REVEAL_TRANSITION);
            observer.observe(&el);
            watched += 1;
        }
    }

    Ok((observer, watched))
}
