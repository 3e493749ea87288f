//! Smooth in-page navigation and active-link tracking.

use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use web_sys::{Document, Event, HtmlAnchorElement, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::config::Config;
use crate::device::DeviceProfile;
use crate::dom;

pub const NAV_LINK_SELECTOR: &str = "nav a[href^=\"#\"]";
pub const SECTION_ORDER: [&str; 4] = ["home", "projects", "stats", "contact"];
pub const ACTIVE_CLASS: &str = "active";

/// Top offset and height of a section, in document pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn contains(&self, scroll: f64, lead: f64) -> bool {
        let start = self.top - lead;
        scroll >= start && scroll < start + self.height
    }
}

/// Picks the section the reader is in. Later sections win over earlier ones
/// when ranges overlap. Falls back to the first id when nothing matches.
pub fn current_section<'a, F>(order: &[&'a str], scroll: f64, lead: f64, mut bounds: F) -> Option<&'a str>
where
    F: FnMut(&str) -> Option<SectionBounds>,
{
    let first = order.first().copied()?;
    let current = order
        .iter()
        .copied()
        .filter(|id| bounds(id).is_some_and(|b| b.contains(scroll, lead)))
        .last()
        .unwrap_or(first);
    Some(current)
}

/// Where a click on a link to a section at `section_top` should scroll to.
pub fn scroll_target(section_top: f64, device: &DeviceProfile, config: &Config) -> f64 {
    section_top - config.header_offset_for(device.small_viewport)
}

pub fn fragment_href(id: &str) -> String {
    format!("#{}", id)
}

pub trait NavLink {
    fn target_href(&self) -> Option<String>;
    fn set_active(&self, active: bool);
}

/// Makes the first link pointing at `href` the only active one.
pub fn activate<L: NavLink>(links: &[L], href: &str) -> Option<usize> {
    let chosen = links.iter().position(|link| link.target_href().as_deref() == Some(href));
    for (i, link) in links.iter().enumerate() {
        link.set_active(Some(i) == chosen);
    }
    chosen
}

impl NavLink for HtmlAnchorElement {
    fn target_href(&self) -> Option<String> {
        // The attribute, not the resolved URL.
        self.get_attribute("href")
    }

    fn set_active(&self, active: bool) {
        let _ = self.class_list().toggle_with_force(ACTIVE_CLASS, active);
    }
}

fn section_bounds(document: &Document, id: &str) -> Option<SectionBounds> {
    let section: HtmlElement = dom::by_id(document, id)?;
    Some(SectionBounds {
        top: section.offset_top() as f64,
        height: section.offset_height() as f64,
    })
}

/// The in-page links in the nav bar, shared between the click handlers and
/// the per-frame scroll update.
pub struct NavLinks {
    document: Document,
    links: Vec<HtmlAnchorElement>,
    lead: f64,
}

impl NavLinks {
    pub fn collect(document: &Document, config: &Config) -> Self {
        Self {
            document: document.clone(),
            links: dom::query_all(document, NAV_LINK_SELECTOR),
            lead: config.section_lead,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.links.len()
    }

    /// Recomputes the active link for the given scroll position.
    pub fn sync_to_scroll(&self, scroll: f64) {
        let current = current_section(&SECTION_ORDER, scroll, self.lead, |id| {
            section_bounds(&self.document, id)
        });
        if let Some(id) = current {
            activate(&self.links, &fragment_href(id));
        }
    }
}

/// Intercepts clicks on in-page links and scrolls smoothly instead. The
/// listeners are registered non-passive so the default jump can be cancelled.
pub fn install(window: &Window, nav: Rc<NavLinks>, device: DeviceProfile, config: &Config) -> Vec<EventListener> {
    let mut listeners = Vec::with_capacity(nav.links.len());
    for link in nav.links.iter() {
        let window = window.clone();
        let nav_links = nav.clone();
        let config = config.clone();
        let clicked = link.clone();
        let options = EventListenerOptions::enable_prevent_default();
        let listener = EventListener::new_with_options(link, "click", options, move |event: &Event| {
            event.prevent_default();
            let Some(href) = clicked.target_href() else {
                return;
            };
            let id = href.trim_start_matches('#');
            let Some(section) = dom::by_id::<HtmlElement>(&nav_links.document, id) else {
                return;
            };

            let options = ScrollToOptions::new();
            options.set_top(scroll_target(section.offset_top() as f64, &device, &config));
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);

            for other in nav_links.links.iter() {
                other.set_active(false);
            }
            clicked.set_active(true);
        });
        listeners.push(listener);
    }
    listeners
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::collections::HashMap;

    struct FakeLink {
        href: String,
        active: Cell<bool>,
    }

    impl NavLink for FakeLink {
        fn target_href(&self) -> Option<String> {
            Some(self.href.clone())
        }

        fn set_active(&self, active: bool) {
            self.active.set(active);
        }
    }

    fn page() -> HashMap<&'static str, SectionBounds> {
        HashMap::from([
            ("home", SectionBounds { top: 0.0, height: 900.0 }),
            ("projects", SectionBounds { top: 900.0, height: 1200.0 }),
            ("stats", SectionBounds { top: 2100.0, height: 600.0 }),
            ("contact", SectionBounds { top: 2700.0, height: 800.0 }),
        ])
    }

    fn current(scroll: f64) -> &'static str {
        let sections = page();
        current_section(&SECTION_ORDER, scroll, 200.0, |id| sections.get(id).copied()).unwrap()
    }

    fn links() -> Vec<FakeLink> {
        SECTION_ORDER
            .iter()
            .map(|id| FakeLink {
                href: fragment_href(id),
                active: Cell::new(false),
            })
            .collect()
    }

    fn active_hrefs(links: &[FakeLink]) -> Vec<&str> {
        links.iter().filter(|l| l.active.get()).map(|l| l.href.as_str()).collect()
    }

    #[test]
    fn section_ranges_start_200px_early() {
        assert_eq!(current(0.0), "home");
        assert_eq!(current(699.0), "home");
        assert_eq!(current(700.0), "projects");
        assert_eq!(current(1899.0), "projects");
        assert_eq!(current(1900.0), "stats");
        assert_eq!(current(2500.0), "contact");
    }

    #[test]
    fn falls_back_to_first_section() {
        let sections = page();
        assert_eq!(current(-500.0), "home");
        assert_eq!(current(10_000.0), "home");
        assert_eq!(
            current_section(&SECTION_ORDER, 1000.0, 200.0, |_| None),
            Some("home")
        );
        assert_eq!(current_section(&[], 0.0, 200.0, |id| sections.get(id).copied()), None);
    }

    #[test]
    fn missing_sections_are_skipped() {
        let mut sections = page();
        sections.remove("stats");
        let pick = |scroll| current_section(&SECTION_ORDER, scroll, 200.0, |id| sections.get(id).copied());
        assert_eq!(pick(1800.0), Some("projects"));
        assert_eq!(pick(2000.0), Some("home"));
        assert_eq!(pick(2600.0), Some("contact"));
    }

    #[test]
    fn exactly_one_link_is_active_after_each_update() {
        let links = links();
        for scroll in [0.0, 750.0, 1950.0, 2600.0, 50_000.0] {
            let href = fragment_href(current(scroll));
            activate(&links, &href);
            assert_eq!(active_hrefs(&links), vec![href.as_str()]);
        }
    }

    #[test]
    fn activation_is_idempotent_and_later_update_wins() {
        let links = links();
        assert_eq!(activate(&links, "#contact"), Some(3));
        assert_eq!(activate(&links, "#contact"), Some(3));
        assert_eq!(active_hrefs(&links), vec!["#contact"]);

        activate(&links, &fragment_href(current(0.0)));
        assert_eq!(active_hrefs(&links), vec!["#home"]);
    }

    #[test]
    fn click_on_contact_scrolls_below_the_header() {
        let config = Config::default();
        let desktop = DeviceProfile::from_measurements(1440.0, false, &config);
        let phone = DeviceProfile::from_measurements(390.0, true, &config);
        let contact_top = page()["contact"].top;

        assert_eq!(scroll_target(contact_top, &desktop, &config), 2620.0);
        assert_eq!(scroll_target(contact_top, &phone, &config), 2640.0);

        let links = links();
        assert_eq!(activate(&links, "#contact"), Some(3));
        assert_eq!(active_hrefs(&links), vec!["#contact"]);
    }
}
