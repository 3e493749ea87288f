use log::Level;
use serde::Deserialize;

/// Id of the optional `<script type="application/json">` block holding overrides.
pub const CONFIG_ELEMENT_ID: &str = "enhancer-config";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Every tunable the page behaviors read. Defaults match the shipped site.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub small_viewport_max_width: f64,
    pub header_offset: f64,
    pub header_offset_small: f64,
    pub section_lead: f64,
    pub nav_threshold: f64,
    pub parallax_factor: f64,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub media_threshold: f64,
    pub typing: TypingTiming,
    pub resize_debounce_ms: u32,
    pub star_counts: StarCounts,
    pub particles_on_small_viewport: bool,
    pub page_fade_secs: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            small_viewport_max_width: 768.0,
            header_offset: 80.0,
            header_offset_small: 60.0,
            section_lead: 200.0,
            nav_threshold: 100.0,
            parallax_factor: 0.5,
            reveal_threshold: 0.1,
            reveal_root_margin: "50px 0px -50px 0px".to_string(),
            media_threshold: 0.25,
            typing: TypingTiming::default(),
            resize_debounce_ms: 250,
            star_counts: StarCounts::default(),
            particles_on_small_viewport: false,
            page_fade_secs: 0.6,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct TypingTiming {
    pub warmup_ms: u32,
    pub speed_ms: u32,
    pub jitter_ms: u32,
    pub caret_hold_ms: u32,
}

impl Default for TypingTiming {
    fn default() -> Self {
        Self {
            warmup_ms: 1000,
            speed_ms: 100,
            jitter_ms: 40,
            caret_hold_ms: 2000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct StarCounts {
    pub projects: usize,
    pub stats: usize,
    pub contact: usize,
}

impl Default for StarCounts {
    fn default() -> Self {
        Self {
            projects: 12,
            stats: 8,
            contact: 20,
        }
    }
}

impl Config {
    /// Parses page-supplied overrides. Unknown keys are ignored and missing
    /// keys keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Reads the override block from the document, falling back to defaults.
    pub fn load(document: &web_sys::Document) -> Self {
        let Some(raw) = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content())
        else {
            return Self::default();
        };

        match Self::from_json(&raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Ignoring malformed #{}: {}", CONFIG_ELEMENT_ID, e);
                Self::default()
            }
        }
    }

    pub fn header_offset_for(&self, small_viewport: bool) -> f64 {
        if small_viewport {
            self.header_offset_small
        } else {
            self.header_offset
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_object_yields_defaults() {
        assert_eq!(Config::from_json("{}").unwrap(), Config::default());
    }

    #[test]
    fn partial_overrides_keep_other_defaults() {
        let config = Config::from_json(
            r#"{ "nav_threshold": 150, "typing": { "speed_ms": 60 }, "star_counts": { "contact": 4 } }"#,
        )
        .unwrap();

        assert_eq!(config.nav_threshold, 150.0);
        assert_eq!(config.typing.speed_ms, 60);
        assert_eq!(config.typing.warmup_ms, 1000);
        assert_eq!(config.star_counts.contact, 4);
        assert_eq!(config.star_counts.projects, 12);
        assert_eq!(config.section_lead, 200.0);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(Config::from_json("{ nav_threshold: }").is_err());
    }

    #[test]
    fn header_offset_depends_on_viewport() {
        let config = Config::default();
        assert_eq!(config.header_offset_for(false), 80.0);
        assert_eq!(config.header_offset_for(true), 60.0);
    }
}
