use web_sys::Document;

use crate::error::{EnhanceError, Result};

pub const STYLE_ELEMENT_ID: &str = "dynamic-styles";

/// Rules the behaviors rely on: the star keyframes, reveal and active-link
/// states, hover polish, and the accessibility overrides.
pub const DYNAMIC_STYLES: &str = r#"
@keyframes moveStar {
    0% {
        transform: translateY(100vh) translateX(0px) rotate(0deg) scale(0);
        opacity: 0;
    }
    10% {
        opacity: 1;
        transform: translateY(90vh) translateX(10px) rotate(36deg) scale(1);
    }
    90% {
        opacity: 1;
        transform: translateY(-10vh) translateX(60px) rotate(324deg) scale(1);
    }
    100% {
        transform: translateY(-20vh) translateX(80px) rotate(360deg) scale(0);
        opacity: 0;
    }
}

.animated {
    opacity: 1 !important;
    transform: translateY(0) !important;
}

nav a.active {
    color: #4ecdc4;
    text-shadow: 0 0 10px rgba(78, 205, 196, 0.5);
}

nav a.active::before {
    opacity: 1;
    transform: translateY(-50%) scale(1.3);
    background: #4ecdc4;
    box-shadow: 0 0 15px rgba(78, 205, 196, 0.6);
}

.project-item:hover {
    transform: translateY(-15px) scale(1.03) !important;
    box-shadow: 0 30px 60px rgba(138, 43, 226, 0.3) !important;
    border-color: rgba(78, 205, 196, 0.5) !important;
}

.stat-item:hover .stat-number {
    transform: scale(1.1);
    text-shadow: 0 0 20px rgba(255, 107, 107, 0.5);
}

@media (max-width: 768px) {
    .moving-stars {
        display: none;
    }

    .project-item:hover {
        transform: translateY(-5px) scale(1.01) !important;
    }

    nav a::before {
        display: none;
    }

    nav {
        backdrop-filter: blur(15px) !important;
        background: rgba(0, 0, 0, 0.3) !important;
    }
}

@media (max-width: 480px) {
    nav .header {
        flex-direction: column !important;
        gap: 0.5rem !important;
        padding: 0.5rem 0 !important;
    }

    nav {
        padding: 0.8rem 1rem !important;
        border-radius: 20px !important;
    }

    nav a {
        padding: 0.4rem 0.8rem !important;
        border-radius: 15px !important;
        background: rgba(255, 255, 255, 0.1);
        margin: 0.2rem 0;
        min-width: 120px;
        text-align: center;
    }
}

.project-item,
.stat-item,
.social-card {
    backface-visibility: hidden;
    perspective: 1000px;
    will-change: transform;
}

@media (prefers-reduced-motion: reduce) {
    *, *::before, *::after {
        animation-duration: 0.01ms !important;
        animation-iteration-count: 1 !important;
        transition-duration: 0.2s !important;
    }

    .moving-stars {
        display: none !important;
    }
}

nav a:focus,
.social-card:focus,
.more-projects a:focus {
    outline: 2px solid #4ecdc4;
    outline-offset: 2px;
    border-radius: 8px;
}

@media (prefers-contrast: high) {
    .projects-description,
    .more-projects,
    .stat-item,
    .social-card {
        border: 2px solid #fff;
        background: rgba(0, 0, 0, 0.8);
    }
}
"#;

/// Adds the stylesheet to `<head>` unless a previous load already did.
/// Returns whether it was added.
pub fn inject(document: &Document) -> Result<bool> {
    if document.get_element_by_id(STYLE_ELEMENT_ID).is_some() {
        return Ok(false);
    }
    let head = document.head().ok_or(EnhanceError::NoHead)?;
    let style = document.create_element("style")?;
    style.set_id(STYLE_ELEMENT_ID);
    style.set_text_content(Some(DYNAMIC_STYLES));
    head.append_child(&style)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_every_behavior() {
        for needle in [
            "@keyframes moveStar",
            ".animated",
            "nav a.active",
            ".project-item:hover",
            "prefers-reduced-motion: reduce",
            "prefers-contrast: high",
            ":focus",
        ] {
            assert!(DYNAMIC_STYLES.contains(needle), "missing {}", needle);
        }
    }

    #[test]
    fn braces_balance() {
        let opens = DYNAMIC_STYLES.matches('{').count();
        let closes = DYNAMIC_STYLES.matches('}').count();
        assert_eq!(opens, closes);
    }
}
