use serde::{Deserialize, Serialize};

/// Scroll offset (px) past which the header switches to its opaque style.
pub const NAV_SCROLL_THRESHOLD: f64 = 50.0;

/// Scroll offset (px) past which the hero hides its scroll indicator.
pub const HERO_SCROLL_THRESHOLD: f64 = 50.0;

/// Character cap for project descriptions in the compact "other" grid.
pub const PREVIEW_CHARS: usize = 60;

/// Presentation knobs for the page. Every field can be overridden from the
/// `"page"` object of the content document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageConfig {
    pub nav_threshold: f64,
    pub hero_threshold: f64,
    pub preview_chars: usize,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            nav_threshold: NAV_SCROLL_THRESHOLD,
            hero_threshold: HERO_SCROLL_THRESHOLD,
            preview_chars: PREVIEW_CHARS,
        }
    }
}
