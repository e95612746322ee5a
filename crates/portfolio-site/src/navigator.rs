//! In-page navigation to tagged sections.

use std::fmt;

/// Attribute that tags a page region as a navigation target.
pub const SECTION_ATTR: &str = "data-section";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    About,
    Experience,
    Projects,
}

impl SectionId {
    /// Header order.
    pub const ALL: [SectionId; 3] = [SectionId::About, SectionId::Experience, SectionId::Projects];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::About => "about",
            SectionId::Experience => "experience",
            SectionId::Projects => "projects",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SectionId::About => "About",
            SectionId::Experience => "Experience",
            SectionId::Projects => "Projects",
        }
    }

    pub fn parse(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.as_str() == id)
    }

    /// CSS selector matching the element tagged with this section.
    pub fn selector(self) -> String {
        format!("[{SECTION_ATTR}='{}']", self.as_str())
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a navigation request did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    Scrolled,
    Missing,
}

/// Page host able to look up tagged elements and scroll them into view.
pub trait SectionHost {
    type Element;

    fn find_section(&self, selector: &str) -> Option<Self::Element>;

    /// Scroll `element` into view with smooth easing.
    fn scroll_into_view(&self, element: &Self::Element);
}

/// Smooth-scroll to `section`. A section that is not on the page is a no-op.
pub fn navigate_to_section<H: SectionHost>(host: &H, section: SectionId) -> Navigation {
    match host.find_section(&section.selector()) {
        Some(element) => {
            host.scroll_into_view(&element);
            Navigation::Scrolled
        }
        None => {
            tracing::debug!(%section, "no element tagged with section");
            Navigation::Missing
        }
    }
}

/// Like [`navigate_to_section`] for a raw identifier. Unknown identifiers are
/// treated the same as a section missing from the page.
pub fn navigate_to_id<H: SectionHost>(host: &H, id: &str) -> Navigation {
    match SectionId::parse(id) {
        Some(section) => navigate_to_section(host, section),
        None => {
            tracing::debug!(id, "unknown section identifier");
            Navigation::Missing
        }
    }
}
