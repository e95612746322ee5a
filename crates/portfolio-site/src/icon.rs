//! Closed set of icons used by the page.
//!
//! Content entries name an icon by kind; the view layer resolves the kind to
//! SVG markup through [`IconKind::svg_body`]. Bodies are 24x24 stroke icons.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconKind {
    Github,
    Linkedin,
    Instagram,
    MapPin,
    Calendar,
    ExternalLink,
    Archive,
}

const ICONS: &[(IconKind, &str)] = &[
    (
        IconKind::Github,
        r#"<path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4"/><path d="M9 18c-4.51 2-5-2-7-2"/>"#,
    ),
    (
        IconKind::Linkedin,
        r#"<path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"/><rect width="4" height="12" x="2" y="9"/><circle cx="4" cy="4" r="2"/>"#,
    ),
    (
        IconKind::Instagram,
        r#"<rect width="20" height="20" x="2" y="2" rx="5" ry="5"/><path d="M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z"/><line x1="17.5" x2="17.51" y1="6.5" y2="6.5"/>"#,
    ),
    (
        IconKind::MapPin,
        r#"<path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z"/><circle cx="12" cy="10" r="3"/>"#,
    ),
    (
        IconKind::Calendar,
        r#"<rect width="18" height="18" x="3" y="4" rx="2" ry="2"/><line x1="16" x2="16" y1="2" y2="6"/><line x1="8" x2="8" y1="2" y2="6"/><line x1="3" x2="21" y1="10" y2="10"/>"#,
    ),
    (
        IconKind::ExternalLink,
        r#"<path d="M15 3h6v6"/><path d="M10 14 21 3"/><path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"/>"#,
    ),
    (
        IconKind::Archive,
        r#"<rect width="20" height="5" x="2" y="3" rx="1"/><path d="M4 8v11a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8"/><path d="M10 12h4"/>"#,
    ),
];

impl IconKind {
    pub const ALL: [IconKind; 7] = [
        IconKind::Github,
        IconKind::Linkedin,
        IconKind::Instagram,
        IconKind::MapPin,
        IconKind::Calendar,
        IconKind::ExternalLink,
        IconKind::Archive,
    ];

    /// Inner SVG markup for this icon.
    pub fn svg_body(self) -> &'static str {
        ICONS
            .iter()
            .find(|(kind, _)| *kind == self)
            .map(|(_, body)| *body)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_has_markup() {
        for kind in IconKind::ALL {
            assert!(!kind.svg_body().is_empty(), "{kind:?} has no svg body");
        }
    }

    #[test]
    fn kinds_parse_kebab_case() {
        let kind: IconKind = serde_json::from_str(r#""map-pin""#).unwrap();
        assert_eq!(kind, IconKind::MapPin);
        assert!(serde_json::from_str::<IconKind>(r#""twitter""#).is_err());
    }
}
