//! Pure helpers behind the page components.

use std::borrow::Cow;

use crate::content::{Profile, Project};

/// Suffix appended to truncated previews.
pub const ELLIPSIS: &str = "...";

/// Projects split by the `featured` flag, each side in authored order.
#[derive(Debug, Default, PartialEq)]
pub struct ProjectGroups<'a> {
    pub featured: Vec<&'a Project>,
    pub other: Vec<&'a Project>,
}

pub fn partition_projects(projects: &[Project]) -> ProjectGroups<'_> {
    let (featured, other): (Vec<_>, Vec<_>) = projects.iter().partition(|p| p.featured);
    ProjectGroups { featured, other }
}

/// First `cap` characters of `text` followed by [`ELLIPSIS`], or `text`
/// unchanged when it already fits.
pub fn preview(text: &str, cap: usize) -> Cow<'_, str> {
    match text.char_indices().nth(cap) {
        None => Cow::Borrowed(text),
        Some((end, _)) => Cow::Owned(format!("{}{ELLIPSIS}", &text[..end])),
    }
}

pub fn copyright_line(profile: &Profile, year: i32) -> String {
    format!("\u{00A9} {year} {}", profile.full_name())
}
