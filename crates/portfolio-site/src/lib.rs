//! Single-page portfolio: content model and presentation logic.
//!
//! Everything here is browser-agnostic. The Leptos app supplies the browser
//! implementations of [`ScrollSource`] and [`SectionHost`].
//!
//! - [`Site`] — profile, socials, experience and projects, loaded from the
//!   embedded JSON document and validated
//! - [`ScrollWatch`] — scroll-threshold observer with scoped teardown
//! - [`navigate_to_section`] — smooth-scroll to a tagged section, no-op when absent
//! - [`partition_projects`] / [`preview`] — deterministic render helpers

pub mod config;
pub mod content;
pub mod error;
pub mod icon;
pub mod navigator;
pub mod observer;
pub mod render;

pub use config::PageConfig;
pub use content::{ExperienceEntry, Profile, Project, Site, SocialLink};
pub use error::ContentError;
pub use icon::IconKind;
pub use navigator::{navigate_to_id, navigate_to_section, Navigation, SectionHost, SectionId};
pub use observer::{
    ManualScroll, Polarity, ScrollSource, ScrollThreshold, ScrollWatch, ThresholdState,
};
pub use render::{copyright_line, partition_projects, preview, ProjectGroups, ELLIPSIS};
