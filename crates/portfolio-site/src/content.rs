//! Site content: profile, social links, work history and projects.
//!
//! The content is authored once in `content/site.json`, compiled into the
//! binary, and never mutated after load.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::config::PageConfig;
use crate::error::ContentError;
use crate::icon::IconKind;

const EMBEDDED: &str = include_str!("../content/site.json");

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub surname: String,
    pub title: String,
    pub location: String,
    pub bio: String,
    pub avatar: String,
}

impl Profile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.surname)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    pub name: String,
    pub url: String,
    pub icon: IconKind,
    /// CSS color applied on hover, when the brand color should show through.
    #[serde(default)]
    pub hover_color: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub period: String,
    pub description: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

impl ExperienceEntry {
    /// Render key, unique across the experience list.
    pub fn key(&self) -> String {
        format!("{}-{}", self.company, self.period)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
    pub url: String,
    #[serde(default)]
    pub featured: bool,
    /// No longer maintained. Older content files call this `historic`.
    #[serde(default, alias = "historic")]
    pub archived: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Site {
    pub profile: Profile,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub page: PageConfig,
}

impl Site {
    /// Parse and validate a content document.
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let site: Site = serde_json::from_str(json)?;
        site.validate()?;
        tracing::info!(
            socials = site.socials.len(),
            experience = site.experience.len(),
            projects = site.projects.len(),
            "site content loaded"
        );
        Ok(site)
    }

    /// The content document compiled into this crate.
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_json(EMBEDDED)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        if self.profile.name.trim().is_empty() {
            return Err(ContentError::Invalid("profile name is empty".to_string()));
        }
        if self.page.preview_chars == 0 {
            return Err(ContentError::Invalid(
                "page.previewChars must be at least 1".to_string(),
            ));
        }

        for social in &self.socials {
            check_url(&social.name, &social.url)?;
        }

        let mut keys = HashSet::new();
        for job in &self.experience {
            let key = job.key();
            if !keys.insert(key.clone()) {
                return Err(ContentError::DuplicateKey(key));
            }
        }

        let mut titles = HashSet::new();
        for project in &self.projects {
            check_url(&project.title, &project.url)?;
            if !titles.insert(project.title.as_str()) {
                return Err(ContentError::DuplicateKey(project.title.clone()));
            }
        }

        Ok(())
    }
}

fn check_url(owner: &str, url: &str) -> Result<(), ContentError> {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"));
    match rest {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(ContentError::Invalid(format!(
            "{owner}: link must be an absolute http(s) URL, got {url:?}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_content_is_valid() {
        let site = Site::embedded().unwrap();
        assert!(!site.profile.name.is_empty());
        assert_eq!(site.page, PageConfig::default());
    }

    #[test]
    fn check_url_accepts_http_and_https() {
        assert!(check_url("a", "https://example.com").is_ok());
        assert!(check_url("a", "http://example.com").is_ok());
    }

    #[test]
    fn check_url_rejects_relative_and_bare_scheme() {
        assert!(check_url("a", "/projects").is_err());
        assert!(check_url("a", "https://").is_err());
        assert!(check_url("a", "mailto:me@example.com").is_err());
    }
}
