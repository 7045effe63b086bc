//! Page content
//!
//! The text of every section comes from a JSON document. The site ships with
//! `content/portfolio.json` compiled in; the CLI can validate other files
//! against the same model.

use crate::error::{CoreError, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::error;

const EMBEDDED_JSON: &str = include_str!("../content/portfolio.json");

static EMBEDDED: Lazy<Portfolio> = Lazy::new(|| {
    Portfolio::from_json(EMBEDDED_JSON, "<embedded>").unwrap_or_else(|e| {
        error!(error = %e, "embedded portfolio content is invalid");
        Portfolio::fallback()
    })
});

/// Everything the page displays
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    /// Paragraphs of the About section
    pub about: Vec<String>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    #[serde(default)]
    pub projects: Vec<Project>,
    /// Footer links
    #[serde(default)]
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    /// Path of the portrait image, relative to the site root
    pub portrait: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub role: String,
    pub organization: String,
    /// Free-form date range, e.g. "2023 - Present"
    pub period: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub summary: String,
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub url: String,
}

impl Portfolio {
    /// The compiled-in content
    pub fn embedded() -> &'static Portfolio {
        &EMBEDDED
    }

    pub fn from_json(json: &str, origin: &str) -> Result<Self> {
        let portfolio: Self = serde_json::from_str(json).map_err(|e| CoreError::json(origin, e))?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| CoreError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content, &path.display().to_string())
    }

    pub fn validate(&self) -> Result<()> {
        if self.profile.name.trim().is_empty() {
            return Err(CoreError::invalid_content("profile.name is empty"));
        }
        if self.about.iter().all(|p| p.trim().is_empty()) {
            return Err(CoreError::invalid_content("about needs at least one paragraph"));
        }
        for group in &self.skills {
            if group.items.is_empty() {
                return Err(CoreError::invalid_content(format!(
                    "skill group '{}' has no items",
                    group.category
                )));
            }
        }
        for project in &self.projects {
            if let Some(url) = &project.url {
                check_url(&format!("project '{}'", project.name), url)?;
            }
        }
        for link in &self.links {
            check_url(&format!("link '{}'", link.label), &link.url)?;
        }
        Ok(())
    }

    /// Minimal content used when the embedded document cannot be parsed
    fn fallback() -> Self {
        Self {
            profile: Profile {
                name: "Portfolio".to_string(),
                headline: String::new(),
                portrait: String::new(),
            },
            about: vec!["Content is unavailable.".to_string()],
            experience: Vec::new(),
            skills: Vec::new(),
            projects: Vec::new(),
            links: Vec::new(),
        }
    }
}

fn check_url(owner: &str, url: &str) -> Result<()> {
    const SCHEMES: [&str; 3] = ["https://", "http://", "mailto:"];
    if SCHEMES.iter().any(|s| url.starts_with(s)) {
        Ok(())
    } else {
        Err(CoreError::invalid_content(format!(
            "{owner} has unsupported url '{url}'"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_content_is_valid() {
        let portfolio = Portfolio::from_json(EMBEDDED_JSON, "<embedded>").unwrap();
        assert_eq!(portfolio.profile.name, "Mark Mekhail");
        assert!(!portfolio.experience.is_empty());
        assert!(!portfolio.skills.is_empty());
        assert!(!portfolio.projects.is_empty());
        assert_eq!(Portfolio::embedded(), &portfolio);
    }

    #[test]
    fn test_optional_sections_default_to_empty() {
        let json = r#"{
            "profile": { "name": "A", "headline": "", "portrait": "a.jpeg" },
            "about": ["Hello"]
        }"#;
        let portfolio = Portfolio::from_json(json, "test").unwrap();
        assert!(portfolio.projects.is_empty());
        assert!(portfolio.links.is_empty());
    }

    #[test]
    fn test_rejects_blank_about() {
        let json = r#"{
            "profile": { "name": "A", "headline": "", "portrait": "" },
            "about": ["  "]
        }"#;
        let err = Portfolio::from_json(json, "test").unwrap_err();
        assert!(matches!(err, CoreError::InvalidContent { .. }));
    }

    #[test]
    fn test_rejects_relative_link() {
        let json = r#"{
            "profile": { "name": "A", "headline": "", "portrait": "" },
            "about": ["Hi"],
            "links": [{ "label": "GitHub", "url": "github.com/someone" }]
        }"#;
        let err = Portfolio::from_json(json, "test").unwrap_err();
        assert!(err.to_string().contains("GitHub"));
    }
}
