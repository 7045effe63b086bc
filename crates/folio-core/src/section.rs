//! Page sections reachable from the navigation menu

use serde::{Deserialize, Serialize};
use std::fmt;

/// A navigable page section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    About,
    Experience,
    Skills,
    Projects,
}

impl SectionId {
    /// Order of the entries in the navigation menu (and on the page)
    pub const NAV_ORDER: [SectionId; 4] = [
        SectionId::About,
        SectionId::Experience,
        SectionId::Skills,
        SectionId::Projects,
    ];

    /// Text shown in the navigation menu
    pub fn label(self) -> &'static str {
        match self {
            SectionId::About => "About",
            SectionId::Experience => "Experience",
            SectionId::Skills => "Skills",
            SectionId::Projects => "Projects",
        }
    }

    /// `id` attribute of the rendered `<section>`
    pub fn dom_id(self) -> &'static str {
        match self {
            SectionId::About => "about",
            SectionId::Experience => "experience",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::NAV_ORDER
            .into_iter()
            .find(|s| s.label().eq_ignore_ascii_case(label) || s.dom_id() == label)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
