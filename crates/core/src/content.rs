//! Registry of the editable site sections and the actions performed on them.
//!
//! Each [`Section`] maps to exactly one content table. Singleton sections
//! hold a single row keyed by [`SINGLETON_ID`](crate::types::SINGLETON_ID);
//! list sections hold rows ordered by `order_index`.

use serde::{Deserialize, Serialize};

/// A content section of the public site, named after its backing table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    #[serde(rename = "hero_section")]
    Hero,
    #[serde(rename = "about_section")]
    About,
    #[serde(rename = "profile")]
    Profile,
    #[serde(rename = "contact_info")]
    Contact,
    #[serde(rename = "stats")]
    Stats,
    #[serde(rename = "site_settings")]
    Settings,
    #[serde(rename = "projects")]
    Projects,
    #[serde(rename = "skills")]
    Skills,
    #[serde(rename = "services")]
    Services,
    #[serde(rename = "soft_skills")]
    SoftSkills,
    #[serde(rename = "education")]
    Education,
    #[serde(rename = "experience")]
    Experience,
}

impl Section {
    /// Name of the backing database table.
    pub fn table(self) -> &'static str {
        match self {
            Section::Hero => "hero_section",
            Section::About => "about_section",
            Section::Profile => "profile",
            Section::Contact => "contact_info",
            Section::Stats => "stats",
            Section::Settings => "site_settings",
            Section::Projects => "projects",
            Section::Skills => "skills",
            Section::Services => "services",
            Section::SoftSkills => "soft_skills",
            Section::Education => "education",
            Section::Experience => "experience",
        }
    }

    /// Human-readable label used in error messages and logs.
    pub fn label(self) -> &'static str {
        match self {
            Section::Hero => "Hero section",
            Section::About => "About section",
            Section::Profile => "Profile",
            Section::Contact => "Contact info",
            Section::Stats => "Stats",
            Section::Settings => "Site settings",
            Section::Projects => "Project",
            Section::Skills => "Skill",
            Section::Services => "Service",
            Section::SoftSkills => "SoftSkill",
            Section::Education => "Education",
            Section::Experience => "Experience",
        }
    }
}

/// What happened to a section's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentAction {
    Created,
    Updated,
    Deleted,
    Reordered,
}
