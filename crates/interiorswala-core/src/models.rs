//! Studio entities: portfolio projects, consultation queries, studio contact details,
//! and AI design suggestions. Field names serialize in the camelCase shape the
//! persisted records have always used.

use serde::{Deserialize, Serialize};

/// Project types offered by the lead-capture form.
pub const PROJECT_TYPES: &[&str] = &["Residential", "Commercial", "Hospitality"];

/// Default project type for a fresh lead-capture form.
pub const DEFAULT_PROJECT_TYPE: &str = "Residential";

/// One portfolio item. `id` is assigned once at creation and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub category: String,
    /// Image URI.
    pub image: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// Admin input for a new project; the store assigns the id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectDraft {
    pub title: String,
    pub category: String,
    pub image: String,
    pub description: String,
    pub link: Option<String>,
}

impl ProjectDraft {
    pub fn new(title: &str, category: &str, image: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            category: category.to_string(),
            image: image.to_string(),
            description: description.to_string(),
            link: None,
        }
    }

    pub fn with_link(mut self, link: &str) -> Self {
        self.link = Some(link.to_string());
        self
    }

    /// Title and image are the only fields the admin panel insists on.
    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty() && !self.image.trim().is_empty()
    }

    pub(crate) fn into_project(self, id: String) -> Project {
        let link = self.link.filter(|l| !l.trim().is_empty());
        Project {
            id,
            title: self.title,
            category: self.category,
            image: self.image,
            description: self.description,
            link,
        }
    }
}

/// One palette entry: an evocative name plus a hex code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorInfo {
    pub name: String,
    pub hex: String,
}

/// Structured design concept returned by the generative service.
/// All five fields are required; a payload missing any of them does not parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignSuggestion {
    pub style: String,
    pub description: String,
    pub palette: Vec<ColorInfo>,
    pub key_elements: Vec<String>,
    pub furniture_ideas: Vec<String>,
}

/// Workflow status of a consultation query. Cycles New -> In Progress -> Completed -> New.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum QueryStatus {
    #[default]
    New,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

impl QueryStatus {
    pub fn next(self) -> Self {
        match self {
            QueryStatus::New => QueryStatus::InProgress,
            QueryStatus::InProgress => QueryStatus::Completed,
            QueryStatus::Completed => QueryStatus::New,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            QueryStatus::New => "New",
            QueryStatus::InProgress => "In Progress",
            QueryStatus::Completed => "Completed",
        }
    }
}

impl std::fmt::Display for QueryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A lead captured from the public contact workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsultationQuery {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub project_type: String,
    pub message: String,
    /// Epoch milliseconds.
    pub timestamp: i64,
    /// Value copy of the suggestion attached at submission time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_design: Option<DesignSuggestion>,
    /// Older records may carry no status; they read as `New`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<QueryStatus>,
}

impl ConsultationQuery {
    pub fn effective_status(&self) -> QueryStatus {
        self.status.unwrap_or_default()
    }
}

/// Singleton studio contact record; replaced wholesale on update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudioDetails {
    pub email: String,
    pub phone: String,
    pub address: String,
    pub instagram: String,
    pub whatsapp: String,
    pub facebook: String,
}

impl Default for StudioDetails {
    fn default() -> Self {
        Self {
            email: "contact.interiorswala@gmail.com".to_string(),
            phone: "+91 79808 72754".to_string(),
            address: "Champasari, Siliguri, India, 734003".to_string(),
            instagram: "https://www.instagram.com/interiorswala.in?igsh=N3ludzc2bDlnZXht".to_string(),
            whatsapp: "https://wa.me/917980872754".to_string(),
            facebook: "https://www.facebook.com/interiorswala.in/".to_string(),
        }
    }
}

/// Seed portfolio used when no (readable) projects record exists.
pub fn seed_projects() -> Vec<Project> {
    vec![
        Project {
            id: "1".to_string(),
            title: "The Zenith Residence".to_string(),
            category: "Residential".to_string(),
            image: "https://images.unsplash.com/photo-1600210492486-724fe5c67fb0?auto=format&fit=crop&q=90&w=1600".to_string(),
            description: "A masterclass in shadow and light, featuring bespoke Italian furnishings.".to_string(),
            link: Some("https://www.instagram.com/interiorswala.in/".to_string()),
        },
        Project {
            id: "2".to_string(),
            title: "Emerald Plaza".to_string(),
            category: "Commercial".to_string(),
            image: "https://images.unsplash.com/photo-1497366754035-f200968a6e72?auto=format&fit=crop&q=90&w=1600".to_string(),
            description: "Modernist corporate environments designed for peak inspiration.".to_string(),
            link: None,
        },
    ]
}
