//! Course material model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of course material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialKind {
    /// Lecture recording or other video
    Video,
    /// PDF document such as slides or a handout
    Pdf,
    /// Plain text
    Text,
    /// External link
    Link,
    /// Anything else
    #[default]
    Other,
}

impl fmt::Display for MaterialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Video => "video",
            Self::Pdf => "pdf",
            Self::Text => "text",
            Self::Link => "link",
            Self::Other => "other",
        };
        write!(f, "{label}")
    }
}

/// A file or link uploaded for a course
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Material {
    /// Unique identifier
    #[serde(default)]
    pub id: String,

    /// Id of the owning course
    pub course_id: String,

    /// Display title
    pub title: String,

    /// Material kind
    #[serde(default, rename = "type")]
    pub kind: MaterialKind,

    /// Where the material lives
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Day the material was added
    pub upload_date: NaiveDate,

    /// Size as entered (e.g., "2.4 MB")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,

    /// Longer description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Partial update for a [`Material`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaterialPatch {
    /// New title
    pub title: Option<String>,
    /// New kind
    pub kind: Option<MaterialKind>,
    /// New location
    pub url: Option<String>,
    /// New description
    pub description: Option<String>,
}

impl Material {
    /// Create a new material with no url, size or description
    #[must_use]
    pub const fn new(
        id: String,
        course_id: String,
        title: String,
        kind: MaterialKind,
        upload_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            course_id,
            title,
            kind,
            url: None,
            upload_date,
            size: None,
            description: None,
        }
    }

    /// Apply a partial update
    pub fn apply(&mut self, patch: MaterialPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
        if patch.url.is_some() {
            self.url = patch.url;
        }
        if patch.description.is_some() {
            self.description = patch.description;
        }
    }
}
