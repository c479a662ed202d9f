//! Tag registry model

use serde::{Deserialize, Serialize};

/// Origin of a tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagKind {
    /// Shipped with the application
    Default,
    /// Created by the student
    #[default]
    Custom,
}

/// A named, colored tag that notes can reference by name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Unique identifier
    #[serde(default)]
    pub id: String,

    /// Tag label as it appears on notes
    pub name: String,

    /// Default or custom
    #[serde(default, rename = "type")]
    pub kind: TagKind,

    /// Display color (e.g., "#3b82f6")
    #[serde(default)]
    pub color: String,
}

/// Partial update for a [`Tag`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagPatch {
    /// New label
    pub name: Option<String>,
    /// New kind
    pub kind: Option<TagKind>,
    /// New color
    pub color: Option<String>,
}

impl Tag {
    /// Create a new tag
    #[must_use]
    pub const fn new(id: String, name: String, kind: TagKind, color: String) -> Self {
        Self {
            id,
            name,
            kind,
            color,
        }
    }

    /// Case-insensitive name comparison
    #[must_use]
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    /// Apply a partial update
    pub fn apply(&mut self, patch: TagPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
        if let Some(color) = patch.color {
            self.color = color;
        }
    }
}
