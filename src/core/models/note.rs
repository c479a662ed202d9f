//! Lecture note model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Represents a lecture note attached to a course
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Unique identifier
    #[serde(default)]
    pub id: String,

    /// Note title
    pub title: String,

    /// Id of the owning course, if linked
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_id: Option<String>,

    /// Code of the owning course (e.g., "CS101")
    #[serde(default)]
    pub course_code: String,

    /// Lecture date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,

    /// Tag labels; treated as a set, first-seen order kept
    #[serde(default)]
    pub tags: Vec<String>,

    /// Whether a summary has been produced
    #[serde(default)]
    pub summarized: bool,

    /// Note body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Partial update for a [`Note`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotePatch {
    /// New title
    pub title: Option<String>,
    /// New course code
    pub course_code: Option<String>,
    /// Replacement tag set
    pub tags: Option<Vec<String>>,
    /// New summarized flag
    pub summarized: Option<bool>,
    /// New body
    pub content: Option<String>,
}

impl Note {
    /// Create a new note with the given tags (duplicates dropped)
    #[must_use]
    pub fn new(id: String, title: String, course_code: String, tags: &[&str]) -> Self {
        let mut note = Self {
            id,
            title,
            course_id: None,
            course_code,
            date: None,
            tags: Vec::new(),
            summarized: false,
            content: None,
        };
        for tag in tags {
            note.add_tag((*tag).to_string());
        }
        note
    }

    /// Add a tag if not already present
    pub fn add_tag(&mut self, tag: String) {
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
    }

    /// Remove a tag; returns `true` if it was present
    pub fn remove_tag(&mut self, tag: &str) -> bool {
        if let Some(pos) = self.tags.iter().position(|t| t == tag) {
            self.tags.remove(pos);
            true
        } else {
            false
        }
    }

    /// Whether the note carries the tag (exact match)
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Drop duplicate tags in place, keeping first occurrences
    pub fn dedup_tags(&mut self) {
        let tags = std::mem::take(&mut self.tags);
        for tag in tags {
            self.add_tag(tag);
        }
    }

    /// Apply a partial update
    pub fn apply(&mut self, patch: NotePatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(code) = patch.course_code {
            self.course_code = code;
        }
        if let Some(tags) = patch.tags {
            self.tags = tags;
            self.dedup_tags();
        }
        if let Some(summarized) = patch.summarized {
            self.summarized = summarized;
        }
        if patch.content.is_some() {
            self.content = patch.content;
        }
    }
}
