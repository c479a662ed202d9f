//! Note repository

use super::{Record, Store};
use crate::core::models::{Course, Note, NotePatch};
use chrono::NaiveDate;

/// Notes keyed by id
pub type NoteStore = Store<Note>;

impl Record for Note {
    type Patch = NotePatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn apply(&mut self, patch: NotePatch) {
        Self::apply(self, patch);
    }
}

impl Store<Note> {
    /// Notes linked to a course id
    #[must_use]
    pub fn by_course(&self, course_id: &str) -> Vec<&Note> {
        self.filter(|n| n.course_id.as_deref() == Some(course_id))
    }

    /// Notes carrying a tag (exact match)
    #[must_use]
    pub fn by_tag(&self, tag: &str) -> Vec<&Note> {
        self.filter(|n| n.has_tag(tag))
    }

    /// Notes carrying at least one of `tags`
    #[must_use]
    pub fn by_any_tag(&self, tags: &[&str]) -> Vec<&Note> {
        self.filter(|n| tags.iter().any(|t| n.has_tag(t)))
    }

    /// Case-insensitive substring search over title and content
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Note> {
        let query = query.to_lowercase();
        self.filter(|n| {
            n.title.to_lowercase().contains(&query)
                || n
                    .content
                    .as_deref()
                    .is_some_and(|body| body.to_lowercase().contains(&query))
        })
    }

    /// Notes dated within `[start, end]`; undated notes are excluded
    #[must_use]
    pub fn in_date_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<&Note> {
        self.filter(|n| n.date.is_some_and(|d| start <= d && d <= end))
    }

    /// Notes that have a summary
    #[must_use]
    pub fn summarized(&self) -> Vec<&Note> {
        self.filter(|n| n.summarized)
    }

    /// Notes still waiting for a summary
    #[must_use]
    pub fn unsummarized(&self) -> Vec<&Note> {
        self.filter(|n| !n.summarized)
    }

    /// Notes linked to a course id that no longer exists
    #[must_use]
    pub fn orphaned(&self, courses: &Store<Course>) -> Vec<&Note> {
        self.filter(|n| n.course_id.as_deref().is_some_and(|id| !courses.contains(id)))
    }
}
