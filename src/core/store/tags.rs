//! Tag registry repository

use super::{Record, Store};
use crate::core::knowledge::tag_usage;
use crate::core::models::{Note, Tag, TagKind, TagPatch};

/// Tags keyed by id
pub type TagStore = Store<Tag>;

impl Record for Tag {
    type Patch = TagPatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn apply(&mut self, patch: TagPatch) {
        Self::apply(self, patch);
    }
}

impl Store<Tag> {
    /// Tag with this name (case-insensitive)
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&Tag> {
        self.iter().find(|t| t.is_named(name))
    }

    /// Whether a tag with this name exists (case-insensitive)
    #[must_use]
    pub fn exists(&self, name: &str) -> bool {
        self.by_name(name).is_some()
    }

    /// Built-in tags
    #[must_use]
    pub fn defaults(&self) -> Vec<&Tag> {
        self.filter(|t| t.kind == TagKind::Default)
    }

    /// Student-created tags
    #[must_use]
    pub fn customs(&self) -> Vec<&Tag> {
        self.filter(|t| t.kind == TagKind::Custom)
    }

    /// Tags whose name contains `query` (case-insensitive)
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Tag> {
        let query = query.to_lowercase();
        self.filter(|t| t.name.to_lowercase().contains(&query))
    }

    /// Tags with this color
    #[must_use]
    pub fn by_color(&self, color: &str) -> Vec<&Tag> {
        self.filter(|t| t.color == color)
    }

    /// Registered tags used by at least one note, most used first
    #[must_use]
    pub fn most_used<'a, I>(&self, notes: I) -> Vec<&Tag>
    where
        I: IntoIterator<Item = &'a Note>,
    {
        tag_usage(notes)
            .iter()
            .filter_map(|(name, _)| self.iter().find(|t| &t.name == name))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> TagStore {
        TagStore::from_records(vec![
            Tag::new("t1".into(), "Theory".into(), TagKind::Default, "#3b82f6".into()),
            Tag::new("t2".into(), "Practice".into(), TagKind::Default, "#22c55e".into()),
            Tag::new("t3".into(), "Exam Prep".into(), TagKind::Custom, "#3b82f6".into()),
        ])
        .unwrap()
    }

    #[test]
    fn test_lookup_by_name() {
        let tags = store();
        assert_eq!(tags.by_name("theory").map(|t| t.id.as_str()), Some("t1"));
        assert!(tags.exists("EXAM PREP"));
        assert!(!tags.exists("Physics"));
    }

    #[test]
    fn test_kinds_and_search() {
        let tags = store();
        assert_eq!(tags.defaults().len(), 2);
        assert_eq!(tags.customs().len(), 1);
        assert_eq!(tags.search("pr").len(), 2);
        assert_eq!(tags.by_color("#3b82f6").len(), 2);
    }

    #[test]
    fn test_most_used_skips_unregistered() {
        let tags = store();
        let notes = [
            Note::new("n1".into(), "a".into(), "CS".into(), &["Practice", "Theory"]),
            Note::new("n2".into(), "b".into(), "CS".into(), &["Practice", "Unregistered"]),
        ];
        let used: Vec<&str> = tags.most_used(&notes).iter().map(|t| t.name.as_str()).collect();
        assert_eq!(used, vec!["Practice", "Theory"]);
    }
}
