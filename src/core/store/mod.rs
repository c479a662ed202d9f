//! In-memory repositories for academic records
//!
//! Each repository is a [`Store`]: records keyed by id for O(1) lookup, with
//! insertion order preserved for listing. Updates use merge semantics through
//! per-entity patch types; deletes never cascade.

pub mod courses;
pub mod materials;
pub mod notes;
pub mod reminders;
pub mod semesters;
pub mod tags;
pub mod workspace;

pub use workspace::Workspace;

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use uuid::Uuid;

/// A record that can live in a [`Store`]
pub trait Record {
    /// Partial update type applied by [`Store::update`]
    type Patch;

    /// Stable identifier
    fn id(&self) -> &str;

    /// Replace the identifier (used when the store assigns one)
    fn set_id(&mut self, id: String);

    /// Merge a partial update into the record
    fn apply(&mut self, patch: Self::Patch);
}

/// Insertion-ordered keyed collection of records
#[derive(Debug, Clone)]
pub struct Store<T> {
    order: Vec<String>,
    records: HashMap<String, T>,
}

impl<T> Default for Store<T> {
    fn default() -> Self {
        Self {
            order: Vec::new(),
            records: HashMap::new(),
        }
    }
}

impl<T: Record> Store<T> {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from records, assigning ids where missing
    ///
    /// # Errors
    /// Returns an error if two records share an id
    pub fn from_records(records: Vec<T>) -> Result<Self, String> {
        let mut store = Self::new();
        for record in records {
            store.add(record)?;
        }
        Ok(store)
    }

    /// Add a record; an empty id is replaced with a fresh UUID
    ///
    /// # Errors
    /// Returns an error if a record with the same id already exists
    pub fn add(&mut self, mut record: T) -> Result<&T, String> {
        if record.id().is_empty() {
            record.set_id(Uuid::new_v4().to_string());
        }
        let id = record.id().to_string();

        match self.records.entry(id.clone()) {
            Entry::Occupied(_) => Err(format!("Duplicate id '{id}'")),
            Entry::Vacant(slot) => {
                self.order.push(id);
                Ok(&*slot.insert(record))
            }
        }
    }

    /// Look up a record by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&T> {
        self.records.get(id)
    }

    /// Whether a record with this id exists
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    /// Merge `patch` into the record with this id
    ///
    /// # Returns
    /// The updated record, or `None` if no record has that id
    pub fn update(&mut self, id: &str, patch: T::Patch) -> Option<&T> {
        let record = self.records.get_mut(id)?;
        record.apply(patch);
        Some(&*record)
    }

    /// Remove a record by id
    ///
    /// # Returns
    /// `true` if a record was removed
    pub fn remove(&mut self, id: &str) -> bool {
        if self.records.remove(id).is_none() {
            return false;
        }
        if let Some(pos) = self.order.iter().position(|k| k == id) {
            self.order.remove(pos);
        }
        true
    }

    /// All records in insertion order
    #[must_use]
    pub fn all(&self) -> Vec<&T> {
        self.iter().collect()
    }

    /// Iterate over records in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.order.iter().filter_map(|id| self.records.get(id))
    }

    /// Records matching a predicate, in insertion order
    pub fn filter<P>(&self, mut predicate: P) -> Vec<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().filter(|&r| predicate(r)).collect()
    }

    /// Replace every record
    ///
    /// # Errors
    /// Returns an error if two of the new records share an id; the store is
    /// left unchanged in that case
    pub fn set_all(&mut self, records: Vec<T>) -> Result<(), String> {
        *self = Self::from_records(records)?;
        Ok(())
    }

    /// Number of records
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the store is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Course, CoursePatch};

    fn course(id: &str, code: &str) -> Course {
        Course::new(id.to_string(), format!("Course {code}"), code.to_string())
    }

    #[test]
    fn test_add_assigns_missing_id() {
        let mut store = Store::new();
        let id = store.add(course("", "CS101")).unwrap().id.clone();
        assert!(!id.is_empty());
        assert!(store.contains(&id));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut store = Store::new();
        store.add(course("c1", "CS101")).unwrap();
        assert!(store.add(course("c1", "CS202")).is_err());
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("c1").unwrap().code, "CS101");
    }

    #[test]
    fn test_insertion_order_survives_removal() {
        let mut store = Store::new();
        for (id, code) in [("c3", "A"), ("c1", "B"), ("c2", "C")] {
            store.add(course(id, code)).unwrap();
        }
        assert!(store.remove("c1"));
        assert!(!store.remove("c1"));

        let ids: Vec<&str> = store.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["c3", "c2"]);
    }

    #[test]
    fn test_update_merges_and_reports_missing() {
        let mut store = Store::new();
        store.add(course("c1", "CS101").with_credits(3)).unwrap();

        let patch = CoursePatch {
            gpa: Some(3.7),
            ..CoursePatch::default()
        };
        let updated = store.update("c1", patch.clone()).unwrap();
        assert_eq!(updated.gpa, Some(3.7));
        assert_eq!(updated.credits, Some(3));

        assert!(store.update("missing", patch).is_none());
    }

    #[test]
    fn test_set_all_rejects_duplicates_without_clobbering() {
        let mut store = Store::new();
        store.add(course("c1", "CS101")).unwrap();

        let result = store.set_all(vec![course("x", "A"), course("x", "B")]);
        assert!(result.is_err());
        assert!(store.contains("c1"));
    }
}
