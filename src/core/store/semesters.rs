//! Semester repository

use super::{Record, Store};
use crate::core::models::{Semester, SemesterPatch};
use chrono::NaiveDate;

/// Semesters keyed by id
pub type SemesterStore = Store<Semester>;

impl Record for Semester {
    type Patch = SemesterPatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn apply(&mut self, patch: SemesterPatch) {
        Self::apply(self, patch);
    }
}

impl Store<Semester> {
    /// Semesters ordered by start date (stable for equal dates)
    #[must_use]
    pub fn sorted(&self) -> Vec<&Semester> {
        let mut semesters = self.all();
        semesters.sort_by_key(|s| s.start_date);
        semesters
    }

    /// The semester containing `today`, if any
    #[must_use]
    pub fn current(&self, today: NaiveDate) -> Option<&Semester> {
        self.iter().find(|s| s.contains(today))
    }

    /// Semesters starting after `today`
    #[must_use]
    pub fn upcoming(&self, today: NaiveDate) -> Vec<&Semester> {
        self.filter(|s| s.start_date > today)
    }

    /// Semesters that ended before `today`
    #[must_use]
    pub fn past(&self, today: NaiveDate) -> Vec<&Semester> {
        self.filter(|s| s.end_date < today)
    }

    /// Semesters starting or ending in `year`
    #[must_use]
    pub fn by_year(&self, year: i32) -> Vec<&Semester> {
        self.filter(|s| s.touches_year(year))
    }

    /// Semester with the given display name
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&Semester> {
        self.iter().find(|s| s.name == name)
    }
}
