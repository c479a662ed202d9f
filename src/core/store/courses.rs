//! Course repository

use super::{Record, Store};
use crate::core::gpa::{self, SemesterFilter};
use crate::core::models::{Course, CoursePatch};

/// Courses keyed by id
pub type CourseStore = Store<Course>;

impl Record for Course {
    type Patch = CoursePatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn apply(&mut self, patch: CoursePatch) {
        Self::apply(self, patch);
    }
}

impl Store<Course> {
    /// Courses whose semester label equals `semester` exactly
    #[must_use]
    pub fn by_semester(&self, semester: &str) -> Vec<&Course> {
        self.filter(|c| c.in_semester(semester))
    }

    /// First course with the given code (case-insensitive)
    #[must_use]
    pub fn by_code(&self, code: &str) -> Option<&Course> {
        self.iter().find(|c| c.code.eq_ignore_ascii_case(code))
    }

    /// Weighted GPA for one semester
    #[must_use]
    pub fn semester_gpa(&self, semester: &str) -> f64 {
        gpa::gpa_for(&self.all(), &SemesterFilter::Named(semester.to_string()))
    }

    /// Weighted GPA over every course
    #[must_use]
    pub fn overall_gpa(&self) -> f64 {
        gpa::weighted_gpa(self.iter())
    }

    /// Credits across every course, graded or not
    #[must_use]
    pub fn total_credits(&self) -> u32 {
        gpa::total_credits(self.iter())
    }
}
