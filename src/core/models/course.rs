//! Course model

use serde::{Deserialize, Serialize};

/// Represents a course taken (or being taken) by the student
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Unique identifier
    #[serde(default)]
    pub id: String,

    /// Course name (e.g., "Introduction to Algorithms")
    pub name: String,

    /// Course code (e.g., "CS101")
    pub code: String,

    /// Instructor name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructor: Option<String>,

    /// Credit hours
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credits: Option<u32>,

    /// Grade points earned, on the student's GPA scale
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpa: Option<f64>,

    /// Semester label (matches `Semester::name`, e.g., "Fall 2024")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semester: Option<String>,

    /// Free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Partial update for a [`Course`]; only `Some` fields are applied
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoursePatch {
    /// New name
    pub name: Option<String>,
    /// New code
    pub code: Option<String>,
    /// New instructor
    pub instructor: Option<String>,
    /// New credit hours
    pub credits: Option<u32>,
    /// New grade points
    pub gpa: Option<f64>,
    /// New semester label
    pub semester: Option<String>,
    /// New description
    pub description: Option<String>,
}

impl Course {
    /// Create a new ungraded course without credits
    ///
    /// # Arguments
    /// * `id` - Identifier (empty to have the store assign one)
    /// * `name` - Full course name
    /// * `code` - Course code
    #[must_use]
    pub const fn new(id: String, name: String, code: String) -> Self {
        Self {
            id,
            name,
            code,
            instructor: None,
            credits: None,
            gpa: None,
            semester: None,
            description: None,
        }
    }

    /// Set credit hours
    #[must_use]
    pub const fn with_credits(mut self, credits: u32) -> Self {
        self.credits = Some(credits);
        self
    }

    /// Set grade points
    #[must_use]
    pub const fn with_gpa(mut self, gpa: f64) -> Self {
        self.gpa = Some(gpa);
        self
    }

    /// Set the semester label
    #[must_use]
    pub fn with_semester(mut self, semester: &str) -> Self {
        self.semester = Some(semester.to_string());
        self
    }

    /// Grade points and credits if this course takes part in weighted GPA math
    ///
    /// A course qualifies when it has a grade and a non-zero credit count.
    #[must_use]
    pub fn graded_credits(&self) -> Option<(f64, u32)> {
        match (self.gpa, self.credits) {
            (Some(gpa), Some(credits)) if credits > 0 => Some((gpa, credits)),
            _ => None,
        }
    }

    /// Whether the course belongs to the given semester label (exact match)
    #[must_use]
    pub fn in_semester(&self, label: &str) -> bool {
        self.semester.as_deref() == Some(label)
    }

    /// Apply a partial update
    pub fn apply(&mut self, patch: CoursePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(code) = patch.code {
            self.code = code;
        }
        if patch.instructor.is_some() {
            self.instructor = patch.instructor;
        }
        if patch.credits.is_some() {
            self.credits = patch.credits;
        }
        if patch.gpa.is_some() {
            self.gpa = patch.gpa;
        }
        if patch.semester.is_some() {
            self.semester = patch.semester;
        }
        if patch.description.is_some() {
            self.description = patch.description;
        }
    }
}
