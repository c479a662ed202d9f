//! Semester model

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Represents an academic term with a date range
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Semester {
    /// Unique identifier
    #[serde(default)]
    pub id: String,

    /// Display name, used as the course `semester` label (e.g., "Fall 2024")
    pub name: String,

    /// First day of the term
    pub start_date: NaiveDate,

    /// Last day of the term
    pub end_date: NaiveDate,
}

/// Partial update for a [`Semester`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SemesterPatch {
    /// New name
    pub name: Option<String>,
    /// New start date
    pub start_date: Option<NaiveDate>,
    /// New end date
    pub end_date: Option<NaiveDate>,
}

impl Semester {
    /// Create a new semester
    #[must_use]
    pub const fn new(id: String, name: String, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            id,
            name,
            start_date,
            end_date,
        }
    }

    /// Whether `start_date <= end_date`
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.start_date <= self.end_date
    }

    /// Whether `day` falls inside the term (inclusive on both ends)
    #[must_use]
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start_date <= day && day <= self.end_date
    }

    /// Whether the term starts or ends in the given calendar year
    #[must_use]
    pub fn touches_year(&self, year: i32) -> bool {
        self.start_date.year() == year || self.end_date.year() == year
    }

    /// Apply a partial update
    pub fn apply(&mut self, patch: SemesterPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(start) = patch.start_date {
            self.start_date = start;
        }
        if let Some(end) = patch.end_date {
            self.end_date = end;
        }
    }
}
