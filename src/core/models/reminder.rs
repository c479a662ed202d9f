//! Study reminder model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reminder urgency
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Can wait
    Low,
    /// Normal
    #[default]
    Medium,
    /// Urgent
    High,
}

/// What the reminder is for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReminderKind {
    /// Homework or problem set
    Assignment,
    /// Exam or quiz
    Exam,
    /// Assigned reading
    Reading,
    /// Longer project milestone
    Project,
    /// Anything else
    #[default]
    Other,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

impl fmt::Display for ReminderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Assignment => "assignment",
            Self::Exam => "exam",
            Self::Reading => "reading",
            Self::Project => "project",
            Self::Other => "other",
        };
        write!(f, "{label}")
    }
}

/// A dated to-do item, optionally tied to a course
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    /// Unique identifier
    #[serde(default)]
    pub id: String,

    /// Short title
    pub title: String,

    /// Longer description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Due date
    pub due_date: NaiveDate,

    /// Due time of day as entered (e.g., "23:59")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_time: Option<String>,

    /// Id of the related course
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_id: Option<String>,

    /// Code of the related course
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_code: Option<String>,

    /// Urgency
    #[serde(default)]
    pub priority: Priority,

    /// Whether the item is done
    #[serde(default)]
    pub completed: bool,

    /// Category
    #[serde(default, rename = "type")]
    pub kind: ReminderKind,
}

/// Partial update for a [`Reminder`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReminderPatch {
    /// New title
    pub title: Option<String>,
    /// New due date
    pub due_date: Option<NaiveDate>,
    /// New priority
    pub priority: Option<Priority>,
    /// New completion state
    pub completed: Option<bool>,
}

impl Reminder {
    /// Create a new open reminder of medium priority
    #[must_use]
    pub fn new(id: String, title: String, due_date: NaiveDate, kind: ReminderKind) -> Self {
        Self {
            id,
            title,
            description: None,
            due_date,
            due_time: None,
            course_id: None,
            course_code: None,
            priority: Priority::default(),
            completed: false,
            kind,
        }
    }

    /// Whether the reminder is still open and its due date is before `today`
    #[must_use]
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.completed && self.due_date < today
    }

    /// Apply a partial update
    pub fn apply(&mut self, patch: ReminderPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(due) = patch.due_date {
            self.due_date = due;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
    }
}
