//! Study reminder repository

use super::{Record, Store};
use crate::core::models::{Priority, Reminder, ReminderKind, ReminderPatch};
use chrono::{Days, NaiveDate};

/// Reminders keyed by id
pub type ReminderStore = Store<Reminder>;

impl Record for Reminder {
    type Patch = ReminderPatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn apply(&mut self, patch: ReminderPatch) {
        Self::apply(self, patch);
    }
}

impl Store<Reminder> {
    /// Reminders linked to a course id
    #[must_use]
    pub fn by_course(&self, course_id: &str) -> Vec<&Reminder> {
        self.filter(|r| r.course_id.as_deref() == Some(course_id))
    }

    /// Reminders of one kind
    #[must_use]
    pub fn by_kind(&self, kind: ReminderKind) -> Vec<&Reminder> {
        self.filter(|r| r.kind == kind)
    }

    /// Reminders of one priority
    #[must_use]
    pub fn by_priority(&self, priority: Priority) -> Vec<&Reminder> {
        self.filter(|r| r.priority == priority)
    }

    /// Case-insensitive substring search over title and description
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Reminder> {
        let query = query.to_lowercase();
        self.filter(|r| {
            r.title.to_lowercase().contains(&query)
                || r
                    .description
                    .as_deref()
                    .is_some_and(|d| d.to_lowercase().contains(&query))
        })
    }

    /// Open reminders due on or before `today + days` (overdue ones included)
    #[must_use]
    pub fn upcoming(&self, today: NaiveDate, days: u64) -> Vec<&Reminder> {
        let cutoff = today.checked_add_days(Days::new(days)).unwrap_or(NaiveDate::MAX);
        self.filter(|r| !r.completed && r.due_date <= cutoff)
    }

    /// Open reminders due before `today`
    #[must_use]
    pub fn overdue(&self, today: NaiveDate) -> Vec<&Reminder> {
        self.filter(|r| r.is_overdue(today))
    }

    /// Completed reminders
    #[must_use]
    pub fn completed(&self) -> Vec<&Reminder> {
        self.filter(|r| r.completed)
    }

    /// Open reminders
    #[must_use]
    pub fn pending(&self) -> Vec<&Reminder> {
        self.filter(|r| !r.completed)
    }

    /// Flip the completion flag
    ///
    /// # Returns
    /// The new completion state, or `None` if no reminder has that id
    pub fn toggle_complete(&mut self, id: &str) -> Option<bool> {
        let completed = !self.get(id)?.completed;
        self.update(
            id,
            ReminderPatch {
                completed: Some(completed),
                ..ReminderPatch::default()
            },
        )
        .map(|r| r.completed)
    }
}
