//! The academic record of one student: every repository plus requirements

use super::courses::CourseStore;
use super::materials::MaterialStore;
use super::notes::NoteStore;
use super::reminders::ReminderStore;
use super::semesters::SemesterStore;
use super::tags::TagStore;
use crate::core::gpa::{self, GpaSummary, SemesterFilter};
use crate::core::knowledge::{build_similarity_graph, SimilarityGraph, TagFilter};
use crate::core::models::{GpaScale, GraduationRequirements};
use crate::core::progress::GraduationProgress;
use std::collections::HashSet;

/// In-memory academic record for one session
#[derive(Debug, Clone, Default)]
pub struct Workspace {
    /// Student display name
    pub student: Option<String>,
    /// Scale the course grades are recorded on
    pub scale: GpaScale,
    /// Graduation target
    pub requirements: GraduationRequirements,
    /// Courses
    pub courses: CourseStore,
    /// Semesters
    pub semesters: SemesterStore,
    /// Study notes
    pub notes: NoteStore,
    /// Uploaded course materials
    pub materials: MaterialStore,
    /// Tag registry
    pub tags: TagStore,
    /// Study reminders
    pub reminders: ReminderStore,
}

impl Workspace {
    /// Empty workspace with the given credit target
    #[must_use]
    pub fn new(required_credits: u32) -> Self {
        Self {
            requirements: GraduationRequirements::new(required_credits),
            ..Self::default()
        }
    }

    /// Credits across every course
    #[must_use]
    pub fn total_credits(&self) -> u32 {
        self.courses.total_credits()
    }

    /// Cumulative weighted GPA
    #[must_use]
    pub fn cumulative_gpa(&self) -> f64 {
        self.courses.overall_gpa()
    }

    /// Weighted GPA over the courses selected by `filter`
    #[must_use]
    pub fn gpa(&self, filter: &SemesterFilter) -> f64 {
        gpa::gpa_for(&self.courses.all(), filter)
    }

    /// GPA summary with the semester breakdown in chronological order
    #[must_use]
    pub fn gpa_summary(&self) -> GpaSummary {
        gpa::summarize(&self.semesters.sorted(), &self.courses.all())
    }

    /// Progress toward graduation from the current course list
    #[must_use]
    pub fn graduation_progress(&self) -> GraduationProgress {
        self.requirements.progress(self.total_credits())
    }

    /// Refresh the cached credit count on the requirements
    pub fn sync_current_credits(&mut self) -> u32 {
        self.requirements.current_credits = self.total_credits();
        self.requirements.current_credits
    }

    /// Knowledge web over all notes
    #[must_use]
    pub fn knowledge_web(&self, filter: &TagFilter) -> SimilarityGraph {
        build_similarity_graph(self.notes.iter(), filter)
    }

    /// Delete a course; linked notes and reminders are left in place
    ///
    /// # Returns
    /// `true` if the course existed
    pub fn delete_course(&mut self, id: &str) -> bool {
        if !self.courses.remove(id) {
            return false;
        }
        let orphans = self.notes.orphaned(&self.courses).len();
        let materials = self.materials.by_course(id).len();
        if orphans > 0 || materials > 0 {
            crate::info!(
                "Course '{id}' deleted, {orphans} note(s) and {materials} material(s) now orphaned"
            );
        }
        true
    }

    /// Check the record against the preconditions the calculators rely on
    ///
    /// Unknown semester labels and graded courses without credits are only
    /// logged; they do not fail validation.
    ///
    /// # Errors
    /// Returns every violation found
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        let mut seen_names = HashSet::new();
        for semester in self.semesters.iter() {
            if !seen_names.insert(semester.name.as_str()) {
                errors.push(format!(
                    "Semester name '{}' is used more than once",
                    semester.name
                ));
            }
            if !semester.is_well_formed() {
                errors.push(format!(
                    "Semester '{}' starts after it ends ({} > {})",
                    semester.name, semester.start_date, semester.end_date
                ));
            }
        }

        for course in self.courses.iter() {
            if let Some(grade) = course.gpa {
                if !self.scale.accepts(grade) {
                    errors.push(format!(
                        "Course '{}' has GPA {grade} outside the {} scale",
                        course.code, self.scale
                    ));
                }
                if course.credits.unwrap_or(0) == 0 {
                    crate::debug!("Course '{}' is graded but has no credits", course.code);
                }
            }
            if let Some(label) = &course.semester {
                if self.semesters.by_name(label).is_none() {
                    crate::warn!("Course '{}' refers to unknown semester '{label}'", course.code);
                }
            }
        }

        for note in self.notes.iter() {
            if note.tags.iter().any(|t| t.trim().is_empty()) {
                errors.push(format!("Note '{}' has an empty tag", note.title));
            }
        }

        for tag in self.tags.iter() {
            if tag.name.trim().is_empty() {
                errors.push(format!("Tag '{}' has an empty name", tag.id));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Course, Note, Semester};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn workspace() -> Workspace {
        let mut ws = Workspace::new(120);
        ws.semesters
            .add(Semester::new("s2".into(), "Spring 2025".into(), date(2025, 1, 10), date(2025, 5, 5)))
            .unwrap();
        ws.semesters
            .add(Semester::new("s1".into(), "Fall 2024".into(), date(2024, 9, 1), date(2024, 12, 20)))
            .unwrap();
        ws.courses
            .add(
                Course::new("c1".into(), "Algorithms".into(), "CS101".into())
                    .with_credits(3)
                    .with_gpa(4.0)
                    .with_semester("Fall 2024"),
            )
            .unwrap();
        ws.courses
            .add(
                Course::new("c2".into(), "Calculus".into(), "MATH201".into())
                    .with_credits(3)
                    .with_gpa(3.0)
                    .with_semester("Spring 2025"),
            )
            .unwrap();
        let mut note = Note::new("n1".into(), "Sorting".into(), "CS101".into(), &["Algorithms"]);
        note.course_id = Some("c1".to_string());
        ws.notes.add(note).unwrap();
        ws.notes
            .add(Note::new("n2".into(), "Graphs".into(), "CS101".into(), &["Algorithms"]))
            .unwrap();
        ws
    }

    #[test]
    fn test_gpa_summary_is_chronological() {
        let ws = workspace();
        let summary = ws.gpa_summary();
        assert_eq!(summary.semesters[0].semester, "Fall 2024");
        assert_eq!(summary.current().map(|s| s.semester.as_str()), Some("Spring 2025"));
        assert_eq!(summary.trend, Some(-1.0));
        assert!((ws.cumulative_gpa() - 3.5).abs() < 1e-12);
    }

    #[test]
    fn test_progress_tracks_courses() {
        let mut ws = workspace();
        assert_eq!(ws.graduation_progress().remaining, 114);
        assert_eq!(ws.sync_current_credits(), 6);
        assert_eq!(ws.requirements.current_credits, 6);
    }

    #[test]
    fn test_delete_course_does_not_cascade() {
        let mut ws = workspace();
        assert!(ws.delete_course("c1"));
        assert!(!ws.delete_course("c1"));
        assert_eq!(ws.notes.len(), 2);
        assert_eq!(ws.notes.orphaned(&ws.courses).len(), 1);
        assert!((ws.cumulative_gpa() - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_knowledge_web() {
        let ws = workspace();
        let web = ws.knowledge_web(&TagFilter::All);
        assert_eq!(web.edge_count(), 1);
        assert!(ws.knowledge_web(&TagFilter::Tag("Physics".into())).is_empty());
    }

    #[test]
    fn test_validate_reports_violations() {
        let mut ws = workspace();
        assert!(ws.validate().is_ok());

        ws.semesters
            .add(Semester::new("s3".into(), "Broken".into(), date(2025, 6, 1), date(2025, 5, 1)))
            .unwrap();
        ws.courses
            .add(Course::new("c3".into(), "Physics".into(), "PHY".into()).with_credits(3).with_gpa(4.5))
            .unwrap();
        ws.notes
            .add(Note::new("n3".into(), "Blank".into(), "PHY".into(), &[" "]))
            .unwrap();

        let errors = ws.validate().unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_validate_rejects_duplicate_semester_names() {
        let mut ws = workspace();
        ws.semesters
            .add(Semester::new("s9".into(), "Fall 2024".into(), date(2025, 9, 1), date(2025, 12, 20)))
            .unwrap();

        let errors = ws.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("'Fall 2024'"));
    }
}
