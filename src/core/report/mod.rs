//! Report generation for an academic record
//!
//! Reports are rendered from askama templates (Markdown and HTML) and embed a
//! Mermaid drawing of the knowledge web.

pub mod formats;
pub mod visualization;

use crate::core::gpa::{letter_grade, GpaStanding, GpaSummary};
use crate::core::knowledge::{SimilarityGraph, TagFilter};
use crate::core::models::Reminder;
use crate::core::progress::GraduationProgress;
use crate::core::store::Workspace;
use chrono::NaiveDate;
use std::error::Error;
use std::path::Path;

pub use formats::{HtmlReporter, MarkdownReporter, ReportFormat};
pub use visualization::MermaidGenerator;

/// Days ahead covered by the reminder section
pub const REMINDER_WINDOW_DAYS: u64 = 14;

/// Data context for report generation
///
/// Every figure a report shows is computed once here so both formats agree.
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// The record being reported on
    pub workspace: &'a Workspace,
    /// GPA figures
    pub summary: GpaSummary,
    /// Graduation progress
    pub progress: GraduationProgress,
    /// Knowledge web over every note
    pub web: SimilarityGraph,
    /// Reference date for reminders
    pub today: NaiveDate,
}

impl<'a> ReportContext<'a> {
    /// Compute the report figures for `workspace` as of `today`
    #[must_use]
    pub fn new(workspace: &'a Workspace, today: NaiveDate) -> Self {
        Self {
            workspace,
            summary: workspace.gpa_summary(),
            progress: workspace.graduation_progress(),
            web: workspace.knowledge_web(&TagFilter::All),
            today,
        }
    }

    /// Student name or a generic label
    #[must_use]
    pub fn student_name(&self) -> &str {
        self.workspace.student.as_deref().unwrap_or("Student")
    }

    /// Cumulative GPA mapped onto the 4.0 scale
    #[must_use]
    pub fn four_point_gpa(&self) -> f64 {
        self.workspace.scale.to_four_point(self.summary.cumulative)
    }

    /// Letter grade for the cumulative GPA
    #[must_use]
    pub fn letter(&self) -> &'static str {
        letter_grade(self.four_point_gpa())
    }

    /// Standing for the cumulative GPA
    #[must_use]
    pub fn standing(&self) -> GpaStanding {
        GpaStanding::of(self.four_point_gpa())
    }

    /// Open reminders due within the report window, soonest first
    #[must_use]
    pub fn upcoming_reminders(&self) -> Vec<&'a Reminder> {
        let mut reminders = self
            .workspace
            .reminders
            .upcoming(self.today, REMINDER_WINDOW_DAYS);
        reminders.sort_by_key(|r| r.due_date);
        reminders
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let content = self.render(ctx)?;
        if let Some(parent) = output_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_path, content)?;
        Ok(())
    }

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if template rendering fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}
