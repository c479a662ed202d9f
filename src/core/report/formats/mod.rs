//! Report format implementations
//!
//! Both formats render the same [`ReportView`]; numbers are formatted here so
//! the templates only interpolate.

pub mod html;
pub mod markdown;

pub use html::HtmlReporter;
pub use markdown::MarkdownReporter;

use crate::core::gpa::letter_grade;
use crate::core::knowledge::tag_usage;
use crate::core::report::visualization::MermaidGenerator;
use crate::core::report::ReportContext;
use std::fmt;
use std::str::FromStr;

/// Edges listed under "strongest connections"
const STRONGEST_EDGES: usize = 5;

/// Supported report formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// Markdown format with a Mermaid diagram
    Markdown,
    /// Self-contained HTML page
    Html,
}

impl ReportFormat {
    /// Get the file extension for this format
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Markdown => "md",
            Self::Html => "html",
        }
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "md" | "markdown" => Ok(Self::Markdown),
            "html" | "htm" => Ok(Self::Html),
            _ => Err(format!("Unknown report format: {s}")),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Markdown => write!(f, "markdown"),
            Self::Html => write!(f, "html"),
        }
    }
}

/// One row of the per-semester table
#[derive(Debug, Clone)]
pub struct SemesterRow {
    /// Display name
    pub name: String,
    /// GPA, two decimals
    pub gpa: String,
    /// Credit hours
    pub credits: u32,
}

/// One row of the course table
#[derive(Debug, Clone)]
pub struct CourseRow {
    /// Course code
    pub code: String,
    /// Display name
    pub name: String,
    /// Semester label
    pub semester: String,
    /// Credit hours
    pub credits: String,
    /// GPA, two decimals
    pub gpa: String,
    /// Letter grade
    pub letter: String,
}

/// One row of the tag usage table
#[derive(Debug, Clone)]
pub struct TagRow {
    /// Display name
    pub name: String,
    /// Notes using the tag
    pub notes: usize,
}

/// One row of the reminder table
#[derive(Debug, Clone)]
pub struct ReminderRow {
    /// Due date
    pub due: String,
    /// Title
    pub title: String,
    /// Reminder type
    pub kind: String,
    /// Priority
    pub priority: String,
    /// Course code
    pub course: String,
    /// Already past due
    pub overdue: bool,
}

/// One strong connection in the knowledge web
#[derive(Debug, Clone)]
pub struct ConnectionRow {
    /// First note title
    pub source: String,
    /// Second note title
    pub target: String,
    /// Shared tags, comma separated
    pub shared: String,
    /// Number of shared tags
    pub strength: usize,
}

/// Presentation-ready report data
#[derive(Debug, Clone)]
pub struct ReportView {
    /// Student name
    pub student: String,
    /// Report date
    pub generated: String,
    /// GPA scale
    pub scale: String,
    /// Cumulative GPA
    pub cumulative_gpa: String,
    /// Letter grade
    pub letter: String,
    /// Standing label
    pub standing: String,
    /// Change over the last two semesters
    pub trend: String,
    /// Latest graded semester
    pub current_semester: String,
    /// Highest, lowest and average semester GPA, or `-` before any graded semester
    pub semester_range: String,
    /// All credits
    pub total_credits: u32,
    /// Credits counted toward GPA
    pub graded_credits: u32,
    /// Credits required to graduate
    pub required_credits: u32,
    /// Credits still needed
    pub remaining_credits: u32,
    /// Progress percentage
    pub percent: String,
    /// Requirement met
    pub met: bool,
    /// Per-semester GPA
    pub semesters: Vec<SemesterRow>,
    /// Course table
    pub courses: Vec<CourseRow>,
    /// Tag usage
    pub tags: Vec<TagRow>,
    /// Upcoming reminders
    pub reminders: Vec<ReminderRow>,
    /// Notes in the knowledge web
    pub note_count: usize,
    /// Connections in the knowledge web
    pub connection_count: usize,
    /// Notes sharing no tags
    pub isolated_count: usize,
    /// Strongest connections
    pub connections: Vec<ConnectionRow>,
    /// Mermaid flowchart of the knowledge web
    pub mermaid: String,
}

impl ReportView {
    /// Format everything in `ctx` for display (two decimals for GPA figures)
    #[must_use]
    pub fn from_context(ctx: &ReportContext) -> Self {
        let ws = ctx.workspace;
        let summary = &ctx.summary;

        let semesters = summary
            .semesters
            .iter()
            .map(|s| SemesterRow {
                name: s.semester.clone(),
                gpa: format!("{:.2}", s.gpa),
                credits: s.credits,
            })
            .collect();

        let courses = ws
            .courses
            .iter()
            .map(|c| CourseRow {
                code: c.code.clone(),
                name: c.name.clone(),
                semester: c.semester.clone().unwrap_or_else(|| "-".to_string()),
                credits: c.credits.map_or_else(|| "-".to_string(), |n| n.to_string()),
                gpa: c.gpa.map_or_else(|| "-".to_string(), |g| format!("{g:.2}")),
                letter: c.gpa.map_or("-", |g| letter_grade(ws.scale.to_four_point(g))).to_string(),
            })
            .collect();

        let tags = tag_usage(ws.notes.iter())
            .into_iter()
            .map(|(name, notes)| TagRow { name, notes })
            .collect();

        let reminders = ctx
            .upcoming_reminders()
            .into_iter()
            .map(|r| ReminderRow {
                due: r.due_date.format("%Y-%m-%d").to_string(),
                title: r.title.clone(),
                kind: r.kind.to_string(),
                priority: r.priority.to_string(),
                course: r.course_code.clone().unwrap_or_else(|| "-".to_string()),
                overdue: r.is_overdue(ctx.today),
            })
            .collect();

        let title_of = |id: &str| {
            ctx.web
                .node(id)
                .map_or_else(|| id.to_string(), |n| n.title.clone())
        };
        let connections = ctx
            .web
            .strongest_edges(STRONGEST_EDGES)
            .into_iter()
            .map(|e| ConnectionRow {
                source: title_of(&e.source),
                target: title_of(&e.target),
                shared: e.shared_tags.join(", "),
                strength: e.strength,
            })
            .collect();

        Self {
            student: ctx.student_name().to_string(),
            generated: ctx.today.format("%Y-%m-%d").to_string(),
            scale: ws.scale.to_string(),
            cumulative_gpa: format!("{:.2}", summary.cumulative),
            letter: ctx.letter().to_string(),
            standing: ctx.standing().label().to_string(),
            trend: summary
                .trend
                .map_or_else(|| "n/a".to_string(), |t| format!("{t:+.2}")),
            semester_range: match (summary.highest(), summary.lowest(), summary.average()) {
                (Some(high), Some(low), Some(mean)) => {
                    format!("high {high:.2}, low {low:.2}, average {mean:.2}")
                }
                _ => "-".to_string(),
            },
            current_semester: summary
                .current()
                .map_or_else(|| "-".to_string(), |s| s.semester.clone()),
            total_credits: summary.total_credits,
            graded_credits: summary.graded_credits,
            required_credits: ws.requirements.required_credits,
            remaining_credits: ctx.progress.remaining,
            percent: format!("{:.2}", ctx.progress.percent),
            met: ctx.progress.met,
            semesters,
            courses,
            tags,
            reminders,
            note_count: ctx.web.node_count(),
            connection_count: ctx.web.edge_count(),
            isolated_count: ctx.web.isolated().len(),
            connections,
            mermaid: MermaidGenerator::knowledge_web(&ctx.web),
        }
    }
}
