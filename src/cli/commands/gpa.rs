//! `scholar gpa` handler

use super::load_workspace;
use scholar_analytics::config::Config;
use scholar_analytics::core::gpa::{letter_grade, GpaStanding, SemesterFilter};
use scholar_analytics::core::store::Workspace;
use scholar_analytics::warn;
use std::fmt::Write;
use std::path::Path;

/// Print cumulative or single-semester GPA
///
/// # Errors
/// Returns a printable message if the record cannot be loaded or the
/// semester argument is empty
pub fn run(input_file: Option<&Path>, semester: Option<&str>, config: &Config) -> Result<(), String> {
    let filter: SemesterFilter = semester
        .unwrap_or("all")
        .parse()
        .map_err(|e| format!("✗ {e}"))?;
    let workspace = load_workspace(input_file, config)?;
    print!("{}", render(&workspace, &filter));
    Ok(())
}

/// GPA view as printed by the command
fn render(workspace: &Workspace, filter: &SemesterFilter) -> String {
    let mut out = String::new();
    let scale = workspace.scale;

    if let SemesterFilter::Named(label) = filter {
        let courses = workspace.courses.by_semester(label);
        if courses.is_empty() {
            warn!("No courses recorded for semester '{label}'");
        }
        let gpa = workspace.gpa(filter);
        let _ = writeln!(out, "GPA for {label}: {gpa:.2} / {scale}");
        let _ = writeln!(out, "Courses: {}", courses.len());
        return out;
    }

    let summary = workspace.gpa_summary();
    let four_point = scale.to_four_point(summary.cumulative);
    let _ = writeln!(out, "\n=== GPA ===\n");
    let _ = writeln!(
        out,
        "Cumulative: {:.2} / {scale} ({}, {})",
        summary.cumulative,
        letter_grade(four_point),
        GpaStanding::of(four_point).label()
    );
    let _ = writeln!(
        out,
        "Credits:    {} total, {} graded",
        summary.total_credits, summary.graded_credits
    );
    if let Some(trend) = summary.trend {
        let _ = writeln!(out, "Trend:      {trend:+.2}");
    }

    if !summary.semesters.is_empty() {
        let width = summary
            .semesters
            .iter()
            .map(|s| s.semester.chars().count())
            .max()
            .unwrap_or(0);
        let _ = writeln!(out, "\nBy semester:");
        for row in &summary.semesters {
            let _ = writeln!(
                out,
                "  {:<width$}  {:.2}  ({} credits)",
                row.semester, row.gpa, row.credits
            );
        }
        if let (Some(high), Some(low), Some(mean)) =
            (summary.highest(), summary.lowest(), summary.average())
        {
            let _ = writeln!(out, "\nHighest {high:.2}, lowest {low:.2}, average {mean:.2}");
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use scholar_analytics::core::loader::{from_toml_str, RecordDefaults};

    const RECORD: &str = r#"
[[semesters]]
name = "Fall 2024"
start_date = "2024-09-01"
end_date = "2024-12-20"

[[semesters]]
name = "Spring 2025"
start_date = "2025-01-10"
end_date = "2025-05-05"

[[courses]]
name = "Algorithms"
code = "CS101"
credits = 3
gpa = 4.0
semester = "Fall 2024"

[[courses]]
name = "Calculus"
code = "MATH201"
credits = 3
gpa = 3.5
semester = "Spring 2025"
"#;

    #[test]
    fn test_cumulative_view() {
        let ws = from_toml_str(RECORD, &RecordDefaults::default()).unwrap();
        let text = render(&ws, &SemesterFilter::All);
        assert!(text.contains("Cumulative: 3.75 / 4.0 (A-, excellent)"));
        assert!(text.contains("Trend:      -0.50"));
        assert!(text.contains("Fall 2024    4.00  (3 credits)"));
        assert!(text.contains("Highest 4.00, lowest 3.50, average 3.75"));
    }

    #[test]
    fn test_single_semester_view() {
        let ws = from_toml_str(RECORD, &RecordDefaults::default()).unwrap();
        let text = render(&ws, &SemesterFilter::Named("Spring 2025".into()));
        assert!(text.starts_with("GPA for Spring 2025: 3.50"));
        let empty = render(&ws, &SemesterFilter::Named("Summer".into()));
        assert!(empty.contains("0.00"));
    }
}
