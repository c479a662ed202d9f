//! Credit-weighted GPA aggregation
//!
//! All functions here are pure reads over course collections. Nothing is
//! cached; callers recompute after every change to the course set.

use crate::core::models::{Course, Semester};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Which courses a GPA is computed over
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SemesterFilter {
    /// Every course (cumulative GPA)
    #[default]
    All,
    /// Courses whose `semester` label equals this string exactly
    Named(String),
}

impl SemesterFilter {
    /// Whether a course passes the filter
    #[must_use]
    pub fn matches(&self, course: &Course) -> bool {
        match self {
            Self::All => true,
            Self::Named(label) => course.in_semester(label),
        }
    }
}

impl FromStr for SemesterFilter {
    type Err = String;

    /// `"all"` (any case) is the no-filter sentinel; anything else names a semester
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else if s.trim().is_empty() {
            Err("Semester label cannot be empty".to_string())
        } else {
            Ok(Self::Named(s.to_string()))
        }
    }
}

impl fmt::Display for SemesterFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Named(label) => write!(f, "{label}"),
        }
    }
}

/// Credit-weighted average GPA.
///
/// `Σ(gpa * credits) / Σ(credits)` over courses that have a grade and a
/// non-zero credit count. Returns `0.0` when no course qualifies.
///
/// The terms are summed in a canonical order so the result does not depend
/// on the order of the input.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn weighted_gpa<'a, I>(courses: I) -> f64
where
    I: IntoIterator<Item = &'a Course>,
{
    let mut graded: Vec<(f64, u32)> = courses
        .into_iter()
        .filter_map(Course::graded_credits)
        .collect();

    let total_credits: u64 = graded.iter().map(|&(_, credits)| u64::from(credits)).sum();
    if total_credits == 0 {
        return 0.0;
    }

    graded.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
    let total_points: f64 = graded
        .iter()
        .map(|&(gpa, credits)| gpa * f64::from(credits))
        .sum();

    total_points / total_credits as f64
}

/// Weighted GPA over the courses selected by `filter`
#[must_use]
pub fn gpa_for(courses: &[&Course], filter: &SemesterFilter) -> f64 {
    weighted_gpa(courses.iter().copied().filter(|c| filter.matches(c)))
}

/// Sum of credits across all courses, graded or not
#[must_use]
pub fn total_credits<'a, I>(courses: I) -> u32
where
    I: IntoIterator<Item = &'a Course>,
{
    courses
        .into_iter()
        .map(|c| c.credits.unwrap_or(0))
        .fold(0, u32::saturating_add)
}

/// Sum of credits across courses that count toward GPA
#[must_use]
pub fn graded_credits<'a, I>(courses: I) -> u32
where
    I: IntoIterator<Item = &'a Course>,
{
    courses
        .into_iter()
        .filter_map(Course::graded_credits)
        .map(|(_, credits)| credits)
        .fold(0, u32::saturating_add)
}

/// GPA for one semester
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SemesterGpa {
    /// Semester label
    pub semester: String,
    /// Weighted GPA for the semester
    pub gpa: f64,
    /// Graded credits in the semester
    pub credits: u32,
}

/// Per-semester GPA in the order the semesters are given.
///
/// Semesters without any graded credits are left out.
#[must_use]
pub fn semester_breakdown(semesters: &[&Semester], courses: &[&Course]) -> Vec<SemesterGpa> {
    semesters
        .iter()
        .filter_map(|semester| {
            let in_term: Vec<&Course> = courses
                .iter()
                .copied()
                .filter(|c| c.in_semester(&semester.name))
                .collect();
            let credits = graded_credits(in_term.iter().copied());
            (credits > 0).then(|| SemesterGpa {
                semester: semester.name.clone(),
                gpa: weighted_gpa(in_term),
                credits,
            })
        })
        .collect()
}

/// GPA change from the second-to-last to the last semester of a breakdown
#[must_use]
pub fn trend(breakdown: &[SemesterGpa]) -> Option<f64> {
    match breakdown {
        [.., previous, last] => Some(last.gpa - previous.gpa),
        _ => None,
    }
}

/// Everything the GPA view shows, computed in one pass
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GpaSummary {
    /// Cumulative weighted GPA
    pub cumulative: f64,
    /// All credits, graded or not
    pub total_credits: u32,
    /// Credits that count toward GPA
    pub graded_credits: u32,
    /// Per-semester GPA for semesters with graded work
    pub semesters: Vec<SemesterGpa>,
    /// Change between the last two semesters
    pub trend: Option<f64>,
}

impl GpaSummary {
    /// Most recent semester with graded work
    #[must_use]
    pub fn current(&self) -> Option<&SemesterGpa> {
        self.semesters.last()
    }

    /// Best semester GPA
    #[must_use]
    pub fn highest(&self) -> Option<f64> {
        self.semesters.iter().map(|s| s.gpa).max_by(f64::total_cmp)
    }

    /// Worst semester GPA
    #[must_use]
    pub fn lowest(&self) -> Option<f64> {
        self.semesters.iter().map(|s| s.gpa).min_by(f64::total_cmp)
    }

    /// Unweighted mean of the semester GPAs
    ///
    /// Each semester counts once regardless of its credit load, so this can
    /// differ from [`cumulative`](Self::cumulative).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn average(&self) -> Option<f64> {
        if self.semesters.is_empty() {
            return None;
        }
        let sum: f64 = self.semesters.iter().map(|s| s.gpa).sum();
        Some(sum / self.semesters.len() as f64)
    }
}

/// Build a [`GpaSummary`] for the given semesters and courses
#[must_use]
pub fn summarize(semesters: &[&Semester], courses: &[&Course]) -> GpaSummary {
    let breakdown = semester_breakdown(semesters, courses);
    GpaSummary {
        cumulative: weighted_gpa(courses.iter().copied()),
        total_credits: total_credits(courses.iter().copied()),
        graded_credits: graded_credits(courses.iter().copied()),
        trend: trend(&breakdown),
        semesters: breakdown,
    }
}

/// Letter grade for a GPA on the 4.0 scale
#[must_use]
pub fn letter_grade(gpa: f64) -> &'static str {
    const THRESHOLDS: [(f64, &str); 10] = [
        (4.0, "A"),
        (3.7, "A-"),
        (3.3, "B+"),
        (3.0, "B"),
        (2.7, "B-"),
        (2.3, "C+"),
        (2.0, "C"),
        (1.7, "C-"),
        (1.3, "D+"),
        (1.0, "D"),
    ];

    THRESHOLDS
        .iter()
        .find(|(floor, _)| gpa >= *floor)
        .map_or("F", |&(_, letter)| letter)
}

/// Coarse band used to color GPA figures in reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GpaStanding {
    /// 3.7 and above
    Excellent,
    /// 3.0 – 3.7
    Good,
    /// 2.0 – 3.0
    Fair,
    /// Below 2.0
    Poor,
}

impl GpaStanding {
    /// Classify a GPA on the 4.0 scale
    #[must_use]
    pub fn of(gpa: f64) -> Self {
        if gpa >= 3.7 {
            Self::Excellent
        } else if gpa >= 3.0 {
            Self::Good
        } else if gpa >= 2.0 {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    /// Lowercase label, also used as a CSS class
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Poor => "poor",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn course(id: &str, credits: Option<u32>, gpa: Option<f64>, semester: &str) -> Course {
        let mut c = Course::new(id.to_string(), format!("Course {id}"), id.to_uppercase());
        c.credits = credits;
        c.gpa = gpa;
        c.semester = Some(semester.to_string());
        c
    }

    fn semester(name: &str, month: u32) -> Semester {
        let start = NaiveDate::from_ymd_opt(2024, month, 1).unwrap();
        Semester::new(name.to_lowercase(), name.to_string(), start, start)
    }

    #[test]
    fn test_weighted_example() {
        let courses = [
            course("a", Some(3), Some(4.0), "Fall"),
            course("b", Some(1), Some(3.0), "Fall"),
        ];
        assert!((weighted_gpa(&courses) - 3.75).abs() < 1e-12);
    }

    #[test]
    fn test_no_qualifying_courses_is_zero() {
        let courses = [
            course("a", None, Some(4.0), "Fall"),
            course("b", Some(3), None, "Fall"),
            course("c", Some(0), Some(3.0), "Fall"),
        ];
        assert_eq!(weighted_gpa(&courses).to_bits(), 0.0_f64.to_bits());
        assert_eq!(weighted_gpa(Vec::<&Course>::new()).to_bits(), 0.0_f64.to_bits());
    }

    #[test]
    fn test_failing_grade_counts() {
        let courses = [
            course("a", Some(3), Some(4.0), "Fall"),
            course("b", Some(3), Some(0.0), "Fall"),
        ];
        assert!((weighted_gpa(&courses) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_order_invariance_is_bit_exact() {
        let courses = vec![
            course("a", Some(3), Some(3.3), "Fall"),
            course("b", Some(4), Some(2.7), "Fall"),
            course("c", Some(1), Some(3.9), "Spring"),
            course("d", Some(2), Some(1.7), "Spring"),
        ];
        let forward = weighted_gpa(&courses);
        let reversed: Vec<Course> = courses.iter().rev().cloned().collect();
        assert_eq!(forward.to_bits(), weighted_gpa(&reversed).to_bits());
    }

    #[test]
    fn test_gpa_for_filter() {
        let courses = [
            course("a", Some(3), Some(4.0), "Fall"),
            course("b", Some(3), Some(2.0), "Spring"),
        ];
        let refs: Vec<&Course> = courses.iter().collect();

        assert!((gpa_for(&refs, &SemesterFilter::All) - 3.0).abs() < 1e-12);
        let fall = SemesterFilter::Named("Fall".to_string());
        assert!((gpa_for(&refs, &fall) - 4.0).abs() < 1e-12);
        let none = SemesterFilter::Named("fall".to_string());
        assert!(gpa_for(&refs, &none).abs() < f64::EPSILON);
    }

    #[test]
    fn test_filter_parse() {
        assert_eq!("ALL".parse::<SemesterFilter>(), Ok(SemesterFilter::All));
        assert_eq!(
            "Fall 2024".parse::<SemesterFilter>(),
            Ok(SemesterFilter::Named("Fall 2024".to_string()))
        );
        assert!("  ".parse::<SemesterFilter>().is_err());
    }

    #[test]
    fn test_total_credits_ignores_grades() {
        let courses = [
            course("a", Some(3), None, "Fall"),
            course("b", None, Some(4.0), "Fall"),
            course("c", Some(4), Some(3.0), "Fall"),
        ];
        assert_eq!(total_credits(&courses), 7);
        assert_eq!(graded_credits(&courses), 4);
    }

    #[test]
    fn test_breakdown_skips_ungraded_semesters_and_keeps_order() {
        let courses = [
            course("a", Some(3), Some(3.0), "Spring"),
            course("b", Some(3), None, "Summer"),
            course("c", Some(3), Some(4.0), "Fall"),
        ];
        let course_refs: Vec<&Course> = courses.iter().collect();
        let terms = [semester("Fall", 9), semester("Summer", 6), semester("Spring", 1)];
        let term_refs: Vec<&Semester> = terms.iter().collect();

        let breakdown = semester_breakdown(&term_refs, &course_refs);
        assert_eq!(breakdown.len(), 2);
        assert_eq!(breakdown[0].semester, "Fall");
        assert_eq!(breakdown[1].semester, "Spring");
        assert_eq!(breakdown[1].credits, 3);

        let delta = trend(&breakdown).unwrap();
        assert!((delta + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_trend_needs_two_semesters() {
        assert!(trend(&[]).is_none());
        let one = [SemesterGpa {
            semester: "Fall".to_string(),
            gpa: 3.0,
            credits: 3,
        }];
        assert!(trend(&one).is_none());
    }

    #[test]
    fn test_semester_statistics() {
        let courses = [
            course("a", Some(1), Some(4.0), "Fall"),
            course("b", Some(6), Some(2.0), "Spring"),
            course("c", Some(3), Some(3.0), "Summer"),
        ];
        let course_refs: Vec<&Course> = courses.iter().collect();
        let terms = [semester("Spring", 1), semester("Summer", 6), semester("Fall", 9)];
        let term_refs: Vec<&Semester> = terms.iter().collect();

        let summary = summarize(&term_refs, &course_refs);
        assert_eq!(summary.highest(), Some(4.0));
        assert_eq!(summary.lowest(), Some(2.0));
        assert!((summary.average().unwrap() - 3.0).abs() < 1e-12);
        assert!((summary.cumulative - 2.5).abs() < 1e-12);

        let empty = summarize(&[], &[]);
        assert!(empty.highest().is_none());
        assert!(empty.lowest().is_none());
        assert!(empty.average().is_none());
    }

    #[test]
    fn test_letter_grades() {
        assert_eq!(letter_grade(4.0), "A");
        assert_eq!(letter_grade(3.75), "A-");
        assert_eq!(letter_grade(3.0), "B");
        assert_eq!(letter_grade(2.69), "C+");
        assert_eq!(letter_grade(1.0), "D");
        assert_eq!(letter_grade(0.5), "F");
    }

    #[test]
    fn test_standing() {
        assert_eq!(GpaStanding::of(3.9), GpaStanding::Excellent);
        assert_eq!(GpaStanding::of(3.2), GpaStanding::Good);
        assert_eq!(GpaStanding::of(2.0), GpaStanding::Fair);
        assert_eq!(GpaStanding::of(1.2).label(), "poor");
    }
}
