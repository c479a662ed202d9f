//! Integration tests for GPA aggregation and graduation progress

use scholar_analytics::core::gpa::{gpa_for, summarize, weighted_gpa, SemesterFilter};
use scholar_analytics::core::models::Course;
use scholar_analytics::core::progress::graduation_progress;
use scholar_analytics::core::store::Workspace;

fn course(id: &str, credits: Option<u32>, gpa: Option<f64>, semester: &str) -> Course {
    let mut c = Course::new(id.to_string(), id.to_string(), id.to_uppercase()).with_semester(semester);
    c.credits = credits;
    c.gpa = gpa;
    c
}

#[test]
fn weighted_gpa_matches_worked_example() {
    let courses = [
        course("a", Some(3), Some(4.0), "Fall 2024"),
        course("b", Some(3), Some(3.5), "Fall 2024"),
    ];
    assert!((weighted_gpa(&courses) - 3.75).abs() < 1e-12);
}

#[test]
fn ungraded_and_creditless_courses_are_ignored() {
    let courses = [
        course("a", Some(4), Some(3.0), "Fall 2024"),
        course("b", None, Some(4.0), "Fall 2024"),
        course("c", Some(3), None, "Fall 2024"),
        course("d", Some(0), Some(1.0), "Fall 2024"),
    ];
    assert!((weighted_gpa(&courses) - 3.0).abs() < 1e-12);
    assert!(weighted_gpa(&courses[1..]).abs() < f64::EPSILON);
    assert!(weighted_gpa(Vec::<&Course>::new()).abs() < f64::EPSILON);
}

#[test]
fn weighted_gpa_ignores_input_order() {
    let mut courses = vec![
        course("a", Some(3), Some(3.3), "Fall 2024"),
        course("b", Some(4), Some(2.7), "Fall 2024"),
        course("c", Some(1), Some(4.0), "Spring 2025"),
        course("d", Some(2), Some(3.1), "Spring 2025"),
    ];
    let forward = weighted_gpa(&courses);
    courses.reverse();
    assert_eq!(forward.to_bits(), weighted_gpa(&courses).to_bits());
    courses.swap(0, 2);
    assert_eq!(forward.to_bits(), weighted_gpa(&courses).to_bits());
}

#[test]
fn semester_filter_restricts_courses() {
    let courses = [
        course("a", Some(3), Some(4.0), "Fall 2024"),
        course("b", Some(3), Some(2.0), "Spring 2025"),
    ];
    let refs: Vec<&Course> = courses.iter().collect();
    assert!((gpa_for(&refs, &"Fall 2024".parse().unwrap()) - 4.0).abs() < 1e-12);
    assert!((gpa_for(&refs, &SemesterFilter::All) - 3.0).abs() < 1e-12);
    assert!(gpa_for(&refs, &"fall 2024".parse().unwrap()).abs() < f64::EPSILON);
}

#[test]
fn summary_is_idempotent() {
    let courses = [
        course("a", Some(3), Some(4.0), "Fall 2024"),
        course("b", Some(3), Some(2.0), "Spring 2025"),
    ];
    let refs: Vec<&Course> = courses.iter().collect();
    assert_eq!(summarize(&[], &refs), summarize(&[], &refs));
}

#[test]
fn progress_examples() {
    let over = graduation_progress(150, 120);
    assert!((over.percent - 100.0).abs() < f64::EPSILON);
    assert_eq!(over.remaining, 0);
    assert!(over.met);

    let none = graduation_progress(0, 120);
    assert!(none.percent.abs() < f64::EPSILON);
    assert_eq!(none.remaining, 120);
    assert!(!none.met);

    let zero_required = graduation_progress(60, 0);
    assert!(zero_required.percent.abs() < f64::EPSILON);
    assert_eq!(zero_required.remaining, 0);
    assert!(zero_required.met);
}

#[test]
fn workspace_recomputes_after_mutation() {
    let mut ws = Workspace::new(12);
    ws.courses.add(course("a", Some(6), Some(4.0), "Fall 2024")).unwrap();
    assert!(!ws.graduation_progress().met);

    ws.courses.add(course("b", Some(6), Some(2.0), "Fall 2024")).unwrap();
    assert!(ws.graduation_progress().met);
    assert!((ws.cumulative_gpa() - 3.0).abs() < 1e-12);

    assert!(ws.delete_course("a"));
    assert_eq!(ws.graduation_progress().remaining, 6);
    assert!((ws.cumulative_gpa() - 2.0).abs() < 1e-12);
}
