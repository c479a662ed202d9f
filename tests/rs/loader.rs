//! Integration tests for loading academic record files

use chrono::NaiveDate;
use scholar_analytics::core::knowledge::TagFilter;
use scholar_analytics::core::loader::{load_record, load_record_with, RecordDefaults};
use scholar_analytics::core::models::GpaScale;
use std::fs;
use tempfile::TempDir;

const SAMPLE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/samples/records/demo_student.toml");

#[test]
fn sample_record_figures() {
    let ws = load_record(SAMPLE).expect("sample loads");

    assert_eq!(ws.courses.len(), 5);
    assert_eq!(ws.total_credits(), 18);
    assert!((ws.cumulative_gpa() - 49.7 / 14.0).abs() < 1e-9);

    let summary = ws.gpa_summary();
    let labels: Vec<&str> = summary.semesters.iter().map(|s| s.semester.as_str()).collect();
    assert_eq!(labels, vec!["Fall 2024", "Spring 2025"]);
    assert!((summary.semesters[0].gpa - 3.7).abs() < 1e-9);
    assert!((summary.semesters[1].gpa - 3.4).abs() < 1e-9);

    let progress = ws.graduation_progress();
    assert!((progress.percent - 15.0).abs() < 1e-9);
    assert_eq!(progress.remaining, 102);
}

#[test]
fn sample_record_knowledge_web() {
    let ws = load_record(SAMPLE).expect("sample loads");
    let web = ws.knowledge_web(&TagFilter::All);

    assert_eq!(web.node_count(), 5);
    assert_eq!(web.edge_count(), 3);
    assert_eq!(web.isolated().len(), 1);
    assert_eq!(web.neighbors("note-sorting"), vec!["note-heaps", "note-bigo"]);

    let trees = ws.knowledge_web(&TagFilter::Tag("Trees".into()));
    assert_eq!(trees.node_count(), 2);
    assert_eq!(trees.edges[0].strength, 2);
}

#[test]
fn sample_record_repositories() {
    let ws = load_record(SAMPLE).expect("sample loads");
    let today = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();

    assert_eq!(ws.semesters.current(today).map(|s| s.id.as_str()), Some("spring-2025"));
    assert_eq!(ws.notes.by_course("cs202").len(), 2);
    assert_eq!(ws.notes.search("big-o").len(), 1);
    assert_eq!(ws.tags.defaults().len(), 2);
    assert!(ws.tags.exists("trees"));
    assert_eq!(ws.reminders.upcoming(today, 7).len(), 1);
    assert_eq!(ws.reminders.pending().len(), 2);
    assert_eq!(ws.reminders.search("midterm").len(), 1);
    assert_eq!(ws.materials.by_course("cs202").len(), 1);
    assert_eq!(ws.materials.recent(today, 7)[0].id, "mat-heaps-video");
    assert_eq!(ws.materials.search("binary heaps").len(), 1);
}

#[test]
fn missing_sections_use_defaults() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("record.toml");
    fs::write(
        &path,
        "[[courses]]\nname = \"Physics\"\ncode = \"PHY101\"\ncredits = 4\ngpa = 8.5\n",
    )
    .expect("write record");

    let defaults = RecordDefaults {
        required_credits: 60,
        gpa_scale: GpaScale::Ten,
    };
    let ws = load_record_with(&path, &defaults).expect("record loads");
    assert_eq!(ws.requirements.required_credits, 60);
    assert_eq!(ws.scale, GpaScale::Ten);
    assert!(ws.validate().is_ok());

    let strict = load_record(&path).expect("record loads");
    assert!(strict.validate().is_err());
}

#[test]
fn unreadable_or_malformed_files_fail() {
    let dir = TempDir::new().expect("temp dir");
    assert!(load_record(dir.path().join("missing.toml")).is_err());

    let path = dir.path().join("broken.toml");
    fs::write(&path, "[[semesters]]\nname = \"Fall\"\nstart_date = \"yesterday\"\n").expect("write");
    let err = load_record(&path).unwrap_err();
    assert!(err.to_string().contains("broken.toml"));
}
