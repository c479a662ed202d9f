//! Integration tests for report generation

use chrono::NaiveDate;
use scholar_analytics::core::loader::load_record;
use scholar_analytics::core::report::{
    HtmlReporter, MarkdownReporter, ReportContext, ReportGenerator,
};
use scholar_analytics::core::store::Workspace;
use std::fs;
use tempfile::TempDir;

const SAMPLE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/samples/records/demo_student.toml");

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
}

#[test]
fn markdown_report_contains_figures() {
    let ws = load_record(SAMPLE).expect("sample loads");
    let ctx = ReportContext::new(&ws, today());
    let md = MarkdownReporter::new().render(&ctx).expect("render markdown");

    assert!(md.starts_with("# Academic Report: Alex Rivera"));
    assert!(md.contains("| Cumulative GPA | 3.55 (B+, good) |"));
    assert!(md.contains("| Fall 2024 | 3.70 | 7 |"));
    assert!(md.contains("| Semester GPA | high 3.70, low 3.40, average 3.55 |"));
    assert!(md.contains("| Credits earned | 18 of 120 |"));
    assert!(md.contains("| Progress | 15.00% |"));
    assert!(md.contains("102 credits to go."));
    assert!(md.contains("| CS301 | Operating Systems | - | 4 | - | - |"));
    assert!(md.contains("CS202 Midterm"));
    assert!(md.contains("```mermaid\nflowchart LR"));
    assert!(md.contains("5 notes, 3 connections, 1 unconnected."));
}

#[test]
fn html_report_escapes_and_embeds_diagram() {
    let mut ws = load_record(SAMPLE).expect("sample loads");
    ws.student = Some("<Alex & Co>".to_string());
    let ctx = ReportContext::new(&ws, today());
    let html = HtmlReporter::new().render(&ctx).expect("render html");

    assert!(html.contains("&lt;Alex &amp; Co&gt;"));
    assert!(!html.contains("<Alex & Co>"));
    assert!(html.contains("<pre class=\"mermaid\">"));
    assert!(html.contains("width: 15.00%"));
}

#[test]
fn empty_workspace_renders() {
    let ws = Workspace::new(120);
    let ctx = ReportContext::new(&ws, today());
    let md = MarkdownReporter::new().render(&ctx).expect("render markdown");

    assert!(md.contains("# Academic Report: Student"));
    assert!(md.contains("_No graded semesters yet._"));
    assert!(md.contains("_No courses recorded._"));
    assert!(md.contains("| Semester GPA | - |"));
    assert!(md.contains("0.00"));
}

#[test]
fn generate_writes_file_and_creates_directories() {
    let ws = load_record(SAMPLE).expect("sample loads");
    let ctx = ReportContext::new(&ws, today());
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("nested").join("report.html");

    HtmlReporter::new().generate(&ctx, &path).expect("generate");
    let written = fs::read_to_string(&path).expect("read report");
    assert!(written.starts_with("<!DOCTYPE html>"));
}
