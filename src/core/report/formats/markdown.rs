//! Markdown report generator
//!
//! The knowledge web is embedded as a Mermaid block, which GitHub, GitLab
//! and VS Code render inline.

use super::ReportView;
use crate::core::report::visualization::MermaidGenerator;
use crate::core::report::{ReportContext, ReportGenerator};
use askama::Template;
use std::error::Error;

#[derive(Template)]
#[template(path = "report.md")]
struct MarkdownTemplate<'a> {
    view: &'a ReportView,
    diagram: String,
}

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        let view = ReportView::from_context(ctx);
        let template = MarkdownTemplate {
            diagram: MermaidGenerator::fenced(&view.mermaid),
            view: &view,
        };
        Ok(template.render()?)
    }
}
