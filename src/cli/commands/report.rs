//! `scholar report` handler

use super::load_workspace;
use chrono::Local;
use scholar_analytics::config::Config;
use scholar_analytics::core::report::{
    HtmlReporter, MarkdownReporter, ReportContext, ReportFormat, ReportGenerator,
};
use scholar_analytics::{error, info};
use std::path::{Path, PathBuf};

/// Generate a report for the academic record
///
/// # Errors
/// Returns a printable message if the format is unknown, the record cannot
/// be loaded, or the report cannot be written
pub fn run(
    input_file: Option<&Path>,
    output_file: Option<&Path>,
    format_str: &str,
    config: &Config,
) -> Result<(), String> {
    let format: ReportFormat = format_str.parse().map_err(|e| format!("✗ {e}"))?;
    let workspace = load_workspace(input_file, config)?;

    let output_path = output_file.map_or_else(
        || default_output_path(input_file, &config.paths.reports_dir, format),
        Path::to_path_buf,
    );

    let ctx = ReportContext::new(&workspace, Local::now().date_naive());
    let reporter: Box<dyn ReportGenerator> = match format {
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
        ReportFormat::Html => Box::new(HtmlReporter::new()),
    };

    reporter.generate(&ctx, &output_path).map_err(|e| {
        error!("Report generation failed for {}: {e}", output_path.display());
        format!("✗ Failed to generate {format} report: {e}")
    })?;

    info!("Report written to {}", output_path.display());
    println!("✓ Report generated: {}", output_path.display());
    Ok(())
}

/// `<reports_dir>/<record stem>_report.<ext>`
fn default_output_path(input_file: Option<&Path>, reports_dir: &str, format: ReportFormat) -> PathBuf {
    let stem = input_file
        .and_then(Path::file_stem)
        .map_or_else(|| "academic".to_string(), |s| s.to_string_lossy().to_string());
    let dir = if reports_dir.is_empty() { "." } else { reports_dir };
    PathBuf::from(dir).join(format!("{stem}_report.{}", format.extension()))
}
