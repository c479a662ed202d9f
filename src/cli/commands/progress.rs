//! `scholar progress` handler

use super::load_workspace;
use scholar_analytics::config::Config;
use scholar_analytics::core::progress::GraduationProgress;
use std::path::Path;

const BAR_WIDTH: usize = 30;

/// Print credit progress toward graduation
///
/// # Errors
/// Returns a printable message if the record cannot be loaded
pub fn run(input_file: Option<&Path>, required: Option<u32>, config: &Config) -> Result<(), String> {
    let mut workspace = load_workspace(input_file, config)?;
    if let Some(required) = required {
        workspace.requirements.required_credits = required;
    }

    let earned = workspace.sync_current_credits();
    let progress = workspace.graduation_progress();
    println!("\n=== Graduation Progress ===\n");
    println!(
        "Credits:   {earned} / {}",
        workspace.requirements.required_credits
    );
    println!("Progress:  {} {:.2}%", bar(&progress), progress.percent);
    println!("Remaining: {}", progress.remaining);
    println!(
        "Status:    {}",
        if progress.met { "requirement met" } else { "in progress" }
    );
    Ok(())
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn bar(progress: &GraduationProgress) -> String {
    let filled = ((progress.percent / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}
