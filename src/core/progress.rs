//! Graduation progress calculator

use serde::Serialize;

/// Earned credits measured against a credit requirement
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GraduationProgress {
    /// Percent complete, clamped to `[0, 100]`
    pub percent: f64,
    /// Credits still needed, never negative
    pub remaining: u32,
    /// Whether the requirement is satisfied
    pub met: bool,
}

/// Compute graduation progress.
///
/// `percent` is `min(current / required * 100, 100)`. When `required` is 0
/// the percent is reported as 0 even though the requirement is met; callers
/// that display the bar should check `met` as well.
#[must_use]
pub fn graduation_progress(current_credits: u32, required_credits: u32) -> GraduationProgress {
    let percent = if required_credits == 0 {
        0.0
    } else {
        (f64::from(current_credits) / f64::from(required_credits) * 100.0).min(100.0)
    };

    GraduationProgress {
        percent,
        remaining: required_credits.saturating_sub(current_credits),
        met: current_credits >= required_credits,
    }
}
