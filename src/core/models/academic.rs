//! Student-level academic settings: GPA scale and graduation requirements

use crate::core::progress::{graduation_progress, GraduationProgress};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Credits required for graduation when nothing else is configured
pub const DEFAULT_REQUIRED_CREDITS: u32 = 120;

/// Grade-point scale the student's grades are recorded on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum GpaScale {
    /// 0.0 – 4.0
    #[default]
    Four,
    /// 0.0 – 5.0
    Five,
    /// 0.0 – 10.0
    Ten,
}

impl GpaScale {
    /// Highest attainable grade on this scale
    #[must_use]
    pub const fn max(self) -> f64 {
        match self {
            Self::Four => 4.0,
            Self::Five => 5.0,
            Self::Ten => 10.0,
        }
    }

    /// Whether `gpa` lies within `[0, max]`
    #[must_use]
    pub fn accepts(self, gpa: f64) -> bool {
        (0.0..=self.max()).contains(&gpa)
    }

    /// Map a grade on this scale onto the 4.0 scale
    #[must_use]
    pub fn to_four_point(self, gpa: f64) -> f64 {
        gpa * 4.0 / self.max()
    }
}

impl FromStr for GpaScale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "4" | "4.0" => Ok(Self::Four),
            "5" | "5.0" => Ok(Self::Five),
            "10" | "10.0" => Ok(Self::Ten),
            _ => Err(format!(
                "Invalid GPA scale: '{s}' (expected 4.0, 5.0 or 10.0)"
            )),
        }
    }
}

impl TryFrom<String> for GpaScale {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<GpaScale> for String {
    fn from(scale: GpaScale) -> Self {
        scale.to_string()
    }
}

impl fmt::Display for GpaScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.max())
    }
}

/// Credits needed to graduate
///
/// `current_credits` is a cached display value only; callers derive the real
/// figure from the course collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraduationRequirements {
    /// Credits required for the degree
    #[serde(default = "default_required_credits")]
    pub required_credits: u32,

    /// Last known earned credits
    #[serde(default)]
    pub current_credits: u32,
}

const fn default_required_credits() -> u32 {
    DEFAULT_REQUIRED_CREDITS
}

impl Default for GraduationRequirements {
    fn default() -> Self {
        Self::new(DEFAULT_REQUIRED_CREDITS)
    }
}

impl GraduationRequirements {
    /// Requirements with the given credit target
    #[must_use]
    pub const fn new(required_credits: u32) -> Self {
        Self {
            required_credits,
            current_credits: 0,
        }
    }

    /// Progress toward these requirements given earned credits
    #[must_use]
    pub fn progress(&self, current_credits: u32) -> GraduationProgress {
        graduation_progress(current_credits, self.required_credits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_parse_and_display() {
        assert_eq!("4.0".parse::<GpaScale>(), Ok(GpaScale::Four));
        assert_eq!("5".parse::<GpaScale>(), Ok(GpaScale::Five));
        assert_eq!("10.0".parse::<GpaScale>(), Ok(GpaScale::Ten));
        assert!("7.0".parse::<GpaScale>().is_err());
        assert_eq!(GpaScale::Ten.to_string(), "10.0");
    }

    #[test]
    fn test_scale_accepts() {
        assert!(GpaScale::Four.accepts(0.0));
        assert!(GpaScale::Four.accepts(4.0));
        assert!(!GpaScale::Four.accepts(4.3));
        assert!(!GpaScale::Four.accepts(-0.1));
        assert!(GpaScale::Ten.accepts(8.5));
    }

    #[test]
    fn test_to_four_point() {
        assert!((GpaScale::Ten.to_four_point(10.0) - 4.0).abs() < f64::EPSILON);
        assert!((GpaScale::Five.to_four_point(2.5) - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_default_requirements() {
        let req = GraduationRequirements::default();
        assert_eq!(req.required_credits, 120);
        assert_eq!(req.current_credits, 0);
    }
}
