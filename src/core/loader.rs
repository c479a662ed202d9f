//! TOML academic record loader
//!
//! A record file holds one student's semesters, courses, notes, course
//! materials, tags and reminders. Dates are quoted ISO strings (`"2024-09-01"`).

use crate::config::Config;
use crate::core::models::{
    Course, GpaScale, GraduationRequirements, Material, Note, Reminder, Semester, Tag,
    DEFAULT_REQUIRED_CREDITS,
};
use crate::core::store::{Store, Workspace};
use serde::Deserialize;
use std::error::Error;
use std::fs;
use std::path::Path;

/// Values used when the record file leaves them out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordDefaults {
    /// Credit target when there is no `[graduation]` table
    pub required_credits: u32,
    /// Grade scale when `[student]` does not name one
    pub gpa_scale: GpaScale,
}

impl Default for RecordDefaults {
    fn default() -> Self {
        Self {
            required_credits: DEFAULT_REQUIRED_CREDITS,
            gpa_scale: GpaScale::Four,
        }
    }
}

impl From<&Config> for RecordDefaults {
    fn from(config: &Config) -> Self {
        Self {
            required_credits: config.required_credits(),
            gpa_scale: config.gpa_scale(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct StudentSection {
    name: Option<String>,
    gpa_scale: Option<GpaScale>,
}

#[derive(Debug, Deserialize)]
struct GraduationSection {
    required_credits: u32,
}

#[derive(Debug, Default, Deserialize)]
struct RecordFile {
    #[serde(default)]
    student: Option<StudentSection>,
    #[serde(default)]
    graduation: Option<GraduationSection>,
    #[serde(default)]
    semesters: Vec<Semester>,
    #[serde(default)]
    courses: Vec<Course>,
    #[serde(default)]
    notes: Vec<Note>,
    #[serde(default)]
    materials: Vec<Material>,
    #[serde(default)]
    tags: Vec<Tag>,
    #[serde(default)]
    reminders: Vec<Reminder>,
}

/// Parse an academic record from TOML text
///
/// # Arguments
/// * `content` - Record file contents
/// * `defaults` - Values applied where the file is silent
///
/// # Errors
/// Returns an error if the TOML is malformed, a date does not parse, or two
/// records of the same kind share an id
pub fn from_toml_str(content: &str, defaults: &RecordDefaults) -> Result<Workspace, Box<dyn Error>> {
    let file: RecordFile = toml::from_str(content)?;
    let student = file.student.unwrap_or_default();

    let required = file
        .graduation
        .map_or(defaults.required_credits, |g| g.required_credits);

    let mut workspace = Workspace {
        student: student.name,
        scale: student.gpa_scale.unwrap_or(defaults.gpa_scale),
        requirements: GraduationRequirements::new(required),
        semesters: Store::from_records(file.semesters)?,
        courses: Store::from_records(file.courses)?,
        notes: Store::from_records(file.notes)?,
        materials: Store::from_records(file.materials)?,
        tags: Store::from_records(file.tags)?,
        reminders: Store::from_records(file.reminders)?,
    };
    workspace.sync_current_credits();

    Ok(workspace)
}

/// Load an academic record file with built-in defaults
///
/// # Errors
/// Returns an error if the file cannot be read or parsed
pub fn load_record<P: AsRef<Path>>(path: P) -> Result<Workspace, Box<dyn Error>> {
    load_record_with(path, &RecordDefaults::default())
}

/// Load an academic record file, filling gaps from `defaults`
///
/// # Errors
/// Returns an error if the file cannot be read or parsed
pub fn load_record_with<P: AsRef<Path>>(
    path: P,
    defaults: &RecordDefaults,
) -> Result<Workspace, Box<dyn Error>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Cannot read record file '{}': {e}", path.display()))?;
    let workspace = from_toml_str(&content, defaults)
        .map_err(|e| format!("Invalid record file '{}': {e}", path.display()))?;

    crate::info!(
        "Loaded {}: {} semesters, {} courses, {} notes, {} materials, {} tags, {} reminders",
        path.display(),
        workspace.semesters.len(),
        workspace.courses.len(),
        workspace.notes.len(),
        workspace.materials.len(),
        workspace.tags.len(),
        workspace.reminders.len()
    );

    Ok(workspace)
}
