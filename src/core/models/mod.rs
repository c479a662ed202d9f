//! Data models for `scholar-analytics`

pub mod academic;
pub mod course;
pub mod material;
pub mod note;
pub mod reminder;
pub mod semester;
pub mod tag;

pub use academic::{GpaScale, GraduationRequirements, DEFAULT_REQUIRED_CREDITS};
pub use course::{Course, CoursePatch};
pub use material::{Material, MaterialKind, MaterialPatch};
pub use note::{Note, NotePatch};
pub use reminder::{Priority, Reminder, ReminderKind, ReminderPatch};
pub use semester::{Semester, SemesterPatch};
pub use tag::{Tag, TagKind, TagPatch};
