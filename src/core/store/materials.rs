//! Course material repository

use super::{Record, Store};
use crate::core::models::{Material, MaterialKind, MaterialPatch};
use chrono::{Days, NaiveDate};

/// Course materials keyed by id
pub type MaterialStore = Store<Material>;

impl Record for Material {
    type Patch = MaterialPatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn apply(&mut self, patch: MaterialPatch) {
        Self::apply(self, patch);
    }
}

impl Store<Material> {
    /// Materials of one course
    #[must_use]
    pub fn by_course(&self, course_id: &str) -> Vec<&Material> {
        self.filter(|m| m.course_id == course_id)
    }

    /// Materials of one kind
    #[must_use]
    pub fn by_kind(&self, kind: MaterialKind) -> Vec<&Material> {
        self.filter(|m| m.kind == kind)
    }

    /// Case-insensitive substring search over title and description
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Material> {
        let query = query.to_lowercase();
        self.filter(|m| {
            m.title.to_lowercase().contains(&query)
                || m
                    .description
                    .as_deref()
                    .is_some_and(|d| d.to_lowercase().contains(&query))
        })
    }

    /// Materials uploaded between `start` and `end`, both inclusive
    #[must_use]
    pub fn in_date_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<&Material> {
        self.filter(|m| start <= m.upload_date && m.upload_date <= end)
    }

    /// Materials uploaded on or after `today - days`
    #[must_use]
    pub fn recent(&self, today: NaiveDate, days: u64) -> Vec<&Material> {
        let cutoff = today.checked_sub_days(Days::new(days)).unwrap_or(NaiveDate::MIN);
        self.filter(|m| m.upload_date >= cutoff)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap()
    }

    fn store() -> MaterialStore {
        let mut slides = Material::new("m1".into(), "c1".into(), "Week 1 Slides".into(), MaterialKind::Pdf, date(9, 3));
        slides.description = Some("Asymptotic notation".to_string());
        let video = Material::new("m2".into(), "c1".into(), "Lecture 4".into(), MaterialKind::Video, date(9, 24));
        let link = Material::new("m3".into(), "c2".into(), "Textbook site".into(), MaterialKind::Link, date(10, 1));

        MaterialStore::from_records(vec![slides, video, link]).unwrap()
    }

    #[test]
    fn test_course_and_kind() {
        let materials = store();
        assert_eq!(materials.by_course("c1").len(), 2);
        assert_eq!(materials.by_kind(MaterialKind::Link)[0].id, "m3");
        assert!(materials.by_kind(MaterialKind::Text).is_empty());
    }

    #[test]
    fn test_search_title_and_description() {
        let materials = store();
        assert_eq!(materials.search("SLIDES")[0].id, "m1");
        assert_eq!(materials.search("asymptotic")[0].id, "m1");
        assert!(materials.search("quiz").is_empty());
    }

    #[test]
    fn test_date_range_inclusive() {
        let materials = store();
        assert_eq!(materials.in_date_range(date(9, 3), date(9, 24)).len(), 2);
        assert_eq!(materials.in_date_range(date(10, 1), date(10, 1)).len(), 1);
    }

    #[test]
    fn test_recent_window() {
        let materials = store();
        let ids: Vec<&str> = materials.recent(date(10, 1), 7).iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["m2", "m3"]);
        assert_eq!(materials.recent(date(10, 1), 0).len(), 1);
    }
}
