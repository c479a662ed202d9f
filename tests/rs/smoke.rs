//! Integration smoke tests for `scholar_analytics`

use scholar_analytics::core::loader::load_record;
use scholar_analytics::get_version;

#[test]
fn version_is_not_empty() {
    let v = get_version();
    assert!(!v.trim().is_empty());
}

#[test]
fn sample_record_loads_and_validates() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/samples/records/demo_student.toml");
    let workspace = load_record(path).expect("sample record should load");
    assert!(workspace.validate().is_ok());
    assert_eq!(workspace.student.as_deref(), Some("Alex Rivera"));
}
