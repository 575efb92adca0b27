use mindwell_core::s3_keys;
use uuid::Uuid;

#[test]
fn assessment_keys_nest_under_subject_prefix() {
    let id = Uuid::new_v4();
    let key = s3_keys::assessment("64f0c2a1b3", id);
    assert!(key.starts_with(&s3_keys::subject_assessments_prefix("64f0c2a1b3")));
    assert!(key.ends_with(&format!("{id}.json")));
}

#[test]
fn subject_ids_must_be_path_safe() {
    assert!(s3_keys::validate_subject_id("64f0c2a1b3e4d5").is_ok());
    assert!(s3_keys::validate_subject_id("student_42-a").is_ok());
    assert!(s3_keys::validate_subject_id("").is_err());
    assert!(s3_keys::validate_subject_id("../other").is_err());
    assert!(s3_keys::validate_subject_id("a/b").is_err());
}
