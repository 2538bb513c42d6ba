//! Dataset Loading Tests
//!
//! Seed files are read once at startup:
//! - All three files must exist and parse
//! - Ids must be positive and unique per collection
//! - Broken references load fine and show up in the audit
//! - New ids continue after the largest seeded id

use std::fs;
use std::path::Path;

use gradebook::dataset::{
    DatasetLoader, DatasetStore, LoadError, COURSES_FILE, GRADES_FILE, STUDENTS_FILE,
};
use gradebook::resolver::MutationResolver;
use gradebook::validator::{audit, IntegrityViolation};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn write_dataset(dir: &Path, students: &str, courses: &str, grades: &str) {
    fs::write(dir.join(STUDENTS_FILE), students).unwrap();
    fs::write(dir.join(COURSES_FILE), courses).unwrap();
    fs::write(dir.join(GRADES_FILE), grades).unwrap();
}

// =============================================================================
// Loading
// =============================================================================

/// The dataset shipped in `data/` loads and is consistent.
#[test]
fn test_bundled_dataset_is_clean() {
    let data_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
    let dataset = DatasetLoader::new(&data_dir).load().unwrap();
    assert!(!dataset.courses.is_empty());

    let store = DatasetStore::new(dataset);
    assert!(audit(&store).is_empty());
}

/// Empty arrays are a valid dataset.
#[test]
fn test_empty_dataset() {
    let tmp = TempDir::new().unwrap();
    write_dataset(tmp.path(), "[]", "[]", "[]");

    let store = DatasetStore::new(DatasetLoader::new(tmp.path()).load().unwrap());
    assert!(store.students().is_empty());
    assert!(store.courses().is_empty());
    assert!(store.grades().is_empty());
}

/// A missing data directory fails with an I/O error naming the file.
#[test]
fn test_missing_directory() {
    let tmp = TempDir::new().unwrap();
    let err = DatasetLoader::new(tmp.path().join("nope"))
        .load()
        .unwrap_err();

    assert!(matches!(err, LoadError::Io { .. }));
    assert!(err.to_string().contains(STUDENTS_FILE));
}

/// An object instead of an array is a parse error.
#[test]
fn test_wrong_shape() {
    let tmp = TempDir::new().unwrap();
    write_dataset(tmp.path(), "[]", "[]", r#"{"id": 1}"#);

    let err = DatasetLoader::new(tmp.path()).load().unwrap_err();
    assert!(matches!(err, LoadError::Parse { .. }));
}

/// Duplicate student ids are rejected.
#[test]
fn test_duplicate_student_id() {
    let tmp = TempDir::new().unwrap();
    write_dataset(
        tmp.path(),
        r#"[
            {"id": 1, "name": "A", "lastName": "B", "courseId": 1},
            {"id": 1, "name": "C", "lastName": "D", "courseId": 1}
        ]"#,
        r#"[{"id": 1, "name": "Math", "description": ""}]"#,
        "[]",
    );

    let err = DatasetLoader::new(tmp.path()).load().unwrap_err();
    assert_eq!(err.code(), "DATASET_DUPLICATE_ID");
}

// =============================================================================
// Seeded Store Behavior
// =============================================================================

/// Broken references load and are reported by the audit.
#[test]
fn test_dangling_references_reported() {
    let tmp = TempDir::new().unwrap();
    write_dataset(
        tmp.path(),
        r#"[{"id": 1, "name": "A", "lastName": "B", "courseId": 8}]"#,
        r#"[{"id": 1, "name": "Math", "description": ""}]"#,
        r#"[{"id": 1, "courseId": 1, "studentId": 1, "grade": 50}]"#,
    );

    let store = DatasetStore::new(DatasetLoader::new(tmp.path()).load().unwrap());
    assert_eq!(
        audit(&store),
        vec![
            IntegrityViolation::DanglingCourse {
                student_id: 1,
                course_id: 8
            },
            IntegrityViolation::GradeNotEnrolled {
                grade_id: 1,
                student_id: 1,
                course_id: 1
            },
        ]
    );
}

/// Ids allocated after loading continue from the largest seeded id.
#[test]
fn test_ids_continue_after_seed() {
    let tmp = TempDir::new().unwrap();
    write_dataset(
        tmp.path(),
        "[]",
        r#"[
            {"id": 7, "name": "A", "description": ""},
            {"id": 3, "name": "B", "description": ""}
        ]"#,
        "[]",
    );

    let mut store = DatasetStore::new(DatasetLoader::new(tmp.path()).load().unwrap());
    let course = MutationResolver::new(&mut store)
        .add_course("C".into(), "".into())
        .unwrap();
    assert_eq!(course.id, 8);
}

/// A seed holding the largest id loads, but no new id is handed out after it.
#[test]
fn test_max_seeded_id_never_reused() {
    let tmp = TempDir::new().unwrap();
    write_dataset(
        tmp.path(),
        "[]",
        &format!(r#"[{{"id": {}, "name": "A", "description": ""}}]"#, i32::MAX),
        "[]",
    );

    let mut store = DatasetStore::new(DatasetLoader::new(tmp.path()).load().unwrap());
    let err = MutationResolver::new(&mut store)
        .add_course("B".into(), "".into())
        .unwrap_err();

    assert_eq!(err.code(), "IDS_EXHAUSTED");
    let ids: Vec<i32> = store.courses().list_all().iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![i32::MAX]);
}
