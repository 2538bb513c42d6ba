//! Relationship predicates over the dataset store
//!
//! All checks are recomputed from the current store contents on every call;
//! nothing is cached between calls.

use crate::dataset::DatasetStore;

/// Stateless existence and enrollment checks
pub struct RelationshipValidator<'a> {
    store: &'a DatasetStore,
}

impl<'a> RelationshipValidator<'a> {
    /// Create a validator over the given store
    pub fn new(store: &'a DatasetStore) -> Self {
        Self { store }
    }

    pub fn course_exists(&self, course_id: i32) -> bool {
        self.store.courses().find_by_id(course_id).is_some()
    }

    pub fn student_exists(&self, student_id: i32) -> bool {
        self.store.students().find_by_id(student_id).is_some()
    }

    pub fn grade_exists(&self, grade_id: i32) -> bool {
        self.store.grades().find_by_id(grade_id).is_some()
    }

    /// True iff the student exists and its `course_id` equals `course_id`
    pub fn student_enrolled_in_course(&self, student_id: i32, course_id: i32) -> bool {
        self.store
            .students()
            .find_by_id(student_id)
            .is_some_and(|student| student.course_id == course_id)
    }

    /// True iff any student references the course
    pub fn course_has_enrolled_students(&self, course_id: i32) -> bool {
        self.store
            .students()
            .any(|student| student.course_id == course_id)
    }
}
