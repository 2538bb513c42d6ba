//! Whole-store integrity audit
//!
//! Mutations keep references valid at write time, but the seed files are
//! taken as-is and a student keeps its `courseId` even if that course is
//! gone. The audit reports every reference that does not currently hold.

use std::fmt;

use serde::Serialize;

use crate::dataset::DatasetStore;

use super::relationships::RelationshipValidator;

/// A reference that does not resolve against the current store
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IntegrityViolation {
    /// Student references a course that does not exist
    #[serde(rename_all = "camelCase")]
    DanglingCourse { student_id: i32, course_id: i32 },

    /// Grade references a student that does not exist
    #[serde(rename_all = "camelCase")]
    DanglingStudent { grade_id: i32, student_id: i32 },

    /// Grade's student exists but is enrolled in a different course
    #[serde(rename_all = "camelCase")]
    GradeNotEnrolled {
        grade_id: i32,
        student_id: i32,
        course_id: i32,
    },
}

impl fmt::Display for IntegrityViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntegrityViolation::DanglingCourse {
                student_id,
                course_id,
            } => write!(
                f,
                "Student {} references missing course {}",
                student_id, course_id
            ),
            IntegrityViolation::DanglingStudent {
                grade_id,
                student_id,
            } => write!(
                f,
                "Grade {} references missing student {}",
                grade_id, student_id
            ),
            IntegrityViolation::GradeNotEnrolled {
                grade_id,
                student_id,
                course_id,
            } => write!(
                f,
                "Grade {}: student {} is not enrolled in course {}",
                grade_id, student_id, course_id
            ),
        }
    }
}

/// Check every student and grade reference, in collection order
pub fn audit(store: &DatasetStore) -> Vec<IntegrityViolation> {
    let validator = RelationshipValidator::new(store);
    let mut violations = Vec::new();

    for student in store.students().list_all() {
        if !validator.course_exists(student.course_id) {
            violations.push(IntegrityViolation::DanglingCourse {
                student_id: student.id,
                course_id: student.course_id,
            });
        }
    }

    for grade in store.grades().list_all() {
        if !validator.student_exists(grade.student_id) {
            violations.push(IntegrityViolation::DanglingStudent {
                grade_id: grade.id,
                student_id: grade.student_id,
            });
        } else if !validator.student_enrolled_in_course(grade.student_id, grade.course_id) {
            violations.push(IntegrityViolation::GradeNotEnrolled {
                grade_id: grade.id,
                student_id: grade.student_id,
                course_id: grade.course_id,
            });
        }
    }

    violations
}
