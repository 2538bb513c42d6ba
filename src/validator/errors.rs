//! Validation error types
//!
//! Raised by mutations when a referenced entity is missing or a
//! referential-integrity rule would be broken. Messages always name the
//! offending id(s).

use thiserror::Error;

/// Result type for mutation operations
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Mutation rejected by the relationship validator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Referenced course does not exist
    #[error("Course with id {0} not found")]
    CourseNotFound(i32),

    /// Referenced student does not exist
    #[error("Student with id {0} not found")]
    StudentNotFound(i32),

    /// Referenced grade does not exist
    #[error("Grade with id {0} not found")]
    GradeNotFound(i32),

    /// Student is missing or enrolled in another course
    #[error("Student with id {student_id} is not enrolled in course with id {course_id}")]
    StudentNotEnrolled { student_id: i32, course_id: i32 },

    /// Course still has enrolled students
    #[error("Course with id {0} is in use by enrolled students")]
    CourseInUse(i32),

    /// Collection has already handed out the largest representable id
    #[error("No ids left to allocate in {0}")]
    IdsExhausted(&'static str),
}

impl ValidationError {
    /// Returns the error code string
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::CourseNotFound(_) => "COURSE_NOT_FOUND",
            ValidationError::StudentNotFound(_) => "STUDENT_NOT_FOUND",
            ValidationError::GradeNotFound(_) => "GRADE_NOT_FOUND",
            ValidationError::StudentNotEnrolled { .. } => "STUDENT_NOT_ENROLLED",
            ValidationError::CourseInUse(_) => "COURSE_IN_USE",
            ValidationError::IdsExhausted(_) => "IDS_EXHAUSTED",
        }
    }
}
