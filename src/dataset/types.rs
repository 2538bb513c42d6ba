//! Entity types held by the dataset store
//!
//! Field names serialize as camelCase, matching the seed files.

use serde::{Deserialize, Serialize};

/// Anything stored in a [`Collection`](super::Collection).
pub trait Entity: Clone {
    /// Collection name used in logs and error messages
    const COLLECTION: &'static str;

    /// The entity's id
    fn id(&self) -> i32;
}

/// A student enrolled in exactly one course
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: i32,
    pub name: String,
    pub last_name: String,
    pub course_id: i32,
}

/// A course students can enroll in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: i32,
    pub name: String,
    pub description: String,
}

/// A score a student obtained in a course
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Grade {
    pub id: i32,
    pub course_id: i32,
    pub student_id: i32,
    pub grade: i32,
}

impl Entity for Student {
    const COLLECTION: &'static str = "students";

    fn id(&self) -> i32 {
        self.id
    }
}

impl Entity for Course {
    const COLLECTION: &'static str = "courses";

    fn id(&self) -> i32 {
        self.id
    }
}

impl Entity for Grade {
    const COLLECTION: &'static str = "grades";

    fn id(&self) -> i32 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_student_uses_camel_case_fields() {
        let student: Student = serde_json::from_value(json!({
            "id": 3,
            "name": "Ada",
            "lastName": "Lovelace",
            "courseId": 2
        }))
        .unwrap();

        assert_eq!(student.last_name, "Lovelace");
        assert_eq!(student.course_id, 2);

        let value = serde_json::to_value(&student).unwrap();
        assert_eq!(value["lastName"], "Lovelace");
        assert!(value.get("last_name").is_none());
    }

    #[test]
    fn test_grade_requires_all_fields() {
        let result: Result<Grade, _> = serde_json::from_value(json!({
            "id": 1,
            "courseId": 1,
            "grade": 80
        }));
        assert!(result.is_err());
    }
}
