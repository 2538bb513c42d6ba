//! Create and delete operations
//!
//! Flow for every operation:
//! 1. Validate against the current store contents
//! 2. Apply exactly one collection mutation
//! 3. Return the created or removed entity
//!
//! A rejected operation leaves every collection untouched.

use crate::dataset::{Collection, Course, DatasetStore, Entity, Grade, Student};
use crate::validator::{RelationshipValidator, ValidationError, ValidationResult};

/// Mutation resolver holding exclusive access to the store
pub struct MutationResolver<'a> {
    store: &'a mut DatasetStore,
}

fn next_id<T: Entity>(collection: &mut Collection<T>) -> ValidationResult<i32> {
    collection
        .allocate_id()
        .ok_or(ValidationError::IdsExhausted(T::COLLECTION))
}

fn take_by_id<T: Entity>(collection: &mut Collection<T>, id: i32) -> Option<T> {
    let removed = collection.find_by_id(id).cloned();
    collection.remove_where(|row| row.id() == id);
    removed
}

impl<'a> MutationResolver<'a> {
    pub fn new(store: &'a mut DatasetStore) -> Self {
        Self { store }
    }

    fn validator(&self) -> RelationshipValidator<'_> {
        RelationshipValidator::new(&*self.store)
    }

    /// Create a course. Fails only once course ids are exhausted.
    pub fn add_course(&mut self, name: String, description: String) -> ValidationResult<Course> {
        let courses = self.store.courses_mut();
        let course = Course {
            id: next_id(courses)?,
            name,
            description,
        };
        courses.append(course.clone());
        Ok(course)
    }

    /// Create a student enrolled in an existing course
    pub fn add_student(
        &mut self,
        name: String,
        last_name: String,
        course_id: i32,
    ) -> ValidationResult<Student> {
        if !self.validator().course_exists(course_id) {
            return Err(ValidationError::CourseNotFound(course_id));
        }

        let students = self.store.students_mut();
        let student = Student {
            id: next_id(students)?,
            name,
            last_name,
            course_id,
        };
        students.append(student.clone());
        Ok(student)
    }

    /// Record a grade for a student in the course they are enrolled in
    pub fn add_grade(
        &mut self,
        course_id: i32,
        student_id: i32,
        grade: i32,
    ) -> ValidationResult<Grade> {
        if !self
            .validator()
            .student_enrolled_in_course(student_id, course_id)
        {
            return Err(ValidationError::StudentNotEnrolled {
                student_id,
                course_id,
            });
        }

        let grades = self.store.grades_mut();
        let grade = Grade {
            id: next_id(grades)?,
            course_id,
            student_id,
            grade,
        };
        grades.append(grade.clone());
        Ok(grade)
    }

    /// Remove a student, returning it
    pub fn delete_student(&mut self, id: i32) -> ValidationResult<Student> {
        if !self.validator().student_exists(id) {
            return Err(ValidationError::StudentNotFound(id));
        }

        take_by_id(self.store.students_mut(), id).ok_or(ValidationError::StudentNotFound(id))
    }

    /// Remove a course that no student references, returning it
    pub fn delete_course(&mut self, id: i32) -> ValidationResult<Course> {
        let validator = self.validator();
        if !validator.course_exists(id) {
            return Err(ValidationError::CourseNotFound(id));
        }
        if validator.course_has_enrolled_students(id) {
            return Err(ValidationError::CourseInUse(id));
        }

        take_by_id(self.store.courses_mut(), id).ok_or(ValidationError::CourseNotFound(id))
    }

    /// Remove a grade, returning it
    pub fn delete_grade(&mut self, id: i32) -> ValidationResult<Grade> {
        if !self.validator().grade_exists(id) {
            return Err(ValidationError::GradeNotFound(id));
        }

        take_by_id(self.store.grades_mut(), id).ok_or(ValidationError::GradeNotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;

    fn one_course() -> DatasetStore {
        DatasetStore::new(Dataset {
            students: vec![],
            courses: vec![Course {
                id: 1,
                name: "Math".into(),
                description: "Numbers".into(),
            }],
            grades: vec![],
        })
    }

    #[test]
    fn test_add_student_persists_course_id() {
        let mut store = one_course();
        let student = MutationResolver::new(&mut store)
            .add_student("A".into(), "B".into(), 1)
            .unwrap();

        assert_eq!(student.id, 1);
        assert_eq!(student.course_id, 1);
        assert_eq!(store.students().find_by_id(1), Some(&student));
    }

    #[test]
    fn test_add_student_unknown_course() {
        let mut store = one_course();
        let err = MutationResolver::new(&mut store)
            .add_student("A".into(), "B".into(), 2)
            .unwrap_err();

        assert_eq!(err, ValidationError::CourseNotFound(2));
        assert!(store.students().is_empty());
    }

    #[test]
    fn test_add_grade_requires_enrollment() {
        let mut store = one_course();
        let mut resolver = MutationResolver::new(&mut store);
        resolver.add_student("A".into(), "B".into(), 1).unwrap();
        let other = resolver.add_course("Art".into(), "".into()).unwrap();

        let err = resolver.add_grade(other.id, 1, 80).unwrap_err();
        assert_eq!(err.code(), "STUDENT_NOT_ENROLLED");

        let err = resolver.add_grade(1, 42, 80).unwrap_err();
        assert_eq!(err.code(), "STUDENT_NOT_ENROLLED");

        let grade = resolver.add_grade(1, 1, 80).unwrap();
        assert_eq!(grade.id, 1);
        assert_eq!(store.grades().len(), 1);
    }

    #[test]
    fn test_delete_course_in_use() {
        let mut store = one_course();
        let mut resolver = MutationResolver::new(&mut store);
        resolver.add_student("A".into(), "B".into(), 1).unwrap();

        assert_eq!(
            resolver.delete_course(1).unwrap_err(),
            ValidationError::CourseInUse(1)
        );

        resolver.delete_student(1).unwrap();
        let course = resolver.delete_course(1).unwrap();
        assert_eq!(course.name, "Math");
        assert!(store.courses().is_empty());
    }

    #[test]
    fn test_delete_missing_entities() {
        let mut store = one_course();
        let mut resolver = MutationResolver::new(&mut store);

        assert_eq!(
            resolver.delete_student(3).unwrap_err(),
            ValidationError::StudentNotFound(3)
        );
        assert_eq!(
            resolver.delete_course(3).unwrap_err(),
            ValidationError::CourseNotFound(3)
        );
        assert_eq!(
            resolver.delete_grade(3).unwrap_err(),
            ValidationError::GradeNotFound(3)
        );
    }

    #[test]
    fn test_delete_grade_returns_removed() {
        let mut store = one_course();
        let mut resolver = MutationResolver::new(&mut store);
        resolver.add_student("A".into(), "B".into(), 1).unwrap();
        let created = resolver.add_grade(1, 1, 95).unwrap();

        let removed = resolver.delete_grade(created.id).unwrap();
        assert_eq!(removed, created);
        assert!(store.grades().is_empty());
    }

    #[test]
    fn test_add_course_when_ids_exhausted() {
        let mut store = DatasetStore::new(Dataset {
            students: vec![],
            courses: vec![Course {
                id: i32::MAX,
                name: "Last".into(),
                description: "".into(),
            }],
            grades: vec![],
        });

        let err = MutationResolver::new(&mut store)
            .add_course("Next".into(), "".into())
            .unwrap_err();
        assert_eq!(err, ValidationError::IdsExhausted("courses"));
        assert_eq!(err.code(), "IDS_EXHAUSTED");
        assert_eq!(store.courses().len(), 1);
    }

    #[test]
    fn test_add_student_when_ids_exhausted() {
        let mut store = one_course();
        store.students_mut().append(Student {
            id: i32::MAX,
            name: "A".into(),
            last_name: "B".into(),
            course_id: 1,
        });

        let err = MutationResolver::new(&mut store)
            .add_student("C".into(), "D".into(), 1)
            .unwrap_err();
        assert_eq!(err, ValidationError::IdsExhausted("students"));
        assert_eq!(store.students().len(), 1);
    }
}
