//! Read-only lookups over the dataset store
//!
//! Query operations never fail: an unknown id yields `None`.

use crate::dataset::{Course, DatasetStore, Grade, Student};

/// Query resolver borrowing the store for the duration of one request
pub struct QueryResolver<'a> {
    store: &'a DatasetStore,
}

impl<'a> QueryResolver<'a> {
    pub fn new(store: &'a DatasetStore) -> Self {
        Self { store }
    }

    pub fn list_students(&self) -> &'a [Student] {
        self.store.students().list_all()
    }

    pub fn list_courses(&self) -> &'a [Course] {
        self.store.courses().list_all()
    }

    pub fn list_grades(&self) -> &'a [Grade] {
        self.store.grades().list_all()
    }

    pub fn get_student(&self, id: i32) -> Option<&'a Student> {
        self.store.students().find_by_id(id)
    }

    pub fn get_course(&self, id: i32) -> Option<&'a Course> {
        self.store.courses().find_by_id(id)
    }

    pub fn get_grade(&self, id: i32) -> Option<&'a Grade> {
        self.store.grades().find_by_id(id)
    }

    /// Course the student is enrolled in, if it still exists
    pub fn student_course(&self, student: &Student) -> Option<&'a Course> {
        self.get_course(student.course_id)
    }

    /// Course the grade was given in, if it still exists
    pub fn grade_course(&self, grade: &Grade) -> Option<&'a Course> {
        self.get_course(grade.course_id)
    }

    /// Student the grade belongs to, if it still exists
    pub fn grade_student(&self, grade: &Grade) -> Option<&'a Student> {
        self.get_student(grade.student_id)
    }
}
