//! GraphQL object types
//!
//! Relationship fields (`Student.course`, `Grade.course`, `Grade.student`)
//! are looked up in the live store each time they are requested.

use async_graphql::{Context, Object, Result};

use crate::dataset::{Course, Grade, Student};
use crate::resolver::QueryResolver;

use super::context::GraphQLContext;

pub struct StudentObject(pub Student);

pub struct CourseObject(pub Course);

pub struct GradeObject(pub Grade);

/// Represent a student
#[Object(name = "Student")]
impl StudentObject {
    async fn id(&self) -> i32 {
        self.0.id
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn last_name(&self) -> &str {
        &self.0.last_name
    }

    async fn course_id(&self) -> i32 {
        self.0.course_id
    }

    /// Course the student is enrolled in
    async fn course(&self, ctx: &Context<'_>) -> Result<Option<CourseObject>> {
        let store = ctx.data::<GraphQLContext>()?.read();
        let course = QueryResolver::new(&store)
            .student_course(&self.0)
            .cloned()
            .map(CourseObject);
        Ok(course)
    }
}

/// Represent a course
#[Object(name = "Course")]
impl CourseObject {
    async fn id(&self) -> i32 {
        self.0.id
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn description(&self) -> &str {
        &self.0.description
    }
}

/// Represent a grade of a student
#[Object(name = "Grade")]
impl GradeObject {
    async fn id(&self) -> i32 {
        self.0.id
    }

    async fn course_id(&self) -> i32 {
        self.0.course_id
    }

    async fn student_id(&self) -> i32 {
        self.0.student_id
    }

    async fn grade(&self) -> i32 {
        self.0.grade
    }

    /// Course the grade was given in
    async fn course(&self, ctx: &Context<'_>) -> Result<Option<CourseObject>> {
        let store = ctx.data::<GraphQLContext>()?.read();
        let course = QueryResolver::new(&store)
            .grade_course(&self.0)
            .cloned()
            .map(CourseObject);
        Ok(course)
    }

    /// Student the grade belongs to
    async fn student(&self, ctx: &Context<'_>) -> Result<Option<StudentObject>> {
        let store = ctx.data::<GraphQLContext>()?.read();
        let student = QueryResolver::new(&store)
            .grade_student(&self.0)
            .cloned()
            .map(StudentObject);
        Ok(student)
    }
}
