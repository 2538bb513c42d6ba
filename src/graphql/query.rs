//! Root query fields

use async_graphql::{Context, Object, Result};

use crate::resolver::QueryResolver;

use super::context::GraphQLContext;
use super::types::{CourseObject, GradeObject, StudentObject};

/// Root Query
#[derive(Default)]
pub struct QueryRoot;

fn context<'a>(ctx: &Context<'a>) -> Result<&'a GraphQLContext> {
    let context = ctx.data::<GraphQLContext>()?;
    context.metrics().increment_queries_executed();
    Ok(context)
}

#[Object]
impl QueryRoot {
    /// List of all students
    async fn students(&self, ctx: &Context<'_>) -> Result<Vec<StudentObject>> {
        let store = context(ctx)?.read();
        let students = QueryResolver::new(&store)
            .list_students()
            .iter()
            .cloned()
            .map(StudentObject)
            .collect();
        Ok(students)
    }

    /// List of all courses
    async fn courses(&self, ctx: &Context<'_>) -> Result<Vec<CourseObject>> {
        let store = context(ctx)?.read();
        let courses = QueryResolver::new(&store)
            .list_courses()
            .iter()
            .cloned()
            .map(CourseObject)
            .collect();
        Ok(courses)
    }

    /// List of all grades
    async fn grades(&self, ctx: &Context<'_>) -> Result<Vec<GradeObject>> {
        let store = context(ctx)?.read();
        let grades = QueryResolver::new(&store)
            .list_grades()
            .iter()
            .cloned()
            .map(GradeObject)
            .collect();
        Ok(grades)
    }

    /// Particular student
    async fn student(&self, ctx: &Context<'_>, id: i32) -> Result<Option<StudentObject>> {
        let store = context(ctx)?.read();
        let student = QueryResolver::new(&store)
            .get_student(id)
            .cloned()
            .map(StudentObject);
        Ok(student)
    }

    /// Particular course
    async fn course(&self, ctx: &Context<'_>, id: i32) -> Result<Option<CourseObject>> {
        let store = context(ctx)?.read();
        let course = QueryResolver::new(&store)
            .get_course(id)
            .cloned()
            .map(CourseObject);
        Ok(course)
    }

    /// Particular grade
    async fn grade(&self, ctx: &Context<'_>, id: i32) -> Result<Option<GradeObject>> {
        let store = context(ctx)?.read();
        let grade = QueryResolver::new(&store)
            .get_grade(id)
            .cloned()
            .map(GradeObject);
        Ok(grade)
    }
}
