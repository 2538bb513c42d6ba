//! Root mutation fields
//!
//! Each field runs one `MutationResolver` operation under the store's write
//! lock. Validation failures become GraphQL errors carrying the error code
//! in `extensions.code`.

use async_graphql::{Context, Error, ErrorExtensions, Object, Result};

use crate::dataset::Entity;
use crate::observability::{log_event_with_fields, Event};
use crate::resolver::MutationResolver;
use crate::validator::{ValidationError, ValidationResult};

use super::context::GraphQLContext;
use super::types::{CourseObject, GradeObject, StudentObject};

/// Root Mutation
#[derive(Default)]
pub struct MutationRoot;

/// Convert a validation failure into a GraphQL error
pub fn to_graphql_error(err: &ValidationError) -> Error {
    let code = err.code().to_string();
    Error::new(err.to_string()).extend_with(|_, e| e.set("code", code))
}

/// Record the outcome of a mutation and shape it for the response
fn finish<T: Entity>(
    context: &GraphQLContext,
    operation: &str,
    result: ValidationResult<T>,
) -> Result<T> {
    match result {
        Ok(entity) => {
            context.metrics().increment_mutations_applied();
            log_event_with_fields(
                Event::MutationApplied,
                &[
                    ("operation", operation),
                    ("collection", T::COLLECTION),
                    ("id", entity.id().to_string().as_str()),
                ],
            );
            Ok(entity)
        }
        Err(err) => {
            context.metrics().increment_mutations_rejected();
            log_event_with_fields(
                Event::MutationRejected,
                &[
                    ("operation", operation),
                    ("code", err.code()),
                    ("message", err.to_string().as_str()),
                ],
            );
            Err(to_graphql_error(&err))
        }
    }
}

#[Object]
impl MutationRoot {
    /// Add a course
    async fn add_course(
        &self,
        ctx: &Context<'_>,
        name: String,
        description: String,
    ) -> Result<CourseObject> {
        let context = ctx.data::<GraphQLContext>()?;
        let result = MutationResolver::new(&mut context.write()).add_course(name, description);
        finish(context, "addCourse", result).map(CourseObject)
    }

    /// Add a student to an existing course
    async fn add_student(
        &self,
        ctx: &Context<'_>,
        name: String,
        last_name: String,
        course_id: i32,
    ) -> Result<StudentObject> {
        let context = ctx.data::<GraphQLContext>()?;
        let result =
            MutationResolver::new(&mut context.write()).add_student(name, last_name, course_id);
        finish(context, "addStudent", result).map(StudentObject)
    }

    /// Add a grade for a student in the course they are enrolled in
    async fn add_grade(
        &self,
        ctx: &Context<'_>,
        course_id: i32,
        student_id: i32,
        grade: i32,
    ) -> Result<GradeObject> {
        let context = ctx.data::<GraphQLContext>()?;
        let result =
            MutationResolver::new(&mut context.write()).add_grade(course_id, student_id, grade);
        finish(context, "addGrade", result).map(GradeObject)
    }

    /// Delete a student
    async fn delete_student(&self, ctx: &Context<'_>, id: i32) -> Result<StudentObject> {
        let context = ctx.data::<GraphQLContext>()?;
        let result = MutationResolver::new(&mut context.write()).delete_student(id);
        finish(context, "deleteStudent", result).map(StudentObject)
    }

    /// Delete a course no student is enrolled in
    async fn delete_course(&self, ctx: &Context<'_>, id: i32) -> Result<CourseObject> {
        let context = ctx.data::<GraphQLContext>()?;
        let result = MutationResolver::new(&mut context.write()).delete_course(id);
        finish(context, "deleteCourse", result).map(CourseObject)
    }

    /// Delete a grade
    async fn delete_grade(&self, ctx: &Context<'_>, id: i32) -> Result<GradeObject> {
        let context = ctx.data::<GraphQLContext>()?;
        let result = MutationResolver::new(&mut context.write()).delete_grade(id);
        finish(context, "deleteGrade", result).map(GradeObject)
    }
}
