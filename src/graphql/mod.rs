//! GraphQL API
//!
//! Maps the query and mutation resolvers onto a GraphQL schema.
//!
//! # Query
//!
//! - `students`, `courses`, `grades`
//! - `student(id)`, `course(id)`, `grade(id)`
//!
//! # Mutation
//!
//! - `addCourse`, `addStudent`, `addGrade`
//! - `deleteStudent`, `deleteCourse`, `deleteGrade`

mod context;
mod mutation;
mod query;
mod types;

pub use context::GraphQLContext;
pub use mutation::{to_graphql_error, MutationRoot};
pub use query::QueryRoot;
pub use types::{CourseObject, GradeObject, StudentObject};

use async_graphql::{EmptySubscription, Schema};

/// GraphQL schema type
pub type GradebookSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Create the schema with the given context as shared data
pub fn build_schema(context: GraphQLContext) -> GradebookSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(context)
        .finish()
}

/// Schema in SDL form
pub fn export_sdl() -> String {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .finish()
        .sdl()
}
