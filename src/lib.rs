//! gradebook - GraphQL over in-memory students, courses and grades
//!
//! Seed data is loaded once from JSON files. Mutations are validated
//! against the relationships between the three collections before they
//! touch the store.

pub mod cli;
pub mod dataset;
pub mod graphql;
pub mod http_server;
pub mod observability;
pub mod resolver;
pub mod validator;
