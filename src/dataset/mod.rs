//! Dataset subsystem
//!
//! Holds the students, courses and grades collections in memory. They are
//! seeded once from JSON files and never written back.

mod errors;
mod loader;
mod store;
mod types;

pub use errors::{LoadError, LoadResult};
pub use loader::{DatasetLoader, COURSES_FILE, GRADES_FILE, STUDENTS_FILE};
pub use store::{Collection, Dataset, DatasetStore};
pub use types::{Course, Entity, Grade, Student};
