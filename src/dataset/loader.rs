//! Dataset loader for reading the seed files at startup
//!
//! Expects three files in the data directory:
//! - `students.json`
//! - `courses.json`
//! - `grades.json`
//!
//! Each file holds a JSON array. The loader checks ids only; references
//! between collections are left to the integrity audit.

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use serde::de::DeserializeOwned;

use super::errors::{LoadError, LoadResult};
use super::store::Dataset;
use super::types::{Course, Entity, Grade, Student};

pub const STUDENTS_FILE: &str = "students.json";
pub const COURSES_FILE: &str = "courses.json";
pub const GRADES_FILE: &str = "grades.json";

/// Reads the three seed collections from a data directory.
pub struct DatasetLoader {
    data_dir: PathBuf,
}

impl DatasetLoader {
    /// Creates a loader for the given data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Loads all three collections.
    pub fn load(&self) -> LoadResult<Dataset> {
        Ok(Dataset {
            students: self.load_collection::<Student>(STUDENTS_FILE)?,
            courses: self.load_collection::<Course>(COURSES_FILE)?,
            grades: self.load_collection::<Grade>(GRADES_FILE)?,
        })
    }

    fn load_collection<T>(&self, file_name: &str) -> LoadResult<Vec<T>>
    where
        T: Entity + DeserializeOwned,
    {
        let path = self.data_dir.join(file_name);

        let content = fs::read_to_string(&path).map_err(|source| LoadError::Io {
            path: path.clone(),
            source,
        })?;

        let rows: Vec<T> = serde_json::from_str(&content)
            .map_err(|source| LoadError::Parse { path, source })?;

        check_ids(&rows)?;
        Ok(rows)
    }
}

fn check_ids<T: Entity>(rows: &[T]) -> LoadResult<()> {
    let mut seen = HashSet::with_capacity(rows.len());

    for row in rows {
        let id = row.id();
        if id <= 0 {
            return Err(LoadError::InvalidId {
                collection: T::COLLECTION,
                id,
            });
        }
        if !seen.insert(id) {
            return Err(LoadError::DuplicateId {
                collection: T::COLLECTION,
                id,
            });
        }
    }

    Ok(())
}
