//! In-memory dataset store
//!
//! Three insertion-ordered collections with linear-scan lookups. The store
//! does not enforce uniqueness or references; the validator is consulted
//! before every write.

use super::types::{Course, Entity, Grade, Student};

/// Initial contents of the three collections, as supplied by the loader
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    pub students: Vec<Student>,
    pub courses: Vec<Course>,
    pub grades: Vec<Grade>,
}

/// An insertion-ordered collection with its own id counter
///
/// Ids handed out by [`Collection::allocate_id`] are strictly increasing and
/// never derived from the current length, so an id freed by a delete is
/// not given out again. Once `i32::MAX` has been used the counter is
/// exhausted and no further ids are allocated.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    rows: Vec<T>,
    /// `None` once the id space is used up
    next_id: Option<i32>,
}

impl<T: Entity> Collection<T> {
    /// Create an empty collection whose first allocated id is 1
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            next_id: Some(1),
        }
    }

    /// Create a collection from seed rows, continuing ids after the largest one
    pub fn seeded(rows: Vec<T>) -> Self {
        let next_id = match rows.iter().map(Entity::id).max() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        };
        Self { rows, next_id }
    }

    /// All entities in insertion order
    pub fn list_all(&self) -> &[T] {
        &self.rows
    }

    /// First entity with the given id
    pub fn find_by_id(&self, id: i32) -> Option<&T> {
        self.rows.iter().find(|row| row.id() == id)
    }

    /// Whether any entity matches the predicate
    pub fn any<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.rows.iter().any(predicate)
    }

    /// Reserve the next id for this collection, or `None` when exhausted
    pub fn allocate_id(&mut self) -> Option<i32> {
        let id = self.next_id?;
        self.next_id = id.checked_add(1);
        Some(id)
    }

    /// Append an entity at the end of the collection
    pub fn append(&mut self, entity: T) {
        // Keep the counter ahead of ids that did not come from allocate_id.
        if let Some(next_id) = self.next_id {
            if entity.id() >= next_id {
                self.next_id = entity.id().checked_add(1);
            }
        }
        self.rows.push(entity);
    }

    /// Remove every entity matching the predicate, returning how many were removed
    pub fn remove_where<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let before = self.rows.len();
        self.rows.retain(|row| !predicate(row));
        before - self.rows.len()
    }

    /// Number of entities
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the collection is empty
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<T: Entity> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Owner of the students, courses and grades collections
#[derive(Debug, Clone, Default)]
pub struct DatasetStore {
    students: Collection<Student>,
    courses: Collection<Course>,
    grades: Collection<Grade>,
}

impl DatasetStore {
    /// Seed a store from loaded data
    pub fn new(dataset: Dataset) -> Self {
        Self {
            students: Collection::seeded(dataset.students),
            courses: Collection::seeded(dataset.courses),
            grades: Collection::seeded(dataset.grades),
        }
    }

    pub fn students(&self) -> &Collection<Student> {
        &self.students
    }

    pub fn courses(&self) -> &Collection<Course> {
        &self.courses
    }

    pub fn grades(&self) -> &Collection<Grade> {
        &self.grades
    }

    pub fn students_mut(&mut self) -> &mut Collection<Student> {
        &mut self.students
    }

    pub fn courses_mut(&mut self) -> &mut Collection<Course> {
        &mut self.courses
    }

    pub fn grades_mut(&mut self) -> &mut Collection<Grade> {
        &mut self.grades
    }
}
