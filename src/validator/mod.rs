//! Entity relationship validator
//!
//! Pure predicates consulted before every mutation, the error type the
//! mutation resolver returns when one of them fails, and a whole-store
//! integrity audit.
//!
//! # Rules
//!
//! - A student can only be created for an existing course
//! - A grade can only be created for an actual enrollment
//! - A course cannot be deleted while students reference it

mod audit;
mod errors;
mod relationships;

pub use audit::{audit, IntegrityViolation};
pub use errors::{ValidationError, ValidationResult};
pub use relationships::RelationshipValidator;
