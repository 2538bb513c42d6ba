//! Query and mutation resolvers
//!
//! Resolvers operate on a borrowed [`DatasetStore`](crate::dataset::DatasetStore).
//! Locking is the caller's concern: a query needs a shared borrow, a
//! mutation an exclusive one for its whole check-then-write sequence.

mod mutation;
mod query;

pub use mutation::MutationResolver;
pub use query::QueryResolver;
