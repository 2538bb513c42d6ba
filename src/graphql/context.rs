//! Shared state handed to every resolver

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::dataset::DatasetStore;
use crate::observability::MetricsRegistry;

/// GraphQL context data
///
/// The whole store sits behind one lock. Query fields take the read side;
/// each mutation holds the write side for its full check-then-write
/// sequence, so concurrent requests cannot interleave a validation with
/// another request's write.
#[derive(Clone)]
pub struct GraphQLContext {
    store: Arc<RwLock<DatasetStore>>,
    metrics: Arc<MetricsRegistry>,
}

impl GraphQLContext {
    pub fn new(store: DatasetStore, metrics: Arc<MetricsRegistry>) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            metrics,
        }
    }

    /// Shared access for queries and derived fields
    pub fn read(&self) -> RwLockReadGuard<'_, DatasetStore> {
        // Store writes are single calls; a panicking holder cannot leave it half-updated.
        self.store.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Exclusive access for one mutation
    pub fn write(&self) -> RwLockWriteGuard<'_, DatasetStore> {
        self.store.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn metrics(&self) -> &MetricsRegistry {
        &self.metrics
    }
}
