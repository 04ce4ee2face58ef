//! Repository Layer - Core Traits
//!
//! Defines the abstract interface for data access.
//! Handlers depend on this trait, not on SQLite.

use async_trait::async_trait;
use crate::domain::{Entity, DomainResult};

/// Core repository trait for CRUD operations
///
/// Generic over any Entity type.
/// All operations are async to support various backends.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Create a new entity; the returned value carries the assigned ID
    async fn create(&self, entity: &T) -> DomainResult<T>;

    /// Find entity by ID
    async fn find_by_id(&self, id: T::Id) -> DomainResult<Option<T>>;

    /// List all entities, in no particular order
    async fn list(&self) -> DomainResult<Vec<T>>;

    /// Overwrite an existing entity. Unknown IDs are a silent no-op.
    async fn update(&self, entity: &T) -> DomainResult<T>;

    /// Delete entity by ID. Unknown IDs are a silent no-op.
    async fn delete(&self, id: T::Id) -> DomainResult<()>;
}
