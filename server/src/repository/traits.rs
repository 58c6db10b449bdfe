//! Repository Layer
//!
//! Storage-agnostic CRUD over domain entities.

use async_trait::async_trait;
use crate::domain::{Entity, DomainResult};

/// CRUD over one entity type
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Create a new entity, returning it with its assigned ID
    async fn create(&self, entity: &T) -> DomainResult<T>;

    /// Find entity by ID
    async fn find_by_id(&self, id: T::Id) -> DomainResult<Option<T>>;

    /// List all entities
    async fn list(&self) -> DomainResult<Vec<T>>;

    /// Update an existing entity; `NotFound` if it does not exist
    async fn update(&self, entity: &T) -> DomainResult<T>;

    /// Delete entity by ID; `NotFound` if it does not exist
    async fn delete(&self, id: T::Id) -> DomainResult<()>;
}
