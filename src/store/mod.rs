//! # Record Store Adapter
//!
//! Collection-scoped document operations behind the [`RecordStore`] trait.
//!
//! Two adapters are provided:
//! - [`MongoStore`]: the MongoDB driver, connected once at boot
//! - [`MemoryStore`]: an in-process substitute used by tests and `--memory` runs
//!
//! Handlers hold the store through an `Arc` and never lock around it; both
//! adapters are safe for concurrent use.

pub mod config;
pub mod errors;
pub mod memory;
pub mod mongo;

pub use config::StoreConfig;
pub use errors::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use mongo::MongoStore;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::Document;

/// Document operations scoped to a named collection
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Every document in the collection, in store order
    async fn list_all(&self, collection: &str) -> StoreResult<Vec<Document>>;

    /// Persist a new document and return the identifier the store assigned
    async fn insert_one(&self, collection: &str, document: Document) -> StoreResult<ObjectId>;

    /// Fetch a single document, or [`StoreError::NotFound`]
    async fn find_by_id(&self, collection: &str, id: &ObjectId) -> StoreResult<Document>;

    /// Set the given fields on the matching document, leaving `_id` untouched
    ///
    /// Fails with [`StoreError::NotFound`] when no document matches.
    async fn update_fields_by_id(
        &self,
        collection: &str,
        id: &ObjectId,
        fields: Document,
    ) -> StoreResult<()>;

    /// Remove the matching document and return how many were removed (0 or 1)
    async fn delete_by_id(&self, collection: &str, id: &ObjectId) -> StoreResult<u64>;
}
