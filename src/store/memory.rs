//! In-memory record store
//!
//! Keeps collections in insertion order. Used by the test suite and by
//! `hrms serve --memory` for running without a database.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::Document;

use super::errors::{StoreError, StoreResult};
use super::RecordStore;

/// Record store held entirely in process memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    /// Collection name -> documents
    collections: RwLock<HashMap<String, Vec<Document>>>,

    /// When set, every operation fails with a backend error
    unavailable: AtomicBool,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate a database outage (or recover from one)
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of documents currently held in `collection`
    pub fn len(&self, collection: &str) -> usize {
        self.read()
            .map(|collections| collections.get(collection).map_or(0, Vec::len))
            .unwrap_or(0)
    }

    /// Whether `collection` holds no documents
    pub fn is_empty(&self, collection: &str) -> bool {
        self.len(collection) == 0
    }

    fn check_available(&self) -> StoreResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::backend("server selection timeout: store unavailable"));
        }
        Ok(())
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, HashMap<String, Vec<Document>>>> {
        self.check_available()?;
        self.collections
            .read()
            .map_err(|_| StoreError::backend("memory store lock poisoned"))
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, HashMap<String, Vec<Document>>>> {
        self.check_available()?;
        self.collections
            .write()
            .map_err(|_| StoreError::backend("memory store lock poisoned"))
    }
}

fn has_id(document: &Document, id: &ObjectId) -> bool {
    document.get_object_id("_id").map_or(false, |doc_id| doc_id == *id)
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn list_all(&self, collection: &str) -> StoreResult<Vec<Document>> {
        let collections = self.read()?;
        Ok(collections.get(collection).cloned().unwrap_or_default())
    }

    async fn insert_one(&self, collection: &str, mut document: Document) -> StoreResult<ObjectId> {
        let mut collections = self.write()?;
        let documents = collections.entry(collection.to_string()).or_default();

        let id = match document.get_object_id("_id") {
            Ok(id) => id,
            Err(_) => {
                let id = ObjectId::new();
                document.insert("_id", id);
                id
            }
        };

        if documents.iter().any(|doc| has_id(doc, &id)) {
            return Err(StoreError::backend(format!(
                "E11000 duplicate key error collection: {} dup key: {{ _id: {} }}",
                collection, id
            )));
        }

        documents.push(document);
        Ok(id)
    }

    async fn find_by_id(&self, collection: &str, id: &ObjectId) -> StoreResult<Document> {
        let collections = self.read()?;
        collections
            .get(collection)
            .and_then(|documents| documents.iter().find(|doc| has_id(doc, id)))
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn update_fields_by_id(
        &self,
        collection: &str,
        id: &ObjectId,
        fields: Document,
    ) -> StoreResult<()> {
        let mut collections = self.write()?;
        let document = collections
            .get_mut(collection)
            .and_then(|documents| documents.iter_mut().find(|doc| has_id(doc, id)))
            .ok_or(StoreError::NotFound)?;

        for (key, value) in fields {
            if key == "_id" {
                continue;
            }
            document.insert(key, value);
        }
        Ok(())
    }

    async fn delete_by_id(&self, collection: &str, id: &ObjectId) -> StoreResult<u64> {
        let mut collections = self.write()?;
        let Some(documents) = collections.get_mut(collection) else {
            return Ok(0);
        };

        let before = documents.len();
        documents.retain(|doc| !has_id(doc, id));
        Ok((before - documents.len()) as u64)
    }
}
