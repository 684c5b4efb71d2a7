//! MongoDB-backed record store

use std::time::Duration;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{doc, Document};
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};

use super::errors::{StoreError, StoreResult};
use super::RecordStore;

/// Record store over a single MongoDB database
///
/// The client pools connections internally, so one instance is shared by
/// every request.
#[derive(Clone, Debug)]
pub struct MongoStore {
    db: Database,
}

impl MongoStore {
    /// Connect and verify the deployment is reachable within `timeout`
    ///
    /// The database handle is only returned once the ping has succeeded.
    pub async fn connect(uri: &str, database: &str, timeout: Duration) -> StoreResult<Self> {
        match tokio::time::timeout(timeout, Self::establish(uri, database, timeout)).await {
            Ok(result) => result,
            Err(_) => Err(StoreError::connection(format!(
                "no response from {} within {}s",
                uri,
                timeout.as_secs()
            ))),
        }
    }

    async fn establish(uri: &str, database: &str, timeout: Duration) -> StoreResult<Self> {
        let mut options = ClientOptions::parse(uri)
            .await
            .map_err(|e| StoreError::connection(e.to_string()))?;
        options.connect_timeout = Some(timeout);
        options.server_selection_timeout = Some(timeout);

        let client =
            Client::with_options(options).map_err(|e| StoreError::connection(e.to_string()))?;

        let db = client.database(database);
        db.run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| StoreError::connection(e.to_string()))?;

        Ok(Self { db })
    }

    /// Name of the connected database
    pub fn database_name(&self) -> &str {
        self.db.name()
    }

    fn collection(&self, name: &str) -> Collection<Document> {
        self.db.collection::<Document>(name)
    }
}

#[async_trait]
impl RecordStore for MongoStore {
    async fn list_all(&self, collection: &str) -> StoreResult<Vec<Document>> {
        let cursor = self.collection(collection).find(doc! {}, None).await?;
        let documents: Vec<Document> = cursor.try_collect().await?;
        Ok(documents)
    }

    async fn insert_one(&self, collection: &str, document: Document) -> StoreResult<ObjectId> {
        let result = self.collection(collection).insert_one(document, None).await?;

        result.inserted_id.as_object_id().ok_or_else(|| {
            StoreError::backend(format!(
                "store assigned a non-ObjectId identifier: {}",
                result.inserted_id
            ))
        })
    }

    async fn find_by_id(&self, collection: &str, id: &ObjectId) -> StoreResult<Document> {
        self.collection(collection)
            .find_one(doc! { "_id": *id }, None)
            .await?
            .ok_or(StoreError::NotFound)
    }

    async fn update_fields_by_id(
        &self,
        collection: &str,
        id: &ObjectId,
        fields: Document,
    ) -> StoreResult<()> {
        let result = self
            .collection(collection)
            .update_one(doc! { "_id": *id }, doc! { "$set": fields }, None)
            .await?;

        if result.matched_count == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn delete_by_id(&self, collection: &str, id: &ObjectId) -> StoreResult<u64> {
        let result = self
            .collection(collection)
            .delete_one(doc! { "_id": *id }, None)
            .await?;
        Ok(result.deleted_count)
    }
}
