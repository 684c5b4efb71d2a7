//! MongoDB Store Tests
//!
//! These need a reachable MongoDB deployment and are ignored by default:
//!
//! ```text
//! HRMS_TEST_MONGO_URI=mongodb://localhost:27017 cargo test --test mongo_store -- --ignored
//! ```

use std::panic::AssertUnwindSafe;
use std::time::Duration;

use hrms::employee::{self, Employee};
use hrms::store::{MongoStore, RecordStore, StoreError};
use futures_util::FutureExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::Document;
use mongodb::Client;

fn test_uri() -> String {
    std::env::var("HRMS_TEST_MONGO_URI").unwrap_or_else(|_| "mongodb://localhost:27017".into())
}

const TEST_DATABASE: &str = "hrms_test";

fn test_collection() -> String {
    format!("employees_test_{}", ObjectId::new().to_hex())
}

/// Run `body` against a fresh collection, dropping it afterwards even if
/// `body` panics.
async fn with_collection<F, Fut>(body: F)
where
    F: FnOnce(MongoStore, String) -> Fut,
    Fut: std::future::Future<Output = ()>,
{
    let store = MongoStore::connect(&test_uri(), TEST_DATABASE, Duration::from_secs(5))
        .await
        .expect("failed to connect to MongoDB");
    let collection = test_collection();

    let outcome = AssertUnwindSafe(body(store, collection.clone()))
        .catch_unwind()
        .await;

    let client = Client::with_uri_str(test_uri())
        .await
        .expect("failed to connect to MongoDB for cleanup");
    client
        .database(TEST_DATABASE)
        .collection::<Document>(&collection)
        .drop(None)
        .await
        .expect("failed to drop test collection");

    if let Err(panic) = outcome {
        std::panic::resume_unwind(panic);
    }
}

#[tokio::test]
async fn connect_to_unreachable_host_fails_within_timeout() {
    let started = std::time::Instant::now();

    let result = MongoStore::connect(
        "mongodb://127.0.0.1:1/?connectTimeoutMS=200",
        TEST_DATABASE,
        Duration::from_millis(500),
    )
    .await;

    assert!(matches!(result, Err(StoreError::Connection(_))));
    assert!(started.elapsed() < Duration::from_secs(5));
}

#[tokio::test]
async fn connect_with_invalid_uri_fails() {
    let result = MongoStore::connect("not-a-uri", TEST_DATABASE, Duration::from_secs(1)).await;
    assert!(matches!(result, Err(StoreError::Connection(_))));
}

#[tokio::test]
#[ignore = "requires a running MongoDB"]
async fn crud_roundtrip_against_live_mongo() {
    with_collection(|store, collection| async move {
        let document = employee::to_document(&Employee::new("A", 100.0, 30.0)).unwrap();
        let id = store.insert_one(&collection, document).await.unwrap();

        let stored =
            employee::from_document(store.find_by_id(&collection, &id).await.unwrap()).unwrap();
        assert_eq!(stored, Employee::new("A", 100.0, 30.0).with_id(&id));

        store
            .update_fields_by_id(
                &collection,
                &id,
                employee::update_fields(&Employee::new("A", 200.0, 31.0)),
            )
            .await
            .unwrap();
        let listed = employee::from_documents(store.list_all(&collection).await.unwrap()).unwrap();
        assert_eq!(listed, vec![Employee::new("A", 200.0, 31.0).with_id(&id)]);

        let missing = store
            .update_fields_by_id(&collection, &ObjectId::new(), employee::update_fields(&listed[0]))
            .await;
        assert!(matches!(missing, Err(StoreError::NotFound)));

        assert_eq!(store.delete_by_id(&collection, &id).await.unwrap(), 1);
        assert_eq!(store.delete_by_id(&collection, &id).await.unwrap(), 0);
        assert!(store.list_all(&collection).await.unwrap().is_empty());
    })
    .await;
}

#[tokio::test]
#[ignore = "requires a running MongoDB"]
async fn test_collections_are_dropped_afterwards() {
    let mut used = String::new();
    with_collection(|store, collection| {
        used = collection.clone();
        async move {
            let document = employee::to_document(&Employee::new("B", 1.0, 2.0)).unwrap();
            store.insert_one(&collection, document).await.unwrap();
        }
    })
    .await;

    let client = Client::with_uri_str(test_uri()).await.unwrap();
    let names = client
        .database(TEST_DATABASE)
        .list_collection_names(None)
        .await
        .unwrap();
    assert!(!names.contains(&used));
}
