use crate::error::DbError;
use crate::models::collection::TimeSeriesCollection;
use crate::models::metric::Metric;
use crate::models::user::{DatabaseUser, RoleGrant};
use crate::store::MetricStore;
use crate::test_utils::InMemoryStore;

fn sample_user() -> DatabaseUser {
    DatabaseUser::new("user", "password", vec![RoleGrant::db_owner("sky")])
}

#[tokio::test]
async fn rejects_duplicate_user() {
    let store = InMemoryStore::new();
    store.create_user(&sample_user()).await.unwrap();

    let err = store.create_user(&sample_user()).await.unwrap_err();
    assert!(matches!(err, DbError::DuplicateCredential(name) if name == "user"));
    assert_eq!(store.users().len(), 1);
}

#[tokio::test]
async fn rejects_existing_collection() {
    let store = InMemoryStore::new();
    let metrics = TimeSeriesCollection::metrics("metrics");
    store.create_time_series_collection(&metrics).await.unwrap();

    let err = store
        .create_time_series_collection(&metrics)
        .await
        .unwrap_err();
    assert!(matches!(err, DbError::CollectionAlreadyExists(name) if name == "metrics"));
    assert_eq!(store.collections(), vec![metrics]);
}

#[tokio::test]
async fn implicitly_created_collection_counts_as_existing() {
    let store = InMemoryStore::new();
    store
        .insert_many("metrics", &[Metric::at_millis(0, 1.0, 1)])
        .await
        .unwrap();

    let err = store
        .create_time_series_collection(&TimeSeriesCollection::metrics("metrics"))
        .await
        .unwrap_err();
    assert!(matches!(err, DbError::CollectionAlreadyExists(_)));
}

#[tokio::test]
async fn inserts_append_in_order() {
    let store = InMemoryStore::new();
    let first = vec![Metric::at_millis(1_000, 1.0, 1), Metric::at_millis(2_000, 2.0, 2)];
    let second = vec![Metric::at_millis(3_000, 3.0, 3)];

    assert_eq!(store.insert_many("metrics", &first).await.unwrap(), 2);
    assert_eq!(store.insert_many("metrics", &second).await.unwrap(), 1);

    let stored = store.documents("metrics");
    assert_eq!(stored.len(), 3);
    assert_eq!(&stored[..2], &first[..]);
    assert_eq!(stored[2], second[0]);
    assert_eq!(store.insert_calls(), 2);
}

#[tokio::test]
async fn rejected_writes_leave_documents_untouched() {
    let store = InMemoryStore::new();
    store
        .insert_many("metrics", &[Metric::at_millis(0, 1.0, 1)])
        .await
        .unwrap();
    store.reject_writes("disk full");

    let err = store
        .insert_many("metrics", &[Metric::at_millis(60_000, 2.0, 2)])
        .await
        .unwrap_err();
    assert!(matches!(err, DbError::WriteRejected { reason, .. } if reason == "disk full"));
    assert_eq!(store.documents("metrics").len(), 1);
}

#[tokio::test]
async fn empty_batch_is_rejected() {
    let store = InMemoryStore::new();
    let err = store.insert_many("metrics", &[]).await.unwrap_err();
    assert!(matches!(err, DbError::WriteRejected { .. }));
    assert!(store.documents("metrics").is_empty());
}
