use async_trait::async_trait;

use crate::error::DbResult;
use crate::models::{collection::TimeSeriesCollection, metric::Metric, user::DatabaseUser};

/// Storage operations the seeders need from a time-series database.
///
/// Implemented by [`crate::mongo::MongoStore`] for real runs and by
/// [`crate::test_utils::InMemoryStore`] for tests.
#[async_trait]
pub trait MetricStore: Send + Sync {
    /// Registers `user` on the store's database. Fails with
    /// `DuplicateCredential` if the name is taken.
    async fn create_user(&self, user: &DatabaseUser) -> DbResult<()>;

    /// Fails with `CollectionAlreadyExists` if the collection is present.
    async fn create_time_series_collection(&self, collection: &TimeSeriesCollection)
    -> DbResult<()>;

    /// Writes `metrics` in one bulk call and returns how many were inserted.
    async fn insert_many(&self, collection: &str, metrics: &[Metric]) -> DbResult<usize>;
}
