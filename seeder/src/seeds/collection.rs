use crate::seed::{SeedError, Seeder};
use db::MetricStore;
use db::models::collection::TimeSeriesCollection;
use log::info;
use std::pin::Pin;

pub struct CollectionSeeder {
    collection: TimeSeriesCollection,
}

impl CollectionSeeder {
    pub fn new(name: &str) -> Self {
        Self {
            collection: TimeSeriesCollection::metrics(name),
        }
    }
}

impl Seeder for CollectionSeeder {
    fn seed<'a>(
        &'a self,
        store: &'a dyn MetricStore,
    ) -> Pin<Box<dyn Future<Output = Result<(), SeedError>> + Send + 'a>> {
        Box::pin(async move {
            store.create_time_series_collection(&self.collection).await?;
            info!(
                "Created time-series collection {} (timeField={}, granularity={}, expireAfterSeconds={})",
                self.collection.name,
                self.collection.time_field,
                self.collection.granularity.as_str(),
                self.collection.expire_after_seconds
            );
            Ok(())
        })
    }
}
