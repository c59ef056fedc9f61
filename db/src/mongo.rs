use async_trait::async_trait;
use bson::doc;
use log::{debug, info};
use mongodb::options::{Acknowledgment, ClientOptions, WriteConcern};
use mongodb::{Client, Database};

use crate::error::{Conflict, DbError, DbResult};
use crate::models::{collection::TimeSeriesCollection, metric::Metric, user::DatabaseUser};
use crate::store::MetricStore;

/// [`MetricStore`] backed by a MongoDB database.
pub struct MongoStore {
    client: Client,
    database: Database,
}

impl MongoStore {
    /// Connects to `uri` and selects `database_name`.
    ///
    /// The driver connects lazily, so a `ping` is issued here to surface an
    /// unreachable server as a [`DbError::Connection`] before any seeding.
    pub async fn connect(uri: &str, app_name: &str, database_name: &str) -> DbResult<Self> {
        let mut options = ClientOptions::parse(uri)
            .await
            .map_err(DbError::Connection)?;
        options.app_name = Some(app_name.to_string());
        options.write_concern = Some(WriteConcern::builder().w(Acknowledgment::Majority).build());

        let client = Client::with_options(options).map_err(DbError::Connection)?;
        client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(DbError::Connection)?;

        info!("Connected to MongoDB, using database {}", database_name);
        let database = client.database(database_name);
        Ok(Self { client, database })
    }

    pub fn database_name(&self) -> &str {
        self.database.name()
    }

    /// Closes the client's connection pools.
    pub async fn close(self) {
        self.client.shutdown().await;
    }
}

#[async_trait]
impl MetricStore for MongoStore {
    async fn create_user(&self, user: &DatabaseUser) -> DbResult<()> {
        debug!("createUser {} on {}", user.name, self.database_name());
        match self.database.run_command(user.create_command()).await {
            Ok(_) => Ok(()),
            Err(err) if Conflict::from_error(&err) == Some(Conflict::User) => {
                Err(DbError::DuplicateCredential(user.name.clone()))
            }
            Err(err) => Err(DbError::Command(err)),
        }
    }

    async fn create_time_series_collection(
        &self,
        collection: &TimeSeriesCollection,
    ) -> DbResult<()> {
        debug!(
            "create {} (timeField={}, granularity={}, expireAfterSeconds={})",
            collection.name,
            collection.time_field,
            collection.granularity.as_str(),
            collection.expire_after_seconds
        );
        match self.database.run_command(collection.create_command()).await {
            Ok(_) => Ok(()),
            Err(err) if Conflict::from_error(&err) == Some(Conflict::Namespace) => {
                Err(DbError::CollectionAlreadyExists(collection.name.clone()))
            }
            Err(err) => Err(DbError::Command(err)),
        }
    }

    async fn insert_many(&self, collection: &str, metrics: &[Metric]) -> DbResult<usize> {
        if metrics.is_empty() {
            return Err(DbError::WriteRejected {
                collection: collection.to_string(),
                reason: "empty batch".into(),
            });
        }

        let result = self
            .database
            .collection::<Metric>(collection)
            .insert_many(metrics)
            .await
            .map_err(|source| DbError::Write {
                collection: collection.to_string(),
                source,
            })?;

        Ok(result.inserted_ids.len())
    }
}
