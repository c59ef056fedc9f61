pub mod error;
pub mod models;
pub mod mongo;
pub mod store;
pub mod test_utils;

#[cfg(test)]
mod tests;

pub use error::{DbError, DbResult};
pub use mongo::MongoStore;
pub use store::MetricStore;

use common::config::Config;

/// Opens a store on the configured database, identifying the client by the
/// configured project name.
pub async fn connect(config: &Config) -> DbResult<MongoStore> {
    MongoStore::connect(
        &config.database_url,
        &config.project_name,
        &config.database_name,
    )
    .await
}
