pub mod seed;
pub mod seeds;

use chrono::{DateTime, Utc};
use common::config::Config;
use db::MetricStore;
use log::info;
use rand::rngs::{OsRng, StdRng};
use rand::{Rng, SeedableRng};

use crate::seed::{SeedError, Seeder, run_seeder};
use crate::seeds::{
    collection::CollectionSeeder,
    metric_window::{MetricWindowSeeder, generate_window, start_message},
    sample_metrics::SampleMetricSeeder,
    user::UserSeeder,
};

/// One-time setup: account, time-series collection, fixed sample batch.
///
/// Steps run in order and the first failure stops the run, so a second
/// bootstrap against the same database never reaches the sample insert.
pub async fn bootstrap(store: &dyn MetricStore, config: &Config) -> Result<(), SeedError> {
    for (seeder, name) in [
        (
            Box::new(UserSeeder::new(&config.database_name)) as Box<dyn Seeder + Send + Sync>,
            "User",
        ),
        (
            Box::new(CollectionSeeder::new(&config.collection_name)),
            "Collection",
        ),
        (
            Box::new(SampleMetricSeeder::new(&config.collection_name)),
            "SampleMetrics",
        ),
    ] {
        run_seeder(&*seeder, name, store).await?;
    }
    Ok(())
}

/// Appends a window of six random samples ending at `reference`.
pub async fn ingest<R: Rng>(
    store: &dyn MetricStore,
    config: &Config,
    reference: DateTime<Utc>,
    rng: &mut R,
) -> Result<(), SeedError> {
    info!("{}", start_message(reference));

    let window = generate_window(reference, rng);
    let seeder = MetricWindowSeeder::new(&config.collection_name, window);

    info!("Inserting documents to MongoDB");
    run_seeder(&seeder, "Metrics", store).await?;
    info!("Done");
    Ok(())
}

/// RNG for ingestion: fixed when `INGEST_SEED` is set, otherwise from the OS.
pub fn ingest_rng(config: &Config) -> Result<StdRng, SeedError> {
    match config.ingest_seed {
        Some(seed) => Ok(StdRng::seed_from_u64(seed)),
        None => Ok(StdRng::from_rng(OsRng)?),
    }
}
