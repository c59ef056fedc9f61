use crate::seed::{SeedError, Seeder};
use db::MetricStore;
use db::models::metric::Metric;
use log::info;
use std::pin::Pin;

/// (timestamp ms, cpu_load, concurrency), one minute apart starting 2017-08-02 14:44:20 UTC.
const SAMPLES: [(i64, f64, i32); 6] = [
    (1501685060000, 48.0, 365984),
    (1501685120000, 66.0, 125847),
    (1501685180000, 55.0, 500000),
    (1501685240000, 100.0, 5),
    (1501685300000, 50.0, 12589),
    (1501685360000, 1.0, 10000),
];

pub fn sample_metrics() -> Vec<Metric> {
    SAMPLES
        .iter()
        .map(|&(millis, cpu_load, concurrency)| Metric::at_millis(millis, cpu_load, concurrency))
        .collect()
}

/// Inserts the fixed sample batch in a single bulk write.
pub struct SampleMetricSeeder {
    collection: String,
}

impl SampleMetricSeeder {
    pub fn new(collection: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
        }
    }
}

impl Seeder for SampleMetricSeeder {
    fn seed<'a>(
        &'a self,
        store: &'a dyn MetricStore,
    ) -> Pin<Box<dyn Future<Output = Result<(), SeedError>> + Send + 'a>> {
        Box::pin(async move {
            let inserted = store.insert_many(&self.collection, &sample_metrics()).await?;
            info!("Inserted {} sample metrics into {}", inserted, self.collection);
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_are_ascending_and_a_minute_apart() {
        let samples = sample_metrics();
        assert_eq!(samples.len(), 6);
        for pair in samples.windows(2) {
            assert_eq!(pair[1].timestamp_millis() - pair[0].timestamp_millis(), 60_000);
        }
    }

    #[test]
    fn samples_stay_within_bounds() {
        assert!(sample_metrics().iter().all(Metric::is_within_bounds));
    }
}
