use crate::seed::{SeedError, Seeder};
use chrono::{DateTime, SubsecRound, TimeDelta, Utc};
use db::MetricStore;
use db::models::metric::{CPU_LOAD_MAX, Metric};
use log::info;
use rand::Rng;
use std::pin::Pin;

pub const WINDOW_LEN: i64 = 6;
pub const WINDOW_STEP_MS: i64 = 60_000;
/// Exclusive upper bound for generated concurrency values.
pub const CONCURRENCY_LIMIT: i32 = 500_000;

/// Wall-clock now at the millisecond precision the store keeps.
pub fn reference_now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

/// Start line of an ingestion run, in whole seconds since the epoch.
pub fn start_message(reference: DateTime<Utc>) -> String {
    format!("Ingestion started at: {}", reference.timestamp())
}

/// Uniform in [0, 100], rounded to two decimals.
pub fn random_cpu_load<R: Rng>(rng: &mut R) -> f64 {
    let raw: f64 = rng.gen_range(0.0..=CPU_LOAD_MAX);
    (raw * 100.0).round() / 100.0
}

/// Six records one minute apart, oldest first, the last one at `reference`.
pub fn generate_window<R: Rng>(reference: DateTime<Utc>, rng: &mut R) -> Vec<Metric> {
    let mut window = Vec::with_capacity(WINDOW_LEN as usize);
    for i in (0..WINDOW_LEN).rev() {
        let timestamp = reference - TimeDelta::milliseconds(i * WINDOW_STEP_MS);
        let cpu_load = random_cpu_load(rng);
        let concurrency = rng.gen_range(0..CONCURRENCY_LIMIT);
        window.push(Metric::new(timestamp, cpu_load, concurrency));
    }
    window
}

/// Appends a pre-generated window in one bulk write.
pub struct MetricWindowSeeder {
    collection: String,
    window: Vec<Metric>,
}

impl MetricWindowSeeder {
    pub fn new(collection: impl Into<String>, window: Vec<Metric>) -> Self {
        Self {
            collection: collection.into(),
            window,
        }
    }
}

impl Seeder for MetricWindowSeeder {
    fn seed<'a>(
        &'a self,
        store: &'a dyn MetricStore,
    ) -> Pin<Box<dyn Future<Output = Result<(), SeedError>> + Send + 'a>> {
        Box::pin(async move {
            let inserted = store.insert_many(&self.collection, &self.window).await?;
            info!("Inserted {} metrics into {}", inserted, self.collection);
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn reference() -> DateTime<Utc> {
        Metric::at_millis(1_700_000_000_123, 0.0, 0).timestamp
    }

    #[test]
    fn timestamps_are_one_minute_apart_ending_at_reference() {
        let mut rng = StdRng::seed_from_u64(7);
        let window = generate_window(reference(), &mut rng);

        assert_eq!(window.len(), 6);
        for pair in window.windows(2) {
            assert_eq!(pair[1].timestamp_millis() - pair[0].timestamp_millis(), 60_000);
        }
        assert_eq!(window[5].timestamp, reference());
        assert_eq!(
            window[0].timestamp_millis(),
            reference().timestamp_millis() - 300_000
        );
    }

    #[test]
    fn values_stay_in_range_with_two_decimals() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            for metric in generate_window(reference(), &mut rng) {
                assert!((0.0..=100.0).contains(&metric.cpu_load));
                assert_eq!((metric.cpu_load * 100.0).round() / 100.0, metric.cpu_load);
                assert!((0..500_000).contains(&metric.concurrency));
            }
        }
    }

    #[test]
    fn same_seed_gives_same_window() {
        let a = generate_window(reference(), &mut StdRng::seed_from_u64(42));
        let b = generate_window(reference(), &mut StdRng::seed_from_u64(42));
        let c = generate_window(reference(), &mut StdRng::seed_from_u64(43));

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn start_message_floors_to_whole_seconds() {
        let late = Metric::at_millis(1_700_000_000_999, 0.0, 0).timestamp;
        assert_eq!(start_message(late), "Ingestion started at: 1700000000");

        let exact = Metric::at_millis(1_700_000_001_000, 0.0, 0).timestamp;
        assert_eq!(start_message(exact), "Ingestion started at: 1700000001");
    }

    #[test]
    fn reference_has_millisecond_precision() {
        let now = reference_now();
        assert_eq!(now.timestamp_subsec_nanos() % 1_000_000, 0);
    }
}
