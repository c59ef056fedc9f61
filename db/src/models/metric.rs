use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const CPU_LOAD_MAX: f64 = 100.0;

/// One sample in the metrics time-series collection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub timestamp: DateTime<Utc>,
    pub cpu_load: f64, // 0..100
    pub concurrency: i32,
}

impl Metric {
    pub fn new(timestamp: DateTime<Utc>, cpu_load: f64, concurrency: i32) -> Self {
        Self {
            timestamp,
            cpu_load,
            concurrency,
        }
    }

    /// Builds a record from milliseconds since the Unix epoch.
    pub fn at_millis(millis: i64, cpu_load: f64, concurrency: i32) -> Self {
        Self::new(
            bson::DateTime::from_millis(millis).to_chrono(),
            cpu_load,
            concurrency,
        )
    }

    pub fn timestamp_millis(&self) -> i64 {
        self.timestamp.timestamp_millis()
    }

    pub fn is_within_bounds(&self) -> bool {
        (0.0..=CPU_LOAD_MAX).contains(&self.cpu_load) && self.concurrency >= 0
    }
}
