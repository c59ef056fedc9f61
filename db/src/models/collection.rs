use bson::{Document, doc};

/// Ten years, the retention window of the metrics collection.
pub const METRICS_RETENTION_SECS: i64 = 315_360_000;
pub const METRICS_TIME_FIELD: &str = "timestamp";

/// Bucketing hint handed to the storage engine for time-series data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Granularity {
    Seconds,
    Minutes,
    Hours,
}

impl Granularity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Granularity::Seconds => "seconds",
            Granularity::Minutes => "minutes",
            Granularity::Hours => "hours",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TimeSeriesCollection {
    pub name: String,
    pub time_field: String,
    pub granularity: Granularity,
    pub expire_after_seconds: i64,
}

impl TimeSeriesCollection {
    /// The collection the seeders write to: minute buckets, ten year expiry.
    pub fn metrics(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            time_field: METRICS_TIME_FIELD.to_string(),
            granularity: Granularity::Minutes,
            expire_after_seconds: METRICS_RETENTION_SECS,
        }
    }

    /// The `create` command for this collection.
    pub fn create_command(&self) -> Document {
        doc! {
            "create": &self.name,
            "timeseries": {
                "timeField": &self.time_field,
                "granularity": self.granularity.as_str(),
            },
            "expireAfterSeconds": self.expire_after_seconds,
        }
    }
}
