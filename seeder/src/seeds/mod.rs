pub mod collection;
pub mod metric_window;
pub mod sample_metrics;
pub mod user;
