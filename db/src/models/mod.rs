pub mod collection;
pub mod metric;
pub mod user;
