//! In-memory [`MetricStore`] used by unit tests across the workspace.
//!
//! Mirrors the server behaviour the seeders rely on: duplicate users and
//! collections are rejected, inserts append in order, and inserting into an
//! unknown collection creates it implicitly.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{DbError, DbResult};
use crate::models::{collection::TimeSeriesCollection, metric::Metric, user::DatabaseUser};
use crate::store::MetricStore;

#[derive(Default)]
struct State {
    users: Vec<DatabaseUser>,
    collections: Vec<TimeSeriesCollection>,
    documents: HashMap<String, Vec<Metric>>,
    reject_writes: Option<String>,
    insert_calls: usize,
}

#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<State>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent `insert_many` fail with `reason`.
    pub fn reject_writes(&self, reason: impl Into<String>) {
        self.lock().reject_writes = Some(reason.into());
    }

    pub fn users(&self) -> Vec<DatabaseUser> {
        self.lock().users.clone()
    }

    pub fn collections(&self) -> Vec<TimeSeriesCollection> {
        self.lock().collections.clone()
    }

    pub fn documents(&self, collection: &str) -> Vec<Metric> {
        self.lock()
            .documents
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }

    /// Number of `insert_many` calls that reached the store.
    pub fn insert_calls(&self) -> usize {
        self.lock().insert_calls
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl MetricStore for InMemoryStore {
    async fn create_user(&self, user: &DatabaseUser) -> DbResult<()> {
        let mut state = self.lock();
        if state.users.iter().any(|u| u.name == user.name) {
            return Err(DbError::DuplicateCredential(user.name.clone()));
        }
        state.users.push(user.clone());
        Ok(())
    }

    async fn create_time_series_collection(
        &self,
        collection: &TimeSeriesCollection,
    ) -> DbResult<()> {
        let mut state = self.lock();
        let exists = state.collections.iter().any(|c| c.name == collection.name)
            || state.documents.contains_key(&collection.name);
        if exists {
            return Err(DbError::CollectionAlreadyExists(collection.name.clone()));
        }
        state.collections.push(collection.clone());
        state.documents.insert(collection.name.clone(), Vec::new());
        Ok(())
    }

    async fn insert_many(&self, collection: &str, metrics: &[Metric]) -> DbResult<usize> {
        let mut state = self.lock();
        state.insert_calls += 1;

        if let Some(reason) = &state.reject_writes {
            return Err(DbError::WriteRejected {
                collection: collection.to_string(),
                reason: reason.clone(),
            });
        }
        if metrics.is_empty() {
            return Err(DbError::WriteRejected {
                collection: collection.to_string(),
                reason: "empty batch".into(),
            });
        }

        state
            .documents
            .entry(collection.to_string())
            .or_default()
            .extend_from_slice(metrics);
        Ok(metrics.len())
    }
}
