//! Query Service Module
//!
//! Runs one request end to end: Dataset Store → Filter Engine → Limiter.
//!
//! Every call is independent. The service only borrows from the shared
//! store, so any number of requests can run it at once.

mod params;

pub use params::{NationalQuery, RegionalQuery};

use std::sync::Arc;

use crate::filter::FilterSet;
use crate::limit;
use crate::record::Record;
use crate::store::{Dataset, DatasetStore};

/// Stateless query front-end over the dataset store
#[derive(Debug, Clone)]
pub struct QueryService {
    store: Arc<DatasetStore>,
}

impl QueryService {
    pub fn new(store: Arc<DatasetStore>) -> Self {
        Self { store }
    }

    /// The underlying store
    pub fn store(&self) -> &DatasetStore {
        &self.store
    }

    /// Regional records matching `query`, capped
    pub fn regional(&self, query: &RegionalQuery) -> Vec<&Record> {
        self.run(Dataset::Regional, &query.filters())
    }

    /// National records matching `query`, capped
    pub fn national(&self, query: &NationalQuery) -> Vec<&Record> {
        self.run(Dataset::National, &query.filters())
    }

    /// Filter one collection and cap the result
    pub fn run(&self, dataset: Dataset, filters: &FilterSet) -> Vec<&Record> {
        let collection = self.store.collection(dataset);
        let records = limit::limit(filters.apply(collection));

        tracing::debug!(
            dataset = dataset.name(),
            predicates = filters.predicates().len(),
            scanned = collection.len(),
            returned = records.len(),
            "Query executed"
        );

        records
    }
}
