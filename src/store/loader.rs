//! Dataset loader
//!
//! Reads one JSON array file into a record collection.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde_json::{json, Value};

use crate::error::Result;
use crate::record::Record;

use super::Dataset;

/// Outcome of loading one dataset
#[derive(Debug, Clone, PartialEq)]
pub struct LoadOutcome {
    /// Which collection this was
    pub dataset: Dataset,

    /// Source file, if the collection came from disk
    pub path: Option<PathBuf>,

    /// Number of records now held in memory
    pub records_loaded: usize,

    /// Why the source was rejected (collection is empty when set)
    pub failure: Option<String>,
}

impl LoadOutcome {
    pub fn is_ok(&self) -> bool {
        self.failure.is_none()
    }
}

/// Load outcomes for both collections
#[derive(Debug, Clone, PartialEq)]
pub struct LoadReport {
    pub regional: LoadOutcome,
    pub national: LoadOutcome,
}

impl LoadReport {
    /// True when both sources loaded cleanly
    pub fn all_ok(&self) -> bool {
        self.regional.is_ok() && self.national.is_ok()
    }

    pub fn outcome(&self, dataset: Dataset) -> &LoadOutcome {
        match dataset {
            Dataset::Regional => &self.regional,
            Dataset::National => &self.national,
        }
    }

    /// One JSON object per dataset: name, source path, record count, error
    pub fn summary(&self) -> Value {
        [&self.regional, &self.national]
            .into_iter()
            .map(|outcome| {
                json!({
                    "dataset": outcome.dataset.name(),
                    "path": outcome.path.as_ref().map(|p| p.display().to_string()),
                    "records": outcome.records_loaded,
                    "error": outcome.failure,
                })
            })
            .collect()
    }
}

/// Read a JSON array of objects from `path`
///
/// Fails on a missing/unreadable file, invalid JSON, or a top-level
/// value that is not an array of objects.
pub fn load_collection(path: &Path) -> Result<Vec<Record>> {
    let file = File::open(path)?;
    let records: Vec<Record> = serde_json::from_reader(BufReader::new(file))?;
    Ok(records)
}

/// Load one dataset, substituting an empty collection on failure
pub(super) fn load_or_empty(dataset: Dataset, path: &Path) -> (Vec<Record>, LoadOutcome) {
    match load_collection(path) {
        Ok(records) => {
            tracing::info!(
                dataset = dataset.name(),
                path = %path.display(),
                records = records.len(),
                "Dataset loaded"
            );
            let outcome = LoadOutcome {
                dataset,
                path: Some(path.to_path_buf()),
                records_loaded: records.len(),
                failure: None,
            };
            (records, outcome)
        }
        Err(e) => {
            tracing::error!(
                dataset = dataset.name(),
                path = %path.display(),
                error = %e,
                "Failed to load dataset, serving it empty"
            );
            let outcome = LoadOutcome {
                dataset,
                path: Some(path.to_path_buf()),
                records_loaded: 0,
                failure: Some(e.to_string()),
            };
            (Vec::new(), outcome)
        }
    }
}
