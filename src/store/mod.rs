//! Dataset Store Module
//!
//! Holds the two record collections for the lifetime of the process.
//!
//! ## Responsibilities
//! - Load both JSON sources exactly once, before any request is served
//! - Degrade a missing or malformed source to an empty collection
//! - Hand out read-only slices to the query layer
//!
//! ## Lifecycle
//! ```text
//!   startup ──▶ load(teziutlan.json) ──┐
//!           └─▶ load(nacional.json) ───┴─▶ DatasetStore (immutable) ──▶ exit
//! ```
//!
//! There is no reload path; new data requires a restart. Collections are
//! never mutated after construction, so sharing the store behind an `Arc`
//! needs no locking.

mod loader;

use std::fmt;

use crate::config::Config;
use crate::record::Record;

pub use loader::{load_collection, LoadOutcome, LoadReport};

/// The two collections served by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dataset {
    /// Teziutlán subset
    Regional,

    /// Whole country
    National,
}

impl Dataset {
    /// Short name used in logs and URLs
    pub fn name(&self) -> &'static str {
        match self {
            Dataset::Regional => "teziutlan",
            Dataset::National => "nacional",
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// In-memory, read-only record collections
#[derive(Debug)]
pub struct DatasetStore {
    /// Regional records in source order
    regional: Vec<Record>,

    /// National records in source order
    national: Vec<Record>,

    /// What happened at load time
    report: LoadReport,
}

impl DatasetStore {
    /// Load both collections from the paths in `config`
    ///
    /// Never fails: a source that cannot be read or parsed becomes an
    /// empty collection and is logged.
    pub fn load(config: &Config) -> Self {
        let (regional, regional_outcome) =
            loader::load_or_empty(Dataset::Regional, &config.regional_path());
        let (national, national_outcome) =
            loader::load_or_empty(Dataset::National, &config.national_path());

        Self {
            regional,
            national,
            report: LoadReport {
                regional: regional_outcome,
                national: national_outcome,
            },
        }
    }

    /// Build a store from records already in memory
    pub fn from_records(regional: Vec<Record>, national: Vec<Record>) -> Self {
        let report = LoadReport {
            regional: LoadOutcome {
                dataset: Dataset::Regional,
                path: None,
                records_loaded: regional.len(),
                failure: None,
            },
            national: LoadOutcome {
                dataset: Dataset::National,
                path: None,
                records_loaded: national.len(),
                failure: None,
            },
        };

        Self {
            regional,
            national,
            report,
        }
    }

    /// Records of one collection, in source order
    pub fn collection(&self, dataset: Dataset) -> &[Record] {
        match dataset {
            Dataset::Regional => &self.regional,
            Dataset::National => &self.national,
        }
    }

    /// Load-time outcome for both collections
    pub fn report(&self) -> &LoadReport {
        &self.report
    }
}
