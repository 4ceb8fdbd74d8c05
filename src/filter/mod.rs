//! Filter Engine Module
//!
//! Applies optional field predicates to a record collection.
//!
//! ## Semantics
//! - Predicates combine with AND; an empty set matches everything
//! - A predicate is only added when the caller supplied a value
//!   (`Option::Some`), so "not provided" never means "filter for zero"
//! - Output is a subsequence of the input in the original order
//!
//! ```text
//!   records ──▶ [año == 2023] ──▶ [causa ∋ "intenc"] ──▶ matches
//! ```

mod predicate;

pub use predicate::Predicate;

use crate::record::Record;

/// An ordered conjunction of predicates
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    predicates: Vec<Predicate>,
}

impl FilterSet {
    /// Create a filter set that matches every record
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an exact integer match when `value` is provided
    pub fn integer_equals(mut self, field: &str, value: Option<i64>) -> Self {
        if let Some(value) = value {
            self.predicates.push(Predicate::integer_equals(field, value));
        }
        self
    }

    /// Add a case-insensitive substring match when `needle` is provided
    pub fn text_contains(mut self, field: &str, needle: Option<&str>) -> Self {
        if let Some(needle) = needle {
            self.predicates.push(Predicate::text_contains(field, needle));
        }
        self
    }

    /// Add an already-built predicate
    pub fn with(mut self, predicate: Predicate) -> Self {
        self.predicates.push(predicate);
        self
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Check one record against every predicate
    pub fn matches(&self, record: &Record) -> bool {
        self.predicates.iter().all(|p| p.matches(record))
    }

    /// Lazily yield the matching records of `records`, in order
    pub fn apply<'s, 'r: 's>(
        &'s self,
        records: &'r [Record],
    ) -> impl Iterator<Item = &'r Record> + 's {
        records.iter().filter(move |record| self.matches(record))
    }
}
