//! Predicate definitions

use crate::record::Record;

/// A single named filter condition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// Field holds exactly this integer
    IntegerEquals { field: String, value: i64 },

    /// Field, as lower-cased text, contains the needle
    TextContains { field: String, needle: String },
}

impl Predicate {
    pub fn integer_equals(field: impl Into<String>, value: i64) -> Self {
        Predicate::IntegerEquals {
            field: field.into(),
            value,
        }
    }

    /// The needle is lower-cased here, once, not per record
    pub fn text_contains(field: impl Into<String>, needle: &str) -> Self {
        Predicate::TextContains {
            field: field.into(),
            needle: needle.to_lowercase(),
        }
    }

    /// Name of the field this predicate reads
    pub fn field(&self) -> &str {
        match self {
            Predicate::IntegerEquals { field, .. } => field,
            Predicate::TextContains { field, .. } => field,
        }
    }

    /// Test one record
    ///
    /// A missing or wrongly-typed field never matches.
    pub fn matches(&self, record: &Record) -> bool {
        match self {
            Predicate::IntegerEquals { field, value } => record.integer(field) == Some(*value),
            Predicate::TextContains { field, needle } => record
                .text(field)
                .is_some_and(|text| text.to_lowercase().contains(needle.as_str())),
        }
    }
}
