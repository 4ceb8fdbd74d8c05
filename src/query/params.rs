//! Query parameters for each endpoint
//!
//! Parsed from the raw URL query string: `año` (or `anio`), `causa` and
//! `entidad`. Rules:
//! - Unknown parameters are ignored
//! - A repeated parameter keeps its last value
//! - An empty value (`?causa=`) counts as not provided
//! - `año` must be an integer once surrounding whitespace is trimmed

use std::borrow::Cow;

use crate::error::{IncendiosError, Result};
use crate::filter::FilterSet;
use crate::record::fields;

/// ASCII spelling accepted for `año`
pub const YEAR_ALIAS: &str = "anio";

/// Filters accepted by `/data/teziutlan`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionalQuery {
    /// Exact incident year
    pub year: Option<i64>,

    /// Case-insensitive substring of the cause
    pub cause: Option<String>,
}

impl RegionalQuery {
    /// Build from caller-supplied values, dropping empty text
    pub fn new(year: Option<i64>, cause: Option<String>) -> Self {
        Self {
            year,
            cause: cause.and_then(non_empty),
        }
    }

    /// Parse a raw query string (without the leading `?`)
    pub fn from_query_string(query: &str) -> Result<Self> {
        let mut year = None;
        let mut cause = None;

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                fields::YEAR | YEAR_ALIAS => year = Some(value),
                fields::CAUSE => cause = Some(value),
                _ => {}
            }
        }

        Ok(Self {
            year: parse_year(year)?,
            cause: cause.and_then(|c| non_empty(c.into_owned())),
        })
    }

    /// Year first, then cause
    pub fn filters(&self) -> FilterSet {
        FilterSet::new()
            .integer_equals(fields::YEAR, self.year)
            .text_contains(fields::CAUSE, self.cause.as_deref())
    }
}

/// Filters accepted by `/data/nacional`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NationalQuery {
    /// Case-insensitive substring of the entity name
    pub entity: Option<String>,

    /// Exact incident year
    pub year: Option<i64>,
}

impl NationalQuery {
    /// Build from caller-supplied values, dropping empty text
    pub fn new(entity: Option<String>, year: Option<i64>) -> Self {
        Self {
            entity: entity.and_then(non_empty),
            year,
        }
    }

    /// Parse a raw query string (without the leading `?`)
    pub fn from_query_string(query: &str) -> Result<Self> {
        let mut entity = None;
        let mut year = None;

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                fields::ENTITY => entity = Some(value),
                fields::YEAR | YEAR_ALIAS => year = Some(value),
                _ => {}
            }
        }

        Ok(Self {
            entity: entity.and_then(|e| non_empty(e.into_owned())),
            year: parse_year(year)?,
        })
    }

    /// Entity first, then year
    pub fn filters(&self) -> FilterSet {
        FilterSet::new()
            .text_contains(fields::ENTITY, self.entity.as_deref())
            .integer_equals(fields::YEAR, self.year)
    }
}

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}

fn parse_year(raw: Option<Cow<'_, str>>) -> Result<Option<i64>> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed.parse::<i64>().map(Some).map_err(|_| {
        IncendiosError::InvalidQuery(format!("año must be an integer, got '{}'", raw))
    })
}
