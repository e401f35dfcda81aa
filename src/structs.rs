//! # Screener data model
//!
//! Wire shapes exchanged with the `/filters` and `/ticker-scores` endpoints,
//! plus the per-row filter constraint edited in the search page.
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Default lower bound of a freshly added filter row.
pub const DEFAULT_MIN: f64 = 0.0;
/// Default upper bound of a freshly added filter row.
pub const DEFAULT_MAX: f64 = 100.0;

/// Ordered list of filter names served by `GET /filters`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct FilterCatalog {
    pub filters: Vec<String>,
}

impl FilterCatalog {
    pub fn new(filters: Vec<String>) -> Self {
        Self { filters }
    }

    /// Name given to new rows; empty until the catalog has loaded.
    pub fn default_name(&self) -> String {
        self.filters.first().cloned().unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.filters.iter()
    }
}

/// Which side of a range an edit applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Min,
    Max,
}

impl std::fmt::Display for Bound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Bound::Min => write!(f, "minimum"),
            Bound::Max => write!(f, "maximum"),
        }
    }
}

/// One user-configured `(name, min, max)` constraint.
///
/// `min_invalid`/`max_invalid` record that the input currently holds text
/// that is not a finite number; the matching bound is then stale and the
/// row must not be submitted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuerySlot {
    pub name: String,
    pub min: f64,
    pub max: f64,
    #[serde(skip)]
    pub min_invalid: bool,
    #[serde(skip)]
    pub max_invalid: bool,
}

impl QuerySlot {
    pub fn new(name: impl Into<String>, min: f64, max: f64) -> Self {
        Self {
            name: name.into(),
            min,
            max,
            min_invalid: false,
            max_invalid: false,
        }
    }

    pub fn with_default_bounds(name: impl Into<String>) -> Self {
        Self::new(name, DEFAULT_MIN, DEFAULT_MAX)
    }

    pub fn is_inverted(&self) -> bool {
        self.min > self.max
    }

    /// First bound whose input does not hold a usable number.
    pub fn invalid_bound(&self) -> Option<Bound> {
        if self.min_invalid {
            Some(Bound::Min)
        } else if self.max_invalid {
            Some(Bound::Max)
        } else {
            None
        }
    }
}

/// Body of `POST /ticker-scores`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterRequest {
    pub filters: Vec<QuerySlot>,
}

/// One ticker's computed values across all filters.
///
/// Every key other than `ticker` is a filter name; values may be `null`
/// when the backend could not compute a metric.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ScoreRow {
    pub ticker: String,
    #[serde(flatten)]
    pub scores: HashMap<String, Option<f64>>,
}

impl ScoreRow {
    pub fn new(ticker: impl Into<String>) -> Self {
        Self {
            ticker: ticker.into(),
            scores: HashMap::new(),
        }
    }

    pub fn with_score(mut self, name: impl Into<String>, value: f64) -> Self {
        self.scores.insert(name.into(), Some(value));
        self
    }

    pub fn score(&self, name: &str) -> Option<f64> {
        self.scores.get(name).copied().flatten()
    }
}

/// Body returned by both `GET` and `POST /ticker-scores`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ScoreListResponse {
    pub score_list: Vec<ScoreRow>,
}
