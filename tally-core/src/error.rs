//! Error types signalled by the core engines

use chrono::NaiveDate;

/// Statistics that have no meaningful value for the given input
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StatsError {
    #[error("cannot compute statistics over an empty transaction set")]
    EmptyInput,

    #[error("histogram needs at least one bin")]
    InvalidBinCount,
}

/// Malformed filter criteria, reported by `FilterCriteria::validate`
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FilterError {
    #[error("start date {start} is after end date {end}")]
    InvertedDateRange { start: NaiveDate, end: NaiveDate },

    #[error("minimum amount {min} is greater than maximum amount {max}")]
    InvertedAmountRange { min: f64, max: f64 },

    #[error("amount bound must be a finite number, got {0}")]
    NonFiniteBound(f64),
}
