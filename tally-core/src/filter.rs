//! Filter engine: projects a transaction set onto the rows matching a
//! set of criteria.
//!
//! Every predicate is optional and they combine with logical AND. For the
//! set-valued predicates, `None` means "no restriction" while `Some` of an
//! empty set means "nothing passes"; the engine never conflates the two.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::error::FilterError;
use crate::transaction::{Transaction, TransactionSet, TxnType};

/// Active constraints a transaction must satisfy to stay in a view
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Inclusive lower date bound
    pub start_date: Option<NaiveDate>,
    /// Inclusive upper date bound
    pub end_date: Option<NaiveDate>,
    pub categories: Option<BTreeSet<String>>,
    pub types: Option<BTreeSet<TxnType>>,
    /// Inclusive lower amount bound
    pub amount_min: Option<f64>,
    /// Inclusive upper amount bound
    pub amount_max: Option<f64>,
    /// Case-insensitive substring of the description; empty matches all
    #[serde(default)]
    pub search_text: String,
}

impl FilterCriteria {
    /// Criteria that let every transaction through
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_dates(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.start_date = start;
        self.end_date = end;
        self
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = Some(categories.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_types<I: IntoIterator<Item = TxnType>>(mut self, types: I) -> Self {
        self.types = Some(types.into_iter().collect());
        self
    }

    pub fn with_amount_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.amount_min = min;
        self.amount_max = max;
        self
    }

    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    /// True when no predicate is active
    pub fn is_unrestricted(&self) -> bool {
        self.start_date.is_none()
            && self.end_date.is_none()
            && self.categories.is_none()
            && self.types.is_none()
            && self.amount_min.is_none()
            && self.amount_max.is_none()
            && self.search_text.is_empty()
    }

    /// Reject criteria a user most likely entered by mistake.
    ///
    /// `apply_filters` itself accepts these and treats inverted ranges as
    /// empty ranges; this is for input layers that want to tell the user.
    pub fn validate(&self) -> Result<(), FilterError> {
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            if start > end {
                return Err(FilterError::InvertedDateRange { start, end });
            }
        }
        for bound in [self.amount_min, self.amount_max].into_iter().flatten() {
            if !bound.is_finite() {
                return Err(FilterError::NonFiniteBound(bound));
            }
        }
        if let (Some(min), Some(max)) = (self.amount_min, self.amount_max) {
            if min > max {
                return Err(FilterError::InvertedAmountRange { min, max });
            }
        }
        Ok(())
    }

    /// Whether a single transaction passes every active predicate
    pub fn matches(&self, txn: &Transaction) -> bool {
        self.matches_with_needle(txn, &self.search_text.to_lowercase())
    }

    fn matches_with_needle(&self, txn: &Transaction, needle: &str) -> bool {
        if self.start_date.is_some_and(|start| txn.date < start) {
            return false;
        }
        if self.end_date.is_some_and(|end| txn.date > end) {
            return false;
        }
        if let Some(categories) = &self.categories {
            if !categories.contains(&txn.category) {
                return false;
            }
        }
        if let Some(types) = &self.types {
            if !types.contains(&txn.txn_type) {
                return false;
            }
        }
        if self.amount_min.is_some_and(|min| txn.amount < min) {
            return false;
        }
        if self.amount_max.is_some_and(|max| txn.amount > max) {
            return false;
        }
        needle.is_empty() || txn.description.to_lowercase().contains(needle)
    }
}

/// Return the transactions matching `criteria`, in their input order.
pub fn apply_filters(transactions: &[Transaction], criteria: &FilterCriteria) -> TransactionSet {
    let needle = criteria.search_text.to_lowercase();
    let filtered: TransactionSet = transactions
        .iter()
        .filter(|t| criteria.matches_with_needle(t, &needle))
        .cloned()
        .collect();

    tracing::debug!(
        input = transactions.len(),
        output = filtered.len(),
        "applied filters"
    );
    filtered
}

/// Quick date ranges relative to "today"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatePreset {
    Today,
    Last7Days,
    Last30Days,
    Last90Days,
}

impl DatePreset {
    pub const ALL: [DatePreset; 4] = [
        DatePreset::Today,
        DatePreset::Last7Days,
        DatePreset::Last30Days,
        DatePreset::Last90Days,
    ];

    /// Inclusive (start, end) range ending on `today`
    pub fn range(&self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        let days = match self {
            DatePreset::Today => 0,
            DatePreset::Last7Days => 7,
            DatePreset::Last30Days => 30,
            DatePreset::Last90Days => 90,
        };
        (today - Duration::days(days), today)
    }

    pub fn label(&self) -> &'static str {
        match self {
            DatePreset::Today => "Today",
            DatePreset::Last7Days => "Last 7 days",
            DatePreset::Last30Days => "Last 30 days",
            DatePreset::Last90Days => "Last 90 days",
        }
    }
}
