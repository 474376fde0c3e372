//! Display orderings: sorted tables, top-N and most-recent lists

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::transaction::{Transaction, TransactionSet, TxnType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    Date,
    Amount,
    Category,
    Type,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [SortKey::Date, SortKey::Amount, SortKey::Category, SortKey::Type];

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Date => "Date",
            SortKey::Amount => "Amount",
            SortKey::Category => "Category",
            SortKey::Type => "Type",
        }
    }

    fn compare(&self, a: &Transaction, b: &Transaction) -> Ordering {
        match self {
            SortKey::Date => a.date.cmp(&b.date),
            SortKey::Amount => a.amount.total_cmp(&b.amount),
            SortKey::Category => a.category.cmp(&b.category),
            SortKey::Type => a.txn_type.cmp(&b.txn_type),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

/// Stable sort by `key`; equal keys keep their input order either way.
pub fn sort_transactions(
    transactions: &[Transaction],
    key: SortKey,
    order: SortOrder,
) -> TransactionSet {
    let mut sorted = transactions.to_vec();
    match order {
        SortOrder::Ascending => sorted.sort_by(|a, b| key.compare(a, b)),
        SortOrder::Descending => sorted.sort_by(|a, b| key.compare(b, a)),
    }
    sorted.into()
}

/// The `n` largest amounts, optionally restricted to one type.
pub fn top_transactions(
    transactions: &[Transaction],
    n: usize,
    txn_type: Option<TxnType>,
) -> TransactionSet {
    let candidates: Vec<Transaction> = transactions
        .iter()
        .filter(|t| txn_type.is_none_or(|ty| t.txn_type == ty))
        .cloned()
        .collect();
    sort_transactions(&candidates, SortKey::Amount, SortOrder::Descending)
        .into_iter()
        .take(n)
        .collect()
}

/// The `n` newest transactions.
pub fn recent_transactions(transactions: &[Transaction], n: usize) -> TransactionSet {
    sort_transactions(transactions, SortKey::Date, SortOrder::Descending)
        .into_iter()
        .take(n)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    fn sample() -> Vec<Transaction> {
        vec![
            Transaction::new(d(3), "Food", TxnType::Debit, 20.0, "a"),
            Transaction::new(d(1), "Salary", TxnType::Credit, 900.0, "b"),
            Transaction::new(d(2), "Bills", TxnType::Debit, 20.0, "c"),
            Transaction::new(d(4), "Food", TxnType::Debit, 70.0, "d"),
        ]
    }

    fn descs(set: &TransactionSet) -> Vec<&str> {
        set.iter().map(|t| t.description.as_str()).collect()
    }

    #[test]
    fn test_sort_by_date_both_ways() {
        let txns = sample();
        let asc = sort_transactions(&txns, SortKey::Date, SortOrder::Ascending);
        assert_eq!(descs(&asc), vec!["b", "c", "a", "d"]);
        let desc = sort_transactions(&txns, SortKey::Date, SortOrder::Descending);
        assert_eq!(descs(&desc), vec!["d", "a", "c", "b"]);
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let txns = sample();
        let by_amount = sort_transactions(&txns, SortKey::Amount, SortOrder::Descending);
        assert_eq!(descs(&by_amount), vec!["b", "d", "a", "c"]);
        let by_type = sort_transactions(&txns, SortKey::Type, SortOrder::Ascending);
        assert_eq!(descs(&by_type), vec!["a", "c", "d", "b"]);
    }

    #[test]
    fn test_top_and_recent() {
        let txns = sample();
        let top = top_transactions(&txns, 2, Some(TxnType::Debit));
        assert_eq!(descs(&top), vec!["d", "a"]);
        assert_eq!(top_transactions(&txns, 10, None).len(), 4);
        assert!(top_transactions(&txns, 0, None).is_empty());

        let recent = recent_transactions(&txns, 2);
        assert_eq!(descs(&recent), vec!["d", "a"]);
    }
}
