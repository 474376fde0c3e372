//! Transaction record types for the ledger being analysed

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

/// Direction of a transaction relative to the account balance
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TxnType {
    /// Money leaving the account (expense)
    Debit,
    /// Money entering the account (income)
    Credit,
}

impl TxnType {
    pub const ALL: [TxnType; 2] = [TxnType::Debit, TxnType::Credit];

    /// Contribution sign towards the net balance
    pub fn sign(&self) -> f64 {
        match self {
            TxnType::Debit => -1.0,
            TxnType::Credit => 1.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TxnType::Debit => "Debit",
            TxnType::Credit => "Credit",
        }
    }
}

impl fmt::Display for TxnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown transaction type: {0:?}")]
pub struct UnknownTxnType(pub String);

impl FromStr for TxnType {
    type Err = UnknownTxnType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debit" | "d" => Ok(TxnType::Debit),
            // "kredit" is the label used by Indonesian bank exports
            "credit" | "kredit" | "c" | "k" => Ok(TxnType::Credit),
            _ => Err(UnknownTxnType(s.to_string())),
        }
    }
}

/// A single ledger line. Immutable once loaded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub date: NaiveDate,
    /// Category label exactly as it appears in the source
    pub category: String,
    #[serde(rename = "type")]
    pub txn_type: TxnType,
    /// Non-negative magnitude; direction comes from `txn_type`
    pub amount: f64,
    pub description: String,
    /// Running ledger balance reported by the source, informational only
    pub balance: Option<f64>,
}

impl Transaction {
    pub fn new(
        date: NaiveDate,
        category: impl Into<String>,
        txn_type: TxnType,
        amount: f64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date,
            category: category.into(),
            txn_type,
            amount,
            description: description.into(),
            balance: None,
        }
    }

    pub fn with_balance(mut self, balance: f64) -> Self {
        self.balance = Some(balance);
        self
    }

    pub fn is_debit(&self) -> bool {
        self.txn_type == TxnType::Debit
    }

    pub fn is_credit(&self) -> bool {
        self.txn_type == TxnType::Credit
    }

    /// Amount with the balance sign applied (credit positive, debit negative)
    pub fn signed_amount(&self) -> f64 {
        self.txn_type.sign() * self.amount
    }

    pub fn month(&self) -> MonthKey {
        MonthKey::of(self.date)
    }
}

/// Calendar month bucket key, ordered chronologically
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid month key {0:?}, expected YYYY-MM")]
pub struct InvalidMonthKey(pub String);

impl FromStr for MonthKey {
    type Err = InvalidMonthKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || InvalidMonthKey(s.to_string());
        let (y, m) = s.trim().split_once('-').ok_or_else(bad)?;
        let year: i32 = y.parse().map_err(|_| bad())?;
        let month: u32 = m.parse().map_err(|_| bad())?;
        MonthKey::new(year, month).ok_or_else(bad)
    }
}

impl Serialize for MonthKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MonthKey {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Ordered collection of transactions.
///
/// Load order carries no meaning for aggregation; it only decides
/// tie-breaks where a function documents "first appearance".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionSet {
    transactions: Vec<Transaction>,
}

impl TransactionSet {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    pub fn as_slice(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn into_vec(self) -> Vec<Transaction> {
        self.transactions
    }

    /// Earliest and latest transaction date
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let min = self.transactions.iter().map(|t| t.date).min()?;
        let max = self.transactions.iter().map(|t| t.date).max()?;
        Some((min, max))
    }

    /// Smallest and largest amount
    pub fn amount_range(&self) -> Option<(f64, f64)> {
        let mut it = self.transactions.iter().map(|t| t.amount);
        let first = it.next()?;
        Some(it.fold((first, first), |(lo, hi), a| (lo.min(a), hi.max(a))))
    }

    /// Distinct category labels in first-seen order
    pub fn categories(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.transactions
            .iter()
            .filter(|t| seen.insert(t.category.as_str()))
            .map(|t| t.category.clone())
            .collect()
    }
}

impl Deref for TransactionSet {
    type Target = [Transaction];

    fn deref(&self) -> &Self::Target {
        &self.transactions
    }
}

impl From<Vec<Transaction>> for TransactionSet {
    fn from(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }
}

impl FromIterator<Transaction> for TransactionSet {
    fn from_iter<I: IntoIterator<Item = Transaction>>(iter: I) -> Self {
        Self {
            transactions: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for TransactionSet {
    type Item = Transaction;
    type IntoIter = std::vec::IntoIter<Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.transactions.into_iter()
    }
}

impl<'a> IntoIterator for &'a TransactionSet {
    type Item = &'a Transaction;
    type IntoIter = std::slice::Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.transactions.iter()
    }
}
