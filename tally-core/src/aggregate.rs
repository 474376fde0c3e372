//! Aggregation engine: summaries, category/month/day rollups and period
//! comparison over an (already filtered) transaction slice.
//!
//! All functions are pure. Magnitude sums (`total_income`, `expense`, ...)
//! are always non-negative; only the `balance` fields carry a sign.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

use crate::transaction::{MonthKey, Transaction, TxnType};

/// Income/expense totals over a transaction set
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SummaryResult {
    pub total_income: f64,
    pub total_expense: f64,
    pub balance: f64,
    pub transaction_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySummaryRow {
    pub category: String,
    pub total_amount: f64,
    pub transaction_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyBucket {
    pub month: MonthKey,
    pub income: f64,
    pub expense: f64,
    pub balance: f64,
    pub transaction_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyBucket {
    pub date: NaiveDate,
    pub total_amount: f64,
    pub transaction_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeTotal {
    pub txn_type: TxnType,
    pub total_amount: f64,
    pub transaction_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    pub category: String,
    pub total_amount: f64,
    pub transaction_count: usize,
    /// Share of the grand total in percent (0..=100)
    pub percent: f64,
}

/// Category x month pivot of summed amounts
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CategoryMonthMatrix {
    pub categories: Vec<String>,
    pub months: Vec<MonthKey>,
    /// Row-major: `cells[row][col]` is the total for
    /// `categories[row]` in `months[col]`
    pub cells: Vec<Vec<f64>>,
}

impl CategoryMonthMatrix {
    pub fn get(&self, category: &str, month: MonthKey) -> Option<f64> {
        let row = self.categories.iter().position(|c| c == category)?;
        let col = self.months.iter().position(|m| *m == month)?;
        Some(self.cells[row][col])
    }

    /// Largest cell value, 0.0 for an empty matrix
    pub fn max_cell(&self) -> f64 {
        self.cells
            .iter()
            .flatten()
            .copied()
            .fold(0.0_f64, f64::max)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodSummary {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub summary: SummaryResult,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryDelta {
    pub category: String,
    pub first: f64,
    pub second: f64,
}

impl CategoryDelta {
    pub fn change(&self) -> f64 {
        self.second - self.first
    }
}

/// First half vs second half of a date-sorted set
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodComparison {
    pub first: PeriodSummary,
    pub second: PeriodSummary,
    pub categories: Vec<CategoryDelta>,
}

/// Global income/expense/balance/count.
pub fn summarize(transactions: &[Transaction]) -> SummaryResult {
    let mut summary = SummaryResult::default();
    for txn in transactions {
        match txn.txn_type {
            TxnType::Credit => summary.total_income += txn.amount,
            TxnType::Debit => summary.total_expense += txn.amount,
        }
    }
    summary.balance = summary.total_income - summary.total_expense;
    summary.transaction_count = transactions.len();
    summary
}

/// Sum and count per category, largest total first.
///
/// Categories are grouped exactly as spelled. Equal totals keep the order
/// in which their category first appears in the input. No type filter is
/// applied; pass a debit-only slice for "expense by category".
pub fn category_summary(transactions: &[Transaction]) -> Vec<CategorySummaryRow> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut rows: Vec<CategorySummaryRow> = Vec::new();

    for txn in transactions {
        let idx = *index.entry(txn.category.as_str()).or_insert_with(|| {
            rows.push(CategorySummaryRow {
                category: txn.category.clone(),
                total_amount: 0.0,
                transaction_count: 0,
            });
            rows.len() - 1
        });
        rows[idx].total_amount += txn.amount;
        rows[idx].transaction_count += 1;
    }

    // stable sort: ties stay in first-seen order
    rows.sort_by(|a, b| b.total_amount.total_cmp(&a.total_amount));
    rows
}

/// Income/expense per calendar month, oldest month first.
///
/// Only months holding at least one transaction appear; gaps in the
/// timeline are not filled in.
pub fn monthly_summary(transactions: &[Transaction]) -> Vec<MonthlyBucket> {
    let mut buckets: BTreeMap<MonthKey, MonthlyBucket> = BTreeMap::new();

    for txn in transactions {
        let month = txn.month();
        let bucket = buckets.entry(month).or_insert_with(|| MonthlyBucket {
            month,
            income: 0.0,
            expense: 0.0,
            balance: 0.0,
            transaction_count: 0,
        });
        match txn.txn_type {
            TxnType::Credit => bucket.income += txn.amount,
            TxnType::Debit => bucket.expense += txn.amount,
        }
        bucket.transaction_count += 1;
    }

    buckets
        .into_values()
        .map(|mut b| {
            b.balance = b.income - b.expense;
            b
        })
        .collect()
}

/// Total amount and count per day, oldest day first.
pub fn daily_summary(transactions: &[Transaction]) -> Vec<DailyBucket> {
    let mut days: BTreeMap<NaiveDate, (f64, usize)> = BTreeMap::new();
    for txn in transactions {
        let entry = days.entry(txn.date).or_insert((0.0, 0));
        entry.0 += txn.amount;
        entry.1 += 1;
    }
    days.into_iter()
        .map(|(date, (total_amount, transaction_count))| DailyBucket {
            date,
            total_amount,
            transaction_count,
        })
        .collect()
}

/// Sum and count per transaction type present, debit first.
pub fn type_breakdown(transactions: &[Transaction]) -> Vec<TypeTotal> {
    TxnType::ALL
        .iter()
        .filter_map(|&txn_type| {
            let (total_amount, transaction_count) = transactions
                .iter()
                .filter(|t| t.txn_type == txn_type)
                .fold((0.0, 0), |(sum, n), t| (sum + t.amount, n + 1));
            (transaction_count > 0).then_some(TypeTotal {
                txn_type,
                total_amount,
                transaction_count,
            })
        })
        .collect()
}

/// Attach a percentage of the grand total to each category row.
pub fn category_shares(rows: &[CategorySummaryRow]) -> Vec<CategoryShare> {
    let total: f64 = rows.iter().map(|r| r.total_amount).sum();
    rows.iter()
        .map(|r| CategoryShare {
            category: r.category.clone(),
            total_amount: r.total_amount,
            transaction_count: r.transaction_count,
            percent: if total > 0.0 {
                r.total_amount / total * 100.0
            } else {
                0.0
            },
        })
        .collect()
}

/// Pivot amounts into a category x month grid; absent combinations are 0.
pub fn category_month_matrix(transactions: &[Transaction]) -> CategoryMonthMatrix {
    let categories: Vec<String> = category_summary(transactions)
        .into_iter()
        .map(|r| r.category)
        .collect();
    let months: Vec<MonthKey> = monthly_summary(transactions)
        .into_iter()
        .map(|b| b.month)
        .collect();

    let row_of: HashMap<&str, usize> = categories
        .iter()
        .enumerate()
        .map(|(i, c)| (c.as_str(), i))
        .collect();
    let col_of: HashMap<MonthKey, usize> =
        months.iter().enumerate().map(|(i, m)| (*m, i)).collect();

    let mut cells = vec![vec![0.0; months.len()]; categories.len()];
    for txn in transactions {
        let row = row_of[txn.category.as_str()];
        let col = col_of[&txn.month()];
        cells[row][col] += txn.amount;
    }

    CategoryMonthMatrix {
        categories,
        months,
        cells,
    }
}

/// Split the set chronologically into two halves and compare them.
///
/// The date-sorted set is cut at `len / 2`. Returns `None` when there are
/// fewer than two transactions to split.
pub fn compare_periods(transactions: &[Transaction]) -> Option<PeriodComparison> {
    if transactions.len() < 2 {
        return None;
    }

    let mut sorted: Vec<Transaction> = transactions.to_vec();
    sorted.sort_by_key(|t| t.date);
    let (first, second) = sorted.split_at(sorted.len() / 2);

    let first_rows = category_summary(first);
    let second_rows = category_summary(second);

    let mut categories: Vec<CategoryDelta> = first_rows
        .iter()
        .map(|r| CategoryDelta {
            category: r.category.clone(),
            first: r.total_amount,
            second: 0.0,
        })
        .collect();
    for row in &second_rows {
        match categories.iter_mut().find(|c| c.category == row.category) {
            Some(existing) => existing.second = row.total_amount,
            None => categories.push(CategoryDelta {
                category: row.category.clone(),
                first: 0.0,
                second: row.total_amount,
            }),
        }
    }

    Some(PeriodComparison {
        first: period_of(first)?,
        second: period_of(second)?,
        categories,
    })
}

fn period_of(sorted: &[Transaction]) -> Option<PeriodSummary> {
    Some(PeriodSummary {
        start: sorted.first()?.date,
        end: sorted.last()?.date,
        summary: summarize(sorted),
    })
}
