//! tally-core: transaction model, filter engine and aggregation engine

pub mod aggregate;
pub mod error;
pub mod filter;
pub mod ordering;
pub mod stats;
pub mod transaction;

pub use aggregate::{
    category_month_matrix, category_shares, category_summary, compare_periods, daily_summary,
    monthly_summary, summarize, type_breakdown, CategoryDelta, CategoryMonthMatrix,
    CategoryShare, CategorySummaryRow, DailyBucket, MonthlyBucket, PeriodComparison,
    PeriodSummary, SummaryResult, TypeTotal,
};
pub use error::{FilterError, StatsError};
pub use filter::{apply_filters, DatePreset, FilterCriteria};
pub use ordering::{recent_transactions, sort_transactions, top_transactions, SortKey, SortOrder};
pub use stats::{descriptive_stats, histogram, DescriptiveStats, HistogramBin};
pub use transaction::{MonthKey, Transaction, TransactionSet, TxnType};
