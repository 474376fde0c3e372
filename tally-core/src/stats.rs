//! Descriptive statistics over transaction amounts

use serde::Serialize;

use crate::error::StatsError;
use crate::transaction::Transaction;

/// Summary statistics of the `amount` column, regardless of type
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DescriptiveStats {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
    /// Sample standard deviation (n - 1); `None` for a single value
    pub std: Option<f64>,
    /// 25th percentile
    pub q1: f64,
    /// 75th percentile
    pub q3: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HistogramBin {
    /// Inclusive lower edge
    pub lower: f64,
    /// Upper edge; exclusive except for the last bin
    pub upper: f64,
    pub count: usize,
}

/// Mean, median, spread and quartiles of the amounts.
///
/// Fails with [`StatsError::EmptyInput`] on an empty slice: there is no
/// correct numeric answer for "no data", so callers must guard for it.
pub fn descriptive_stats(transactions: &[Transaction]) -> Result<DescriptiveStats, StatsError> {
    if transactions.is_empty() {
        return Err(StatsError::EmptyInput);
    }

    let mut amounts: Vec<f64> = transactions.iter().map(|t| t.amount).collect();
    amounts.sort_by(f64::total_cmp);

    let n = amounts.len();
    let mean = amounts.iter().sum::<f64>() / n as f64;
    let std = (n > 1).then(|| {
        let ss: f64 = amounts.iter().map(|a| (a - mean).powi(2)).sum();
        (ss / (n - 1) as f64).sqrt()
    });

    Ok(DescriptiveStats {
        count: n,
        mean,
        median: quantile_sorted(&amounts, 0.5),
        min: amounts[0],
        max: amounts[n - 1],
        std,
        q1: quantile_sorted(&amounts, 0.25),
        q3: quantile_sorted(&amounts, 0.75),
    })
}

/// Linear interpolation between closest ranks. `sorted` must be non-empty.
fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}

/// Equal-width histogram of the amounts over `[min, max]`.
///
/// When every amount is equal there is nothing to spread, so a single bin
/// holding all of them is returned.
pub fn histogram(transactions: &[Transaction], bins: usize) -> Result<Vec<HistogramBin>, StatsError> {
    if bins == 0 {
        return Err(StatsError::InvalidBinCount);
    }
    let stats = descriptive_stats(transactions)?;
    let (min, max) = (stats.min, stats.max);

    if max <= min {
        return Ok(vec![HistogramBin {
            lower: min,
            upper: max,
            count: transactions.len(),
        }]);
    }

    let width = (max - min) / bins as f64;
    let mut out: Vec<HistogramBin> = (0..bins)
        .map(|i| HistogramBin {
            lower: min + width * i as f64,
            upper: if i + 1 == bins { max } else { min + width * (i + 1) as f64 },
            count: 0,
        })
        .collect();

    for txn in transactions {
        let idx = (((txn.amount - min) / width) as usize).min(bins - 1);
        out[idx].count += 1;
    }
    Ok(out)
}
