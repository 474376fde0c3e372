//! Plain-text and JSON reports for the non-interactive subcommands

use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;
use tally_core::{
    category_shares, category_summary, compare_periods, daily_summary, descriptive_stats,
    histogram, monthly_summary, summarize, top_transactions, type_breakdown, StatsError,
    Transaction, TxnType,
};

use crate::format::{format_number, format_percent, Formatter};

const EMPTY_MESSAGE: &str = "No transactions match this filter.";

fn emit_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).context("serialize report")?;
    writeln!(out)?;
    Ok(())
}

pub fn summary<W: Write>(out: &mut W, txns: &[Transaction], fmt: &Formatter, json: bool) -> Result<()> {
    let s = summarize(txns);
    if json {
        return emit_json(out, &s);
    }
    writeln!(out, "Transactions : {}", format_number(s.transaction_count))?;
    writeln!(out, "Income       : {}", fmt.currency(s.total_income))?;
    writeln!(out, "Expense      : {}", fmt.currency(s.total_expense))?;
    writeln!(out, "Balance      : {}", fmt.currency(s.balance))?;
    for t in type_breakdown(txns) {
        writeln!(
            out,
            "  {:<7} {:>5} txns  {}",
            t.txn_type.label(),
            t.transaction_count,
            fmt.currency(t.total_amount)
        )?;
    }
    Ok(())
}

/// Category totals, largest first. `expense_only` keeps debits only.
pub fn categories<W: Write>(
    out: &mut W,
    txns: &[Transaction],
    fmt: &Formatter,
    expense_only: bool,
    json: bool,
) -> Result<()> {
    let rows = if expense_only {
        let debits: Vec<Transaction> = txns.iter().filter(|t| t.is_debit()).cloned().collect();
        category_summary(&debits)
    } else {
        category_summary(txns)
    };
    let shares = category_shares(&rows);
    if json {
        return emit_json(out, &shares);
    }
    if shares.is_empty() {
        writeln!(out, "{EMPTY_MESSAGE}")?;
        return Ok(());
    }
    writeln!(out, "{:<22} {:>6} {:>18} {:>7}", "Category", "Count", "Total", "Share")?;
    for s in &shares {
        writeln!(
            out,
            "{:<22} {:>6} {:>18} {:>7}",
            s.category,
            s.transaction_count,
            fmt.currency(s.total_amount),
            format_percent(s.percent)
        )?;
    }
    Ok(())
}

pub fn monthly<W: Write>(out: &mut W, txns: &[Transaction], fmt: &Formatter, json: bool) -> Result<()> {
    let buckets = monthly_summary(txns);
    if json {
        return emit_json(out, &buckets);
    }
    if buckets.is_empty() {
        writeln!(out, "{EMPTY_MESSAGE}")?;
        return Ok(());
    }
    writeln!(
        out,
        "{:<8} {:>18} {:>18} {:>18} {:>6}",
        "Month", "Income", "Expense", "Balance", "Count"
    )?;
    for b in &buckets {
        writeln!(
            out,
            "{:<8} {:>18} {:>18} {:>18} {:>6}",
            b.month.to_string(),
            fmt.currency(b.income),
            fmt.currency(b.expense),
            fmt.currency(b.balance),
            b.transaction_count
        )?;
    }
    Ok(())
}

pub fn daily<W: Write>(out: &mut W, txns: &[Transaction], fmt: &Formatter, json: bool) -> Result<()> {
    let days = daily_summary(txns);
    if json {
        return emit_json(out, &days);
    }
    if days.is_empty() {
        writeln!(out, "{EMPTY_MESSAGE}")?;
        return Ok(());
    }
    writeln!(out, "{:<12} {:>18} {:>6}", "Date", "Total", "Count")?;
    for d in &days {
        writeln!(
            out,
            "{:<12} {:>18} {:>6}",
            fmt.date(d.date),
            fmt.currency(d.total_amount),
            d.transaction_count
        )?;
    }
    Ok(())
}

/// Descriptive statistics; an empty selection prints a notice (or `null`).
pub fn stats<W: Write>(out: &mut W, txns: &[Transaction], fmt: &Formatter, json: bool) -> Result<()> {
    let stats = match descriptive_stats(txns) {
        Ok(s) => s,
        Err(StatsError::EmptyInput) => {
            if json {
                return emit_json(out, &None::<()>);
            }
            writeln!(out, "{EMPTY_MESSAGE}")?;
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };
    if json {
        return emit_json(out, &stats);
    }
    writeln!(out, "Count  : {}", format_number(stats.count))?;
    writeln!(out, "Mean   : {}", fmt.currency(stats.mean))?;
    writeln!(out, "Median : {}", fmt.currency(stats.median))?;
    writeln!(out, "Min    : {}", fmt.currency(stats.min))?;
    writeln!(out, "Q1     : {}", fmt.currency(stats.q1))?;
    writeln!(out, "Q3     : {}", fmt.currency(stats.q3))?;
    writeln!(out, "Max    : {}", fmt.currency(stats.max))?;
    match stats.std {
        Some(std) => writeln!(out, "Std    : {}", fmt.currency(std))?,
        None => writeln!(out, "Std    : n/a")?,
    }
    Ok(())
}

pub fn top<W: Write>(
    out: &mut W,
    txns: &[Transaction],
    fmt: &Formatter,
    n: usize,
    txn_type: Option<TxnType>,
    json: bool,
) -> Result<()> {
    let top = top_transactions(txns, n, txn_type);
    if json {
        return emit_json(out, &top);
    }
    if top.is_empty() {
        writeln!(out, "{EMPTY_MESSAGE}")?;
        return Ok(());
    }
    for (i, t) in top.iter().enumerate() {
        writeln!(
            out,
            "{:>3}. {:<12} {:<20} {:<7} {:>18}  {}",
            i + 1,
            fmt.date(t.date),
            t.category,
            t.txn_type.label(),
            fmt.currency(t.amount),
            t.description
        )?;
    }
    Ok(())
}

pub fn compare<W: Write>(out: &mut W, txns: &[Transaction], fmt: &Formatter, json: bool) -> Result<()> {
    let Some(cmp) = compare_periods(txns) else {
        if json {
            return emit_json(out, &None::<()>);
        }
        writeln!(out, "Need at least two transactions to compare periods.")?;
        return Ok(());
    };
    if json {
        return emit_json(out, &cmp);
    }
    for (label, p) in [("First half", &cmp.first), ("Second half", &cmp.second)] {
        writeln!(
            out,
            "{label:<12} {} .. {}  income {}  expense {}  balance {}",
            fmt.date(p.start),
            fmt.date(p.end),
            fmt.currency(p.summary.total_income),
            fmt.currency(p.summary.total_expense),
            fmt.currency(p.summary.balance)
        )?;
    }
    writeln!(out)?;
    writeln!(out, "{:<22} {:>18} {:>18} {:>18}", "Category", "First", "Second", "Change")?;
    for c in &cmp.categories {
        writeln!(
            out,
            "{:<22} {:>18} {:>18} {:>18}",
            c.category,
            fmt.currency(c.first),
            fmt.currency(c.second),
            fmt.currency(c.change())
        )?;
    }
    Ok(())
}

pub fn histogram_report<W: Write>(
    out: &mut W,
    txns: &[Transaction],
    fmt: &Formatter,
    bins: usize,
    json: bool,
) -> Result<()> {
    let hist = match histogram(txns, bins) {
        Ok(h) => h,
        Err(StatsError::EmptyInput) => {
            if json {
                return emit_json(out, &None::<()>);
            }
            writeln!(out, "{EMPTY_MESSAGE}")?;
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };
    if json {
        return emit_json(out, &hist);
    }
    let widest = hist.iter().map(|b| b.count).max().unwrap_or(0).max(1);
    for b in &hist {
        let bar = "#".repeat(b.count * 40 / widest);
        writeln!(
            out,
            "{:>16} - {:<16} {:>5} {bar}",
            fmt.currency(b.lower),
            fmt.currency(b.upper),
            b.count
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DisplaySection;
    use chrono::NaiveDate;

    fn fixture() -> Vec<Transaction> {
        let d = |day| NaiveDate::from_ymd_opt(2024, 1, day).unwrap();
        vec![
            Transaction::new(d(1), "Gaji", TxnType::Credit, 5_000_000.0, "Gaji bulanan"),
            Transaction::new(d(2), "Transport", TxnType::Debit, 25_000.0, "Ojek"),
            Transaction::new(d(3), "Belanja", TxnType::Debit, 150_000.0, "Supermarket"),
        ]
    }

    fn render(f: impl Fn(&mut Vec<u8>, &Formatter) -> Result<()>) -> String {
        let fmt = Formatter::new(&DisplaySection::default());
        let mut buf = Vec::new();
        f(&mut buf, &fmt).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_summary_text() {
        let txns = fixture();
        let text = render(|out, fmt| summary(out, &txns, fmt, false));
        assert!(text.contains("Income       : Rp 5,000,000"));
        assert!(text.contains("Expense      : Rp 175,000"));
        assert!(text.contains("Balance      : Rp 4,825,000"));
    }

    #[test]
    fn test_summary_json() {
        let txns = fixture();
        let text = render(|out, fmt| summary(out, &txns, fmt, true));
        let v: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(v["transaction_count"], 3);
        assert_eq!(v["balance"], 4_825_000.0);
    }

    #[test]
    fn test_expense_only_categories() {
        let txns = fixture();
        let text = render(|out, fmt| categories(out, &txns, fmt, true, false));
        assert!(!text.contains("Gaji"));
        let belanja = text.find("Belanja").unwrap();
        let transport = text.find("Transport").unwrap();
        assert!(belanja < transport);
    }

    #[test]
    fn test_empty_selection_does_not_fail() {
        let txns: Vec<Transaction> = Vec::new();
        assert!(render(|out, fmt| stats(out, &txns, fmt, false)).contains(EMPTY_MESSAGE));
        assert_eq!(render(|out, fmt| stats(out, &txns, fmt, true)).trim(), "null");
        assert!(render(|out, fmt| histogram_report(out, &txns, fmt, 5, false)).contains(EMPTY_MESSAGE));
        assert!(render(|out, fmt| compare(out, &txns, fmt, false)).contains("at least two"));
    }

    #[test]
    fn test_zero_bins_is_an_error() {
        let txns = fixture();
        let fmt = Formatter::new(&DisplaySection::default());
        let mut buf = Vec::new();
        assert!(histogram_report(&mut buf, &txns, &fmt, 0, false).is_err());
    }

    #[test]
    fn test_top_lists_largest_first() {
        let txns = fixture();
        let text = render(|out, fmt| top(out, &txns, fmt, 2, Some(TxnType::Debit), false));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Supermarket"));
    }
}
