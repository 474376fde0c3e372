use chrono::{Duration, NaiveDate};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tally_core::{
    apply_filters, category_summary, descriptive_stats, monthly_summary, summarize,
    FilterCriteria, StatsError, Transaction, TxnType,
};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn txn(date: NaiveDate, cat: &str, ty: TxnType, amount: f64, desc: &str) -> Transaction {
    Transaction::new(date, cat, ty, amount, desc)
}

fn scenario() -> Vec<Transaction> {
    vec![
        txn(d(2024, 1, 5), "Food", TxnType::Debit, 100.0, "Restoran ABC"),
        txn(d(2024, 1, 20), "Salary", TxnType::Credit, 5000.0, "Gaji Bulanan"),
        txn(d(2024, 2, 1), "Food", TxnType::Debit, 50.0, "Warteg"),
    ]
}

/// A spread of ledgers covering several months, categories and both types,
/// built deterministically so assertions stay reproducible.
fn fixtures() -> Vec<Vec<Transaction>> {
    let cats = ["Food", "Transport", "Bills", "Salary", "Investasi", "Lainnya"];
    let mut sets = vec![Vec::new(), scenario()];
    for seed in 1..=5u64 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let len = rng.random_range(10..50usize);
        let set = (0..len)
            .map(|_| {
                let date = d(2023, 11, 1) + Duration::days(rng.random_range(1..=200i64));
                let cat = cats[rng.random_range(0..cats.len())];
                let ty = if rng.random_bool(1.0 / 3.0) { TxnType::Credit } else { TxnType::Debit };
                let amount = rng.random_range(0..100_000u32) as f64 / 4.0;
                let desc = format!("Item {}", rng.random_range(0..7u8));
                txn(date, cat, ty, amount, &desc)
            })
            .collect();
        sets.push(set);
    }
    sets
}

fn criteria_grid() -> Vec<FilterCriteria> {
    vec![
        FilterCriteria::all(),
        FilterCriteria::all().with_types([TxnType::Debit]),
        FilterCriteria::all().with_categories(["Food", "Bills"]),
        FilterCriteria::all().with_dates(Some(d(2024, 1, 1)), Some(d(2024, 2, 15))),
        FilterCriteria::all().with_amount_range(Some(100.0), Some(10_000.0)),
        FilterCriteria::all().with_search("item 3"),
        FilterCriteria::all()
            .with_types([TxnType::Credit])
            .with_dates(Some(d(2023, 12, 1)), None)
            .with_search("ITEM"),
    ]
}

#[test]
fn test_balance_is_income_minus_expense() {
    for set in fixtures() {
        let s = summarize(&set);
        assert_eq!(s.total_income - s.total_expense, s.balance);
        assert!(s.total_income >= 0.0 && s.total_expense >= 0.0);
        assert_eq!(s.transaction_count, set.len());
    }
}

#[test]
fn test_category_summary_partitions_input() {
    for set in fixtures() {
        let rows = category_summary(&set);
        let count: usize = rows.iter().map(|r| r.transaction_count).sum();
        assert_eq!(count, set.len());
        for w in rows.windows(2) {
            assert!(w[0].total_amount >= w[1].total_amount, "rows not sorted desc");
        }
    }
}

#[test]
fn test_monthly_summary_partitions_input() {
    for set in fixtures() {
        let buckets = monthly_summary(&set);
        let count: usize = buckets.iter().map(|b| b.transaction_count).sum();
        assert_eq!(count, set.len());

        let s = summarize(&set);
        let income: f64 = buckets.iter().map(|b| b.income).sum();
        let expense: f64 = buckets.iter().map(|b| b.expense).sum();
        assert!((income - s.total_income).abs() < 1e-6);
        assert!((expense - s.total_expense).abs() < 1e-6);

        for w in buckets.windows(2) {
            assert!(w[0].month < w[1].month, "months not ascending");
        }
        for b in &buckets {
            assert_eq!(b.balance, b.income - b.expense);
        }
    }
}

#[test]
fn test_filtering_is_idempotent_and_monotonic() {
    for set in fixtures() {
        for c in criteria_grid() {
            let once = apply_filters(&set, &c);
            let twice = apply_filters(&once, &c);
            assert_eq!(once, twice);
            assert!(once.len() <= set.len());
        }
    }
}

#[test]
fn test_filter_does_not_touch_input() {
    let set = scenario();
    let before = set.clone();
    let _ = apply_filters(&set, &FilterCriteria::all().with_types([TxnType::Credit]));
    assert_eq!(set, before);
}

#[test]
fn test_empty_category_set_excludes_everything() {
    for set in fixtures() {
        let c = FilterCriteria::all().with_categories(Vec::<String>::new());
        assert!(apply_filters(&set, &c).is_empty());
    }
}

#[test]
fn test_stats_conventions() {
    assert_eq!(descriptive_stats(&[]), Err(StatsError::EmptyInput));

    let single = vec![txn(d(2024, 1, 1), "Food", TxnType::Debit, 12.5, "")];
    let s = descriptive_stats(&single).unwrap();
    assert_eq!((s.mean, s.median, s.max, s.min), (12.5, 12.5, 12.5, 12.5));
    assert_eq!(s.std, None);
}

#[test]
fn test_end_to_end_scenario() {
    let t = scenario();

    let s = summarize(&t);
    assert_eq!(
        (s.total_income, s.total_expense, s.balance, s.transaction_count),
        (5000.0, 150.0, 4850.0, 3)
    );

    let cats = category_summary(&t);
    let cats: Vec<_> = cats
        .iter()
        .map(|r| (r.category.as_str(), r.total_amount, r.transaction_count))
        .collect();
    assert_eq!(cats, vec![("Salary", 5000.0, 1), ("Food", 150.0, 2)]);

    let months = monthly_summary(&t);
    let months: Vec<_> = months
        .iter()
        .map(|b| (b.month.to_string(), b.income, b.expense, b.balance))
        .collect();
    assert_eq!(
        months,
        vec![
            ("2024-01".to_string(), 5000.0, 100.0, 4900.0),
            ("2024-02".to_string(), 0.0, 50.0, -50.0),
        ]
    );
}

#[test]
fn test_debit_filter_scenario() {
    let t = scenario();
    let out = apply_filters(&t, &FilterCriteria::all().with_types([TxnType::Debit]));
    assert_eq!(out.as_slice(), &[t[0].clone(), t[2].clone()]);
}
