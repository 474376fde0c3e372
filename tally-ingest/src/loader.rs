//! Load a transaction CSV into a typed [`TransactionSet`].
//!
//! Expected layout (header row required, column order free):
//! date,category,type,amount,description,balance
//! 2024-01-05,Food,Debit,100,Restoran ABC,4900000

use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tally_core::{Transaction, TransactionSet, TxnType};

use crate::error::LoadError;
use crate::types::Column;

/// Load a CSV file. Fails without returning partial data on the first
/// unreadable or malformed row.
pub fn load_csv(path: impl AsRef<Path>) -> Result<TransactionSet, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let set = load_from_reader(file)?;
    tracing::info!(path = %path.display(), count = set.len(), "loaded transactions");
    Ok(set)
}

/// Load CSV data from any reader.
pub fn load_from_reader<R: Read>(reader: R) -> Result<TransactionSet, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let layout = Layout::resolve(rdr.headers()?)?;
    let amounts = AmountParser::new()?;

    let mut txns = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let txn = layout.parse_row(&record, line, &amounts)?;
        txns.push(txn);
    }

    Ok(TransactionSet::new(txns))
}

/// Column positions resolved from the header row
struct Layout {
    date: usize,
    category: usize,
    txn_type: usize,
    amount: usize,
    description: Option<usize>,
    balance: Option<usize>,
}

impl Layout {
    fn resolve(headers: &csv::StringRecord) -> Result<Self, LoadError> {
        let find = |col: Column| headers.iter().position(|h| col.matches_header(h));
        let require = |col: Column| find(col).ok_or(LoadError::MissingColumn(col.name()));

        Ok(Self {
            date: require(Column::Date)?,
            category: require(Column::Category)?,
            txn_type: require(Column::Type)?,
            amount: require(Column::Amount)?,
            description: find(Column::Description),
            balance: find(Column::Balance),
        })
    }

    fn parse_row(
        &self,
        record: &csv::StringRecord,
        line: u64,
        amounts: &AmountParser,
    ) -> Result<Transaction, LoadError> {
        let cell = |idx: usize| record.get(idx).unwrap_or("");
        // Category and description are kept verbatim; only parsed cells are trimmed
        let trimmed = |idx: usize| cell(idx).trim();
        let invalid = |field: &'static str, value: &str, reason: &str| LoadError::InvalidField {
            line,
            field,
            value: value.to_string(),
            reason: reason.to_string(),
        };

        let raw_date = trimmed(self.date);
        let date = parse_date(raw_date).ok_or_else(|| invalid("date", raw_date, "expected YYYY-MM-DD"))?;

        let category = cell(self.category);
        if category.trim().is_empty() {
            return Err(invalid("category", category, "category is required"));
        }

        let raw_type = trimmed(self.txn_type);
        let txn_type: TxnType = raw_type
            .parse()
            .map_err(|_| invalid("type", raw_type, "expected Debit or Credit"))?;

        let raw_amount = trimmed(self.amount);
        let amount = amounts
            .parse(raw_amount)
            .ok_or_else(|| invalid("amount", raw_amount, "not a number"))?;
        if amount < 0.0 {
            return Err(invalid("amount", raw_amount, "amount must be a non-negative magnitude"));
        }

        let description = self.description.map(cell).unwrap_or("").to_string();

        let balance = match self.balance.map(trimmed) {
            None | Some("") => None,
            Some(raw) => Some(
                amounts
                    .parse(raw)
                    .ok_or_else(|| invalid("balance", raw, "not a number"))?,
            ),
        };

        let mut txn = Transaction::new(date, category, txn_type, amount, description);
        txn.balance = balance;
        Ok(txn)
    }
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").map(|dt| dt.date()))
        .ok()
}

/// Parses amount cells like `1500`, `1,500.50` or `Rp 1,500`.
struct AmountParser {
    prefix: Regex,
}

impl AmountParser {
    fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            prefix: Regex::new(r"(?i)^(?:rp\.?|idr|usd|\$)\s*")?,
        })
    }

    fn parse(&self, raw: &str) -> Option<f64> {
        let stripped = self.prefix.replace(raw.trim(), "");
        let value: f64 = stripped.replace(',', "").parse().ok()?;
        value.is_finite().then_some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(text: &str) -> Result<TransactionSet, LoadError> {
        load_from_reader(text.as_bytes())
    }

    #[test]
    fn test_load_canonical_layout() {
        let text = "\
date,category,type,amount,description,balance
2024-01-05,Food,Debit,100,Restoran ABC,4900
2024-01-20,Salary,Credit,5000,Gaji Bulanan,
";
        let set = load(text).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set[0].date, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
        assert_eq!(set[0].txn_type, TxnType::Debit);
        assert_eq!(set[0].balance, Some(4900.0));
        assert_eq!(set[1].txn_type, TxnType::Credit);
        assert_eq!(set[1].balance, None);
    }

    #[test]
    fn test_load_indonesian_headers_and_kredit() {
        let text = "\
Tanggal,Kategori,Tipe,Jumlah,Deskripsi,Saldo
2024-01-20 00:00:00,Gaji,Kredit,\"Rp 5,000,000\",Gaji Bulanan,10000000
";
        let set = load(text).unwrap();
        assert_eq!(set[0].category, "Gaji");
        assert_eq!(set[0].txn_type, TxnType::Credit);
        assert_eq!(set[0].amount, 5_000_000.0);
    }

    #[test]
    fn test_optional_columns_may_be_absent() {
        let set = load("type,amount,date,category\nDebit,7.25,2024-03-01,Transport\n").unwrap();
        assert_eq!(set[0].description, "");
        assert_eq!(set[0].balance, None);
        assert_eq!(set[0].amount, 7.25);
    }

    #[test]
    fn test_parsed_cells_trimmed_text_cells_verbatim() {
        let text = "\
 date , category ,type,amount,description,balance
 2024-01-05 , Food , Debit , 100 ,  padded  , 4900 
";
        let set = load(text).unwrap();
        assert_eq!(set[0].date, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
        assert_eq!(set[0].txn_type, TxnType::Debit);
        assert_eq!(set[0].amount, 100.0);
        assert_eq!(set[0].balance, Some(4900.0));
        assert_eq!(set[0].category, " Food ");
        assert_eq!(set[0].description, "  padded  ");
    }

    #[test]
    fn test_header_only_is_empty_set() {
        assert!(load("date,category,type,amount\n").unwrap().is_empty());
    }

    #[test]
    fn test_missing_required_column() {
        let err = load("date,category,amount\n2024-01-01,Food,1\n").unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn("type")));
    }

    #[test]
    fn test_bad_rows_are_fatal_with_line_numbers() {
        let text = "\
date,category,type,amount
2024-01-01,Food,Debit,10
2024-13-01,Food,Debit,10
";
        match load(text).unwrap_err() {
            LoadError::InvalidField { line, field, .. } => {
                assert_eq!(line, 3);
                assert_eq!(field, "date");
            }
            other => panic!("unexpected error: {other}"),
        }

        let err = load("date,category,type,amount\n2024-01-01,Food,Transfer,10\n").unwrap_err();
        assert!(matches!(err, LoadError::InvalidField { field: "type", .. }));

        let err = load("date,category,type,amount\n2024-01-01,Food,Debit,-10\n").unwrap_err();
        assert!(matches!(err, LoadError::InvalidField { field: "amount", .. }));

        let err = load("date,category,type,amount\n2024-01-01,,Debit,10\n").unwrap_err();
        assert!(matches!(err, LoadError::InvalidField { field: "category", .. }));

        let err = load("date,category,type,amount\n2024-01-01,  ,Debit,10\n").unwrap_err();
        assert!(matches!(err, LoadError::InvalidField { field: "category", .. }));
    }

    #[test]
    fn test_ragged_row_is_csv_error() {
        let err = load("date,category,type,amount\n2024-01-01,Food\n").unwrap_err();
        assert!(matches!(err, LoadError::Csv(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_csv("/definitely/not/here.csv").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
