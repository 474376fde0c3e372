//! Write a transaction set back out as CSV.
//!
//! The layout is the canonical one [`crate::loader`] reads, so an exported
//! file loads back to the same transactions.

use std::fs::File;
use std::io::Write;
use std::path::Path;
use tally_core::Transaction;

use crate::error::ExportError;
use crate::types::Column;

pub fn write_csv<W: Write>(writer: W, transactions: &[Transaction]) -> Result<(), ExportError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(Column::ALL.iter().map(|c| c.name()))?;

    for txn in transactions {
        wtr.write_record([
            txn.date.format("%Y-%m-%d").to_string(),
            txn.category.clone(),
            txn.txn_type.label().to_string(),
            txn.amount.to_string(),
            txn.description.clone(),
            txn.balance.map(|b| b.to_string()).unwrap_or_default(),
        ])?;
    }

    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}

pub fn export_csv(path: impl AsRef<Path>, transactions: &[Transaction]) -> Result<(), ExportError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    write_csv(file, transactions)?;
    tracing::info!(path = %path.display(), count = transactions.len(), "exported transactions");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tally_core::TxnType;

    #[test]
    fn test_header_and_rows() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        let txns = vec![
            Transaction::new(date, "Food", TxnType::Debit, 50.0, "Warteg, Jl. Sudirman")
                .with_balance(4850.5),
            Transaction::new(date, "Salary", TxnType::Credit, 5000.0, "Gaji"),
        ];
        let mut buf = Vec::new();
        write_csv(&mut buf, &txns).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "date,category,type,amount,description,balance");
        assert_eq!(lines[1], "2024-02-01,Food,Debit,50,\"Warteg, Jl. Sudirman\",4850.5");
        assert_eq!(lines[2], "2024-02-01,Salary,Credit,5000,Gaji,");
    }
}
