/// Logical columns of a transaction export, resolved by header name.
///
/// Header matching is case-insensitive and accepts both the English names
/// written by [`crate::export`] and the Indonesian headers used by the
/// Indonesian bank exports (Tanggal, Kategori, Tipe, Jumlah, Deskripsi, Saldo).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Date,
    Category,
    Type,
    Amount,
    Description,
    Balance,
}

impl Column {
    pub const ALL: [Column; 6] = [
        Column::Date,
        Column::Category,
        Column::Type,
        Column::Amount,
        Column::Description,
        Column::Balance,
    ];

    /// Canonical header, as written on export
    pub fn name(&self) -> &'static str {
        match self {
            Column::Date => "date",
            Column::Category => "category",
            Column::Type => "type",
            Column::Amount => "amount",
            Column::Description => "description",
            Column::Balance => "balance",
        }
    }

    fn aliases(&self) -> &'static [&'static str] {
        match self {
            Column::Date => &["date", "tanggal"],
            Column::Category => &["category", "kategori"],
            Column::Type => &["type", "tipe"],
            Column::Amount => &["amount", "jumlah"],
            Column::Description => &["description", "deskripsi"],
            Column::Balance => &["balance", "saldo"],
        }
    }

    /// Description and balance may be missing from a source entirely
    pub fn is_required(&self) -> bool {
        !matches!(self, Column::Description | Column::Balance)
    }

    pub fn matches_header(&self, header: &str) -> bool {
        let header = header.trim().trim_start_matches('\u{feff}');
        self.aliases().iter().any(|a| a.eq_ignore_ascii_case(header))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_aliases() {
        assert!(Column::Date.matches_header("Tanggal"));
        assert!(Column::Date.matches_header(" DATE "));
        assert!(Column::Amount.matches_header("Jumlah"));
        assert!(Column::Date.matches_header("\u{feff}date"));
        assert!(!Column::Amount.matches_header("amount_usd"));
        assert!(Column::Type.is_required());
        assert!(!Column::Balance.is_required());
    }
}
