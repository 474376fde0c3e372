//! Presentation formatting for amounts, counts and dates

use chrono::NaiveDate;
use std::fmt::Write;

use crate::config::DisplaySection;

/// Currency and date formatting settings taken from the config
#[derive(Debug, Clone)]
pub struct Formatter {
    prefix: String,
    decimals: usize,
    date_format: String,
}

impl Formatter {
    pub fn new(display: &DisplaySection) -> Self {
        Self {
            prefix: display.currency_prefix.clone(),
            decimals: display.decimals,
            date_format: display.date_format.clone(),
        }
    }

    /// `Rp 1,234,567`; negative values put the sign before the prefix
    pub fn currency(&self, value: f64) -> String {
        let fixed = format!("{:.*}", self.decimals, value.abs());
        let rounds_to_zero = fixed.bytes().all(|b| b == b'0' || b == b'.');
        let sign = if value < 0.0 && !rounds_to_zero { "-" } else { "" };
        let (int_part, frac_part) = match fixed.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (fixed.as_str(), None),
        };
        let grouped = group_thousands(int_part);
        match frac_part {
            Some(f) => format!("{sign}{}{grouped}.{f}", self.prefix),
            None => format!("{sign}{}{grouped}", self.prefix),
        }
    }

    /// Compact form for chart labels, e.g. `Rp 2.1M`, `Rp 450K`
    pub fn compact(&self, value: f64) -> String {
        let abs_value = value.abs();
        let sign = if value < 0.0 { "-" } else { "" };
        if abs_value >= 1_000_000_000.0 {
            format!("{sign}{}{:.1}B", self.prefix, abs_value / 1_000_000_000.0)
        } else if abs_value >= 1_000_000.0 {
            format!("{sign}{}{:.1}M", self.prefix, abs_value / 1_000_000.0)
        } else if abs_value >= 1_000.0 {
            format!("{sign}{}{:.0}K", self.prefix, abs_value / 1_000.0)
        } else {
            format!("{sign}{}{:.0}", self.prefix, abs_value)
        }
    }

    /// Falls back to ISO dates when `date_format` is not a strftime pattern
    pub fn date(&self, date: NaiveDate) -> String {
        let mut out = String::new();
        match write!(out, "{}", date.format(&self.date_format)) {
            Ok(()) => out,
            Err(_) => date.format("%Y-%m-%d").to_string(),
        }
    }
}

/// Integer with `,` thousands separators
pub fn format_number(n: usize) -> String {
    group_thousands(&n.to_string())
}

pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

fn group_thousands(digits: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rupiah() -> Formatter {
        Formatter::new(&DisplaySection::default())
    }

    #[test]
    fn test_currency_default_rupiah() {
        let f = rupiah();
        assert_eq!(f.currency(0.0), "Rp 0");
        assert_eq!(f.currency(999.0), "Rp 999");
        assert_eq!(f.currency(1_234_567.0), "Rp 1,234,567");
        assert_eq!(f.currency(-50.0), "-Rp 50");
        assert_eq!(f.currency(1499.6), "Rp 1,500");
    }

    #[test]
    fn test_currency_with_decimals() {
        let display = DisplaySection {
            currency_prefix: "$".to_string(),
            decimals: 2,
            ..DisplaySection::default()
        };
        let f = Formatter::new(&display);
        assert_eq!(f.currency(1234.5), "$1,234.50");
        assert_eq!(f.currency(-0.25), "-$0.25");
    }

    #[test]
    fn test_compact_and_numbers() {
        let f = rupiah();
        assert_eq!(f.compact(2_100_000.0), "Rp 2.1M");
        assert_eq!(f.compact(450_000.0), "Rp 450K");
        assert_eq!(f.compact(-12.0), "-Rp 12");
        assert_eq!(format_number(1_000), "1,000");
        assert_eq!(format_number(12), "12");
        assert_eq!(format_number(123_456_789), "123,456,789");
        assert_eq!(format_percent(33.333), "33.3%");
    }

    #[test]
    fn test_date_format() {
        let f = rupiah();
        let d = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(f.date(d), "05-01-2024");
    }

    #[test]
    fn test_unknown_date_specifier_falls_back_to_iso() {
        let display = DisplaySection {
            date_format: "%Q".to_string(),
            ..DisplaySection::default()
        };
        let f = Formatter::new(&display);
        let d = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(f.date(d), "2024-01-05");
    }

    #[test]
    fn test_negative_amount_rounding_to_zero_has_no_sign() {
        let f = rupiah();
        assert_eq!(f.currency(-0.4), "Rp 0");
        assert_eq!(f.currency(-0.6), "-Rp 1");

        let cents = Formatter::new(&DisplaySection {
            decimals: 2,
            ..DisplaySection::default()
        });
        assert_eq!(cents.currency(-0.004), "Rp 0.00");
        assert_eq!(cents.currency(-0.006), "-Rp 0.01");
    }
}
