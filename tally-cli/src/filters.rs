use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, ValueEnum};
use tally_core::{DatePreset, FilterCriteria, TxnType};

/// Filter flags shared by every report subcommand
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// First date to include (YYYY-MM-DD)
    #[arg(long, conflicts_with = "preset")]
    pub from: Option<NaiveDate>,

    /// Last date to include (YYYY-MM-DD)
    #[arg(long, conflicts_with = "preset")]
    pub to: Option<NaiveDate>,

    /// Quick date range ending today
    #[arg(long, value_enum)]
    pub preset: Option<PresetArg>,

    /// Only these categories (repeatable)
    #[arg(long = "category", value_name = "NAME")]
    pub categories: Vec<String>,

    /// Select no categories at all
    #[arg(long, conflicts_with = "categories")]
    pub no_categories: bool,

    /// Only these types (repeatable): debit, credit
    #[arg(long = "type", value_name = "TYPE")]
    pub types: Vec<TxnType>,

    /// Select no types at all
    #[arg(long, conflicts_with = "types")]
    pub no_types: bool,

    /// Minimum amount (inclusive)
    #[arg(long)]
    pub min: Option<f64>,

    /// Maximum amount (inclusive)
    #[arg(long)]
    pub max: Option<f64>,

    /// Case-insensitive text to look for in descriptions
    #[arg(long)]
    pub search: Option<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresetArg {
    Today,
    #[value(name = "7d")]
    Days7,
    #[value(name = "30d")]
    Days30,
    #[value(name = "90d")]
    Days90,
}

impl From<PresetArg> for DatePreset {
    fn from(p: PresetArg) -> Self {
        match p {
            PresetArg::Today => DatePreset::Today,
            PresetArg::Days7 => DatePreset::Last7Days,
            PresetArg::Days30 => DatePreset::Last30Days,
            PresetArg::Days90 => DatePreset::Last90Days,
        }
    }
}

impl FilterArgs {
    /// Build validated criteria; presets are resolved against `today`.
    pub fn to_criteria(&self, today: NaiveDate) -> Result<FilterCriteria> {
        let (start, end) = match self.preset {
            Some(p) => {
                let (s, e) = DatePreset::from(p).range(today);
                (Some(s), Some(e))
            }
            None => (self.from, self.to),
        };

        let mut criteria = FilterCriteria::all()
            .with_dates(start, end)
            .with_amount_range(self.min, self.max);

        if self.no_categories {
            criteria = criteria.with_categories(Vec::<String>::new());
        } else if !self.categories.is_empty() {
            criteria = criteria.with_categories(self.categories.iter().cloned());
        }

        if self.no_types {
            criteria = criteria.with_types(Vec::<TxnType>::new());
        } else if !self.types.is_empty() {
            criteria = criteria.with_types(self.types.iter().copied());
        }

        if let Some(text) = &self.search {
            criteria = criteria.with_search(text.clone());
        }

        criteria.validate().context("invalid filter")?;
        Ok(criteria)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        filters: FilterArgs,
    }

    fn parse(args: &[&str]) -> FilterArgs {
        let mut argv = vec!["tally"];
        argv.extend_from_slice(args);
        Harness::parse_from(argv).filters
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 31).unwrap()
    }

    #[test]
    fn test_no_flags_is_unrestricted() {
        let c = parse(&[]).to_criteria(today()).unwrap();
        assert!(c.is_unrestricted());
    }

    #[test]
    fn test_absent_versus_empty_sets() {
        let c = parse(&["--no-categories", "--no-types"]).to_criteria(today()).unwrap();
        assert_eq!(c.categories, Some(Default::default()));
        assert_eq!(c.types, Some(Default::default()));

        let c = parse(&["--category", "Food", "--category", "Rent", "--type", "kredit"])
            .to_criteria(today())
            .unwrap();
        assert_eq!(c.categories.unwrap().len(), 2);
        assert!(c.types.unwrap().contains(&TxnType::Credit));
    }

    #[test]
    fn test_preset_resolves_against_today() {
        let c = parse(&["--preset", "7d"]).to_criteria(today()).unwrap();
        assert_eq!(c.start_date, NaiveDate::from_ymd_opt(2024, 3, 24));
        assert_eq!(c.end_date, Some(today()));
    }

    #[test]
    fn test_inverted_range_is_rejected() {
        assert!(parse(&["--min", "100", "--max", "10"]).to_criteria(today()).is_err());
        assert!(
            parse(&["--from", "2024-02-01", "--to", "2024-01-01"])
                .to_criteria(today())
                .is_err()
        );
    }

    #[test]
    fn test_preset_conflicts_with_explicit_dates() {
        let argv = ["tally", "--preset", "today", "--from", "2024-01-01"];
        assert!(Harness::try_parse_from(argv).is_err());
    }
}
