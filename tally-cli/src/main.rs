use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use std::io;
use std::path::{Path, PathBuf};
use tally_core::{apply_filters, TransactionSet};
use tally_ingest::{export_csv, generate, load_csv, SampleConfig};

mod config;
mod filters;
mod format;
mod logging;
mod report;
mod state;
mod tui;

use filters::FilterArgs;
use format::Formatter;

#[derive(Parser, Debug)]
#[command(
    name = "tally",
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("TALLY_BUILD_SHA"), ")"),
    about = "Bank transaction analytics dashboard"
)]
struct Cli {
    /// Transactions CSV (overrides `[data] path` from the config)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Args, Debug, Clone, Default)]
struct ReportArgs {
    #[command(flatten)]
    filters: FilterArgs,

    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive dashboard (default)
    Dashboard {
        #[command(flatten)]
        filters: FilterArgs,

        /// Where `e` writes the current view
        #[arg(long, default_value = "tally_export.csv")]
        export_to: PathBuf,
    },

    /// Income, expense and balance totals
    Summary(ReportArgs),

    /// Totals per category, largest first
    Categories {
        #[command(flatten)]
        report: ReportArgs,

        /// Only count debit transactions
        #[arg(long)]
        expense_only: bool,
    },

    /// Income and expense per calendar month
    Monthly(ReportArgs),

    /// Totals per day
    Daily(ReportArgs),

    /// Descriptive statistics of the amounts
    Stats(ReportArgs),

    /// Largest transactions
    Top {
        #[command(flatten)]
        report: ReportArgs,

        /// Number of rows (default: `[display] top_n`)
        #[arg(short)]
        n: Option<usize>,
    },

    /// First half of the period versus the second half
    Compare(ReportArgs),

    /// Equal-width histogram of the amounts
    Histogram {
        #[command(flatten)]
        report: ReportArgs,

        #[arg(long, default_value_t = 10)]
        bins: usize,
    },

    /// Write the filtered transactions to a CSV file
    Export {
        #[command(flatten)]
        filters: FilterArgs,

        #[arg(long)]
        out: PathBuf,
    },

    /// Write a deterministic sample dataset
    Generate {
        /// Output file (default: the configured data path)
        #[arg(long)]
        out: Option<PathBuf>,

        #[arg(long, default_value_t = 100)]
        count: usize,

        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Last day of the 90-day window (default: today)
        #[arg(long)]
        end: Option<NaiveDate>,
    },

    /// Manage ~/.tally/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write a default config if none exists
    Init,

    /// Print the effective config
    Show,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = config::load_config()?;
    logging::init_logging(&state::ensure_tally_home()?, &cfg.logging.level)?;

    let data_path = cli.data.clone().unwrap_or_else(|| cfg.data.path.clone());
    let today = Local::now().date_naive();
    let fmt = Formatter::new(&cfg.display);
    let mut out = io::stdout().lock();

    let command = cli.command.unwrap_or(Command::Dashboard {
        filters: FilterArgs::default(),
        export_to: PathBuf::from("tally_export.csv"),
    });

    match command {
        Command::Dashboard { filters, export_to } => {
            let criteria = filters.to_criteria(today)?;
            let data = load_data(&data_path)?;
            tui::run_dashboard(data, criteria, today, export_to, &cfg)?;
        }

        Command::Summary(r) => {
            let txns = load_filtered(&data_path, &r.filters, today)?;
            report::summary(&mut out, &txns, &fmt, r.json)?;
        }

        Command::Categories { report: r, expense_only } => {
            let txns = load_filtered(&data_path, &r.filters, today)?;
            report::categories(&mut out, &txns, &fmt, expense_only, r.json)?;
        }

        Command::Monthly(r) => {
            let txns = load_filtered(&data_path, &r.filters, today)?;
            report::monthly(&mut out, &txns, &fmt, r.json)?;
        }

        Command::Daily(r) => {
            let txns = load_filtered(&data_path, &r.filters, today)?;
            report::daily(&mut out, &txns, &fmt, r.json)?;
        }

        Command::Stats(r) => {
            let txns = load_filtered(&data_path, &r.filters, today)?;
            report::stats(&mut out, &txns, &fmt, r.json)?;
        }

        Command::Top { report: r, n } => {
            let txns = load_filtered(&data_path, &r.filters, today)?;
            let only = match r.filters.types.as_slice() {
                [single] => Some(*single),
                _ => None,
            };
            let n = n.unwrap_or(cfg.display.top_n);
            report::top(&mut out, &txns, &fmt, n, only, r.json)?;
        }

        Command::Compare(r) => {
            let txns = load_filtered(&data_path, &r.filters, today)?;
            report::compare(&mut out, &txns, &fmt, r.json)?;
        }

        Command::Histogram { report: r, bins } => {
            if bins == 0 {
                bail!("--bins must be at least 1");
            }
            let txns = load_filtered(&data_path, &r.filters, today)?;
            report::histogram_report(&mut out, &txns, &fmt, bins, r.json)?;
        }

        Command::Export { filters, out: path } => {
            let txns = load_filtered(&data_path, &filters, today)?;
            export_csv(&path, &txns).with_context(|| format!("export to {}", path.display()))?;
            println!("Wrote {} transactions to {}", txns.len(), path.display());
        }

        Command::Generate { out: path, count, seed, end } => {
            let path = path.unwrap_or(data_path);
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create {}", parent.display()))?;
            }
            let sample = SampleConfig {
                count,
                seed,
                ..SampleConfig::new(end.unwrap_or(today))
            };
            let txns = generate(&sample);
            export_csv(&path, &txns).with_context(|| format!("write {}", path.display()))?;
            tracing::info!(path = %path.display(), count, seed, "generated sample data");
            println!("Generated {} transactions into {}", txns.len(), path.display());
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => {
                println!("# {}", config::config_path()?.display());
                print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
            }
        },
    }

    Ok(())
}

fn load_data(path: &Path) -> Result<TransactionSet> {
    if !path.exists() {
        bail!(
            "Data file not found: {} (run `tally generate` or pass --data <file>)",
            path.display()
        );
    }
    load_csv(path).with_context(|| format!("loading {}", path.display()))
}

fn load_filtered(path: &Path, filters: &FilterArgs, today: NaiveDate) -> Result<TransactionSet> {
    let criteria = filters.to_criteria(today)?;
    let data = load_data(path)?;
    Ok(apply_filters(&data, &criteria))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_long_version_carries_build_stamp() {
        let long = Cli::command().render_long_version();
        let stamp = env!("TALLY_BUILD_SHA");
        assert!(!stamp.is_empty());
        assert!(long.contains(env!("CARGO_PKG_VERSION")));
        assert!(long.contains(&format!("({stamp})")));
    }

    #[test]
    fn test_bare_invocation_means_dashboard() {
        let cli = Cli::try_parse_from(["tally"]).unwrap();
        assert!(cli.command.is_none());

        let cli = Cli::try_parse_from(["tally", "histogram", "--bins", "4", "--json"]).unwrap();
        match cli.command {
            Some(Command::Histogram { report, bins }) => {
                assert_eq!(bins, 4);
                assert!(report.json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
