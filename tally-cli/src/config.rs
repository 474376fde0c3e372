use anyhow::{bail, Context, Result};
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::state::ensure_tally_home;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data: DataSection,
    pub display: DisplaySection,
    pub logging: LoggingSection,
    /// Category label -> color name (see `tui::theme`)
    pub colors: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSection {
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySection {
    pub currency_prefix: String,
    pub decimals: usize,
    /// chrono format string for dates shown in tables
    pub date_format: String,
    /// Rows in "top N" lists
    pub top_n: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    pub level: String,
}

impl Default for Config {
    fn default() -> Self {
        let colors = [
            ("Makanan & Minuman", "lightred"),
            ("Transport", "cyan"),
            ("Belanja", "lightblue"),
            ("Tagihan", "yellow"),
            ("Hiburan", "lightgreen"),
            ("Kesehatan", "lightyellow"),
            ("Pendidikan", "magenta"),
            ("Gaji", "green"),
            ("Investasi", "blue"),
            ("Lainnya", "gray"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self {
            data: DataSection::default(),
            display: DisplaySection::default(),
            logging: LoggingSection::default(),
            colors,
        }
    }
}

impl Default for DataSection {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data/bank_transactions.csv"),
        }
    }
}

impl Default for DisplaySection {
    fn default() -> Self {
        Self {
            currency_prefix: "Rp ".to_string(),
            decimals: 0,
            date_format: "%d-%m-%Y".to_string(),
            top_n: 5,
        }
    }
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(ensure_tally_home()?.join("config.toml"))
}

pub fn load_config() -> Result<Config> {
    load_config_from(&config_path()?)
}

pub fn load_config_from(p: &Path) -> Result<Config> {
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(p).with_context(|| format!("read {}", p.display()))?;
    let cfg: Config = toml::from_str(&s).with_context(|| format!("parse {}", p.display()))?;
    if !is_valid_date_format(&cfg.display.date_format) {
        bail!(
            "invalid [display] date_format {:?} in {}",
            cfg.display.date_format,
            p.display()
        );
    }
    Ok(cfg)
}

/// Whether chrono can render `fmt` as a strftime pattern
pub fn is_valid_date_format(fmt: &str) -> bool {
    StrftimeItems::new(fmt).all(|item| !matches!(item, Item::Error))
}

pub fn save_config_to(cfg: &Config, p: &Path) -> Result<()> {
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

pub fn init_config() -> Result<()> {
    let p = config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    save_config_to(&Config::default(), &p)?;
    println!("Wrote {}", p.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_config_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.display.currency_prefix, "Rp ");
    }

    #[test]
    fn test_bad_date_format_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("config.toml");
        fs::write(&p, "[display]\ndate_format = \"%Q\"\n").unwrap();
        let err = load_config_from(&p).unwrap_err();
        assert!(err.to_string().contains("date_format"));

        assert!(is_valid_date_format("%d-%m-%Y"));
        assert!(is_valid_date_format("%Y/%m/%d"));
        assert!(!is_valid_date_format("%d-%Q"));
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("config.toml");
        fs::write(&p, "[display]\ncurrency_prefix = \"$\"\ndecimals = 2\n").unwrap();
        let cfg = load_config_from(&p).unwrap();
        assert_eq!(cfg.display.currency_prefix, "$");
        assert_eq!(cfg.display.decimals, 2);
        assert_eq!(cfg.display.top_n, 5);
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("config.toml");
        let mut cfg = Config::default();
        cfg.colors.insert("Crypto".to_string(), "magenta".to_string());
        save_config_to(&cfg, &p).unwrap();
        assert_eq!(load_config_from(&p).unwrap(), cfg);
    }
}
