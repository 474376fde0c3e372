use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter directive for a configured level
fn default_directive(level: &str) -> String {
    format!("tally={level},tally_ingest={level},tally_core=warn")
}

/// Send tracing output to `{dir}/tally.log`.
///
/// Logs go to a file rather than stderr so the dashboard's alternate
/// screen stays clean. `RUST_LOG` overrides `level` when set.
pub fn init_logging(dir: &Path, level: &str) -> Result<()> {
    std::fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    let log_path = dir.join("tally.log");

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("open {}", log_path.display()))?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(level)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()
        .context("install tracing subscriber")?;

    tracing::info!(log_path = %log_path.display(), "logging initialized");
    Ok(())
}
