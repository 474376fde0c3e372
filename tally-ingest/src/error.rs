use std::path::PathBuf;

/// The source could not be turned into a complete transaction set.
///
/// Loading is all-or-nothing: any of these aborts the load and no partial
/// data is returned.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("line {line}: invalid {field} {value:?}: {reason}")]
    InvalidField {
        line: u64,
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("invalid amount pattern: {0}")]
    Pattern(#[from] regex::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("cannot write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),
}
