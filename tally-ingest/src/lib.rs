//! tally-ingest: CSV source loader, CSV export and sample-data generation.

pub mod error;
pub mod export;
pub mod loader;
pub mod sample;
pub mod types;

pub use error::{ExportError, LoadError};
pub use export::{export_csv, write_csv};
pub use loader::{load_csv, load_from_reader};
pub use sample::{generate, SampleConfig};
pub use types::Column;
