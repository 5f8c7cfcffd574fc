//! Record sources that load Caaj ledger entries.

use crate::domain::Caaj;
use thiserror::Error;

pub mod csv_file;
pub mod mock;

pub use csv_file::CsvCaajSource;
pub use mock::MockCaajSource;

/// Source of Caaj records in file order.
///
/// Loading is all-or-nothing: one malformed row fails the whole load.
pub trait CaajSource {
    fn load(&self) -> Result<Vec<Caaj>, DataSourceError>;
}

/// Error type for record source operations.
#[derive(Debug, Error)]
pub enum DataSourceError {
    #[error("cannot read {path}: {message}")]
    Io { path: String, message: String },
    #[error("csv error at row {row}: {message}")]
    Csv { row: usize, message: String },
    #[error("row {row}: invalid {field}: {message}")]
    InvalidField {
        row: usize,
        field: &'static str,
        message: String,
    },
}
