pub mod config;
pub mod datasource;
pub mod domain;
pub mod engine;
pub mod error;
pub mod export;
pub mod orchestration;
pub mod repository;

pub use config::Config;
pub use datasource::{CaajSource, CsvCaajSource, DataSourceError, MockCaajSource};
pub use domain::{Action, Asset, Caaj, CaajType, CryptactRecord, Decimal, ExecutedAt};
pub use engine::{detect_action, FormatResolver, ResolveError};
pub use error::AppError;
pub use export::{CryptactCsvWriter, ExportError};
pub use orchestration::{create_cryptact_custom_file, Converter};
pub use repository::{CaajRepository, GroupedCaaj};
