use crate::config::ConfigError;
use crate::datasource::DataSourceError;
use crate::engine::ResolveError;
use crate::export::ExportError;
use thiserror::Error;

/// Failure of a conversion run. Every variant aborts before the output is written.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Load error: {0}")]
    Load(String),
    #[error("Resolve error: {0}")]
    Resolve(String),
    #[error("Export error: {0}")]
    Export(String),
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<DataSourceError> for AppError {
    fn from(err: DataSourceError) -> Self {
        AppError::Load(err.to_string())
    }
}

impl From<ResolveError> for AppError {
    fn from(err: ResolveError) -> Self {
        AppError::Resolve(err.to_string())
    }
}

impl From<ExportError> for AppError {
    fn from(err: ExportError) -> Self {
        AppError::Export(err.to_string())
    }
}
