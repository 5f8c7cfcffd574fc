use crate::config::Config;
use crate::datasource::{CaajSource, CsvCaajSource};
use crate::domain::CryptactRecord;
use crate::engine::FormatResolver;
use crate::error::AppError;
use crate::export::CryptactCsvWriter;
use crate::repository::CaajRepository;
use std::io::{self, Write};
use std::path::Path;

/// Runs one Caaj → Cryptact conversion described by a [`Config`].
pub struct Converter {
    config: Config,
    resolver: FormatResolver,
}

impl Converter {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            resolver: FormatResolver::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Load and resolve the configured input without writing anything.
    pub fn resolve(&self) -> Result<Vec<CryptactRecord>, AppError> {
        let source = CsvCaajSource::new(&self.config.input_path);
        self.resolve_from(&source)
    }

    pub fn resolve_from(&self, source: &dyn CaajSource) -> Result<Vec<CryptactRecord>, AppError> {
        let repo = CaajRepository::from_source(source)?;
        if repo.skipped_count() > 0 {
            tracing::debug!(
                skipped = repo.skipped_count(),
                "records without trade_uuid were not converted"
            );
        }
        let records = self.resolver.resolve(repo.get_grouped_records())?;
        Ok(records)
    }

    /// Write `records` to the configured output path.
    pub fn export(&self, records: &[CryptactRecord]) -> Result<(), AppError> {
        CryptactCsvWriter::write_file(&self.config.output_path, records)?;
        Ok(())
    }

    /// Resolve, optionally print, then write. Returns the resolved records.
    ///
    /// Nothing is written if loading or resolution fails.
    pub fn run(&self) -> Result<Vec<CryptactRecord>, AppError> {
        let records = self.resolve()?;
        if self.config.print_records {
            print_records(io::stdout().lock(), &records)?;
        }
        self.export(&records)?;
        Ok(records)
    }
}

/// Print records as JSON, one object per line.
pub fn print_records<W: Write>(mut w: W, records: &[CryptactRecord]) -> Result<(), AppError> {
    for record in records {
        serde_json::to_writer(&mut w, record).map_err(|e| AppError::Export(e.to_string()))?;
        writeln!(w).map_err(|e| AppError::Export(e.to_string()))?;
    }
    w.flush().map_err(|e| AppError::Export(e.to_string()))
}

/// Convert `input` (default `result.csv`) into `custom.csv`, printing the records.
pub fn create_cryptact_custom_file(
    input: Option<&Path>,
) -> Result<Vec<CryptactRecord>, AppError> {
    let mut config = Config::default();
    if let Some(path) = input {
        config = config.with_input_path(path);
    }
    Converter::new(config).run()
}
