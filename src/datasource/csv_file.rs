//! Reading Caaj records from a CSV file.

use super::{CaajSource, DataSourceError};
use crate::domain::{Caaj, CaajType, Decimal, ExecutedAt};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Debug, serde::Deserialize)]
struct Row {
    executed_at: String,
    platform: String,
    application: String,
    service: String,
    transaction_id: String,
    trade_uuid: Option<String>,
    #[serde(rename = "type")]
    caaj_type: String,
    amount: String,
    uti: String,
    caaj_from: Option<String>,
    caaj_to: Option<String>,
    comment: Option<String>,
}

impl Row {
    fn into_caaj(self, row: usize) -> Result<Caaj, DataSourceError> {
        let executed_at =
            ExecutedAt::parse(&self.executed_at).map_err(|e| DataSourceError::InvalidField {
                row,
                field: "executed_at",
                message: e.to_string(),
            })?;
        let amount =
            Decimal::from_str_canonical(&self.amount).map_err(|e| DataSourceError::InvalidField {
                row,
                field: "amount",
                message: e.to_string(),
            })?;

        Ok(Caaj {
            executed_at,
            platform: self.platform,
            application: self.application,
            service: self.service,
            transaction_id: self.transaction_id,
            trade_uuid: non_empty(self.trade_uuid),
            caaj_type: CaajType::parse(&self.caaj_type),
            amount,
            uti: self.uti,
            caaj_from: non_empty(self.caaj_from),
            caaj_to: non_empty(self.caaj_to),
            comment: non_empty(self.comment),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// Caaj records stored in a headered CSV file.
#[derive(Debug, Clone)]
pub struct CsvCaajSource {
    path: PathBuf,
}

impl CsvCaajSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse CSV content. Values are trimmed and empty optional columns read as absent.
    pub fn parse_csv<R: Read>(input: R) -> Result<Vec<Caaj>, DataSourceError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(input);

        let mut records = Vec::new();
        for (idx, result) in reader.deserialize::<Row>().enumerate() {
            let row = idx + 1;
            let parsed = result.map_err(|e| DataSourceError::Csv {
                row,
                message: e.to_string(),
            })?;
            records.push(parsed.into_caaj(row)?);
        }

        Ok(records)
    }
}

impl CaajSource for CsvCaajSource {
    fn load(&self) -> Result<Vec<Caaj>, DataSourceError> {
        let file = File::open(&self.path).map_err(|e| DataSourceError::Io {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })?;
        let records = Self::parse_csv(file)?;
        tracing::info!(
            path = %self.path.display(),
            records = records.len(),
            "loaded caaj records"
        );
        Ok(records)
    }
}
