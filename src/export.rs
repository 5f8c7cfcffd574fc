//! Writing Cryptact custom files.
//!
//! Header: `Timestamp,Action,Source,Base,Volume,Price,Counter,Fee,FeeCcy`.
//! Comments stay in memory and are not written.

use crate::domain::{CryptactRecord, Decimal};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("cannot write {path}: {message}")]
    Io { path: String, message: String },
    #[error("csv write error: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(serde::Serialize)]
struct CsvOutRow<'a> {
    #[serde(rename = "Timestamp")]
    timestamp: String,
    #[serde(rename = "Action")]
    action: &'static str,
    #[serde(rename = "Source")]
    source: &'a str,
    #[serde(rename = "Base")]
    base: &'a str,
    #[serde(rename = "Volume")]
    volume: String,
    #[serde(rename = "Price")]
    price: Option<String>,
    #[serde(rename = "Counter")]
    counter: &'a str,
    #[serde(rename = "Fee")]
    fee: String,
    #[serde(rename = "FeeCcy")]
    fee_ccy: &'a str,
}

impl<'a> From<&'a CryptactRecord> for CsvOutRow<'a> {
    fn from(r: &'a CryptactRecord) -> Self {
        CsvOutRow {
            timestamp: r.timestamp.to_cryptact_string(),
            action: r.action.as_str(),
            source: &r.source,
            base: r.base.as_str(),
            volume: r.volume.to_canonical_string(),
            price: r.price.as_ref().map(Decimal::to_canonical_string),
            counter: r.counter.as_str(),
            fee: r.fee.to_canonical_string(),
            fee_ccy: r.fee_currency.as_str(),
        }
    }
}

pub struct CryptactCsvWriter;

impl CryptactCsvWriter {
    /// Write `records` as a Cryptact custom file.
    ///
    /// The header is written even when there are no records.
    pub fn write<W: Write>(w: W, records: &[CryptactRecord]) -> Result<(), ExportError> {
        let mut wrt = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(w);

        wrt.write_record([
            "Timestamp", "Action", "Source", "Base", "Volume", "Price", "Counter", "Fee", "FeeCcy",
        ])?;
        for record in records {
            wrt.serialize(CsvOutRow::from(record))?;
        }
        wrt.flush().map_err(csv::Error::from)?;
        Ok(())
    }

    /// Write `records` to `path`, replacing it only once the whole file is written.
    pub fn write_file(path: &Path, records: &[CryptactRecord]) -> Result<(), ExportError> {
        write_atomic(path, |file| Self::write(file, records))?;
        tracing::info!(
            path = %path.display(),
            records = records.len(),
            "wrote cryptact custom file"
        );
        Ok(())
    }
}

/// Run `fill` against a temp file beside `path`, then rename it over `path`.
///
/// On any error the temp file is removed and `path` is left as it was.
fn write_atomic<F>(path: &Path, fill: F) -> Result<(), ExportError>
where
    F: FnOnce(&mut File) -> Result<(), ExportError>,
{
    let io_err = |e: std::io::Error| ExportError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    };
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(io_err)?;
    fill(tmp.as_file_mut())?;
    tmp.as_file().sync_all().map_err(io_err)?;
    tmp.persist(path).map_err(|e| io_err(e.error))?;
    Ok(())
}
