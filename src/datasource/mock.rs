//! In-memory record source for tests.

use super::{CaajSource, DataSourceError};
use crate::domain::Caaj;

/// Source that returns predefined records.
#[derive(Debug, Clone, Default)]
pub struct MockCaajSource {
    records: Vec<Caaj>,
}

impl MockCaajSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(mut self, record: Caaj) -> Self {
        self.records.push(record);
        self
    }

    pub fn with_records(mut self, records: Vec<Caaj>) -> Self {
        self.records.extend(records);
        self
    }
}

impl CaajSource for MockCaajSource {
    fn load(&self) -> Result<Vec<Caaj>, DataSourceError> {
        Ok(self.records.clone())
    }
}
