//! Caaj records grouped by trade identifier.

use crate::datasource::{CaajSource, DataSourceError};
use crate::domain::Caaj;
use std::collections::HashMap;

/// Caaj records keyed by `trade_uuid`, iterated in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupedCaaj {
    groups: Vec<(String, Vec<Caaj>)>,
    index: HashMap<String, usize>,
}

impl GroupedCaaj {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, trade_uuid: &str, caaj: Caaj) {
        match self.index.get(trade_uuid) {
            Some(&pos) => self.groups[pos].1.push(caaj),
            None => {
                self.index.insert(trade_uuid.to_string(), self.groups.len());
                self.groups.push((trade_uuid.to_string(), vec![caaj]));
            }
        }
    }

    /// Groups as `(trade_uuid, legs)` in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Caaj])> {
        self.groups
            .iter()
            .map(|(id, legs)| (id.as_str(), legs.as_slice()))
    }

    pub fn get(&self, trade_uuid: &str) -> Option<&[Caaj]> {
        self.index
            .get(trade_uuid)
            .map(|&pos| self.groups[pos].1.as_slice())
    }

    pub fn trade_uuids(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(id, _)| id.as_str())
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of records across all groups.
    pub fn record_count(&self) -> usize {
        self.groups.iter().map(|(_, legs)| legs.len()).sum()
    }
}

/// Read-only grouping of Caaj records, built once on construction.
#[derive(Debug, Clone)]
pub struct CaajRepository {
    grouped: GroupedCaaj,
    skipped: usize,
}

impl CaajRepository {
    /// Group records in the given order.
    ///
    /// Records without a trade identifier are skipped: upstream exports are known
    /// to emit such rows and they carry nothing to group on.
    pub fn new(records: Vec<Caaj>) -> Self {
        let mut grouped = GroupedCaaj::new();
        let mut skipped = 0;

        for caaj in records {
            let key = match caaj.trade_key() {
                Some(key) => key.to_string(),
                None => {
                    tracing::debug!(
                        transaction_id = %caaj.transaction_id,
                        "skipping caaj record without trade_uuid"
                    );
                    skipped += 1;
                    continue;
                }
            };
            grouped.push(&key, caaj);
        }

        tracing::debug!(
            groups = grouped.len(),
            records = grouped.record_count(),
            skipped,
            "grouped caaj records"
        );

        Self { grouped, skipped }
    }

    /// Load every record from `source` and group them.
    pub fn from_source(source: &dyn CaajSource) -> Result<Self, DataSourceError> {
        Ok(Self::new(source.load()?))
    }

    pub fn get_grouped_records(&self) -> &GroupedCaaj {
        &self.grouped
    }

    /// Number of records dropped for lacking a trade identifier.
    pub fn skipped_count(&self) -> usize {
        self.skipped
    }
}
