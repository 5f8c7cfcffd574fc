use crate::domain::{Caaj, CaajType, CryptactRecord};
use crate::repository::GroupedCaaj;
use thiserror::Error;

use super::classify::detect_action;

/// Significant digits kept in a derived exchange price.
pub const PRICE_PRECISION: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("trade {trade_uuid}: get leg has zero amount, price is undefined")]
    DivisionByZero { trade_uuid: String },
}

/// Legs of a multi-record trade, partitioned by type.
///
/// Only `get` and `lose` take part in resolution; the other buckets are kept for
/// inspection. Types without a bucket are ignored here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LegBuckets<'a> {
    pub get: Vec<&'a Caaj>,
    pub lose: Vec<&'a Caaj>,
    pub deposit: Vec<&'a Caaj>,
    pub get_bonds: Vec<&'a Caaj>,
    pub withdraw: Vec<&'a Caaj>,
    pub lose_bonds: Vec<&'a Caaj>,
}

impl<'a> LegBuckets<'a> {
    pub fn partition(legs: &'a [Caaj]) -> Self {
        let mut buckets = LegBuckets::default();
        for caaj in legs {
            match caaj.caaj_type {
                CaajType::Get => buckets.get.push(caaj),
                CaajType::Lose => buckets.lose.push(caaj),
                CaajType::Deposit => buckets.deposit.push(caaj),
                CaajType::GetBonds => buckets.get_bonds.push(caaj),
                CaajType::Withdraw => buckets.withdraw.push(caaj),
                CaajType::LoseBonds => buckets.lose_bonds.push(caaj),
                _ => {}
            }
        }
        buckets
    }

    /// The `(get, lose)` pair when the trade is exactly one of each.
    pub fn exchange_pair(&self) -> Option<(&'a Caaj, &'a Caaj)> {
        match (self.get.as_slice(), self.lose.as_slice()) {
            ([get], [lose]) => Some((*get, *lose)),
            _ => None,
        }
    }
}

/// Counters collected while resolving.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveSummary {
    pub groups: usize,
    /// Groups collapsed into a single priced BUY.
    pub exchanges: usize,
    pub emitted: usize,
    /// Legs that produced no record.
    pub suppressed: usize,
}

/// Converts grouped Caaj records into Cryptact records.
#[derive(Debug, Clone, Copy)]
pub struct FormatResolver {
    precision: u32,
}

impl Default for FormatResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl FormatResolver {
    pub fn new() -> Self {
        Self {
            precision: PRICE_PRECISION,
        }
    }

    /// Use `precision` significant digits for exchange prices instead of the default.
    pub fn with_precision(precision: u32) -> Self {
        Self { precision }
    }

    /// Resolve every group in order, concatenating their records.
    ///
    /// # Errors
    /// Fails on the first exchange whose price cannot be computed.
    pub fn resolve(&self, grouped: &GroupedCaaj) -> Result<Vec<CryptactRecord>, ResolveError> {
        self.resolve_with_summary(grouped)
            .map(|(records, _)| records)
    }

    pub fn resolve_with_summary(
        &self,
        grouped: &GroupedCaaj,
    ) -> Result<(Vec<CryptactRecord>, ResolveSummary), ResolveError> {
        let mut records = Vec::new();
        let mut summary = ResolveSummary::default();

        for (trade_uuid, legs) in grouped.iter() {
            summary.groups += 1;
            self.resolve_group(trade_uuid, legs, &mut records, &mut summary)?;
        }

        tracing::info!(
            groups = summary.groups,
            exchanges = summary.exchanges,
            emitted = summary.emitted,
            suppressed = summary.suppressed,
            "resolved caaj groups"
        );

        Ok((records, summary))
    }

    /// Resolve a leg on its own. Returns `None` when the leg is suppressed.
    pub fn resolve_single(&self, caaj: &Caaj) -> Option<CryptactRecord> {
        detect_action(caaj).map(|action| CryptactRecord::single(caaj, action))
    }

    /// Resolve a trade made of several legs.
    ///
    /// Exactly one `get` and one `lose` collapse into a priced BUY; any other
    /// shape resolves each leg independently.
    pub fn resolve_multi(
        &self,
        trade_uuid: &str,
        legs: &[Caaj],
    ) -> Result<Vec<CryptactRecord>, ResolveError> {
        let mut records = Vec::new();
        self.resolve_multi_into(trade_uuid, legs, &mut records, &mut ResolveSummary::default())?;
        Ok(records)
    }

    fn resolve_group(
        &self,
        trade_uuid: &str,
        legs: &[Caaj],
        out: &mut Vec<CryptactRecord>,
        summary: &mut ResolveSummary,
    ) -> Result<(), ResolveError> {
        match legs {
            [only] => {
                self.push_single(trade_uuid, only, out, summary);
                Ok(())
            }
            _ => self.resolve_multi_into(trade_uuid, legs, out, summary),
        }
    }

    fn resolve_multi_into(
        &self,
        trade_uuid: &str,
        legs: &[Caaj],
        out: &mut Vec<CryptactRecord>,
        summary: &mut ResolveSummary,
    ) -> Result<(), ResolveError> {
        let buckets = LegBuckets::partition(legs);

        if let Some((get, lose)) = buckets.exchange_pair() {
            let record = self.resolve_exchange(trade_uuid, get, lose)?;
            summary.exchanges += 1;
            summary.emitted += 1;
            out.push(record);
            return Ok(());
        }

        for caaj in legs {
            self.push_single(trade_uuid, caaj, out, summary);
        }
        Ok(())
    }

    fn resolve_exchange(
        &self,
        trade_uuid: &str,
        get: &Caaj,
        lose: &Caaj,
    ) -> Result<CryptactRecord, ResolveError> {
        let price = lose
            .amount
            .checked_div_with_precision(&get.amount, self.precision)
            .ok_or_else(|| ResolveError::DivisionByZero {
                trade_uuid: trade_uuid.to_string(),
            })?;
        Ok(CryptactRecord::exchange(get, lose, price))
    }

    fn push_single(
        &self,
        trade_uuid: &str,
        caaj: &Caaj,
        out: &mut Vec<CryptactRecord>,
        summary: &mut ResolveSummary,
    ) {
        match self.resolve_single(caaj) {
            Some(record) => {
                summary.emitted += 1;
                out.push(record);
            }
            None => {
                tracing::debug!(
                    trade_uuid,
                    caaj_type = %caaj.caaj_type,
                    "suppressing caaj record without action"
                );
                summary.suppressed += 1;
            }
        }
    }
}
