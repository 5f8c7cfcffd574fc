//! Cryptact custom-file record and its action vocabulary.

use crate::domain::{Asset, Caaj, Decimal, ExecutedAt};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Cryptact custom-file action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Action {
    Buy,
    Borrow,
    Return,
    Lend,
    Recover,
    Reduce,
    Bonus,
    #[serde(rename = "SENDFEE")]
    SendFee,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Buy => "BUY",
            Action::Borrow => "BORROW",
            Action::Return => "RETURN",
            Action::Lend => "LEND",
            Action::Recover => "RECOVER",
            Action::Reduce => "REDUCE",
            Action::Bonus => "BONUS",
            Action::SendFee => "SENDFEE",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of a Cryptact custom file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CryptactRecord {
    pub timestamp: ExecutedAt,
    pub action: Action,
    /// `platform/application/service` of the originating leg.
    pub source: String,
    pub base: Asset,
    pub volume: Decimal,
    /// Only set for composite exchanges.
    pub price: Option<Decimal>,
    pub counter: Asset,
    pub fee: Decimal,
    pub fee_currency: Asset,
    /// Kept in memory; never written to the custom file.
    pub comment: Option<String>,
}

impl CryptactRecord {
    /// Record for a leg that stands on its own: unpriced, countered in JPY.
    pub fn single(caaj: &Caaj, action: Action) -> Self {
        CryptactRecord {
            timestamp: caaj.executed_at,
            action,
            source: caaj.source(),
            base: Asset::from_uti(&caaj.uti),
            volume: caaj.amount.clone(),
            price: None,
            counter: Asset::jpy(),
            fee: Decimal::zero(),
            fee_currency: Asset::jpy(),
            comment: caaj.comment.clone(),
        }
    }

    /// BUY of the `get` leg's asset paid for with the `lose` leg's asset.
    pub fn exchange(get: &Caaj, lose: &Caaj, price: Decimal) -> Self {
        CryptactRecord {
            timestamp: get.executed_at,
            action: Action::Buy,
            source: get.source(),
            base: Asset::from_uti(&get.uti),
            volume: get.amount.clone(),
            price: Some(price),
            counter: Asset::from_uti(&lose.uti),
            fee: Decimal::zero(),
            fee_currency: Asset::jpy(),
            comment: get.comment.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CaajType;

    fn leg(caaj_type: CaajType, amount: &str, uti: &str, comment: Option<&str>) -> Caaj {
        Caaj {
            executed_at: ExecutedAt::parse("2022-03-04 05:06:07").unwrap(),
            platform: "bsc".to_string(),
            application: "pancakeswap".to_string(),
            service: "swap".to_string(),
            transaction_id: "0x1".to_string(),
            trade_uuid: Some("t1".to_string()),
            caaj_type,
            amount: Decimal::from_str_canonical(amount).unwrap(),
            uti: uti.to_string(),
            caaj_from: None,
            caaj_to: None,
            comment: comment.map(str::to_string),
        }
    }

    #[test]
    fn test_action_serialization() {
        assert_eq!(serde_json::to_string(&Action::SendFee).unwrap(), "\"SENDFEE\"");
        assert_eq!(serde_json::to_string(&Action::Return).unwrap(), "\"RETURN\"");
        assert_eq!(Action::Bonus.to_string(), "BONUS");
    }

    #[test]
    fn test_single_defaults() {
        let caaj = leg(CaajType::Deposit, "1.5", "cake", Some("note"));
        let record = CryptactRecord::single(&caaj, Action::Lend);

        assert_eq!(record.timestamp.to_cryptact_string(), "2022/03/04 05:06:07");
        assert_eq!(record.action, Action::Lend);
        assert_eq!(record.source, "bsc/pancakeswap/swap");
        assert_eq!(record.base.as_str(), "CAKE");
        assert_eq!(record.volume.to_canonical_string(), "1.5");
        assert_eq!(record.price, None);
        assert_eq!(record.counter.as_str(), "JPY");
        assert!(record.fee.is_zero());
        assert_eq!(record.fee_currency.as_str(), "JPY");
        assert_eq!(record.comment.as_deref(), Some("note"));
    }

    #[test]
    fn test_exchange_takes_fields_from_get_leg() {
        let get = leg(CaajType::Get, "2", "btc", Some("got"));
        let lose = leg(CaajType::Lose, "200000", "jpy", Some("lost"));
        let price = Decimal::from_str_canonical("100000").unwrap();
        let record = CryptactRecord::exchange(&get, &lose, price.clone());

        assert_eq!(record.action, Action::Buy);
        assert_eq!(record.base.as_str(), "BTC");
        assert_eq!(record.volume.to_canonical_string(), "2");
        assert_eq!(record.price, Some(price));
        assert_eq!(record.counter.as_str(), "JPY");
        assert_eq!(record.comment.as_deref(), Some("got"));
    }
}
