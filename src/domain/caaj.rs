//! Caaj ledger entry: one leg of a crypto-asset transaction.

use crate::domain::{Decimal, ExecutedAt};
use serde::{Deserialize, Serialize};
use std::fmt;

/// `caaj_to` value that marks a leg as a fee payment.
pub const FEE_MARKER: &str = "fee";

/// Kind of ledger leg.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum CaajType {
    Get,
    Lose,
    Deposit,
    Withdraw,
    GetBonds,
    LoseBonds,
    Borrow,
    Repay,
    Receive,
    /// Any value outside the known vocabulary, kept verbatim.
    Other(String),
}

impl CaajType {
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "get" => CaajType::Get,
            "lose" => CaajType::Lose,
            "deposit" => CaajType::Deposit,
            "withdraw" => CaajType::Withdraw,
            "get_bonds" => CaajType::GetBonds,
            "lose_bonds" => CaajType::LoseBonds,
            "borrow" => CaajType::Borrow,
            "repay" => CaajType::Repay,
            "receive" => CaajType::Receive,
            other => CaajType::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CaajType::Get => "get",
            CaajType::Lose => "lose",
            CaajType::Deposit => "deposit",
            CaajType::Withdraw => "withdraw",
            CaajType::GetBonds => "get_bonds",
            CaajType::LoseBonds => "lose_bonds",
            CaajType::Borrow => "borrow",
            CaajType::Repay => "repay",
            CaajType::Receive => "receive",
            CaajType::Other(s) => s,
        }
    }
}

impl fmt::Display for CaajType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for CaajType {
    fn from(value: String) -> Self {
        CaajType::parse(&value)
    }
}

impl From<CaajType> for String {
    fn from(value: CaajType) -> Self {
        value.as_str().to_string()
    }
}

/// A single Caaj ledger entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Caaj {
    pub executed_at: ExecutedAt,
    pub platform: String,
    pub application: String,
    pub service: String,
    /// Source transaction id, carried along but not used for resolution.
    pub transaction_id: String,
    /// Groups legs of one economic trade. Missing for some upstream rows.
    pub trade_uuid: Option<String>,
    #[serde(rename = "type")]
    pub caaj_type: CaajType,
    /// Unsigned quantity; direction comes from `caaj_type`.
    pub amount: Decimal,
    /// Percent-encoded asset identifier.
    pub uti: String,
    pub caaj_from: Option<String>,
    pub caaj_to: Option<String>,
    pub comment: Option<String>,
}

impl Caaj {
    /// Provenance label `platform/application/service`.
    pub fn source(&self) -> String {
        format!("{}/{}/{}", self.platform, self.application, self.service)
    }

    /// True when `caaj_to` marks this leg as a fee.
    pub fn is_fee(&self) -> bool {
        self.caaj_to.as_deref() == Some(FEE_MARKER)
    }

    /// Trade identifier, if present and non-blank.
    pub fn trade_key(&self) -> Option<&str> {
        self.trade_uuid
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Caaj {
        Caaj {
            executed_at: ExecutedAt::parse("2022-01-01 00:00:00").unwrap(),
            platform: "ethereum".to_string(),
            application: "uniswap".to_string(),
            service: "swap".to_string(),
            transaction_id: "0xabc".to_string(),
            trade_uuid: Some("t1".to_string()),
            caaj_type: CaajType::Get,
            amount: Decimal::from_str_canonical("1").unwrap(),
            uti: "eth".to_string(),
            caaj_from: None,
            caaj_to: None,
            comment: None,
        }
    }

    #[test]
    fn test_caaj_type_parse_known_and_other() {
        assert_eq!(CaajType::parse("get_bonds"), CaajType::GetBonds);
        assert_eq!(CaajType::parse(" repay "), CaajType::Repay);
        assert_eq!(
            CaajType::parse("unknown_type"),
            CaajType::Other("unknown_type".to_string())
        );
        assert_eq!(CaajType::parse("unknown_type").as_str(), "unknown_type");
    }

    #[test]
    fn test_caaj_type_serialization() {
        let json = serde_json::to_string(&CaajType::LoseBonds).unwrap();
        assert_eq!(json, "\"lose_bonds\"");
        let parsed: CaajType = serde_json::from_str("\"withdraw\"").unwrap();
        assert_eq!(parsed, CaajType::Withdraw);
    }

    #[test]
    fn test_source_uses_all_three_parts() {
        assert_eq!(sample().source(), "ethereum/uniswap/swap");
    }

    #[test]
    fn test_is_fee() {
        let mut caaj = sample();
        assert!(!caaj.is_fee());
        caaj.caaj_to = Some("fee".to_string());
        assert!(caaj.is_fee());
        caaj.caaj_to = Some("FEE".to_string());
        assert!(!caaj.is_fee());
    }

    #[test]
    fn test_trade_key_blank_is_none() {
        let mut caaj = sample();
        assert_eq!(caaj.trade_key(), Some("t1"));
        caaj.trade_uuid = Some("   ".to_string());
        assert_eq!(caaj.trade_key(), None);
        caaj.trade_uuid = None;
        assert_eq!(caaj.trade_key(), None);
    }
}
