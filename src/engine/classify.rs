//! Action detection for legs resolved on their own.

use crate::domain::{Action, Caaj, CaajType};

/// Fixed mapping from leg type to Cryptact action.
///
/// `get`, `lose` and unknown types have no standalone action.
pub fn action_for_type(caaj_type: &CaajType) -> Option<Action> {
    match caaj_type {
        CaajType::Borrow => Some(Action::Borrow),
        CaajType::Repay => Some(Action::Return),
        CaajType::Deposit => Some(Action::Lend),
        CaajType::Withdraw => Some(Action::Recover),
        CaajType::LoseBonds => Some(Action::Reduce),
        CaajType::GetBonds | CaajType::Receive => Some(Action::Bonus),
        CaajType::Get | CaajType::Lose | CaajType::Other(_) => None,
    }
}

/// Action for a single leg, or `None` when the leg is suppressed.
///
/// A `caaj_to` of `fee` wins over the type mapping.
pub fn detect_action(caaj: &Caaj) -> Option<Action> {
    if caaj.is_fee() {
        return Some(Action::SendFee);
    }
    action_for_type(&caaj.caaj_type)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Decimal, ExecutedAt};

    fn caaj(caaj_type: &str, caaj_to: Option<&str>) -> Caaj {
        Caaj {
            executed_at: ExecutedAt::parse("2022-01-01 00:00:00").unwrap(),
            platform: "ethereum".to_string(),
            application: "compound".to_string(),
            service: "lending".to_string(),
            transaction_id: "0x1".to_string(),
            trade_uuid: Some("t1".to_string()),
            caaj_type: CaajType::parse(caaj_type),
            amount: Decimal::from_str_canonical("1").unwrap(),
            uti: "dai".to_string(),
            caaj_from: None,
            caaj_to: caaj_to.map(str::to_string),
            comment: None,
        }
    }

    #[test]
    fn test_type_table() {
        let table = [
            ("borrow", Action::Borrow),
            ("repay", Action::Return),
            ("deposit", Action::Lend),
            ("withdraw", Action::Recover),
            ("lose_bonds", Action::Reduce),
            ("get_bonds", Action::Bonus),
            ("receive", Action::Bonus),
        ];
        for (caaj_type, expected) in table {
            assert_eq!(
                detect_action(&caaj(caaj_type, None)),
                Some(expected),
                "type {}",
                caaj_type
            );
            assert_eq!(
                detect_action(&caaj(caaj_type, Some("compound"))),
                Some(expected),
                "type {} with caaj_to",
                caaj_type
            );
        }
    }

    #[test]
    fn test_fee_overrides_type() {
        for caaj_type in ["borrow", "get", "lose", "deposit", "unknown_type", ""] {
            assert_eq!(
                detect_action(&caaj(caaj_type, Some("fee"))),
                Some(Action::SendFee),
                "type {}",
                caaj_type
            );
        }
    }

    #[test]
    fn test_unmapped_types_are_suppressed() {
        for caaj_type in ["get", "lose", "unknown_type", "", "Borrow"] {
            assert_eq!(detect_action(&caaj(caaj_type, None)), None, "type {}", caaj_type);
        }
    }
}
