//! Resolution properties over grouped Caaj records.

use caaj2cryptact::{
    detect_action, Action, Caaj, CaajRepository, CaajType, Decimal, ExecutedAt, FormatResolver,
};
use std::str::FromStr;

fn caaj(trade_uuid: &str, caaj_type: &str, amount: &str, uti: &str, caaj_to: Option<&str>) -> Caaj {
    Caaj {
        executed_at: ExecutedAt::parse("2022-05-06 07:08:09").unwrap(),
        platform: "polygon".to_string(),
        application: "quickswap".to_string(),
        service: "swap".to_string(),
        transaction_id: format!("tx-{trade_uuid}"),
        trade_uuid: Some(trade_uuid.to_string()),
        caaj_type: CaajType::parse(caaj_type),
        amount: Decimal::from_str(amount).unwrap(),
        uti: uti.to_string(),
        caaj_from: None,
        caaj_to: caaj_to.map(str::to_string),
        comment: None,
    }
}

fn resolve(records: Vec<Caaj>) -> Vec<caaj2cryptact::CryptactRecord> {
    let repo = CaajRepository::new(records);
    FormatResolver::new()
        .resolve(repo.get_grouped_records())
        .unwrap()
}

#[test]
fn test_single_record_classification_table() {
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
        let records = resolve(vec![caaj("t", caaj_type, "1", "matic", None)]);
        assert_eq!(records.len(), 1, "type {}", caaj_type);
        assert_eq!(records[0].action, expected, "type {}", caaj_type);
        assert_eq!(records[0].price, None);
        assert_eq!(records[0].counter.as_str(), "JPY");

        let records = resolve(vec![caaj("t", caaj_type, "1", "matic", Some("fee"))]);
        assert_eq!(records[0].action, Action::SendFee, "fee type {}", caaj_type);
    }
}

#[test]
fn test_unrecognized_single_records_are_suppressed() {
    for caaj_type in ["get", "lose", "unknown_type", "stake"] {
        assert!(resolve(vec![caaj("t", caaj_type, "1", "matic", None)]).is_empty());
        assert!(resolve(vec![caaj("t", caaj_type, "1", "matic", Some("pool"))]).is_empty());
    }
}

#[test]
fn test_composite_exchange() {
    let records = resolve(vec![
        caaj("t1", "get", "1.5", "weth", None),
        caaj("t1", "lose", "4500.75", "usdc", None),
    ]);

    assert_eq!(records.len(), 1);
    let r = &records[0];
    assert_eq!(r.action, Action::Buy);
    assert_eq!(r.base.as_str(), "WETH");
    assert_eq!(r.volume, Decimal::from_str("1.5").unwrap());
    assert_eq!(r.counter.as_str(), "USDC");
    assert_eq!(r.price, Some(Decimal::from_str("3000.5").unwrap()));
    assert!(r.fee.is_zero());
    assert_eq!(r.fee_currency.as_str(), "JPY");
}

#[test]
fn test_composite_price_rounds_to_ten_digits() {
    let records = resolve(vec![
        caaj("t1", "get", "7", "wbtc", None),
        caaj("t1", "lose", "100", "eth", None),
    ]);
    assert_eq!(
        records[0].price.as_ref().unwrap().to_canonical_string(),
        "14.28571429"
    );
}

#[test]
fn test_fallback_shape_resolves_each_leg() {
    let legs = vec![
        caaj("t1", "get", "1", "a", None),
        caaj("t1", "get", "2", "b", Some("fee")),
        caaj("t1", "lose", "3", "c", None),
        caaj("t1", "receive", "4", "d", None),
    ];
    let expected = legs.iter().filter(|c| detect_action(c).is_some()).count();
    let records = resolve(legs);

    assert_eq!(records.len(), expected);
    let actions: Vec<Action> = records.iter().map(|r| r.action).collect();
    assert_eq!(actions, vec![Action::SendFee, Action::Bonus]);
    assert!(records.iter().all(|r| r.price.is_none()));
}

#[test]
fn test_two_loses_and_one_get_are_not_collapsed() {
    let records = resolve(vec![
        caaj("t1", "get", "1", "a", None),
        caaj("t1", "lose", "3", "c", None),
        caaj("t1", "lose", "3", "c", None),
    ]);
    assert!(records.is_empty());
}

#[test]
fn test_groups_resolve_independently_in_order() {
    let records = resolve(vec![
        caaj("x", "withdraw", "1", "eth", None),
        caaj("y", "get", "10", "dai", None),
        caaj("z", "borrow", "2", "dai", None),
        caaj("y", "lose", "5", "usdc", None),
    ]);

    let summary: Vec<(Action, &str)> = records
        .iter()
        .map(|r| (r.action, r.base.as_str()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (Action::Recover, "ETH"),
            (Action::Buy, "DAI"),
            (Action::Borrow, "DAI"),
        ]
    );
    assert_eq!(records[1].price.as_ref().unwrap().to_canonical_string(), "0.5");
}
