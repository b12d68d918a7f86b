use pokerbet::config::GameConfig;
use pokerbet::evaluator::evaluate;
use pokerbet::payout::{BetError, PayoutError};
use pokerbet::settle::{Dealer, SettleRequest, SettleResponse};
use std::collections::HashSet;

fn request(json: &str) -> SettleRequest {
    serde_json::from_str(json).unwrap()
}

#[test]
fn seeded_dealers_replay_identically() {
    let cfg = GameConfig::default();
    let req = request(r#"{"amount":"5","risk":"1.5"}"#);
    let run = |seed| -> Vec<SettleResponse> {
        let mut dealer = Dealer::seeded(&cfg, seed);
        (0..25).map(|_| dealer.settle(&req).unwrap()).collect()
    };
    assert_eq!(run(7), run(7));
    assert_ne!(run(7), run(8));
}

#[test]
fn every_dealt_hand_is_five_distinct_cards() {
    let cfg = GameConfig::default();
    let mut dealer = Dealer::seeded(&cfg, 2024);
    let req = request(r#"{"amount":1,"risk":1}"#);
    for _ in 0..500 {
        let resp = dealer.settle(&req).unwrap();
        let unique: HashSet<_> = resp.hand.cards().iter().collect();
        assert_eq!(unique.len(), 5);
        assert_eq!(resp.result, evaluate(&resp.hand));
    }
}

#[test]
fn configured_table_is_applied() {
    let cfg = GameConfig::from_json_str(
        r#"{ "multipliers": { "high_card": -1, "one_pair": 2, "two_pair": 2, "three_of_a_kind": 2,
             "straight": 2, "flush": 2, "full_house": 2, "four_of_a_kind": 2,
             "straight_flush": 2, "royal_flush": 2 } }"#,
    )
    .unwrap();
    let mut dealer = Dealer::seeded(&cfg, 3);
    let req = request(r#"{"amount":"1","risk":"1"}"#);
    for _ in 0..100 {
        let resp = dealer.settle(&req).unwrap();
        let expected = if resp.winnings.is_negative() { "-1" } else { "4" };
        assert_eq!(resp.winnings.to_string(), expected);
    }
}

#[test]
fn out_of_limits_request_is_rejected() {
    let mut dealer = Dealer::from_entropy(&GameConfig::default());
    let err = dealer.settle(&request(r#"{"amount":"1","risk":"5"}"#)).unwrap_err();
    assert!(matches!(err, PayoutError::InvalidBet(BetError::RiskAboveMaximum { .. })));
}

#[test]
fn malformed_requests_fail_to_parse() {
    assert!(serde_json::from_str::<SettleRequest>(r#"{"amount":"1"}"#).is_err());
    assert!(serde_json::from_str::<SettleRequest>(r#"{"amount":"abc","risk":1}"#).is_err());
    assert!(serde_json::from_str::<SettleRequest>(r#"{"amount":1,"risk":-1}"#).is_err());
    assert!(serde_json::from_str::<SettleRequest>(r#"{"amount":"1.0000001","risk":1}"#).is_err());
}
