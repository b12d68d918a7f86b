use pokerbet::evaluator::{evaluate, Category};
use pokerbet::hand::Hand;
use pokerbet::money::{Amount, AmountParseError, Risk};
use pokerbet::payout::{BetError, BetLimits, PayoutCalculator, PayoutError, PayoutTable};

fn amt(s: &str) -> Amount {
    s.parse().unwrap()
}

fn risk(s: &str) -> Risk {
    s.parse().unwrap()
}

#[test]
fn royal_flush_at_full_risk_doubles_fifty_times_bet() {
    let calc = PayoutCalculator::default();
    let hand: Hand = "Ah Kh Qh Jh 10h".parse().unwrap();
    let res = calc.resolve(&hand, amt("1"), risk("1")).unwrap();
    assert_eq!(res.category, Category::RoyalFlush);
    assert_eq!(res.winnings, amt("100"));
}

#[test]
fn full_house_uses_multiplier_four() {
    let calc = PayoutCalculator::default();
    let hand: Hand = "3c 3d 3h Js Jc".parse().unwrap();
    assert_eq!(evaluate(&hand), Category::FullHouse);
    let res = calc.resolve(&hand, amt("2"), risk("0.5")).unwrap();
    assert_eq!(res.multiplier.to_string(), "4");
    assert_eq!(res.winnings, amt("12"));
}

#[test]
fn high_card_loses_bet_times_risk() {
    let calc = PayoutCalculator::default();
    let hand: Hand = "Ah Kd 7s 5c 2d".parse().unwrap();
    let res = calc.resolve(&hand, amt("10"), risk("0.5")).unwrap();
    assert_eq!(res.category, Category::HighCard);
    assert_eq!(res.winnings, amt("-5"));
}

#[test]
fn boosted_table_pays_more_for_straights_and_trips() {
    let calc = PayoutCalculator::new(PayoutTable::boosted(), BetLimits::default());
    let straight = calc.payout(Category::Straight, amt("1"), risk("1")).unwrap();
    let trips = calc.payout(Category::ThreeOfAKind, amt("1"), risk("1")).unwrap();
    assert_eq!(straight, amt("5"));
    assert_eq!(trips, amt("4"));
}

#[test]
fn each_limit_violation_is_reported() {
    let calc = PayoutCalculator::default();
    let c = Category::OnePair;
    assert!(matches!(
        calc.payout(c, amt("0.01"), risk("1")),
        Err(PayoutError::InvalidBet(BetError::BetBelowMinimum { .. }))
    ));
    assert!(matches!(
        calc.payout(c, amt("1000.000001"), risk("1")),
        Err(PayoutError::InvalidBet(BetError::BetAboveMaximum { .. }))
    ));
    assert!(matches!(
        calc.payout(c, amt("1"), risk("0.4")),
        Err(PayoutError::InvalidBet(BetError::RiskBelowMinimum { .. }))
    ));
    assert!(matches!(
        calc.payout(c, amt("1"), risk("2.1")),
        Err(PayoutError::InvalidBet(BetError::RiskAboveMaximum { .. }))
    ));
}

#[test]
fn bounds_are_inclusive() {
    let calc = PayoutCalculator::default();
    let c = Category::Flush;
    assert!(calc.payout(c, amt("0.05"), risk("0.5")).is_ok());
    assert!(calc.payout(c, amt("1000"), risk("2")).is_ok());
}

#[test]
fn bet_is_checked_before_risk() {
    let calc = PayoutCalculator::default();
    let err = calc.payout(Category::Flush, amt("0"), risk("9")).unwrap_err();
    assert!(matches!(err, PayoutError::InvalidBet(BetError::BetBelowMinimum { .. })));
}

#[test]
fn zero_risk_pays_table_multiplier_exactly() {
    let limits = BetLimits::new(amt("0.05"), amt("1000"), Risk::ZERO, risk("2")).unwrap();
    let calc = PayoutCalculator::new(PayoutTable::standard(), limits);
    let shown: Vec<String> = Category::ALL
        .iter()
        .map(|&c| calc.payout(c, amt("10"), Risk::ZERO).unwrap().to_string())
        .collect();
    assert_eq!(shown, ["0", "12", "15", "15", "20", "30", "40", "50", "100", "500"]);
}

#[test]
fn fractional_bets_stay_exact() {
    let calc = PayoutCalculator::default();
    // 0.1 * 1.2 * 1.7 = 0.204 with no float drift
    let w = calc.payout(Category::OnePair, amt("0.1"), risk("0.7")).unwrap();
    assert_eq!(w.to_string(), "0.204");
}

#[test]
fn listed_high_card_hand_loses_half_the_bet() {
    let hand: Hand = "2h 7c 9d Js 4h".parse().unwrap();
    assert_eq!(evaluate(&hand), Category::HighCard);
    let calc = PayoutCalculator::default();
    assert_eq!(calc.payout(Category::HighCard, amt("10"), risk("0.5")), Ok(amt("-5")));
    let res = calc.resolve(&hand, amt("10"), risk("0.5")).unwrap();
    assert_eq!(res.winnings.to_string(), "-5");
}

#[test]
fn negative_risk_never_becomes_zero() {
    // With zero allowed, a coerced -0.5 would settle a High Card at 0.
    let limits = BetLimits::new(amt("0.05"), amt("1000"), Risk::ZERO, Risk::ONE).unwrap();
    let calc = PayoutCalculator::new(PayoutTable::standard(), limits);
    assert!(matches!(Risk::from_micros(-500_000), Err(AmountParseError::Negative(_))));
    assert!(matches!("-0.5".parse::<Risk>(), Err(AmountParseError::Negative(_))));
    assert!(serde_json::from_str::<Risk>("-0.5").is_err());
    let zero = Risk::from_micros(0).unwrap();
    assert_eq!(calc.payout(Category::HighCard, amt("10"), zero), Ok(Amount::ZERO));
}
