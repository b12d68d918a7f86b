//! One-shot round settlement: deal, evaluate, pay.

use crate::config::GameConfig;
use crate::deck::deal_hand;
use crate::evaluator::Category;
use crate::hand::Hand;
use crate::money::{Amount, Risk};
use crate::payout::{Multiplier, PayoutCalculator, PayoutError};
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// A bet as submitted by a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettleRequest {
    pub amount: Amount,
    pub risk: Risk,
}

/// The dealt hand and what it paid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettleResponse {
    pub hand: Hand,
    pub result: Category,
    pub multiplier: Multiplier,
    pub winnings: Amount,
}

/// Settles rounds with its own generator. Nothing is shared between dealers.
#[derive(Debug, Clone)]
pub struct Dealer<R> {
    calculator: PayoutCalculator,
    rng: R,
}

impl<R: CryptoRng + RngCore> Dealer<R> {
    pub fn new(calculator: PayoutCalculator, rng: R) -> Self {
        Self { calculator, rng }
    }

    pub fn calculator(&self) -> &PayoutCalculator {
        &self.calculator
    }

    /// Limits are checked before any card is dealt, so a rejected bet leaves
    /// the generator untouched.
    pub fn settle(&mut self, req: &SettleRequest) -> Result<SettleResponse, PayoutError> {
        self.calculator.limits().check(req.amount, req.risk)?;
        let hand = deal_hand(&mut self.rng)?;
        let outcome = self.calculator.resolve(&hand, req.amount, req.risk)?;
        log::debug!(
            "settled {hand}: {} x{} -> {}",
            outcome.category,
            outcome.multiplier,
            outcome.winnings
        );
        Ok(SettleResponse {
            hand,
            result: outcome.category,
            multiplier: outcome.multiplier,
            winnings: outcome.winnings,
        })
    }
}

impl Dealer<ChaCha8Rng> {
    pub fn from_entropy(config: &GameConfig) -> Self {
        let mut seed = [0u8; 32];
        rand::rng().fill_bytes(&mut seed);
        Self::new(config.calculator(), ChaCha8Rng::from_seed(seed))
    }

    /// Reproducible dealer for replays and tests.
    pub fn seeded(config: &GameConfig, seed: u64) -> Self {
        Self::new(config.calculator(), ChaCha8Rng::seed_from_u64(seed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payout::BetError;

    fn req(amount: &str, risk: &str) -> SettleRequest {
        SettleRequest { amount: amount.parse().unwrap(), risk: risk.parse().unwrap() }
    }

    #[test]
    fn same_seed_same_rounds() {
        let cfg = GameConfig::default();
        let mut a = Dealer::seeded(&cfg, 99);
        let mut b = Dealer::seeded(&cfg, 99);
        for _ in 0..20 {
            assert_eq!(a.settle(&req("1", "1")).unwrap(), b.settle(&req("1", "1")).unwrap());
        }
    }

    #[test]
    fn response_is_consistent_with_table() {
        let cfg = GameConfig::default();
        let mut dealer = Dealer::seeded(&cfg, 5);
        for _ in 0..50 {
            let r = dealer.settle(&req("2", "0.5")).unwrap();
            assert_eq!(r.result, crate::evaluator::evaluate(&r.hand));
            assert_eq!(r.multiplier, cfg.payout_table().get(r.result));
            assert_eq!(r.winnings.is_negative(), r.result == Category::HighCard);
        }
    }

    #[test]
    fn rejected_bet_deals_nothing() {
        let cfg = GameConfig::default();
        let mut dealer = Dealer::seeded(&cfg, 8);
        let mut fresh = Dealer::seeded(&cfg, 8);
        let err = dealer.settle(&req("0.01", "1")).unwrap_err();
        assert!(matches!(err, PayoutError::InvalidBet(BetError::BetBelowMinimum { .. })));
        assert_eq!(dealer.settle(&req("1", "1")).unwrap(), fresh.settle(&req("1", "1")).unwrap());
    }

    #[test]
    fn request_and_response_json_shape() {
        let r: SettleRequest = serde_json::from_str(r#"{"amount":"10","risk":0.5}"#).unwrap();
        assert_eq!(r, req("10", "0.5"));

        let mut dealer = Dealer::seeded(&GameConfig::default(), 1);
        let resp = dealer.settle(&r).unwrap();
        let v: serde_json::Value = serde_json::to_value(&resp).unwrap();
        assert_eq!(v["hand"].as_array().map(Vec::len), Some(5));
        assert!(v["hand"][0]["rank"].is_u64());
        assert!(v["result"].is_string());
        assert!(v["winnings"].is_string());
        let back: SettleResponse = serde_json::from_value(v).unwrap();
        assert_eq!(back, resp);
    }
}
