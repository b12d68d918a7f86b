//! pokerbet: five-card poker hand evaluation and bet payouts
//!
//! Goals:
//! - Classify any five cards into one of ten categories, deterministically
//! - Exact fixed-point payout arithmetic with a single rounding step
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: evaluate and pay a hand
//! ```
//! use pokerbet::evaluator::{evaluate, Category};
//! use pokerbet::hand::Hand;
//! use pokerbet::money::{Amount, Risk};
//! use pokerbet::payout::PayoutCalculator;
//!
//! let hand: Hand = "Ah Kh Qh Jh 10h".parse().unwrap();
//! assert_eq!(evaluate(&hand), Category::RoyalFlush);
//!
//! let calc = PayoutCalculator::default();
//! let won = calc.payout(Category::RoyalFlush, Amount::from_micros(1_000_000), Risk::ONE).unwrap();
//! assert_eq!(won.to_string(), "100");
//! ```
//!
//! ## Settling a random round
//! ```
//! use pokerbet::config::GameConfig;
//! use pokerbet::settle::{Dealer, SettleRequest};
//!
//! let mut dealer = Dealer::seeded(&GameConfig::default(), 42);
//! let req = SettleRequest { amount: "2.5".parse().unwrap(), risk: "1".parse().unwrap() };
//! let resp = dealer.settle(&req).unwrap();
//! assert_eq!(resp.hand.cards().len(), 5);
//! ```
//!
//! ## TUI
//! Run the interactive TUI with:
//! ```sh
//! cargo run --bin pokerbet
//! ```

pub mod cards;
pub mod config;
pub mod deck;
pub mod evaluator;
pub mod hand;
pub mod money;
pub mod payout;
pub mod settle;
pub mod tui;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
