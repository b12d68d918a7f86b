use crate::config::GameConfig;
use crate::money::{Amount, Risk};
use crate::payout::{winnings, Multiplier};
use crate::settle::{Dealer, SettleRequest, SettleResponse};
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

use super::menu::LimitsPreset;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Scene {
    Menu,
    Table,
}

/// Where the current round stands. A submitted bet is settled on the next tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    Idle,
    Submitted,
    Resolved,
}

/// High-level input actions for the TUI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    MenuNext,
    MenuPrev,
    MenuInc,
    MenuDec,
    MenuApply,
    MenuCancel,
    ToggleMenu,
    ToggleHelp,
    ToggleHistory,
    HistoryUp,
    HistoryDown,
    SubmitBet,
    RiskUp,
    RiskDown,
    AmountOpen,
    AmountDigit(u8),
    AmountPoint,
    AmountBackspace,
    AmountIncMin,
    AmountDecMin,
    AmountSubmit,
    AmountCancel,
}

/// One settled round as shown in the history overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundRecord {
    pub round: usize,
    pub bet: Amount,
    pub risk: Risk,
    pub outcome: SettleResponse,
    pub balance_after: Amount,
}

#[derive(Debug)]
#[non_exhaustive]
pub struct AppState {
    pub scene: Scene,
    // Menu config being edited
    pub menu_index: usize,
    pub cfg_table: crate::config::TablePreset,
    pub cfg_limits: LimitsPreset,
    pub cfg_starting_balance: Amount,
    pub(crate) base_config: GameConfig,
    pub(crate) config: GameConfig,
    pub(crate) seed: Option<u64>,
    pub(crate) dealer: Dealer<ChaCha8Rng>,
    pub(crate) balance: Amount,
    pub(crate) bet: Amount,
    pub(crate) risk: Risk,
    pub(crate) phase: RoundPhase,
    pending: Option<SettleRequest>,
    pub(crate) history: VecDeque<RoundRecord>,
    rounds_played: usize,
    help_open: bool,
    history_open: bool,
    history_offset: usize,
    amount_entry: Option<String>,
    amount_entry_error: Option<String>,
    action_error: Option<String>,
    action_error_at: Option<Instant>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(GameConfig::default(), None)
    }
}

impl AppState {
    pub const HISTORY_PAGE_SIZE: usize = 20;
    /// Older rounds are dropped once this many are kept.
    pub const HISTORY_LIMIT: usize = Self::HISTORY_PAGE_SIZE * 25;
    const ACTION_ERROR_TTL: Duration = Duration::from_secs(3);
    const AMOUNT_ENTRY_MAX_LEN: usize = 16;
    const RISK_STEP: Risk = Risk::from_tenths(1);

    /// `seed` makes every dealt hand reproducible, including after the menu
    /// rebuilds the table.
    pub fn new(config: GameConfig, seed: Option<u64>) -> Self {
        let dealer = Self::make_dealer(&config, seed);
        let limits = config.limits;
        Self {
            scene: Scene::Menu,
            menu_index: 0,
            cfg_table: config.table,
            cfg_limits: LimitsPreset::matching(&limits),
            cfg_starting_balance: config.starting_balance,
            base_config: config.clone(),
            seed,
            dealer,
            balance: config.starting_balance,
            bet: limits.min_bet(),
            risk: Self::default_risk(&config),
            phase: RoundPhase::Idle,
            pending: None,
            history: VecDeque::new(),
            rounds_played: 0,
            config,
            help_open: false,
            history_open: false,
            history_offset: 0,
            amount_entry: None,
            amount_entry_error: None,
            action_error: None,
            action_error_at: None,
        }
    }

    pub(crate) fn make_dealer(config: &GameConfig, seed: Option<u64>) -> Dealer<ChaCha8Rng> {
        match seed {
            Some(seed) => Dealer::seeded(config, seed),
            None => Dealer::from_entropy(config),
        }
    }

    /// 1.0 when the limits allow it, otherwise the nearest bound.
    pub(crate) fn default_risk(config: &GameConfig) -> Risk {
        Risk::ONE.max(config.limits.min_risk()).min(config.limits.max_risk())
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn balance(&self) -> Amount {
        self.balance
    }

    pub fn bet(&self) -> Amount {
        self.bet
    }

    pub fn risk(&self) -> Risk {
        self.risk
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn last_round(&self) -> Option<&RoundRecord> {
        self.history.back()
    }

    /// Rounds kept for the history overlay, at most `HISTORY_LIMIT`.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn rounds_played(&self) -> usize {
        self.rounds_played
    }

    /// Up to `limit` records, newest first, skipping the `offset` newest.
    pub fn history_recent_offset(&self, limit: usize, offset: usize) -> Vec<&RoundRecord> {
        self.history.iter().rev().skip(offset).take(limit).collect()
    }

    pub fn amount_entry_active(&self) -> bool {
        self.amount_entry.is_some()
    }

    pub fn amount_entry_text(&self) -> Option<&str> {
        self.amount_entry.as_deref()
    }

    pub fn amount_entry_error(&self) -> Option<&str> {
        self.amount_entry_error.as_deref()
    }

    pub fn action_error(&self) -> Option<&str> {
        self.action_error.as_deref()
    }

    fn set_action_error(&mut self, msg: String) {
        self.action_error = Some(msg);
        self.action_error_at = Some(Instant::now());
    }

    fn clear_action_error(&mut self) {
        self.action_error = None;
        self.action_error_at = None;
    }

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    pub fn history_open(&self) -> bool {
        self.history_open
    }

    pub fn history_offset(&self) -> usize {
        self.history_offset
    }

    pub(crate) fn close_help(&mut self) {
        self.help_open = false;
    }

    pub(crate) fn close_history(&mut self) {
        self.history_open = false;
    }

    fn can_bet(&self) -> bool {
        self.scene == Scene::Table && self.phase != RoundPhase::Submitted
    }

    /// Limits first, then whether the balance covers the worst-case loss.
    fn validate_stake(&self, bet: Amount, risk: Risk) -> Result<(), String> {
        self.config.limits.check(bet, risk).map_err(|e| e.to_string())?;
        let stake = winnings(Multiplier::LOSS, bet, risk)
            .map(|loss| Amount::from_micros(loss.micros().saturating_abs()))
            .unwrap_or(Amount::from_micros(i64::MAX))
            .max(bet);
        if stake > self.balance {
            return Err(format!("stake {stake} exceeds balance {}", self.balance));
        }
        Ok(())
    }

    fn submit_bet(&mut self) -> bool {
        if !self.can_bet() || self.amount_entry_active() {
            return false;
        }
        if let Err(msg) = self.validate_stake(self.bet, self.risk) {
            log::debug!("bet refused: {msg}");
            self.set_action_error(msg);
            return false;
        }
        self.clear_action_error();
        self.pending = Some(SettleRequest { amount: self.bet, risk: self.risk });
        self.phase = RoundPhase::Submitted;
        true
    }

    fn adjust_risk(&mut self, up: bool) {
        if !self.can_bet() {
            return;
        }
        let limits = &self.config.limits;
        let next = if up {
            self.risk.saturating_add(Self::RISK_STEP)
        } else {
            self.risk.saturating_sub(Self::RISK_STEP)
        };
        self.risk = next.max(limits.min_risk()).min(limits.max_risk());
    }

    fn open_amount_entry(&mut self) -> bool {
        if !self.can_bet() {
            return false;
        }
        self.amount_entry = Some(self.bet.to_string());
        self.amount_entry_error = None;
        true
    }

    fn amount_entry_backspace(&mut self) {
        if let Some(buf) = self.amount_entry.as_mut() {
            buf.pop();
        }
        self.amount_entry_error = None;
    }

    fn amount_entry_push(&mut self, c: char) {
        if let Some(buf) = self.amount_entry.as_mut() {
            if buf.len() >= Self::AMOUNT_ENTRY_MAX_LEN {
                return;
            }
            match buf.split_once('.') {
                Some(_) if c == '.' => return,
                Some((_, frac)) if frac.len() >= crate::money::SCALE_DIGITS as usize => return,
                _ => buf.push(c),
            }
        }
        self.amount_entry_error = None;
    }

    fn amount_entry_adjust_min(&mut self, delta: i64) {
        let step = self.config.limits.min_bet().micros();
        if let Some(buf) = self.amount_entry.as_mut() {
            let cur = buf.parse::<Amount>().map(Amount::micros).unwrap_or(0);
            let next = cur.saturating_add(delta.saturating_mul(step)).max(0);
            *buf = Amount::from_micros(next).to_string();
        }
        self.amount_entry_error = None;
    }

    fn amount_entry_submit(&mut self) -> bool {
        let Some(buf) = self.amount_entry.as_ref() else {
            return false;
        };
        let amount = match buf.parse::<Amount>() {
            Ok(v) => v,
            Err(_) => {
                self.amount_entry_error = Some("Invalid amount".to_string());
                return false;
            }
        };
        if let Err(msg) = self.validate_stake(amount, self.risk) {
            self.amount_entry_error = Some(msg);
            return false;
        }
        self.bet = amount;
        self.amount_entry = None;
        self.amount_entry_error = None;
        true
    }

    fn amount_entry_cancel(&mut self) {
        self.amount_entry = None;
        self.amount_entry_error = None;
    }

    /// Returns true when the action changed the bet or submitted a round.
    pub fn handle_input(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::ToggleMenu => {
                self.toggle_menu();
                false
            }
            InputAction::ToggleHelp => {
                if self.scene == Scene::Table {
                    self.history_open = false;
                    self.help_open = !self.help_open;
                }
                false
            }
            InputAction::ToggleHistory => {
                if self.scene == Scene::Table {
                    self.help_open = false;
                    if !self.history_open {
                        self.history_offset = 0;
                    }
                    self.history_open = !self.history_open;
                }
                false
            }
            InputAction::HistoryUp => {
                if self.scene == Scene::Table && self.history_open {
                    let max_offset = self.history_len().saturating_sub(Self::HISTORY_PAGE_SIZE);
                    self.history_offset = (self.history_offset + 1).min(max_offset);
                }
                false
            }
            InputAction::HistoryDown => {
                if self.scene == Scene::Table && self.history_open && self.history_offset > 0 {
                    self.history_offset -= 1;
                }
                false
            }
            InputAction::MenuNext => {
                if self.scene == Scene::Menu {
                    self.menu_next();
                }
                false
            }
            InputAction::MenuPrev => {
                if self.scene == Scene::Menu {
                    self.menu_prev();
                }
                false
            }
            InputAction::MenuInc => {
                if self.scene == Scene::Menu {
                    self.menu_inc();
                }
                false
            }
            InputAction::MenuDec => {
                if self.scene == Scene::Menu {
                    self.menu_dec();
                }
                false
            }
            InputAction::MenuApply => {
                if self.scene == Scene::Menu {
                    self.apply_menu();
                }
                false
            }
            InputAction::MenuCancel => {
                if self.scene == Scene::Menu {
                    self.cancel_menu();
                }
                false
            }
            InputAction::SubmitBet => self.submit_bet(),
            InputAction::RiskUp => {
                self.adjust_risk(true);
                false
            }
            InputAction::RiskDown => {
                self.adjust_risk(false);
                false
            }
            InputAction::AmountOpen => self.open_amount_entry(),
            InputAction::AmountDigit(d) => {
                if d <= 9 {
                    self.amount_entry_push(char::from(b'0' + d));
                }
                false
            }
            InputAction::AmountPoint => {
                self.amount_entry_push('.');
                false
            }
            InputAction::AmountBackspace => {
                self.amount_entry_backspace();
                false
            }
            InputAction::AmountIncMin => {
                self.amount_entry_adjust_min(1);
                false
            }
            InputAction::AmountDecMin => {
                self.amount_entry_adjust_min(-1);
                false
            }
            InputAction::AmountSubmit => self.amount_entry_submit(),
            InputAction::AmountCancel => {
                self.amount_entry_cancel();
                false
            }
        }
    }

    /// Controller tick: expire stale errors and settle a submitted bet.
    pub fn on_tick(&mut self) {
        if let Some(at) = self.action_error_at {
            if at.elapsed() >= Self::ACTION_ERROR_TTL {
                self.clear_action_error();
            }
        }
        if self.phase != RoundPhase::Submitted {
            return;
        }
        let Some(req) = self.pending.take() else {
            self.phase = RoundPhase::Idle;
            return;
        };
        match self.dealer.settle(&req) {
            Ok(outcome) => {
                let Some(balance) = self.balance.checked_add(outcome.winnings) else {
                    self.set_action_error("balance overflow".to_string());
                    self.phase = RoundPhase::Idle;
                    return;
                };
                self.balance = balance;
                self.rounds_played += 1;
                if self.history.len() == Self::HISTORY_LIMIT {
                    self.history.pop_front();
                }
                self.history.push_back(RoundRecord {
                    round: self.rounds_played,
                    bet: req.amount,
                    risk: req.risk,
                    outcome,
                    balance_after: balance,
                });
                self.history_offset = 0;
                self.phase = RoundPhase::Resolved;
            }
            Err(err) => {
                log::warn!("round failed: {err}");
                self.set_action_error(err.to_string());
                self.phase = RoundPhase::Idle;
            }
        }
    }

    /// Start over with the current table settings.
    pub(crate) fn reset_session(&mut self) {
        self.dealer = Self::make_dealer(&self.config, self.seed);
        self.balance = self.config.starting_balance;
        self.bet = self.config.limits.min_bet();
        self.risk = Self::default_risk(&self.config);
        self.phase = RoundPhase::Idle;
        self.pending = None;
        self.history.clear();
        self.rounds_played = 0;
        self.history_offset = 0;
        self.amount_entry_cancel();
        self.clear_action_error();
    }
}
