use crate::config::GameConfig;
use crate::money::Amount;
use crate::payout::BetLimits;

use super::{AppState, Scene};

/// Bet limit choices offered by the menu. `Configured` keeps whatever the
/// loaded config file asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitsPreset {
    Configured,
    Casual,
    HighRoller,
}

impl LimitsPreset {
    pub(crate) fn matching(limits: &BetLimits) -> Self {
        if *limits == BetLimits::default() {
            LimitsPreset::Casual
        } else if *limits == BetLimits::high_roller() {
            LimitsPreset::HighRoller
        } else {
            LimitsPreset::Configured
        }
    }

    fn limits(self, base: &GameConfig) -> BetLimits {
        match self {
            LimitsPreset::Configured => base.limits,
            LimitsPreset::Casual => BetLimits::default(),
            LimitsPreset::HighRoller => BetLimits::high_roller(),
        }
    }

    fn label(self) -> &'static str {
        match self {
            LimitsPreset::Configured => "Config file",
            LimitsPreset::Casual => "Casual",
            LimitsPreset::HighRoller => "High roller",
        }
    }

    fn next(self) -> Self {
        match self {
            LimitsPreset::Configured => LimitsPreset::Casual,
            LimitsPreset::Casual => LimitsPreset::HighRoller,
            LimitsPreset::HighRoller => LimitsPreset::Configured,
        }
    }

    fn prev(self) -> Self {
        match self {
            LimitsPreset::Configured => LimitsPreset::HighRoller,
            LimitsPreset::Casual => LimitsPreset::Configured,
            LimitsPreset::HighRoller => LimitsPreset::Casual,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum MenuItem {
    Table,
    Limits,
    StartingBalance,
}

const MENU_ITEMS: [MenuItem; 3] = [MenuItem::Table, MenuItem::Limits, MenuItem::StartingBalance];

const BALANCE_STEP: Amount = Amount::from_units(50);

impl MenuItem {
    fn display(self, app: &AppState) -> String {
        match self {
            MenuItem::Table => format!("Payout Table: {}", app.cfg_table.label()),
            MenuItem::Limits => {
                let limits = app.cfg_limits.limits(&app.base_config);
                format!(
                    "Limits: {} (bet {}-{}, risk {}-{})",
                    app.cfg_limits.label(),
                    limits.min_bet(),
                    limits.max_bet(),
                    limits.min_risk(),
                    limits.max_risk()
                )
            }
            MenuItem::StartingBalance => {
                format!("Starting Balance: ${}", app.cfg_starting_balance)
            }
        }
    }

    fn inc(self, app: &mut AppState) {
        match self {
            MenuItem::Table => app.cfg_table = app.cfg_table.next(),
            MenuItem::Limits => app.cfg_limits = app.cfg_limits.next(),
            MenuItem::StartingBalance => {
                if let Some(v) = app.cfg_starting_balance.checked_add(BALANCE_STEP) {
                    app.cfg_starting_balance = v;
                }
            }
        }
    }

    fn dec(self, app: &mut AppState) {
        match self {
            // Two presets, so previous and next coincide.
            MenuItem::Table => app.cfg_table = app.cfg_table.next(),
            MenuItem::Limits => app.cfg_limits = app.cfg_limits.prev(),
            MenuItem::StartingBalance => {
                app.cfg_starting_balance = app
                    .cfg_starting_balance
                    .checked_sub(BALANCE_STEP)
                    .unwrap_or(BALANCE_STEP)
                    .max(BALANCE_STEP);
            }
        }
    }
}

impl AppState {
    pub fn menu_items_display(&self) -> Vec<String> {
        MENU_ITEMS.iter().map(|item| item.display(self)).collect()
    }

    pub fn toggle_menu(&mut self) {
        self.close_help();
        self.close_history();
        self.scene = match self.scene {
            Scene::Menu => Scene::Table,
            _ => {
                self.open_menu();
                Scene::Menu
            }
        };
    }

    pub fn open_menu(&mut self) {
        self.close_help();
        self.close_history();
        self.menu_index = 0;
        self.cfg_table = self.config.table;
        self.cfg_limits = if self.config.limits == self.base_config.limits {
            LimitsPreset::Configured
        } else {
            LimitsPreset::matching(&self.config.limits)
        };
        self.cfg_starting_balance = self.config.starting_balance;
        self.scene = Scene::Menu;
    }

    /// Rebuild the table from the menu choices and start a fresh session.
    pub fn apply_menu(&mut self) {
        if self.cfg_starting_balance.is_negative() {
            self.cfg_starting_balance = Amount::ZERO;
        }
        self.config = GameConfig {
            limits: self.cfg_limits.limits(&self.base_config),
            table: self.cfg_table,
            multipliers: self.base_config.multipliers.clone(),
            starting_balance: self.cfg_starting_balance,
        };
        log::info!(
            "new session: {} table, balance {}",
            self.config.table.label(),
            self.config.starting_balance
        );
        self.reset_session();
        self.scene = Scene::Table;
    }

    pub fn cancel_menu(&mut self) {
        self.scene = Scene::Table;
    }

    pub fn menu_next(&mut self) {
        self.menu_index = (self.menu_index + 1) % MENU_ITEMS.len();
    }
    pub fn menu_prev(&mut self) {
        self.menu_index = (self.menu_index + MENU_ITEMS.len() - 1) % MENU_ITEMS.len();
    }
    pub fn menu_inc(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.inc(self);
    }
    pub fn menu_dec(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.dec(self);
    }
}
