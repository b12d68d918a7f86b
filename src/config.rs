use crate::evaluator::Category;
use crate::money::Amount;
use crate::payout::{BetLimits, Multiplier, PayoutCalculator, PayoutTable};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("starting balance must not be negative, got {0}")]
    NegativeBalance(Amount),
}

/// Which built-in payout table a game starts from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TablePreset {
    #[default]
    Standard,
    Boosted,
}

impl TablePreset {
    pub fn table(self) -> PayoutTable {
        match self {
            TablePreset::Standard => PayoutTable::standard(),
            TablePreset::Boosted => PayoutTable::boosted(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TablePreset::Standard => "Standard",
            TablePreset::Boosted => "Boosted",
        }
    }

    pub fn next(self) -> Self {
        match self {
            TablePreset::Standard => TablePreset::Boosted,
            TablePreset::Boosted => TablePreset::Standard,
        }
    }
}

/// Game settings, loadable from JSON. Every field is optional in the file.
///
/// ```
/// use pokerbet::config::{GameConfig, TablePreset};
///
/// let json = r#"{ "table": "boosted", "multipliers": { "flush": 3.5 } }"#;
/// let cfg = GameConfig::from_json_str(json).unwrap();
/// assert_eq!(cfg.table, TablePreset::Boosted);
/// assert_eq!(cfg.payout_table().get(pokerbet::evaluator::Category::Flush).tenths(), 35);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub limits: BetLimits,
    pub table: TablePreset,
    /// Per-category overrides applied on top of the preset.
    pub multipliers: BTreeMap<Category, Multiplier>,
    pub starting_balance: Amount,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            limits: BetLimits::default(),
            table: TablePreset::default(),
            multipliers: BTreeMap::new(),
            starting_balance: Amount::from_units(100),
        }
    }
}

impl GameConfig {
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: GameConfig = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.display().to_string(), source })?;
        let cfg = Self::from_json_str(&raw)?;
        log::info!("loaded config from {}", path.display());
        Ok(cfg)
    }

    /// Limits are validated while deserializing; this covers the rest.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.starting_balance.is_negative() {
            return Err(ConfigError::NegativeBalance(self.starting_balance));
        }
        Ok(())
    }

    pub fn payout_table(&self) -> PayoutTable {
        self.multipliers.iter().fold(self.table.table(), |t, (&c, &m)| t.with(c, m))
    }

    pub fn calculator(&self) -> PayoutCalculator {
        PayoutCalculator::new(self.payout_table(), self.limits)
    }
}
