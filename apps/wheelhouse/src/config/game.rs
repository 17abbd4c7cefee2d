//! Game configuration: wheel layout, payout table, phase durations, stake
//! bounds. Loaded from a named preset plus optional env overrides.

use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::payout::MultiplierTable;
use crate::domain::wheel::Wheel;
use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub wheel: Wheel,
    pub multipliers: MultiplierTable,
    pub betting_seconds: u32,
    pub spinning_seconds: u32,
    pub result_seconds: u32,
    pub min_bet: i64,
    pub max_bet: i64,
    pub starting_balance: i64,
    /// In-memory history ring depth; also the tail length pushed with each
    /// round result.
    pub history_depth: usize,
}

impl GameConfig {
    /// Canonical preset: 37-pocket European wheel, 36x green.
    pub fn european() -> Self {
        Self {
            wheel: Wheel::European,
            multipliers: MultiplierTable {
                red: 2,
                black: 2,
                green: 36,
            },
            betting_seconds: 30,
            spinning_seconds: 10,
            result_seconds: 5,
            min_bet: 1,
            max_bet: 10_000,
            starting_balance: 1_000,
            history_depth: 10,
        }
    }

    /// 15-sector wheel with the 14x green payout some deployments run.
    pub fn compact() -> Self {
        Self {
            wheel: Wheel::Compact,
            multipliers: MultiplierTable {
                red: 2,
                black: 2,
                green: 14,
            },
            ..Self::european()
        }
    }

    /// Load the preset named by `WHEELHOUSE_PRESET` (default `european`),
    /// then apply any `WHEELHOUSE_*` overrides, then validate.
    pub fn from_env() -> Result<Self, AppError> {
        let mut config = match env::var("WHEELHOUSE_PRESET").as_deref() {
            Err(_) | Ok("european") => Self::european(),
            Ok("compact") => Self::compact(),
            Ok(other) => {
                return Err(AppError::config(format!(
                    "Unknown preset '{other}' (expected 'european' or 'compact')"
                )))
            }
        };

        if let Some(v) = env_parse::<u32>("WHEELHOUSE_BETTING_SECONDS")? {
            config.betting_seconds = v;
        }
        if let Some(v) = env_parse::<u32>("WHEELHOUSE_SPINNING_SECONDS")? {
            config.spinning_seconds = v;
        }
        if let Some(v) = env_parse::<u32>("WHEELHOUSE_RESULT_SECONDS")? {
            config.result_seconds = v;
        }
        if let Some(v) = env_parse::<i64>("WHEELHOUSE_MIN_BET")? {
            config.min_bet = v;
        }
        if let Some(v) = env_parse::<i64>("WHEELHOUSE_MAX_BET")? {
            config.max_bet = v;
        }
        if let Some(v) = env_parse::<i64>("WHEELHOUSE_STARTING_BALANCE")? {
            config.starting_balance = v;
        }
        if let Some(v) = env_parse::<i64>("WHEELHOUSE_GREEN_MULTIPLIER")? {
            config.multipliers.green = v;
        }
        if let Some(v) = env_parse::<usize>("WHEELHOUSE_HISTORY_DEPTH")? {
            config.history_depth = v;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.betting_seconds == 0 || self.spinning_seconds == 0 {
            return Err(AppError::config(
                "betting and spinning phases need a nonzero duration",
            ));
        }
        if self.min_bet < 1 {
            return Err(AppError::config("min_bet must be at least 1"));
        }
        if self.max_bet < self.min_bet {
            return Err(AppError::config(format!(
                "max_bet {} below min_bet {}",
                self.max_bet, self.min_bet
            )));
        }
        if self.starting_balance < 0 {
            return Err(AppError::config("starting_balance must not be negative"));
        }
        if self.history_depth == 0 {
            return Err(AppError::config("history_depth must be at least 1"));
        }
        if self.multipliers.red < 1 || self.multipliers.black < 1 || self.multipliers.green < 1 {
            return Err(AppError::config("multipliers must be at least 1"));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::european()
    }
}

fn env_parse<T: FromStr>(name: &str) -> Result<Option<T>, AppError> {
    match env::var(name) {
        Err(_) => Ok(None),
        Ok(raw) => raw
            .parse::<T>()
            .map(Some)
            .map_err(|_| AppError::config(format!("'{name}' has unparseable value '{raw}'"))),
    }
}
