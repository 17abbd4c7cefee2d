//! Bet records and intake validation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::wheel::Color;
use crate::errors::domain::{DomainError, ValidationKind};

/// Color a player can back. Kept separate from [`Color`] so the accepted
/// choices can diverge from what the wheel produces (straight-up pocket
/// bets would extend this enum, not `Color`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BetChoice {
    Red,
    Black,
    Green,
}

impl BetChoice {
    pub fn color(&self) -> Color {
        match self {
            BetChoice::Red => Color::Red,
            BetChoice::Black => Color::Black,
            BetChoice::Green => Color::Green,
        }
    }

    pub fn as_str(&self) -> &'static str {
        self.color().as_str()
    }

    /// Parse the wire spelling used by clients ("red" | "black" | "green").
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "red" => Ok(BetChoice::Red),
            "black" => Ok(BetChoice::Black),
            "green" => Ok(BetChoice::Green),
            other => Err(DomainError::validation(
                ValidationKind::InvalidChoice,
                format!("unknown choice '{other}'"),
            )),
        }
    }
}

impl fmt::Display for BetChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One accepted bet. Created during the betting phase, mutated exactly once
/// at settlement (settled flag + payout), never afterward.
#[derive(Debug, Clone, PartialEq)]
pub struct Bet {
    /// Persisted row id, set once the store has recorded the bet.
    pub id: Option<i64>,
    pub user_id: i64,
    pub round_id: u64,
    pub choice: BetChoice,
    pub amount: i64,
    pub settled: bool,
    pub payout: i64,
}

impl Bet {
    pub fn new(user_id: i64, round_id: u64, choice: BetChoice, amount: i64) -> Self {
        Self {
            id: None,
            user_id,
            round_id,
            choice,
            amount,
            settled: false,
            payout: 0,
        }
    }
}

/// Stake bounds check. Balance coverage is the store's concern (conditional
/// debit); this only guards the configured min/max window.
pub fn validate_stake(amount: i64, min_bet: i64, max_bet: i64) -> Result<(), DomainError> {
    if amount < min_bet {
        return Err(DomainError::validation(
            ValidationKind::StakeBelowMinimum,
            format!("stake {amount} below minimum {min_bet}"),
        ));
    }
    if amount > max_bet {
        return Err(DomainError::validation(
            ValidationKind::StakeAboveMaximum,
            format!("stake {amount} above maximum {max_bet}"),
        ));
    }
    Ok(())
}
