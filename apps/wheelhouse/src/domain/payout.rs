//! Pure payout computation over a finished round's bet set.

use serde::{Deserialize, Serialize};

use crate::domain::bet::{Bet, BetChoice};
use crate::domain::wheel::{Color, Outcome};

/// Payout ratio per winning color. Red/black pay even-odds style 2x; green
/// pays the configured long-shot ratio (36x European, 14x compact).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiplierTable {
    pub red: i64,
    pub black: i64,
    pub green: i64,
}

impl MultiplierTable {
    pub fn for_color(&self, color: Color) -> i64 {
        match color {
            Color::Red => self.red,
            Color::Black => self.black,
            Color::Green => self.green,
        }
    }
}

/// Payout for a single bet: stake x multiplier on a color match, else zero.
/// The stake was already debited at intake, so a winner's balance moves by
/// the full payout, not payout minus stake.
pub fn payout_for(choice: BetChoice, outcome: Outcome, amount: i64, table: &MultiplierTable) -> i64 {
    if choice.color() == outcome.color {
        amount * table.for_color(outcome.color)
    } else {
        0
    }
}

/// One line of a round's settlement, computed before any balance write.
#[derive(Debug, Clone, PartialEq)]
pub struct Settlement {
    pub bet_id: Option<i64>,
    pub user_id: i64,
    pub round_id: u64,
    pub choice: BetChoice,
    pub stake: i64,
    pub payout: i64,
}

impl Settlement {
    pub fn won(&self) -> bool {
        self.payout > 0
    }
}

/// Compute the full settlement plan for a round. Pure; the store side
/// effects are applied per line by the settlement service.
pub fn settlement_plan(bets: &[Bet], outcome: Outcome, table: &MultiplierTable) -> Vec<Settlement> {
    bets.iter()
        .map(|bet| Settlement {
            bet_id: bet.id,
            user_id: bet.user_id,
            round_id: bet.round_id,
            choice: bet.choice,
            stake: bet.amount,
            payout: payout_for(bet.choice, outcome, bet.amount, table),
        })
        .collect()
}
