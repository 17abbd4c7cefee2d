//! Round/phase state machine and the shared game-state container.

use std::collections::VecDeque;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::bet::Bet;
use crate::domain::wheel::Outcome;
use crate::errors::domain::{DomainError, ValidationKind};

/// Scheduler phases, in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Bets are accepted.
    Betting,
    /// Bet set frozen; clients animate the wheel.
    Spinning,
    /// Outcome drawn and settled; brief display pause.
    Result,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Betting => "betting",
            Phase::Spinning => "spinning",
            Phase::Result => "result",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current round: id, phase, countdown, and the outcome once drawn.
///
/// The outcome is written exactly once, at the spinning -> result
/// transition, and is immutable afterward.
#[derive(Debug, Clone, PartialEq)]
pub struct Round {
    pub id: u64,
    pub phase: Phase,
    pub seconds_remaining: u32,
    pub outcome: Option<Outcome>,
}

/// One finished round as remembered by the in-memory history ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub round_id: u64,
    pub outcome: Outcome,
}

/// Read-only view of the game state, cheap to clone and safe to push or
/// poll on every tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub round_id: u64,
    pub phase: Phase,
    pub seconds_remaining: u32,
    /// Most recently drawn outcome, across rounds.
    pub last_result: Option<Outcome>,
}

/// The single owned game-state record. The scheduler task and the bet
/// intake path are its only writers; everyone else sees snapshots.
#[derive(Debug)]
pub struct GameState {
    pub round: Round,
    /// Bets accepted for the current round, at most one per user.
    pub bets: Vec<Bet>,
    /// Finished rounds, newest first, capped at `history_depth`.
    pub history: VecDeque<HistoryEntry>,
    history_depth: usize,
}

impl GameState {
    /// Idle state before the scheduler opens round 1: round id 0 in a spent
    /// result phase, so `open_round` starts the real sequence.
    pub fn new(history_depth: usize) -> Self {
        Self {
            round: Round {
                id: 0,
                phase: Phase::Result,
                seconds_remaining: 0,
                outcome: None,
            },
            bets: Vec::new(),
            history: VecDeque::with_capacity(history_depth),
            history_depth,
        }
    }

    /// Start the next round: allocate the next id, clear the bet set, open
    /// the betting window.
    pub fn open_round(&mut self, betting_seconds: u32) -> u64 {
        self.round = Round {
            id: self.round.id + 1,
            phase: Phase::Betting,
            seconds_remaining: betting_seconds,
            outcome: None,
        };
        self.bets.clear();
        self.round.id
    }

    /// Freeze bet acceptance and enter the spin animation window.
    pub fn begin_spin(&mut self, spinning_seconds: u32) {
        self.round.phase = Phase::Spinning;
        self.round.seconds_remaining = spinning_seconds;
    }

    /// Record the drawn outcome, append it to history, and enter the result
    /// display pause. Rejects a second write for the same round.
    pub fn begin_result(
        &mut self,
        outcome: Outcome,
        result_seconds: u32,
    ) -> Result<(), DomainError> {
        if self.round.outcome.is_some() {
            return Err(DomainError::validation(
                ValidationKind::Other("OUTCOME_ALREADY_DRAWN".into()),
                format!("round {} already has an outcome", self.round.id),
            ));
        }
        self.round.outcome = Some(outcome);
        self.round.phase = Phase::Result;
        self.round.seconds_remaining = result_seconds;
        self.history.push_front(HistoryEntry {
            round_id: self.round.id,
            outcome,
        });
        self.history.truncate(self.history_depth);
        Ok(())
    }

    /// Burn one second off the current phase. Returns true when the phase
    /// has fully elapsed.
    pub fn tick_second(&mut self) -> bool {
        if self.round.seconds_remaining > 0 {
            self.round.seconds_remaining -= 1;
        }
        self.round.seconds_remaining == 0
    }

    /// Most recently drawn outcome, regardless of the current phase.
    pub fn last_result(&self) -> Option<Outcome> {
        self.history.front().map(|entry| entry.outcome)
    }

    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            round_id: self.round.id,
            phase: self.round.phase,
            seconds_remaining: self.round.seconds_remaining,
            last_result: self.last_result(),
        }
    }

    /// History tail, newest first.
    pub fn history_tail(&self) -> Vec<HistoryEntry> {
        self.history.iter().copied().collect()
    }
}
