//! Persistence contract consumed by bet intake and settlement.
//!
//! The engine never talks to SeaORM directly from its services; everything
//! goes through [`GameStore`] so the loop can run against Postgres, a SQLite
//! file, or the in-memory store interchangeably.

use async_trait::async_trait;

use crate::domain::bet::Bet;
use crate::domain::payout::Settlement;
use crate::domain::wheel::Outcome;
use crate::errors::domain::DomainError;
use crate::repos::bets::BetRecord;
use crate::repos::rounds::RoundResult;
use crate::repos::users::UserProfile;

mod memory;
mod sea;

pub use memory::MemoryGameStore;
pub use sea::SeaGameStore;

#[async_trait]
pub trait GameStore: Send + Sync {
    /// Fetch-or-create a user, seeding the configured starting balance.
    async fn ensure_user(&self, user_id: i64) -> Result<UserProfile, DomainError>;

    async fn get_balance(&self, user_id: i64) -> Result<i64, DomainError>;

    /// Conditional debit; never lets a balance go negative. Returns the
    /// balance after the debit.
    async fn debit(&self, user_id: i64, amount: i64) -> Result<i64, DomainError>;

    /// Credit a payout. Returns the balance after the credit.
    async fn credit(&self, user_id: i64, amount: i64) -> Result<i64, DomainError>;

    /// Record an accepted bet; returns its persistent id.
    async fn record_bet(&self, bet: &Bet, potential_win: i64) -> Result<i64, DomainError>;

    /// Apply one settlement line: credit any payout, mark the bet settled,
    /// accumulate the user's cumulative stats. Atomic per line.
    async fn settle_bet(&self, settlement: &Settlement) -> Result<(), DomainError>;

    /// Record a finished round's outcome.
    async fn record_round_result(
        &self,
        round_id: u64,
        outcome: Outcome,
    ) -> Result<(), DomainError>;

    async fn profile(&self, user_id: i64) -> Result<UserProfile, DomainError>;

    /// Most recent finished rounds, newest first.
    async fn recent_rounds(&self, limit: u64) -> Result<Vec<RoundResult>, DomainError>;

    /// A user's most recent bets, newest first.
    async fn recent_bets(&self, user_id: i64, limit: u64) -> Result<Vec<BetRecord>, DomainError>;
}
