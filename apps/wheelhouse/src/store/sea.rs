//! SeaORM-backed [`GameStore`] over the repos layer.

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::domain::bet::Bet;
use crate::domain::payout::Settlement;
use crate::domain::wheel::Outcome;
use crate::errors::domain::DomainError;
use crate::repos::bets::BetRecord;
use crate::repos::rounds::RoundResult;
use crate::repos::users::UserProfile;
use crate::repos::{bets, rounds, users};
use crate::store::GameStore;

/// Store over a pooled SeaORM connection (Postgres or SQLite file).
#[derive(Debug, Clone)]
pub struct SeaGameStore {
    db: DatabaseConnection,
    starting_balance: i64,
}

impl SeaGameStore {
    pub fn new(db: DatabaseConnection, starting_balance: i64) -> Self {
        Self {
            db,
            starting_balance,
        }
    }
}

#[async_trait]
impl GameStore for SeaGameStore {
    async fn ensure_user(&self, user_id: i64) -> Result<UserProfile, DomainError> {
        users::ensure_user(&self.db, user_id, self.starting_balance).await
    }

    async fn get_balance(&self, user_id: i64) -> Result<i64, DomainError> {
        users::get_balance(&self.db, user_id).await
    }

    async fn debit(&self, user_id: i64, amount: i64) -> Result<i64, DomainError> {
        users::debit(&self.db, user_id, amount).await
    }

    async fn credit(&self, user_id: i64, amount: i64) -> Result<i64, DomainError> {
        users::credit(&self.db, user_id, amount).await
    }

    async fn record_bet(&self, bet: &Bet, potential_win: i64) -> Result<i64, DomainError> {
        let record = bets::create(
            &self.db,
            bet.user_id,
            bet.round_id as i64,
            bet.choice,
            bet.amount,
            potential_win,
        )
        .await?;
        Ok(record.id)
    }

    async fn settle_bet(&self, settlement: &Settlement) -> Result<(), DomainError> {
        // One transaction per line so a failure rolls back that bet alone.
        let txn = self.db.begin().await?;
        if let Some(bet_id) = settlement.bet_id {
            bets::settle(&txn, bet_id, settlement.payout).await?;
        }
        if settlement.payout > 0 {
            users::credit(&txn, settlement.user_id, settlement.payout).await?;
        }
        let (won, lost) = if settlement.won() {
            (settlement.payout, 0)
        } else {
            (0, settlement.stake)
        };
        users::apply_round_stats(&txn, settlement.user_id, won, lost).await?;
        txn.commit().await?;
        Ok(())
    }

    async fn record_round_result(
        &self,
        round_id: u64,
        outcome: Outcome,
    ) -> Result<(), DomainError> {
        rounds::record_result(&self.db, round_id as i64, outcome).await?;
        Ok(())
    }

    async fn profile(&self, user_id: i64) -> Result<UserProfile, DomainError> {
        users::find_profile(&self.db, user_id).await
    }

    async fn recent_rounds(&self, limit: u64) -> Result<Vec<RoundResult>, DomainError> {
        rounds::recent(&self.db, limit).await
    }

    async fn recent_bets(&self, user_id: i64, limit: u64) -> Result<Vec<BetRecord>, DomainError> {
        bets::recent_for_user(&self.db, user_id, limit).await
    }
}
