//! In-memory [`GameStore`] for tests and DB-less runs.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::bet::Bet;
use crate::domain::payout::Settlement;
use crate::domain::wheel::Outcome;
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};
use crate::repos::bets::BetRecord;
use crate::repos::rounds::RoundResult;
use crate::repos::users::UserProfile;
use crate::store::GameStore;

#[derive(Debug, Default)]
struct Inner {
    users: HashMap<i64, UserProfile>,
    bets: Vec<BetRecord>,
    rounds: Vec<RoundResult>,
}

/// Mutex-held maps with the same observable behavior as the SeaORM store.
#[derive(Debug)]
pub struct MemoryGameStore {
    starting_balance: i64,
    inner: Mutex<Inner>,
}

impl MemoryGameStore {
    pub fn new(starting_balance: i64) -> Self {
        Self {
            starting_balance,
            inner: Mutex::new(Inner::default()),
        }
    }

    fn with_inner<T>(&self, f: impl FnOnce(&mut Inner) -> T) -> T {
        let mut inner = self.inner.lock().expect("memory store lock poisoned");
        f(&mut inner)
    }
}

fn missing_user(user_id: i64) -> DomainError {
    DomainError::not_found(NotFoundKind::User, format!("user {user_id}"))
}

#[async_trait]
impl GameStore for MemoryGameStore {
    async fn ensure_user(&self, user_id: i64) -> Result<UserProfile, DomainError> {
        Ok(self.with_inner(|inner| {
            inner
                .users
                .entry(user_id)
                .or_insert_with(|| UserProfile {
                    id: user_id,
                    balance: self.starting_balance,
                    games_played: 0,
                    total_won: 0,
                    total_lost: 0,
                })
                .clone()
        }))
    }

    async fn get_balance(&self, user_id: i64) -> Result<i64, DomainError> {
        self.with_inner(|inner| {
            inner
                .users
                .get(&user_id)
                .map(|u| u.balance)
                .ok_or_else(|| missing_user(user_id))
        })
    }

    async fn debit(&self, user_id: i64, amount: i64) -> Result<i64, DomainError> {
        self.with_inner(|inner| {
            let user = inner
                .users
                .get_mut(&user_id)
                .ok_or_else(|| missing_user(user_id))?;
            if user.balance < amount {
                return Err(DomainError::validation(
                    ValidationKind::InsufficientFunds,
                    format!("stake {amount} exceeds balance of user {user_id}"),
                ));
            }
            user.balance -= amount;
            Ok(user.balance)
        })
    }

    async fn credit(&self, user_id: i64, amount: i64) -> Result<i64, DomainError> {
        self.with_inner(|inner| {
            let user = inner
                .users
                .get_mut(&user_id)
                .ok_or_else(|| missing_user(user_id))?;
            user.balance += amount;
            Ok(user.balance)
        })
    }

    async fn record_bet(&self, bet: &Bet, potential_win: i64) -> Result<i64, DomainError> {
        self.with_inner(|inner| {
            let id = inner.bets.len() as i64 + 1;
            inner.bets.push(BetRecord {
                id,
                user_id: bet.user_id,
                round_no: bet.round_id as i64,
                choice: bet.choice,
                amount: bet.amount,
                potential_win,
                settled: false,
                payout: 0,
                created_at: time::OffsetDateTime::now_utc(),
            });
            Ok(id)
        })
    }

    async fn settle_bet(&self, settlement: &Settlement) -> Result<(), DomainError> {
        self.with_inner(|inner| {
            if let Some(bet_id) = settlement.bet_id {
                let bet = inner
                    .bets
                    .iter_mut()
                    .find(|b| b.id == bet_id && !b.settled)
                    .ok_or_else(|| {
                        DomainError::not_found(NotFoundKind::Bet, format!("unsettled bet {bet_id}"))
                    })?;
                bet.settled = true;
                bet.payout = settlement.payout;
            }
            let user = inner
                .users
                .get_mut(&settlement.user_id)
                .ok_or_else(|| missing_user(settlement.user_id))?;
            user.balance += settlement.payout;
            user.games_played += 1;
            if settlement.won() {
                user.total_won += settlement.payout;
            } else {
                user.total_lost += settlement.stake;
            }
            Ok(())
        })
    }

    async fn record_round_result(
        &self,
        round_id: u64,
        outcome: Outcome,
    ) -> Result<(), DomainError> {
        self.with_inner(|inner| {
            let id = inner.rounds.len() as i64 + 1;
            inner.rounds.push(RoundResult {
                id,
                round_no: round_id as i64,
                outcome,
                created_at: time::OffsetDateTime::now_utc(),
            });
            Ok(())
        })
    }

    async fn profile(&self, user_id: i64) -> Result<UserProfile, DomainError> {
        self.with_inner(|inner| {
            inner
                .users
                .get(&user_id)
                .cloned()
                .ok_or_else(|| missing_user(user_id))
        })
    }

    async fn recent_rounds(&self, limit: u64) -> Result<Vec<RoundResult>, DomainError> {
        self.with_inner(|inner| {
            Ok(inner
                .rounds
                .iter()
                .rev()
                .take(limit as usize)
                .cloned()
                .collect())
        })
    }

    async fn recent_bets(&self, user_id: i64, limit: u64) -> Result<Vec<BetRecord>, DomainError> {
        self.with_inner(|inner| {
            Ok(inner
                .bets
                .iter()
                .rev()
                .filter(|b| b.user_id == user_id)
                .take(limit as usize)
                .cloned()
                .collect())
        })
    }
}
