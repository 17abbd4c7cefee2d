//! Bet repository functions (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;

use crate::adapters::bets_sea::{self, BetCreate};
use crate::domain::bet::BetChoice;
use crate::domain::wheel::Color;
use crate::entities::bets;
use crate::entities::bets::BetColor;
use crate::errors::domain::DomainError;

/// Persisted bet domain model.
#[derive(Debug, Clone, PartialEq)]
pub struct BetRecord {
    pub id: i64,
    pub user_id: i64,
    pub round_no: i64,
    pub choice: BetChoice,
    pub amount: i64,
    pub potential_win: i64,
    pub settled: bool,
    pub payout: i64,
    pub created_at: time::OffsetDateTime,
}

/// Record an accepted bet; returns the stored record with its id.
pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    round_no: i64,
    choice: BetChoice,
    amount: i64,
    potential_win: i64,
) -> Result<BetRecord, DomainError> {
    let dto = BetCreate {
        user_id,
        round_no,
        choice: BetColor::from(choice.color()),
        amount,
        potential_win,
    };
    let model = bets_sea::insert(conn, dto).await?;
    Ok(BetRecord::from(model))
}

/// Mark a bet settled with its payout.
pub async fn settle<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    bet_id: i64,
    payout: i64,
) -> Result<(), DomainError> {
    bets_sea::mark_settled(conn, bet_id, payout).await?;
    Ok(())
}

/// A user's most recent bets, newest first.
pub async fn recent_for_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    limit: u64,
) -> Result<Vec<BetRecord>, DomainError> {
    let models = bets_sea::recent_for_user(conn, user_id, limit).await?;
    Ok(models.into_iter().map(BetRecord::from).collect())
}

// Conversions between SeaORM models and domain models

impl From<bets::Model> for BetRecord {
    fn from(model: bets::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            round_no: model.round_no,
            choice: BetChoice::from(Color::from(model.choice)),
            amount: model.amount,
            potential_win: model.potential_win,
            settled: model.settled,
            payout: model.payout,
            created_at: model.created_at,
        }
    }
}

impl From<Color> for BetChoice {
    fn from(c: Color) -> Self {
        match c {
            Color::Red => BetChoice::Red,
            Color::Black => BetChoice::Black,
            Color::Green => BetChoice::Green,
        }
    }
}
