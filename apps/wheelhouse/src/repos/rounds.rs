//! Round-result repository functions (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;

use crate::adapters::rounds_sea::{self, RoundResultCreate};
use crate::domain::wheel::{Color, Outcome};
use crate::entities::bets::BetColor;
use crate::entities::game_rounds;
use crate::errors::domain::DomainError;

/// Finished-round domain model.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundResult {
    pub id: i64,
    pub round_no: i64,
    pub outcome: Outcome,
    pub created_at: time::OffsetDateTime,
}

/// Record a finished round's outcome.
pub async fn record_result<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_no: i64,
    outcome: Outcome,
) -> Result<RoundResult, DomainError> {
    let dto = RoundResultCreate {
        round_no,
        pocket: outcome.pocket as i16,
        color: BetColor::from(outcome.color),
    };
    let model = rounds_sea::insert_result(conn, dto).await?;
    Ok(RoundResult::from(model))
}

/// Most recent finished rounds, newest first.
pub async fn recent<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    limit: u64,
) -> Result<Vec<RoundResult>, DomainError> {
    let models = rounds_sea::recent(conn, limit).await?;
    Ok(models.into_iter().map(RoundResult::from).collect())
}

// Conversions between SeaORM models and domain models

impl From<game_rounds::Model> for RoundResult {
    fn from(model: game_rounds::Model) -> Self {
        let color = Color::from(model.color);
        Self {
            id: model.id,
            round_no: model.round_no,
            outcome: Outcome {
                pocket: model.pocket as u8,
                color,
            },
            created_at: model.created_at,
        }
    }
}

impl From<BetColor> for Color {
    fn from(c: BetColor) -> Self {
        match c {
            BetColor::Red => Color::Red,
            BetColor::Black => Color::Black,
            BetColor::Green => Color::Green,
        }
    }
}

impl From<Color> for BetColor {
    fn from(c: Color) -> Self {
        match c {
            Color::Red => BetColor::Red,
            Color::Black => BetColor::Black,
            Color::Green => BetColor::Green,
        }
    }
}
