//! SeaORM adapter for the bets table - generic over ConnectionTrait.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

use crate::entities::bets;

pub mod dto;

pub use dto::BetCreate;

pub async fn insert<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: BetCreate,
) -> Result<bets::Model, sea_orm::DbErr> {
    let model = bets::ActiveModel {
        id: NotSet,
        user_id: Set(dto.user_id),
        round_no: Set(dto.round_no),
        choice: Set(dto.choice),
        amount: Set(dto.amount),
        potential_win: Set(dto.potential_win),
        settled: Set(false),
        payout: Set(0),
        created_at: Set(time::OffsetDateTime::now_utc()),
    };
    model.insert(conn).await
}

/// Flip a bet to settled and record its payout. Settlement is the only
/// writer of these two fields, and only ever once per bet.
pub async fn mark_settled<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    bet_id: i64,
    payout: i64,
) -> Result<(), sea_orm::DbErr> {
    let result = bets::Entity::update_many()
        .col_expr(bets::Column::Settled, Expr::val(true).into())
        .col_expr(bets::Column::Payout, Expr::val(payout).into())
        .filter(bets::Column::Id.eq(bet_id))
        .filter(bets::Column::Settled.eq(false))
        .exec(conn)
        .await?;

    if result.rows_affected == 0 {
        return Err(sea_orm::DbErr::RecordNotFound(format!(
            "Unsettled bet {bet_id} not found"
        )));
    }
    Ok(())
}

/// A user's most recent bets, newest first.
pub async fn recent_for_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    limit: u64,
) -> Result<Vec<bets::Model>, sea_orm::DbErr> {
    bets::Entity::find()
        .filter(bets::Column::UserId.eq(user_id))
        .order_by_desc(bets::Column::Id)
        .limit(limit)
        .all(conn)
        .await
}
