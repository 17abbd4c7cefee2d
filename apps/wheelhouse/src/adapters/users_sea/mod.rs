//! SeaORM adapter for the users table - generic over ConnectionTrait.

use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set};

use crate::entities::users;

pub mod dto;

pub use dto::UserCreate;

// Adapter functions return DbErr; the repos layer maps to DomainError.

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Option<users::Model>, sea_orm::DbErr> {
    users::Entity::find_by_id(user_id).one(conn).await
}

/// Find user by ID or return RecordNotFound.
pub async fn require_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<users::Model, sea_orm::DbErr> {
    find_by_id(conn, user_id)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound(format!("User {user_id} not found")))
}

/// Fetch-or-create. On an insert race the loser refetches the winner's row.
pub async fn ensure<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: UserCreate,
) -> Result<users::Model, sea_orm::DbErr> {
    if let Some(user) = find_by_id(conn, dto.id).await? {
        return Ok(user);
    }

    let now = time::OffsetDateTime::now_utc();
    let model = users::ActiveModel {
        id: Set(dto.id),
        balance: Set(dto.starting_balance),
        games_played: Set(0),
        total_won: Set(0),
        total_lost: Set(0),
        created_at: Set(now),
        updated_at: Set(now),
    };
    match model.insert(conn).await {
        Ok(user) => Ok(user),
        Err(err) => find_by_id(conn, dto.id).await?.ok_or(err),
    }
}

/// Outcome of a conditional debit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebitOutcome {
    Applied,
    InsufficientFunds,
    Missing,
}

/// Conditionally debit a balance: the update only matches while
/// `balance >= amount`, so a balance can never go negative. rows_affected
/// disambiguates success from insufficient funds from a missing user.
pub async fn debit_balance<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    amount: i64,
) -> Result<DebitOutcome, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let result = users::Entity::update_many()
        .col_expr(
            users::Column::Balance,
            Expr::col(users::Column::Balance).sub(amount),
        )
        .col_expr(users::Column::UpdatedAt, Expr::val(now).into())
        .filter(users::Column::Id.eq(user_id))
        .filter(users::Column::Balance.gte(amount))
        .exec(conn)
        .await?;

    if result.rows_affected > 0 {
        return Ok(DebitOutcome::Applied);
    }
    if find_by_id(conn, user_id).await?.is_some() {
        Ok(DebitOutcome::InsufficientFunds)
    } else {
        Ok(DebitOutcome::Missing)
    }
}

pub async fn credit_balance<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    amount: i64,
) -> Result<(), sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let result = users::Entity::update_many()
        .col_expr(
            users::Column::Balance,
            Expr::col(users::Column::Balance).add(amount),
        )
        .col_expr(users::Column::UpdatedAt, Expr::val(now).into())
        .filter(users::Column::Id.eq(user_id))
        .exec(conn)
        .await?;

    if result.rows_affected == 0 {
        return Err(sea_orm::DbErr::RecordNotFound(format!(
            "User {user_id} not found"
        )));
    }
    Ok(())
}

/// Bump cumulative stats after a settled bet: one more game, and the payout
/// added to total won or the stake added to total lost.
pub async fn apply_round_stats<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    won_amount: i64,
    lost_amount: i64,
) -> Result<(), sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let result = users::Entity::update_many()
        .col_expr(
            users::Column::GamesPlayed,
            Expr::col(users::Column::GamesPlayed).add(1),
        )
        .col_expr(
            users::Column::TotalWon,
            Expr::col(users::Column::TotalWon).add(won_amount),
        )
        .col_expr(
            users::Column::TotalLost,
            Expr::col(users::Column::TotalLost).add(lost_amount),
        )
        .col_expr(users::Column::UpdatedAt, Expr::val(now).into())
        .filter(users::Column::Id.eq(user_id))
        .exec(conn)
        .await?;

    if result.rows_affected == 0 {
        return Err(sea_orm::DbErr::RecordNotFound(format!(
            "User {user_id} not found"
        )));
    }
    Ok(())
}
