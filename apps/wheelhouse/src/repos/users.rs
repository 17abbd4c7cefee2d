//! User repository functions for the domain layer (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;

use crate::adapters::users_sea::{self, DebitOutcome, UserCreate};
use crate::entities::users;
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};

/// User domain model: balance plus cumulative stats.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub id: i64,
    pub balance: i64,
    pub games_played: i64,
    pub total_won: i64,
    pub total_lost: i64,
}

impl From<users::Model> for UserProfile {
    fn from(model: users::Model) -> Self {
        Self {
            id: model.id,
            balance: model.balance,
            games_played: model.games_played,
            total_won: model.total_won,
            total_lost: model.total_lost,
        }
    }
}

/// Fetch-or-create a user with the configured starting balance.
pub async fn ensure_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    starting_balance: i64,
) -> Result<UserProfile, DomainError> {
    let user = users_sea::ensure(conn, UserCreate::new(user_id, starting_balance)).await?;
    Ok(UserProfile::from(user))
}

pub async fn find_profile<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<UserProfile, DomainError> {
    let user = users_sea::find_by_id(conn, user_id)
        .await?
        .ok_or_else(|| DomainError::not_found(NotFoundKind::User, format!("user {user_id}")))?;
    Ok(UserProfile::from(user))
}

pub async fn get_balance<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<i64, DomainError> {
    Ok(find_profile(conn, user_id).await?.balance)
}

/// Debit a stake. Fails with `InsufficientFunds` instead of ever letting a
/// balance go negative. Returns the balance after the debit.
pub async fn debit<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    amount: i64,
) -> Result<i64, DomainError> {
    match users_sea::debit_balance(conn, user_id, amount).await? {
        DebitOutcome::Applied => get_balance(conn, user_id).await,
        DebitOutcome::InsufficientFunds => Err(DomainError::validation(
            ValidationKind::InsufficientFunds,
            format!("stake {amount} exceeds balance of user {user_id}"),
        )),
        DebitOutcome::Missing => Err(DomainError::not_found(
            NotFoundKind::User,
            format!("user {user_id}"),
        )),
    }
}

/// Credit a payout. Returns the balance after the credit.
pub async fn credit<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    amount: i64,
) -> Result<i64, DomainError> {
    users_sea::credit_balance(conn, user_id, amount).await?;
    get_balance(conn, user_id).await
}

/// Accumulate per-round stats for one settled bet.
pub async fn apply_round_stats<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    won_amount: i64,
    lost_amount: i64,
) -> Result<(), DomainError> {
    users_sea::apply_round_stats(conn, user_id, won_amount, lost_amount).await?;
    Ok(())
}
