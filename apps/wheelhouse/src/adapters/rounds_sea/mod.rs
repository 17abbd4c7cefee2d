//! SeaORM adapter for the game_rounds table - generic over ConnectionTrait.

use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, NotSet, QueryOrder, QuerySelect, Set};

use crate::entities::game_rounds;

pub mod dto;

pub use dto::RoundResultCreate;

pub async fn insert_result<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: RoundResultCreate,
) -> Result<game_rounds::Model, sea_orm::DbErr> {
    let model = game_rounds::ActiveModel {
        id: NotSet,
        round_no: Set(dto.round_no),
        pocket: Set(dto.pocket),
        color: Set(dto.color),
        created_at: Set(time::OffsetDateTime::now_utc()),
    };
    model.insert(conn).await
}

/// Most recent finished rounds, newest first.
pub async fn recent<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    limit: u64,
) -> Result<Vec<game_rounds::Model>, sea_orm::DbErr> {
    game_rounds::Entity::find()
        .order_by_desc(game_rounds::Column::Id)
        .limit(limit)
        .all(conn)
        .await
}
