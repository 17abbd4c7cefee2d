use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Messenger-assigned user id; not auto-incremented here.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,
    pub balance: i64,
    #[sea_orm(column_name = "games_played")]
    pub games_played: i64,
    #[sea_orm(column_name = "total_won")]
    pub total_won: i64,
    #[sea_orm(column_name = "total_lost")]
    pub total_lost: i64,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::bets::Entity")]
    Bets,
}

impl Related<super::bets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bets.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
