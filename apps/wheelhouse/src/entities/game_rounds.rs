use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::bets::BetColor;

/// One finished round. Written once, at the result transition, after the
/// outcome is drawn; in-flight phase state is never persisted.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "game_rounds")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Scheduler-assigned round counter; resets with the process.
    #[sea_orm(column_name = "round_no")]
    pub round_no: i64,
    #[sea_orm(column_name = "pocket", column_type = "SmallInteger")]
    pub pocket: i16,
    pub color: BetColor,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
