use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKeyAction, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Users {
    Table,
    Id,
    Balance,
    GamesPlayed,
    TotalWon,
    TotalLost,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum GameRounds {
    Table,
    Id,
    RoundNo,
    Pocket,
    Color,
    CreatedAt,
}

#[derive(Iden)]
enum Bets {
    Table,
    Id,
    UserId,
    RoundNo,
    Choice,
    Amount,
    PotentialWin,
    Settled,
    Payout,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Users::Balance).big_integer().not_null())
                    .col(
                        ColumnDef::new(Users::GamesPlayed)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Users::TotalWon)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Users::TotalLost)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Users::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Users::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(GameRounds::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GameRounds::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(GameRounds::RoundNo).big_integer().not_null())
                    .col(ColumnDef::new(GameRounds::Pocket).small_integer().not_null())
                    .col(ColumnDef::new(GameRounds::Color).string_len(16).not_null())
                    .col(
                        ColumnDef::new(GameRounds::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Bets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Bets::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Bets::UserId).big_integer().not_null())
                    .col(ColumnDef::new(Bets::RoundNo).big_integer().not_null())
                    .col(ColumnDef::new(Bets::Choice).string_len(16).not_null())
                    .col(ColumnDef::new(Bets::Amount).big_integer().not_null())
                    .col(ColumnDef::new(Bets::PotentialWin).big_integer().not_null())
                    .col(
                        ColumnDef::new(Bets::Settled)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Bets::Payout)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Bets::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bets_user_id")
                            .from(Bets::Table, Bets::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_bets_user_id")
                    .table(Bets::Table)
                    .col(Bets::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_bets_round_no")
                    .table(Bets::Table)
                    .col(Bets::RoundNo)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_game_rounds_round_no")
                    .table(GameRounds::Table)
                    .col(GameRounds::RoundNo)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Bets::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(GameRounds::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}
