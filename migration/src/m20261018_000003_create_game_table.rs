use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261018_000001_create_gamer_table::Gamer, m20261018_000002_create_game_type_table::GameType,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Game::Table)
                    .if_not_exists()
                    .col(pk_auto(Game::Id))
                    .col(integer(Game::GameTypeId))
                    .col(string(Game::Title))
                    .col(string(Game::Maker))
                    .col(integer(Game::GamerId))
                    .col(integer(Game::NumberOfPlayers))
                    .col(integer(Game::SkillLevel))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_game_type_id")
                            .from(Game::Table, Game::GameTypeId)
                            .to(GameType::Table, GameType::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_gamer_id")
                            .from(Game::Table, Game::GamerId)
                            .to(Gamer::Table, Gamer::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Game::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Game {
    Table,
    Id,
    GameTypeId,
    Title,
    Maker,
    GamerId,
    NumberOfPlayers,
    SkillLevel,
}
