use sea_orm_migration::{prelude::*, schema::*};

use super::{m20261018_000001_create_gamer_table::Gamer, m20261018_000003_create_game_table::Game};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Event::Table)
                    .if_not_exists()
                    .col(pk_auto(Event::Id))
                    .col(integer(Event::GameId))
                    .col(text(Event::Description))
                    .col(date(Event::Date))
                    .col(time(Event::Time))
                    .col(integer(Event::OrganizerId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_game_id")
                            .from(Event::Table, Event::GameId)
                            .to(Game::Table, Game::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_organizer_id")
                            .from(Event::Table, Event::OrganizerId)
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
            .drop_table(Table::drop().table(Event::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Event {
    Table,
    Id,
    GameId,
    Description,
    Date,
    Time,
    OrganizerId,
}
