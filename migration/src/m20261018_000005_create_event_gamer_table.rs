use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261018_000001_create_gamer_table::Gamer, m20261018_000004_create_event_table::Event,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EventGamer::Table)
                    .if_not_exists()
                    .col(pk_auto(EventGamer::Id))
                    .col(integer(EventGamer::GamerId))
                    .col(integer(EventGamer::EventId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_gamer_gamer_id")
                            .from(EventGamer::Table, EventGamer::GamerId)
                            .to(Gamer::Table, Gamer::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_gamer_event_id")
                            .from(EventGamer::Table, EventGamer::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // A gamer attends an event at most once
        manager
            .create_index(
                Index::create()
                    .name("idx_event_gamer_gamer_id_event_id")
                    .table(EventGamer::Table)
                    .col(EventGamer::GamerId)
                    .col(EventGamer::EventId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_event_gamer_gamer_id_event_id")
                    .table(EventGamer::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(EventGamer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EventGamer {
    Table,
    Id,
    GamerId,
    EventId,
}
