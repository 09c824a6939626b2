use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Gamer::Table)
                    .if_not_exists()
                    .col(pk_auto(Gamer::Id))
                    .col(string_uniq(Gamer::Uid))
                    .col(text(Gamer::Bio))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Gamer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Gamer {
    Table,
    Id,
    Uid,
    Bio,
}
