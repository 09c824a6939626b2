pub use sea_orm_migration::prelude::*;

mod m20261018_000001_create_gamer_table;
mod m20261018_000002_create_game_type_table;
mod m20261018_000003_create_game_table;
mod m20261018_000004_create_event_table;
mod m20261018_000005_create_event_gamer_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261018_000001_create_gamer_table::Migration),
            Box::new(m20261018_000002_create_game_type_table::Migration),
            Box::new(m20261018_000003_create_game_table::Migration),
            Box::new(m20261018_000004_create_event_table::Migration),
            Box::new(m20261018_000005_create_event_gamer_table::Migration),
        ]
    }
}
