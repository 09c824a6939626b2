//! Attendance factory linking a gamer to an event.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts an attendance row for `gamer_id` at `event_id`.
pub async fn create_event_gamer(
    db: &DatabaseConnection,
    gamer_id: i32,
    event_id: i32,
) -> Result<entity::event_gamer::Model, DbErr> {
    entity::event_gamer::ActiveModel {
        gamer_id: ActiveValue::Set(gamer_id),
        event_id: ActiveValue::Set(event_id),
        ..Default::default()
    }
    .insert(db)
    .await
}
