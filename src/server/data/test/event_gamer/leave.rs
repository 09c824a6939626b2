use super::*;

/// Expected: Ok(true) and the gamer is no longer joined
#[tokio::test]
async fn leaves_event() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (gamer, _, _, event) = factory::helpers::create_event_with_dependencies(db).await?;
    factory::create_event_gamer(db, gamer.id, event.id).await?;

    let repo = EventGamerRepository::new(db);

    assert!(repo.leave(gamer.id, event.id).await?);
    assert!(!repo.is_joined(gamer.id, event.id).await?);

    Ok(())
}

/// Tests leaving an event the gamer never joined.
///
/// Expected: Ok(false), other attendees untouched
#[tokio::test]
async fn leaving_unjoined_event_is_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (organizer, _, _, event) = factory::helpers::create_event_with_dependencies(db).await?;
    let bystander = factory::create_gamer(db).await?;
    factory::create_event_gamer(db, organizer.id, event.id).await?;

    let repo = EventGamerRepository::new(db);

    assert!(!repo.leave(bystander.id, event.id).await?);
    assert!(repo.is_joined(organizer.id, event.id).await?);

    Ok(())
}

/// Tests that deleting an event removes its attendance rows.
#[tokio::test]
async fn deleting_event_cascades_to_attendance() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (gamer, _, _, event) = factory::helpers::create_event_with_dependencies(db).await?;
    factory::create_event_gamer(db, gamer.id, event.id).await?;

    entity::prelude::Event::delete_by_id(event.id)
        .exec(db)
        .await?;

    let rows = entity::prelude::EventGamer::find().all(db).await?;
    assert!(rows.is_empty());

    Ok(())
}
