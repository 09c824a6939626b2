use super::*;

/// Expected: the gamer is reported as joined afterwards
#[tokio::test]
async fn joins_event() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, event) = factory::helpers::create_event_with_dependencies(db).await?;
    let attendee = factory::create_gamer(db).await?;

    let repo = EventGamerRepository::new(db);
    assert!(!repo.is_joined(attendee.id, event.id).await?);

    repo.join(attendee.id, event.id).await?;

    assert!(repo.is_joined(attendee.id, event.id).await?);

    Ok(())
}

/// Tests that signing up twice keeps a single attendance row.
///
/// Expected: exactly one event_gamer row
#[tokio::test]
async fn joining_twice_keeps_one_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (gamer, _, _, event) = factory::helpers::create_event_with_dependencies(db).await?;

    let repo = EventGamerRepository::new(db);
    repo.join(gamer.id, event.id).await?;
    repo.join(gamer.id, event.id).await?;

    let rows = entity::prelude::EventGamer::find().all(db).await?;
    assert_eq!(rows.len(), 1);

    Ok(())
}
