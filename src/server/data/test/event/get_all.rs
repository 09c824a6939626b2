use super::*;

/// Expected: every event ordered by ID
#[tokio::test]
async fn lists_all_events() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (gamer, _, game, first) = factory::helpers::create_event_with_dependencies(db).await?;
    let second = factory::create_event(db, game.id, gamer.id).await?;

    let events = EventRepository::new(db).get_all(None).await?;

    let ids: Vec<i32> = events.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests filtering events by game.
///
/// Expected: only events whose game matches the filter
#[tokio::test]
async fn filters_events_by_game() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (gamer, game_type, game, _) = factory::helpers::create_event_with_dependencies(db).await?;
    let other_game = factory::create_game(db, game_type.id, gamer.id).await?;
    let other_event = factory::create_event(db, other_game.id, gamer.id).await?;
    factory::create_event(db, game.id, gamer.id).await?;

    let events = EventRepository::new(db).get_all(Some(other_game.id)).await?;

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, other_event.id);
    assert!(events.iter().all(|e| e.game.id == other_game.id));

    Ok(())
}

/// Tests listing more events than SQLite can bind as parameters, all sharing one
/// game and organizer.
///
/// Expected: every event is returned with its relations
#[tokio::test]
async fn lists_events_beyond_bind_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (gamer, _, game) = factory::helpers::create_game_with_dependencies(db).await?;
    factory::create_events_bulk(db, game.id, gamer.id, 33_000).await?;

    let events = EventRepository::new(db).get_all(None).await?;

    assert_eq!(events.len(), 33_000);
    assert!(events
        .iter()
        .all(|e| e.game.id == game.id && e.organizer.id == gamer.id));

    Ok(())
}
