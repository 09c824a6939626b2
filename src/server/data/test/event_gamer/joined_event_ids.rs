use super::*;

/// Tests that only the events the given gamer joined are reported.
///
/// Expected: the set contains the joined event and nothing else
#[tokio::test]
async fn reports_only_events_joined_by_gamer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (gamer, _, game, joined) = factory::helpers::create_event_with_dependencies(db).await?;
    let not_joined = factory::create_event(db, game.id, gamer.id).await?;
    let other_gamer = factory::create_gamer(db).await?;
    factory::create_event_gamer(db, gamer.id, joined.id).await?;
    factory::create_event_gamer(db, other_gamer.id, not_joined.id).await?;

    let ids = EventGamerRepository::new(db)
        .joined_event_ids(gamer.id, vec![joined.id, not_joined.id])
        .await?;

    assert!(ids.contains(&joined.id));
    assert!(!ids.contains(&not_joined.id));
    assert_eq!(ids.len(), 1);

    Ok(())
}

/// Expected: Ok(empty set)
#[tokio::test]
async fn returns_empty_set_for_no_events() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let gamer = factory::create_gamer(db).await?;

    let ids = EventGamerRepository::new(db)
        .joined_event_ids(gamer.id, Vec::new())
        .await?;

    assert!(ids.is_empty());

    Ok(())
}

/// Tests asking about more events than SQLite can bind as parameters.
///
/// Expected: only the joined events are reported
#[tokio::test]
async fn handles_event_ids_beyond_bind_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (gamer, _, game) = factory::helpers::create_game_with_dependencies(db).await?;
    factory::create_events_bulk(db, game.id, gamer.id, 33_000).await?;

    let event_ids: Vec<i32> = entity::prelude::Event::find()
        .all(db)
        .await?
        .into_iter()
        .map(|e| e.id)
        .collect();
    factory::create_event_gamer(db, gamer.id, event_ids[10]).await?;
    factory::create_event_gamer(db, gamer.id, event_ids[32_500]).await?;

    let ids = EventGamerRepository::new(db)
        .joined_event_ids(gamer.id, event_ids.clone())
        .await?;

    assert_eq!(ids.len(), 2);
    assert!(ids.contains(&event_ids[10]));
    assert!(ids.contains(&event_ids[32_500]));

    Ok(())
}
