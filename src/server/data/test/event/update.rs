use super::*;

/// Tests replacing an event's game, schedule, description and organizer.
///
/// Expected: Ok(true) and the reloaded event reflects the new values
#[tokio::test]
async fn updates_event() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (gamer, game_type, _, event) = factory::helpers::create_event_with_dependencies(db).await?;
    let new_game = factory::create_game(db, game_type.id, gamer.id).await?;
    let new_organizer = factory::create_gamer(db).await?;

    let repo = EventRepository::new(db);
    let updated = repo
        .update(event.id, update_param(new_game.id, new_organizer.id))
        .await?;

    assert!(updated);

    let found = repo.find_by_id(event.id).await?.unwrap();
    assert_eq!(found.game.id, new_game.id);
    assert_eq!(found.organizer.id, new_organizer.id);
    assert_eq!(found.description, "Game night");
    assert_eq!(found.date, NaiveDate::from_ymd_opt(2025, 3, 14).unwrap());

    Ok(())
}

/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_event() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (gamer, _, game) = factory::helpers::create_game_with_dependencies(db).await?;

    let updated = EventRepository::new(db)
        .update(77, update_param(game.id, gamer.id))
        .await?;

    assert!(!updated);

    Ok(())
}
