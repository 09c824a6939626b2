use super::*;

/// Tests creating an event then retrieving it with its game and organizer.
///
/// Expected: the retrieved event matches the created one, `joined` is false
#[tokio::test]
async fn creates_and_retrieves_event() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, game_type, game) = factory::helpers::create_game_with_dependencies(db).await?;
    let organizer = factory::create_gamer(db).await?;

    let repo = EventRepository::new(db);
    let created = repo
        .create(organizer.id, create_param(game.id, &organizer.uid))
        .await?;

    assert_eq!(created.description, "Game night");
    assert_eq!(created.date, NaiveDate::from_ymd_opt(2025, 3, 14).unwrap());
    assert_eq!(created.time, NaiveTime::from_hms_opt(19, 30, 0).unwrap());
    assert_eq!(created.organizer.id, organizer.id);
    assert_eq!(created.game.id, game.id);
    assert_eq!(created.game.game_type.id, game_type.id);
    assert_eq!(created.game.gamer.id, owner.id);
    assert!(!created.joined);

    let found = repo.find_by_id(created.id).await?;
    assert_eq!(found, Some(created));

    Ok(())
}

/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_event() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EventRepository::new(db);

    assert!(repo.find_by_id(31).await?.is_none());
    assert!(!repo.exists(31).await?);

    Ok(())
}
