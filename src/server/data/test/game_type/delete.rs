use super::*;

/// Tests that deleting a game type makes it unretrievable.
///
/// Expected: Ok(true) then Ok(None) on lookup
#[tokio::test]
async fn deletes_game_type() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GameType)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::create_game_type(db).await?;
    let repo = GameTypeRepository::new(db);

    assert!(repo.delete(stored.id).await?);
    assert!(repo.find_by_id(stored.id).await?.is_none());

    Ok(())
}

/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_game_type() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GameType)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!GameTypeRepository::new(db).delete(3).await?);

    Ok(())
}

/// Tests that games of a deleted game type are removed with it.
///
/// Expected: no game rows remain
#[tokio::test]
async fn cascades_to_games() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_game_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, game_type, _) = factory::helpers::create_game_with_dependencies(db).await?;

    GameTypeRepository::new(db).delete(game_type.id).await?;

    let games = entity::prelude::Game::find().all(db).await?;
    assert!(games.is_empty());

    Ok(())
}
