use super::*;

/// Expected: Ok(true) then Ok(None) on lookup
#[tokio::test]
async fn deletes_game() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_game_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, game) = factory::helpers::create_game_with_dependencies(db).await?;
    let repo = GameRepository::new(db);

    assert!(repo.delete(game.id).await?);
    assert!(repo.find_by_id(game.id).await?.is_none());

    Ok(())
}

/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_game() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_game_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!GameRepository::new(db).delete(12).await?);

    Ok(())
}

/// Tests that deleting the owning gamer removes their games.
///
/// Expected: no games remain for the deleted gamer
#[tokio::test]
async fn deleting_owner_cascades_to_games() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_game_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (gamer, game_type, _) = factory::helpers::create_game_with_dependencies(db).await?;
    let other_owner = factory::create_gamer(db).await?;
    let kept = factory::create_game(db, game_type.id, other_owner.id).await?;

    entity::prelude::Gamer::delete_by_id(gamer.id)
        .exec(db)
        .await?;

    let games = GameRepository::new(db).get_all(None).await?;
    assert_eq!(games.len(), 1);
    assert_eq!(games[0].id, kept.id);

    Ok(())
}
