use super::*;

/// Expected: every game, ordered by ID, with relations attached
#[tokio::test]
async fn lists_all_games() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_game_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let gamer = factory::create_gamer(db).await?;
    let board = factory::create_game_type(db).await?;
    let card = factory::create_game_type(db).await?;
    let first = factory::create_game(db, board.id, gamer.id).await?;
    let second = factory::create_game(db, card.id, gamer.id).await?;

    let games = GameRepository::new(db).get_all(None).await?;

    assert_eq!(games.len(), 2);
    assert_eq!(games[0].id, first.id);
    assert_eq!(games[0].game_type.id, board.id);
    assert_eq!(games[1].id, second.id);
    assert_eq!(games[1].game_type.id, card.id);
    assert!(games.iter().all(|g| g.gamer.id == gamer.id));

    Ok(())
}

/// Tests filtering games by game type.
///
/// Expected: only games of the requested type
#[tokio::test]
async fn filters_games_by_game_type() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_game_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let gamer = factory::create_gamer(db).await?;
    let board = factory::create_game_type(db).await?;
    let card = factory::create_game_type(db).await?;
    factory::create_game(db, board.id, gamer.id).await?;
    let card_game = factory::create_game(db, card.id, gamer.id).await?;
    factory::create_game(db, board.id, gamer.id).await?;

    let games = GameRepository::new(db).get_all(Some(card.id)).await?;

    assert_eq!(games.len(), 1);
    assert_eq!(games[0].id, card_game.id);

    Ok(())
}
