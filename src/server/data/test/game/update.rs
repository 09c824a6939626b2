use super::*;

/// Tests updating a game's fields and type while keeping its owner.
///
/// Expected: Ok(true) and the stored row reflects the new values
#[tokio::test]
async fn updates_game_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_game_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (gamer, _, game) = factory::helpers::create_game_with_dependencies(db).await?;
    let other_type = factory::create_game_type(db).await?;

    let repo = GameRepository::new(db);
    let updated = repo
        .update(
            game.id,
            UpdateGameParam {
                game_type_id: other_type.id,
                title: "Renamed".to_string(),
                maker: "New Maker".to_string(),
                number_of_players: 6,
                skill_level: 5,
            },
        )
        .await?;

    assert!(updated);

    let found = repo.find_by_id(game.id).await?.unwrap();
    assert_eq!(found.title, "Renamed");
    assert_eq!(found.maker, "New Maker");
    assert_eq!(found.number_of_players, 6);
    assert_eq!(found.skill_level, 5);
    assert_eq!(found.game_type.id, other_type.id);
    assert_eq!(found.gamer.id, gamer.id);

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

    let game_type = factory::create_game_type(db).await?;

    let updated = GameRepository::new(db)
        .update(
            55,
            UpdateGameParam {
                game_type_id: game_type.id,
                title: "Ghost".to_string(),
                maker: "Ghost".to_string(),
                number_of_players: 1,
                skill_level: 1,
            },
        )
        .await?;

    assert!(!updated);

    Ok(())
}
