use super::*;

/// Tests creating a game then retrieving it with its relations.
///
/// Expected: the retrieved game carries the same fields, game type and owner
#[tokio::test]
async fn creates_and_retrieves_game() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_game_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let gamer = factory::create_gamer(db).await?;
    let game_type = factory::create_game_type(db).await?;

    let repo = GameRepository::new(db);
    let created = repo
        .create(
            gamer.id,
            CreateGameParam {
                gamer_uid: gamer.uid.clone(),
                game_type_id: game_type.id,
                title: "Catan".to_string(),
                maker: "Kosmos".to_string(),
                number_of_players: 4,
                skill_level: 2,
            },
        )
        .await?;

    assert_eq!(created.title, "Catan");
    assert_eq!(created.maker, "Kosmos");
    assert_eq!(created.number_of_players, 4);
    assert_eq!(created.skill_level, 2);
    assert_eq!(created.game_type.id, game_type.id);
    assert_eq!(created.game_type.label, game_type.label);
    assert_eq!(created.gamer.id, gamer.id);
    assert_eq!(created.gamer.uid, gamer.uid);

    let found = repo.find_by_id(created.id).await?;
    assert_eq!(found, Some(created));

    Ok(())
}

/// Tests that a game referencing a missing game type is rejected by the foreign key.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn rejects_missing_game_type() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_game_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let gamer = factory::create_gamer(db).await?;

    let result = GameRepository::new(db)
        .create(
            gamer.id,
            CreateGameParam {
                gamer_uid: gamer.uid.clone(),
                game_type_id: 404,
                title: "Orphan".to_string(),
                maker: "Nobody".to_string(),
                number_of_players: 1,
                skill_level: 1,
            },
        )
        .await;

    assert!(result.is_err());

    Ok(())
}
