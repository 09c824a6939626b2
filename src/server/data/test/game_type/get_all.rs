use super::*;

/// Expected: every game type, ordered by ID
#[tokio::test]
async fn lists_game_types_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GameType)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_game_type(db).await?;
    let second = factory::create_game_type(db).await?;

    let game_types = GameTypeRepository::new(db).get_all().await?;

    let ids: Vec<i32> = game_types.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Expected: Ok(empty)
#[tokio::test]
async fn lists_nothing_when_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GameType)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game_types = GameTypeRepository::new(db).get_all().await?;

    assert!(game_types.is_empty());

    Ok(())
}
