use super::*;

/// Expected: Ok(Some(GameType)) with the new label persisted
#[tokio::test]
async fn updates_label() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GameType)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::create_game_type(db).await?;

    let updated = GameTypeRepository::new(db)
        .update(
            stored.id,
            UpdateGameTypeParam {
                label: "Card game".to_string(),
            },
        )
        .await?;

    assert_eq!(updated.unwrap().label, "Card game");

    let row = entity::prelude::GameType::find_by_id(stored.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(row.label, "Card game");

    Ok(())
}

/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_when_updating_missing_game_type() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GameType)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let updated = GameTypeRepository::new(db)
        .update(
            7,
            UpdateGameTypeParam {
                label: "Nothing".to_string(),
            },
        )
        .await?;

    assert!(updated.is_none());

    Ok(())
}
