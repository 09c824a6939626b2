use super::*;

/// Expected: Ok(Some(Gamer)) matching the stored row
#[tokio::test]
async fn finds_gamer_by_uid() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Gamer)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::create_gamer_with_uid(db, "findme").await?;

    let gamer = GamerRepository::new(db).find_by_uid("findme").await?;

    let gamer = gamer.unwrap();
    assert_eq!(gamer.id, stored.id);
    assert_eq!(gamer.bio, stored.bio);

    Ok(())
}

/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_uid() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Gamer)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_gamer(db).await?;

    let gamer = GamerRepository::new(db).find_by_uid("nobody").await?;

    assert!(gamer.is_none());

    Ok(())
}
