use super::*;

/// Tests registering a gamer.
///
/// Expected: Ok(Gamer) with the provided uid and bio and a generated ID
#[tokio::test]
async fn creates_gamer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Gamer)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GamerRepository::new(db);
    let gamer = repo
        .create(RegisterGamerParam {
            uid: "abc123".to_string(),
            bio: "Likes co-op games".to_string(),
        })
        .await?;

    assert!(gamer.id > 0);
    assert_eq!(gamer.uid, "abc123");
    assert_eq!(gamer.bio, "Likes co-op games");

    Ok(())
}

/// Tests that two gamers cannot share a uid.
///
/// Expected: Err(DbErr) on the second insert
#[tokio::test]
async fn rejects_duplicate_uid() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Gamer)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_gamer_with_uid(db, "taken").await?;

    let result = GamerRepository::new(db)
        .create(RegisterGamerParam {
            uid: "taken".to_string(),
            bio: String::new(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
