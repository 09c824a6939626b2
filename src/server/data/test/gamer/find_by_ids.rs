use super::*;

/// Tests batch loading gamers, skipping IDs that do not exist.
///
/// Expected: Ok(map) containing only the stored gamers
#[tokio::test]
async fn loads_existing_gamers_keyed_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Gamer)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_gamer(db).await?;
    let second = factory::create_gamer(db).await?;

    let gamers = GamerRepository::new(db)
        .find_by_ids(vec![first.id, second.id, 9999])
        .await?;

    assert_eq!(gamers.len(), 2);
    assert_eq!(gamers[&first.id].uid, first.uid);
    assert_eq!(gamers[&second.id].uid, second.uid);

    Ok(())
}

/// Expected: Ok(empty map) without querying
#[tokio::test]
async fn returns_empty_map_for_no_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Gamer)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let gamers = GamerRepository::new(db).find_by_ids(Vec::new()).await?;

    assert!(gamers.is_empty());

    Ok(())
}
