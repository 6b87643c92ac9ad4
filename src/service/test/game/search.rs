use super::*;

/// Tests searching by a case-insensitive name fragment.
///
/// Expected: Ok with every game whose name contains the fragment
#[tokio::test]
async fn returns_matching_games() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_game_named(db, "dark souls").await?;
    factory::create_game_named(db, "dark souls iii").await?;
    factory::create_game_named(db, "elden ring").await?;

    let service = GameService::new(db);
    let games = service.search_by_name("Souls").await.unwrap();

    assert_eq!(games.len(), 2);
    assert!(games.iter().all(|g| g.name.contains("souls")));

    Ok(())
}

/// Tests that an empty search result is reported as not found.
///
/// Expected: Err(GameError::NotFoundByName)
#[tokio::test]
async fn empty_result_is_not_found() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_game_named(db, "elden ring").await?;

    let service = GameService::new(db);
    let result = service.search_by_name("sekiro").await;

    assert!(matches!(
        result,
        Err(AppError::GameErr(GameError::NotFoundByName(_)))
    ));

    Ok(())
}
