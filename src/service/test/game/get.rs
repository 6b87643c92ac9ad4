use super::*;

/// Tests fetching the full catalog.
///
/// Expected: Ok with every game in id order
#[tokio::test]
async fn get_all_returns_catalog_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_game(db).await?;
    let second = factory::create_game(db).await?;

    let service = GameService::new(db);
    let games = service.get_all().await.unwrap();

    assert_eq!(games.len(), 2);
    assert_eq!(games[0].id, first.id);
    assert_eq!(games[1].id, second.id);

    Ok(())
}

/// Tests fetching a game by its raw id path parameter.
///
/// Expected: Ok with the matching game
#[tokio::test]
async fn get_by_id_parses_and_finds() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game_named(db, "hades").await?;

    let service = GameService::new(db);
    let found = service.get_by_id(&game.id.to_string()).await.unwrap();

    assert_eq!(found.id, game.id);
    assert_eq!(found.name, "hades");

    Ok(())
}

/// Tests that a non-numeric id is rejected before hitting the store.
///
/// Expected: Err(GameError::InvalidId)
#[tokio::test]
async fn get_by_id_rejects_non_numeric_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = GameService::new(db);
    let result = service.get_by_id("not-a-number").await;

    assert!(matches!(
        result,
        Err(AppError::GameErr(GameError::InvalidId(_)))
    ));

    Ok(())
}

/// Tests fetching a game that does not exist.
///
/// Expected: Err(GameError::NotFoundById)
#[tokio::test]
async fn get_by_id_reports_missing_game() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = GameService::new(db);
    let result = service.get_by_id("42").await;

    assert!(matches!(
        result,
        Err(AppError::GameErr(GameError::NotFoundById(42)))
    ));

    Ok(())
}

/// Tests fetching a game by slug.
///
/// Expected: Ok for an existing slug, NotFoundBySlug otherwise
#[tokio::test]
async fn get_by_slug_finds_or_reports_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game_named(db, "outer wilds").await?;

    let service = GameService::new(db);

    let found = service.get_by_slug("outer-wilds").await.unwrap();
    assert_eq!(found.id, game.id);

    let result = service.get_by_slug("no-such-slug").await;
    assert!(matches!(
        result,
        Err(AppError::GameErr(GameError::NotFoundBySlug(_)))
    ));

    Ok(())
}
