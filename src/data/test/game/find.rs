use super::*;

/// Tests that find_all returns every game in ascending id order.
///
/// Expected: Ok with all games ordered by id
#[tokio::test]
async fn find_all_returns_games_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_game_named(db, "alpha").await?;
    let second = factory::create_game_named(db, "beta").await?;
    let third = factory::create_game_named(db, "gamma").await?;

    let repo = GameRepository::new(db);
    let games = repo.find_all().await?;

    assert_eq!(games.len(), 3);
    assert_eq!(games[0].id, first.id);
    assert_eq!(games[1].id, second.id);
    assert_eq!(games[2].id, third.id);

    Ok(())
}

/// Tests finding a game by id.
///
/// Expected: Ok(Some) for an existing id, Ok(None) otherwise
#[tokio::test]
async fn find_by_id_returns_matching_game() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;

    let repo = GameRepository::new(db);

    let found = repo.find_by_id(game.id).await?;
    assert_eq!(found.map(|g| g.id), Some(game.id));

    let missing = repo.find_by_id(game.id + 1000).await?;
    assert!(missing.is_none());

    Ok(())
}

/// Tests that find_by_ids skips ids with no matching record.
///
/// Expected: Ok with only the existing records, in ascending id order
#[tokio::test]
async fn find_by_ids_skips_missing_records() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_game(db).await?;
    let second = factory::create_game(db).await?;

    let repo = GameRepository::new(db);
    let found = repo.find_by_ids(&[second.id, first.id, 9999]).await?;

    assert_eq!(found.len(), 2);
    assert_eq!(found[0].id, first.id);
    assert_eq!(found[1].id, second.id);

    Ok(())
}

/// Tests case-insensitive name fragment search.
///
/// Names are stored lowercased, so an uppercase search term must still match.
///
/// Expected: Ok with every game whose name contains the fragment
#[tokio::test]
async fn find_by_name_contains_matches_fragment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_game_named(db, "dark souls").await?;
    factory::create_game_named(db, "dark souls ii").await?;
    factory::create_game_named(db, "bloodborne").await?;

    let repo = GameRepository::new(db);

    let matches = repo.find_by_name_contains("SOULS").await?;
    assert_eq!(matches.len(), 2);
    assert!(matches.iter().all(|g| g.name.contains("souls")));

    let none = repo.find_by_name_contains("sekiro").await?;
    assert!(none.is_empty());

    Ok(())
}

/// Tests finding a game by slug.
///
/// Expected: Ok(Some) for an existing slug, Ok(None) otherwise
#[tokio::test]
async fn find_by_slug_returns_matching_game() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game_named(db, "stardew valley").await?;

    let repo = GameRepository::new(db);

    let found = repo.find_by_slug("stardew-valley").await?;
    assert_eq!(found.map(|g| g.id), Some(game.id));

    let missing = repo.find_by_slug("no-such-slug").await?;
    assert!(missing.is_none());

    Ok(())
}

/// Tests the normalized-name lookup used by the create duplicate check.
///
/// A stored name with punctuation must be found under its normalized key, and
/// the first record in store order wins when several collide.
///
/// Expected: Ok(Some) with the earliest colliding record
#[tokio::test]
async fn find_by_normalized_name_matches_first_in_store_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_game_named(db, "foo-bar!").await?;
    factory::create_game_named(db, "foo bar").await?;
    factory::create_game_named(db, "baz").await?;

    let repo = GameRepository::new(db);

    let found = repo.find_by_normalized_name("foobar").await?;
    assert_eq!(found.map(|g| g.id), Some(first.id));

    let missing = repo.find_by_normalized_name("quux").await?;
    assert!(missing.is_none());

    Ok(())
}
