use super::*;

/// Tests that only the provided fields are changed.
///
/// Verifies that a partial update touches the named fields and leaves every
/// other column, including the slug, as it was.
///
/// Expected: Ok(Some) with updated price and untouched name and slug
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game_named(db, "hades").await?;

    let repo = GameRepository::new(db);
    let updated = repo
        .update(
            game.id,
            UpdateGameParam {
                price: Some(19.99),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.price, 19.99);
    assert_eq!(updated.name, "hades");
    assert_eq!(updated.slug, "hades");
    assert_eq!(updated.category, game.category);

    Ok(())
}

/// Tests that updating the name does not regenerate the slug.
///
/// Expected: Ok(Some) with new name and the original slug
#[tokio::test]
async fn name_update_preserves_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game_named(db, "half life").await?;

    let repo = GameRepository::new(db);
    let updated = repo
        .update(
            game.id,
            UpdateGameParam {
                name: Some("half life 2".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "half life 2");
    assert_eq!(updated.slug, "half-life");

    Ok(())
}

/// Tests deactivating a game through the is_active flag.
///
/// Expected: Ok(Some) with is_active false
#[tokio::test]
async fn updates_is_active_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    assert!(game.is_active);

    let repo = GameRepository::new(db);
    let updated = repo
        .update(
            game.id,
            UpdateGameParam {
                is_active: Some(false),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert!(!updated.is_active);

    Ok(())
}

/// Tests updating a game that does not exist.
///
/// Expected: Ok(None) without touching the store
#[tokio::test]
async fn returns_none_for_missing_game() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GameRepository::new(db);
    let result = repo
        .update(
            42,
            UpdateGameParam {
                price: Some(9.99),
                ..Default::default()
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
