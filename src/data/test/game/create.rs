use super::*;

/// Tests creating a game with only the required fields.
///
/// Verifies that the repository inserts the record with the supplied name,
/// slug, category, and price, marks it active, and leaves the optional
/// descriptive fields unset.
///
/// Expected: Ok with game created and persisted
#[tokio::test]
async fn creates_game_with_required_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GameRepository::new(db);
    let result = repo
        .create(create_param("hollow knight"), "hollow-knight".to_string())
        .await;

    assert!(result.is_ok());
    let game = result.unwrap();
    assert_eq!(game.name, "hollow knight");
    assert_eq!(game.slug, "hollow-knight");
    assert_eq!(game.category, "Action");
    assert_eq!(game.price, 49.99);
    assert!(game.is_active);
    assert!(game.description.is_none());
    assert!(game.platforms.is_none());

    // Verify game exists in database
    let db_game = entity::prelude::Game::find_by_id(game.id).one(db).await?;
    assert!(db_game.is_some());
    assert_eq!(db_game.unwrap().name, "hollow knight");

    Ok(())
}

/// Tests creating a game with every optional field populated.
///
/// Expected: Ok with all optional fields persisted
#[tokio::test]
async fn creates_game_with_optional_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut param = create_param("celeste");
    param.description = Some("Climb the mountain".to_string());
    param.release_date = Some("2018-01-25".to_string());
    param.platforms = Some(vec!["PC".to_string(), "Switch".to_string()]);
    param.genres = Some(vec!["Platformer".to_string()]);
    param.developer = Some("Maddy Makes Games".to_string());
    param.publisher = Some("Maddy Makes Games".to_string());
    param.rating = Some(9.5);
    param.image_url = Some("https://example.com/celeste.jpg".to_string());

    let repo = GameRepository::new(db);
    let game = repo.create(param, "celeste".to_string()).await?;

    assert_eq!(game.description.as_deref(), Some("Climb the mountain"));
    assert_eq!(game.release_date.as_deref(), Some("2018-01-25"));
    assert_eq!(
        game.platforms.as_ref().map(|list| list.0.clone()),
        Some(vec!["PC".to_string(), "Switch".to_string()])
    );
    assert_eq!(
        game.genres.as_ref().map(|list| list.0.clone()),
        Some(vec!["Platformer".to_string()])
    );
    assert_eq!(game.rating, Some(9.5));

    Ok(())
}

/// Tests that two games with the same name can coexist.
///
/// The store deliberately carries no uniqueness constraint on name or slug;
/// duplicate prevention is a service concern and duplicate removal belongs to
/// the admin cleanup.
///
/// Expected: Ok with both records present
#[tokio::test]
async fn allows_duplicate_names_in_store() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GameRepository::new(db);
    let first = repo
        .create(create_param("doom"), "doom".to_string())
        .await?;
    let second = repo
        .create(create_param("doom"), "doom".to_string())
        .await?;

    assert_ne!(first.id, second.id);

    let all = repo.find_all().await?;
    assert_eq!(all.len(), 2);

    Ok(())
}
