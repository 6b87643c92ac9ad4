use super::*;

/// Tests bulk creation of several games.
///
/// Every record is lowercased and slugged like a single create.
///
/// Expected: Ok with all records stored in submission order
#[tokio::test]
async fn creates_all_records() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = GameService::new(db);
    let games = service
        .create_many(vec![
            create_param("Doom"),
            create_param("Quake II"),
        ])
        .await
        .unwrap();

    assert_eq!(games.len(), 2);
    assert_eq!(games[0].name, "doom");
    assert_eq!(games[0].slug, "doom");
    assert_eq!(games[1].name, "quake ii");
    assert_eq!(games[1].slug, "quake-ii");

    Ok(())
}

/// Tests that bulk creation skips the duplicate check.
///
/// Records colliding with existing names, or with each other, are stored
/// anyway. This is the documented path by which duplicates enter the catalog.
///
/// Expected: Ok with every collision stored
#[tokio::test]
async fn bulk_create_bypasses_duplicate_check() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = GameService::new(db);
    service.create(create_param("portal")).await.unwrap();

    let games = service
        .create_many(vec![create_param("Portal"), create_param("portal!")])
        .await
        .unwrap();

    assert_eq!(games.len(), 2);
    assert_eq!(GameRepository::new(db).find_all().await?.len(), 3);

    Ok(())
}

/// Tests that one invalid record rejects the whole batch.
///
/// Validation runs over the full batch before any insert.
///
/// Expected: Err(BadRequest) with nothing stored
#[tokio::test]
async fn invalid_record_rejects_whole_batch() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut bad = create_param("quake");
    bad.price = -5.0;

    let service = GameService::new(db);
    let result = service
        .create_many(vec![create_param("doom"), bad])
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert!(GameRepository::new(db).find_all().await?.is_empty());

    Ok(())
}
