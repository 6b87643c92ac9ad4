use super::*;

/// Tests creating multiple games in one call.
///
/// Verifies that every record is inserted and returned in submission order
/// with its paired slug.
///
/// Expected: Ok with all records created in order
#[tokio::test]
async fn creates_records_in_submission_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GameRepository::new(db);
    let created = repo
        .create_many(vec![
            (create_param("doom"), "doom".to_string()),
            (create_param("quake"), "quake".to_string()),
            (create_param("hexen"), "hexen".to_string()),
        ])
        .await?;

    assert_eq!(created.len(), 3);
    assert_eq!(created[0].name, "doom");
    assert_eq!(created[1].name, "quake");
    assert_eq!(created[2].name, "hexen");
    assert!(created[0].id < created[1].id);
    assert!(created[1].id < created[2].id);

    Ok(())
}

/// Tests that an empty batch is a no-op.
///
/// Expected: Ok with an empty result and nothing stored
#[tokio::test]
async fn empty_batch_creates_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GameRepository::new(db);
    let created = repo.create_many(vec![]).await?;

    assert!(created.is_empty());
    assert!(repo.find_all().await?.is_empty());

    Ok(())
}

/// Tests that a batch may contain records with colliding names.
///
/// Bulk insert intentionally performs no duplicate checks; this is the entry
/// path for the duplicates the admin cleanup later removes.
///
/// Expected: Ok with every record stored, collisions included
#[tokio::test]
async fn batch_allows_colliding_names() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GameRepository::new(db);
    let created = repo
        .create_many(vec![
            (create_param("portal"), "portal".to_string()),
            (create_param("portal"), "portal".to_string()),
        ])
        .await?;

    assert_eq!(created.len(), 2);
    assert_eq!(repo.find_all().await?.len(), 2);

    Ok(())
}
