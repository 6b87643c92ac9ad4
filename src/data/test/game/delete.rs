use super::*;

/// Tests deleting a game by id.
///
/// Verifies that the removed record is returned and no longer present in the
/// store afterwards.
///
/// Expected: Ok(Some) with the record gone from the store
#[tokio::test]
async fn deletes_game_and_returns_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game_named(db, "spelunky").await?;

    let repo = GameRepository::new(db);
    let removed = repo.delete(game.id).await?.unwrap();

    assert_eq!(removed.id, game.id);
    assert_eq!(removed.name, "spelunky");

    let db_game = entity::prelude::Game::find_by_id(game.id).one(db).await?;
    assert!(db_game.is_none());

    Ok(())
}

/// Tests deleting a game that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_game() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GameRepository::new(db);
    let result = repo.delete(42).await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests bulk deletion by id set.
///
/// Verifies that only the listed ids are removed and the deleted count
/// reflects actual removals, not the size of the input.
///
/// Expected: Ok(2) with the remaining record untouched
#[tokio::test]
async fn delete_by_ids_removes_only_listed_records() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_game(db).await?;
    let second = factory::create_game(db).await?;
    let survivor = factory::create_game(db).await?;

    let repo = GameRepository::new(db);
    let deleted = repo.delete_by_ids(&[first.id, second.id, 9999]).await?;

    assert_eq!(deleted, 2);

    let remaining = repo.find_all().await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, survivor.id);

    Ok(())
}

/// Tests that bulk deletion is idempotent per id.
///
/// Expected: Ok(0) on a second call with the same ids
#[tokio::test]
async fn delete_by_ids_is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;

    let repo = GameRepository::new(db);

    assert_eq!(repo.delete_by_ids(&[game.id]).await?, 1);
    assert_eq!(repo.delete_by_ids(&[game.id]).await?, 0);

    Ok(())
}
