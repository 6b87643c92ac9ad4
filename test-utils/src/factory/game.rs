//! Game factory for creating test game entities.
//!
//! This module provides factory methods for creating game entities with sensible
//! defaults, reducing boilerplate in tests. The factory supports customization
//! through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test games with customizable fields.
///
/// Provides a builder pattern for creating game entities with default values
/// that can be overridden as needed for specific test scenarios. Names are
/// stored as given; pass lowercased names when a test depends on the stored
/// casing invariant.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::game::GameFactory;
///
/// let game = GameFactory::new(&db)
///     .name("hollow knight")
///     .slug("hollow-knight")
///     .category("Metroidvania")
///     .build()
///     .await?;
/// ```
pub struct GameFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    slug: String,
    category: String,
    price: f64,
    description: Option<String>,
    release_date: Option<String>,
    rating: Option<f64>,
    is_active: bool,
}

impl<'a> GameFactory<'a> {
    /// Creates a new GameFactory with default values.
    ///
    /// Defaults:
    /// - name: `"game {id}"` where id is auto-incremented
    /// - slug: `"game-{id}"`
    /// - category: `"Action"`
    /// - price: `59.99`
    /// - description, release_date, rating: `None`
    /// - is_active: `true`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("game {}", id),
            slug: format!("game-{}", id),
            category: "Action".to_string(),
            price: 59.99,
            description: None,
            release_date: None,
            rating: None,
            is_active: true,
        }
    }

    /// Sets the display name for the game.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the slug for the game.
    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    /// Sets the category for the game.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Sets the price for the game.
    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    /// Sets the description for the game.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the release date for the game.
    pub fn release_date(mut self, release_date: impl Into<String>) -> Self {
        self.release_date = Some(release_date.into());
        self
    }

    /// Sets the rating for the game.
    pub fn rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Sets whether the game is active.
    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Builds and inserts the game entity.
    ///
    /// # Returns
    /// - `Ok(Model)` - The inserted game entity
    /// - `Err(DbErr)` - Database error during insertion
    pub async fn build(self) -> Result<entity::game::Model, DbErr> {
        entity::game::ActiveModel {
            name: ActiveValue::Set(self.name),
            slug: ActiveValue::Set(self.slug),
            category: ActiveValue::Set(self.category),
            price: ActiveValue::Set(self.price),
            description: ActiveValue::Set(self.description),
            release_date: ActiveValue::Set(self.release_date),
            rating: ActiveValue::Set(self.rating),
            is_active: ActiveValue::Set(self.is_active),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a game with default values.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(Model)` - The created game entity
/// - `Err(DbErr)` - Database error during creation
pub async fn create_game(db: &DatabaseConnection) -> Result<entity::game::Model, DbErr> {
    GameFactory::new(db).build().await
}

/// Creates a game with a specific display name.
///
/// The slug is derived naively by replacing spaces with hyphens; tests that
/// depend on exact slug semantics should set it explicitly via `GameFactory`.
///
/// # Arguments
/// - `db` - Database connection
/// - `name` - Display name for the game
///
/// # Returns
/// - `Ok(Model)` - The created game entity
/// - `Err(DbErr)` - Database error during creation
pub async fn create_game_named(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entity::game::Model, DbErr> {
    GameFactory::new(db)
        .name(name)
        .slug(name.to_lowercase().replace(' ', "-"))
        .build()
        .await
}
