//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let game = factory::game::create_game(&db).await?;
//!
//!     // Create with a specific display name
//!     let game = factory::game::create_game_named(&db, "Elden Ring").await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builder for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory::game::GameFactory;
//!
//! let game = GameFactory::new(&db)
//!     .name("portal 2")
//!     .category("Puzzle")
//!     .price(9.99)
//!     .rating(9.5)
//!     .build()
//!     .await?;
//! ```

pub mod game;
pub mod helpers;

// Re-export commonly used factory functions for concise usage
pub use game::{create_game, create_game_named};
