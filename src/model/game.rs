//! Parameter models for catalog data operations.
//!
//! These models serve as the boundary between the data layer and the
//! service/controller layers, with conversion methods to and from entity
//! models and DTOs. Entity models never leak past the data layer.

use chrono::{DateTime, Utc};

use crate::dto::game::{CreateGameDto, GameDto, UpdateGameDto};

/// A game record with full data from the store.
#[derive(Debug, Clone, PartialEq)]
pub struct GameParam {
    pub id: i32,
    /// Display name, stored lowercased.
    pub name: String,
    pub slug: String,
    pub category: String,
    pub price: f64,
    pub description: Option<String>,
    pub release_date: Option<String>,
    pub platforms: Option<Vec<String>>,
    pub genres: Option<Vec<String>>,
    pub developer: Option<String>,
    pub publisher: Option<String>,
    pub rating: Option<f64>,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl GameParam {
    /// Converts an entity model to a game param.
    ///
    /// This conversion happens at the data layer boundary so entity models
    /// never leak into service or controller layers.
    pub fn from_entity(entity: entity::game::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            slug: entity.slug,
            category: entity.category,
            price: entity.price,
            description: entity.description,
            release_date: entity.release_date,
            platforms: entity.platforms.map(|list| list.0),
            genres: entity.genres.map(|list| list.0),
            developer: entity.developer,
            publisher: entity.publisher,
            rating: entity.rating,
            image_url: entity.image_url,
            is_active: entity.is_active,
            created_at: entity.created_at,
        }
    }

    /// Converts the game param to a DTO for API responses.
    pub fn into_dto(self) -> GameDto {
        GameDto {
            id: self.id,
            name: self.name,
            slug: self.slug,
            category: self.category,
            price: self.price,
            description: self.description,
            release_date: self.release_date,
            platforms: self.platforms,
            genres: self.genres,
            developer: self.developer,
            publisher: self.publisher,
            rating: self.rating,
            image_url: self.image_url,
            is_active: self.is_active,
            created_at: self.created_at,
        }
    }
}

/// Parameters for creating a new game.
///
/// The name is taken as submitted; the service lowercases it and derives the
/// slug before the record reaches the repository.
#[derive(Debug, Clone)]
pub struct CreateGameParam {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub description: Option<String>,
    pub release_date: Option<String>,
    pub platforms: Option<Vec<String>>,
    pub genres: Option<Vec<String>>,
    pub developer: Option<String>,
    pub publisher: Option<String>,
    pub rating: Option<f64>,
    pub image_url: Option<String>,
}

impl CreateGameParam {
    /// Converts a create DTO into a create param.
    pub fn from_dto(dto: CreateGameDto) -> Self {
        Self {
            name: dto.name,
            category: dto.category,
            price: dto.price,
            description: dto.description,
            release_date: dto.release_date,
            platforms: dto.platforms,
            genres: dto.genres,
            developer: dto.developer,
            publisher: dto.publisher,
            rating: dto.rating,
            image_url: dto.image_url,
        }
    }
}

/// Parameters for partially updating a game.
///
/// `None` fields are left unchanged in the store.
#[derive(Debug, Clone, Default)]
pub struct UpdateGameParam {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub release_date: Option<String>,
    pub platforms: Option<Vec<String>>,
    pub genres: Option<Vec<String>>,
    pub developer: Option<String>,
    pub publisher: Option<String>,
    pub rating: Option<f64>,
    pub image_url: Option<String>,
    pub is_active: Option<bool>,
}

impl UpdateGameParam {
    /// Converts an update DTO into an update param.
    pub fn from_dto(dto: UpdateGameDto) -> Self {
        Self {
            name: dto.name,
            category: dto.category,
            price: dto.price,
            description: dto.description,
            release_date: dto.release_date,
            platforms: dto.platforms,
            genres: dto.genres,
            developer: dto.developer,
            publisher: dto.publisher,
            rating: dto.rating,
            image_url: dto.image_url,
            is_active: dto.is_active,
        }
    }
}
