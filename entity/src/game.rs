use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// JSON-backed list of strings for multi-valued columns (platforms, genres).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct StringList(pub Vec<String>);

/// A video game record in the catalog.
///
/// `name` is stored lowercased. Neither `name` nor `slug` carries a unique
/// constraint at the store level: normalized-name uniqueness is enforced by
/// application logic only, and duplicate cleanup depends on collisions being
/// able to coexist.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "game")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(indexed)]
    pub name: String,
    #[sea_orm(indexed)]
    pub slug: String,
    pub category: String,
    pub price: f64,
    pub description: Option<String>,
    pub release_date: Option<String>,
    pub platforms: Option<StringList>,
    pub genres: Option<StringList>,
    pub developer: Option<String>,
    pub publisher: Option<String>,
    pub rating: Option<f64>,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub created_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
