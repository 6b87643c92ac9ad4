use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Append-only snapshot of records removed by a duplicate cleanup run.
///
/// `payload` holds the full JSON serialization of the removed games so a
/// cleanup can be manually reverted. Rows are never updated or deleted.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cleanup_backup")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(indexed)]
    pub token: String,
    pub payload: Json,
    pub removed_count: i32,
    pub created_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
