use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

pub struct CleanupBackupRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CleanupBackupRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends a backup snapshot.
    ///
    /// `payload` is the full JSON serialization of the records slated for
    /// deletion. Rows in this table are never updated or deleted.
    pub async fn create(
        &self,
        token: String,
        payload: serde_json::Value,
        removed_count: i32,
    ) -> Result<entity::cleanup_backup::Model, DbErr> {
        entity::cleanup_backup::ActiveModel {
            token: ActiveValue::Set(token),
            payload: ActiveValue::Set(payload),
            removed_count: ActiveValue::Set(removed_count),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds a backup snapshot by its token.
    pub async fn find_by_token(
        &self,
        token: &str,
    ) -> Result<Option<entity::cleanup_backup::Model>, DbErr> {
        entity::prelude::CleanupBackup::find()
            .filter(entity::cleanup_backup::Column::Token.eq(token))
            .one(self.db)
            .await
    }
}
