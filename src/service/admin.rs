//! Duplicate detection and cleanup.
//!
//! Duplicates are records whose names normalize to the same key (lowercased,
//! non-alphanumeric characters stripped). The cleanup orchestrator loads the
//! full catalog, groups it by normalized name, snapshots the removal
//! candidates into a durable backup, and then issues a single bulk delete.
//! Each run recomputes groups from scratch against current store contents;
//! nothing persists between invocations. Concurrent runs are not coordinated:
//! the bulk delete is idempotent per id, so overlapping runs do redundant
//! work rather than damage.

use indexmap::IndexMap;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    config::RunMode,
    data::{cleanup_backup::CleanupBackupRepository, game::GameRepository},
    error::{admin::AdminError, AppError},
    model::{
        admin::{BackupParam, CleanupReport, DuplicateGroup},
        game::GameParam,
    },
    util::text,
};

/// Buckets games by normalized name, preserving input order.
///
/// Both the buckets and the members within each bucket keep the relative
/// order of the input, which is what makes the keeper (first member)
/// deterministic. Buckets of size 1 are included; callers filter for
/// duplicate groups.
pub(crate) fn group_by_normalized_name(games: Vec<GameParam>) -> IndexMap<String, Vec<GameParam>> {
    let mut groups: IndexMap<String, Vec<GameParam>> = IndexMap::new();

    for game in games {
        groups
            .entry(text::normalize_name(&game.name))
            .or_default()
            .push(game);
    }

    groups
}

pub struct CleanupService<'a> {
    db: &'a DatabaseConnection,
    run_mode: RunMode,
}

impl<'a> CleanupService<'a> {
    pub fn new(db: &'a DatabaseConnection, run_mode: RunMode) -> Self {
        Self { db, run_mode }
    }

    /// Removes every duplicate record from the catalog.
    ///
    /// Within each duplicate group the record appearing first in store order
    /// is retained; all others are backed up and deleted. The run-mode gate
    /// is checked before any store access. A backup failure aborts the run
    /// before deletion; a delete failure is logged with the backup token for
    /// correlation and propagated without retry.
    ///
    /// # Returns
    /// - `Ok(CleanupReport::None)` - No duplicate group had more than one member
    /// - `Ok(CleanupReport::Removed)` - Duplicates were backed up and removed
    /// - `Err(AppError::AdminErr(CleanupForbidden))` - Running in production mode
    /// - `Err(AppError::DbErr)` - Store read, backup write, or delete failed
    pub async fn cleanup_duplicates(&self) -> Result<CleanupReport, AppError> {
        if self.run_mode.is_production() {
            return Err(AdminError::CleanupForbidden.into());
        }

        let repo = GameRepository::new(self.db);

        let games: Vec<GameParam> = repo
            .find_all()
            .await?
            .into_iter()
            .map(GameParam::from_entity)
            .collect();
        let total = games.len();

        let duplicate_groups: Vec<DuplicateGroup> = group_by_normalized_name(games)
            .into_iter()
            .filter(|(_, members)| members.len() > 1)
            .map(|(key, members)| DuplicateGroup { key, members })
            .collect();

        let removed_ids: Vec<i32> = duplicate_groups
            .iter()
            .flat_map(|group| group.loser_ids())
            .collect();

        if removed_ids.is_empty() {
            tracing::info!(total, "no duplicate records found");
            return Ok(CleanupReport::None);
        }

        let backup = self.backup(&removed_ids).await?;

        match repo.delete_by_ids(&removed_ids).await {
            Ok(deleted) => {
                tracing::info!(
                    backup_token = %backup.token,
                    removed = deleted,
                    groups = duplicate_groups.len(),
                    "duplicate cleanup complete"
                );
            }
            Err(err) => {
                tracing::error!(
                    backup_token = %backup.token,
                    error = %err,
                    "bulk delete failed after backup; records were not removed"
                );
                return Err(err.into());
            }
        }

        Ok(CleanupReport::Removed {
            removed_count: removed_ids.len() as u64,
            removed_ids,
            duplicate_groups,
            backup_token: backup.token,
        })
    }

    /// Snapshots the records with the given ids before deletion.
    ///
    /// The full records are fetched, serialized, and appended to the backup
    /// table under a fresh UUID token, then an audit log entry with the token
    /// and record count is emitted. Any failure here reaches the caller
    /// before a delete is attempted.
    async fn backup(&self, ids: &[i32]) -> Result<BackupParam, AppError> {
        let games = GameRepository::new(self.db).find_by_ids(ids).await?;

        let token = Uuid::new_v4().to_string();
        let payload = serde_json::to_value(&games).map_err(|err| {
            AppError::InternalError(format!("Failed to serialize backup payload: {err}"))
        })?;

        let record = CleanupBackupRepository::new(self.db)
            .create(token.clone(), payload, games.len() as i32)
            .await?;

        tracing::info!(
            backup_token = %token,
            record_count = games.len(),
            "backed up records before duplicate cleanup"
        );

        Ok(BackupParam {
            token,
            created_at: record.created_at,
            games: games.into_iter().map(GameParam::from_entity).collect(),
        })
    }
}
