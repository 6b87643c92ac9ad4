//! Domain models for the duplicate cleanup workflow.

use chrono::{DateTime, Utc};

use crate::{
    dto::admin::{CleanupReportDto, DuplicateGroupDto},
    model::game::GameParam,
};

/// Records sharing a normalized name, in store order.
///
/// Constructed fresh on every cleanup invocation and never persisted. The
/// first member is the keeper; all others are candidates for removal. The
/// tie-break is input order only, with no recency or completeness heuristic.
#[derive(Debug, Clone, PartialEq)]
pub struct DuplicateGroup {
    /// Normalized-name key shared by the members.
    pub key: String,
    /// Members in store order (keeper first). Always at least two.
    pub members: Vec<GameParam>,
}

impl DuplicateGroup {
    /// Ids of every member after the keeper.
    pub fn loser_ids(&self) -> impl Iterator<Item = i32> + '_ {
        self.members.iter().skip(1).map(|game| game.id)
    }

    /// Converts the group to its DTO representation (ids only).
    pub fn into_dto(self) -> DuplicateGroupDto {
        DuplicateGroupDto {
            key: self.key,
            member_ids: self.members.into_iter().map(|game| game.id).collect(),
        }
    }
}

/// Snapshot of records captured immediately before a destructive cleanup.
#[derive(Debug, Clone)]
pub struct BackupParam {
    /// Unique backup token, used to correlate log entries with the stored row.
    pub token: String,
    /// When the snapshot was captured.
    pub created_at: DateTime<Utc>,
    /// The full records slated for deletion.
    pub games: Vec<GameParam>,
}

/// Outcome of a duplicate cleanup run.
#[derive(Debug, Clone)]
pub enum CleanupReport {
    /// No duplicate group had more than one member.
    None,
    /// Duplicates were backed up and removed.
    Removed {
        removed_count: u64,
        removed_ids: Vec<i32>,
        duplicate_groups: Vec<DuplicateGroup>,
        backup_token: String,
    },
}

impl CleanupReport {
    /// Converts the report to its DTO representation.
    pub fn into_dto(self) -> CleanupReportDto {
        match self {
            Self::None => CleanupReportDto::None,
            Self::Removed {
                removed_count,
                removed_ids,
                duplicate_groups,
                backup_token,
            } => CleanupReportDto::Removed {
                removed_count,
                removed_ids,
                duplicate_groups: duplicate_groups
                    .into_iter()
                    .map(DuplicateGroup::into_dto)
                    .collect(),
                backup_id: backup_token,
            },
        }
    }
}
