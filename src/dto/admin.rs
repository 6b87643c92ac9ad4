use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A group of records sharing a normalized name, in store order.
///
/// The first member id is the keeper; the rest are the removal candidates.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateGroupDto {
    /// Normalized-name key shared by the group members.
    pub key: String,
    /// Member ids in store order (keeper first).
    pub member_ids: Vec<i32>,
}

/// Outcome of a duplicate cleanup run.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(tag = "status")]
pub enum CleanupReportDto {
    /// No duplicate group had more than one member; nothing was touched.
    #[serde(rename = "none")]
    None,

    /// Duplicates were backed up and removed.
    #[serde(rename = "removed", rename_all = "camelCase")]
    Removed {
        removed_count: u64,
        removed_ids: Vec<i32>,
        duplicate_groups: Vec<DuplicateGroupDto>,
        /// Token of the durable backup taken before deletion.
        backup_id: String,
    },
}
