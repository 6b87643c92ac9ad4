use chrono::Utc;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::{
    config::RunMode,
    data::{cleanup_backup::CleanupBackupRepository, game::GameRepository},
    error::{admin::AdminError, AppError},
    model::{admin::CleanupReport, game::GameParam},
    service::admin::{group_by_normalized_name, CleanupService},
};

mod group;

/// Helper to build an in-memory game param for grouping tests.
fn game_param(id: i32, name: &str) -> GameParam {
    GameParam {
        id,
        name: name.to_string(),
        slug: name.to_lowercase().replace(' ', "-"),
        category: "Action".to_string(),
        price: 59.99,
        description: None,
        release_date: None,
        platforms: None,
        genres: None,
        developer: None,
        publisher: None,
        rating: None,
        image_url: None,
        is_active: true,
        created_at: Utc::now(),
    }
}
