use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::{
    data::game::GameRepository,
    error::{game::GameError, AppError},
    model::game::{CreateGameParam, UpdateGameParam},
    service::game::GameService,
};

mod create_many;
mod get;
mod search;

/// Helper to build a create param with the given name.
fn create_param(name: &str) -> CreateGameParam {
    CreateGameParam {
        name: name.to_string(),
        category: "Action".to_string(),
        price: 49.99,
        description: None,
        release_date: None,
        platforms: None,
        genres: None,
        developer: None,
        publisher: None,
        rating: None,
        image_url: None,
    }
}
