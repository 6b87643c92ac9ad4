use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::{model::game::CreateGameParam, model::game::UpdateGameParam, util::text};

pub struct GameRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new game record.
    ///
    /// The name is stored as given (the service lowercases it first) and the
    /// slug is supplied by the caller, derived from the name.
    pub async fn create(
        &self,
        param: CreateGameParam,
        slug: String,
    ) -> Result<entity::game::Model, DbErr> {
        entity::game::ActiveModel {
            name: ActiveValue::Set(param.name),
            slug: ActiveValue::Set(slug),
            category: ActiveValue::Set(param.category),
            price: ActiveValue::Set(param.price),
            description: ActiveValue::Set(param.description),
            release_date: ActiveValue::Set(param.release_date),
            platforms: ActiveValue::Set(param.platforms.map(entity::game::StringList)),
            genres: ActiveValue::Set(param.genres.map(entity::game::StringList)),
            developer: ActiveValue::Set(param.developer),
            publisher: ActiveValue::Set(param.publisher),
            rating: ActiveValue::Set(param.rating),
            image_url: ActiveValue::Set(param.image_url),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Creates multiple game records.
    ///
    /// Each element pairs a create param with its precomputed slug. Inserts
    /// are issued one at a time so the created models can be returned; the
    /// catalog is small enough that this is not a bottleneck.
    pub async fn create_many(
        &self,
        params: Vec<(CreateGameParam, String)>,
    ) -> Result<Vec<entity::game::Model>, DbErr> {
        let mut created = Vec::with_capacity(params.len());
        for (param, slug) in params {
            created.push(self.create(param, slug).await?);
        }

        Ok(created)
    }

    /// Gets every game in the catalog, in ascending id order.
    ///
    /// Unbounded read: the duplicate grouper needs the entire collection, and
    /// ascending id order is what makes "first by input order" deterministic.
    pub async fn find_all(&self) -> Result<Vec<entity::game::Model>, DbErr> {
        entity::prelude::Game::find()
            .order_by_asc(entity::game::Column::Id)
            .all(self.db)
            .await
    }

    /// Finds a game by id.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::game::Model>, DbErr> {
        entity::prelude::Game::find_by_id(id).one(self.db).await
    }

    /// Finds the games with the given ids, in ascending id order.
    ///
    /// Ids with no matching record are silently absent from the result.
    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<entity::game::Model>, DbErr> {
        entity::prelude::Game::find()
            .filter(entity::game::Column::Id.is_in(ids.iter().copied()))
            .order_by_asc(entity::game::Column::Id)
            .all(self.db)
            .await
    }

    /// Finds games whose name contains the given term, case-insensitively.
    pub async fn find_by_name_contains(
        &self,
        name: &str,
    ) -> Result<Vec<entity::game::Model>, DbErr> {
        entity::prelude::Game::find()
            .filter(entity::game::Column::Name.contains(name.to_lowercase()))
            .order_by_asc(entity::game::Column::Id)
            .all(self.db)
            .await
    }

    /// Finds a game by its slug.
    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<entity::game::Model>, DbErr> {
        entity::prelude::Game::find()
            .filter(entity::game::Column::Slug.eq(slug))
            .one(self.db)
            .await
    }

    /// Finds the first game whose normalized name equals the given key.
    ///
    /// The store cannot compute the normalized form, so this scans the full
    /// collection in store order. Used by the create path's duplicate check.
    pub async fn find_by_normalized_name(
        &self,
        key: &str,
    ) -> Result<Option<entity::game::Model>, DbErr> {
        let games = self.find_all().await?;

        Ok(games
            .into_iter()
            .find(|game| text::normalize_name(&game.name) == key))
    }

    /// Applies a partial update to a game.
    ///
    /// Returns `None` when no game with the given id exists. Only fields
    /// present in the param are touched; the slug is never regenerated.
    pub async fn update(
        &self,
        id: i32,
        param: UpdateGameParam,
    ) -> Result<Option<entity::game::Model>, DbErr> {
        let Some(game) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active_model: entity::game::ActiveModel = game.into();
        if let Some(name) = param.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(category) = param.category {
            active_model.category = ActiveValue::Set(category);
        }
        if let Some(price) = param.price {
            active_model.price = ActiveValue::Set(price);
        }
        if let Some(description) = param.description {
            active_model.description = ActiveValue::Set(Some(description));
        }
        if let Some(release_date) = param.release_date {
            active_model.release_date = ActiveValue::Set(Some(release_date));
        }
        if let Some(platforms) = param.platforms {
            active_model.platforms = ActiveValue::Set(Some(entity::game::StringList(platforms)));
        }
        if let Some(genres) = param.genres {
            active_model.genres = ActiveValue::Set(Some(entity::game::StringList(genres)));
        }
        if let Some(developer) = param.developer {
            active_model.developer = ActiveValue::Set(Some(developer));
        }
        if let Some(publisher) = param.publisher {
            active_model.publisher = ActiveValue::Set(Some(publisher));
        }
        if let Some(rating) = param.rating {
            active_model.rating = ActiveValue::Set(Some(rating));
        }
        if let Some(image_url) = param.image_url {
            active_model.image_url = ActiveValue::Set(Some(image_url));
        }
        if let Some(is_active) = param.is_active {
            active_model.is_active = ActiveValue::Set(is_active);
        }

        active_model.update(self.db).await.map(Some)
    }

    /// Deletes a game by id, returning the removed record.
    ///
    /// Returns `None` when no game with the given id exists.
    pub async fn delete(&self, id: i32) -> Result<Option<entity::game::Model>, DbErr> {
        let Some(game) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        entity::prelude::Game::delete_by_id(id).exec(self.db).await?;

        Ok(Some(game))
    }

    /// Deletes every game whose id is in the given set.
    ///
    /// Idempotent per id: ids with no matching record are skipped without
    /// error. Returns the number of records actually deleted.
    pub async fn delete_by_ids(&self, ids: &[i32]) -> Result<u64, DbErr> {
        let result = entity::prelude::Game::delete_many()
            .filter(entity::game::Column::Id.is_in(ids.iter().copied()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
