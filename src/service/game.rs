use sea_orm::DatabaseConnection;

use crate::{
    data::game::GameRepository,
    error::{game::GameError, AppError},
    model::game::{CreateGameParam, GameParam, UpdateGameParam},
    util::{parse, text},
};

pub struct GameService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new game.
    ///
    /// The name is lowercased before storage, checked against every existing
    /// record's normalized name (a collision is rejected before anything is
    /// written), and the slug is derived from the lowercased name. The
    /// duplicate check is a read-then-write sequence with no lock; concurrent
    /// creates can race past it, which is why cleanup exists.
    pub async fn create(&self, mut param: CreateGameParam) -> Result<GameParam, AppError> {
        Self::validate_create(&param)?;

        param.name = param.name.to_lowercase();

        let repo = GameRepository::new(self.db);

        let key = text::normalize_name(&param.name);
        if let Some(existing) = repo.find_by_normalized_name(&key).await? {
            return Err(GameError::DuplicateName(existing.name).into());
        }

        let slug = text::generate_slug(&param.name);
        let game = repo.create(param, slug).await?;

        Ok(GameParam::from_entity(game))
    }

    /// Creates multiple games in one request.
    ///
    /// Each record is validated, lowercased, and slugged like a single create,
    /// but no normalized-name check is performed against existing records or
    /// between the submitted records. This is the documented path by which
    /// duplicates enter the catalog; the admin cleanup removes them.
    pub async fn create_many(
        &self,
        params: Vec<CreateGameParam>,
    ) -> Result<Vec<GameParam>, AppError> {
        for param in &params {
            Self::validate_create(param)?;
        }

        let processed: Vec<(CreateGameParam, String)> = params
            .into_iter()
            .map(|mut param| {
                param.name = param.name.to_lowercase();
                let slug = text::generate_slug(&param.name);
                (param, slug)
            })
            .collect();

        let games = GameRepository::new(self.db).create_many(processed).await?;

        Ok(games.into_iter().map(GameParam::from_entity).collect())
    }

    /// Gets every game in the catalog.
    pub async fn get_all(&self) -> Result<Vec<GameParam>, AppError> {
        let games = GameRepository::new(self.db).find_all().await?;

        Ok(games.into_iter().map(GameParam::from_entity).collect())
    }

    /// Gets a game by its raw id path parameter.
    pub async fn get_by_id(&self, raw_id: &str) -> Result<GameParam, AppError> {
        let id = parse::parse_game_id(raw_id)?;

        let game = GameRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or(GameError::NotFoundById(id))?;

        Ok(GameParam::from_entity(game))
    }

    /// Searches games by a case-insensitive name fragment.
    ///
    /// An empty result is a 404, matching the search semantics of the admin
    /// tooling that consumes this endpoint.
    pub async fn search_by_name(&self, name: &str) -> Result<Vec<GameParam>, AppError> {
        let games = GameRepository::new(self.db)
            .find_by_name_contains(name)
            .await?;

        if games.is_empty() {
            return Err(GameError::NotFoundByName(name.to_string()).into());
        }

        Ok(games.into_iter().map(GameParam::from_entity).collect())
    }

    /// Gets a game by its slug.
    pub async fn get_by_slug(&self, slug: &str) -> Result<GameParam, AppError> {
        let game = GameRepository::new(self.db)
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| GameError::NotFoundBySlug(slug.to_string()))?;

        Ok(GameParam::from_entity(game))
    }

    /// Updates a game by its raw id path parameter.
    ///
    /// An updated name is lowercased to preserve the stored-casing invariant;
    /// the slug is left unchanged.
    pub async fn update_by_id(
        &self,
        raw_id: &str,
        param: UpdateGameParam,
    ) -> Result<GameParam, AppError> {
        let id = parse::parse_game_id(raw_id)?;

        self.update(id, param).await
    }

    /// Updates the first game whose name matches the given search term.
    pub async fn update_by_name(
        &self,
        name: &str,
        param: UpdateGameParam,
    ) -> Result<GameParam, AppError> {
        let games = self.search_by_name(name).await?;

        self.update(games[0].id, param).await
    }

    /// Updates the game with the given slug.
    pub async fn update_by_slug(
        &self,
        slug: &str,
        param: UpdateGameParam,
    ) -> Result<GameParam, AppError> {
        let game = self.get_by_slug(slug).await?;

        self.update(game.id, param).await
    }

    /// Removes a game by its raw id path parameter, returning the removed record.
    pub async fn remove_by_id(&self, raw_id: &str) -> Result<GameParam, AppError> {
        let id = parse::parse_game_id(raw_id)?;

        let game = GameRepository::new(self.db)
            .delete(id)
            .await?
            .ok_or(GameError::NotFoundById(id))?;

        Ok(GameParam::from_entity(game))
    }

    /// Removes the first game whose name matches the given search term.
    pub async fn remove_by_name(&self, name: &str) -> Result<GameParam, AppError> {
        let games = self.search_by_name(name).await?;
        let id = games[0].id;

        let game = GameRepository::new(self.db)
            .delete(id)
            .await?
            .ok_or(GameError::NotFoundById(id))?;

        Ok(GameParam::from_entity(game))
    }

    /// Removes the game with the given slug.
    pub async fn remove_by_slug(&self, slug: &str) -> Result<GameParam, AppError> {
        let game = self.get_by_slug(slug).await?;

        let game = GameRepository::new(self.db)
            .delete(game.id)
            .await?
            .ok_or(GameError::NotFoundById(game.id))?;

        Ok(GameParam::from_entity(game))
    }

    async fn update(&self, id: i32, mut param: UpdateGameParam) -> Result<GameParam, AppError> {
        Self::validate_update(&param)?;

        if let Some(name) = param.name.take() {
            param.name = Some(name.to_lowercase());
        }

        let game = GameRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or(GameError::NotFoundById(id))?;

        Ok(GameParam::from_entity(game))
    }

    fn validate_create(param: &CreateGameParam) -> Result<(), AppError> {
        if param.name.trim().is_empty() {
            return Err(AppError::BadRequest("Game name must not be empty".to_string()));
        }
        if param.category.trim().is_empty() {
            return Err(AppError::BadRequest("Category must not be empty".to_string()));
        }
        if param.price <= 0.0 {
            return Err(AppError::BadRequest("Price must be positive".to_string()));
        }
        Self::validate_rating(param.rating)
    }

    fn validate_update(param: &UpdateGameParam) -> Result<(), AppError> {
        if let Some(name) = &param.name {
            if name.trim().is_empty() {
                return Err(AppError::BadRequest("Game name must not be empty".to_string()));
            }
        }
        if let Some(price) = param.price {
            if price <= 0.0 {
                return Err(AppError::BadRequest("Price must be positive".to_string()));
            }
        }
        Self::validate_rating(param.rating)
    }

    fn validate_rating(rating: Option<f64>) -> Result<(), AppError> {
        if let Some(rating) = rating {
            if !(0.0..=10.0).contains(&rating) {
                return Err(AppError::BadRequest(
                    "Rating must be between 0 and 10".to_string(),
                ));
            }
        }
        Ok(())
    }
}
