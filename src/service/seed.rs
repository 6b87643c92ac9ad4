//! Catalog seeding from the RAWG game-data API.

use sea_orm::DatabaseConnection;
use serde::Deserialize;

use crate::{
    error::AppError,
    model::game::{CreateGameParam, GameParam},
    service::game::GameService,
};

/// Top-level RAWG games listing response.
#[derive(Debug, Deserialize)]
struct RawgListResponse {
    results: Vec<RawgGame>,
}

/// The subset of a RAWG game entry the seed cares about.
#[derive(Debug, Deserialize)]
struct RawgGame {
    name: String,
    slug: Option<String>,
    released: Option<String>,
    background_image: Option<String>,
    rating: Option<f64>,
    genres: Option<Vec<RawgNamed>>,
    platforms: Option<Vec<RawgPlatformEntry>>,
}

#[derive(Debug, Deserialize)]
struct RawgNamed {
    name: String,
}

#[derive(Debug, Deserialize)]
struct RawgPlatformEntry {
    platform: RawgNamed,
}

pub struct SeedService<'a> {
    db: &'a DatabaseConnection,
    http_client: &'a reqwest::Client,
    seed_url: &'a str,
}

impl<'a> SeedService<'a> {
    pub fn new(db: &'a DatabaseConnection, http_client: &'a reqwest::Client, seed_url: &'a str) -> Self {
        Self {
            db,
            http_client,
            seed_url,
        }
    }

    /// Fetches the external games listing and bulk-inserts it into the catalog.
    ///
    /// Each result is mapped to a create param: the RAWG slug doubles as the
    /// description when present, the price is randomized between 20 and 60
    /// (the external API has no pricing), and the category is the first genre
    /// or "Other". Missing release dates fall back to 2000-01-01. Failures
    /// are logged and propagated; nothing is retried.
    pub async fn execute_seed(&self) -> Result<Vec<GameParam>, AppError> {
        let response = self
            .http_client
            .get(self.seed_url)
            .send()
            .await?
            .error_for_status()
            .inspect_err(|err| tracing::error!(error = %err, "seed request failed"))?;

        let listing: RawgListResponse = response.json().await?;

        tracing::info!(count = listing.results.len(), "fetched seed games");

        let params = Self::map_results(listing.results);

        GameService::new(self.db).create_many(params).await
    }

    fn map_results(results: Vec<RawgGame>) -> Vec<CreateGameParam> {
        use rand::Rng;

        let mut rng = rand::rng();

        results
            .into_iter()
            .map(|game| CreateGameParam {
                description: Some(
                    game.slug
                        .unwrap_or_else(|| "No description".to_string()),
                ),
                price: f64::from(rng.random_range(20..60)),
                release_date: Some(game.released.unwrap_or_else(|| "2000-01-01".to_string())),
                category: game
                    .genres
                    .as_deref()
                    .and_then(|genres| genres.first())
                    .map(|genre| genre.name.clone())
                    .unwrap_or_else(|| "Other".to_string()),
                genres: game
                    .genres
                    .map(|genres| genres.into_iter().map(|genre| genre.name).collect()),
                platforms: game
                    .platforms
                    .map(|entries| entries.into_iter().map(|entry| entry.platform.name).collect()),
                rating: game.rating,
                image_url: game.background_image,
                developer: None,
                publisher: None,
                name: game.name,
            })
            .collect()
    }
}
