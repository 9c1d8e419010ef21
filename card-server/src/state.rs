//! Application state

use crate::config::Config;
use crate::db::PgCardRepository;
use crate::services::CardService;
use reap_client::{ClientConfig, ReapClient};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub cards: CardService,
}

impl AppState {
    pub fn new(cards: CardService) -> Self {
        Self { cards }
    }

    /// Connect to the database, run migrations and build the provider client
    pub async fn from_config(config: &Config) -> Result<Self, BoxError> {
        let pool = connect(config).await?;
        sqlx::migrate!("./migrations").run(&pool).await?;

        let client_config = ClientConfig::new(&config.reap_base_url, &config.reap_api_key)
            .with_transport(config.reap_transport.clone());
        let provider = ReapClient::new(client_config)?;

        Ok(Self::new(CardService::new(
            Arc::new(provider),
            Arc::new(PgCardRepository::new(pool)),
        )))
    }
}

/// Open the connection pool
pub async fn connect(config: &Config) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect(&config.database_url)
        .await
}
