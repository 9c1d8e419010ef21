//! PostgreSQL card id mapping

use super::{CardRepository, RepoError, RepoResult};
use async_trait::async_trait;
use sqlx::PgPool;
use std::collections::HashMap;

#[derive(sqlx::FromRow)]
struct CardIdRow {
    id: String,
    external_id: Option<String>,
}

/// [`CardRepository`] backed by the `cards` table
#[derive(Clone)]
pub struct PgCardRepository {
    pool: PgPool,
}

impl PgCardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CardRepository for PgCardRepository {
    async fn save(&self, id: &str, external_id: &str) -> RepoResult<()> {
        sqlx::query("INSERT INTO cards (id, external_id) VALUES ($1, $2)")
            .bind(id)
            .bind(external_id)
            .execute(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                    RepoError::Duplicate(format!("card {id}"))
                }
                other => RepoError::Database(other),
            })?;
        Ok(())
    }

    async fn resolve_external(&self, id: &str) -> RepoResult<String> {
        let external_id: Option<Option<String>> =
            sqlx::query_scalar("SELECT external_id FROM cards WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        external_id
            .flatten()
            .ok_or_else(|| RepoError::NotFound(format!("card {id}")))
    }

    async fn list_internal_ids(&self) -> RepoResult<Vec<String>> {
        let ids = sqlx::query_scalar("SELECT id FROM cards ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await?;
        Ok(ids)
    }

    async fn resolve_external_to_internal_map(
        &self,
        external_ids: &[String],
    ) -> RepoResult<HashMap<String, String>> {
        if external_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows: Vec<CardIdRow> =
            sqlx::query_as("SELECT id, external_id FROM cards WHERE external_id = ANY($1)")
                .bind(external_ids)
                .fetch_all(&self.pool)
                .await?;

        Ok(rows
            .into_iter()
            .filter_map(|row| row.external_id.map(|external_id| (external_id, row.id)))
            .collect())
    }
}
