//! Card identity store
//!
//! Persists the mapping between our internal card ids and the provider's
//! external ids. Nothing else about a card is stored locally.

pub mod cards;

use async_trait::async_trait;
use std::collections::HashMap;
use thiserror::Error;

pub use cards::PgCardRepository;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Internal to external card id mapping
#[async_trait]
pub trait CardRepository: Send + Sync {
    /// Insert a new mapping. An existing internal id is a [`RepoError::Duplicate`].
    async fn save(&self, id: &str, external_id: &str) -> RepoResult<()>;

    /// External id for an internal id, or [`RepoError::NotFound`]
    async fn resolve_external(&self, id: &str) -> RepoResult<String>;

    /// All internal ids, newest first
    async fn list_internal_ids(&self) -> RepoResult<Vec<String>>;

    /// Bulk reverse lookup keyed by external id
    ///
    /// External ids without a mapping are absent from the result.
    async fn resolve_external_to_internal_map(
        &self,
        external_ids: &[String],
    ) -> RepoResult<HashMap<String, String>>;
}
