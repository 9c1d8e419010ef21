//! Card service error type
//!
//! Every failure names the step that produced it so the log line reads as a
//! trail ("resolve external card id: Not found: card abc123").

use crate::db::RepoError;
use reap_client::ClientError;
use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Step name of the mapping write that follows provider card creation
pub const SAVE_MAPPING_STEP: &str = "save card id mapping";

#[derive(Debug, Error)]
pub enum CardServiceError {
    #[error("{step}: {source}")]
    Store {
        step: &'static str,
        #[source]
        source: RepoError,
    },

    #[error("{step}: {source}")]
    Provider {
        step: &'static str,
        #[source]
        source: ClientError,
    },
}

/// Failure classification independent of the step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Conflict,
    /// Provider answered with an unexpected status
    Provider,
    /// Provider answered but the body did not decode
    Protocol,
    /// Provider could not be reached
    Transport,
    /// Provider request could not be built
    Internal,
    Store,
}

impl CardServiceError {
    pub(crate) fn store(step: &'static str) -> impl FnOnce(RepoError) -> Self {
        move |source| Self::Store { step, source }
    }

    pub(crate) fn provider(step: &'static str) -> impl FnOnce(ClientError) -> Self {
        move |source| Self::Provider { step, source }
    }

    /// Name of the step that failed
    pub fn step(&self) -> &'static str {
        match self {
            Self::Store { step, .. } | Self::Provider { step, .. } => step,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Store { source, .. } => match source {
                RepoError::NotFound(_) => ErrorKind::NotFound,
                RepoError::Duplicate(_) => ErrorKind::Conflict,
                RepoError::Database(_) => ErrorKind::Store,
            },
            Self::Provider { source, .. } => match source {
                ClientError::Provider { .. } => ErrorKind::Provider,
                ClientError::Protocol { .. } => ErrorKind::Protocol,
                ClientError::Http(_) => ErrorKind::Transport,
                ClientError::InvalidUrl(_)
                | ClientError::InvalidHeader(_)
                | ClientError::Serialization(_) => ErrorKind::Internal,
            },
        }
    }
}

pub type CardServiceResult<T> = Result<T, CardServiceError>;

impl From<CardServiceError> for AppError {
    fn from(e: CardServiceError) -> Self {
        match e.kind() {
            ErrorKind::NotFound => AppError::new(ErrorCode::CardNotFound),
            ErrorKind::Conflict => AppError::new(ErrorCode::CardIdConflict),
            ErrorKind::Provider => {
                tracing::warn!(error = %e, "Provider rejected request");
                let mut err = AppError::new(ErrorCode::ProviderRejected);
                if let CardServiceError::Provider {
                    source: ClientError::Provider { status, code, .. },
                    ..
                } = &e
                {
                    err = err
                        .with_detail("providerStatus", *status)
                        .with_detail("providerCode", code.clone());
                }
                err
            }
            ErrorKind::Protocol => {
                tracing::error!(error = %e, "Provider response could not be decoded");
                AppError::new(ErrorCode::ProviderProtocol)
            }
            ErrorKind::Transport if matches!(&e, CardServiceError::Provider { source, .. } if source.is_timeout()) => {
                tracing::error!(error = %e, "Provider request timed out");
                AppError::new(ErrorCode::TimeoutError)
            }
            ErrorKind::Transport => {
                tracing::error!(error = %e, "Provider unreachable");
                AppError::new(ErrorCode::ProviderUnavailable)
            }
            ErrorKind::Internal => {
                tracing::error!(error = %e, "Provider request could not be built");
                AppError::new(ErrorCode::InternalError)
            }
            // The provider card exists at this point; see the orphan log in create_card
            ErrorKind::Store if e.step() == SAVE_MAPPING_STEP => {
                AppError::new(ErrorCode::CardMappingFailed)
            }
            ErrorKind::Store => {
                tracing::error!(error = %e, "Card store error");
                AppError::new(ErrorCode::DatabaseError)
            }
        }
    }
}
