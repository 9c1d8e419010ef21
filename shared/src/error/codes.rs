//! Error codes
//!
//! - 0xxx: request errors
//! - 1xxx: card errors
//! - 2xxx: provider errors
//! - 9xxx: system errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Serialized as its `u16` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    ValidationFailed = 1,
    /// Body missing or not JSON
    InvalidRequest = 2,

    /// No identity mapping exists for the card id
    CardNotFound = 1001,
    /// The generated card id collided with an existing mapping
    CardIdConflict = 1002,
    /// Provider card was created but the id mapping could not be stored
    CardMappingFailed = 1003,

    /// Provider answered with an unexpected status
    ProviderRejected = 2001,
    /// Provider response could not be decoded
    ProviderProtocol = 2002,
    /// Provider could not be reached
    ProviderUnavailable = 2003,

    /// A provider request could not be built
    InternalError = 9001,
    DatabaseError = 9002,
    TimeoutError = 9003,
}

impl ErrorCode {
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::CardNotFound => "Card not found",
            ErrorCode::CardIdConflict => "Card id already exists",
            ErrorCode::CardMappingFailed => "Card was issued but could not be recorded",
            ErrorCode::ProviderRejected => "Card provider rejected the request",
            ErrorCode::ProviderProtocol => "Card provider returned an unreadable response",
            ErrorCode::ProviderUnavailable => "Card provider is unavailable",
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::TimeoutError => "Card provider timed out",
        }
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Ok(match value {
            1 => ErrorCode::ValidationFailed,
            2 => ErrorCode::InvalidRequest,
            1001 => ErrorCode::CardNotFound,
            1002 => ErrorCode::CardIdConflict,
            1003 => ErrorCode::CardMappingFailed,
            2001 => ErrorCode::ProviderRejected,
            2002 => ErrorCode::ProviderProtocol,
            2003 => ErrorCode::ProviderUnavailable,
            9001 => ErrorCode::InternalError,
            9002 => ErrorCode::DatabaseError,
            9003 => ErrorCode::TimeoutError,
            _ => return Err(InvalidErrorCode(value)),
        })
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
