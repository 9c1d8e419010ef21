//! Unified error system for the card platform
//!
//! - [`ErrorCode`]: numeric codes carried in every failure body
//! - [`ErrorCategory`]: classification by code range
//! - [`AppError`]: code, message and optional details
//! - [`ErrorResponse`]: JSON body an `AppError` renders to
//!
//! # Error Code Ranges
//!
//! - 0xxx: Request errors
//! - 1xxx: Card errors
//! - 2xxx: Provider errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ErrorResponse};
//!
//! let err = AppError::new(ErrorCode::CardNotFound);
//! assert_eq!(err.http_status(), http::StatusCode::NOT_FOUND);
//!
//! let err = AppError::validation("firstName is required").with_detail("field", "firstName");
//! let body = ErrorResponse::from(err);
//! assert_eq!(body.code.code(), 1);
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult, ErrorResponse};
