//! Shared types for the card platform
//!
//! Domain entities produced by the card service (cards, transactions,
//! balance history) and the unified error system used at the HTTP boundary.

pub mod card;
pub mod error;
pub mod util;

// Re-exports
pub use card::{
    AccountBalance, Address, BalanceChange, Card, ContactInfo, CreateCardParams, FeeDetails,
    IdDocument, MerchantDetails, Transaction,
};
pub use error::{AppError, AppResult, ErrorCode, ErrorResponse};
pub use http;
pub use serde::{Deserialize, Serialize};
