//! Service layer

pub mod card_service;
pub mod error;

pub use card_service::{CardService, CreatedCard, PAGE_SIZE};
pub use error::{CardServiceError, CardServiceResult, ErrorKind};
