//! card-server: virtual card accounts backed by the Reap provider
//!
//! - `db`: internal/external card id mapping (PostgreSQL)
//! - `services`: card orchestration over the id store and the provider
//! - `api`: HTTP surface

pub mod api;
pub mod config;
pub mod db;
pub mod logger;
pub mod services;
pub mod state;

#[cfg(test)]
pub(crate) mod testing;

pub use config::Config;
pub use state::AppState;
