//! Client for the Reap card-issuing API
//!
//! [`ReapClient`] speaks the provider's REST protocol and implements the
//! [`CardProvider`] trait that the card service depends on.
//!
//! # Example
//!
//! ```ignore
//! use reap_client::{CardProvider, ClientConfig, ReapClient};
//!
//! let client = ReapClient::new(ClientConfig::new("https://sandbox.example.xyz", api_key))?;
//! let balance = client.get_account_balance().await?;
//! ```

pub mod config;
pub mod error;
pub mod http;
pub mod provider;
pub mod reap;
pub mod types;

pub use config::{ClientConfig, DEFAULT_API_VERSION, TransportConfig};
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use provider::CardProvider;
pub use reap::{DEFAULT_CARD_STATUS, ReapClient};
pub use types::*;
