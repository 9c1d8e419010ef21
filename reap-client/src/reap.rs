//! Reap API client

use crate::http::HttpClient;
use crate::types::{
    AccountBalanceResponse, AdjustCardBalanceParams, AdjustCardBalanceResponse,
    BalanceHistoryQuery, CreateCardRequest, CreateCardResponse, GetCardsParams, ListWindow, Page,
    ProviderBalanceChange, ProviderCard, ProviderTransaction, TransactionQuery,
};
use crate::{CardProvider, ClientConfig, ClientResult};
use async_trait::async_trait;
use reqwest::{Method, StatusCode};

/// Default card status filter for listings
pub const DEFAULT_CARD_STATUS: &str = "ACTIVE";

/// HTTP implementation of [`CardProvider`]
#[derive(Debug, Clone)]
pub struct ReapClient {
    http: HttpClient,
}

impl ReapClient {
    /// Build a client with its own connection pool
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        Ok(Self {
            http: HttpClient::new(&config)?,
        })
    }

    /// Build a client sharing an existing reqwest client
    pub fn with_http_client(config: ClientConfig, client: reqwest::Client) -> ClientResult<Self> {
        Ok(Self {
            http: HttpClient::with_client(&config, client)?,
        })
    }

    async fn get<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ClientResult<T> {
        self.http
            .send::<T, ()>(Method::GET, path, query, None, StatusCode::OK)
            .await
    }
}

#[async_trait]
impl CardProvider for ReapClient {
    async fn get_account_balance(&self) -> ClientResult<AccountBalanceResponse> {
        self.get("account/balance", &[]).await
    }

    async fn create_card(&self, request: &CreateCardRequest) -> ClientResult<CreateCardResponse> {
        self.http
            .send(Method::POST, "cards", &[], Some(request), StatusCode::CREATED)
            .await
    }

    async fn get_card(&self, card_id: &str) -> ClientResult<ProviderCard> {
        self.get(&format!("cards/{card_id}"), &[]).await
    }

    async fn get_cards(&self, params: &GetCardsParams) -> ClientResult<Page<ProviderCard>> {
        let status = params
            .status
            .clone()
            .unwrap_or_else(|| DEFAULT_CARD_STATUS.to_string());
        let mut query = vec![("status", status)];
        if !params.metadata_ids.is_empty() {
            query.push(("metadataId", params.metadata_ids.join(",")));
        }
        self.get("cards", &query).await
    }

    /// # Panics
    ///
    /// Always. Balance adjustment is not supported by this client.
    async fn adjust_card_balance(
        &self,
        _params: &AdjustCardBalanceParams,
    ) -> ClientResult<AdjustCardBalanceResponse> {
        unimplemented!("card balance adjustment is not supported")
    }

    async fn get_card_balance_history(
        &self,
        card_id: &str,
        window: &ListWindow,
    ) -> ClientResult<Page<ProviderBalanceChange>> {
        let body = BalanceHistoryQuery {
            from_date: window.from_date_param(),
            limit: window.limit.to_string(),
        };
        self.http
            .send(
                Method::GET,
                &format!("cards/{card_id}/balance-history"),
                &[],
                Some(&body),
                StatusCode::OK,
            )
            .await
    }

    async fn get_card_transactions(
        &self,
        card_id: &str,
        window: &ListWindow,
    ) -> ClientResult<Page<ProviderTransaction>> {
        let body = TransactionQuery {
            from_date: window.from_date_param(),
            limit: window.limit,
        };
        self.http
            .send(
                Method::GET,
                &format!("cards/{card_id}/transactions"),
                &[],
                Some(&body),
                StatusCode::OK,
            )
            .await
    }

    async fn get_all_transactions(
        &self,
        window: &ListWindow,
    ) -> ClientResult<Page<ProviderTransaction>> {
        let body = TransactionQuery {
            from_date: window.from_date_param(),
            limit: window.limit,
        };
        self.http
            .send(Method::GET, "transactions", &[], Some(&body), StatusCode::OK)
            .await
    }
}
