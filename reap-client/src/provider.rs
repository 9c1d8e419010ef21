//! Provider abstraction consumed by the card service

use crate::ClientResult;
use crate::types::{
    AccountBalanceResponse, AdjustCardBalanceParams, AdjustCardBalanceResponse,
    CreateCardRequest, CreateCardResponse, GetCardsParams, ListWindow, Page,
    ProviderBalanceChange, ProviderCard, ProviderTransaction,
};
use async_trait::async_trait;

/// Card-issuing provider operations
///
/// Card ids taken and returned here are the provider's external ids.
#[async_trait]
pub trait CardProvider: Send + Sync {
    async fn get_account_balance(&self) -> ClientResult<AccountBalanceResponse>;

    async fn create_card(&self, request: &CreateCardRequest) -> ClientResult<CreateCardResponse>;

    async fn get_card(&self, card_id: &str) -> ClientResult<ProviderCard>;

    async fn get_cards(&self, params: &GetCardsParams) -> ClientResult<Page<ProviderCard>>;

    /// Not supported by any implementation yet.
    async fn adjust_card_balance(
        &self,
        params: &AdjustCardBalanceParams,
    ) -> ClientResult<AdjustCardBalanceResponse>;

    async fn get_card_balance_history(
        &self,
        card_id: &str,
        window: &ListWindow,
    ) -> ClientResult<Page<ProviderBalanceChange>>;

    async fn get_card_transactions(
        &self,
        card_id: &str,
        window: &ListWindow,
    ) -> ClientResult<Page<ProviderTransaction>>;

    async fn get_all_transactions(
        &self,
        window: &ListWindow,
    ) -> ClientResult<Page<ProviderTransaction>>;
}
