//! Test doubles for the provider and the identity store

use crate::db::{CardRepository, RepoError, RepoResult};
use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, TimeZone};
use reap_client::{
    AccountBalanceResponse, AdjustCardBalanceParams, AdjustCardBalanceResponse, CardMeta,
    CardProvider, ClientError, ClientResult, CreateCardRequest, CreateCardResponse, Fees,
    GetCardsParams, ListWindow, Merchant, Page, Pagination, PhoneNumberInfo,
    ProviderBalanceChange, ProviderCard, ProviderTransaction,
};
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// In-memory id mapping with the same uniqueness and ordering rules as the table
#[derive(Default)]
pub struct MemoryCardRepository {
    rows: Mutex<Vec<(String, String)>>,
    lookups: Mutex<Vec<Vec<String>>>,
    fail_saves: AtomicBool,
    fail_reads: AtomicBool,
}

impl MemoryCardRepository {
    /// Every later `save` fails with a database error
    pub fn fail_saves(&self) {
        self.fail_saves.store(true, Ordering::SeqCst);
    }

    /// Every later read fails with a database error
    pub fn fail_reads(&self) {
        self.fail_reads.store(true, Ordering::SeqCst);
    }

    /// Arguments of every bulk reverse lookup, in call order
    pub fn bulk_lookups(&self) -> Vec<Vec<String>> {
        self.lookups.lock().unwrap().clone()
    }

    fn check_reads(&self) -> RepoResult<()> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(RepoError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl CardRepository for MemoryCardRepository {
    async fn save(&self, id: &str, external_id: &str) -> RepoResult<()> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(RepoError::Database(sqlx::Error::PoolTimedOut));
        }
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|(existing, _)| existing == id) {
            return Err(RepoError::Duplicate(format!("card {id}")));
        }
        rows.push((id.to_string(), external_id.to_string()));
        Ok(())
    }

    async fn resolve_external(&self, id: &str) -> RepoResult<String> {
        self.check_reads()?;
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|(existing, _)| existing == id)
            .map(|(_, external_id)| external_id.clone())
            .ok_or_else(|| RepoError::NotFound(format!("card {id}")))
    }

    async fn list_internal_ids(&self) -> RepoResult<Vec<String>> {
        self.check_reads()?;
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .rev()
            .map(|(id, _)| id.clone())
            .collect())
    }

    async fn resolve_external_to_internal_map(
        &self,
        external_ids: &[String],
    ) -> RepoResult<HashMap<String, String>> {
        self.lookups.lock().unwrap().push(external_ids.to_vec());
        self.check_reads()?;
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, external_id)| external_ids.contains(external_id))
            .map(|(id, external_id)| (external_id.clone(), id.clone()))
            .collect())
    }
}

/// Scriptable provider that records what it was asked
#[derive(Default)]
pub struct FakeProvider {
    balance: Mutex<AccountBalanceResponse>,
    created_id: Mutex<Option<String>>,
    cards: Mutex<Vec<(String, ProviderCard)>>,
    transactions: Mutex<Vec<ProviderTransaction>>,
    balance_changes: Mutex<Vec<(String, ProviderBalanceChange)>>,
    next_error: Mutex<Option<ClientError>>,
    delay: Mutex<Option<Duration>>,
    create_calls: Mutex<Vec<CreateCardRequest>>,
    get_card_calls: Mutex<Vec<String>>,
    get_cards_calls: Mutex<Vec<GetCardsParams>>,
    history_calls: Mutex<Vec<String>>,
    window_calls: Mutex<Vec<ListWindow>>,
}

impl FakeProvider {
    pub fn set_balance(&self, balance: AccountBalanceResponse) {
        *self.balance.lock().unwrap() = balance;
    }

    pub fn set_created_id(&self, id: &str) {
        *self.created_id.lock().unwrap() = Some(id.to_string());
    }

    pub fn add_card(&self, external_id: &str, card: ProviderCard) {
        self.cards
            .lock()
            .unwrap()
            .push((external_id.to_string(), card));
    }

    pub fn add_transaction(&self, tx: ProviderTransaction) {
        self.transactions.lock().unwrap().push(tx);
    }

    /// Balance movement on the provider card `external_id`
    pub fn add_balance_change(&self, external_id: &str, change: ProviderBalanceChange) {
        self.balance_changes
            .lock()
            .unwrap()
            .push((external_id.to_string(), change));
    }

    /// The balance lookup sleeps for `delay` before answering
    pub fn set_delay(&self, delay: Duration) {
        *self.delay.lock().unwrap() = Some(delay);
    }

    /// The next provider call fails with `err`
    pub fn fail_with(&self, err: ClientError) {
        *self.next_error.lock().unwrap() = Some(err);
    }

    pub fn create_card_calls(&self) -> Vec<CreateCardRequest> {
        self.create_calls.lock().unwrap().clone()
    }

    pub fn get_card_calls(&self) -> Vec<String> {
        self.get_card_calls.lock().unwrap().clone()
    }

    pub fn get_cards_calls(&self) -> Vec<GetCardsParams> {
        self.get_cards_calls.lock().unwrap().clone()
    }

    /// Provider card ids asked for balance history
    pub fn history_calls(&self) -> Vec<String> {
        self.history_calls.lock().unwrap().clone()
    }

    pub fn window_calls(&self) -> Vec<ListWindow> {
        self.window_calls.lock().unwrap().clone()
    }

    fn check(&self) -> ClientResult<()> {
        match self.next_error.lock().unwrap().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

fn page<T>(items: Vec<T>) -> Page<T> {
    let count = items.len() as u32;
    Page {
        items,
        meta: Pagination {
            total_items: count,
            item_count: count,
            items_per_page: 10,
            total_pages: 1,
            current_page: 1,
        },
    }
}

#[async_trait]
impl CardProvider for FakeProvider {
    async fn get_account_balance(&self) -> ClientResult<AccountBalanceResponse> {
        let delay = *self.delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        self.check()?;
        Ok(self.balance.lock().unwrap().clone())
    }

    async fn create_card(&self, request: &CreateCardRequest) -> ClientResult<CreateCardResponse> {
        self.create_calls.lock().unwrap().push(request.clone());
        self.check()?;
        let id = self
            .created_id
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| "ext-created".to_string());
        Ok(CreateCardResponse { id })
    }

    async fn get_card(&self, card_id: &str) -> ClientResult<ProviderCard> {
        self.get_card_calls.lock().unwrap().push(card_id.to_string());
        self.check()?;
        self.cards
            .lock()
            .unwrap()
            .iter()
            .find(|(external_id, _)| external_id == card_id)
            .map(|(_, card)| card.clone())
            .ok_or_else(|| ClientError::Provider {
                status: 404,
                code: "CARD_NOT_FOUND".to_string(),
                message: format!("card {card_id} does not exist"),
            })
    }

    async fn get_cards(&self, params: &GetCardsParams) -> ClientResult<Page<ProviderCard>> {
        self.get_cards_calls.lock().unwrap().push(params.clone());
        self.check()?;
        let cards = self
            .cards
            .lock()
            .unwrap()
            .iter()
            .map(|(_, card)| card.clone())
            .filter(|card| {
                params.metadata_ids.is_empty() || params.metadata_ids.contains(&card.meta.id)
            })
            .collect();
        Ok(page(cards))
    }

    async fn adjust_card_balance(
        &self,
        _params: &AdjustCardBalanceParams,
    ) -> ClientResult<AdjustCardBalanceResponse> {
        self.check()?;
        Ok(AdjustCardBalanceResponse::default())
    }

    async fn get_card_balance_history(
        &self,
        card_id: &str,
        window: &ListWindow,
    ) -> ClientResult<Page<ProviderBalanceChange>> {
        self.history_calls.lock().unwrap().push(card_id.to_string());
        self.window_calls.lock().unwrap().push(window.clone());
        self.check()?;
        let changes = self
            .balance_changes
            .lock()
            .unwrap()
            .iter()
            .filter(|(external_id, _)| external_id == card_id)
            .map(|(_, change)| change.clone())
            .collect();
        Ok(page(changes))
    }

    async fn get_card_transactions(
        &self,
        card_id: &str,
        window: &ListWindow,
    ) -> ClientResult<Page<ProviderTransaction>> {
        self.window_calls.lock().unwrap().push(window.clone());
        self.check()?;
        let txs = self
            .transactions
            .lock()
            .unwrap()
            .iter()
            .filter(|tx| tx.card_id == card_id)
            .cloned()
            .collect();
        Ok(page(txs))
    }

    async fn get_all_transactions(
        &self,
        window: &ListWindow,
    ) -> ClientResult<Page<ProviderTransaction>> {
        self.window_calls.lock().unwrap().push(window.clone());
        self.check()?;
        Ok(page(self.transactions.lock().unwrap().clone()))
    }
}

/// Provider card whose metadata carries `id` as the internal card id
pub fn provider_card(id: &str, name: &str, last4: &str) -> ProviderCard {
    ProviderCard {
        card_name: name.to_string(),
        last4: last4.to_string(),
        available_credit: "100.00".to_string(),
        status: "ACTIVE".to_string(),
        meta: CardMeta {
            id: id.to_string(),
            email: format!("{id}@example.com"),
            otp_phone_number: PhoneNumberInfo {
                dial_code: 852,
                phone_number: "25441194".to_string(),
            },
        },
        ..Default::default()
    }
}

/// Transaction on the provider card `external_id`
pub fn provider_transaction(id: &str, external_id: &str) -> ProviderTransaction {
    ProviderTransaction {
        id: id.to_string(),
        card_id: external_id.to_string(),
        merchant: Merchant {
            id: "m-1".to_string(),
            name: "Coffee".to_string(),
            city: "Hong Kong".to_string(),
            country: "HKG".to_string(),
            ..Default::default()
        },
        category: "purchase".to_string(),
        fees: Fees {
            atm_fees: "0.00".to_string(),
            fx_fees: "0.10".to_string(),
        },
        bill_amount: "12.50".to_string(),
        bill_currency: "HKD".to_string(),
        transaction_amount: "12.50".to_string(),
        transaction_currency: "HKD".to_string(),
        conversion_rate: "1".to_string(),
        status: "Approved".to_string(),
        channel: "ECOM".to_string(),
        created_at: hong_kong_time(2026, 10, 19, 8, 30),
    }
}

/// Credit of 5.00 USD at 17:15 Hong Kong time
pub fn provider_balance_change(id: &str) -> ProviderBalanceChange {
    ProviderBalanceChange {
        id: id.to_string(),
        date: hong_kong_time(2026, 10, 19, 17, 15),
        source: String::new(),
        destination: String::new(),
        change_type: "credit".to_string(),
        status: "COMPLETED".to_string(),
        amount: "5.00".to_string(),
        currency: "USD".to_string(),
    }
}

/// Wall-clock time at UTC+08:00
pub fn hong_kong_time(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    min: u32,
) -> DateTime<FixedOffset> {
    FixedOffset::east_opt(8 * 3600)
        .unwrap()
        .with_ymd_and_hms(year, month, day, hour, min, 0)
        .unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_repository_duplicate() {
        let repo = MemoryCardRepository::default();
        repo.save("abc123", "ext-1").await.unwrap();
        let err = repo.save("abc123", "ext-2").await.unwrap_err();
        assert!(matches!(err, RepoError::Duplicate(_)));
        assert_eq!(repo.resolve_external("abc123").await.unwrap(), "ext-1");
    }

    #[tokio::test]
    async fn test_memory_repository_bulk_subset() {
        let repo = MemoryCardRepository::default();
        repo.save("abc123", "ext-1").await.unwrap();
        repo.save("def456", "ext-3").await.unwrap();

        let map = repo
            .resolve_external_to_internal_map(&["ext-1".to_string(), "ext-2".to_string()])
            .await
            .unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map["ext-1"], "abc123");
    }

    #[tokio::test]
    async fn test_fake_balance_history_filters_by_card() {
        let provider = FakeProvider::default();
        provider.add_balance_change("ext-1", provider_balance_change("bc-1"));
        let window = ListWindow::new(chrono::NaiveDate::MIN, 10);

        let other = provider.get_card_balance_history("ext-2", &window).await.unwrap();
        assert!(other.items.is_empty());
        let own = provider.get_card_balance_history("ext-1", &window).await.unwrap();
        assert_eq!(own.items.len(), 1);
        assert_eq!(provider.history_calls(), vec!["ext-2", "ext-1"]);
    }
}
