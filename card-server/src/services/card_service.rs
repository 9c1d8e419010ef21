//! Card orchestration
//!
//! Composes the identity store and the provider. Callers only ever see
//! internal card ids; external ids are resolved here and never leak out.

use super::error::{CardServiceError, CardServiceResult, SAVE_MAPPING_STEP};
use crate::db::CardRepository;
use reap_client::{
    AddressInfo, CardMeta, CardProvider, ConsumerInfo, CreateCardRequest, GetCardsParams,
    ListWindow, PhoneNumberInfo, ProviderBalanceChange, ProviderCard, ProviderTransaction,
};
use shared::util::{format_amount, today};
use shared::{
    AccountBalance, BalanceChange, Card, ContactInfo, CreateCardParams, FeeDetails,
    MerchantDetails, Transaction,
};
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;
use tracing::instrument;

/// Page size for every provider listing. Only the first page is fetched.
pub const PAGE_SIZE: u32 = 10;

const CARD_TYPE_VIRTUAL: &str = "Virtual";
const CUSTOMER_TYPE_CONSUMER: &str = "Consumer";

/// Result of a successful card issuance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedCard {
    pub card_id: String,
}

#[derive(Clone)]
pub struct CardService {
    provider: Arc<dyn CardProvider>,
    cards: Arc<dyn CardRepository>,
}

impl CardService {
    pub fn new(provider: Arc<dyn CardProvider>, cards: Arc<dyn CardRepository>) -> Self {
        Self { provider, cards }
    }

    #[instrument(skip(self))]
    pub async fn get_account_balance(&self) -> CardServiceResult<AccountBalance> {
        let balance = self
            .provider
            .get_account_balance()
            .await
            .map_err(CardServiceError::provider("get account balance"))?;

        Ok(AccountBalance {
            available_balance: format_amount(balance.available_balance),
            available_to_allocate: format_amount(balance.available_to_allocate),
        })
    }

    /// Issue a card at the provider, then record the id mapping
    ///
    /// The provider call happens first. If the mapping write then fails the
    /// provider card is orphaned; this is logged with both ids and not retried.
    #[instrument(skip(self, params))]
    pub async fn create_card(&self, params: &CreateCardParams) -> CardServiceResult<CreatedCard> {
        let card_id = new_card_id();

        let created = self
            .provider
            .create_card(&create_card_request(&card_id, params))
            .await
            .map_err(CardServiceError::provider("create provider card"))?;

        if let Err(e) = self.cards.save(&card_id, &created.id).await {
            tracing::error!(
                card_id = %card_id,
                external_id = %created.id,
                error = %e,
                "Provider card created but id mapping was not saved"
            );
            return Err(CardServiceError::store(SAVE_MAPPING_STEP)(e));
        }

        tracing::info!(card_id = %card_id, "Card created");
        Ok(CreatedCard { card_id })
    }

    #[instrument(skip(self))]
    pub async fn get_card(&self, card_id: &str) -> CardServiceResult<Card> {
        let external_id = self.resolve_external(card_id).await?;

        let card = self
            .provider
            .get_card(&external_id)
            .await
            .map_err(CardServiceError::provider("get provider card"))?;

        Ok(to_card(card))
    }

    #[instrument(skip(self))]
    pub async fn list_cards(&self) -> CardServiceResult<Vec<Card>> {
        let ids = self
            .cards
            .list_internal_ids()
            .await
            .map_err(CardServiceError::store("list card ids"))?;

        let page = self
            .provider
            .get_cards(&GetCardsParams {
                status: None,
                metadata_ids: ids,
            })
            .await
            .map_err(CardServiceError::provider("list provider cards"))?;

        Ok(page.items.into_iter().map(to_card).collect())
    }

    #[instrument(skip(self))]
    pub async fn list_card_transactions(
        &self,
        card_id: &str,
    ) -> CardServiceResult<Vec<Transaction>> {
        let external_id = self.resolve_external(card_id).await?;

        let page = self
            .provider
            .get_card_transactions(&external_id, &first_page())
            .await
            .map_err(CardServiceError::provider("list provider card transactions"))?;

        Ok(page
            .items
            .into_iter()
            .map(|tx| to_transaction(card_id.to_string(), tx))
            .collect())
    }

    /// Account-wide transactions for cards we know about
    ///
    /// Transactions on cards with no local mapping are dropped, not reported.
    #[instrument(skip(self))]
    pub async fn list_transactions(&self) -> CardServiceResult<Vec<Transaction>> {
        let page = self
            .provider
            .get_all_transactions(&first_page())
            .await
            .map_err(CardServiceError::provider("list provider transactions"))?;

        let external_ids: Vec<String> = page
            .items
            .iter()
            .map(|tx| tx.card_id.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let mapping: HashMap<String, String> = self
            .cards
            .resolve_external_to_internal_map(&external_ids)
            .await
            .map_err(CardServiceError::store("resolve internal card ids"))?;

        let total = page.items.len();
        let transactions: Vec<Transaction> = page
            .items
            .into_iter()
            .filter_map(|tx| {
                let card_id = mapping.get(&tx.card_id)?.clone();
                Some(to_transaction(card_id, tx))
            })
            .collect();

        let dropped = total - transactions.len();
        if dropped > 0 {
            tracing::debug!(dropped, "Skipped transactions on unmapped cards");
        }

        Ok(transactions)
    }

    #[instrument(skip(self))]
    pub async fn list_card_balance_history(
        &self,
        card_id: &str,
    ) -> CardServiceResult<Vec<BalanceChange>> {
        let external_id = self.resolve_external(card_id).await?;

        let page = self
            .provider
            .get_card_balance_history(&external_id, &first_page())
            .await
            .map_err(CardServiceError::provider("list provider balance history"))?;

        Ok(page.items.into_iter().map(to_balance_change).collect())
    }

    async fn resolve_external(&self, card_id: &str) -> CardServiceResult<String> {
        self.cards
            .resolve_external(card_id)
            .await
            .map_err(CardServiceError::store("resolve external card id"))
    }
}

/// 32 hex chars; collisions surface as a duplicate on save
fn new_card_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

fn first_page() -> ListWindow {
    ListWindow::new(today(), PAGE_SIZE)
}

fn create_card_request(card_id: &str, params: &CreateCardParams) -> CreateCardRequest {
    CreateCardRequest {
        card_type: CARD_TYPE_VIRTUAL.to_string(),
        spend_limit: 0.0,
        customer_type: CUSTOMER_TYPE_CONSUMER.to_string(),
        kyc: ConsumerInfo {
            first_name: params.first_name.clone(),
            last_name: params.last_name.clone(),
            dob: params.dob.clone(),
            residential_address: AddressInfo {
                line1: params.address.line1.clone(),
                line2: params.address.line2.clone(),
                city: params.address.city.clone(),
                country: params.address.country_code.clone(),
            },
            id_document_type: params.id_document.doc_type.clone(),
            id_document_number: params.id_document.number.clone(),
        },
        preferred_card_name: params.preferred_card_name(),
        meta: CardMeta {
            id: card_id.to_string(),
            email: params.contact_info.email.clone(),
            otp_phone_number: PhoneNumberInfo {
                dial_code: params.contact_info.dial_code,
                phone_number: params.contact_info.phone_number.clone(),
            },
        },
    }
}

// Contact fields come from the provider's metadata, not from local state.
fn to_card(card: ProviderCard) -> Card {
    Card {
        id: card.meta.id,
        name: card.card_name,
        last4: card.last4,
        available_credit: card.available_credit,
        contact_info: ContactInfo {
            email: card.meta.email,
            dial_code: card.meta.otp_phone_number.dial_code,
            phone_number: card.meta.otp_phone_number.phone_number,
        },
    }
}

fn to_transaction(card_id: String, tx: ProviderTransaction) -> Transaction {
    Transaction {
        id: tx.id,
        card_id,
        category: tx.category,
        status: tx.status,
        channel: tx.channel,
        amount: tx.bill_amount,
        currency: tx.bill_currency,
        fees: FeeDetails {
            atm_fees: tx.fees.atm_fees,
            fx_fees: tx.fees.fx_fees,
        },
        merchant: MerchantDetails {
            id: tx.merchant.id,
            name: tx.merchant.name,
            city: tx.merchant.city,
            country: tx.merchant.country,
        },
        created_at: tx.created_at,
    }
}

fn to_balance_change(change: ProviderBalanceChange) -> BalanceChange {
    BalanceChange {
        id: change.id,
        date: change.date,
        change_type: change.change_type,
        status: change.status,
        amount: change.amount,
        currency: change.currency,
    }
}
