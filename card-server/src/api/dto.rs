//! Request and response bodies

use serde::{Deserialize, Serialize};
use shared::{
    AccountBalance, Address, BalanceChange, Card, ContactInfo, CreateCardParams, IdDocument,
    Transaction,
};

const TRANSACTION_DATE_FORMAT: &str = "%Y-%m-%d";
const BALANCE_CHANGE_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// ========== Requests ==========

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateCardRequest {
    pub first_name: String,
    pub last_name: String,
    pub dob: String,
    pub address: AddressRequest,
    pub id_document: IdDocumentRequest,
    pub otp: OtpRequest,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AddressRequest {
    pub line1: String,
    pub line2: String,
    pub city: String,
    pub country: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IdDocumentRequest {
    pub id_type: String,
    pub id_number: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OtpRequest {
    pub email: String,
    pub dial_code: i32,
    pub phone_number: String,
}

impl From<CreateCardRequest> for CreateCardParams {
    fn from(req: CreateCardRequest) -> Self {
        Self {
            first_name: req.first_name,
            last_name: req.last_name,
            dob: req.dob,
            address: Address {
                line1: req.address.line1,
                line2: req.address.line2,
                city: req.address.city,
                country_code: req.address.country,
            },
            contact_info: ContactInfo {
                email: req.otp.email,
                dial_code: req.otp.dial_code,
                phone_number: req.otp.phone_number,
            },
            id_document: IdDocument {
                doc_type: req.id_document.id_type,
                number: req.id_document.id_number,
            },
        }
    }
}

// ========== Responses ==========

#[derive(Debug, Serialize)]
pub struct AccountBalanceResponse {
    pub balance: String,
    pub available: String,
}

impl From<AccountBalance> for AccountBalanceResponse {
    fn from(b: AccountBalance) -> Self {
        Self {
            balance: b.available_balance,
            available: b.available_to_allocate,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCardResponse {
    pub card_id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDetails {
    pub email: String,
    pub dial_code: i32,
    pub phone_number: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardResponse {
    pub id: String,
    pub name: String,
    pub last4: String,
    pub available_credit: String,
    pub contact_info: ContactDetails,
}

impl From<Card> for CardResponse {
    fn from(c: Card) -> Self {
        Self {
            id: c.id,
            name: c.name,
            last4: c.last4,
            available_credit: c.available_credit,
            contact_info: ContactDetails {
                email: c.contact_info.email,
                dial_code: c.contact_info.dial_code,
                phone_number: c.contact_info.phone_number,
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ListCardsResponse {
    pub cards: Vec<CardResponse>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeResponse {
    pub atm_fees: String,
    pub fx_fees: String,
}

#[derive(Debug, Serialize)]
pub struct MerchantResponse {
    pub name: String,
    pub city: String,
    pub country: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResponse {
    pub id: String,
    pub card_id: String,
    pub category: String,
    pub status: String,
    pub channel: String,
    pub amount: String,
    pub currency: String,
    pub fees: FeeResponse,
    pub merchant: MerchantResponse,
    /// `YYYY-MM-DD`
    pub date: String,
}

impl From<Transaction> for TransactionResponse {
    fn from(tx: Transaction) -> Self {
        Self {
            id: tx.id,
            card_id: tx.card_id,
            category: tx.category,
            status: tx.status,
            channel: tx.channel,
            amount: tx.amount,
            currency: tx.currency,
            fees: FeeResponse {
                atm_fees: tx.fees.atm_fees,
                fx_fees: tx.fees.fx_fees,
            },
            merchant: MerchantResponse {
                name: tx.merchant.name,
                city: tx.merchant.city,
                country: tx.merchant.country,
            },
            date: tx.created_at.format(TRANSACTION_DATE_FORMAT).to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ListTransactionsResponse {
    pub transactions: Vec<TransactionResponse>,
}

impl From<Vec<Transaction>> for ListTransactionsResponse {
    fn from(txs: Vec<Transaction>) -> Self {
        Self {
            transactions: txs.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BalanceChangeResponse {
    pub id: String,
    /// `YYYY-MM-DD HH:MM:SS`
    pub date: String,
    #[serde(rename = "type")]
    pub change_type: String,
    pub status: String,
    pub amount: String,
    pub currency: String,
}

impl From<BalanceChange> for BalanceChangeResponse {
    fn from(c: BalanceChange) -> Self {
        Self {
            id: c.id,
            date: c.date.format(BALANCE_CHANGE_DATE_FORMAT).to_string(),
            change_type: c.change_type,
            status: c.status,
            amount: c.amount,
            currency: c.currency,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListBalanceChangesResponse {
    pub balance_changes: Vec<BalanceChangeResponse>,
}
