//! Provider wire types
//!
//! Field names follow the provider's JSON exactly. Card payloads are
//! camelCase while transaction payloads are snake_case. Every response
//! field defaults when absent so a sparse payload still decodes.

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Account
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccountBalanceResponse {
    pub available_balance: f64,
    pub available_to_allocate: f64,
}

// =============================================================================
// Cards
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCardRequest {
    pub card_type: String,
    pub spend_limit: f64,
    pub customer_type: String,
    pub kyc: ConsumerInfo,
    pub preferred_card_name: String,
    pub meta: CardMeta,
}

/// KYC details for a consumer card holder
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConsumerInfo {
    pub first_name: String,
    pub last_name: String,
    pub dob: String,
    pub residential_address: AddressInfo,
    pub id_document_type: String,
    pub id_document_number: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressInfo {
    pub line1: String,
    pub line2: String,
    pub city: String,
    pub country: String,
}

/// Free-form metadata stored on the provider card
///
/// `id` carries our internal card id; it is what the `metadataId` filter matches.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardMeta {
    pub id: String,
    pub email: String,
    pub otp_phone_number: PhoneNumberInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PhoneNumberInfo {
    pub dial_code: i32,
    pub phone_number: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateCardResponse {
    /// Provider-assigned card id
    pub id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProviderCard {
    pub card_name: String,
    pub secondary_card_name: String,
    pub last4: String,
    pub available_credit: String,
    pub status: String,
    pub card_type: String,
    pub physical_card_status: String,
    pub shipping_address: Option<AddressInfo>,
    pub spend_control: SpendControl,
    pub card_design: String,
    pub shipping_info: ShippingInfo,
    pub meta: CardMeta,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpendControl {
    pub spend_control_amount: SpendControlAmount,
    pub spend_control_cap: SpendControlCap,
    pub atm_control: AtmControl,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpendControlAmount {
    pub daily_spent: String,
    pub weekly_spent: String,
    pub monthly_spent: String,
    pub yearly_spent: String,
    #[serde(rename = "AllTimeSpent")]
    pub all_time_spent: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpendControlCap {
    pub transaction_limit: String,
    pub daily_limit: String,
    pub weekly_limit: String,
    pub monthly_limit: String,
    pub yearly_limit: String,
    #[serde(rename = "AllTimeLimit")]
    pub all_time_limit: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AtmControl {
    pub daily_frequency: String,
    pub monthly_frequency: String,
    pub daily_withdrawal: String,
    pub monthly_withdrawal: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShippingInfo {
    #[serde(rename = "bulkShippingID")]
    pub bulk_shipping_id: String,
    pub sku: String,
}

/// Filter for the card listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetCardsParams {
    /// Card status filter, `ACTIVE` when unset
    pub status: Option<String>,
    /// Internal card ids matched against `meta.id`; omitted from the query when empty
    pub metadata_ids: Vec<String>,
}

/// Balance adjustment request. Not supported yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjustCardBalanceParams {}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjustCardBalanceResponse {}

// =============================================================================
// Listings
// =============================================================================

/// Page metadata returned with every listing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Pagination {
    pub total_items: u32,
    pub item_count: u32,
    pub items_per_page: u32,
    pub total_pages: u32,
    pub current_page: u32,
}

/// One page of a provider listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Page<T> {
    #[serde(default)]
    pub items: Vec<T>,
    #[serde(default)]
    pub meta: Pagination,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            meta: Pagination::default(),
        }
    }
}

/// Listing window shared by the transaction and balance-history calls
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListWindow {
    /// Lower bound, date-only granularity
    pub from_date: NaiveDate,
    /// Page size
    pub limit: u32,
}

impl ListWindow {
    pub fn new(from_date: NaiveDate, limit: u32) -> Self {
        Self { from_date, limit }
    }

    pub(crate) fn from_date_param(&self) -> String {
        self.from_date.format("%Y-%m-%d").to_string()
    }
}

// =============================================================================
// Transactions
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderTransaction {
    #[serde(default)]
    pub id: String,
    /// Provider card id (external identifier)
    #[serde(default)]
    pub card_id: String,
    #[serde(rename = "merchant_data", default)]
    pub merchant: Merchant,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub fees: Fees,
    #[serde(default)]
    pub bill_amount: String,
    #[serde(default)]
    pub bill_currency: String,
    #[serde(default)]
    pub transaction_amount: String,
    #[serde(default)]
    pub transaction_currency: String,
    #[serde(default)]
    pub conversion_rate: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub channel: String,
    /// Keeps the offset the provider reported
    #[serde(default = "unset_timestamp")]
    pub created_at: DateTime<FixedOffset>,
}

/// Stand-in when the provider omits a timestamp: the Unix epoch at UTC
fn unset_timestamp() -> DateTime<FixedOffset> {
    DateTime::<Utc>::default().fixed_offset()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Merchant {
    #[serde(rename = "merchant_id")]
    pub id: String,
    #[serde(rename = "merchant_name")]
    pub name: String,
    #[serde(rename = "merchant_city")]
    pub city: String,
    #[serde(rename = "merchant_post_code")]
    pub post_code: String,
    #[serde(rename = "merchant_state")]
    pub state: String,
    #[serde(rename = "merchant_country")]
    pub country: String,
    pub mcc_category: String,
    pub mcc_code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fees {
    pub atm_fees: String,
    pub fx_fees: String,
}

// =============================================================================
// Balance history
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderBalanceChange {
    #[serde(default)]
    pub id: String,
    #[serde(default = "unset_timestamp")]
    pub date: DateTime<FixedOffset>,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub destination: String,
    #[serde(rename = "type", default)]
    pub change_type: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub currency: String,
}

// =============================================================================
// Request bodies and error payload
// =============================================================================

/// Body of the transaction listings
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TransactionQuery {
    pub from_date: String,
    pub limit: u32,
}

/// Body of the balance-history listing; the provider wants `limit` as a string here
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BalanceHistoryQuery {
    pub from_date: String,
    pub limit: String,
}

/// Error payload the provider returns on non-success statuses
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ProviderErrorBody {
    pub code: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_decodes_nested_meta() {
        let json = r#"{
            "cardName": "Jane Doe",
            "last4": "4242",
            "availableCredit": "100.00",
            "status": "ACTIVE",
            "spendControl": {
                "spendControlAmount": {"dailySpent": "1.00", "AllTimeSpent": "9.00"},
                "spendControlCap": {"AllTimeLimit": "500.00"}
            },
            "shippingInfo": {"bulkShippingID": "b-1", "sku": "S"},
            "meta": {
                "id": "abc123",
                "email": "jane@example.com",
                "otpPhoneNumber": {"dialCode": 852, "phoneNumber": "25441194"}
            }
        }"#;
        let card: ProviderCard = serde_json::from_str(json).unwrap();
        assert_eq!(card.card_name, "Jane Doe");
        assert_eq!(card.meta.id, "abc123");
        assert_eq!(card.meta.otp_phone_number.dial_code, 852);
        assert_eq!(card.spend_control.spend_control_amount.all_time_spent, "9.00");
        assert_eq!(card.spend_control.spend_control_cap.all_time_limit, "500.00");
        assert_eq!(card.shipping_info.bulk_shipping_id, "b-1");
        assert!(card.shipping_address.is_none());
    }

    #[test]
    fn test_transaction_decodes_snake_case() {
        let json = r#"{
            "id": "tx-1",
            "card_id": "ext-1",
            "merchant_data": {"merchant_id": "m-1", "merchant_name": "Coffee", "merchant_country": "HKG"},
            "category": "purchase",
            "fees": {"atm_fees": "0", "fx_fees": "0.10"},
            "bill_amount": "12.50",
            "bill_currency": "HKD",
            "status": "Approved",
            "channel": "ECOM",
            "created_at": "2026-10-19T08:30:00Z"
        }"#;
        let tx: ProviderTransaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.card_id, "ext-1");
        assert_eq!(tx.merchant.name, "Coffee");
        assert_eq!(tx.fees.fx_fees, "0.10");
        assert_eq!(tx.created_at.to_rfc3339(), "2026-10-19T08:30:00+00:00");
    }

    #[test]
    fn test_balance_change_type_field() {
        let json = r#"{"id": "bc-1", "date": "2026-10-19T00:00:00Z", "type": "credit", "amount": "5.00"}"#;
        let change: ProviderBalanceChange = serde_json::from_str(json).unwrap();
        assert_eq!(change.change_type, "credit");
        assert_eq!(change.currency, "");
    }

    #[test]
    fn test_timestamps_keep_provider_offset() {
        let json = r#"{"id": "bc-2", "date": "2026-10-19T17:15:00+08:00", "type": "debit"}"#;
        let change: ProviderBalanceChange = serde_json::from_str(json).unwrap();
        assert_eq!(change.date.offset().local_minus_utc(), 8 * 3600);
        assert_eq!(change.date.to_rfc3339(), "2026-10-19T17:15:00+08:00");
    }

    #[test]
    fn test_missing_timestamps_default_to_epoch() {
        let tx: ProviderTransaction = serde_json::from_str(r#"{"id": "tx-9"}"#).unwrap();
        assert_eq!(tx.created_at.to_rfc3339(), "1970-01-01T00:00:00+00:00");

        let change: ProviderBalanceChange = serde_json::from_str(r#"{"id": "bc-9"}"#).unwrap();
        assert_eq!(change.date.timestamp(), 0);
    }

    #[test]
    fn test_page_defaults_when_empty() {
        let page: Page<ProviderCard> = serde_json::from_str("{}").unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.meta, Pagination::default());
    }

    #[test]
    fn test_create_card_request_shape() {
        let request = CreateCardRequest {
            card_type: "Virtual".to_string(),
            customer_type: "Consumer".to_string(),
            preferred_card_name: "Hua Liang".to_string(),
            meta: CardMeta {
                id: "abc123".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["cardType"], "Virtual");
        assert_eq!(value["spendLimit"], 0.0);
        assert_eq!(value["meta"]["id"], "abc123");
        assert_eq!(value["meta"]["otpPhoneNumber"]["dialCode"], 0);
        assert!(value["kyc"]["residentialAddress"].is_object());
    }

    #[test]
    fn test_list_window_date_param() {
        let window = ListWindow::new(NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(), 10);
        assert_eq!(window.from_date_param(), "2026-01-05");
    }
}
