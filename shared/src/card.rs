//! Card domain entities
//!
//! These are projections of provider data keyed by the internal card id.
//! Only the id mapping is ever persisted; everything else is fetched live.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Momentary snapshot of the account balance, formatted to two decimals
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountBalance {
    pub available_balance: String,
    pub available_to_allocate: String,
}

/// Postal address of the card holder
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub line1: String,
    pub line2: String,
    pub city: String,
    pub country_code: String,
}

/// Contact details used for OTP delivery
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub dial_code: i32,
    pub phone_number: String,
}

/// Identity document presented for KYC
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdDocument {
    pub doc_type: String,
    pub number: String,
}

/// Input for issuing a new consumer virtual card
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCardParams {
    pub first_name: String,
    pub last_name: String,
    /// Date of birth, `YYYY-MM-DD`
    pub dob: String,
    pub address: Address,
    pub contact_info: ContactInfo,
    pub id_document: IdDocument,
}

impl CreateCardParams {
    /// Check required fields before anything is sent to the provider
    pub fn validate(&self) -> AppResult<()> {
        let required = [
            ("firstName", &self.first_name),
            ("lastName", &self.last_name),
            ("dob", &self.dob),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(AppError::validation(format!("{field} is required"))
                    .with_detail("field", field));
            }
        }

        if chrono::NaiveDate::parse_from_str(&self.dob, "%Y-%m-%d").is_err() {
            return Err(AppError::validation("dob must be formatted as YYYY-MM-DD")
                .with_detail("field", "dob"));
        }

        let email = self.contact_info.email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(AppError::validation("A valid email is required")
                .with_detail("field", "otp.email"));
        }

        Ok(())
    }

    /// Name printed on the card
    pub fn preferred_card_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A card as seen by API callers; `id` is always the internal identifier
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub name: String,
    pub last4: String,
    pub available_credit: String,
    pub contact_info: ContactInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerchantDetails {
    pub id: String,
    pub name: String,
    pub city: String,
    pub country: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeDetails {
    pub atm_fees: String,
    pub fx_fees: String,
}

/// Card transaction stamped with the internal card id it belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub card_id: String,
    pub category: String,
    pub status: String,
    pub channel: String,
    pub amount: String,
    pub currency: String,
    pub fees: FeeDetails,
    pub merchant: MerchantDetails,
    /// In the offset the provider reported
    pub created_at: DateTime<FixedOffset>,
}

/// A single movement in a card's balance history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceChange {
    pub id: String,
    pub date: DateTime<FixedOffset>,
    pub change_type: String,
    pub status: String,
    pub amount: String,
    pub currency: String,
}
