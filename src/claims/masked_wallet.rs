//! Masked-wallet request payload.

use serde::{Deserialize, Serialize};

/// Request for a masked wallet: the first leg of a checkout, asking the
/// wallet provider for obfuscated payment and shipping details.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaskedWalletRequest {
    pub google_transaction_id: String,
    pub merchant_transaction_id: String,
    pub client_id: String,
    pub merchant_name: String,
    pub origin: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number_required: Option<bool>,
    pub pay: Pay,
    pub ship: Ship,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_minimal_addresses: Option<bool>,
}

impl MaskedWalletRequest {
    /// Build a request with the required fields; optional fields start
    /// unset and can be assigned directly.
    pub fn new(
        google_transaction_id: impl Into<String>,
        merchant_transaction_id: impl Into<String>,
        client_id: impl Into<String>,
        merchant_name: impl Into<String>,
        origin: impl Into<String>,
        pay: Pay,
    ) -> Self {
        Self {
            google_transaction_id: google_transaction_id.into(),
            merchant_transaction_id: merchant_transaction_id.into(),
            client_id: client_id.into(),
            merchant_name: merchant_name.into(),
            origin: origin.into(),
            email: None,
            phone_number_required: None,
            pay,
            ship: Ship::default(),
            use_minimal_addresses: None,
        }
    }
}

/// Estimated payment total for a masked-wallet request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pay {
    pub estimated_total_price: String,
    pub currency_code: String,
}

impl Pay {
    pub fn new(estimated_total_price: impl Into<String>, currency_code: impl Into<String>) -> Self {
        Self {
            estimated_total_price: estimated_total_price.into(),
            currency_code: currency_code.into(),
        }
    }
}

/// Shipping marker. Opaque on the wire: serializes as an empty object.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ship {}
